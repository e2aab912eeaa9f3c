//! Build per-distance degree distributions from a company links CSV.
//!
//! Each output file holds one count per line and can be fed directly to
//! `powerlaw-scope`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use powerlaw_scope::graph::degree::{degree_distribution, distribution_file_name, write_distribution};
use powerlaw_scope::graph::model::{load_links, write_graph, EdgeType};

#[derive(Parser, Debug)]
#[command(version, about = "Write degree distributions of a company relationship graph")]
struct Args {
    /// Links CSV (header row; id, tail, head, type, update time, tail domain, head domain, ...)
    #[arg(long, default_value = "links.csv")]
    links: PathBuf,

    /// Directory for the Distance_<d>_Distribution.txt files
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Write distributions for every distance from 1 up to this one
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u16).range(1..))]
    max_distance: u16,

    /// Also write a readable dump of the graph to this file
    #[arg(long)]
    dump: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let graph = load_links(&args.links)
        .with_context(|| format!("building graph from {}", args.links.display()))?;
    println!("Graph has been created ({} companies).", graph.len());

    if let Some(dump) = &args.dump {
        write_graph(&graph, dump).context("writing graph dump")?;
        println!("Graph has been written to {}.", dump.display());
    }

    for hops in 1..=usize::from(args.max_distance) {
        let distribution = degree_distribution(&graph, hops, &EdgeType::ALL);
        let path = args.out_dir.join(distribution_file_name(hops));
        write_distribution(&distribution, &path)
            .with_context(|| format!("writing distance {hops} distribution"))?;
        println!("Distance {hops}: {}", path.display());
    }

    Ok(())
}
