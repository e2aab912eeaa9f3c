use std::collections::HashMap;
use std::fmt::Write as _;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use super::{GraphError, Result};

// ---------------------------------------------------------------------------
// Nodes and edges
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Company {
    pub name: String,
    pub domain: String,
}

/// Kind of business relationship, seen from the tail company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeType {
    Customer,
    Supplier,
    Investor,
    Investee,
    Partner,
    Competitor,
    None,
}

impl EdgeType {
    /// Every real relationship kind (everything except [`EdgeType::None`]).
    pub const ALL: [EdgeType; 6] = [
        EdgeType::Customer,
        EdgeType::Supplier,
        EdgeType::Investor,
        EdgeType::Investee,
        EdgeType::Partner,
        EdgeType::Competitor,
    ];

    /// Parse the `type` column of the links file. Unknown labels map to
    /// [`EdgeType::None`].
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "customer" => EdgeType::Customer,
            "supplier" => EdgeType::Supplier,
            "investment" => EdgeType::Investor,
            "investee" => EdgeType::Investee,
            "partnership" => EdgeType::Partner,
            "competitor" => EdgeType::Competitor,
            _ => EdgeType::None,
        }
    }

    /// The same relationship seen from the head company.
    pub fn reversed(self) -> Self {
        match self {
            EdgeType::Customer => EdgeType::Supplier,
            EdgeType::Supplier => EdgeType::Customer,
            EdgeType::Investor => EdgeType::Investee,
            EdgeType::Investee => EdgeType::Investor,
            EdgeType::Partner | EdgeType::Competitor | EdgeType::None => self,
        }
    }
}

/// A directed relationship `tail → head`.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub id: String,
    pub tail: Company,
    pub head: Company,
    pub edge: EdgeType,
    pub update_time: String,
}

impl Connection {
    /// The edge pointing the other way, with the relationship mirrored.
    pub fn reciprocal(&self) -> Connection {
        Connection {
            id: format!("{}-RECI", self.id),
            tail: self.head.clone(),
            head: self.tail.clone(),
            edge: self.edge.reversed(),
            update_time: self.update_time.clone(),
        }
    }
}

pub type AdjacencyList = HashMap<Company, Vec<Connection>>;

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Minimum number of columns in a links record.
const LINK_FIELDS: usize = 8;

/// Placeholder the links export uses for missing cells.
const MISSING: &str = "N/A";

/// Build the graph from a links CSV file (header row required).
pub fn load_links(path: &Path) -> Result<AdjacencyList> {
    let file = std::fs::File::open(path).map_err(|source| GraphError::Io {
        context: format!("opening {}", path.display()),
        source,
    })?;
    let graph = read_links(file)?;
    log::info!(
        "Loaded {} companies from {}",
        graph.len(),
        path.display()
    );
    Ok(graph)
}

/// Build the graph from any CSV source. Each stored connection is paired
/// with its reciprocal, so the graph is symmetric.
///
/// Column layout: `id, tail name, head name, type, update time,
/// tail domain, head domain, …`. Short rows, rows containing `N/A`, and
/// rows whose type is not a known relationship are skipped.
pub fn read_links<R: Read>(source: R) -> Result<AdjacencyList> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);
    let mut graph = AdjacencyList::new();
    let mut skipped = 0usize;

    for result in reader.records() {
        let record = result?;
        let parts: Vec<&str> = record.iter().collect();

        if parts.len() < LINK_FIELDS || parts.iter().any(|&p| p == MISSING) {
            skipped += 1;
            continue;
        }

        let edge = EdgeType::from_label(parts[3]);
        if edge == EdgeType::None {
            skipped += 1;
            continue;
        }

        let connection = Connection {
            id: parts[0].to_string(),
            tail: Company {
                name: parts[1].to_string(),
                domain: parts[5].to_string(),
            },
            head: Company {
                name: parts[2].to_string(),
                domain: parts[6].to_string(),
            },
            edge,
            update_time: parts[4].to_string(),
        };

        let reciprocal = connection.reciprocal();
        graph
            .entry(connection.tail.clone())
            .or_default()
            .push(connection);
        graph
            .entry(reciprocal.tail.clone())
            .or_default()
            .push(reciprocal);
    }

    if skipped > 0 {
        log::debug!("Skipped {skipped} incomplete or untyped link records");
    }
    Ok(graph)
}

// ---------------------------------------------------------------------------
// Dump
// ---------------------------------------------------------------------------

/// Human-readable listing of every company and its outgoing connections.
pub fn render_graph(graph: &AdjacencyList) -> String {
    let mut companies: Vec<&Company> = graph.keys().collect();
    companies.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.domain.cmp(&b.domain)));

    let mut out = String::new();
    for company in companies {
        let _ = writeln!(out, "Company: {}, Domain: {}", company.name, company.domain);
        for c in &graph[company] {
            let _ = writeln!(
                out,
                "   Connection ID: {}, Tail Node: {}, Head Node: {}, Edge Type: {:?}, Update Time: {}",
                c.id, c.tail.name, c.head.name, c.edge, c.update_time
            );
        }
    }
    out
}

pub fn write_graph(graph: &AdjacencyList, path: &Path) -> Result<()> {
    std::fs::write(path, render_graph(graph)).map_err(|source| GraphError::Io {
        context: format!("writing {}", path.display()),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const LINKS: &str = "\
id,tail,head,type,updated,tail_domain,head_domain,source
1,Acme,Globex,customer,2021-04-01,acme.com,globex.com,x
2,Globex,Initech,Investment,2021-05-01,globex.com,initech.com,x
3,Acme,Initech,N/A,2021-05-01,acme.com,initech.com,x
4,Acme,Hooli,rumour,2021-05-01,acme.com,hooli.com,x
5,Acme,Hooli
";

    #[rstest]
    #[case("customer", EdgeType::Customer)]
    #[case("Supplier", EdgeType::Supplier)]
    #[case("investment", EdgeType::Investor)]
    #[case("investee", EdgeType::Investee)]
    #[case("PARTNERSHIP", EdgeType::Partner)]
    #[case("competitor", EdgeType::Competitor)]
    #[case("some other value", EdgeType::None)]
    fn parses_edge_labels(#[case] label: &str, #[case] expected: EdgeType) {
        assert_eq!(EdgeType::from_label(label), expected);
    }

    #[test]
    fn reciprocal_mirrors_connection() {
        let original = Connection {
            id: "123".to_string(),
            tail: Company { name: "A".into(), domain: "a.com".into() },
            head: Company { name: "B".into(), domain: "b.com".into() },
            edge: EdgeType::Customer,
            update_time: "2021-04-01".to_string(),
        };
        let reciprocal = original.reciprocal();
        assert_eq!(reciprocal.id, "123-RECI");
        assert_eq!(reciprocal.tail, original.head);
        assert_eq!(reciprocal.head, original.tail);
        assert_eq!(reciprocal.edge, EdgeType::Supplier);
        assert_eq!(reciprocal.reciprocal().edge, EdgeType::Customer);
    }

    #[test]
    fn skips_unusable_records() {
        let graph = read_links(LINKS.as_bytes()).unwrap();
        // Only records 1 and 2 survive: Acme, Globex, Initech.
        assert_eq!(graph.len(), 3);

        let globex = graph
            .keys()
            .find(|c| c.name == "Globex")
            .unwrap();
        let edges: Vec<EdgeType> = graph[globex].iter().map(|c| c.edge).collect();
        assert_eq!(edges, vec![EdgeType::Supplier, EdgeType::Investor]);
    }

    #[test]
    fn render_lists_every_company() {
        let graph = read_links(LINKS.as_bytes()).unwrap();
        let text = render_graph(&graph);
        assert!(text.starts_with("Company: Acme, Domain: acme.com\n"));
        assert!(text.contains("Connection ID: 1-RECI, Tail Node: Globex, Head Node: Acme"));
        assert_eq!(text.matches("Company: ").count(), 3);
    }
}
