use std::collections::{HashSet, VecDeque};
use std::fmt::Write as _;
use std::path::Path;

use super::model::{AdjacencyList, Company, EdgeType};
use super::{GraphError, Result};

/// Number of distinct companies reachable from `start` in at most `hops`
/// steps, following only edges whose type is in `allowed`. The start
/// company itself is not counted.
pub fn reachable_count(
    graph: &AdjacencyList,
    start: &Company,
    hops: usize,
    allowed: &[EdgeType],
) -> usize {
    let allowed: HashSet<EdgeType> = allowed.iter().copied().collect();
    let mut visited: HashSet<&Company> = HashSet::from([start]);
    let mut queue: VecDeque<(&Company, usize)> = VecDeque::from([(start, 0)]);
    let mut count = 0;

    while let Some((company, depth)) = queue.pop_front() {
        if depth >= hops {
            continue;
        }
        let Some(connections) = graph.get(company) else {
            continue;
        };
        for connection in connections {
            if allowed.contains(&connection.edge) && visited.insert(&connection.head) {
                queue.push_back((&connection.head, depth + 1));
                count += 1;
            }
        }
    }
    count
}

/// Histogram of reachable counts: entry `k` is the number of companies that
/// reach exactly `k` others within `hops`. The last entry is never zero.
pub fn degree_distribution(graph: &AdjacencyList, hops: usize, allowed: &[EdgeType]) -> Vec<u64> {
    let mut distribution: Vec<u64> = Vec::new();
    for company in graph.keys() {
        let count = reachable_count(graph, company, hops, allowed);
        if count >= distribution.len() {
            distribution.resize(count + 1, 0);
        }
        distribution[count] += 1;
    }
    distribution
}

/// Write a distribution as a count file: one integer per line.
pub fn write_distribution(distribution: &[u64], path: &Path) -> Result<()> {
    let mut out = String::with_capacity(distribution.len() * 4);
    for n in distribution {
        let _ = writeln!(out, "{n}");
    }
    std::fs::write(path, out).map_err(|source| GraphError::Io {
        context: format!("writing {}", path.display()),
        source,
    })?;
    log::info!("Wrote {} entries to {}", distribution.len(), path.display());
    Ok(())
}

/// File name used for the distribution at a given distance.
pub fn distribution_file_name(hops: usize) -> String {
    format!("Distance_{hops}_Distribution.txt")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::model::read_links;

    // Chain A - B - C - D plus a competitor edge D - E.
    const CHAIN: &str = "\
id,tail,head,type,updated,tail_domain,head_domain,source
1,A,B,customer,2021,a.com,b.com,x
2,B,C,supplier,2021,b.com,c.com,x
3,C,D,partnership,2021,c.com,d.com,x
4,D,E,competitor,2021,d.com,e.com,x
";

    fn company(graph: &AdjacencyList, name: &str) -> Company {
        graph.keys().find(|c| c.name == name).unwrap().clone()
    }

    #[test]
    fn counts_within_hop_limit() {
        let graph = read_links(CHAIN.as_bytes()).unwrap();
        let a = company(&graph, "A");
        assert_eq!(reachable_count(&graph, &a, 0, &EdgeType::ALL), 0);
        assert_eq!(reachable_count(&graph, &a, 1, &EdgeType::ALL), 1);
        assert_eq!(reachable_count(&graph, &a, 2, &EdgeType::ALL), 2);
        assert_eq!(reachable_count(&graph, &a, 10, &EdgeType::ALL), 4);
    }

    #[test]
    fn respects_allowed_edge_types() {
        let graph = read_links(CHAIN.as_bytes()).unwrap();
        let c = company(&graph, "C");
        let trade = [EdgeType::Customer, EdgeType::Supplier];
        // C reaches B (customer side of 2), then A; D is a partner.
        assert_eq!(reachable_count(&graph, &c, 5, &trade), 2);
    }

    #[test]
    fn distribution_of_first_degree() {
        let graph = read_links(CHAIN.as_bytes()).unwrap();
        // A and E have one neighbour, B, C and D have two.
        assert_eq!(degree_distribution(&graph, 1, &EdgeType::ALL), vec![0, 2, 3]);
    }

    #[test]
    fn writes_one_count_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(distribution_file_name(1));
        write_distribution(&[0, 2, 3], &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "0\n2\n3\n");
        assert!(path.ends_with("Distance_1_Distribution.txt"));
    }
}
