//! Edge list ingestion.
//!
//! Input is a stream of whitespace-separated integers read in pairs. Reading
//! stops at end of input or at the first token that is not an `i32`; a
//! trailing unpaired integer is ignored. Pairs naming a vertex outside the grid
//! are dropped without affecting the rest.

use std::path::Path;

use anyhow::{Context, Result};

use crate::types::{Edge, VertexId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeList {
    pub edges: Vec<Edge>,
    /// Well-formed pairs rejected for an out-of-range endpoint.
    pub dropped: usize,
    /// True if reading stopped at a malformed token rather than end of input.
    pub stopped_early: bool,
}

impl EdgeList {
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

fn vertex_id(v: i32, vertex_count: u32) -> Option<VertexId> {
    u32::try_from(v).ok().filter(|&id| id < vertex_count)
}

pub fn parse_edges(text: &str, vertex_count: u32) -> EdgeList {
    let mut list = EdgeList::default();
    let mut tokens = text.split_whitespace();

    loop {
        let Some(a) = tokens.next() else {
            break;
        };
        let Ok(u) = a.parse::<i32>() else {
            list.stopped_early = true;
            break;
        };
        let Some(b) = tokens.next() else {
            break;
        };
        let Ok(v) = b.parse::<i32>() else {
            list.stopped_early = true;
            break;
        };
        match (vertex_id(u, vertex_count), vertex_id(v, vertex_count)) {
            (Some(u), Some(v)) => list.edges.push(Edge::new(u, v)),
            _ => list.dropped += 1,
        }
    }

    if list.dropped > 0 {
        log::debug!(
            "dropped {} edge(s) referencing vertices outside 0..{}",
            list.dropped,
            vertex_count
        );
    }
    if list.stopped_early {
        log::debug!("edge list ended at a malformed token");
    }
    list
}

/// Read and parse the edge file at `path`.
pub fn load_edges(path: impl AsRef<Path>, vertex_count: u32) -> Result<EdgeList> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to open edge file {}", path.display()))?;
    Ok(parse_edges(&text, vertex_count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pairs_across_lines() {
        let list = parse_edges("0 1\n1 2\n\n  2\t3\n", 4);
        assert_eq!(
            list.edges,
            vec![Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 3)]
        );
        assert_eq!(list.dropped, 0);
        assert!(!list.stopped_early);
    }

    #[test]
    fn pairs_may_span_lines() {
        let list = parse_edges("0\n1 2\n3", 4);
        assert_eq!(list.edges, vec![Edge::new(0, 1), Edge::new(2, 3)]);
    }

    #[test]
    fn out_of_range_pairs_are_dropped() {
        let list = parse_edges("0 1 4 0 -1 2 2 3", 4);
        assert_eq!(list.edges, vec![Edge::new(0, 1), Edge::new(2, 3)]);
        assert_eq!(list.dropped, 2);
    }

    #[test]
    fn malformed_token_stops_reading() {
        let list = parse_edges("0 1 x 2 2 3", 4);
        assert_eq!(list.edges, vec![Edge::new(0, 1)]);
        assert!(list.stopped_early);
    }

    #[test]
    fn malformed_trailing_token_is_reported() {
        let list = parse_edges("0 1 x", 4);
        assert_eq!(list.edges, vec![Edge::new(0, 1)]);
        assert!(list.stopped_early);
    }

    #[test]
    fn token_beyond_i32_stops_reading() {
        let list = parse_edges("0 1 3000000000 2 2 3", 4);
        assert_eq!(list.edges, vec![Edge::new(0, 1)]);
        assert_eq!(list.dropped, 0);
        assert!(list.stopped_early);
    }

    #[test]
    fn trailing_unpaired_token_is_ignored() {
        let list = parse_edges("0 1 2", 4);
        assert_eq!(list.edges, vec![Edge::new(0, 1)]);
        assert!(!list.stopped_early);
    }

    #[test]
    fn empty_input_yields_no_edges() {
        let list = parse_edges("", 4);
        assert!(list.is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = std::env::temp_dir().join("gridgraph-definitely-missing-edges.txt");
        let err = load_edges(&path, 4).unwrap_err();
        assert!(format!("{:#}", err).contains("failed to open edge file"));
    }
}
