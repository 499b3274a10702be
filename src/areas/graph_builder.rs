//! Graph construction from commit records
//!
//! Records arrive in topological order, newest commit first. The builder
//! turns each one into a node with edges to its parents and remembers the
//! first commit seen as the end node: the newest commit, where the longest
//! path search starts.

use crate::areas::graph_store::GraphStore;
use crate::artifacts::debug_log;
use crate::artifacts::graph::node_id::NodeId;
use crate::artifacts::record::commit_record::CommitRecord;
use std::io::BufRead;

/// A fully built commit graph
#[derive(Debug, Clone, Default)]
pub struct CommitGraph {
    store: GraphStore,
    end_node: Option<NodeId>,
}

impl CommitGraph {
    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut GraphStore {
        &mut self.store
    }

    /// The newest commit, `None` if no record was read
    pub fn end_node(&self) -> Option<NodeId> {
        self.end_node
    }
}

#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: CommitGraph,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one record: its node, the end node if it is the first record, and
    /// one edge per parent in listed order
    pub fn add_record(&mut self, record: &CommitRecord) -> NodeId {
        let store = &mut self.graph.store;
        let node_id = store.get_or_create(record.name(), record.timestamp());

        if self.graph.end_node.is_none() {
            self.graph.end_node = Some(node_id);
        }

        for parent in record.parents() {
            debug_log!("{} parent of {}", parent, record.name());
            let parent_id = store.get_or_create(parent, None);
            store.add_edge(node_id, parent_id);
        }

        node_id
    }

    /// Add every record read from `reader`, skipping blank lines
    pub fn read_from<R: BufRead>(&mut self, reader: R) -> anyhow::Result<()> {
        for line in reader.lines() {
            let line = line?;
            match CommitRecord::parse(&line) {
                Some(record) => {
                    self.add_record(&record);
                }
                None => {
                    debug_log!("Skipping blank line");
                }
            }
        }

        Ok(())
    }

    pub fn finish(self) -> CommitGraph {
        self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn build(input: &str) -> CommitGraph {
        let mut builder = GraphBuilder::new();
        builder
            .read_from(Cursor::new(input.to_string()))
            .expect("Reading from memory cannot fail");
        builder.finish()
    }

    fn parent_names(graph: &CommitGraph, name: &str) -> Vec<String> {
        let store = graph.store();
        let node_id = store.get(name).expect("Commit should exist");
        store
            .node(node_id)
            .edges()
            .iter()
            .map(|&parent| store.node(parent).name().to_string())
            .collect()
    }

    #[test]
    fn first_record_becomes_end_node() {
        let graph = build("C3 300 C2\nC2 200 C1\nC1 100\n");

        let end = graph.end_node().expect("End node should be set");
        assert_eq!(graph.store().node(end).name(), "C3");
        assert_eq!(graph.store().len(), 3);
    }

    #[test]
    fn edges_point_to_parents_in_listed_order() {
        let graph = build("D 400 B C\nB 300 A\nC 200 A\nA 100\n");

        assert_eq!(parent_names(&graph, "D"), vec!["B", "C"]);
        assert_eq!(parent_names(&graph, "B"), vec!["A"]);
        assert_eq!(parent_names(&graph, "C"), vec!["A"]);
        assert!(parent_names(&graph, "A").is_empty());
    }

    #[test]
    fn parent_only_commit_keeps_unset_timestamp() {
        let graph = build("Y 500 Z\n");

        let store = graph.store();
        let z = store.get("Z").expect("Z should exist");
        assert_eq!(store.node(z).timestamp(), None);
    }

    #[test]
    fn later_primary_record_back_fills_timestamp() {
        let graph = build("Y 500 Z\nZ 400\nX 300 Z\n");

        let store = graph.store();
        let z = store.get("Z").expect("Z should exist");
        assert_eq!(store.node(z).timestamp(), Some(400));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn repeated_record_adds_edges_without_duplicating_node() {
        let graph = build("M 10 A\nM 11 B\nA 1\nB 2\n");

        let store = graph.store();
        let m = store.get("M").expect("M should exist");
        assert_eq!(store.node(m).timestamp(), Some(11));
        assert_eq!(parent_names(&graph, "M"), vec!["A", "B"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let graph = build("\n   \nX 50\n\n");

        let end = graph.end_node().expect("End node should be set");
        assert_eq!(graph.store().node(end).name(), "X");
        assert_eq!(graph.store().len(), 1);
    }

    #[test]
    fn empty_input_has_no_end_node() {
        let graph = build("");

        assert_eq!(graph.end_node(), None);
        assert!(graph.store().is_empty());
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let mut builder = GraphBuilder::new();

        let result = builder.read_from(Cursor::new(vec![0xff, 0xfe, b'\n']));

        assert!(result.is_err());
    }
}
