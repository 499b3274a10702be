//! Graph store
//!
//! Owns every node of the commit graph for the duration of a run. Nodes are
//! kept in an arena and addressed by `NodeId`; a name index gives amortized
//! constant time lookup and insertion.
//!
//! ## Get-or-create
//!
//! A commit may be mentioned as someone's parent before (or without) its own
//! record being read. `get_or_create` therefore both creates and updates:
//! a known timestamp overwrites the stored one, an unset timestamp leaves it
//! alone.

use crate::artifacts::graph::Timestamp;
use crate::artifacts::graph::node::Node;
use crate::artifacts::graph::node_id::NodeId;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    nodes: Vec<Node>,
    index: HashMap<String, NodeId>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the node for `name`, creating it if needed
    ///
    /// # Arguments
    ///
    /// * `name` - Commit identifier
    /// * `timestamp` - Timestamp from the commit's own record, or `None` when
    ///   the commit is only referenced as a parent
    pub fn get_or_create(&mut self, name: &str, timestamp: Option<Timestamp>) -> NodeId {
        if let Some(&node_id) = self.index.get(name) {
            if let Some(timestamp) = timestamp {
                self.nodes[node_id.index()].set_timestamp(timestamp);
            }
            return node_id;
        }

        let node_id = NodeId::new(self.nodes.len());
        self.nodes.push(Node::new(name.to_string(), timestamp));
        self.index.insert(name.to_string(), node_id);
        node_id
    }

    /// Return the node for a commit that is already known
    pub fn get(&self, name: &str) -> anyhow::Result<NodeId> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("Unknown commit: {}", name))
    }

    /// Add a parent edge from `from` to `to`
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) {
        self.nodes[from.index()].add_edge(to);
    }

    pub fn node(&self, node_id: NodeId) -> &Node {
        &self.nodes[node_id.index()]
    }

    pub fn node_mut(&mut self, node_id: NodeId) -> &mut Node {
        &mut self.nodes[node_id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId::new(index), node))
    }
}
