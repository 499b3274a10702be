//! Commit graph node
//!
//! One node exists per distinct commit identifier. Besides its own data
//! (name, timestamp, parent edges) a node carries the bookkeeping of the
//! longest path engine:
//!
//! - `longest_path_length`: edge count of the longest path starting here,
//!   cached after the first computation
//! - `longest_path_predecessor`: the node the reconstructed longest path
//!   enters this node from
//!
//! ## Display
//!
//! A node renders as `<name> <timestamp>`, the output line format. An unset
//! timestamp renders as `-1`.

use crate::artifacts::graph::Timestamp;
use crate::artifacts::graph::node_id::NodeId;
use derive_new::new;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Node {
    name: String,
    timestamp: Option<Timestamp>,
    #[new(default)]
    edges: Vec<NodeId>,
    #[new(default)]
    longest_path_length: Option<usize>,
    #[new(default)]
    longest_path_predecessor: Option<NodeId>,
}

impl Node {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn timestamp(&self) -> Option<Timestamp> {
        self.timestamp
    }

    /// Parent edges, in the order the parents were listed
    pub fn edges(&self) -> &[NodeId] {
        &self.edges
    }

    pub fn is_root(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn longest_path_length(&self) -> Option<usize> {
        self.longest_path_length
    }

    pub fn longest_path_predecessor(&self) -> Option<NodeId> {
        self.longest_path_predecessor
    }

    pub(crate) fn set_timestamp(&mut self, timestamp: Timestamp) {
        self.timestamp = Some(timestamp);
    }

    pub(crate) fn add_edge(&mut self, to: NodeId) {
        self.edges.push(to);
    }

    pub(crate) fn set_longest_path_length(&mut self, length: usize) {
        self.longest_path_length = Some(length);
    }

    pub(crate) fn set_longest_path_predecessor(&mut self, predecessor: Option<NodeId>) {
        self.longest_path_predecessor = predecessor;
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.timestamp {
            Some(timestamp) => write!(f, "{} {}", self.name, timestamp),
            None => write!(f, "{} -1", self.name),
        }
    }
}
