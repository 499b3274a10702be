//! Longest path through the commit graph
//!
//! See https://en.wikipedia.org/wiki/Longest_path_problem#Acyclic_graphs_and_critical_paths
//!
//! ## Algorithm Overview
//!
//! ### Phase 1: Longest Path Lengths
//!
//! For every node reachable from the end node, compute the number of edges
//! of the longest path that starts at the node and follows parent edges:
//! - A node without parents has length 0
//! - Any other node has length `1 + max(length of each parent)`
//!
//! Lengths are cached on the nodes, so every node is expanded at most once
//! and later queries are O(1). The traversal is a post-order depth-first
//! search driven by an explicit stack: histories with hundreds of thousands
//! of commits in a single lineage do not exhaust the call stack.
//!
//! A node reached again while it is still on the traversal stack closes a
//! cycle. Commit histories cannot contain one, so this is reported as an
//! error instead of looping forever.
//!
//! ### Phase 2: Path Reconstruction
//!
//! Starting at the end node, repeatedly step to the parent with the greatest
//! cached length. On ties the parent listed first wins. Every step records
//! the node it came from as the chosen parent's predecessor; the walk stops
//! at a root, which is the start of the longest path. Following the
//! predecessor links from there yields the path oldest commit first.
//!
//! ## Debug Logging
//!
//! Build with `--features debug_trace` to print every computed length and
//! every reconstruction step to stderr.

use crate::areas::graph_store::GraphStore;
use crate::artifacts::debug_log;
use crate::artifacts::graph::node::Node;
use crate::artifacts::graph::node_id::NodeId;
use bitflags::bitflags;
use derive_new::new;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct VisitState: u8 {
        const NONE = 0b00;
        const ON_STACK = 0b01; // Node is on the traversal stack, its length is pending
        const EXPANDED = 0b10; // Node's length has been computed by this finder
    }
}

/// Pending work for one node of the depth-first traversal
#[derive(Debug, new)]
struct Frame {
    node_id: NodeId,
    #[new(default)]
    next_edge: usize,
    #[new(default)]
    longest_parent: Option<usize>,
}

impl Frame {
    fn record_parent(&mut self, length: usize) {
        self.longest_parent = self.longest_parent.max(Some(length));
    }

    fn length(&self) -> usize {
        self.longest_parent.map_or(0, |length| length + 1)
    }
}

/// One longest path, oldest commit first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongestPath {
    nodes: Vec<NodeId>,
}

impl LongestPath {
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// The root commit the path starts from
    pub fn start(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    /// The newest commit, where the path ends
    pub fn end(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn entries<'g>(&'g self, store: &'g GraphStore) -> impl Iterator<Item = &'g Node> {
        self.nodes.iter().map(|&node_id| store.node(node_id))
    }
}

/// Computes longest path lengths and reconstructs longest paths
///
/// The finder borrows the store mutably: lengths and predecessors are
/// recorded on the nodes themselves.
pub struct LongestPathFinder<'g> {
    store: &'g mut GraphStore,
    states: Vec<VisitState>,
    expanded_nodes: usize,
}

impl<'g> LongestPathFinder<'g> {
    pub fn new(store: &'g mut GraphStore) -> Self {
        let states = vec![VisitState::NONE; store.len()];
        Self {
            store,
            states,
            expanded_nodes: 0,
        }
    }

    /// Number of nodes whose length this finder has computed
    pub fn expanded_nodes(&self) -> usize {
        self.expanded_nodes
    }

    /// Return the longest path length starting at `start`, computing and
    /// caching the length of every node reachable from it if needed
    ///
    /// # Errors
    ///
    /// Fails if a cycle is reachable from `start`.
    pub fn compute_longest_length(&mut self, start: NodeId) -> anyhow::Result<usize> {
        if let Some(length) = self.store.node(start).longest_path_length() {
            return Ok(length);
        }

        let mut stack = vec![Frame::new(start)];
        self.states[start.index()] |= VisitState::ON_STACK;
        let mut length = 0;

        while let Some(frame) = stack.last_mut() {
            if let Some(&parent) = self.store.node(frame.node_id).edges().get(frame.next_edge) {
                frame.next_edge += 1;

                match self.store.node(parent).longest_path_length() {
                    Some(parent_length) => frame.record_parent(parent_length),
                    None if self.states[parent.index()].contains(VisitState::ON_STACK) => {
                        self.unwind(&stack);
                        anyhow::bail!(
                            "cycle detected at commit {}",
                            self.store.node(parent).name()
                        );
                    }
                    None => {
                        self.states[parent.index()] |= VisitState::ON_STACK;
                        stack.push(Frame::new(parent));
                    }
                }
                continue;
            }

            let node_id = frame.node_id;
            length = frame.length();
            stack.pop();
            self.expand(node_id, length);

            if let Some(child) = stack.last_mut() {
                child.record_parent(length);
            }
        }

        Ok(length)
    }

    /// Reconstruct one longest path ending at `end`
    ///
    /// Lengths are computed first if `end` has not been seen yet.
    pub fn reconstruct_path(&mut self, end: NodeId) -> anyhow::Result<LongestPath> {
        let length = self.compute_longest_length(end)?;

        self.store.node_mut(end).set_longest_path_predecessor(None);
        let mut start = end;
        while let Some(parent) = self.longest_parent(start) {
            debug_log!(
                "{} -> {}",
                self.store.node(start).name(),
                self.store.node(parent).name()
            );
            self.store
                .node_mut(parent)
                .set_longest_path_predecessor(Some(start));
            start = parent;
        }

        let mut nodes = Vec::with_capacity(length + 1);
        let mut current = Some(start);
        while let Some(node_id) = current {
            nodes.push(node_id);
            current = self.store.node(node_id).longest_path_predecessor();
        }

        Ok(LongestPath { nodes })
    }

    /// Compute lengths, then reconstruct the path ending at `end`
    pub fn longest_path(&mut self, end: NodeId) -> anyhow::Result<LongestPath> {
        self.compute_longest_length(end)?;
        self.reconstruct_path(end)
    }

    fn expand(&mut self, node_id: NodeId, length: usize) {
        debug_log!(
            "longest_path_length({}) = {}",
            self.store.node(node_id).name(),
            length
        );
        self.store.node_mut(node_id).set_longest_path_length(length);

        let state = &mut self.states[node_id.index()];
        state.remove(VisitState::ON_STACK);
        state.insert(VisitState::EXPANDED);
        self.expanded_nodes += 1;
    }

    fn unwind(&mut self, stack: &[Frame]) {
        for frame in stack {
            self.states[frame.node_id.index()].remove(VisitState::ON_STACK);
        }
    }

    // First parent with the strictly greatest length
    fn longest_parent(&self, node_id: NodeId) -> Option<NodeId> {
        let mut longest: Option<(NodeId, Option<usize>)> = None;

        for &parent in self.store.node(node_id).edges() {
            let length = self.store.node(parent).longest_path_length();
            match longest {
                Some((_, longest_length)) if length <= longest_length => {}
                _ => longest = Some((parent, length)),
            }
        }

        longest.map(|(parent, _)| parent)
    }
}
