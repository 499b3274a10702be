//! Commit graph
//!
//! Nodes live in an arena owned by the graph store and refer to each other
//! through `NodeId` handles, so parent edges and longest path back-links
//! never borrow from one another.
//!
//! - `node_id`: Stable handle into the node arena
//! - `node`: A commit with its parent edges and longest path bookkeeping
//! - `longest_path`: Memoized longest path computation and reconstruction

pub mod longest_path;
pub mod node;
pub mod node_id;

/// Author or commit time, in seconds since the epoch
pub type Timestamp = u64;
