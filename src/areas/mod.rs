//! Run-level components
//!
//! - `analyzer`: Owns the output writer and coordinates a run
//! - `graph_builder`: Builds the commit graph from records
//! - `graph_store`: Arena and name index owning every node of the graph

pub mod analyzer;
pub mod graph_builder;
pub mod graph_store;
