//! Longest path through a commit history DAG
//!
//! Reads `git log --topo-order --pretty=format:'%H %at %P'` style records,
//! builds the commit graph (edges point from a commit to its parents) and
//! prints the longest chain of ancestry, oldest commit first.

pub mod areas;
pub mod artifacts;
pub mod commands;
