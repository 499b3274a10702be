//! Command implementations
//!
//! - `longest_path`: Read a topologically ordered history and print its
//!   longest chain of ancestry

pub mod longest_path;
