//! Input side of the pipeline
//!
//! - `commit_record`: One parsed `<commit> <timestamp> [<parent>...]` line
//! - `input_source`: Standard input or a named file, as a line reader

pub mod commit_record;
pub mod input_source;
