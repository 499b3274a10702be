//! Commit graph data structures and algorithms
//!
//! This module contains the core types and algorithms:
//!
//! - `graph`: Nodes, node handles and the longest path engine
//! - `record`: Input records and where they are read from

/// Macro for debug logging that is enabled with the debug_trace feature flag
///
/// # Usage
/// ```rust,ignore
/// debug_log!("{} parent of {}", parent, name);
/// ```
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_trace")]
        {
            eprintln!($($arg)*);
        }
    };
}

pub(crate) use debug_log;

pub mod graph;
pub mod record;
