//! Commit records
//!
//! A record is one line of `git log --topo-order --pretty=format:'%H %at %P'`
//! output:
//!
//! ```text
//! <commit> <timestamp> [<parent> ...]
//! ```
//!
//! Fields are separated by arbitrary whitespace. Nothing is validated: a
//! missing or unparseable timestamp leaves the timestamp unset, and
//! identifiers are taken verbatim.

use crate::artifacts::debug_log;
use crate::artifacts::graph::Timestamp;
use derive_new::new;
use std::str::FromStr;

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct CommitRecord {
    name: String,
    timestamp: Option<Timestamp>,
    parents: Vec<String>,
}

impl CommitRecord {
    /// Parse a record from a single line
    ///
    /// Returns `None` for blank or whitespace-only lines.
    pub fn parse(line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let name = tokens.next()?;

        let timestamp = tokens.next().and_then(|token| {
            let timestamp = token.parse::<Timestamp>().ok();
            if timestamp.is_none() {
                debug_log!("Unparseable timestamp {:?} for {}", token, name);
            }
            timestamp
        });

        Some(Self {
            name: name.to_string(),
            timestamp,
            parents: tokens.map(str::to_string).collect(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn timestamp(&self) -> Option<Timestamp> {
        self.timestamp
    }

    pub fn parents(&self) -> &[String] {
        &self.parents
    }

    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }
}

impl FromStr for CommitRecord {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        Self::parse(line).ok_or_else(|| anyhow::anyhow!("Empty commit record"))
    }
}
