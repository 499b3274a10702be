use anyhow::Context;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

/// Where commit records are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => InputSource::File(path),
            None => InputSource::Stdin,
        }
    }

    /// Open the source as a buffered line reader
    ///
    /// Failing to open a file is reported with the offending path as context
    /// and the OS error as its cause.
    pub fn open(&self) -> anyhow::Result<Box<dyn BufRead>> {
        match self {
            InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
            InputSource::File(path) => {
                let file = File::open(path).with_context(|| format!("{}", path.display()))?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}
