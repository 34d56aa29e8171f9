//! Append-only URL ledgers
//!
//! Two flat files record attempted URLs and confirmed submissions, one URL
//! per line. The files only ever grow; there is no compaction or rotation.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::core::{ProcessingResult, Result};

/// Membership checks and appends over the two outcome ledgers
#[derive(Debug, Clone)]
pub struct DedupLedger {
    attempted: PathBuf,
    succeeded: PathBuf,
}

impl DedupLedger {
    /// Create a ledger over the attempted and succeeded files
    pub fn new(attempted: impl Into<PathBuf>, succeeded: impl Into<PathBuf>) -> Self {
        Self {
            attempted: attempted.into(),
            succeeded: succeeded.into(),
        }
    }

    /// Whether the URL was already attempted in any prior run
    pub fn is_processed(&self, url: &str) -> bool {
        match fs::read_to_string(&self.attempted) {
            Ok(content) => content.lines().any(|line| line == url),
            Err(_) => false,
        }
    }

    /// Record a terminal outcome for a URL.
    ///
    /// Always appends to the attempted ledger; appends to the succeeded
    /// ledger only for a confirmed submission.
    pub fn mark(&self, url: &str, result: &ProcessingResult) -> Result<()> {
        append_line(&self.attempted, url)?;
        if result.confirmed() {
            append_line(&self.succeeded, url)?;
        }
        Ok(())
    }
}

fn append_line(path: &Path, line: &str) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", line)?;
    Ok(())
}
