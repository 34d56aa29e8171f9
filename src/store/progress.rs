//! Resumable progress marker

use std::fs;
use std::path::PathBuf;

use crate::core::Result;

/// Persists the index of the next URL to process.
///
/// Single-process sequential access is assumed; no locking.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    path: PathBuf,
}

impl ProgressTracker {
    /// Create a tracker backed by the given marker file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the resume index.
    ///
    /// Returns 0 when the marker file is absent or does not contain a
    /// valid integer.
    pub fn start_index(&self) -> usize {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|content| content.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Overwrite the marker with the given index
    pub fn save(&self, index: usize) -> Result<()> {
        fs::write(&self.path, index.to_string())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_marker_defaults_to_zero() {
        let dir = tempfile::tempdir().unwrap();
        let tracker = ProgressTracker::new(dir.path().join("last_index.txt"));
        assert_eq!(tracker.start_index(), 0);
    }

    #[test]
    fn test_garbage_marker_defaults_to_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("last_index.txt");
        fs::write(&path, "not a number").unwrap();

        let tracker = ProgressTracker::new(path);
        assert_eq!(tracker.start_index(), 0);
    }

    #[test]
    fn test_save_then_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let tracker = ProgressTracker::new(dir.path().join("last_index.txt"));

        tracker.save(3).unwrap();
        assert_eq!(tracker.start_index(), 3);

        tracker.save(7).unwrap();
        assert_eq!(tracker.start_index(), 7);
    }

    #[test]
    fn test_reads_marker_with_surrounding_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("last_index.txt");
        fs::write(&path, " 3\n").unwrap();

        let tracker = ProgressTracker::new(path);
        assert_eq!(tracker.start_index(), 3);
    }
}
