//! URL source loading
//!
//! The source file is newline-delimited; blank lines and `#` comments are
//! ignored. Order is significant: it defines the processing sequence and
//! the meaning of the resumable progress marker.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::core::{PlugiloError, Result};

/// Load the ordered target URL list from a file.
///
/// Fails with [`PlugiloError::SourceNotFound`] when the file does not
/// exist; no URLs can be processed without it.
pub fn load_urls(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(PlugiloError::SourceNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    let urls: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();

    info!(count = urls.len(), file = %path.display(), "Loaded URLs");
    Ok(urls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_skips_blank_and_comment_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "a.com").unwrap();
        writeln!(file, "#comment").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  b.com  ").unwrap();

        let urls = load_urls(file.path()).unwrap();
        assert_eq!(urls, vec!["a.com".to_string(), "b.com".to_string()]);
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let err = load_urls(Path::new("definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, PlugiloError::SourceNotFound(_)));
    }

    #[test]
    fn test_preserves_source_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "z.com\na.com\nm.com").unwrap();

        let urls = load_urls(file.path()).unwrap();
        assert_eq!(urls, vec!["z.com", "a.com", "m.com"]);
    }
}
