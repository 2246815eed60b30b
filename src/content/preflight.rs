use std::fs;
use std::path::Path;
use std::time::Instant;
use log::{info, warn};
use walkdir::WalkDir;

use crate::utils::error::{BoxResult, FolioError};
use crate::utils::path::has_extension;

/// Parse every JSON document under the content root before serving, so a
/// broken metadata file fails startup instead of a later request.
/// Returns the number of documents checked.
pub fn verify_content_root<P: AsRef<Path>>(root: P) -> BoxResult<usize> {
    let start = Instant::now();
    let mut count = 0usize;

    for entry in WalkDir::new(root.as_ref()).follow_links(false) {
        let entry = entry.map_err(|e| FolioError::Server(e.to_string()))?;
        if !entry.file_type().is_file() || !has_extension(entry.path(), "json") {
            continue;
        }

        let raw = fs::read_to_string(entry.path())?;
        serde_json::from_str::<serde_json::Value>(&raw)
            .map_err(|e| FolioError::Metadata(format!(
                "Failed to parse {}: {}", entry.path().display(), e
            )))?;
        count += 1;
    }

    if count == 0 {
        warn!("No JSON metadata found under {}", root.as_ref().display());
    }
    info!("{} json files, parse time: {:?}", count, start.elapsed());
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_counts_json_at_both_levels() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("__site__.json"), "{}").unwrap();
        fs::create_dir(dir.path().join("blog")).unwrap();
        fs::write(dir.path().join("blog/post.json"), r#"{"a": 1}"#).unwrap();
        fs::write(dir.path().join("blog/post.html"), "<p>hi</p>").unwrap();

        assert_eq!(verify_content_root(dir.path()).unwrap(), 2);
    }

    #[test]
    fn test_malformed_document_fails() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("bad.json"), "{").unwrap();

        assert!(verify_content_root(dir.path()).is_err());
    }
}
