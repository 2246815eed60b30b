use std::path::PathBuf;
use serde_json::{Map, Value};
use log::trace;

use crate::content::store::ContentStore;
use crate::utils::error::{BoxResult, FolioError};

/// Reserved file name for site-wide metadata
pub const SITE_METADATA: &str = "__site__.json";

/// Reserved stem for category-wide metadata
pub const CATEGORY_METADATA: &str = "__category__";

/// Result of a single metadata load attempt. An absent file is silently
/// skipped by the merge; a file that exists but fails to parse is fatal.
#[derive(Debug)]
pub enum MetadataFile {
    Absent,
    Parsed(Map<String, Value>),
}

/// Load one metadata document from the store
pub fn read_metadata_file(store: &ContentStore, relative: &PathBuf) -> BoxResult<MetadataFile> {
    let raw = match store.read_document(relative)? {
        Some(raw) => raw,
        None => return Ok(MetadataFile::Absent),
    };

    let value: Value = serde_json::from_str(&raw)
        .map_err(|e| FolioError::Metadata(format!(
            "Failed to parse {}: {}", relative.display(), e
        )))?;

    match value {
        Value::Object(map) => Ok(MetadataFile::Parsed(map)),
        other => Err(FolioError::Metadata(format!(
            "{} must contain a JSON object, found {}",
            relative.display(),
            type_name(&other)
        )).into()),
    }
}

/// Merge an ordered list of metadata documents, most general first.
/// Later documents overwrite earlier ones on key collision.
pub fn merge_metadata(store: &ContentStore, paths: &[PathBuf]) -> BoxResult<Map<String, Value>> {
    let mut merged = Map::new();
    for path in paths {
        match read_metadata_file(store, path)? {
            MetadataFile::Absent => trace!("No metadata at {}", path.display()),
            MetadataFile::Parsed(map) => {
                for (key, value) in map {
                    merged.insert(key, value);
                }
            }
        }
    }
    Ok(merged)
}

/// Canonical scope order for a page: site, then category (when the page is
/// categorised), then the page's own metadata.
pub fn scope_paths(category: Option<&str>, page: &str) -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(SITE_METADATA)];
    if let Some(category) = category {
        paths.push(PathBuf::from(category).join(format!("{}.json", CATEGORY_METADATA)));
        paths.push(PathBuf::from(category).join(format!("{}.json", page)));
    } else {
        paths.push(PathBuf::from(format!("{}.json", page)));
    }
    paths
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
