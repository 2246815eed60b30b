use std::cmp::Ordering;
use std::path::PathBuf;
use glob::glob;
use serde_json::{Map, Value};
use log::debug;

use crate::content::metadata::{read_metadata_file, MetadataFile, CATEGORY_METADATA};
use crate::content::store::ContentStore;
use crate::utils::error::{BoxResult, FolioError};
use crate::utils::path::get_stem;

/// Reserved stem for a category's index page
pub const INDEX_PAGE: &str = "index";

/// Metadata key that marks a record as a dated entry
pub const PUB_DATE_KEY: &str = "pubDate";

/// Metadata key injected with the identifier derived from the file name
pub const PAGE_NAME_KEY: &str = "page_name";

/// Aggregated view of one category's pages
#[derive(Debug, Default)]
pub struct CategoryListing {
    /// Every page's metadata, keyed by identifier
    pub pages: Map<String, Value>,
    /// Metadata of pages carrying a `pubDate`, newest first
    pub entries: Vec<Value>,
}

/// Scan a category directory and build its page listing. Every `*.json`
/// directly inside the directory contributes one record, except the
/// reserved `__category__` and `index` stems.
pub fn aggregate(store: &ContentStore, category: &str) -> BoxResult<CategoryListing> {
    let pattern = store.root().join(category).join("*.json");
    let pattern = pattern.to_str().ok_or_else(|| FolioError::Server(format!(
        "Non-UTF8 category path: {}", category
    )))?;

    let mut listing = CategoryListing::default();
    let mut dated: Vec<Map<String, Value>> = Vec::new();

    for path in glob(pattern).map_err(|e| FolioError::Server(e.to_string()))? {
        let path = path.map_err(|e| FolioError::Server(e.to_string()))?;
        let stem = match get_stem(&path) {
            Some(stem) => stem,
            None => continue,
        };
        if stem == CATEGORY_METADATA || stem == INDEX_PAGE {
            continue;
        }

        let relative = PathBuf::from(category).join(format!("{}.json", stem));
        let mut record = match read_metadata_file(store, &relative)? {
            MetadataFile::Parsed(map) => map,
            // The file was enumerated a moment ago; a racing delete just drops it
            MetadataFile::Absent => continue,
        };
        record.insert(PAGE_NAME_KEY.to_string(), Value::String(stem.clone()));

        if record.contains_key(PUB_DATE_KEY) {
            dated.push(record.clone());
        }
        listing.pages.insert(stem, Value::Object(record));
    }

    dated.sort_by(compare_entries);
    listing.entries = dated.into_iter().map(Value::Object).collect();

    debug!(
        "Aggregated category '{}': {} pages, {} dated entries",
        category,
        listing.pages.len(),
        listing.entries.len()
    );
    Ok(listing)
}

/// Newest `pubDate` first; equal dates order by `page_name` ascending so the
/// result never depends on directory enumeration order.
fn compare_entries(a: &Map<String, Value>, b: &Map<String, Value>) -> Ordering {
    let date_a = a.get(PUB_DATE_KEY).unwrap_or(&Value::Null);
    let date_b = b.get(PUB_DATE_KEY).unwrap_or(&Value::Null);
    compare_values(date_b, date_a).then_with(|| {
        let name_a = a.get(PAGE_NAME_KEY).and_then(Value::as_str).unwrap_or("");
        let name_b = b.get(PAGE_NAME_KEY).and_then(Value::as_str).unwrap_or("");
        name_a.cmp(name_b)
    })
}

/// Total order over raw `pubDate` values: strings lexicographically, numbers
/// numerically, anything else by rendered string form.
fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => {
            let a = a.as_f64().unwrap_or(f64::NAN);
            let b = b.as_f64().unwrap_or(f64::NAN);
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        }
        (a, b) => a.to_string().cmp(&b.to_string()),
    }
}
