mod store;
mod metadata;
mod aggregator;
mod preflight;

pub use store::ContentStore;
pub use metadata::{MetadataFile, merge_metadata, scope_paths, SITE_METADATA, CATEGORY_METADATA};
pub use aggregator::{aggregate, CategoryListing, INDEX_PAGE, PAGE_NAME_KEY};
pub use preflight::verify_content_root;
