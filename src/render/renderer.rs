use std::fs;
use std::path::PathBuf;
use liquid::model::Value as LiquidValue;
use serde_json::{Map, Value};
use log::debug;

use crate::config::Config;
use crate::content::{aggregate, merge_metadata, scope_paths, ContentStore, INDEX_PAGE, PAGE_NAME_KEY};
use crate::render::filters;
use crate::render::values::json_to_liquid;
use crate::utils::error::{BoxResult, FolioError};
use crate::utils::path::is_safe_segment;

/// Dataset key selecting the Liquid template
pub const TEMPLATE_KEY: &str = "template";

/// Outcome of rendering one page
#[derive(Debug)]
pub enum RenderOutcome {
    Rendered(String),
    NotFound,
}

/// Renders pages from the content store through Liquid templates. Stateless
/// across requests: documents, metadata and templates are re-read per call.
pub struct PageRenderer {
    store: ContentStore,
    templates_dir: PathBuf,
    default_template: String,
    parser: liquid::Parser,
}

impl PageRenderer {
    /// Create a new page renderer for the configured content root
    pub fn new(config: &Config) -> BoxResult<Self> {
        let parser = filters::register_filters(liquid::ParserBuilder::with_stdlib())
            .build()
            .map_err(|e| FolioError::Template(format!(
                "Failed to create Liquid parser: {}", e
            )))?;

        Ok(PageRenderer {
            store: ContentStore::new(&config.source),
            templates_dir: config.templates_path(),
            default_template: config.default_template.clone(),
            parser,
        })
    }

    /// The content store backing this renderer
    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    /// Render a page to HTML. `Ok(NotFound)` means the content document is
    /// absent; merge or template failures are errors.
    pub fn render_page(&self, category: Option<&str>, page: &str) -> BoxResult<RenderOutcome> {
        let data = match self.build_dataset(category, page)? {
            Some(data) => data,
            None => return Ok(RenderOutcome::NotFound),
        };

        let template_name = match &data[TEMPLATE_KEY] {
            Value::String(name) => name.clone(),
            other => {
                return Err(FolioError::Template(format!(
                    "template must be a string, found {}", other
                )).into());
            }
        };

        let rendered = self.render_template(&template_name, data)?;
        Ok(RenderOutcome::Rendered(rendered))
    }

    /// Assemble the dataset handed to the template engine: contents, merged
    /// metadata, derived identifiers, and the category listing for index
    /// pages. `Ok(None)` when the content document does not exist; no
    /// metadata is read in that case.
    pub fn build_dataset(
        &self,
        category: Option<&str>,
        page: &str,
    ) -> BoxResult<Option<Map<String, Value>>> {
        let document_path = match category {
            Some(category) => PathBuf::from(category).join(format!("{}.html", page)),
            None => PathBuf::from(format!("{}.html", page)),
        };

        let contents = match self.store.read_document(&document_path)? {
            Some(contents) => contents,
            None => {
                debug!("No content document at {}", document_path.display());
                return Ok(None);
            }
        };

        let mut data = merge_metadata(&self.store, &scope_paths(category, page))?;

        if let Some(category) = category {
            if page == INDEX_PAGE {
                let listing = aggregate(&self.store, category)?;
                data.insert("pages".to_string(), Value::Object(listing.pages));
                data.insert("entries".to_string(), Value::Array(listing.entries));
            }
        }

        data.insert(PAGE_NAME_KEY.to_string(), Value::String(page.to_string()));
        if let Some(category) = category {
            data.insert("category_name".to_string(), Value::String(category.to_string()));
        }
        data.insert("contents".to_string(), Value::String(contents));

        if !data.contains_key(TEMPLATE_KEY) {
            data.insert(
                TEMPLATE_KEY.to_string(),
                Value::String(self.default_template.clone()),
            );
        }

        Ok(Some(data))
    }

    /// Parse and render one template file against the dataset. Templates are
    /// read fresh per request, matching the content store's no-cache contract.
    fn render_template(&self, name: &str, data: Map<String, Value>) -> BoxResult<String> {
        let template_path = self.find_template(name)?;
        debug!("Using template: {}", template_path.display());

        let template_content = fs::read_to_string(&template_path)
            .map_err(|e| FolioError::Template(format!(
                "Failed to read template {}: {}", name, e
            )))?;

        let template = self.parser.parse(&template_content)
            .map_err(|e| FolioError::Template(format!(
                "Failed to parse template {}: {}", name, e
            )))?;

        let globals = match json_to_liquid(Value::Object(data)) {
            LiquidValue::Object(globals) => globals,
            _ => unreachable!("an object converts to an object"),
        };

        let rendered = template.render(&globals)
            .map_err(|e| FolioError::Template(format!(
                "Failed to render template {}: {}", name, e
            )))?;

        Ok(rendered)
    }

    /// Resolve a template name inside the templates directory. Names come
    /// from metadata, so they get the same segment hardening as URLs.
    fn find_template(&self, name: &str) -> BoxResult<PathBuf> {
        if !is_safe_segment(name) {
            return Err(FolioError::Template(format!(
                "Invalid template name: {}", name
            )).into());
        }

        let template_path = self.templates_dir.join(name);
        if !template_path.is_file() {
            return Err(FolioError::Template(format!(
                "Template not found: {}", name
            )).into());
        }

        Ok(template_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Content root with a minimal template set
    fn fixture(files: &[(&str, &str)]) -> (TempDir, PageRenderer) {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("templates")).unwrap();
        fs::write(
            dir.path().join("templates/page.html"),
            "<title>{{ title }}</title>{{ contents }}",
        ).unwrap();
        for (name, contents) in files {
            let path = dir.path().join(name);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(path, contents).unwrap();
        }

        let config = Config {
            source: dir.path().to_path_buf(),
            ..Config::default()
        };
        let renderer = PageRenderer::new(&config).unwrap();
        (dir, renderer)
    }

    #[test]
    fn test_dataset_without_metadata_has_only_derived_fields() {
        let (_dir, renderer) = fixture(&[("about.html", "<p>About</p>")]);

        let data = renderer.build_dataset(None, "about").unwrap().unwrap();
        assert_eq!(data.len(), 3);
        assert_eq!(data["page_name"], "about");
        assert_eq!(data["contents"], "<p>About</p>");
        assert_eq!(data["template"], "page.html");
    }

    #[test]
    fn test_absent_document_skips_metadata_entirely() {
        // The site metadata is deliberately malformed: if the renderer
        // touched it before resolving the document, this would error
        // instead of reporting NotFound.
        let (_dir, renderer) = fixture(&[("__site__.json", "{broken")]);

        let data = renderer.build_dataset(None, "missing").unwrap();
        assert!(data.is_none());

        match renderer.render_page(None, "missing").unwrap() {
            RenderOutcome::NotFound => {}
            RenderOutcome::Rendered(_) => panic!("expected NotFound"),
        }
    }

    #[test]
    fn test_scope_merge_order_in_dataset() {
        let (_dir, renderer) = fixture(&[
            ("__site__.json", r#"{"title": "Site", "footer": "site footer"}"#),
            ("blog/__category__.json", r#"{"title": "Blog"}"#),
            ("blog/post.json", r#"{"title": "Post"}"#),
            ("blog/post.html", "<p>Body</p>"),
        ]);

        let data = renderer.build_dataset(Some("blog"), "post").unwrap().unwrap();
        assert_eq!(data["title"], "Post");
        assert_eq!(data["footer"], "site footer");
        assert_eq!(data["category_name"], "blog");
        assert_eq!(data["page_name"], "post");
    }

    #[test]
    fn test_custom_template_round_trip() {
        let (dir, renderer) = fixture(&[
            ("special.html", "<p>Special</p>"),
            ("special.json", r#"{"template": "custom.html"}"#),
        ]);
        fs::write(dir.path().join("templates/custom.html"), "custom: {{ contents }}").unwrap();

        let data = renderer.build_dataset(None, "special").unwrap().unwrap();
        assert_eq!(data["template"], "custom.html");

        match renderer.render_page(None, "special").unwrap() {
            RenderOutcome::Rendered(html) => assert_eq!(html, "custom: <p>Special</p>"),
            RenderOutcome::NotFound => panic!("expected a render"),
        }
    }

    #[test]
    fn test_category_index_carries_pages_and_entries() {
        let (_dir, renderer) = fixture(&[
            ("blog/index.html", "<h1>Blog</h1>"),
            ("blog/a.json", r#"{"pubDate": "2020-01-01", "title": "A"}"#),
            ("blog/b.json", r#"{"pubDate": "2021-01-01", "title": "B"}"#),
            ("blog/c.json", r#"{"title": "C"}"#),
            ("blog/__category__.json", r#"{"title": "Blog"}"#),
        ]);

        let data = renderer.build_dataset(Some("blog"), "index").unwrap().unwrap();

        let entries = data["entries"].as_array().unwrap();
        let names: Vec<&str> = entries.iter()
            .map(|e| e["page_name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["b", "a"]);

        let pages = data["pages"].as_object().unwrap();
        assert_eq!(pages.len(), 3);
        assert!(pages.contains_key("c"));
    }

    #[test]
    fn test_non_index_category_page_has_no_listing() {
        let (_dir, renderer) = fixture(&[
            ("blog/post.html", "<p>Post</p>"),
            ("blog/a.json", r#"{"pubDate": "2020-01-01"}"#),
        ]);

        let data = renderer.build_dataset(Some("blog"), "post").unwrap().unwrap();
        assert!(!data.contains_key("pages"));
        assert!(!data.contains_key("entries"));
    }

    #[test]
    fn test_rendering_uses_merged_metadata() {
        let (_dir, renderer) = fixture(&[
            ("__site__.json", r#"{"title": "My Site"}"#),
            ("index.html", "<p>Hello</p>"),
        ]);

        match renderer.render_page(None, "index").unwrap() {
            RenderOutcome::Rendered(html) => {
                assert_eq!(html, "<title>My Site</title><p>Hello</p>");
            }
            RenderOutcome::NotFound => panic!("expected a render"),
        }
    }

    #[test]
    fn test_missing_template_is_fatal() {
        let (_dir, renderer) = fixture(&[
            ("page.html", "<p>x</p>"),
            ("page.json", r#"{"template": "nope.html"}"#),
        ]);

        assert!(renderer.render_page(None, "page").is_err());
    }

    #[test]
    fn test_non_string_template_is_fatal() {
        let (_dir, renderer) = fixture(&[
            ("page.html", "<p>x</p>"),
            ("page.json", r#"{"template": 7}"#),
        ]);

        assert!(renderer.render_page(None, "page").is_err());
    }

    #[test]
    fn test_template_name_with_traversal_is_rejected() {
        let (_dir, renderer) = fixture(&[
            ("page.html", "<p>x</p>"),
            ("page.json", r#"{"template": "../page.html"}"#),
        ]);

        assert!(renderer.render_page(None, "page").is_err());
    }
}
