use crate::content::INDEX_PAGE;
use crate::utils::path::is_safe_segment;

/// What a request path resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    /// `/` and `/<page>.html`
    TopPage { page: String },
    /// `/<category>/`
    CategoryIndex { category: String },
    /// `/<category>/<page>.html`
    CategoryPage { category: String, page: String },
    /// `/<category>/<img>.png`
    CategoryImage { category: String, image: String },
    /// `/<category>/<page>/<img>.png`
    PageImage { category: String, page: String, image: String },
}

/// Resolve a request path against the routing table. `None` means no route
/// matches and the request is a 404. Static assets (`/favicon.ico`,
/// `/robots.txt`) are registered as explicit axum routes and never reach
/// this resolver.
pub fn resolve(path: &str) -> Option<RouteTarget> {
    let trimmed = path.strip_prefix('/')?;
    if trimmed.is_empty() {
        return Some(RouteTarget::TopPage { page: INDEX_PAGE.to_string() });
    }

    let segments: Vec<&str> = trimmed.split('/').collect();
    match segments.as_slice() {
        [file] => {
            let page = html_stem(file)?;
            Some(RouteTarget::TopPage { page: page.to_string() })
        }
        [category, ""] if is_safe_segment(category) => {
            Some(RouteTarget::CategoryIndex { category: category.to_string() })
        }
        [category, file] if is_safe_segment(category) => {
            if let Some(page) = html_stem(file) {
                Some(RouteTarget::CategoryPage {
                    category: category.to_string(),
                    page: page.to_string(),
                })
            } else if is_png(file) {
                Some(RouteTarget::CategoryImage {
                    category: category.to_string(),
                    image: file.to_string(),
                })
            } else {
                None
            }
        }
        [category, page, file]
            if is_safe_segment(category) && is_safe_segment(page) && is_png(file) =>
        {
            Some(RouteTarget::PageImage {
                category: category.to_string(),
                page: page.to_string(),
                image: file.to_string(),
            })
        }
        _ => None,
    }
}

/// Strip a `.html` suffix, yielding the page identifier if it is safe
fn html_stem(file: &str) -> Option<&str> {
    file.strip_suffix(".html").filter(|stem| is_safe_segment(stem))
}

/// Check for a `.png` file name with a safe stem
fn is_png(file: &str) -> bool {
    file.strip_suffix(".png").map_or(false, is_safe_segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_the_index_page() {
        assert_eq!(
            resolve("/"),
            Some(RouteTarget::TopPage { page: "index".to_string() })
        );
    }

    #[test]
    fn test_top_level_page() {
        assert_eq!(
            resolve("/about.html"),
            Some(RouteTarget::TopPage { page: "about".to_string() })
        );
    }

    #[test]
    fn test_category_index_with_trailing_slash() {
        assert_eq!(
            resolve("/blog/"),
            Some(RouteTarget::CategoryIndex { category: "blog".to_string() })
        );
    }

    #[test]
    fn test_category_page() {
        assert_eq!(
            resolve("/blog/post.html"),
            Some(RouteTarget::CategoryPage {
                category: "blog".to_string(),
                page: "post".to_string(),
            })
        );
    }

    #[test]
    fn test_category_index_and_explicit_index_resolve_to_the_same_page() {
        let by_slash = resolve("/blog/").unwrap();
        let by_name = resolve("/blog/index.html").unwrap();

        let (category, page) = match by_name {
            RouteTarget::CategoryPage { category, page } => (category, page),
            other => panic!("unexpected target: {:?}", other),
        };
        assert_eq!(page, "index");
        assert_eq!(
            by_slash,
            RouteTarget::CategoryIndex { category }
        );
    }

    #[test]
    fn test_category_image() {
        assert_eq!(
            resolve("/blog/photo.png"),
            Some(RouteTarget::CategoryImage {
                category: "blog".to_string(),
                image: "photo.png".to_string(),
            })
        );
    }

    #[test]
    fn test_page_image() {
        assert_eq!(
            resolve("/blog/post/diagram.png"),
            Some(RouteTarget::PageImage {
                category: "blog".to_string(),
                page: "post".to_string(),
                image: "diagram.png".to_string(),
            })
        );
    }

    #[test]
    fn test_unmatched_shapes_are_none() {
        assert_eq!(resolve("/blog"), None);
        assert_eq!(resolve("/blog/post.txt"), None);
        assert_eq!(resolve("/a/b/c.html"), None);
        assert_eq!(resolve("/a/b/c/d.png"), None);
        assert_eq!(resolve("no-leading-slash"), None);
    }

    #[test]
    fn test_traversal_attempts_are_rejected() {
        assert_eq!(resolve("/..html"), None);
        assert_eq!(resolve("/../secret.html"), None);
        assert_eq!(resolve("/blog/...png"), None);
        assert_eq!(resolve("/.hidden/post.html"), None);
    }
}
