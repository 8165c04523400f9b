//! Not-found page.

use crate::page::{PageError, PageModule, RouteParams};

/// Rendered for unmapped paths and for pages that fail to load.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotFoundPage;

impl PageModule for NotFoundPage {
    fn title(&self, _params: &RouteParams) -> Option<String> {
        Some("Page Not Found - Tree Clipper".to_string())
    }

    fn template(&self, _params: &RouteParams) -> Result<Option<String>, PageError> {
        Ok(Some(
            r#"<h1>404</h1><p>Page Not Found</p><a href="/">Back to home</a>"#.to_string(),
        ))
    }
}
