//! Pages whose markup depends only on their route parameters.

use crate::page::{PageError, PageModule, RouteParams};

type Render = Box<dyn Fn(&RouteParams) -> String + Send + Sync>;

/// A page with a fixed title and no lifecycle.
pub struct StaticPage {
    title: String,
    render: Render,
}

impl StaticPage {
    pub fn new(title: impl Into<String>, markup: impl Into<String>) -> Self {
        let markup = markup.into();
        Self::with_template(title, move |_| markup.clone())
    }

    pub fn with_template<F>(title: impl Into<String>, render: F) -> Self
    where
        F: Fn(&RouteParams) -> String + Send + Sync + 'static,
    {
        Self {
            title: title.into(),
            render: Box::new(render),
        }
    }
}

impl PageModule for StaticPage {
    fn title(&self, _params: &RouteParams) -> Option<String> {
        Some(self.title.clone())
    }

    fn template(&self, params: &RouteParams) -> Result<Option<String>, PageError> {
        Ok(Some((self.render)(params)))
    }
}
