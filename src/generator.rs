//! Generation orchestration.
//! Combines the selector, the catalog and a rendering engine into the
//! externally consumed operation: configuration in, filename-to-content
//! mapping out.

use indexmap::IndexMap;
use log::debug;

use crate::catalog;
use crate::config::Configuration;
use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;
use crate::selector::select_templates;

/// Renders catalog templates against a configuration.
pub struct Generator<'a> {
    engine: &'a dyn TemplateRenderer,
}

impl<'a> Generator<'a> {
    pub fn new(engine: &'a dyn TemplateRenderer) -> Self {
        Self { engine }
    }

    /// Renders a single catalog template.
    ///
    /// # Errors
    /// * `Error::TemplateNotFoundError` if the identifier has no catalog entry
    /// * `Error::RenderError` if template evaluation fails
    pub fn render_one(&self, identifier: &str, config: &Configuration) -> Result<String> {
        let context = config.template_context();
        self.render_with_context(identifier, &context)
    }

    /// Renders every identifier in order into a filename-to-content map.
    ///
    /// All-or-nothing: the first failure aborts the whole call and partial
    /// results are discarded. Keys are identifiers used as filenames, in
    /// the order the identifiers were given.
    pub fn render_all(
        &self,
        identifiers: &[&str],
        config: &Configuration,
    ) -> Result<IndexMap<String, String>> {
        let context = config.template_context();
        let mut files = IndexMap::new();

        for identifier in identifiers {
            debug!("Rendering template: {}", identifier);
            let content = self.render_with_context(identifier, &context)?;
            files.insert(identifier.to_string(), content);
        }

        Ok(files)
    }

    /// Generates the full set of files for a configuration.
    pub fn generate(&self, config: &Configuration) -> Result<IndexMap<String, String>> {
        let identifiers = select_templates(config);
        self.render_all(&identifiers, config)
    }

    fn render_with_context(
        &self,
        identifier: &str,
        context: &serde_json::Value,
    ) -> Result<String> {
        let body = catalog::template_body(identifier).ok_or_else(|| {
            Error::TemplateNotFoundError { identifier: identifier.to_string() }
        })?;

        self.engine.render(body, context).map_err(|e| Error::RenderError {
            identifier: identifier.to_string(),
            reason: e.to_string(),
        })
    }
}
