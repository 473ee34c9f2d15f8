//! Static HTML listing of the library.

use crate::core::library::Library;
use crate::models::error::SError;
use camino::Utf8Path;
use handlebars::Handlebars;
use serde_json::json;
use std::fs;
use tracing::debug;

const TEMPLATE_NAME: &str = "index";
const DEFAULT_TEMPLATE: &str = include_str!("../../templates/index.html.hbs");

pub struct IndexRenderer {
    registry: Handlebars<'static>,
}

impl IndexRenderer {
    /// Uses the template at `template` when given, the built-in page otherwise.
    pub fn new(template: Option<&Utf8Path>) -> Result<Self, SError> {
        let source = match template {
            Some(path) => fs::read_to_string(path)
                .map_err(|e| SError::Render(format!("cannot read template {path}: {e}")))?,
            None => DEFAULT_TEMPLATE.to_string(),
        };

        let mut registry = Handlebars::new();
        registry.register_template_string(TEMPLATE_NAME, source)?;
        Ok(Self { registry })
    }

    /// Every entry is exposed under `games`, with all of its descriptor fields.
    pub fn render(&self, library: &Library) -> Result<String, SError> {
        let data = json!({ "games": library.entries() });
        Ok(self.registry.render(TEMPLATE_NAME, &data)?)
    }

    pub fn write(&self, library: &Library, destination: &Utf8Path) -> Result<(), SError> {
        let html = self.render(library)?;
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(destination, html)?;
        debug!("wrote {destination}");
        Ok(())
    }
}
