//! Template engine for code generation.

use crate::error::{CodegenError, Result};
use handlebars::Handlebars;
use serde::Serialize;

/// Component file: imports, declaration blocks, default export.
pub(crate) const COMPONENT_FILE: &str = "component_file";
/// Separate type-declaration file.
pub(crate) const TYPES_FILE: &str = "types_file";

const COMPONENT_FILE_TEMPLATE: &str =
    "{{imports}}\n\n{{#each blocks}}{{this}}\n\n{{/each}}export default {{identifier}};\n";
const TYPES_FILE_TEMPLATE: &str = "{{interface}}\n";

/// Template engine using Handlebars.
///
/// Output is source code, so HTML escaping is disabled.
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Create an engine with no templates registered.
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);
        Self { handlebars }
    }

    /// Create an engine with the component and type-declaration templates.
    pub fn with_defaults() -> Result<Self> {
        let mut engine = Self::new();
        engine.register_template(COMPONENT_FILE, COMPONENT_FILE_TEMPLATE)?;
        engine.register_template(TYPES_FILE, TYPES_FILE_TEMPLATE)?;
        Ok(engine)
    }

    /// Register a template.
    pub fn register_template(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(CodegenError::InvalidTemplate)?;
        Ok(())
    }

    /// Render a template.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        self.handlebars
            .render(name, data)
            .map_err(CodegenError::TemplateError)
    }
}

impl<'a> Default for TemplateEngine<'a> {
    fn default() -> Self {
        Self::new()
    }
}
