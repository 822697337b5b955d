//! Template loading and rendering

use crate::error::{TemplateError, TemplateResult};
use crate::render::context::RenderContext;
use std::error::Error;
use std::fs;
use std::path::Path;
use tera::{Context, Tera};
use tracing::debug;

/// Internal name under which the single output template is registered
const TEMPLATE_NAME: &str = "output";

/// Load a template file and render the context through it
pub fn render_file(path: &Path, context: &RenderContext) -> TemplateResult<String> {
    debug!(path = %path.display(), "reading output template");

    let contents = fs::read_to_string(path).map_err(|e| TemplateError::Read {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;

    render_str(&contents, context)
}

/// Render the context through a template given as a string
///
/// The template has Tera's built-in filter and function library available in
/// addition to its native constructs.
pub fn render_str(template: &str, context: &RenderContext) -> TemplateResult<String> {
    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, template)
        .map_err(|e| TemplateError::Parse(describe(&e)))?;

    let ctx =
        Context::from_serialize(context).map_err(|e| TemplateError::Execution(describe(&e)))?;

    let rendered = tera
        .render(TEMPLATE_NAME, &ctx)
        .map_err(|e| TemplateError::Execution(describe(&e)))?;

    Ok(rendered)
}

/// Flatten a tera error and its cause chain into one message
fn describe(e: &tera::Error) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
