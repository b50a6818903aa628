//! Handlebars rendering of the two generated artifacts.
//!
//! Templates are embedded at compile time. The registry runs in strict mode
//! so a template referencing a field the model does not provide fails
//! instead of rendering an empty string.

use handlebars::Handlebars;
use serde::Serialize;
use tracing::debug;

use crate::constants::{ARGS_FILE, CONSOLE_SOL_FILE, GENERATED_HEADER};
use crate::errors::GenError;
use crate::model::{GenerationModel, SelectorEntry};

const ARGS_TEMPLATE: &str = include_str!("../templates/args.rs.hbs");
const CONSOLE_SOL_TEMPLATE: &str = include_str!("../templates/console.sol.hbs");

/// A generated file: its fixed name and the template that produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    /// Native selector table for the host toolkit
    Args,
    /// Solidity console library
    ConsoleSol,
}

impl Artifact {
    pub const ALL: [Artifact; 2] = [Artifact::Args, Artifact::ConsoleSol];

    /// Output file name, also used as the template name.
    pub fn file_name(self) -> &'static str {
        match self {
            Artifact::Args => ARGS_FILE,
            Artifact::ConsoleSol => CONSOLE_SOL_FILE,
        }
    }

    fn source(self) -> &'static str {
        match self {
            Artifact::Args => ARGS_TEMPLATE,
            Artifact::ConsoleSol => CONSOLE_SOL_TEMPLATE,
        }
    }
}

/// Template-facing view of the model.
#[derive(Debug, Serialize)]
struct ModelView {
    /// Checksummed, `0x`-prefixed
    address: String,
    /// Lower-case hex without prefix, for `address!`
    address_hex: String,
    count: usize,
    entries: Vec<EntryView>,
}

#[derive(Debug, Serialize)]
struct EntryView {
    sig: String,
    sel_bytes: String,
    params: String,
    args_suffix: String,
    signature_args: String,
    arg_kinds: String,
    typed_name: String,
    is_log_type: bool,
    is_log: bool,
}

impl From<&SelectorEntry> for EntryView {
    fn from(entry: &SelectorEntry) -> Self {
        let params = entry.params();
        let args_suffix = if params.is_empty() { String::new() } else { format!(", {params}") };
        Self {
            sig: entry.canonical_text().to_string(),
            sel_bytes: entry.selector().array_literal(),
            params,
            args_suffix,
            signature_args: entry.signature_args(),
            arg_kinds: entry.arg_kinds().join(", "),
            typed_name: entry.typed_name().unwrap_or_default(),
            is_log_type: entry.is_log_type(),
            is_log: entry.is_log(),
        }
    }
}

impl From<&GenerationModel> for ModelView {
    fn from(model: &GenerationModel) -> Self {
        Self {
            address: model.address().to_checksum(None),
            address_hex: hex::encode(model.address()),
            count: model.entries().len(),
            entries: model.entries().iter().map(EntryView::from).collect(),
        }
    }
}

/// Handlebars registry holding both named templates.
#[derive(Debug)]
pub struct Renderer {
    registry: Handlebars<'static>,
}

impl Renderer {
    /// Register the embedded templates.
    pub fn new() -> Result<Self, GenError> {
        Self::with_templates(Artifact::ALL.iter().map(|a| (a.file_name(), a.source())))
    }

    /// Register arbitrary template sources under the given names.
    pub fn with_templates<'a>(
        templates: impl IntoIterator<Item = (&'static str, &'a str)>,
    ) -> Result<Self, GenError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);

        for (name, source) in templates {
            registry
                .register_template_string(name, source)
                .map_err(|e| GenError::TemplateParse { name, source: Box::new(e) })?;
        }
        Ok(Self { registry })
    }

    /// Render one artifact, header line included.
    pub fn render(&self, artifact: Artifact, model: &GenerationModel) -> Result<String, GenError> {
        self.render_named(artifact.file_name(), model)
    }

    /// Render a registered template by name, header line included.
    pub fn render_named(&self, name: &'static str, model: &GenerationModel) -> Result<String, GenError> {
        let view = ModelView::from(model);
        let body = self
            .registry
            .render(name, &view)
            .map_err(|e| GenError::TemplateRender { name, source: Box::new(e) })?;
        debug!(target: "console_gen::render", template = name, bytes = body.len(), "rendered template");
        Ok(format!("{GENERATED_HEADER}\n{body}"))
    }
}
