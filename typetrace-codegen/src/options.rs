//! Options threaded into every generator invocation.

use crate::header::file_header;

/// Base filename generators key their primary file under; the language
/// extension is appended by the file writer when missing.
pub const DEFAULT_OUTPUT_BASENAME: &str = "analytics";

/// Build-wide generation options.
#[derive(Debug, Clone)]
pub struct GenerationOptions {
    /// Tool version embedded in generated output.
    pub version: String,

    /// Development mode asks generators to emit additional runtime
    /// validation for languages that support it.
    pub is_development: bool,
}

/// Rendering options shared by every plan in a run.
#[derive(Debug, Clone)]
pub struct RendererOptions {
    /// Header lines embedded at the top of every generated file.
    pub header: Vec<String>,

    /// Base filename for the primary generated file, extension optional.
    pub output_filename: String,

    /// Analytics SDK the generated client binds to.
    pub sdk: String,

    /// Opaque per-language options passed through verbatim; each generator
    /// reads only the keys it understands.
    pub language_options: toml::Table,
}

impl RendererOptions {
    /// Build a renderer template with the standard header marker injected.
    pub fn new(sdk: impl Into<String>, language_options: toml::Table) -> Self {
        Self {
            header: file_header(),
            output_filename: DEFAULT_OUTPUT_BASENAME.to_string(),
            sdk: sdk.into(),
            language_options,
        }
    }
}
