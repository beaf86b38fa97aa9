//! The language generator capability contract.

use indexmap::IndexMap;

use crate::{GenerationOptions, RendererOptions, Rule};

/// Generated files keyed by filename, in generator emission order.
///
/// Extensions are optional; the file writer appends the descriptor's
/// extension to filenames that lack one.
pub type GeneratedFiles = IndexMap<String, String>;

/// Signature of a language generator invocation.
pub type GenerateFn =
    fn(&[Rule], &GenerationOptions, &RendererOptions) -> eyre::Result<GeneratedFiles>;

/// A language generator capability.
///
/// Generators form a fixed catalog; selecting one is a single table lookup
/// by language identifier at the start of a run. Every generator must embed
/// the file header (marker first) in the first lines of each produced file.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorDescriptor {
    /// Language identifier (e.g. "typescript").
    pub id: &'static str,

    /// File extension appended to generated filenames that lack one.
    pub extension: &'static str,

    /// Render rules into a filename-to-content mapping.
    pub generate: GenerateFn,
}
