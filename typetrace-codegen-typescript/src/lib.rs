//! TypeScript client generator for typetrace.
//!
//! Renders tracking plan rules into a single typed module: one interface per
//! event, one track function per event, and a small client seam the caller
//! wires their analytics SDK instance into.

mod render;

use typetrace_codegen::{
    GeneratedFiles, GenerationOptions, RendererOptions, Rule, event::parse_rules,
};

/// Language identifier this generator registers under.
pub const LANGUAGE_ID: &str = "typescript";

/// Extension for generated source files.
pub const FILE_EXTENSION: &str = "ts";

/// Render rules into a TypeScript client module.
///
/// The module is keyed under the base output filename without an extension;
/// the file writer appends [`FILE_EXTENSION`].
pub fn generate(
    rules: &[Rule],
    options: &GenerationOptions,
    renderer: &RendererOptions,
) -> eyre::Result<GeneratedFiles> {
    let events = parse_rules(rules)?;

    let mut files = GeneratedFiles::new();
    files.insert(
        renderer.output_filename.clone(),
        render::client_module(&events, options, renderer),
    );
    Ok(files)
}
