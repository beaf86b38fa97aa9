//! The fixed catalog of language generators.
//!
//! Adding a language means adding one descriptor here; selection at run
//! start is a single table lookup by identifier.

use typetrace_codegen::GeneratorDescriptor;

/// Every generator this build of typetrace ships.
pub(crate) const SUPPORTED_GENERATORS: &[GeneratorDescriptor] = &[
    GeneratorDescriptor {
        id: typetrace_codegen_typescript::LANGUAGE_ID,
        extension: typetrace_codegen_typescript::FILE_EXTENSION,
        generate: typetrace_codegen_typescript::generate,
    },
    GeneratorDescriptor {
        id: typetrace_codegen_kotlin::LANGUAGE_ID,
        extension: typetrace_codegen_kotlin::FILE_EXTENSION,
        generate: typetrace_codegen_kotlin::generate,
    },
];

/// Look up the generator for a configured language identifier.
pub(crate) fn find_generator(language: &str) -> Option<&'static GeneratorDescriptor> {
    SUPPORTED_GENERATORS
        .iter()
        .find(|generator| generator.id == language)
}

/// Comma-separated supported language identifiers, for error messages.
pub(crate) fn supported_languages() -> String {
    SUPPORTED_GENERATORS
        .iter()
        .map(|generator| generator.id)
        .collect::<Vec<_>>()
        .join(", ")
}
