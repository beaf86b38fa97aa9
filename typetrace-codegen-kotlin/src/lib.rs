//! Kotlin client generator for typetrace.
//!
//! Renders tracking plan rules into a single Kotlin file: one data class per
//! event and a singleton with one track function per event. Required
//! properties become non-nullable constructor parameters, so the compiler
//! enforces them and no extra development-mode validation is emitted.

mod render;

use typetrace_codegen::{
    GeneratedFiles, GenerationOptions, RendererOptions, Rule, event::parse_rules,
};
use typetrace_core::to_pascal_case;

/// Language identifier this generator registers under.
pub const LANGUAGE_ID: &str = "kotlin";

/// Extension for generated source files.
pub const FILE_EXTENSION: &str = "kt";

/// Package the generated file declares when the workspace configuration does
/// not override it through `language_options.package`.
const DEFAULT_PACKAGE: &str = "com.typetrace.analytics";

/// Render rules into a Kotlin client file.
///
/// Kotlin sources are conventionally PascalCase, so the file is keyed with
/// its extension already attached and used verbatim by the file writer.
pub fn generate(
    rules: &[Rule],
    options: &GenerationOptions,
    renderer: &RendererOptions,
) -> eyre::Result<GeneratedFiles> {
    let events = parse_rules(rules)?;

    let package = renderer
        .language_options
        .get("package")
        .and_then(toml::Value::as_str)
        .unwrap_or(DEFAULT_PACKAGE);

    let mut files = GeneratedFiles::new();
    files.insert(
        format!("{}.kt", to_pascal_case(&renderer.output_filename)),
        render::client_file(&events, package, options, renderer),
    );
    Ok(files)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use typetrace_codegen::GENERATED_FILE_MARKER;

    use super::*;

    fn options() -> GenerationOptions {
        GenerationOptions {
            version: "1.2.3".to_string(),
            is_development: false,
        }
    }

    fn order_completed() -> Rule {
        json!({
            "name": "Order Completed",
            "properties": {
                "orderId": { "type": "string", "required": true },
                "total": { "type": "number" }
            }
        })
    }

    #[test]
    fn test_output_filename_carries_the_extension() {
        let renderer = RendererOptions::new("analytics-kotlin", toml::Table::new());
        let files = generate(&[order_completed()], &options(), &renderer).unwrap();

        assert_eq!(files.len(), 1);
        assert!(files.contains_key("Analytics.kt"));
    }

    #[test]
    fn test_marker_is_in_the_first_line() {
        let renderer = RendererOptions::new("analytics-kotlin", toml::Table::new());
        let files = generate(&[order_completed()], &options(), &renderer).unwrap();

        let first_line = files["Analytics.kt"].lines().next().unwrap();
        assert!(first_line.contains(GENERATED_FILE_MARKER));
    }

    #[test]
    fn test_default_package() {
        let renderer = RendererOptions::new("analytics-kotlin", toml::Table::new());
        let files = generate(&[order_completed()], &options(), &renderer).unwrap();

        assert!(files["Analytics.kt"].contains("package com.typetrace.analytics\n"));
    }

    #[test]
    fn test_package_language_option_is_honored() {
        let mut language_options = toml::Table::new();
        language_options.insert(
            "package".to_string(),
            toml::Value::String("com.example.tracking".to_string()),
        );
        let renderer = RendererOptions::new("analytics-kotlin", language_options);

        let files = generate(&[order_completed()], &options(), &renderer).unwrap();

        assert!(files["Analytics.kt"].contains("package com.example.tracking\n"));
    }

    #[test]
    fn test_renders_data_class_and_track_function() {
        let renderer = RendererOptions::new("analytics-kotlin", toml::Table::new());
        let files = generate(&[order_completed()], &options(), &renderer).unwrap();
        let file = &files["Analytics.kt"];

        assert!(file.contains("data class OrderCompleted("));
        assert!(file.contains("val orderId: String,"));
        assert!(file.contains("val total: Double? = null,"));
        assert!(file.contains("fun orderCompleted(properties: OrderCompleted)"));
        assert!(file.contains("\"Order Completed\""));
    }

    #[test]
    fn test_malformed_rule_fails_generation() {
        let renderer = RendererOptions::new("analytics-kotlin", toml::Table::new());
        let err = generate(&[json!([])], &options(), &renderer).unwrap_err();

        assert!(err.to_string().contains("invalid event rule"));
    }
}
