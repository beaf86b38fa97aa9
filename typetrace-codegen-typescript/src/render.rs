//! Rendering of the TypeScript client module.

use typetrace_codegen::{
    GenerationOptions, RendererOptions, comment_header,
    event::{EventRule, PropertySchema},
};
use typetrace_core::{to_camel_case, to_pascal_case};

pub(crate) fn client_module(
    events: &[EventRule],
    options: &GenerationOptions,
    renderer: &RendererOptions,
) -> String {
    let mut out = comment_header(&renderer.header, "// ");
    out.push_str("//\n");
    out.push_str(&format!(
        "// Client version {}, SDK {}.\n\n",
        options.version, renderer.sdk
    ));

    out.push_str("/** The subset of an analytics SDK the generated client calls into. */\n");
    out.push_str("export interface AnalyticsClient {\n");
    out.push_str("  track(event: string, properties?: Record<string, unknown>): void;\n");
    out.push_str("}\n\n");

    out.push_str("let client: AnalyticsClient | null = null;\n\n");
    out.push_str(&format!(
        "/** Wire in the {} instance events are delivered through. */\n",
        renderer.sdk
    ));
    out.push_str("export function setTypetraceClient(instance: AnalyticsClient): void {\n");
    out.push_str("  client = instance;\n");
    out.push_str("}\n");

    for event in events {
        out.push('\n');
        out.push_str(&interface(event));
        out.push('\n');
        out.push_str(&track_function(event, options.is_development));
    }

    out
}

fn interface(event: &EventRule) -> String {
    let mut out = String::new();
    if let Some(description) = &event.description {
        out.push_str(&format!("/** {description} */\n"));
    }
    out.push_str(&format!(
        "export interface {} {{\n",
        to_pascal_case(&event.name)
    ));
    for (name, property) in &event.properties {
        if let Some(description) = &property.description {
            out.push_str(&format!("  /** {description} */\n"));
        }
        let optional = if property.required { "" } else { "?" };
        out.push_str(&format!(
            "  {}{optional}: {};\n",
            property_key(name),
            ts_type(property)
        ));
    }
    out.push_str("}\n");
    out
}

fn track_function(event: &EventRule, is_development: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("/** Track '{}'. */\n", event.name));
    out.push_str(&format!(
        "export function {}(properties: {}): void {{\n",
        to_camel_case(&event.name),
        to_pascal_case(&event.name)
    ));

    if is_development {
        let required: Vec<String> = event
            .required_properties()
            .map(|name| format!("\"{name}\""))
            .collect();
        if !required.is_empty() {
            out.push_str(&format!(
                "  const missing = [{}].filter((key) => !(key in properties));\n",
                required.join(", ")
            ));
            out.push_str("  if (missing.length > 0) {\n");
            out.push_str(&format!(
                "    throw new Error(`{} is missing required properties: ${{missing.join(\", \")}}`);\n",
                event.name
            ));
            out.push_str("  }\n");
        }
    }

    out.push_str(&format!(
        "  client?.track(\"{}\", {{ ...properties }});\n",
        event.name
    ));
    out.push_str("}\n");
    out
}

fn ts_type(property: &PropertySchema) -> &'static str {
    match property.kind.as_deref() {
        Some("string") => "string",
        Some("number") | Some("integer") => "number",
        Some("boolean") => "boolean",
        Some("array") => "unknown[]",
        Some("object") => "Record<string, unknown>",
        _ => "unknown",
    }
}

/// Quote a property key unless it is already a valid identifier.
fn property_key(name: &str) -> String {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_' || first == '$')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        None => false,
    };

    if valid {
        name.to_string()
    } else {
        format!("\"{name}\"")
    }
}
