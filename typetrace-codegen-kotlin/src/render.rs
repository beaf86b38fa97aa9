//! Rendering of the Kotlin client file.

use typetrace_codegen::{
    GenerationOptions, RendererOptions, comment_header,
    event::{EventRule, PropertySchema},
};
use typetrace_core::{to_camel_case, to_pascal_case};

pub(crate) fn client_file(
    events: &[EventRule],
    package: &str,
    options: &GenerationOptions,
    renderer: &RendererOptions,
) -> String {
    let mut out = comment_header(&renderer.header, "// ");
    out.push_str("//\n");
    out.push_str(&format!(
        "// Client version {}, SDK {}.\n\n",
        options.version, renderer.sdk
    ));

    out.push_str(&format!("package {package}\n\n"));

    out.push_str("/** The subset of an analytics SDK the generated client calls into. */\n");
    out.push_str("interface AnalyticsClient {\n");
    out.push_str("    fun track(event: String, properties: Map<String, Any?>)\n");
    out.push_str("}\n");

    for event in events {
        if !event.properties.is_empty() {
            out.push('\n');
            out.push_str(&data_class(event));
        }
    }

    out.push('\n');
    out.push_str(&singleton(events, renderer));

    out
}

fn data_class(event: &EventRule) -> String {
    let mut out = String::new();
    if let Some(description) = &event.description {
        out.push_str(&format!("/** {description} */\n"));
    }
    out.push_str(&format!("data class {}(\n", to_pascal_case(&event.name)));
    for (name, property) in &event.properties {
        if let Some(description) = &property.description {
            out.push_str(&format!("    /** {description} */\n"));
        }
        out.push_str(&format!("    {}\n", parameter(name, property)));
    }
    out.push_str(")\n");
    out
}

fn parameter(name: &str, property: &PropertySchema) -> String {
    let base = kotlin_type(property);
    let camel = to_camel_case(name);
    if property.required {
        format!("val {camel}: {base},")
    } else if base.ends_with('?') {
        format!("val {camel}: {base} = null,")
    } else {
        format!("val {camel}: {base}? = null,")
    }
}

fn singleton(events: &[EventRule], renderer: &RendererOptions) -> String {
    let mut out = String::new();
    out.push_str("object TypetraceAnalytics {\n");
    out.push_str(&format!(
        "    /** The {} instance events are delivered through. */\n",
        renderer.sdk
    ));
    out.push_str("    var client: AnalyticsClient? = null\n");

    for event in events {
        out.push('\n');
        out.push_str(&track_function(event));
    }

    out.push_str("}\n");
    out
}

fn track_function(event: &EventRule) -> String {
    let mut out = String::new();
    out.push_str(&format!("    /** Track '{}'. */\n", event.name));

    if event.properties.is_empty() {
        out.push_str(&format!(
            "    fun {}() {{\n",
            to_camel_case(&event.name)
        ));
        out.push_str(&format!(
            "        client?.track(\"{}\", emptyMap())\n",
            event.name
        ));
        out.push_str("    }\n");
        return out;
    }

    out.push_str(&format!(
        "    fun {}(properties: {}) {{\n",
        to_camel_case(&event.name),
        to_pascal_case(&event.name)
    ));
    out.push_str("        client?.track(\n");
    out.push_str(&format!("            \"{}\",\n", event.name));
    out.push_str("            mapOf(\n");
    for name in event.properties.keys() {
        out.push_str(&format!(
            "                \"{name}\" to properties.{},\n",
            to_camel_case(name)
        ));
    }
    out.push_str("            ),\n");
    out.push_str("        )\n");
    out.push_str("    }\n");
    out
}

fn kotlin_type(property: &PropertySchema) -> &'static str {
    match property.kind.as_deref() {
        Some("string") => "String",
        Some("number") => "Double",
        Some("integer") => "Long",
        Some("boolean") => "Boolean",
        Some("array") => "List<Any?>",
        Some("object") => "Map<String, Any?>",
        _ => "Any?",
    }
}
