//! Shared XML formatting primitives.

/// Document header emitted before the `<character>` root element.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Indentation applied per nesting level.
pub const INDENT: &str = "  ";

/// Prefixes every line of `block` with one indentation level.
pub fn indent_block(block: &str) -> String {
    block
        .split('\n')
        .map(|line| format!("{INDENT}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wraps already-rendered child blocks in `<tag>` ... `</tag>`.
///
/// Children are re-indented one level; an element without children still
/// renders as two lines.
pub fn element_block<I>(tag: &str, children: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut lines = vec![format!("<{tag}>")];
    lines.extend(children.into_iter().map(|child| indent_block(&child)));
    lines.push(format!("</{tag}>"));
    lines.join("\n")
}

/// Renders a self-closing tag from present attributes only.
pub fn empty_element(tag: &str, attributes: &[(&str, Option<String>)]) -> String {
    let mut out = format!("<{tag}");
    for (key, value) in attributes {
        if let Some(value) = value {
            out.push_str(&format!(" {key}=\"{value}\""));
        }
    }
    out.push_str(" />");
    out
}

/// Escapes character data so label text cannot break element structure.
pub fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    escaped
}
