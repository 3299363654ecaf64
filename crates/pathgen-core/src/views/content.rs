//! Which node fields feed the workspace panes.

use crate::models::Node;

/// Editor content used when a node has no boilerplate.
pub const BOILERPLATE_PLACEHOLDER: &str = "// Escribe tu código aquí\n";

/// Source language of the editor pane.
pub const EDITOR_LANGUAGE: &str = "go";

/// Markdown shown in the instructions pane.
///
/// The first non-empty of `markdown_content`, `content` and `description`,
/// or an empty string when all three are empty.
pub fn instruction_source(node: &Node) -> &str {
    [
        node.markdown_content.as_deref(),
        Some(node.content.as_str()),
        Some(node.description.as_str()),
    ]
    .into_iter()
    .flatten()
    .find(|text| !text.is_empty())
    .unwrap_or_default()
}

/// Starting code of the editor pane: the boilerplate, or the placeholder
/// when it is missing or empty.
pub fn starter_code(node: &Node) -> &str {
    node.boilerplate
        .as_deref()
        .filter(|code| !code.is_empty())
        .unwrap_or(BOILERPLATE_PLACEHOLDER)
}
