//! Instructions pane: exercise statement rendered from markdown.

use std::fmt;

use pulldown_cmark::{html, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// Title of the instructions pane.
pub const INSTRUCTIONS_TITLE: &str = "Enunciado";

/// Markdown extensions understood by the pane: tables, strikethrough,
/// task lists and footnotes.
pub fn markdown_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES
}

/// A titled markdown document.
///
/// # Examples
///
/// ```rust
/// use pathgen_core::views::InstructionsPanel;
///
/// let panel = InstructionsPanel::new("Enunciado", "Use ~~fmt~~ **strings**.");
/// let html = panel.to_html();
/// assert!(html.contains("<h2>Enunciado</h2>"));
/// assert!(html.contains("<del>fmt</del>"));
/// assert_eq!(panel.plain_text(), "Enunciado\nUse fmt strings.\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionsPanel {
    title: String,
    markdown: String,
}

impl InstructionsPanel {
    pub fn new(title: impl Into<String>, markdown: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            markdown: markdown.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn markdown(&self) -> &str {
        &self.markdown
    }

    fn events(&self) -> impl Iterator<Item = Event<'_>> {
        let heading = [
            Event::Start(Tag::Heading {
                level: HeadingLevel::H2,
                id: None,
                classes: Vec::new(),
                attrs: Vec::new(),
            }),
            Event::Text(CowStr::Borrowed(&self.title)),
            Event::End(TagEnd::Heading(HeadingLevel::H2)),
        ];
        heading
            .into_iter()
            .chain(Parser::new_ext(&self.markdown, markdown_options()))
    }

    /// HTML fragment: the title as `<h2>` followed by the rendered body.
    ///
    /// Raw HTML in the markdown is emitted as escaped text, never as markup.
    pub fn body_html(&self) -> String {
        let mut body = String::new();
        html::push_html(&mut body, self.events().map(escape_raw_html));
        body
    }

    /// Standalone HTML document of the pane.
    pub fn to_html(&self) -> String {
        let mut title = String::new();
        html::push_html(&mut title, std::iter::once(Event::Text(CowStr::Borrowed(&self.title))));

        format!(
            "<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n<meta charset=\"utf-8\">\n\
             <title>{title}</title>\n</head>\n<body>\n<article class=\"instructions\">\n\
             {body}</article>\n</body>\n</html>\n",
            body = self.body_html()
        )
    }

    /// Rendered text without markup, one line per block.
    pub fn plain_text(&self) -> String {
        let mut text = String::new();
        for event in self.events() {
            match event {
                Event::Text(content) | Event::Code(content) => text.push_str(&content),
                Event::Html(raw) | Event::InlineHtml(raw) => text.push_str(&raw),
                Event::SoftBreak | Event::HardBreak => text.push(' '),
                Event::TaskListMarker(checked) => {
                    text.push_str(if checked { "[x] " } else { "[ ] " })
                }
                Event::FootnoteReference(label) => {
                    text.push('[');
                    text.push_str(&label);
                    text.push(']');
                }
                Event::Start(Tag::Item) => text.push_str("- "),
                Event::Start(Tag::FootnoteDefinition(label)) => {
                    text.push('[');
                    text.push_str(&label);
                    text.push_str("]: ");
                }
                Event::End(TagEnd::TableCell) => text.push('\t'),
                Event::End(
                    TagEnd::Paragraph
                    | TagEnd::Heading(_)
                    | TagEnd::Item
                    | TagEnd::TableHead
                    | TagEnd::TableRow
                    | TagEnd::BlockQuote(_),
                )
                | Event::Rule => {
                    if !text.ends_with('\n') {
                        text.push('\n');
                    }
                }
                _ => {}
            }
        }
        text
    }
}

fn escape_raw_html(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    }
}

impl fmt::Display for InstructionsPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.title)?;
        writeln!(f)?;
        if !self.markdown.is_empty() {
            writeln!(f, "{}", self.markdown.trim_end())?;
        }
        Ok(())
    }
}
