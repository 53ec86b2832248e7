//! Description blocks
//!
//! Declarations show their description as a `"""` block. Members use a single
//! quoted line unless the text spans several lines.

use super::markup::{escape_html, Markup};

const BLANK_LINE: &str = r#"<div class="line">&nbsp;</div>"#;

/// Render a description as a triple-quoted block; nothing when absent
pub fn print_block(description: Option<&str>) -> Markup {
    let mut markup = Markup::new();
    let Some(text) = description.filter(|d| !d.is_empty()) else {
        return markup;
    };

    markup.open(r#"<div class="description">"#);
    markup.inline(line(r#"""""#));
    for source_line in split_lines(text) {
        let trimmed = source_line.trim_end();
        if trimmed.is_empty() {
            markup.inline(BLANK_LINE);
        } else {
            markup.inline(line(&escape_html(trimmed)));
        }
    }
    markup.inline(line(r#"""""#));
    markup.close("</div>");
    markup
}

/// Render a member description: one quoted line, or a block when the text
/// contains a line break
pub fn print_inline(description: Option<&str>) -> Markup {
    match description.filter(|d| !d.is_empty()) {
        None => Markup::new(),
        Some(text) if is_multiline(text) => print_block(Some(text)),
        Some(text) => {
            let mut markup = Markup::new();
            markup.inline(format!(
                r#"<div class="description">{}</div>"#,
                line(&format!("\"{}\"", escape_html(text)))
            ));
            markup
        }
    }
}

fn is_multiline(text: &str) -> bool {
    text.contains(&['\n', '\r'][..])
}

fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').map(|l| l.strip_suffix('\r').unwrap_or(l))
}

fn line(html: &str) -> String {
    format!(r#"<div class="line">{html}</div>"#)
}
