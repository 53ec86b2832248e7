//! Token-based markup builder
//!
//! Markup is assembled from three kinds of tokens: opening tags, closing tags
//! and inline fragments. Rendering puts every token on its own line, indented
//! by nesting depth; the assembler later strips that incidental whitespace.
//!
//! Every inline fragment starts with `<` or `&nbsp;` and ends with `>` or
//! `&nbsp;`, so text content never touches the whitespace between tokens.

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Open(String),
    Close(String),
    Inline(String),
}

/// An ordered sequence of markup tokens
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Markup {
    tokens: Vec<Token>,
}

impl Markup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an element; `tag` is the full opening tag, e.g. `<div class="line">`
    pub fn open(&mut self, tag: impl Into<String>) -> &mut Self {
        self.tokens.push(Token::Open(tag.into()));
        self
    }

    /// Close the innermost open element
    pub fn close(&mut self, tag: impl Into<String>) -> &mut Self {
        self.tokens.push(Token::Close(tag.into()));
        self
    }

    /// Append a self-contained fragment; empty fragments are dropped
    pub fn inline(&mut self, fragment: impl Into<String>) -> &mut Self {
        let fragment = fragment.into();
        debug_assert!(
            fragment.is_empty() || is_tag_bounded(&fragment),
            "inline fragment must be bounded by tags: {fragment}"
        );
        if !fragment.is_empty() {
            self.tokens.push(Token::Inline(fragment));
        }
        self
    }

    /// Append all tokens of another builder
    pub fn append(&mut self, other: Markup) -> &mut Self {
        self.tokens.extend(other.tokens);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Render tokens one per line, indented by nesting depth
    pub fn render(&self) -> String {
        let mut output = String::new();
        let mut depth = 0usize;

        for token in &self.tokens {
            let text = match token {
                Token::Open(tag) => tag,
                Token::Close(tag) => {
                    depth = depth.saturating_sub(1);
                    tag
                }
                Token::Inline(fragment) => fragment,
            };
            if !output.is_empty() {
                output.push('\n');
            }
            output.push_str(&"  ".repeat(depth));
            output.push_str(text);
            if matches!(token, Token::Open(_)) {
                depth += 1;
            }
        }

        output
    }
}

fn is_tag_bounded(fragment: &str) -> bool {
    (fragment.starts_with('<') || fragment.starts_with("&nbsp;"))
        && (fragment.ends_with('>') || fragment.ends_with("&nbsp;"))
}

/// Escape HTML special characters
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// A `<span>` with the given class around escaped text
pub fn span(class: &str, text: &str) -> String {
    format!("<span class=\"{class}\">{}</span>", escape_html(text))
}

/// A `<span>` with the given class around markup that is already escaped
pub(crate) fn span_html(class: &str, html: &str) -> String {
    format!("<span class=\"{class}\">{html}</span>")
}

/// An `<a>` element. Without a target the element carries no `href`.
pub fn link(class: &str, target: Option<&str>, title: &str, html: &str) -> String {
    let mut output = format!("<a class=\"{class}\"");
    if let Some(target) = target {
        output.push_str(" href=\"#");
        output.push_str(&escape_html(target));
        output.push('"');
    }
    output.push_str(" title=\"");
    output.push_str(&escape_html(title));
    output.push_str("\">");
    output.push_str(html);
    output.push_str("</a>");
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">&</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_link_with_and_without_target() {
        assert_eq!(
            link("field-type", Some("graphql-type-User"), "A \"user\"", "User"),
            r##"<a class="field-type" href="#graphql-type-User" title="A &quot;user&quot;">User</a>"##
        );
        assert_eq!(
            link("field-type", None, "", "Int"),
            r#"<a class="field-type" title="">Int</a>"#
        );
    }

    #[test]
    fn test_render_indents_by_depth() {
        let mut markup = Markup::new();
        markup
            .open("<section>")
            .open("<div class=\"line\">")
            .inline(span("keyword", "type"))
            .close("</div>")
            .close("</section>");

        assert_eq!(
            markup.render(),
            "<section>\n  <div class=\"line\">\n    <span class=\"keyword\">type</span>\n  </div>\n</section>"
        );
    }

    #[test]
    fn test_empty_inline_is_dropped() {
        let mut markup = Markup::new();
        markup.inline("");
        assert!(markup.is_empty());
    }
}
