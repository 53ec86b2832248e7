//! Joining rendered sections into one document

use std::sync::OnceLock;

use regex::Regex;

use crate::config::NavigationConfig;

use super::links::SCHEMA_ANCHOR;
use super::markup::{escape_html, link};
use super::members::SEPARATOR;

const PLACEHOLDER_LINE: &str = r#"<div class="line">&nbsp;</div>"#;

static TAG_GAP: OnceLock<Regex> = OnceLock::new();
static NBSP_GAP: OnceLock<Regex> = OnceLock::new();
static ROOT_LINK: OnceLock<Regex> = OnceLock::new();

fn tag_gap() -> &'static Regex {
    TAG_GAP.get_or_init(|| Regex::new(r">\s+<").expect("valid tag gap pattern"))
}

fn nbsp_gap() -> &'static Regex {
    NBSP_GAP.get_or_init(|| {
        Regex::new(r">\s*(?:&nbsp;\s*)+<").expect("valid non-breaking gap pattern")
    })
}

fn root_link() -> &'static Regex {
    ROOT_LINK.get_or_init(|| {
        Regex::new(concat!(
            r#"<span class="field-name">(query|mutation|subscription)</span>"#,
            r#"<span class="colon">:</span>&nbsp;"#,
            r##"<a class="field-type" href="#([^"]+)""##,
        ))
        .expect("valid root link pattern")
    })
}

/// Collapse formatting whitespace between tags.
///
/// Whitespace between two tags disappears, unless it contains `&nbsp;`, in
/// which case exactly one `&nbsp;` remains. Empty separator lines get a
/// placeholder so browsers keep their height. Applying this twice gives the
/// same result as applying it once.
pub fn normalize_whitespace(html: &str) -> String {
    let collapsed = tag_gap().replace_all(html, "><");
    let collapsed = nbsp_gap().replace_all(&collapsed, ">&nbsp;<");
    collapsed.replace(SEPARATOR, PLACEHOLDER_LINE)
}

/// Builds the final document from per-declaration fragments
pub struct DocumentAssembler<'a> {
    navigation: &'a NavigationConfig,
}

impl<'a> DocumentAssembler<'a> {
    pub fn new(navigation: &'a NavigationConfig) -> Self {
        Self { navigation }
    }

    /// Navigation panel, then all fragments separated by empty lines, then
    /// whitespace normalization
    pub fn assemble(&self, fragments: &[String]) -> String {
        let first = fragments.first().map_or("", String::as_str);
        let mut document = self.navigation_panel(first);
        document.push_str(&fragments.join(SEPARATOR));
        normalize_whitespace(&document)
    }

    /// Floating buttons: "go to top" first, then one per root operation
    /// linked from the schema section
    pub fn navigation_panel(&self, schema_fragment: &str) -> String {
        let nav = self.navigation;
        let mut buttons = vec![link(
            "floating-button",
            Some(SCHEMA_ANCHOR),
            &nav.top_caption,
            &escape_html(&nav.top_label),
        )];

        let collapsed = tag_gap().replace_all(schema_fragment, "><");
        let collapsed = nbsp_gap().replace_all(&collapsed, ">&nbsp;<");
        for captures in root_link().captures_iter(&collapsed) {
            let (label, caption) = match &captures[1] {
                "query" => (&nav.query_label, &nav.query_caption),
                "mutation" => (&nav.mutation_label, &nav.mutation_caption),
                _ => (&nav.subscription_label, &nav.subscription_caption),
            };
            buttons.push(link(
                "floating-button",
                Some(&captures[2]),
                caption,
                &escape_html(label),
            ));
        }

        format!(
            r#"<div class="floating-container">{}</div>"#,
            buttons.concat()
        )
    }
}
