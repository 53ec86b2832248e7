//! Section markup for the schema root and every declaration kind

use crate::error::RenderError;
use crate::schema::{DirectiveDefinition, Schema, TypeDefinition, TypeDefinitionKind};

use super::description::print_block;
use super::interfaces::InterfaceFlattener;
use super::links::{directive_anchor, type_anchor, LinkResolver, SCHEMA_ANCHOR};
use super::markup::{escape_html, span, Markup};
use super::members::MemberPrinter;
use super::sorter::Declaration;

const LINE: &str = r#"<div class="line">"#;
const BODY: &str = r#"<div class="offset-1">"#;
const VERTICAL_LINE: &str = r#"&nbsp;<span class="vertical-line">|</span>&nbsp;"#;
const AMPERSAND: &str = r#"&nbsp;<span class="ampersand">&amp;</span>&nbsp;"#;

/// Renders one section per declaration
pub struct DeclarationVisitor<'a> {
    schema: &'a Schema,
    links: LinkResolver<'a>,
    members: MemberPrinter<'a>,
    interfaces: InterfaceFlattener<'a>,
}

impl<'a> DeclarationVisitor<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
            links: LinkResolver::new(schema),
            members: MemberPrinter::new(schema),
            interfaces: InterfaceFlattener::new(schema),
        }
    }

    pub fn visit(&self, declaration: Declaration<'_>) -> Result<Markup, RenderError> {
        match declaration {
            Declaration::Type(ty) => self.visit_type(ty),
            Declaration::Directive(directive) => self.visit_directive(directive),
        }
    }

    /// The `schema { … }` section listing the root operation types
    pub fn visit_schema(&self) -> Result<Markup, RenderError> {
        let mut markup = section(SCHEMA_ANCHOR, self.schema.description());
        markup.inline(line(&format!(
            "{}{}&nbsp;{}",
            self_link(SCHEMA_ANCHOR, "schema"),
            self.members.print_usages(self.schema.usages())?,
            span("bracket-curly", "{")
        )));

        let roots = [
            ("query", Some(self.schema.query())),
            ("mutation", self.schema.mutation()),
            ("subscription", self.schema.subscription()),
        ];
        for (operation, root) in roots {
            let target = match root {
                Some(name) => self.links.named_type_link(name, "field-type")?,
                None => span("null", "null"),
            };
            markup.inline(format!(
                r#"<div class="line offset-1">{}{}&nbsp;{target}</div>"#,
                span("field-name", operation),
                span("colon", ":")
            ));
        }

        markup.inline(closing_brace()).close("</section>");
        Ok(markup)
    }

    pub fn visit_type(&self, ty: &TypeDefinition) -> Result<Markup, RenderError> {
        let anchor = type_anchor(&ty.name);
        let mut markup = section(&anchor, ty.description.as_deref());
        let header = format!(
            "{}&nbsp;{}",
            self_link(&anchor, ty.kind().keyword()),
            span("typename", &ty.name)
        );
        let usages = self.members.print_usages(&ty.usages)?;

        match &ty.kind {
            TypeDefinitionKind::Object { interfaces, fields }
            | TypeDefinitionKind::Interface { interfaces, fields } => {
                let implements = self.print_implements(interfaces)?;
                markup.append(braced(
                    &format!("{header}{implements}{usages}"),
                    self.members.print_fields(fields)?,
                ));
            }
            TypeDefinitionKind::InputObject { fields } => {
                markup.append(braced(
                    &format!("{header}{usages}"),
                    self.members.print_input_fields(fields)?,
                ));
            }
            TypeDefinitionKind::Enum { items } => {
                markup.append(braced(
                    &format!("{header}{usages}"),
                    self.members.print_enum_items(items)?,
                ));
            }
            TypeDefinitionKind::Union { members } => {
                let mut html = format!("{header}{usages}");
                if !members.is_empty() {
                    let links = members
                        .iter()
                        .map(|member| self.links.named_type_link(member, "union-type"))
                        .collect::<Result<Vec<_>, _>>()?;
                    html.push_str("&nbsp;");
                    html.push_str(&span("equals", "="));
                    html.push_str("&nbsp;");
                    html.push_str(&links.join(VERTICAL_LINE));
                }
                markup.inline(line(&html));
            }
            TypeDefinitionKind::Scalar => {
                markup.inline(line(&format!("{header}{usages}")));
            }
        }

        markup.close("</section>");
        Ok(markup)
    }

    pub fn visit_directive(&self, directive: &DirectiveDefinition) -> Result<Markup, RenderError> {
        let anchor = directive_anchor(&directive.name);
        let mut markup = section(&anchor, directive.description.as_deref());

        let mut tail = String::new();
        if directive.repeatable {
            tail.push_str("&nbsp;");
            tail.push_str(&span("keyword", "repeatable"));
        }
        tail.push_str("&nbsp;");
        tail.push_str(&span("keyword", "on"));
        tail.push_str("&nbsp;");
        let locations: Vec<_> = directive
            .locations
            .iter()
            .map(|location| span("location", location.as_str()))
            .collect();
        tail.push_str(&locations.join(VERTICAL_LINE));

        markup
            .open(LINE)
            .inline(format!(
                "{}&nbsp;{}",
                self_link(&anchor, "directive"),
                span("typename", &format!("@{}", directive.name))
            ))
            .append(self.members.print_arguments(&directive.arguments)?)
            .inline(tail)
            .close("</div>")
            .close("</section>");
        Ok(markup)
    }

    /// `implements A & B` clause over the flattened interfaces; empty when
    /// there are none
    fn print_implements(&self, interfaces: &[String]) -> Result<String, RenderError> {
        let links = self.interfaces.flatten(interfaces)?;
        if links.is_empty() {
            return Ok(String::new());
        }
        Ok(format!(
            "&nbsp;{}&nbsp;{}",
            span("keyword", "implements"),
            links.join(AMPERSAND)
        ))
    }
}

/// Open a section with its anchor and block description
fn section(anchor: &str, description: Option<&str>) -> Markup {
    let mut markup = Markup::new();
    markup
        .open(format!(r#"<section id="{}">"#, escape_html(anchor)))
        .append(print_block(description));
    markup
}

/// Keyword linking to its own section
fn self_link(anchor: &str, keyword: &str) -> String {
    format!(
        r##"<a class="self-link" href="#{}">{}</a>"##,
        escape_html(anchor),
        span("keyword", keyword)
    )
}

fn line(html: &str) -> String {
    format!("{LINE}{html}</div>")
}

fn closing_brace() -> String {
    line(&span("bracket-curly", "}"))
}

/// Header line ending in `{`, indented body, closing `}` line
fn braced(header: &str, body: Markup) -> Markup {
    let mut markup = Markup::new();
    markup
        .inline(line(&format!("{header}&nbsp;{}", span("bracket-curly", "{"))))
        .open(BODY)
        .append(body)
        .close("</div>")
        .inline(closing_brace());
    markup
}
