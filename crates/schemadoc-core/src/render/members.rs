//! Fields, arguments, enum items and directive usages

use crate::error::RenderError;
use crate::schema::{Argument, Described, DirectiveUsage, EnumItem, Field, Schema};

use super::description::print_inline;
use super::links::LinkResolver;
use super::markup::{span, span_html, Markup};
use super::values::print_value;

/// Empty line placed between documented members
pub(crate) const SEPARATOR: &str = r#"<div class="line"></div>"#;

/// Renders the members attached to a declaration
#[derive(Debug, Clone, Copy)]
pub struct MemberPrinter<'a> {
    schema: &'a Schema,
    links: LinkResolver<'a>,
}

impl<'a> MemberPrinter<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
            links: LinkResolver::new(schema),
        }
    }

    /// Render members in order, one item each.
    ///
    /// A separator goes between two items when either of them has a
    /// description.
    pub fn print_members<T, F>(&self, members: &[T], print: F) -> Result<Markup, RenderError>
    where
        T: Described,
        F: Fn(&T) -> Result<Markup, RenderError>,
    {
        let mut markup = Markup::new();
        let mut previous_described = false;

        for (index, member) in members.iter().enumerate() {
            let described = member.has_description();
            if index > 0 && (previous_described || described) {
                markup.inline(SEPARATOR);
            }
            markup
                .open(r#"<div class="item">"#)
                .append(print(member)?)
                .close("</div>");
            previous_described = described;
        }

        Ok(markup)
    }

    pub fn print_fields(&self, fields: &[Field]) -> Result<Markup, RenderError> {
        self.print_members(fields, |field| self.print_field(field))
    }

    /// Input object fields share the argument layout
    pub fn print_input_fields(&self, fields: &[Argument]) -> Result<Markup, RenderError> {
        self.print_members(fields, |field| self.print_argument(field))
    }

    pub fn print_enum_items(&self, items: &[EnumItem]) -> Result<Markup, RenderError> {
        self.print_members(items, |item| self.print_enum_item(item))
    }

    /// Parenthesized argument list of a field or directive; nothing when
    /// there are no arguments
    pub fn print_arguments(&self, arguments: &[Argument]) -> Result<Markup, RenderError> {
        let mut markup = Markup::new();
        if arguments.is_empty() {
            return Ok(markup);
        }

        markup
            .inline(span("bracket-round", "("))
            .open(r#"<div class="arguments offset-1">"#)
            .append(self.print_members(arguments, |argument| self.print_argument(argument))?)
            .close("</div>")
            .inline(span("bracket-round", ")"));
        Ok(markup)
    }

    pub fn print_field(&self, field: &Field) -> Result<Markup, RenderError> {
        let mut markup = print_inline(field.description());
        markup
            .inline(span("field-name", &field.name))
            .append(self.print_arguments(&field.arguments)?)
            .inline(format!(
                "{}&nbsp;{}{}",
                span("colon", ":"),
                self.links.type_link(&field.ty, "field-type")?,
                self.print_usages(&field.usages)?
            ));
        Ok(markup)
    }

    pub fn print_argument(&self, argument: &Argument) -> Result<Markup, RenderError> {
        let default = match &argument.default {
            Some(value) => format!(
                "&nbsp;{}&nbsp;{}",
                span("equals", "="),
                span_html("argument-value", &print_value(value)?)
            ),
            None => String::new(),
        };

        let mut markup = print_inline(argument.description());
        markup.inline(format!(
            "{}{}&nbsp;{}{default}{}",
            span("argument-name", &argument.name),
            span("colon", ":"),
            self.links.type_link(&argument.ty, "argument-type")?,
            self.print_usages(&argument.usages)?
        ));
        Ok(markup)
    }

    pub fn print_enum_item(&self, item: &EnumItem) -> Result<Markup, RenderError> {
        let mut markup = print_inline(item.description());
        markup.inline(format!(
            "{}{}",
            span("enum-item", &item.name),
            self.print_usages(&item.usages)?
        ));
        Ok(markup)
    }

    /// All usages, each introduced by a non-breaking space
    pub fn print_usages(&self, usages: &[DirectiveUsage]) -> Result<String, RenderError> {
        usages.iter().map(|usage| self.print_usage(usage)).collect()
    }

    /// `@name` link plus the arguments whose value differs from the declared
    /// default
    pub fn print_usage(&self, usage: &DirectiveUsage) -> Result<String, RenderError> {
        let directive = self
            .schema
            .directive(&usage.directive)
            .ok_or_else(|| RenderError::UnknownDirective(usage.directive.clone()))?;

        let mut printable = Vec::new();
        for (name, value) in &usage.arguments {
            let declared =
                directive
                    .argument(name)
                    .ok_or_else(|| RenderError::UnknownArgument {
                        directive: usage.directive.clone(),
                        argument: name.clone(),
                    })?;
            if declared.default.as_ref() == Some(value) {
                continue;
            }
            printable.push(format!(
                "{}{}&nbsp;{}",
                span("directive-usage-name", name),
                span("colon", ":"),
                span_html("directive-usage-value", &print_value(value)?)
            ));
        }

        let mut output = format!("&nbsp;{}", self.links.directive_link(&usage.directive)?);
        if !printable.is_empty() {
            output.push_str(&span("bracket-round", "("));
            output.push_str(&printable.join(&format!("{}&nbsp;", span("comma", ","))));
            output.push_str(&span("bracket-round", ")"));
        }
        Ok(output)
    }
}
