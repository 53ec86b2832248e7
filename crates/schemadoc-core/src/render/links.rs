//! Cross-reference resolution
//!
//! Anchor ids are derived from the declaration name and its namespace. The
//! same helpers produce both the `id` of a section and the `href` of every link
//! pointing at it, so the two cannot drift apart.

use crate::error::RenderError;
use crate::schema::{Described, Schema, TypeRef};

use super::markup::{escape_html, link, span};

/// Anchor id of the schema section
pub const SCHEMA_ANCHOR: &str = "graphql-schema";

/// Anchor id of a named type
pub fn type_anchor(name: &str) -> String {
    format!("graphql-type-{name}")
}

/// Anchor id of a directive
pub fn directive_anchor(name: &str) -> String {
    format!("graphql-directive-{name}")
}

/// Resolves type references and directive names to links
#[derive(Debug, Clone, Copy)]
pub struct LinkResolver<'a> {
    schema: &'a Schema,
}

impl<'a> LinkResolver<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Link to the named type underneath `ty`, displaying its wrappers.
    ///
    /// Built-in targets render without an `href`.
    pub fn type_link(&self, ty: &TypeRef, class: &str) -> Result<String, RenderError> {
        let name = ty.named_type();
        let target = self
            .schema
            .type_definition(name)
            .ok_or_else(|| RenderError::UnknownType(name.to_string()))?;

        let anchor = (!target.is_builtin()).then(|| type_anchor(name));
        let display = display_type(ty)?;

        Ok(link(
            class,
            anchor.as_deref(),
            target.description().unwrap_or_default(),
            &display,
        ))
    }

    /// Link to a named type without wrappers
    pub fn named_type_link(&self, name: &str, class: &str) -> Result<String, RenderError> {
        self.type_link(&TypeRef::named(name), class)
    }

    /// `@name` link to a directive declaration
    pub fn directive_link(&self, name: &str) -> Result<String, RenderError> {
        let target = self
            .schema
            .directive(name)
            .ok_or_else(|| RenderError::UnknownDirective(name.to_string()))?;

        let anchor = (!target.is_builtin()).then(|| directive_anchor(name));

        Ok(link(
            "typename",
            anchor.as_deref(),
            target.description().unwrap_or_default(),
            &format!("@{}", escape_html(name)),
        ))
    }
}

/// Display markup of a type reference, with wrapper glyphs in nesting order
fn display_type(ty: &TypeRef) -> Result<String, RenderError> {
    match ty {
        TypeRef::Named(name) => Ok(escape_html(name)),
        TypeRef::NotNull(inner) => {
            if matches!(**inner, TypeRef::NotNull(_)) {
                return Err(RenderError::UnsupportedTypeRef(ty.to_string()));
            }
            Ok(format!("{}{}", display_type(inner)?, span("exclamation-mark", "!")))
        }
        TypeRef::List(inner) => Ok(format!(
            "{}{}{}",
            span("bracket-square", "["),
            display_type(inner)?,
            span("bracket-square", "]")
        )),
    }
}
