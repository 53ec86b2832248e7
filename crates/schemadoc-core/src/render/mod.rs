//! HTML rendering of a schema
//!
//! [`HtmlRenderer`] drives the pipeline: the sorter fixes the order of
//! declarations, the declaration visitor renders one section per declaration,
//! and the assembler joins the sections, adds the navigation panel and strips
//! formatting whitespace.
//!
//! Anchor ids (`graphql-schema`, `graphql-type-<name>`,
//! `graphql-directive-<name>`) and class names are stable; stylesheets and
//! tooling may rely on them.

mod assemble;
mod declarations;
mod description;
mod interfaces;
mod links;
mod markup;
mod members;
mod sorter;
mod values;

use std::fmt::Write;

use tracing::{debug, trace};

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::schema::Schema;

pub use assemble::{normalize_whitespace, DocumentAssembler};
pub use declarations::DeclarationVisitor;
pub use description::{print_block, print_inline};
pub use interfaces::InterfaceFlattener;
pub use links::{directive_anchor, type_anchor, LinkResolver, SCHEMA_ANCHOR};
pub use markup::{escape_html, Markup};
pub use members::MemberPrinter;
pub use sorter::{order, Declaration};
pub use values::print_value;

/// Renders a whole schema to HTML
pub struct HtmlRenderer<'a> {
    schema: &'a Schema,
    config: RenderConfig,
}

impl<'a> HtmlRenderer<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
            config: RenderConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Declarations in document order
    pub fn declarations(&self) -> Vec<Declaration<'a>> {
        order(self.schema, self.config.include_builtins)
    }

    /// Anchor ids in document order, starting with the schema section
    pub fn anchors(&self) -> Vec<String> {
        std::iter::once(SCHEMA_ANCHOR.to_string())
            .chain(self.declarations().iter().map(Declaration::anchor))
            .collect()
    }

    /// The schema section followed by one section per declaration, before
    /// assembly
    pub fn render_fragments(&self) -> Result<Vec<String>, RenderError> {
        let visitor = DeclarationVisitor::new(self.schema);
        let declarations = self.declarations();
        debug!(
            declarations = declarations.len(),
            include_builtins = self.config.include_builtins,
            "rendering schema"
        );

        let mut fragments = Vec::with_capacity(declarations.len() + 1);
        fragments.push(visitor.visit_schema()?.render());
        for declaration in declarations {
            trace!(name = declaration.name(), "rendering declaration");
            fragments.push(visitor.visit(declaration)?.render());
        }
        Ok(fragments)
    }

    /// Render the complete document
    pub fn render(&self) -> Result<String, RenderError> {
        let fragments = self.render_fragments()?;
        let document = DocumentAssembler::new(&self.config.navigation).assemble(&fragments);
        debug!(
            fragments = fragments.len(),
            bytes = document.len(),
            "assembled document"
        );

        if self.config.standalone {
            self.wrap_page(&document)
        } else {
            Ok(document)
        }
    }

    fn wrap_page(&self, document: &str) -> Result<String, RenderError> {
        let mut output = String::new();

        writeln!(output, "<!DOCTYPE html>")?;
        writeln!(output, "<html lang=\"en\">")?;
        writeln!(output, "<head>")?;
        writeln!(output, "  <meta charset=\"UTF-8\">")?;
        writeln!(
            output,
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
        )?;
        writeln!(output, "  <title>{}</title>", escape_html(&self.config.title))?;
        for stylesheet in &self.config.stylesheets {
            writeln!(
                output,
                "  <link rel=\"stylesheet\" href=\"{}\">",
                escape_html(stylesheet)
            )?;
        }
        writeln!(output, "</head>")?;
        writeln!(output, "<body>")?;
        writeln!(output, "<main class=\"graphql-schema\">{document}</main>")?;
        writeln!(output, "</body>")?;
        writeln!(output, "</html>")?;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Field, TypeDefinition, TypeRef};

    fn schema() -> Schema {
        let mut builder = Schema::builder();
        builder
            .add_type(
                TypeDefinition::object("Query").field(Field::new("id", TypeRef::named("ID"))),
            )
            .unwrap();
        builder.build().unwrap()
    }

    #[test]
    fn test_anchors() {
        let schema = schema();
        let renderer = HtmlRenderer::new(&schema);
        assert_eq!(renderer.anchors(), ["graphql-schema", "graphql-type-Query"]);
    }

    #[test]
    fn test_fragments_start_with_schema() {
        let schema = schema();
        let fragments = HtmlRenderer::new(&schema).render_fragments().unwrap();
        assert_eq!(fragments.len(), 2);
        assert!(fragments[0].starts_with("<section id=\"graphql-schema\">"));
    }

    #[test]
    fn test_page_wrapper() {
        let schema = schema();
        let config = RenderConfig {
            title: "Shop <API>".to_string(),
            stylesheets: vec!["style.css".to_string()],
            ..RenderConfig::default()
        };
        let html = HtmlRenderer::new(&schema).with_config(config).render().unwrap();

        assert!(html.starts_with("<!DOCTYPE html>\n"));
        assert!(html.contains("<title>Shop &lt;API&gt;</title>"));
        assert!(html.contains("<link rel=\"stylesheet\" href=\"style.css\">"));
        assert!(html.contains("<main class=\"graphql-schema\"><div class=\"floating-container\">"));
    }

    #[test]
    fn test_fragment_mode() {
        let schema = schema();
        let config = RenderConfig {
            standalone: false,
            ..RenderConfig::default()
        };
        let html = HtmlRenderer::new(&schema).with_config(config).render().unwrap();
        assert!(html.starts_with("<div class=\"floating-container\">"));
        assert!(!html.contains("<html"));
    }
}
