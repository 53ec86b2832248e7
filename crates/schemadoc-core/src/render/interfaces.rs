//! Transitive interface expansion

use std::collections::HashSet;

use crate::error::RenderError;
use crate::schema::Schema;

use super::links::LinkResolver;

/// Expands declared interfaces into the full, de-duplicated set a type
/// implements.
pub struct InterfaceFlattener<'a> {
    schema: &'a Schema,
    links: LinkResolver<'a>,
}

impl<'a> InterfaceFlattener<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
            links: LinkResolver::new(schema),
        }
    }

    /// Interface names in depth-first order: an interface's own interfaces
    /// come before the interface itself. The first occurrence of a name wins.
    pub fn flatten_names(&self, interfaces: &'a [String]) -> Result<Vec<&'a str>, RenderError> {
        let mut seen = HashSet::new();
        let mut ordered = Vec::new();
        self.visit(interfaces, &mut seen, &mut ordered)?;
        Ok(ordered)
    }

    /// Links to every flattened interface
    pub fn flatten(&self, interfaces: &'a [String]) -> Result<Vec<String>, RenderError> {
        self.flatten_names(interfaces)?
            .into_iter()
            .map(|name| self.links.named_type_link(name, "typename"))
            .collect()
    }

    fn visit(
        &self,
        interfaces: &'a [String],
        seen: &mut HashSet<&'a str>,
        ordered: &mut Vec<&'a str>,
    ) -> Result<(), RenderError> {
        for name in interfaces {
            // Marking on entry also stops cycles in malformed schemas
            if !seen.insert(name.as_str()) {
                continue;
            }
            let interface = self
                .schema
                .type_definition(name)
                .ok_or_else(|| RenderError::UnknownType(name.clone()))?;
            self.visit(interface.interfaces(), seen, ordered)?;
            ordered.push(name);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::TypeDefinition;

    fn diamond() -> Schema {
        let mut builder = Schema::builder();
        builder
            .add_type(TypeDefinition::object("Query"))
            .unwrap()
            .add_type(TypeDefinition::interface("B"))
            .unwrap()
            .add_type(TypeDefinition::interface("A").implements("B"))
            .unwrap()
            .add_type(TypeDefinition::interface("C").implements("B"))
            .unwrap()
            .add_type(TypeDefinition::object("T").implements("A").implements("C"))
            .unwrap();
        builder.build().unwrap()
    }

    #[test]
    fn test_diamond_yields_single_base() {
        let schema = diamond();
        let flattener = InterfaceFlattener::new(&schema);
        let t = schema.type_definition("T").unwrap();
        assert_eq!(flattener.flatten_names(t.interfaces()).unwrap(), ["B", "A", "C"]);
    }

    #[test]
    fn test_links_use_typename_class() {
        let schema = diamond();
        let flattener = InterfaceFlattener::new(&schema);
        let t = schema.type_definition("T").unwrap();
        let links = flattener.flatten(t.interfaces()).unwrap();
        assert_eq!(links.len(), 3);
        assert_eq!(
            links[0],
            r##"<a class="typename" href="#graphql-type-B" title="">B</a>"##
        );
    }

    #[test]
    fn test_unknown_interface() {
        let schema = diamond();
        let flattener = InterfaceFlattener::new(&schema);
        let declared = vec!["Nope".to_string()];
        assert_eq!(
            flattener.flatten_names(&declared),
            Err(RenderError::UnknownType("Nope".to_string()))
        );
    }

    #[test]
    fn test_cycle_terminates() {
        let mut builder = Schema::builder();
        builder
            .add_type(TypeDefinition::object("Query"))
            .unwrap()
            .add_type(TypeDefinition::interface("X").implements("Y"))
            .unwrap()
            .add_type(TypeDefinition::interface("Y").implements("X"))
            .unwrap();
        let schema = builder.build().unwrap();
        let flattener = InterfaceFlattener::new(&schema);
        let declared = vec!["X".to_string()];
        assert_eq!(flattener.flatten_names(&declared).unwrap(), ["Y", "X"]);
    }
}
