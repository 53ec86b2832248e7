//! Document order of declarations

use crate::schema::{DirectiveDefinition, Schema, TypeDefinition, TypeKind};

use super::links::{directive_anchor, type_anchor};

/// A top-level declaration rendered as its own section
#[derive(Debug, Clone, Copy)]
pub enum Declaration<'a> {
    Type(&'a TypeDefinition),
    Directive(&'a DirectiveDefinition),
}

impl<'a> Declaration<'a> {
    pub fn name(&self) -> &'a str {
        match *self {
            Declaration::Type(ty) => &ty.name,
            Declaration::Directive(directive) => &directive.name,
        }
    }

    /// Anchor id of the section rendered for this declaration
    pub fn anchor(&self) -> String {
        match self {
            Declaration::Type(ty) => type_anchor(&ty.name),
            Declaration::Directive(directive) => directive_anchor(&directive.name),
        }
    }

    fn is_builtin(&self) -> bool {
        match self {
            Declaration::Type(ty) => ty.is_builtin(),
            Declaration::Directive(directive) => directive.is_builtin(),
        }
    }
}

/// Position of a kind group in the document
fn group(kind: TypeKind) -> u8 {
    match kind {
        TypeKind::Interface => 0,
        TypeKind::Object => 1,
        TypeKind::Union => 2,
        TypeKind::InputObject => 3,
        TypeKind::Scalar => 4,
        TypeKind::Enum => 5,
    }
}

/// Types grouped by kind (interface, object, union, input, scalar, enum),
/// then all directives. Names are ordered byte-wise within each group.
pub fn order(schema: &Schema, include_builtins: bool) -> Vec<Declaration<'_>> {
    let mut types: Vec<_> = schema.types().collect();
    types.sort_by(|a, b| {
        group(a.kind())
            .cmp(&group(b.kind()))
            .then_with(|| a.name.cmp(&b.name))
    });

    let mut directives: Vec<_> = schema.directives().collect();
    directives.sort_by(|a, b| a.name.cmp(&b.name));

    types
        .into_iter()
        .map(Declaration::Type)
        .chain(directives.into_iter().map(Declaration::Directive))
        .filter(|declaration| include_builtins || !declaration.is_builtin())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::DirectiveLocation;

    fn names(declarations: &[Declaration<'_>]) -> Vec<String> {
        declarations.iter().map(|d| d.name().to_string()).collect()
    }

    #[test]
    fn test_kind_groups_then_names() {
        let mut builder = Schema::builder();
        builder
            .add_type(TypeDefinition::enumeration("Beta"))
            .unwrap()
            .add_type(TypeDefinition::object("Alpha"))
            .unwrap()
            .add_type(TypeDefinition::interface("Zeta"))
            .unwrap()
            .add_type(TypeDefinition::object("Query"))
            .unwrap()
            .add_type(TypeDefinition::scalar("Date"))
            .unwrap()
            .add_type(TypeDefinition::input_object("Filter"))
            .unwrap()
            .add_type(TypeDefinition::union("Result"))
            .unwrap()
            .add_directive(DirectiveDefinition::new("auth").on(DirectiveLocation::Object))
            .unwrap();
        let schema = builder.build().unwrap();

        assert_eq!(
            names(&order(&schema, false)),
            ["Zeta", "Alpha", "Query", "Result", "Filter", "Date", "Beta", "auth"]
        );
    }

    #[test]
    fn test_names_compare_case_sensitively() {
        let mut builder = Schema::builder();
        builder
            .add_type(TypeDefinition::object("Query"))
            .unwrap()
            .add_type(TypeDefinition::object("apple"))
            .unwrap()
            .add_type(TypeDefinition::object("Banana"))
            .unwrap();
        let schema = builder.build().unwrap();

        assert_eq!(names(&order(&schema, false)), ["Banana", "Query", "apple"]);
    }

    #[test]
    fn test_builtins_optional() {
        let mut builder = Schema::builder();
        builder.add_type(TypeDefinition::object("Query")).unwrap();
        let schema = builder.build().unwrap();

        assert_eq!(names(&order(&schema, false)), ["Query"]);

        let all = names(&order(&schema, true));
        assert_eq!(
            all,
            [
                "Query", "Boolean", "Float", "ID", "Int", "String", "deprecated", "include",
                "oneOf", "skip", "specifiedBy"
            ]
        );
    }
}
