//! Schema loading from GraphQL SDL
//!
//! Kept separate from the schema model so parser types never leak into the
//! renderer.

use async_graphql_parser::types as ast;
use async_graphql_parser::{Pos, Positioned};
use async_graphql_value::ConstValue;

use super::{
    Argument, DirectiveDefinition, DirectiveLocation, DirectiveUsage, EnumItem, Field, Origin,
    Schema, SchemaBuilder, TypeDefinition, TypeDefinitionKind, TypeRef, Value,
};
use crate::error::SchemaError;

/// Parse SDL text into a [`Schema`].
///
/// Type extensions are merged into their base definitions after all base
/// definitions have been collected, so their relative order in the source
/// does not matter.
pub fn parse_sdl(source: &str) -> Result<Schema, SchemaError> {
    let document =
        async_graphql_parser::parse_schema(source).map_err(|e| SchemaError::Parse(e.to_string()))?;

    let mut builder = Schema::builder();
    let mut extensions = Vec::new();

    for definition in &document.definitions {
        match definition {
            ast::TypeSystemDefinition::Schema(schema) => {
                ingest_schema_definition(&schema.node, &mut builder)?;
            }
            ast::TypeSystemDefinition::Type(ty) if ty.node.extend => extensions.push(&ty.node),
            ast::TypeSystemDefinition::Type(ty) => {
                builder.add_type(convert_type(&ty.node)?)?;
            }
            ast::TypeSystemDefinition::Directive(directive) => {
                builder.add_directive(convert_directive(&directive.node, source)?)?;
            }
        }
    }

    for extension in &extensions {
        apply_extension(extension, &mut builder)?;
    }

    tracing::debug!(
        definitions = document.definitions.len(),
        extensions = extensions.len(),
        "loaded schema from SDL"
    );

    builder.build()
}

fn ingest_schema_definition(
    definition: &ast::SchemaDefinition,
    builder: &mut SchemaBuilder,
) -> Result<(), SchemaError> {
    builder.explicit_roots();
    if let Some(query) = &definition.query {
        builder.query(query.node.as_str());
    }
    if let Some(mutation) = &definition.mutation {
        builder.mutation(mutation.node.as_str());
    }
    if let Some(subscription) = &definition.subscription {
        builder.subscription(subscription.node.as_str());
    }
    for usage in convert_usages(&definition.directives)? {
        builder.usage(usage);
    }
    Ok(())
}

fn apply_extension(
    extension: &ast::TypeDefinition,
    builder: &mut SchemaBuilder,
) -> Result<(), SchemaError> {
    let extension = convert_type(extension)?;
    let base = builder
        .type_mut(&extension.name)
        .ok_or_else(|| SchemaError::UnknownExtension(extension.name.clone()))?;

    let expected = extension.kind();
    if base.kind() != expected {
        return Err(SchemaError::ExtensionKindMismatch {
            found: base.kind(),
            name: extension.name,
            expected,
        });
    }

    base.usages.extend(extension.usages);

    match (&mut base.kind, extension.kind) {
        (
            TypeDefinitionKind::Object { interfaces, fields },
            TypeDefinitionKind::Object {
                interfaces: more_interfaces,
                fields: more_fields,
            },
        )
        | (
            TypeDefinitionKind::Interface { interfaces, fields },
            TypeDefinitionKind::Interface {
                interfaces: more_interfaces,
                fields: more_fields,
            },
        ) => {
            interfaces.extend(more_interfaces);
            fields.extend(more_fields);
        }
        (TypeDefinitionKind::Union { members }, TypeDefinitionKind::Union { members: more }) => {
            members.extend(more);
        }
        (
            TypeDefinitionKind::InputObject { fields },
            TypeDefinitionKind::InputObject { fields: more },
        ) => fields.extend(more),
        (TypeDefinitionKind::Enum { items }, TypeDefinitionKind::Enum { items: more }) => {
            items.extend(more);
        }
        _ => {}
    }

    Ok(())
}

fn convert_type(definition: &ast::TypeDefinition) -> Result<TypeDefinition, SchemaError> {
    let kind = match &definition.kind {
        ast::TypeKind::Scalar => TypeDefinitionKind::Scalar,
        ast::TypeKind::Object(object) => TypeDefinitionKind::Object {
            interfaces: names(&object.implements),
            fields: convert_fields(&object.fields)?,
        },
        ast::TypeKind::Interface(interface) => TypeDefinitionKind::Interface {
            interfaces: names(&interface.implements),
            fields: convert_fields(&interface.fields)?,
        },
        ast::TypeKind::Union(union) => TypeDefinitionKind::Union {
            members: names(&union.members),
        },
        ast::TypeKind::Enum(enum_type) => TypeDefinitionKind::Enum {
            items: enum_type
                .values
                .iter()
                .map(|value| {
                    Ok(EnumItem {
                        name: value.node.value.node.to_string(),
                        description: description(&value.node.description),
                        usages: convert_usages(&value.node.directives)?,
                    })
                })
                .collect::<Result<_, SchemaError>>()?,
        },
        ast::TypeKind::InputObject(input) => TypeDefinitionKind::InputObject {
            fields: convert_arguments(&input.fields)?,
        },
    };

    Ok(TypeDefinition {
        name: definition.name.node.to_string(),
        description: description(&definition.description),
        origin: Origin::User,
        usages: convert_usages(&definition.directives)?,
        kind,
    })
}

fn convert_directive(
    definition: &ast::DirectiveDefinition,
    source: &str,
) -> Result<DirectiveDefinition, SchemaError> {
    Ok(DirectiveDefinition {
        name: definition.name.node.to_string(),
        description: description(&definition.description),
        origin: Origin::User,
        arguments: convert_arguments(&definition.arguments)?,
        repeatable: declares_repeatable(definition, source),
        locations: definition
            .locations
            .iter()
            .map(|location| convert_location(location.node))
            .collect(),
    })
}

fn convert_location(location: ast::DirectiveLocation) -> DirectiveLocation {
    match location {
        ast::DirectiveLocation::Query => DirectiveLocation::Query,
        ast::DirectiveLocation::Mutation => DirectiveLocation::Mutation,
        ast::DirectiveLocation::Subscription => DirectiveLocation::Subscription,
        ast::DirectiveLocation::Field => DirectiveLocation::Field,
        ast::DirectiveLocation::FragmentDefinition => DirectiveLocation::FragmentDefinition,
        ast::DirectiveLocation::FragmentSpread => DirectiveLocation::FragmentSpread,
        ast::DirectiveLocation::InlineFragment => DirectiveLocation::InlineFragment,
        ast::DirectiveLocation::VariableDefinition => DirectiveLocation::VariableDefinition,
        ast::DirectiveLocation::Schema => DirectiveLocation::Schema,
        ast::DirectiveLocation::Scalar => DirectiveLocation::Scalar,
        ast::DirectiveLocation::Object => DirectiveLocation::Object,
        ast::DirectiveLocation::FieldDefinition => DirectiveLocation::FieldDefinition,
        ast::DirectiveLocation::ArgumentDefinition => DirectiveLocation::ArgumentDefinition,
        ast::DirectiveLocation::Interface => DirectiveLocation::Interface,
        ast::DirectiveLocation::Union => DirectiveLocation::Union,
        ast::DirectiveLocation::Enum => DirectiveLocation::Enum,
        ast::DirectiveLocation::EnumValue => DirectiveLocation::EnumValue,
        ast::DirectiveLocation::InputObject => DirectiveLocation::InputObject,
        ast::DirectiveLocation::InputFieldDefinition => DirectiveLocation::InputFieldDefinition,
    }
}

/// The parser's `is_repeatable` flag is set for every directive, so the
/// keyword is looked up in the source between the name (or argument list)
/// and the first location.
fn declares_repeatable(definition: &ast::DirectiveDefinition, source: &str) -> bool {
    let Some(first_location) = definition.locations.first() else {
        return false;
    };
    let (Some(start), Some(end)) = (
        byte_offset(source, definition.name.pos),
        byte_offset(source, first_location.pos),
    ) else {
        return false;
    };
    let Some(between) = source.get(start + definition.name.node.len()..end) else {
        return false;
    };
    let after_arguments = match between.rfind(')') {
        Some(close) => &between[close + 1..],
        None => between,
    };

    after_arguments
        .lines()
        .map(|line| line.split('#').next().unwrap_or_default())
        .flat_map(str::split_whitespace)
        .any(|token| token == "repeatable")
}

/// Byte offset of a parser position, counting lines and columns the way the
/// parser does
fn byte_offset(source: &str, pos: Pos) -> Option<usize> {
    let (mut line, mut column) = (1, 1);
    for (index, ch) in source.char_indices() {
        if line == pos.line && column == pos.column {
            return Some(index);
        }
        match ch {
            '\r' => column = 1,
            '\n' => {
                line += 1;
                column = 1;
            }
            _ => column += 1,
        }
    }
    (line == pos.line && column == pos.column).then_some(source.len())
}

fn convert_fields(
    fields: &[Positioned<ast::FieldDefinition>],
) -> Result<Vec<Field>, SchemaError> {
    fields
        .iter()
        .map(|field| {
            let field = &field.node;
            Ok(Field {
                name: field.name.node.to_string(),
                description: description(&field.description),
                ty: convert_type_ref(&field.ty.node),
                arguments: convert_arguments(&field.arguments)?,
                usages: convert_usages(&field.directives)?,
            })
        })
        .collect()
}

fn convert_arguments(
    arguments: &[Positioned<ast::InputValueDefinition>],
) -> Result<Vec<Argument>, SchemaError> {
    arguments
        .iter()
        .map(|argument| {
            let argument = &argument.node;
            Ok(Argument {
                name: argument.name.node.to_string(),
                description: description(&argument.description),
                ty: convert_type_ref(&argument.ty.node),
                default: argument
                    .default_value
                    .as_ref()
                    .map(|value| convert_value(&value.node))
                    .transpose()?,
                usages: convert_usages(&argument.directives)?,
            })
        })
        .collect()
}

fn convert_usages(
    directives: &[Positioned<ast::ConstDirective>],
) -> Result<Vec<DirectiveUsage>, SchemaError> {
    directives
        .iter()
        .map(|directive| {
            let directive = &directive.node;
            let mut usage = DirectiveUsage::new(directive.name.node.as_str());
            for (name, value) in &directive.arguments {
                usage
                    .arguments
                    .insert(name.node.to_string(), convert_value(&value.node)?);
            }
            Ok(usage)
        })
        .collect()
}

fn convert_type_ref(ty: &ast::Type) -> TypeRef {
    let base = match &ty.base {
        ast::BaseType::Named(name) => TypeRef::named(name.as_str()),
        ast::BaseType::List(inner) => convert_type_ref(inner).list(),
    };

    if ty.nullable {
        base
    } else {
        base.non_null()
    }
}

fn convert_value(value: &ConstValue) -> Result<Value, SchemaError> {
    let converted = match value {
        ConstValue::Null => Value::Null,
        ConstValue::Boolean(b) => Value::boolean(*b),
        ConstValue::Number(number) => match number.as_i64() {
            Some(int) => Value::int(int),
            None => Value::float(
                number
                    .as_f64()
                    .ok_or_else(|| SchemaError::UnsupportedValue(number.to_string()))?,
            ),
        },
        ConstValue::String(s) => Value::string(s.as_str()),
        ConstValue::Enum(name) => Value::enum_value(name.as_str()),
        ConstValue::List(items) => {
            Value::List(items.iter().map(convert_value).collect::<Result<_, _>>()?)
        }
        ConstValue::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(name, value)| Ok((name.to_string(), convert_value(value)?)))
                .collect::<Result<_, SchemaError>>()?,
        ),
        ConstValue::Binary(_) => {
            return Err(SchemaError::UnsupportedValue(
                "binary values have no SDL literal form".to_string(),
            ))
        }
    };
    Ok(converted)
}

fn names(names: &[Positioned<async_graphql_value::Name>]) -> Vec<String> {
    names.iter().map(|name| name.node.to_string()).collect()
}

fn description(description: &Option<Positioned<String>>) -> Option<String> {
    description.as_ref().map(|d| d.node.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ScalarValue, TypeKind};

    const SDL: &str = r#"
        schema @contact(name: "API team") {
          query: RootQuery
        }

        directive @contact(name: String!, url: String = "https://example.com") on SCHEMA
        directive @tag(name: String!) repeatable on OBJECT | FIELD_DEFINITION

        """
        Something with an id.
        """
        interface Node {
          id: ID!
        }

        type RootQuery {
          "Look up a node."
          node(id: ID!, depth: Int = 2): Node
          users(filter: UserFilter = {active: true}, order: Order = ASC): [User!]!
        }

        type User implements Node @tag(name: "people") {
          id: ID!
          name: String @deprecated
        }

        union SearchResult = User

        input UserFilter {
          active: Boolean
          ratio: Float = 0.5
        }

        enum Order {
          ASC
          DESC @deprecated(reason: "use ASC")
        }

        extend type User {
          email: String
        }

        extend enum Order {
          RANDOM
        }
    "#;

    #[test]
    fn test_parse_roots_and_schema_usages() {
        let schema = parse_sdl(SDL).unwrap();
        assert_eq!(schema.query(), "RootQuery");
        assert_eq!(schema.mutation(), None);
        assert_eq!(schema.usages().len(), 1);
        assert_eq!(schema.usages()[0].directive, "contact");
    }

    #[test]
    fn test_parse_kinds() {
        let schema = parse_sdl(SDL).unwrap();
        let kind = |name: &str| schema.type_definition(name).unwrap().kind();
        assert_eq!(kind("Node"), TypeKind::Interface);
        assert_eq!(kind("User"), TypeKind::Object);
        assert_eq!(kind("SearchResult"), TypeKind::Union);
        assert_eq!(kind("UserFilter"), TypeKind::InputObject);
        assert_eq!(kind("Order"), TypeKind::Enum);
        assert_eq!(kind("ID"), TypeKind::Scalar);
    }

    #[test]
    fn test_parse_fields_and_defaults() {
        let schema = parse_sdl(SDL).unwrap();
        let TypeDefinitionKind::Object { fields, .. } =
            &schema.type_definition("RootQuery").unwrap().kind
        else {
            panic!("expected object");
        };

        assert_eq!(fields[0].description.as_deref(), Some("Look up a node."));
        assert_eq!(fields[0].arguments[1].default, Some(Value::int(2)));
        assert_eq!(fields[1].ty.to_string(), "[User!]!");
        assert_eq!(
            fields[1].arguments[0].default,
            Some(Value::object([("active", Value::boolean(true))]))
        );
        assert_eq!(fields[1].arguments[1].default, Some(Value::enum_value("ASC")));
    }

    #[test]
    fn test_parse_float_default() {
        let schema = parse_sdl(SDL).unwrap();
        let TypeDefinitionKind::InputObject { fields } =
            &schema.type_definition("UserFilter").unwrap().kind
        else {
            panic!("expected input object");
        };
        assert_eq!(
            fields[1].default,
            Some(Value::Scalar(ScalarValue::Float(0.5)))
        );
    }

    #[test]
    fn test_parse_directive_definitions() {
        let schema = parse_sdl(SDL).unwrap();
        let tag = schema.directive("tag").unwrap();
        assert!(tag.repeatable);
        assert_eq!(
            tag.locations,
            vec![DirectiveLocation::Object, DirectiveLocation::FieldDefinition]
        );
        assert!(!schema.directive("contact").unwrap().repeatable);
    }

    #[test]
    fn test_repeatable_only_when_declared() {
        let schema = parse_sdl(
            r#"
            directive @auth on OBJECT
            directive @repeatable(note: String = ") repeatable") on FIELD_DEFINITION
            directive @audit(
              # not repeatable
              level: Int
            ) on OBJECT
            "Cache hints" directive @cache(ttl: Int)
              repeatable
              on FIELD_DEFINITION | OBJECT
            type Query { a: Int }
            "#,
        )
        .unwrap();

        assert!(!schema.directive("auth").unwrap().repeatable);
        assert!(!schema.directive("repeatable").unwrap().repeatable);
        assert!(!schema.directive("audit").unwrap().repeatable);
        assert!(schema.directive("cache").unwrap().repeatable);
    }

    #[test]
    fn test_byte_offset() {
        let source = "ab\nçd\n";
        assert_eq!(byte_offset(source, Pos { line: 1, column: 1 }), Some(0));
        assert_eq!(byte_offset(source, Pos { line: 2, column: 2 }), Some(5));
        assert_eq!(byte_offset(source, Pos { line: 4, column: 1 }), None);
    }

    #[test]
    fn test_explicit_schema_definition_disables_root_inference() {
        let schema = parse_sdl(
            "schema { query: RootQuery } type RootQuery { a: Int } type Mutation { b: Int }",
        )
        .unwrap();
        assert_eq!(schema.query(), "RootQuery");
        assert_eq!(schema.mutation(), None);
    }

    #[test]
    fn test_builtin_redeclarations_are_accepted() {
        let schema = parse_sdl(
            r#"
            scalar String
            directive @deprecated(reason: String = "No longer supported") on FIELD_DEFINITION | ENUM_VALUE
            type Query { a: String @deprecated }
            "#,
        )
        .unwrap();
        assert!(schema.type_definition("String").unwrap().is_builtin());
        assert!(schema.directive("deprecated").unwrap().is_builtin());
    }

    #[test]
    fn test_extensions_are_merged() {
        let schema = parse_sdl(SDL).unwrap();
        let user = schema.type_definition("User").unwrap();
        let TypeDefinitionKind::Object { interfaces, fields } = &user.kind else {
            panic!("expected object");
        };
        assert_eq!(interfaces, &vec!["Node".to_string()]);
        let names: Vec<_> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["id", "name", "email"]);

        let TypeDefinitionKind::Enum { items } = &schema.type_definition("Order").unwrap().kind
        else {
            panic!("expected enum");
        };
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_extension_of_unknown_type() {
        let err = parse_sdl("type Query { a: Int } extend type Missing { b: Int }").unwrap_err();
        assert_eq!(err, SchemaError::UnknownExtension("Missing".to_string()));
    }

    #[test]
    fn test_extension_kind_mismatch() {
        let err = parse_sdl("type Query { a: Int } extend enum Query { B }").unwrap_err();
        assert_eq!(
            err,
            SchemaError::ExtensionKindMismatch {
                name: "Query".to_string(),
                found: TypeKind::Object,
                expected: TypeKind::Enum,
            }
        );
    }

    #[test]
    fn test_parse_error() {
        let err = parse_sdl("type Query {").unwrap_err();
        assert!(matches!(err, SchemaError::Parse(_)));
    }
}
