//! Declarations defined by the GraphQL specification itself

use super::definition::{Argument, DirectiveDefinition, DirectiveLocation, Origin, TypeDefinition};
use super::type_ref::TypeRef;
use super::value::Value;

/// Names of the specification scalars
pub const BUILTIN_SCALARS: [&str; 5] = ["String", "Int", "Float", "Boolean", "ID"];

/// Names of the specification directives
pub const BUILTIN_DIRECTIVES: [&str; 5] = ["include", "skip", "deprecated", "specifiedBy", "oneOf"];

/// Default reason of `@deprecated`
pub const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

pub(crate) fn scalars() -> Vec<TypeDefinition> {
    [
        (
            "String",
            "The `String` scalar type represents textual data, represented as UTF-8 character sequences.",
        ),
        (
            "Int",
            "The `Int` scalar type represents non-fractional signed whole numeric values.",
        ),
        (
            "Float",
            "The `Float` scalar type represents signed double-precision fractional values.",
        ),
        ("Boolean", "The `Boolean` scalar type represents `true` or `false`."),
        (
            "ID",
            "The `ID` scalar type represents a unique identifier, often used to refetch an object or as key for a cache.",
        ),
    ]
    .into_iter()
    .map(|(name, description)| {
        TypeDefinition::scalar(name)
            .with_description(description)
            .with_origin(Origin::BuiltIn)
    })
    .collect()
}

pub(crate) fn directives() -> Vec<DirectiveDefinition> {
    let executable = [
        DirectiveLocation::Field,
        DirectiveLocation::FragmentSpread,
        DirectiveLocation::InlineFragment,
    ];

    let include = executable.into_iter().fold(
        DirectiveDefinition::new("include")
            .with_description("Directs the executor to include this field or fragment only when the `if` argument is true.")
            .with_argument(
                Argument::new("if", TypeRef::named("Boolean").non_null())
                    .with_description("Included when true."),
            ),
        DirectiveDefinition::on,
    );

    let skip = executable.into_iter().fold(
        DirectiveDefinition::new("skip")
            .with_description("Directs the executor to skip this field or fragment when the `if` argument is true.")
            .with_argument(
                Argument::new("if", TypeRef::named("Boolean").non_null())
                    .with_description("Skipped when true."),
            ),
        DirectiveDefinition::on,
    );

    let deprecated = DirectiveDefinition::new("deprecated")
        .with_description("Marks an element of a GraphQL schema as no longer supported.")
        .with_argument(
            Argument::new("reason", TypeRef::named("String"))
                .with_description("Explains why this element was deprecated.")
                .with_default(Value::string(DEFAULT_DEPRECATION_REASON)),
        )
        .on(DirectiveLocation::FieldDefinition)
        .on(DirectiveLocation::ArgumentDefinition)
        .on(DirectiveLocation::InputFieldDefinition)
        .on(DirectiveLocation::EnumValue);

    let specified_by = DirectiveDefinition::new("specifiedBy")
        .with_description("Exposes a URL that specifies the behavior of this scalar.")
        .with_argument(
            Argument::new("url", TypeRef::named("String").non_null())
                .with_description("The URL that specifies the behavior of this scalar."),
        )
        .on(DirectiveLocation::Scalar);

    let one_of = DirectiveDefinition::new("oneOf")
        .with_description("Indicates exactly one field must be supplied and this field must not be `null`.")
        .on(DirectiveLocation::InputObject);

    [include, skip, deprecated, specified_by, one_of]
        .into_iter()
        .map(|d| d.with_origin(Origin::BuiltIn))
        .collect()
}
