//! Named declarations and the members attached to them

use std::fmt;

use indexmap::IndexMap;

use super::type_ref::TypeRef;
use super::value::Value;

/// Where a declaration comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Origin {
    /// Defined by the GraphQL specification
    BuiltIn,
    /// Defined by the schema author
    #[default]
    User,
}

/// Introspection kind of a named type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Object,
    Interface,
    Union,
    InputObject,
    Scalar,
    Enum,
}

impl TypeKind {
    /// The SDL keyword introducing a declaration of this kind
    pub fn keyword(self) -> &'static str {
        match self {
            TypeKind::Object => "type",
            TypeKind::Interface => "interface",
            TypeKind::Union => "union",
            TypeKind::InputObject => "input",
            TypeKind::Scalar => "scalar",
            TypeKind::Enum => "enum",
        }
    }
}

/// Anything that can carry a free-text description
pub trait Described {
    fn description(&self) -> Option<&str>;

    /// Whether a non-empty description is present
    fn has_description(&self) -> bool {
        self.description().is_some_and(|d| !d.is_empty())
    }
}

/// A named type declaration
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDefinition {
    pub name: String,
    pub description: Option<String>,
    pub origin: Origin,
    pub usages: Vec<DirectiveUsage>,
    pub kind: TypeDefinitionKind,
}

/// Kind-specific body of a type declaration
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDefinitionKind {
    Object {
        interfaces: Vec<String>,
        fields: Vec<Field>,
    },
    Interface {
        interfaces: Vec<String>,
        fields: Vec<Field>,
    },
    Union {
        members: Vec<String>,
    },
    InputObject {
        fields: Vec<Argument>,
    },
    Scalar,
    Enum {
        items: Vec<EnumItem>,
    },
}

impl TypeDefinition {
    fn new(name: impl Into<String>, kind: TypeDefinitionKind) -> Self {
        Self {
            name: name.into(),
            description: None,
            origin: Origin::User,
            usages: Vec::new(),
            kind,
        }
    }

    pub fn object(name: impl Into<String>) -> Self {
        Self::new(
            name,
            TypeDefinitionKind::Object {
                interfaces: Vec::new(),
                fields: Vec::new(),
            },
        )
    }

    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(
            name,
            TypeDefinitionKind::Interface {
                interfaces: Vec::new(),
                fields: Vec::new(),
            },
        )
    }

    pub fn union(name: impl Into<String>) -> Self {
        Self::new(name, TypeDefinitionKind::Union { members: Vec::new() })
    }

    pub fn input_object(name: impl Into<String>) -> Self {
        Self::new(name, TypeDefinitionKind::InputObject { fields: Vec::new() })
    }

    pub fn scalar(name: impl Into<String>) -> Self {
        Self::new(name, TypeDefinitionKind::Scalar)
    }

    pub fn enumeration(name: impl Into<String>) -> Self {
        Self::new(name, TypeDefinitionKind::Enum { items: Vec::new() })
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    #[must_use]
    pub fn with_usage(mut self, usage: DirectiveUsage) -> Self {
        self.usages.push(usage);
        self
    }

    /// Add an implemented interface; ignored for kinds without interfaces
    #[must_use]
    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        if let TypeDefinitionKind::Object { interfaces, .. }
        | TypeDefinitionKind::Interface { interfaces, .. } = &mut self.kind
        {
            interfaces.push(interface.into());
        }
        self
    }

    /// Add a field; ignored for kinds without output fields
    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        if let TypeDefinitionKind::Object { fields, .. }
        | TypeDefinitionKind::Interface { fields, .. } = &mut self.kind
        {
            fields.push(field);
        }
        self
    }

    /// Add an input field; ignored for kinds other than input objects
    #[must_use]
    pub fn input_field(mut self, field: Argument) -> Self {
        if let TypeDefinitionKind::InputObject { fields } = &mut self.kind {
            fields.push(field);
        }
        self
    }

    /// Add a union member; ignored for kinds other than unions
    #[must_use]
    pub fn member(mut self, member: impl Into<String>) -> Self {
        if let TypeDefinitionKind::Union { members } = &mut self.kind {
            members.push(member.into());
        }
        self
    }

    /// Add an enum item; ignored for kinds other than enums
    #[must_use]
    pub fn item(mut self, item: EnumItem) -> Self {
        if let TypeDefinitionKind::Enum { items } = &mut self.kind {
            items.push(item);
        }
        self
    }

    pub fn kind(&self) -> TypeKind {
        match self.kind {
            TypeDefinitionKind::Object { .. } => TypeKind::Object,
            TypeDefinitionKind::Interface { .. } => TypeKind::Interface,
            TypeDefinitionKind::Union { .. } => TypeKind::Union,
            TypeDefinitionKind::InputObject { .. } => TypeKind::InputObject,
            TypeDefinitionKind::Scalar => TypeKind::Scalar,
            TypeDefinitionKind::Enum { .. } => TypeKind::Enum,
        }
    }

    /// Interfaces declared directly on this type
    pub fn interfaces(&self) -> &[String] {
        match &self.kind {
            TypeDefinitionKind::Object { interfaces, .. }
            | TypeDefinitionKind::Interface { interfaces, .. } => interfaces,
            _ => &[],
        }
    }

    pub fn is_builtin(&self) -> bool {
        self.origin == Origin::BuiltIn
    }
}

impl Described for TypeDefinition {
    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// An output field of an object or interface
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub description: Option<String>,
    pub ty: TypeRef,
    pub arguments: Vec<Argument>,
    pub usages: Vec<DirectiveUsage>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            description: None,
            ty,
            arguments: Vec::new(),
            usages: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_argument(mut self, argument: Argument) -> Self {
        self.arguments.push(argument);
        self
    }

    #[must_use]
    pub fn with_usage(mut self, usage: DirectiveUsage) -> Self {
        self.usages.push(usage);
        self
    }
}

impl Described for Field {
    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// A field argument, directive argument or input object field
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub name: String,
    pub description: Option<String>,
    pub ty: TypeRef,
    pub default: Option<Value>,
    pub usages: Vec<DirectiveUsage>,
}

impl Argument {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            description: None,
            ty,
            default: None,
            usages: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    #[must_use]
    pub fn with_usage(mut self, usage: DirectiveUsage) -> Self {
        self.usages.push(usage);
        self
    }
}

impl Described for Argument {
    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// A value of an enum type
#[derive(Debug, Clone, PartialEq)]
pub struct EnumItem {
    pub name: String,
    pub description: Option<String>,
    pub usages: Vec<DirectiveUsage>,
}

impl EnumItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            usages: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_usage(mut self, usage: DirectiveUsage) -> Self {
        self.usages.push(usage);
        self
    }
}

impl Described for EnumItem {
    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// A directive declaration
#[derive(Debug, Clone, PartialEq)]
pub struct DirectiveDefinition {
    pub name: String,
    pub description: Option<String>,
    pub origin: Origin,
    pub arguments: Vec<Argument>,
    pub repeatable: bool,
    pub locations: Vec<DirectiveLocation>,
}

impl DirectiveDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            origin: Origin::User,
            arguments: Vec::new(),
            repeatable: false,
            locations: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    #[must_use]
    pub fn with_argument(mut self, argument: Argument) -> Self {
        self.arguments.push(argument);
        self
    }

    #[must_use]
    pub fn repeatable(mut self) -> Self {
        self.repeatable = true;
        self
    }

    #[must_use]
    pub fn on(mut self, location: DirectiveLocation) -> Self {
        self.locations.push(location);
        self
    }

    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|a| a.name == name)
    }

    pub fn is_builtin(&self) -> bool {
        self.origin == Origin::BuiltIn
    }
}

impl Described for DirectiveDefinition {
    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// An application of a directive, with the argument values supplied at the
/// usage site in source order
#[derive(Debug, Clone, PartialEq)]
pub struct DirectiveUsage {
    pub directive: String,
    pub arguments: IndexMap<String, Value>,
}

impl DirectiveUsage {
    pub fn new(directive: impl Into<String>) -> Self {
        Self {
            directive: directive.into(),
            arguments: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_argument(mut self, name: impl Into<String>, value: Value) -> Self {
        self.arguments.insert(name.into(), value);
        self
    }
}

/// Where a directive may be applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveLocation {
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

impl DirectiveLocation {
    pub fn as_str(self) -> &'static str {
        match self {
            DirectiveLocation::Query => "QUERY",
            DirectiveLocation::Mutation => "MUTATION",
            DirectiveLocation::Subscription => "SUBSCRIPTION",
            DirectiveLocation::Field => "FIELD",
            DirectiveLocation::FragmentDefinition => "FRAGMENT_DEFINITION",
            DirectiveLocation::FragmentSpread => "FRAGMENT_SPREAD",
            DirectiveLocation::InlineFragment => "INLINE_FRAGMENT",
            DirectiveLocation::VariableDefinition => "VARIABLE_DEFINITION",
            DirectiveLocation::Schema => "SCHEMA",
            DirectiveLocation::Scalar => "SCALAR",
            DirectiveLocation::Object => "OBJECT",
            DirectiveLocation::FieldDefinition => "FIELD_DEFINITION",
            DirectiveLocation::ArgumentDefinition => "ARGUMENT_DEFINITION",
            DirectiveLocation::Interface => "INTERFACE",
            DirectiveLocation::Union => "UNION",
            DirectiveLocation::Enum => "ENUM",
            DirectiveLocation::EnumValue => "ENUM_VALUE",
            DirectiveLocation::InputObject => "INPUT_OBJECT",
            DirectiveLocation::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }
}

impl fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_display() {
        assert_eq!(DirectiveLocation::FieldDefinition.to_string(), "FIELD_DEFINITION");
        assert_eq!(DirectiveLocation::Schema.to_string(), "SCHEMA");
    }

    #[test]
    fn test_builder_ignores_mismatched_members() {
        let scalar = TypeDefinition::scalar("Date")
            .field(Field::new("x", TypeRef::named("Int")))
            .implements("Node");
        assert_eq!(scalar.kind, TypeDefinitionKind::Scalar);
        assert!(scalar.interfaces().is_empty());
    }

    #[test]
    fn test_has_description_ignores_empty() {
        let item = EnumItem::new("A").with_description("");
        assert!(!item.has_description());
        assert!(EnumItem::new("B").with_description("b").has_description());
    }
}
