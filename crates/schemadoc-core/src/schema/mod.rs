//! Read-only schema graph consumed by the renderer
//!
//! Types and directives live in two name-keyed arenas. Cross references
//! (interfaces, union members, field types, directive usages) are stored as
//! names and resolved by lookup, so diamond-shaped interface hierarchies need
//! no shared ownership.

mod builtins;
mod definition;
pub mod sdl;
mod type_ref;
mod value;

use indexmap::IndexMap;

use crate::error::SchemaError;

pub use builtins::{BUILTIN_DIRECTIVES, BUILTIN_SCALARS, DEFAULT_DEPRECATION_REASON};
pub use definition::{
    Argument, Described, DirectiveDefinition, DirectiveLocation, DirectiveUsage, EnumItem, Field,
    Origin, TypeDefinition, TypeDefinitionKind, TypeKind,
};
pub use type_ref::TypeRef;
pub use value::{ScalarValue, Value};

/// A complete schema: root operations plus every named type and directive
#[derive(Debug, Clone)]
pub struct Schema {
    description: Option<String>,
    query: String,
    mutation: Option<String>,
    subscription: Option<String>,
    usages: Vec<DirectiveUsage>,
    types: IndexMap<String, TypeDefinition>,
    directives: IndexMap<String, DirectiveDefinition>,
}

impl Schema {
    /// Start building a schema; built-in scalars and directives are
    /// pre-registered
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn mutation(&self) -> Option<&str> {
        self.mutation.as_deref()
    }

    pub fn subscription(&self) -> Option<&str> {
        self.subscription.as_deref()
    }

    /// Directives applied to the schema definition itself
    pub fn usages(&self) -> &[DirectiveUsage] {
        &self.usages
    }

    pub fn type_definition(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.get(name)
    }

    pub fn directive(&self, name: &str) -> Option<&DirectiveDefinition> {
        self.directives.get(name)
    }

    /// All named types in declaration order, built-ins first
    pub fn types(&self) -> impl Iterator<Item = &TypeDefinition> {
        self.types.values()
    }

    /// All directives in declaration order, built-ins first
    pub fn directives(&self) -> impl Iterator<Item = &DirectiveDefinition> {
        self.directives.values()
    }
}

/// Incremental construction of a [`Schema`]
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    description: Option<String>,
    query: Option<String>,
    mutation: Option<String>,
    subscription: Option<String>,
    explicit_roots: bool,
    usages: Vec<DirectiveUsage>,
    types: IndexMap<String, TypeDefinition>,
    directives: IndexMap<String, DirectiveDefinition>,
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaBuilder {
    pub fn new() -> Self {
        let types = builtins::scalars()
            .into_iter()
            .map(|t| (t.name.clone(), t))
            .collect();
        let directives = builtins::directives()
            .into_iter()
            .map(|d| (d.name.clone(), d))
            .collect();

        Self {
            description: None,
            query: None,
            mutation: None,
            subscription: None,
            explicit_roots: false,
            usages: Vec::new(),
            types,
            directives,
        }
    }

    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn query(&mut self, name: impl Into<String>) -> &mut Self {
        self.query = Some(name.into());
        self
    }

    pub fn mutation(&mut self, name: impl Into<String>) -> &mut Self {
        self.mutation = Some(name.into());
        self
    }

    pub fn subscription(&mut self, name: impl Into<String>) -> &mut Self {
        self.subscription = Some(name.into());
        self
    }

    /// Root operations are exactly the ones named, with no inference from
    /// type names. Set when the source carries a `schema { ... }` definition.
    pub fn explicit_roots(&mut self) -> &mut Self {
        self.explicit_roots = true;
        self
    }

    /// Apply a directive to the schema definition
    pub fn usage(&mut self, usage: DirectiveUsage) -> &mut Self {
        self.usages.push(usage);
        self
    }

    /// Register a named type.
    ///
    /// Redeclaring a built-in scalar is accepted and leaves the built-in in
    /// place.
    pub fn add_type(&mut self, definition: TypeDefinition) -> Result<&mut Self, SchemaError> {
        if let Some(existing) = self.types.get(&definition.name) {
            if existing.is_builtin() && existing.kind() == definition.kind() {
                tracing::trace!(name = %definition.name, "skipping built-in type redeclaration");
                return Ok(self);
            }
            return Err(SchemaError::DuplicateType(definition.name));
        }
        self.types.insert(definition.name.clone(), definition);
        Ok(self)
    }

    pub fn add_directive(
        &mut self,
        definition: DirectiveDefinition,
    ) -> Result<&mut Self, SchemaError> {
        if let Some(existing) = self.directives.get(&definition.name) {
            if existing.is_builtin() {
                tracing::trace!(name = %definition.name, "skipping built-in directive redeclaration");
                return Ok(self);
            }
            return Err(SchemaError::DuplicateDirective(definition.name));
        }
        self.directives.insert(definition.name.clone(), definition);
        Ok(self)
    }

    pub(crate) fn type_mut(&mut self, name: &str) -> Option<&mut TypeDefinition> {
        self.types.get_mut(name)
    }

    /// Finish the schema.
    ///
    /// Unless roots are explicit, unnamed root operations fall back to types
    /// called `Query`, `Mutation` and `Subscription` when those exist.
    pub fn build(&self) -> Result<Schema, SchemaError> {
        let fallback = |named: &Option<String>, conventional: &str| {
            named.clone().or_else(|| {
                (!self.explicit_roots && self.types.contains_key(conventional))
                    .then(|| conventional.to_string())
            })
        };

        let query = fallback(&self.query, "Query").ok_or(SchemaError::MissingQueryType)?;
        let mutation = fallback(&self.mutation, "Mutation");
        let subscription = fallback(&self.subscription, "Subscription");

        Ok(Schema {
            description: self.description.clone(),
            query,
            mutation,
            subscription,
            usages: self.usages.clone(),
            types: self.types.clone(),
            directives: self.directives.clone(),
        })
    }
}
