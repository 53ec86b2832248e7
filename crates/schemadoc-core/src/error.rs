//! Error types for schema loading and rendering

use thiserror::Error;

use crate::schema::TypeKind;

/// Errors raised while rendering a schema.
///
/// Rendering has no partial-output mode: any of these aborts the document.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("unknown type '{0}'")]
    UnknownType(String),

    #[error("unknown directive '@{0}'")]
    UnknownDirective(String),

    #[error("directive '@{directive}' has no argument '{argument}'")]
    UnknownArgument { directive: String, argument: String },

    #[error("unsupported value shape: {0}")]
    UnsupportedValue(String),

    #[error("unsupported type reference: {0}")]
    UnsupportedTypeRef(String),

    #[error("failed to write markup")]
    Format(#[from] std::fmt::Error),
}

/// Errors raised while building a schema
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    #[error("failed to parse schema: {0}")]
    Parse(String),

    #[error("type '{0}' is defined more than once")]
    DuplicateType(String),

    #[error("directive '@{0}' is defined more than once")]
    DuplicateDirective(String),

    #[error("schema has no query root type")]
    MissingQueryType,

    #[error("cannot extend unknown type '{0}'")]
    UnknownExtension(String),

    #[error("cannot extend {found:?} '{name}' as {expected:?}")]
    ExtensionKindMismatch {
        name: String,
        found: TypeKind,
        expected: TypeKind,
    },

    #[error("unsupported value shape: {0}")]
    UnsupportedValue(String),
}
