//! Schemadoc Core - GraphQL schema documentation renderer
//!
//! This crate provides:
//! - Schema: read-only schema graph with built-in scalars and directives
//! - SDL loading: schema construction from GraphQL SDL text
//! - Render: cross-linked HTML for every declaration, assembled into one page
//! - Config: renderer options loaded from `schemadoc.toml`

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Schema model - types, directives, members and values
pub mod schema;

/// HTML renderer - sections, links and document assembly
pub mod render;

/// Renderer configuration
pub mod config;

/// Error types for schema loading and rendering
pub mod error;

/// Convenience re-export of the schema entry points
pub use schema::{sdl::parse_sdl, Schema, SchemaBuilder};

/// Convenience re-export of the renderer
pub use render::HtmlRenderer;

/// Convenience re-export of configuration types
pub use config::{ConfigError, NavigationConfig, RenderConfig};

/// Convenience re-export of error types
pub use error::{RenderError, SchemaError};
