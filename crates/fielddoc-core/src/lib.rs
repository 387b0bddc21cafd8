//! Fielddoc Core - Field documentation renderer for typed configuration
//! schemas
//!
//! This crate provides the core functionality:
//! - Field descriptors: typed metadata for configuration fields
//! - Document tree: abstract, recursively composable output nodes
//! - Cross-references: linkable qualified type names
//! - Formatters: one per field variant, composing definition items
//! - Dispatch: variant type name to formatter, failing on unknown variants
//!
//! The renderer is synchronous and stateless: each call consumes one
//! descriptor and returns a fresh section tree, so rendering a whole schema
//! is an embarrassingly parallel map over its fields. Discovery of field
//! descriptors, placement of sections into a larger document, and final
//! link resolution all belong to the consuming pipeline.

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Document tree node types
pub mod node;

/// Literal configuration values and their canonical rendering
pub mod value;

/// Field descriptors and variants
pub mod field;

/// Qualified names, cross-references, and anchor ids
pub mod xref;

/// Rich-text collaborator interface
pub mod markup;

/// Definition-item builders
pub mod items;

/// Field variant formatters and description embedding
pub mod formatter;

/// Formatter dispatch table
pub mod registry;

/// Single-field and batch rendering entry points
pub mod render;

/// Renderer error types
pub mod error;

/// Convenience re-export of the document tree types
pub use node::{DefinitionItem, Node};

/// Convenience re-export of descriptor types
pub use field::{FieldDescriptor, FieldKind};

/// Convenience re-export of the literal value type
pub use value::Value;

/// Convenience re-export of qualified names
pub use xref::QualifiedName;

/// Convenience re-export of the markup collaborator interface
pub use markup::{MarkupParser, PlainTextParser, RenderContext};

/// Convenience re-export of the dispatch table
pub use registry::{FormatterFn, FormatterRegistry};

/// Convenience re-export of the rendering entry points
pub use render::{render_field, render_fields, section_id};

/// Convenience re-export of the error type
pub use error::RenderError;
