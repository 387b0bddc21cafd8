//! Renderer error types

use thiserror::Error;

/// An error rendering a single field.
///
/// Every error is scoped to one field's render. A batch-rendering caller
/// decides whether a failed field aborts the batch or is skipped with a
/// diagnostic; the renderer never substitutes default content for a failed
/// field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Dispatch found no formatter registered for the variant.
    #[error("unknown field variant: no formatter registered for {type_name}")]
    UnknownFieldVariant {
        /// Qualified type name of the unrecognized variant
        type_name: String,
    },

    /// A formatter was invoked with a descriptor of the wrong variant.
    /// Indicates a caller or dispatch wiring bug.
    #[error("field '{field}' is not a {expected}, got {found}")]
    VariantMismatch {
        /// Name of the field being rendered
        field: String,
        /// Variant the formatter handles
        expected: &'static str,
        /// Variant actually supplied
        found: &'static str,
    },

    /// A required attribute for the variant is absent.
    #[error("malformed descriptor for field '{field}': {reason}")]
    MalformedDescriptor {
        /// Name of the field being rendered
        field: String,
        /// What is missing or inconsistent
        reason: String,
    },
}
