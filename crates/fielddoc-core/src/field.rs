//! Field descriptors
//!
//! A [`FieldDescriptor`] is the renderer's read-only input: structured
//! metadata describing one configuration property. The field's name is the
//! key of the owning schema mapping and travels alongside the descriptor
//! rather than inside it.

use indexmap::IndexMap;

use crate::value::Value;
use crate::xref::QualifiedName;

/// Structured metadata for one configuration field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Qualified name of the value's data type
    pub data_type: QualifiedName,
    /// Default value; `None` when the schema supplies no default
    pub default: Option<Value>,
    /// Raw markup description text
    pub doc: String,
    /// Whether the field may be left unset
    pub optional: bool,
    /// The field variant and its variant-specific attributes
    pub kind: FieldKind,
}

impl FieldDescriptor {
    /// Create a descriptor with no default, empty documentation, and
    /// `optional = false`.
    pub fn new(data_type: impl Into<QualifiedName>, kind: FieldKind) -> Self {
        Self {
            data_type: data_type.into(),
            default: None,
            doc: String::new(),
            optional: false,
            kind,
        }
    }

    /// Set the default value.
    #[must_use]
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    /// Set the description text.
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = doc.into();
        self
    }

    /// Mark the field optional.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// The five recognized field variants.
///
/// Exactly one discriminator per descriptor; variant-specific attributes
/// live in the variant payload, so attributes invalid for the current
/// discriminator cannot be inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// A plain single-valued field
    Scalar,
    /// A field whose value is itself a configurable class; its "default"
    /// is the target type rather than a plain value
    Configurable {
        /// Qualified name of the configured target type
        target: QualifiedName,
    },
    /// A sequence-valued field with Scalar default semantics
    List,
    /// A field restricted to an enumerated set of literal values
    Choice {
        /// Allowed value to explanation, in supplied order
        allowed: IndexMap<Value, String>,
    },
    /// A numerically bounded field
    Range {
        /// Precomputed human-readable interval string
        range_description: String,
    },
}

impl FieldKind {
    /// The variant's own qualified type name.
    ///
    /// Used as the dispatch-table key and to build the "Field type"
    /// cross-reference.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::Scalar => "fielddoc.fields.ScalarField",
            FieldKind::Configurable { .. } => "fielddoc.fields.ConfigurableField",
            FieldKind::List => "fielddoc.fields.ListField",
            FieldKind::Choice { .. } => "fielddoc.fields.ChoiceField",
            FieldKind::Range { .. } => "fielddoc.fields.RangeField",
        }
    }

    /// Short human-readable variant label, e.g. for error messages.
    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::Scalar => "ScalarField",
            FieldKind::Configurable { .. } => "ConfigurableField",
            FieldKind::List => "ListField",
            FieldKind::Choice { .. } => "ChoiceField",
            FieldKind::Range { .. } => "RangeField",
        }
    }
}
