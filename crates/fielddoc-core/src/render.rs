//! Rendering entry points
//!
//! Convenience wrappers over dispatch for the common cases: one field, or
//! every field of a schema's ordered mapping. Rendering is stateless, so a
//! caller may also map over descriptors concurrently with no coordination.

use indexmap::IndexMap;

use crate::error::RenderError;
use crate::field::FieldDescriptor;
use crate::markup::RenderContext;
use crate::node::Node;
use crate::registry::FormatterRegistry;
use crate::xref::QualifiedName;

/// Suffix appended to derived section identifiers.
const SECTION_ID_SUFFIX: &str = "field-config";

/// Derive the stable section identifier for a field of a schema.
///
/// Joins the schema's qualified name, the field name, and a fixed suffix
/// with dots, e.g. `pkg.Config.retries.field-config`.
pub fn section_id(schema: &QualifiedName, field_name: &str) -> String {
    format!("{schema}.{field_name}.{SECTION_ID_SUFFIX}")
}

/// Render one field through the built-in dispatch table.
pub fn render_field(
    name: &str,
    field: &FieldDescriptor,
    section_id: &str,
    ctx: &RenderContext<'_>,
) -> Result<Node, RenderError> {
    let formatter = FormatterRegistry::new().select(field)?;
    formatter(name, field, section_id, ctx)
}

/// Render every field of a schema's ordered mapping.
///
/// Returns one `(field name, result)` pair per field, in mapping order.
/// Errors are field-scoped: a failed field never aborts its siblings, and
/// the caller decides whether to skip it with a diagnostic or abort the
/// batch.
pub fn render_fields(
    schema: &QualifiedName,
    fields: &IndexMap<String, FieldDescriptor>,
    ctx: &RenderContext<'_>,
) -> Vec<(String, Result<Node, RenderError>)> {
    let registry = FormatterRegistry::new();
    fields
        .iter()
        .map(|(name, field)| {
            let id = section_id(schema, name);
            let result = registry
                .select(field)
                .and_then(|formatter| formatter(name, field, &id, ctx));
            (name.clone(), result)
        })
        .collect()
}
