//! Definition-item builders
//!
//! One small pure builder per documented property. Formatters compose the
//! subset relevant to their variant.

use indexmap::IndexMap;

use crate::field::FieldDescriptor;
use crate::node::{DefinitionItem, Node};
use crate::value::Value;
use crate::xref::{make_reference, QualifiedName};

/// "Default" item: the canonical literal rendering of the default value.
///
/// An absent default renders as the literal `None`. Configurable fields use
/// [`target_item`] instead.
pub fn default_item(field: &FieldDescriptor) -> DefinitionItem {
    let rendered = field
        .default
        .as_ref()
        .map_or_else(|| Value::None.repr(), Value::repr);
    DefinitionItem::new("Default", vec![Node::literal(rendered)])
}

/// "Data type" item: a cross-reference to the field's data type with the
/// namespace shown.
pub fn dtype_item(field: &FieldDescriptor) -> DefinitionItem {
    DefinitionItem::new("Data type", vec![make_reference(&field.data_type, false)])
}

/// "Field type" item: a cross-reference to the variant's own qualified type
/// name with the namespace hidden in the display text. The common namespace
/// prefix is redundant in context.
pub fn field_type_item(field: &FieldDescriptor) -> DefinitionItem {
    let type_name = QualifiedName::new(field.kind.type_name());
    DefinitionItem::new("Field type", vec![make_reference(&type_name, true)])
}

/// "Default" item for configurable fields: a cross-reference to the target
/// type with the namespace shown, since the field's value is itself a
/// configurable class and should be a navigable link.
pub fn target_item(target: &QualifiedName) -> DefinitionItem {
    DefinitionItem::new("Default", vec![make_reference(target, false)])
}

/// "Choices" item: a nested definition list with one entry per allowed
/// value, in the supplied order. Entry terms are the values' canonical
/// literal renderings; entry definitions are plain paragraphs of the
/// explanation text, never re-parsed as markup.
pub fn choices_item(allowed: &IndexMap<Value, String>) -> DefinitionItem {
    let entries = allowed
        .iter()
        .map(|(value, doc)| DefinitionItem::new(value.repr(), vec![Node::paragraph(doc)]))
        .collect();
    DefinitionItem::new("Choices", vec![Node::definition_list(entries)])
}

/// "Range" item: the precomputed human-readable interval string as a
/// paragraph.
pub fn range_item(range_description: &str) -> DefinitionItem {
    DefinitionItem::new("Range", vec![Node::paragraph(range_description)])
}
