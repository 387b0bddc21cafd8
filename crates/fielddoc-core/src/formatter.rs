//! Field variant formatters
//!
//! One formatter per field variant. Each assembles the variant's definition
//! items in a fixed order: Default first, then Choices (choice fields only),
//! Data type, Range (range fields only), and Field type last. Consumers rely
//! on "Default" appearing first. The parsed description is embedded as the
//! section's closing child.

use crate::error::RenderError;
use crate::field::{FieldDescriptor, FieldKind};
use crate::items::{
    choices_item, default_item, dtype_item, field_type_item, range_item, target_item,
};
use crate::markup::RenderContext;
use crate::node::{DefinitionItem, Node};

fn mismatch(name: &str, expected: &'static str, field: &FieldDescriptor) -> RenderError {
    RenderError::VariantMismatch {
        field: name.to_string(),
        expected,
        found: field.kind.label(),
    }
}

fn make_field_section(
    name: &str,
    section_id: &str,
    items: Vec<DefinitionItem>,
    description: Node,
) -> Node {
    Node::section(
        section_id,
        name,
        vec![Node::definition_list(items), description],
    )
}

/// Format a scalar field: Default, Data type, Field type.
pub fn format_scalar_field(
    name: &str,
    field: &FieldDescriptor,
    section_id: &str,
    ctx: &RenderContext<'_>,
) -> Result<Node, RenderError> {
    if !matches!(field.kind, FieldKind::Scalar) {
        return Err(mismatch(name, "ScalarField", field));
    }

    let items = vec![default_item(field), dtype_item(field), field_type_item(field)];
    let description = embed_description(field, ctx);
    Ok(make_field_section(name, section_id, items, description))
}

/// Format a configurable field.
///
/// The "Default" item is a cross-reference to the target type rather than a
/// literal, since the field's value is itself a configurable class.
pub fn format_configurable_field(
    name: &str,
    field: &FieldDescriptor,
    section_id: &str,
    ctx: &RenderContext<'_>,
) -> Result<Node, RenderError> {
    let FieldKind::Configurable { target } = &field.kind else {
        return Err(mismatch(name, "ConfigurableField", field));
    };

    let items = vec![target_item(target), field_type_item(field)];
    let description = embed_description(field, ctx);
    Ok(make_field_section(name, section_id, items, description))
}

/// Format a list field: identical shape to a scalar field, with the default
/// rendered as a literal sequence.
pub fn format_list_field(
    name: &str,
    field: &FieldDescriptor,
    section_id: &str,
    ctx: &RenderContext<'_>,
) -> Result<Node, RenderError> {
    if !matches!(field.kind, FieldKind::List) {
        return Err(mismatch(name, "ListField", field));
    }

    let items = vec![default_item(field), dtype_item(field), field_type_item(field)];
    let description = embed_description(field, ctx);
    Ok(make_field_section(name, section_id, items, description))
}

/// Format a choice field: the scalar shape plus a "Choices" item holding a
/// nested definition list of the allowed values in supplied order.
pub fn format_choice_field(
    name: &str,
    field: &FieldDescriptor,
    section_id: &str,
    ctx: &RenderContext<'_>,
) -> Result<Node, RenderError> {
    let FieldKind::Choice { allowed } = &field.kind else {
        return Err(mismatch(name, "ChoiceField", field));
    };
    if allowed.is_empty() {
        return Err(RenderError::MalformedDescriptor {
            field: name.to_string(),
            reason: "choice field has no allowed values".to_string(),
        });
    }

    let items = vec![
        default_item(field),
        choices_item(allowed),
        dtype_item(field),
        field_type_item(field),
    ];
    let description = embed_description(field, ctx);
    Ok(make_field_section(name, section_id, items, description))
}

/// Format a range field: the scalar shape plus a "Range" item holding the
/// precomputed interval description.
pub fn format_range_field(
    name: &str,
    field: &FieldDescriptor,
    section_id: &str,
    ctx: &RenderContext<'_>,
) -> Result<Node, RenderError> {
    let FieldKind::Range { range_description } = &field.kind else {
        return Err(mismatch(name, "RangeField", field));
    };

    let items = vec![
        default_item(field),
        dtype_item(field),
        range_item(range_description),
        field_type_item(field),
    ];
    let description = embed_description(field, ctx);
    Ok(make_field_section(name, section_id, items, description))
}

/// Embed a field's description.
///
/// Parses the raw markup text through the context's parser and wraps the
/// result in a container. When the field is optional, a trailing paragraph
/// reading exactly `Optional.` is appended; the schema system supplies no
/// optionality wording of its own.
pub fn embed_description(field: &FieldDescriptor, ctx: &RenderContext<'_>) -> Node {
    let mut children = ctx.parse_markup(&field.doc);
    if field.optional {
        children.push(Node::paragraph("Optional."));
    }
    Node::container(children)
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;
    use crate::markup::PlainTextParser;
    use crate::value::Value;
    use crate::xref::QualifiedName;

    fn terms(section: &Node) -> Vec<String> {
        let Node::DefinitionList { items } = &section.children()[0] else {
            panic!("first child must be a definition list");
        };
        items.iter().map(|i| i.term.clone()).collect()
    }

    #[test]
    fn test_scalar_item_order() {
        let parser = PlainTextParser;
        let ctx = RenderContext::new(&parser);
        let field = FieldDescriptor::new("builtins.int", FieldKind::Scalar)
            .with_default(Value::Int(5))
            .with_doc("Retry count.");

        let section = format_scalar_field("retries", &field, "cfg.retries", &ctx).unwrap();
        assert_eq!(terms(&section), ["Default", "Data type", "Field type"]);
    }

    #[test]
    fn test_configurable_item_order_and_target_reference() {
        let parser = PlainTextParser;
        let ctx = RenderContext::new(&parser);
        let field = FieldDescriptor::new(
            "pkg.sub.TargetClass",
            FieldKind::Configurable {
                target: QualifiedName::new("pkg.sub.TargetClass"),
            },
        );

        let section =
            format_configurable_field("subtask", &field, "cfg.subtask", &ctx).unwrap();
        assert_eq!(terms(&section), ["Default", "Field type"]);

        let Node::DefinitionList { items } = &section.children()[0] else {
            panic!("expected definition list");
        };
        assert_eq!(
            items[0].definition,
            vec![Node::reference("pkg.sub.TargetClass", "pkg.sub.TargetClass")]
        );
    }

    #[test]
    fn test_choice_item_order() {
        let parser = PlainTextParser;
        let ctx = RenderContext::new(&parser);
        let mut allowed = IndexMap::new();
        allowed.insert(Value::Int(0), "off".to_string());
        allowed.insert(Value::Int(1), "on".to_string());
        let field = FieldDescriptor::new("builtins.int", FieldKind::Choice { allowed })
            .with_default(Value::Int(0));

        let section = format_choice_field("mode", &field, "cfg.mode", &ctx).unwrap();
        assert_eq!(
            terms(&section),
            ["Default", "Choices", "Data type", "Field type"]
        );
    }

    #[test]
    fn test_empty_choice_map_is_malformed() {
        let parser = PlainTextParser;
        let ctx = RenderContext::new(&parser);
        let field = FieldDescriptor::new(
            "builtins.int",
            FieldKind::Choice {
                allowed: IndexMap::new(),
            },
        );

        let err = format_choice_field("mode", &field, "cfg.mode", &ctx).unwrap_err();
        assert!(matches!(err, RenderError::MalformedDescriptor { .. }));
    }

    #[test]
    fn test_range_item_order() {
        let parser = PlainTextParser;
        let ctx = RenderContext::new(&parser);
        let field = FieldDescriptor::new(
            "builtins.float",
            FieldKind::Range {
                range_description: "0 < x <= 1".to_string(),
            },
        )
        .with_default(Value::float(0.5));

        let section = format_range_field("threshold", &field, "cfg.threshold", &ctx).unwrap();
        assert_eq!(
            terms(&section),
            ["Default", "Data type", "Range", "Field type"]
        );
    }

    #[test]
    fn test_variant_mismatch_is_reported() {
        let parser = PlainTextParser;
        let ctx = RenderContext::new(&parser);
        let field = FieldDescriptor::new("builtins.int", FieldKind::Scalar);

        let err = format_list_field("retries", &field, "cfg.retries", &ctx).unwrap_err();
        assert_eq!(
            err,
            RenderError::VariantMismatch {
                field: "retries".to_string(),
                expected: "ListField",
                found: "ScalarField",
            }
        );
    }

    #[test]
    fn test_optional_appends_fixed_sentence() {
        let parser = PlainTextParser;
        let ctx = RenderContext::new(&parser);
        let field = FieldDescriptor::new("builtins.str", FieldKind::Scalar)
            .with_doc("A label.")
            .optional();

        let container = embed_description(&field, &ctx);
        assert_eq!(
            container,
            Node::container(vec![
                Node::paragraph("A label."),
                Node::paragraph("Optional."),
            ])
        );
    }

    #[test]
    fn test_required_field_has_no_optional_sentence() {
        let parser = PlainTextParser;
        let ctx = RenderContext::new(&parser);
        let field = FieldDescriptor::new("builtins.str", FieldKind::Scalar).with_doc("A label.");

        let container = embed_description(&field, &ctx);
        assert_eq!(container, Node::container(vec![Node::paragraph("A label.")]));
    }

    #[test]
    fn test_empty_doc_yields_empty_container() {
        let parser = PlainTextParser;
        let ctx = RenderContext::new(&parser);
        let field = FieldDescriptor::new("builtins.str", FieldKind::Scalar);

        assert_eq!(embed_description(&field, &ctx), Node::container(vec![]));
    }
}
