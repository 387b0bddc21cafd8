//! Formatter dispatch table
//!
//! Maps a variant's qualified type name to its formatter. Lookup must fail
//! loudly on an unregistered variant: silently rendering a wrong shape
//! would produce misleading documentation.

use std::collections::HashMap;

use crate::error::RenderError;
use crate::field::FieldDescriptor;
use crate::formatter::{
    format_choice_field, format_configurable_field, format_list_field, format_range_field,
    format_scalar_field,
};
use crate::markup::RenderContext;
use crate::node::Node;

/// A field formatter.
///
/// Arguments: field name, descriptor, section identifier, render context.
pub type FormatterFn =
    fn(&str, &FieldDescriptor, &str, &RenderContext<'_>) -> Result<Node, RenderError>;

/// Registry of formatters keyed by variant qualified type name.
pub struct FormatterRegistry {
    formatters: HashMap<String, FormatterFn>,
}

impl FormatterRegistry {
    /// Create a registry with the five built-in formatters registered.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register("fielddoc.fields.ScalarField", format_scalar_field);
        registry.register(
            "fielddoc.fields.ConfigurableField",
            format_configurable_field,
        );
        registry.register("fielddoc.fields.ListField", format_list_field);
        registry.register("fielddoc.fields.ChoiceField", format_choice_field);
        registry.register("fielddoc.fields.RangeField", format_range_field);
        registry
    }

    /// Create a registry with no formatters.
    pub fn empty() -> Self {
        Self {
            formatters: HashMap::new(),
        }
    }

    /// Register (or replace) the formatter for a variant type name.
    pub fn register(&mut self, type_name: impl Into<String>, formatter: FormatterFn) {
        self.formatters.insert(type_name.into(), formatter);
    }

    /// Select the formatter for a descriptor's variant.
    pub fn select(&self, field: &FieldDescriptor) -> Result<FormatterFn, RenderError> {
        let type_name = field.kind.type_name();
        self.formatters
            .get(type_name)
            .copied()
            .ok_or_else(|| RenderError::UnknownFieldVariant {
                type_name: type_name.to_string(),
            })
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldKind;
    use crate::markup::PlainTextParser;
    use crate::xref::QualifiedName;

    #[test]
    fn test_builtin_registry_dispatches_every_variant() {
        let registry = FormatterRegistry::new();
        let parser = PlainTextParser;
        let ctx = RenderContext::new(&parser);

        let kinds = vec![
            FieldKind::Scalar,
            FieldKind::Configurable {
                target: QualifiedName::new("pkg.Target"),
            },
            FieldKind::List,
            FieldKind::Range {
                range_description: "x >= 0".to_string(),
            },
        ];

        for kind in kinds {
            let field = FieldDescriptor::new("builtins.int", kind);
            let formatter = registry.select(&field).unwrap();
            let section = formatter("f", &field, "cfg.f", &ctx).unwrap();
            assert!(matches!(section, Node::Section { .. }));
        }
    }

    #[test]
    fn test_unregistered_variant_fails() {
        let registry = FormatterRegistry::empty();
        let field = FieldDescriptor::new("builtins.int", FieldKind::Scalar);

        let err = registry.select(&field).unwrap_err();
        assert_eq!(
            err,
            RenderError::UnknownFieldVariant {
                type_name: "fielddoc.fields.ScalarField".to_string(),
            }
        );
    }

    #[test]
    fn test_register_replaces_formatter() {
        fn stub(
            name: &str,
            _field: &FieldDescriptor,
            section_id: &str,
            _ctx: &RenderContext<'_>,
        ) -> Result<Node, RenderError> {
            Ok(Node::section(section_id, name, vec![]))
        }

        let mut registry = FormatterRegistry::new();
        registry.register(FieldKind::Scalar.type_name(), stub);

        let field = FieldDescriptor::new("builtins.int", FieldKind::Scalar);
        let parser = PlainTextParser;
        let ctx = RenderContext::new(&parser);
        let formatter = registry.select(&field).unwrap();
        let section = formatter("f", &field, "cfg.f", &ctx).unwrap();
        assert!(section.children().is_empty());
    }
}
