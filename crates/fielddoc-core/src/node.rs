//! Document tree types
//!
//! The renderer's output is an abstract, recursively composable tree of
//! [`Node`] values. The tree is independent of any concrete output format;
//! consumers walk it (or serialize it) and decide how sections, definition
//! lists, and references are ultimately rendered.

use serde::Serialize;

use crate::xref::make_anchor;

/// An abstract document node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// A titled section identified for cross-document linking.
    Section {
        /// Normalized anchor id derived from the supplied identifier
        id: String,
        /// The identifier exactly as supplied by the caller
        name: String,
        /// Section title text
        title: String,
        /// Child nodes in document order
        children: Vec<Node>,
    },
    /// A list of term/definition pairs.
    DefinitionList {
        /// Items in document order
        items: Vec<DefinitionItem>,
    },
    /// Inline literal text (monospace in most renderings).
    Literal {
        /// The literal text
        text: String,
    },
    /// A plain paragraph of text.
    Paragraph {
        /// Paragraph text
        text: String,
    },
    /// A navigable link to a qualified name.
    ///
    /// The target is always the full qualified name; the display text may
    /// hide the namespace. Resolving the target to a concrete location is
    /// the consuming pipeline's job.
    Reference {
        /// Full qualified name the link points at
        target: String,
        /// Text shown for the link
        display: String,
    },
    /// An anonymous grouping of nodes.
    Container {
        /// Child nodes in document order
        children: Vec<Node>,
    },
}

impl Node {
    /// Create a section node.
    ///
    /// The supplied `section_id` is kept verbatim as the section's `name`
    /// and normalized into its anchor `id`. Identifier uniqueness within
    /// the enclosing document is the caller's responsibility.
    pub fn section(
        section_id: impl Into<String>,
        title: impl Into<String>,
        children: Vec<Node>,
    ) -> Self {
        let name = section_id.into();
        Node::Section {
            id: make_anchor(&name),
            name,
            title: title.into(),
            children,
        }
    }

    /// Create a definition list node.
    pub fn definition_list(items: Vec<DefinitionItem>) -> Self {
        Node::DefinitionList { items }
    }

    /// Create a literal text node.
    pub fn literal(text: impl Into<String>) -> Self {
        Node::Literal { text: text.into() }
    }

    /// Create a paragraph node.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Node::Paragraph { text: text.into() }
    }

    /// Create a reference node.
    pub fn reference(target: impl Into<String>, display: impl Into<String>) -> Self {
        Node::Reference {
            target: target.into(),
            display: display.into(),
        }
    }

    /// Create a container node.
    pub fn container(children: Vec<Node>) -> Self {
        Node::Container { children }
    }

    /// Child nodes, for node kinds that have them.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Section { children, .. } | Node::Container { children } => children,
            _ => &[],
        }
    }
}

/// A single term/definition pair inside a definition list.
///
/// Items only occur inside a [`Node::DefinitionList`], so this is a plain
/// struct rather than a `Node` variant. The term is plain text; whether a
/// renderer styles it as literal is a final-render concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefinitionItem {
    /// The term being defined
    pub term: String,
    /// Definition body nodes in document order
    pub definition: Vec<Node>,
}

impl DefinitionItem {
    /// Create a definition item.
    pub fn new(term: impl Into<String>, definition: Vec<Node>) -> Self {
        Self {
            term: term.into(),
            definition,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_normalizes_id_and_keeps_name() {
        let section = Node::section("pkg.Config.myField.field-config", "myField", vec![]);
        match section {
            Node::Section { id, name, title, .. } => {
                assert_eq!(id, "pkg-config-myfield-field-config");
                assert_eq!(name, "pkg.Config.myField.field-config");
                assert_eq!(title, "myField");
            }
            other => panic!("expected section, got {other:?}"),
        }
    }

    #[test]
    fn test_children_accessor() {
        let container = Node::container(vec![Node::paragraph("a"), Node::paragraph("b")]);
        assert_eq!(container.children().len(), 2);
        assert!(Node::literal("x").children().is_empty());
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let node = Node::reference("pkg.Thing", "Thing");
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["kind"], "reference");
        assert_eq!(json["target"], "pkg.Thing");
        assert_eq!(json["display"], "Thing");
    }
}
