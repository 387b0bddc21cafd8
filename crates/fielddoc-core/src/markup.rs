//! Rich-text collaborator
//!
//! Field descriptions are raw markup strings. Parsing them into document
//! nodes is delegated to an injected [`MarkupParser`] so any tree-producing
//! markup parser can be plugged in; the renderer only embeds the result.

use crate::node::Node;

/// Parses raw markup text into document nodes.
///
/// Implementations must not fail on empty text: it parses to an empty
/// sequence.
pub trait MarkupParser {
    /// Parse `text` into zero or more document nodes.
    fn parse(&self, text: &str) -> Vec<Node>;
}

/// Caller-supplied context threaded through every formatter.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    markup: &'a dyn MarkupParser,
}

impl<'a> RenderContext<'a> {
    /// Create a context around a markup parser.
    pub fn new(markup: &'a dyn MarkupParser) -> Self {
        Self { markup }
    }

    /// Parse markup text with the context's parser.
    pub fn parse_markup(&self, text: &str) -> Vec<Node> {
        self.markup.parse(text)
    }
}

/// A minimal built-in parser: blank-line separated paragraphs.
///
/// Suitable for callers whose descriptions are plain prose, and as the
/// parser used throughout this crate's tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextParser;

impl MarkupParser for PlainTextParser {
    fn parse(&self, text: &str) -> Vec<Node> {
        let mut nodes = Vec::new();
        let mut paragraph: Vec<&str> = Vec::new();

        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                if !paragraph.is_empty() {
                    nodes.push(Node::paragraph(paragraph.join(" ")));
                    paragraph.clear();
                }
            } else {
                paragraph.push(trimmed);
            }
        }
        if !paragraph.is_empty() {
            nodes.push(Node::paragraph(paragraph.join(" ")));
        }

        nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_parses_to_nothing() {
        assert!(PlainTextParser.parse("").is_empty());
        assert!(PlainTextParser.parse("  \n\n  ").is_empty());
    }

    #[test]
    fn test_single_paragraph_joins_lines() {
        let nodes = PlainTextParser.parse("First line\nsecond line");
        assert_eq!(nodes, vec![Node::paragraph("First line second line")]);
    }

    #[test]
    fn test_blank_lines_split_paragraphs() {
        let nodes = PlainTextParser.parse("One.\n\nTwo.\n\n\nThree.");
        assert_eq!(
            nodes,
            vec![
                Node::paragraph("One."),
                Node::paragraph("Two."),
                Node::paragraph("Three."),
            ]
        );
    }
}
