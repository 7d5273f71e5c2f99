//! Block and inline-level types.

use serde::{Deserialize, Serialize};

/// One classified block of statement content, in document order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A section heading.
    Heading {
        /// Heading text
        text: String,
        /// Markdown heading level (1-6)
        level: u8,
    },

    /// A paragraph of inline runs.
    Paragraph {
        /// Inline content in source order
        content: Vec<Inline>,
    },

    /// The score line (配点 / Score).
    Score {
        /// Full line text, e.g. "Score : 400 points"
        text: String,
    },

    /// A preformatted code block.
    Code {
        /// Verbatim block content, outer whitespace trimmed
        text: String,
        /// Role of the block in the statement
        kind: CodeKind,
    },

    /// A constraint or bullet list, possibly nested.
    List {
        /// Top-level items
        items: Vec<ListItem>,
    },
}

impl Block {
    /// Create a paragraph block from inline runs.
    pub fn paragraph(content: Vec<Inline>) -> Self {
        Block::Paragraph { content }
    }

    /// Check if this block is a sample input or output.
    pub fn is_sample(&self) -> bool {
        matches!(
            self,
            Block::Code {
                kind: CodeKind::SampleInput { .. } | CodeKind::SampleOutput { .. },
                ..
            }
        )
    }

    /// Get plain text content of the block.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Heading { text, .. } => text.clone(),
            Block::Paragraph { content } => inline_text(content),
            Block::Score { text } => text.clone(),
            Block::Code { text, .. } => text.clone(),
            Block::List { items } => items
                .iter()
                .map(ListItem::plain_text)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Role of a preformatted block within the statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum CodeKind {
    /// Not part of a sample pair (e.g. an input-format description)
    Plain,
    /// Sample input, numbered 1..N in document order
    SampleInput {
        /// 1-based pair number
        number: u32,
    },
    /// Sample output, numbered 1..N in document order
    SampleOutput {
        /// 1-based pair number
        number: u32,
    },
}

/// Inline content within a paragraph or list item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum Inline {
    /// A plain text run
    Text(String),
    /// Inline math in LaTeX notation (from `<var>`)
    Math(String),
    /// Inline code (from `<code>`)
    Code(String),
    /// Strongly emphasized text (from `<strong>`)
    Strong(String),
    /// Emphasized text (from `<em>`)
    Em(String),
}

impl Inline {
    /// Get the raw text of the run, without markup.
    pub fn as_text(&self) -> &str {
        match self {
            Inline::Text(s)
            | Inline::Math(s)
            | Inline::Code(s)
            | Inline::Strong(s)
            | Inline::Em(s) => s,
        }
    }
}

/// One list item with optional nested children.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListItem {
    /// Inline content of the item itself
    pub content: Vec<Inline>,

    /// Nested sub-items
    pub children: Vec<ListItem>,
}

impl ListItem {
    /// Create a leaf item from inline runs.
    pub fn new(content: Vec<Inline>) -> Self {
        Self {
            content,
            children: Vec::new(),
        }
    }

    /// Get plain text of the item and its children.
    pub fn plain_text(&self) -> String {
        let mut text = inline_text(&self.content);
        for child in &self.children {
            text.push('\n');
            text.push_str(&child.plain_text());
        }
        text
    }
}

fn inline_text(content: &[Inline]) -> String {
    content.iter().map(Inline::as_text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_sample() {
        let input = Block::Code {
            text: "1 2".to_string(),
            kind: CodeKind::SampleInput { number: 1 },
        };
        assert!(input.is_sample());

        let plain = Block::Code {
            text: "N M".to_string(),
            kind: CodeKind::Plain,
        };
        assert!(!plain.is_sample());
    }

    #[test]
    fn test_plain_text() {
        let para = Block::paragraph(vec![
            Inline::Text("Find ".to_string()),
            Inline::Math("A + B".to_string()),
            Inline::Text(".".to_string()),
        ]);
        assert_eq!(para.plain_text(), "Find A + B.");
    }

    #[test]
    fn test_nested_list_text() {
        let mut item = ListItem::new(vec![Inline::Text("outer".to_string())]);
        item.children
            .push(ListItem::new(vec![Inline::Text("inner".to_string())]));
        assert_eq!(item.plain_text(), "outer\ninner");
    }
}
