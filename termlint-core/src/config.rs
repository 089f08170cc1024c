//! Checker options

use crate::terms::TermSource;
use serde::{Deserialize, Serialize};

/// Options recognized by the checker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Extra terms, or a path to a term file
    pub terms: TermSource,

    /// Merge in the built-in term list
    #[serde(alias = "default_terms")]
    pub default_terms: bool,

    /// Term keys (words or pattern sources) to drop
    pub exclude: Vec<String>,

    /// Document regions that are never scanned
    pub skip: Vec<NodeKind>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            terms: TermSource::default(),
            default_terms: true,
            exclude: Vec::new(),
            skip: vec![NodeKind::BlockQuote],
        }
    }
}

/// Structural document regions a host may skip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// Block quotes
    BlockQuote,
    /// Headings of any level
    Heading,
    /// Paragraphs
    Paragraph,
    /// Ordered and unordered lists
    List,
    /// Tables
    Table,
    /// Link text
    Link,
    /// Emphasized text
    Emphasis,
    /// Strong text
    Strong,
    /// Struck-through text
    Strikethrough,
    /// Footnote definitions
    FootnoteDefinition,
}

impl NodeKind {
    /// Every node kind, in declaration order
    pub const ALL: [NodeKind; 10] = [
        NodeKind::BlockQuote,
        NodeKind::Heading,
        NodeKind::Paragraph,
        NodeKind::List,
        NodeKind::Table,
        NodeKind::Link,
        NodeKind::Emphasis,
        NodeKind::Strong,
        NodeKind::Strikethrough,
        NodeKind::FootnoteDefinition,
    ];

    /// Name used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::BlockQuote => "BlockQuote",
            NodeKind::Heading => "Heading",
            NodeKind::Paragraph => "Paragraph",
            NodeKind::List => "List",
            NodeKind::Table => "Table",
            NodeKind::Link => "Link",
            NodeKind::Emphasis => "Emphasis",
            NodeKind::Strong => "Strong",
            NodeKind::Strikethrough => "Strikethrough",
            NodeKind::FootnoteDefinition => "FootnoteDefinition",
        }
    }
}
