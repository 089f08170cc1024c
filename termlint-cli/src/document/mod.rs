//! Splitting documents into text nodes
//!
//! Markdown is parsed with `pulldown-cmark`; every run of contiguous text
//! inside one container becomes a node, addressed by its byte range in the
//! source so diagnostics map straight back to the file. Code, HTML and image
//! alt text never produce nodes. Plain text files produce one node per
//! non-empty line.

use pulldown_cmark::{Event, Options as MarkdownOptions, Parser, Tag};
use std::ops::Range;
use std::path::Path;
use termlint_core::NodeKind;

/// A span of prose handed to the checker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextNode<'a> {
    /// Byte offset of the span in the source
    pub offset: usize,
    /// The span itself
    pub text: &'a str,
}

/// How a file is split into nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// CommonMark with GitHub extensions
    Markdown,
    /// Anything else, split per line
    PlainText,
}

impl DocumentKind {
    /// Pick the document kind from a file extension
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("md" | "markdown" | "mdx") => DocumentKind::Markdown,
            _ => DocumentKind::PlainText,
        }
    }
}

/// Split `source` into the text nodes that should be checked
pub fn split<'a>(source: &'a str, kind: DocumentKind, skip: &[NodeKind]) -> Vec<TextNode<'a>> {
    match kind {
        DocumentKind::Markdown => split_markdown(source, skip),
        DocumentKind::PlainText => split_lines(source),
    }
}

/// Container as seen by the splitter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Container {
    /// Text inside may be checked, unless its kind is skipped
    Prose(Option<NodeKind>),
    /// Text inside is never prose
    Opaque,
}

fn classify(tag: &Tag<'_>) -> Container {
    match tag {
        Tag::CodeBlock(_) | Tag::HtmlBlock | Tag::Image { .. } | Tag::MetadataBlock(_) => {
            Container::Opaque
        }
        Tag::BlockQuote(_) => Container::Prose(Some(NodeKind::BlockQuote)),
        Tag::Heading { .. } => Container::Prose(Some(NodeKind::Heading)),
        Tag::Paragraph => Container::Prose(Some(NodeKind::Paragraph)),
        Tag::List(_) => Container::Prose(Some(NodeKind::List)),
        Tag::Table(_) => Container::Prose(Some(NodeKind::Table)),
        Tag::Link { .. } => Container::Prose(Some(NodeKind::Link)),
        Tag::Emphasis => Container::Prose(Some(NodeKind::Emphasis)),
        Tag::Strong => Container::Prose(Some(NodeKind::Strong)),
        Tag::Strikethrough => Container::Prose(Some(NodeKind::Strikethrough)),
        Tag::FootnoteDefinition(_) => Container::Prose(Some(NodeKind::FootnoteDefinition)),
        _ => Container::Prose(None),
    }
}

fn split_markdown<'a>(source: &'a str, skip: &[NodeKind]) -> Vec<TextNode<'a>> {
    let options = MarkdownOptions::ENABLE_TABLES
        | MarkdownOptions::ENABLE_FOOTNOTES
        | MarkdownOptions::ENABLE_STRIKETHROUGH
        | MarkdownOptions::ENABLE_TASKLISTS
        | MarkdownOptions::ENABLE_YAML_STYLE_METADATA_BLOCKS;

    let mut nodes = Vec::new();
    let mut stack: Vec<Container> = Vec::new();
    let mut run: Option<Range<usize>> = None;

    let checked = |stack: &[Container]| {
        stack.iter().all(|container| match container {
            Container::Opaque => false,
            Container::Prose(Some(kind)) => !skip.contains(kind),
            Container::Prose(None) => true,
        })
    };

    for (event, range) in Parser::new_ext(source, options).into_offset_iter() {
        match event {
            Event::Text(_) | Event::SoftBreak if checked(&stack) => {
                run = match run {
                    Some(current) => Some(current.start..range.end.max(current.end)),
                    None => Some(range),
                };
                continue;
            }
            Event::Start(tag) => stack.push(classify(&tag)),
            Event::End(_) => {
                stack.pop();
            }
            _ => {}
        }
        flush(source, &mut run, &mut nodes);
    }
    flush(source, &mut run, &mut nodes);

    nodes
}

fn flush<'a>(source: &'a str, run: &mut Option<Range<usize>>, nodes: &mut Vec<TextNode<'a>>) {
    let Some(range) = run.take() else {
        return;
    };
    if let Some(text) = source.get(range.clone()) {
        if !text.trim().is_empty() {
            nodes.push(TextNode {
                offset: range.start,
                text,
            });
        }
    }
}

fn split_lines(source: &str) -> Vec<TextNode<'_>> {
    let mut nodes = Vec::new();
    let mut offset = 0;

    for line in source.split_inclusive('\n') {
        let text = line.trim_end_matches(['\n', '\r']);
        if !text.trim().is_empty() {
            nodes.push(TextNode { offset, text });
        }
        offset += line.len();
    }

    nodes
}

/// 1-based line and column (in characters) of a byte offset
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }

    let before = &source[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;

    (line, column)
}
