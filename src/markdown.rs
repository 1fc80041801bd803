//! Markdown structure extraction using tree-sitter-md.
//!
//! Pages are parsed once into a flat block sequence: ATX headings, prose
//! paragraphs, list items, fenced code and thematic breaks. Heading titles
//! come from a tree-sitter query over `(atx_heading (inline))` nodes; the
//! block order comes from a cursor walk of the document tree. Each heading
//! is assigned a stable anchor id (a slug of its title) that the layout,
//! the outline pane and the active-section tracker all share.

use crate::toc::TocEntry;
use std::collections::HashMap;
use std::io;
use streaming_iterator::StreamingIterator;
use tree_sitter::{Node, Parser, Query, QueryCursor};

/// Query capturing the inline title of every ATX-style heading.
const TITLE_QUERY: &str = "(atx_heading (inline) @title)";

/// One rendered block of a documentation page, in document order.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Block {
    /// Section heading with its anchor id.
    Heading {
        /// ATX level (1 for `#`, 2 for `##`, ...).
        level: usize,
        /// Slugified anchor id, unique within the page.
        id: String,
        /// Heading text without markup.
        title: String,
    },
    /// Prose paragraph, whitespace-normalized.
    Paragraph(String),
    /// Single list item, marker stripped.
    Bullet(String),
    /// Fenced code block.
    Code {
        /// Info string after the opening fence, if any.
        language: Option<String>,
        /// Verbatim code lines.
        lines: Vec<String>,
    },
    /// Thematic break (`---`).
    Rule,
}

/// Parsed structure of one markdown source.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Document {
    /// Blocks in document order.
    pub blocks: Vec<Block>,
}

impl Document {
    #[must_use]
    /// Title of the first level-1 heading, if the page has one.
    pub fn title(&self) -> Option<&str> {
        self.blocks.iter().find_map(|block| match block {
            Block::Heading { level: 1, title, .. } => Some(title.as_str()),
            _ => None,
        })
    }

    #[must_use]
    /// Builds the two-level outline from level-2 and level-3 headings.
    ///
    /// A level-3 heading nests under the most recent level-2 entry; one
    /// appearing before any level-2 heading is promoted to the top level so
    /// it stays reachable from the outline pane.
    pub fn outline(&self) -> Vec<TocEntry> {
        let mut entries: Vec<TocEntry> = Vec::new();
        for block in &self.blocks {
            let Block::Heading { level, id, title } = block else {
                continue;
            };
            match level {
                2 => entries.push(TocEntry::new(id.clone(), title.clone())),
                3 => {
                    if let Some(parent) = entries.last_mut() {
                        parent.children.push(TocEntry::new(id.clone(), title.clone()));
                    } else {
                        entries.push(TocEntry::new(id.clone(), title.clone()));
                    }
                }
                _ => {}
            }
        }
        entries
    }
}

/// Parse a markdown source into its block sequence.
///
/// # Errors
///
/// Returns an error if the tree-sitter grammar fails to load or the parser
/// produces no tree for the input.
pub fn parse(source: &str) -> io::Result<Document> {
    let language = tree_sitter::Language::from(tree_sitter_md::LANGUAGE);
    let mut parser = Parser::new();
    parser
        .set_language(&language)
        .map_err(io::Error::other)?;
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| io::Error::other("markdown parse produced no tree"))?;

    let titles = heading_titles(&language, tree.root_node(), source)?;

    let mut collector = BlockCollector {
        source,
        titles,
        seen_ids: HashMap::new(),
        blocks: Vec::new(),
    };
    collector.walk(tree.root_node());
    Ok(Document {
        blocks: collector.blocks,
    })
}

/// Map from heading start byte to inline title text.
fn heading_titles(
    language: &tree_sitter::Language,
    root: Node<'_>,
    source: &str,
) -> io::Result<HashMap<usize, String>> {
    let query = Query::new(language, TITLE_QUERY).map_err(io::Error::other)?;
    let mut cursor = QueryCursor::new();
    let mut titles = HashMap::new();

    let mut matches = cursor.matches(&query, root, source.as_bytes());
    while let Some(found) = matches.next() {
        for capture in found.captures {
            let inline = capture.node;
            let Some(heading) = inline.parent() else {
                continue;
            };
            if let Ok(text) = inline.utf8_text(source.as_bytes()) {
                titles.insert(heading.start_byte(), text.trim().to_string());
            }
        }
    }
    Ok(titles)
}

struct BlockCollector<'a> {
    source: &'a str,
    titles: HashMap<usize, String>,
    seen_ids: HashMap<String, usize>,
    blocks: Vec<Block>,
}

impl BlockCollector<'_> {
    fn walk(&mut self, node: Node<'_>) {
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            match child.kind() {
                // Sections nest headings with their content; recurse to
                // keep the flat document order.
                "section" => self.walk(child),
                "atx_heading" => self.push_heading(child),
                "paragraph" | "block_quote" => {
                    if let Some(text) = self.normalized_text(child) {
                        self.blocks.push(Block::Paragraph(text));
                    }
                }
                "list" => self.push_list(child),
                "fenced_code_block" => self.push_code(child),
                "thematic_break" => self.blocks.push(Block::Rule),
                _ => {}
            }
        }
    }

    fn push_heading(&mut self, node: Node<'_>) {
        let Some(title) = self.titles.get(&node.start_byte()).cloned() else {
            return;
        };
        let level = heading_level(node);
        let id = self.unique_id(&title);
        self.blocks.push(Block::Heading { level, id, title });
    }

    fn push_list(&mut self, node: Node<'_>) {
        let mut cursor = node.walk();
        for item in node.named_children(&mut cursor) {
            if item.kind() != "list_item" {
                continue;
            }
            let mut inner = item.walk();
            for part in item.named_children(&mut inner) {
                match part.kind() {
                    "paragraph" => {
                        if let Some(text) = self.normalized_text(part) {
                            self.blocks.push(Block::Bullet(text));
                        }
                    }
                    // Nested lists flatten into the same bullet run.
                    "list" => self.push_list(part),
                    _ => {}
                }
            }
        }
    }

    fn push_code(&mut self, node: Node<'_>) {
        let mut language = None;
        let mut lines = Vec::new();
        let mut cursor = node.walk();
        for part in node.named_children(&mut cursor) {
            match part.kind() {
                "info_string" => {
                    if let Ok(text) = part.utf8_text(self.source.as_bytes()) {
                        let text = text.trim();
                        if !text.is_empty() {
                            language = Some(text.to_string());
                        }
                    }
                }
                "code_fence_content" => {
                    if let Ok(text) = part.utf8_text(self.source.as_bytes()) {
                        lines = text.lines().map(ToString::to_string).collect();
                    }
                }
                _ => {}
            }
        }
        self.blocks.push(Block::Code { language, lines });
    }

    fn normalized_text(&self, node: Node<'_>) -> Option<String> {
        let text = node.utf8_text(self.source.as_bytes()).ok()?;
        let joined = text.split_whitespace().collect::<Vec<_>>().join(" ");
        let trimmed = joined.trim_start_matches('>').trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Slugified anchor id, suffixed on repeat titles within the page.
    fn unique_id(&mut self, title: &str) -> String {
        let base = slug::slugify(title);
        let count = self.seen_ids.entry(base.clone()).or_insert(0);
        *count += 1;
        if *count == 1 {
            base
        } else {
            format!("{base}-{count}")
        }
    }
}

fn heading_level(node: Node<'_>) -> usize {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        let level = match child.kind() {
            "atx_h1_marker" => 1,
            "atx_h2_marker" => 2,
            "atx_h3_marker" => 3,
            "atx_h4_marker" => 4,
            "atx_h5_marker" => 5,
            "atx_h6_marker" => 6,
            _ => continue,
        };
        return level;
    }
    1
}

#[cfg(test)]
#[path = "tests/markdown.rs"]
mod tests;
