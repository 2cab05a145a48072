//! Tree-sitter based markdown parsing.
//!
//! Produces the structural summary stored in rendered artifacts: the first heading as the page
//! title, a nested table of contents, the markdown links in document order, and the line count.

use crate::types::{IndexLink, TocEntry};
use crate::{Error, Result};
use regex::Regex;
use std::sync::OnceLock;
use tree_sitter::{Node, Parser, TreeCursor};

/// Result of parsing one markdown document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDocument {
    /// Text of the first heading, if any.
    pub title: Option<String>,
    /// Nested table of contents.
    pub toc: Vec<TocEntry>,
    /// Inline markdown links in document order.
    pub links: Vec<IndexLink>,
    /// Number of lines in the document.
    pub line_count: usize,
}

/// Markdown parser backed by `tree-sitter-md`.
pub struct MarkdownParser {
    parser: Parser,
}

impl MarkdownParser {
    /// Create a parser with the markdown block grammar loaded.
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_md::LANGUAGE.into())
            .map_err(|e| Error::Parse(format!("Failed to set language: {e}")))?;

        Ok(Self { parser })
    }

    /// Parse `text` into a [`ParsedDocument`].
    pub fn parse(&mut self, text: &str) -> Result<ParsedDocument> {
        let tree = self
            .parser
            .parse(text, None)
            .ok_or_else(|| Error::Parse("Failed to parse markdown".into()))?;

        let root = tree.root_node();
        if root.has_error() {
            tracing::debug!("Parse tree contains errors, headings may be incomplete");
        }

        let mut headings = Vec::new();
        let mut cursor = root.walk();
        walk_tree(&mut cursor, |node| {
            if node.kind() == "atx_heading" {
                headings.push((
                    heading_level(node),
                    heading_text(node, text),
                    node.start_position().row + 1,
                ));
            }
        });

        let title = headings.first().map(|(_, text, _)| text.clone());
        let mut toc = Vec::new();
        let mut stack: Vec<usize> = Vec::new();
        let mut path: Vec<String> = Vec::new();

        for (level, heading, line) in headings {
            while stack.last().is_some_and(|&open| open >= level) {
                stack.pop();
                path.pop();
            }
            path.push(heading);
            stack.push(level);

            let entry = TocEntry {
                heading_path: path.clone(),
                line,
                children: Vec::new(),
            };
            add_to_toc(&mut toc, entry, stack.len());
        }

        Ok(ParsedDocument {
            title,
            toc,
            links: extract_links(text),
            line_count: text.lines().count(),
        })
    }
}

fn walk_tree<F>(cursor: &mut TreeCursor, mut callback: F)
where
    F: FnMut(Node),
{
    loop {
        callback(cursor.node());

        if cursor.goto_first_child() || cursor.goto_next_sibling() {
            continue;
        }

        loop {
            if !cursor.goto_parent() {
                return;
            }
            if cursor.goto_next_sibling() {
                break;
            }
        }
    }
}

fn heading_level(node: Node) -> usize {
    let mut cursor = node.walk();
    node.children(&mut cursor)
        .find_map(|child| match child.kind() {
            "atx_h1_marker" => Some(1),
            "atx_h2_marker" => Some(2),
            "atx_h3_marker" => Some(3),
            "atx_h4_marker" => Some(4),
            "atx_h5_marker" => Some(5),
            "atx_h6_marker" => Some(6),
            _ => None,
        })
        .unwrap_or(1)
}

fn heading_text(node: Node, text: &str) -> String {
    text[node.byte_range()]
        .trim()
        .trim_start_matches('#')
        .trim_end_matches('#')
        .trim()
        .to_string()
}

fn add_to_toc(toc: &mut Vec<TocEntry>, entry: TocEntry, depth: usize) {
    if depth <= 1 {
        toc.push(entry);
    } else if let Some(parent) = toc.last_mut() {
        add_to_toc(&mut parent.children, entry, depth - 1);
    } else {
        toc.push(entry);
    }
}

#[allow(clippy::expect_used)]
fn link_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\[([^\]]+)\]\(([^)\s]+)\)").expect("link pattern is valid"))
}

fn extract_links(text: &str) -> Vec<IndexLink> {
    link_pattern()
        .captures_iter(text)
        .map(|caps| IndexLink {
            title: caps[1].trim().to_string(),
            target: caps[2].to_string(),
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builds_nested_toc_with_lines() {
        let mut parser = MarkdownParser::new().unwrap();
        let doc = parser
            .parse("# Routing\n\nIntro\n\n## Basic Routing\n\ntext\n\n### Redirects\n\n## Groups\n")
            .unwrap();

        assert_eq!(doc.title.as_deref(), Some("Routing"));
        assert_eq!(doc.toc.len(), 1);

        let root = &doc.toc[0];
        assert_eq!(root.heading_path, vec!["Routing"]);
        assert_eq!(root.line, 1);
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].heading_path, vec!["Routing", "Basic Routing"]);
        assert_eq!(root.children[0].line, 5);
        assert_eq!(
            root.children[0].children[0].heading_path,
            vec!["Routing", "Basic Routing", "Redirects"]
        );
        assert_eq!(root.children[1].heading_path, vec!["Routing", "Groups"]);
        assert_eq!(doc.line_count, 11);
    }

    #[test]
    fn document_without_headings_has_no_title() {
        let mut parser = MarkdownParser::new().unwrap();
        let doc = parser.parse("just a paragraph\n").unwrap();
        assert_eq!(doc.title, None);
        assert!(doc.toc.is_empty());
        assert_eq!(doc.line_count, 1);
    }

    #[test]
    fn collects_links_in_order() {
        let mut parser = MarkdownParser::new().unwrap();
        let doc = parser
            .parse("- ## Prologue\n    - [Release Notes](/docs/v1/releases)\n    - [Upgrade Guide](/docs/v1/upgrade)\n")
            .unwrap();

        let targets: Vec<_> = doc.links.iter().map(|l| l.target.as_str()).collect();
        assert_eq!(targets, vec!["/docs/v1/releases", "/docs/v1/upgrade"]);
        assert_eq!(doc.links[0].title, "Release Notes");
    }
}
