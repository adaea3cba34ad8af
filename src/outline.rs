//! Heading outline extraction.
//!
//! Parses a markdown document with `pulldown_cmark` and produces its ordered
//! heading token sequence. The parser guarantees that `#` lines inside fenced
//! code blocks are not headings and that setext headings are picked up. Every
//! token carries a document-unique slug derived from the heading's plain
//! rendered text.

use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use std::collections::HashMap;
use std::ops::Range;

/// One markdown heading: nesting level, raw inner markdown, derived slug.
///
/// `raw_text` keeps link and decoration syntax intact; display cleanup
/// happens later, at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingToken {
    pub level: u32,
    pub raw_text: String,
    pub slug: String,
}

/// Heading being accumulated while its inner events stream by.
struct OpenHeading {
    level: u32,
    span: Option<Range<usize>>,
    plain: String,
}

impl OpenHeading {
    /// Grows the raw-text span to cover one more inner event.
    fn widen(&mut self, range: Range<usize>) {
        match &mut self.span {
            Some(span) => {
                span.start = span.start.min(range.start);
                span.end = span.end.max(range.end);
            }
            None => self.span = Some(range),
        }
    }
}

/// Extracts the heading outline of a markdown document, in source order.
pub fn extract_outline(source: &str) -> Vec<HeadingToken> {
    let mut tokens = Vec::new();
    let mut slugger = Slugger::new();
    let mut open: Option<OpenHeading> = None;

    for (event, range) in Parser::new(source).into_offset_iter() {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                open = Some(OpenHeading {
                    level: level as u32,
                    span: None,
                    plain: String::new(),
                });
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(heading) = open.take() {
                    let raw_text = heading
                        .span
                        .map(|span| source[span].trim().to_string())
                        .unwrap_or_default();
                    let slug = slugger.slug(&heading.plain);

                    tokens.push(HeadingToken {
                        level: heading.level,
                        raw_text,
                        slug,
                    });
                }
            }
            event => {
                if let Some(heading) = open.as_mut() {
                    heading.widen(range);
                    match event {
                        Event::Text(text) => heading.plain.push_str(&text),
                        Event::Code(code) => heading.plain.push_str(&code),
                        Event::SoftBreak | Event::HardBreak => heading.plain.push(' '),
                        _ => {}
                    }
                }
            }
        }
    }

    tokens
}

/// Derives document-unique, URL-fragment-safe slugs from heading text.
///
/// Lowercases, keeps alphanumerics plus `-` and `_`, collapses whitespace
/// runs into single hyphens and drops other punctuation. A heading text seen
/// before in the same document gets a `-1`, `-2`, ... suffix.
pub struct Slugger {
    seen: HashMap<String, usize>,
}

impl Slugger {
    pub fn new() -> Self {
        Self {
            seen: HashMap::new(),
        }
    }

    pub fn slug(&mut self, text: &str) -> String {
        let base = slugify(text);
        let count = self.seen.entry(base.clone()).or_insert(0);
        let slug = if *count == 0 {
            base.clone()
        } else {
            format!("{base}-{count}")
        };
        *count += 1;
        slug
    }
}

impl Default for Slugger {
    fn default() -> Self {
        Self::new()
    }
}

fn slugify(text: &str) -> String {
    let mut slug = String::new();
    let mut pending_dash = false;

    for ch in text.trim().chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            for lower in ch.to_lowercase() {
                slug.push(lower);
            }
            pending_dash = false;
        } else if ch == '-' || ch == '_' {
            if !slug.is_empty() {
                slug.push(ch);
            }
            pending_dash = false;
        } else if ch.is_whitespace() {
            pending_dash = true;
        }
        // remaining punctuation is dropped without acting as a separator
    }

    slug.trim_matches(&['-', '_'][..]).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_levels_in_order() {
        let tokens = extract_outline("# One\n\ntext in between\n\n## Two\n\n### Three\n");

        let levels: Vec<u32> = tokens.iter().map(|t| t.level).collect();
        assert_eq!(levels, vec![1, 2, 3]);
        assert_eq!(tokens[0].raw_text, "One");
        assert_eq!(tokens[2].slug, "three");
    }

    #[test]
    fn test_slug_lowercases_and_hyphenates() {
        let tokens = extract_outline("# Getting Started\n");
        assert_eq!(tokens[0].slug, "getting-started");
    }

    #[test]
    fn test_slug_drops_punctuation() {
        let tokens = extract_outline("# What's new?\n");
        assert_eq!(tokens[0].slug, "whats-new");
    }

    #[test]
    fn test_duplicate_headings_get_unique_slugs() {
        let tokens = extract_outline("# Setup\n\n## Setup\n\n### Setup\n");

        let slugs: Vec<&str> = tokens.iter().map(|t| t.slug.as_str()).collect();
        assert_eq!(slugs, vec!["setup", "setup-1", "setup-2"]);
    }

    #[test]
    fn test_link_heading_keeps_raw_markdown() {
        let tokens = extract_outline("# [Label](https://example.com)\n");

        assert_eq!(tokens[0].raw_text, "[Label](https://example.com)");
        // the slug comes from the rendered text, not the link target
        assert_eq!(tokens[0].slug, "label");
    }

    #[test]
    fn test_code_span_in_heading() {
        let tokens = extract_outline("# The `main` function\n");

        assert_eq!(tokens[0].raw_text, "The `main` function");
        assert_eq!(tokens[0].slug, "the-main-function");
    }

    #[test]
    fn test_ignores_hashes_inside_code_blocks() {
        let tokens = extract_outline("```\n# not a heading\n```\n\n# Real\n");

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].raw_text, "Real");
    }

    #[test]
    fn test_setext_headings() {
        let tokens = extract_outline("Title\n=====\n\nSub\n---\n");

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].level, 1);
        assert_eq!(tokens[0].raw_text, "Title");
        assert_eq!(tokens[1].level, 2);
    }

    #[test]
    fn test_no_headings() {
        assert!(extract_outline("just a paragraph\n").is_empty());
    }
}
