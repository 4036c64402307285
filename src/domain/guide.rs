//! Guide-text parsing.
//!
//! Each guide line is either a titled block written as `Title[item, item, ...]`
//! or free text. Both may carry `**bold**` markers which become emphasized
//! spans. The first bracket pair on a line wins; text after the closing `]`
//! is dropped and nested brackets are not understood.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::labels;

static EMPHASIS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*(.*?)\*\*").expect("emphasis pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "camelCase")]
pub enum Inline {
    Plain(String),
    Emphasis(String),
}

/// A run of text with inline emphasis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InlineText {
    pub spans: Vec<Inline>,
}

impl InlineText {
    /// Split `raw` into plain and emphasized spans.
    pub fn parse(raw: &str) -> Self {
        let mut spans = Vec::new();
        let mut cursor = 0;
        for captures in EMPHASIS.captures_iter(raw) {
            let (Some(whole), Some(inner)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            if whole.start() > cursor {
                spans.push(Inline::Plain(raw[cursor..whole.start()].to_string()));
            }
            spans.push(Inline::Emphasis(inner.as_str().to_string()));
            cursor = whole.end();
        }
        if cursor < raw.len() {
            spans.push(Inline::Plain(raw[cursor..].to_string()));
        }
        Self { spans }
    }

    pub fn to_html(&self) -> String {
        self.spans
            .iter()
            .map(|span| match span {
                Inline::Plain(text) => text.clone(),
                Inline::Emphasis(text) => format!("<em>{text}</em>"),
            })
            .collect()
    }

    /// Text without any emphasis markers.
    pub fn plain(&self) -> String {
        self.spans
            .iter()
            .map(|span| match span {
                Inline::Plain(text) | Inline::Emphasis(text) => text.as_str(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitledBlock {
    pub title: String,
    pub items: Vec<InlineText>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum GuideNode {
    Block(TitledBlock),
    Paragraph { text: InlineText },
    /// Shown when a guide has nothing to display.
    Pending,
}

impl GuideNode {
    pub fn pending_text() -> &'static str {
        labels::CONTENT_PENDING
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderableGuide {
    pub nodes: Vec<GuideNode>,
}

impl RenderableGuide {
    pub fn pending() -> Self {
        Self {
            nodes: vec![GuideNode::Pending],
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.nodes.as_slice(), [GuideNode::Pending])
    }
}

/// Turn guide lines into renderable nodes, preserving line order.
pub fn parse_guide<S: AsRef<str>>(lines: &[S]) -> RenderableGuide {
    let nodes: Vec<GuideNode> = lines
        .iter()
        .filter_map(|line| parse_line(line.as_ref()))
        .collect();
    if nodes.is_empty() {
        RenderableGuide::pending()
    } else {
        RenderableGuide { nodes }
    }
}

const LINE_BREAKS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

fn parse_line(line: &str) -> Option<GuideNode> {
    match split_titled(line) {
        Some((title, content)) => {
            let items: Vec<InlineText> = content
                .split(',')
                .map(str::trim)
                .filter(|piece| !piece.is_empty())
                .map(InlineText::parse)
                .collect();
            if items.is_empty() {
                return None;
            }
            Some(GuideNode::Block(TitledBlock {
                title: title.trim().to_string(),
                items,
            }))
        }
        None => {
            let text = line.trim();
            if text.is_empty() {
                return None;
            }
            Some(GuideNode::Paragraph {
                text: InlineText::parse(text),
            })
        }
    }
}

/// Locate `<title>[<content>]` where both parts hold at least one character.
///
/// The title ends at the first `[` past the first character; the content ends
/// at the first `]` past the first content character. When that `[` has no
/// usable `]` after it, no later `[` can have one either, so the line is free
/// text. An entry spanning several physical lines never forms a block.
fn split_titled(line: &str) -> Option<(&str, &str)> {
    if line.contains(LINE_BREAKS) {
        return None;
    }
    let (open, _) = line.char_indices().skip(1).find(|&(_, ch)| ch == '[')?;
    let rest = &line[open + 1..];
    let first = rest.chars().next()?;
    let close = rest[first.len_utf8()..].find(']')? + first.len_utf8();
    Some((&line[..open], &rest[..close]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn html_items(node: &GuideNode) -> Vec<String> {
        match node {
            GuideNode::Block(block) => block.items.iter().map(InlineText::to_html).collect(),
            other => panic!("expected titled block, got {other:?}"),
        }
    }

    #[test]
    fn titled_block_with_emphasis() {
        let guide = parse_guide(&["Title[a, b, **c**]"]);
        assert_eq!(guide.nodes.len(), 1);
        let GuideNode::Block(block) = &guide.nodes[0] else {
            panic!("expected block");
        };
        assert_eq!(block.title, "Title");
        assert_eq!(html_items(&guide.nodes[0]), vec!["a", "b", "<em>c</em>"]);
    }

    #[test]
    fn free_text_line_is_kept() {
        let guide = parse_guide(&["just text"]);
        assert_eq!(
            guide.nodes,
            vec![GuideNode::Paragraph {
                text: InlineText {
                    spans: vec![Inline::Plain("just text".into())]
                }
            }]
        );
    }

    #[test]
    fn empty_input_yields_placeholder() {
        let lines: [&str; 0] = [];
        assert!(parse_guide(&lines).is_pending());
        assert!(parse_guide(&["   ", ""]).is_pending());
    }

    #[test]
    fn blank_bracket_content_is_dropped() {
        assert!(parse_guide(&["Title[ , ,]"]).is_pending());
        let guide = parse_guide(&["Title[ , ,]", "after"]);
        assert_eq!(guide.nodes.len(), 1);
        assert!(matches!(guide.nodes[0], GuideNode::Paragraph { .. }));
    }

    #[test]
    fn first_bracket_pair_wins_and_tail_is_ignored() {
        let guide = parse_guide(&["Weak[head, tail] and [ignored]"]);
        let GuideNode::Block(block) = &guide.nodes[0] else {
            panic!("expected block");
        };
        assert_eq!(block.title, "Weak");
        assert_eq!(html_items(&guide.nodes[0]), vec!["head", "tail"]);
    }

    #[test]
    fn leading_bracket_needs_a_title() {
        let guide = parse_guide(&["[orphan]"]);
        assert!(matches!(guide.nodes[0], GuideNode::Paragraph { .. }));
    }

    #[test]
    fn unclosed_first_bracket_falls_back_to_free_text() {
        assert_eq!(split_titled("Note[open only"), None);
        assert_eq!(split_titled("A[]"), None);
        assert_eq!(split_titled("A[]]"), Some(("A", "]")));
    }

    #[test]
    fn embedded_line_breaks_keep_the_entry_as_free_text() {
        for line in ["Tips\n[a, b]", "Tips[a\nb]", "Tips[a, b]\r\nmore", "Tips\u{2028}[a]"] {
            let guide = parse_guide(&[line]);
            assert!(
                matches!(guide.nodes[..], [GuideNode::Paragraph { .. }]),
                "{line:?} parsed as {:?}",
                guide.nodes
            );
        }
        let guide = parse_guide(&["Tips\n[a, b]"]);
        let GuideNode::Paragraph { text } = &guide.nodes[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(text.plain(), "Tips\n[a, b]");
    }

    #[test]
    fn multibyte_titles_split_on_char_boundaries() {
        let guide = parse_guide(&["공략[**머리** 공격, 꼬리 절단]"]);
        let GuideNode::Block(block) = &guide.nodes[0] else {
            panic!("expected block");
        };
        assert_eq!(block.title, "공략");
        assert_eq!(
            html_items(&guide.nodes[0]),
            vec!["<em>머리</em> 공격", "꼬리 절단"]
        );
    }

    #[test]
    fn emphasis_applies_to_every_pair() {
        let text = InlineText::parse("**a** and **b** but **c");
        assert_eq!(text.to_html(), "<em>a</em> and <em>b</em> but **c");
        assert_eq!(text.plain(), "a and b but **c");
    }
}
