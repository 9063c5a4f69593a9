use super::kinds::{BlockQuote, CodeFence, Divider, Heading, ListItem};
use super::types::MdBlockKind;

/// Classification of a single line outside a code fence.
///
/// This is phase 1 of block parsing: each line is classified on its own,
/// without reference to surrounding lines. Fence contents never reach the
/// classifier; the builder consumes them raw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Opening ``` line with its raw (unnormalized, possibly empty) tag.
    FenceOpen { tag: &'a str },
    /// Whitespace-only line.
    Blank,
    /// Heading with its kind and trimmed title.
    Heading { kind: MdBlockKind, text: &'a str },
    /// Bulleted or numbered item with its trimmed content.
    ListItem { kind: MdBlockKind, text: &'a str },
    /// Quote line with its trimmed content.
    Quote { text: &'a str },
    /// Horizontal rule.
    Divider,
    /// Anything else, verbatim.
    Text { text: &'a str },
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Precedence, first match wins: fence opener, blank, heading, list item,
    /// quote, divider, text.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        if let Some(tag) = CodeFence::open_tag(line) {
            return LineClass::FenceOpen { tag };
        }
        if line.trim().is_empty() {
            return LineClass::Blank;
        }
        if let Some((kind, text)) = Heading::parse(line) {
            return LineClass::Heading { kind, text };
        }
        if let Some((kind, text)) = ListItem::parse(line) {
            return LineClass::ListItem { kind, text };
        }
        if let Some(text) = BlockQuote::strip_prefix(line) {
            return LineClass::Quote { text };
        }
        if Divider::matches(line) {
            return LineClass::Divider;
        }
        LineClass::Text { text: line }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn classify(line: &str) -> LineClass<'_> {
        MarkdownLineClassifier.classify(line)
    }

    #[rstest]
    #[case("```rust", LineClass::FenceOpen { tag: "rust" })]
    #[case(" \t ", LineClass::Blank)]
    #[case("", LineClass::Blank)]
    #[case("# Title", LineClass::Heading { kind: MdBlockKind::Heading1, text: "Title" })]
    #[case("- item", LineClass::ListItem { kind: MdBlockKind::BulletedListItem, text: "item" })]
    #[case("3. third", LineClass::ListItem { kind: MdBlockKind::NumberedListItem, text: "third" })]
    #[case("> quoted", LineClass::Quote { text: "quoted" })]
    #[case("***", LineClass::Divider)]
    #[case("just words", LineClass::Text { text: "just words" })]
    fn classifies_each_kind(#[case] line: &str, #[case] expected: LineClass<'static>) {
        assert_eq!(classify(line), expected);
    }

    #[test]
    fn list_marker_beats_divider() {
        assert_eq!(
            classify("* * *"),
            LineClass::ListItem {
                kind: MdBlockKind::BulletedListItem,
                text: "* *"
            }
        );
    }

    #[test]
    fn heading_beats_list_and_quote() {
        assert_eq!(
            classify("# - > x"),
            LineClass::Heading {
                kind: MdBlockKind::Heading1,
                text: "- > x"
            }
        );
    }

    #[test]
    fn fence_beats_everything() {
        assert_eq!(classify("```"), LineClass::FenceOpen { tag: "" });
    }

    #[test]
    fn text_keeps_surrounding_whitespace() {
        assert_eq!(
            classify("  indented "),
            LineClass::Text {
                text: "  indented "
            }
        );
    }
}
