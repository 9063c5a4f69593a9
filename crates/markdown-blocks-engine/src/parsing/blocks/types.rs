use serde::Serialize;

use crate::language::CodeLanguage;

/// The kind of a parsed block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MdBlockKind {
    /// Plain text lines (default when no other block opener matches).
    Paragraph,
    /// `# ` heading.
    Heading1,
    /// `## ` heading.
    Heading2,
    /// `### ` heading.
    Heading3,
    /// `-`, `*` or `+` list item.
    BulletedListItem,
    /// `1.` style list item.
    NumberedListItem,
    /// Fenced code block (```).
    CodeBlock,
    /// `> ` quote, possibly spanning several lines.
    Blockquote,
    /// Reserved; never produced by the line parser.
    Table,
    /// Horizontal rule.
    Divider,
}

/// One logical unit of parsed markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MdBlock {
    pub kind: MdBlockKind,
    /// Text content. Multi-line content is joined with `\n`.
    pub content: String,
    /// Set only on [`MdBlockKind::CodeBlock`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<CodeLanguage>,
    /// Nested blocks. Always empty for blocks from [`crate::parsing::parse_markdown`].
    pub children: Vec<MdBlock>,
}

impl MdBlock {
    pub fn new(kind: MdBlockKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            language: None,
            children: vec![],
        }
    }

    pub fn code(content: impl Into<String>, language: CodeLanguage) -> Self {
        Self {
            kind: MdBlockKind::CodeBlock,
            content: content.into(),
            language: Some(language),
            children: vec![],
        }
    }

    pub fn divider() -> Self {
        Self::new(MdBlockKind::Divider, "")
    }
}
