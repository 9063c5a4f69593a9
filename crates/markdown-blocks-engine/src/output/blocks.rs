use serde::Serialize;

use crate::language::CodeLanguage;
use crate::parsing::blocks::{MdBlock, MdBlockKind};

use super::rich_text::{RichSpan, text_to_rich_text};

/// A block record ready to submit to the content API.
///
/// Serializes as `{"object": "block", "type": <tag>, <tag>: <payload>}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputBlock {
    object: &'static str,
    #[serde(flatten)]
    pub body: BlockBody,
}

/// Type-specific payload, keyed by the API's block type name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum BlockBody {
    #[serde(rename = "paragraph")]
    Paragraph { paragraph: RichTextPayload },
    #[serde(rename = "heading_1")]
    Heading1 { heading_1: RichTextPayload },
    #[serde(rename = "heading_2")]
    Heading2 { heading_2: RichTextPayload },
    #[serde(rename = "heading_3")]
    Heading3 { heading_3: RichTextPayload },
    #[serde(rename = "bulleted_list_item")]
    BulletedListItem { bulleted_list_item: RichTextPayload },
    #[serde(rename = "numbered_list_item")]
    NumberedListItem { numbered_list_item: RichTextPayload },
    #[serde(rename = "code")]
    Code { code: CodePayload },
    #[serde(rename = "quote")]
    Quote { quote: RichTextPayload },
    #[serde(rename = "divider")]
    Divider { divider: EmptyPayload },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RichTextPayload {
    pub rich_text: Vec<RichSpan>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodePayload {
    pub rich_text: Vec<RichSpan>,
    pub language: CodeLanguage,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmptyPayload {}

impl RichTextPayload {
    fn from_text(text: &str) -> Self {
        Self {
            rich_text: text_to_rich_text(text),
        }
    }
}

impl BlockBody {
    /// The API's name for this block type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Paragraph { .. } => "paragraph",
            Self::Heading1 { .. } => "heading_1",
            Self::Heading2 { .. } => "heading_2",
            Self::Heading3 { .. } => "heading_3",
            Self::BulletedListItem { .. } => "bulleted_list_item",
            Self::NumberedListItem { .. } => "numbered_list_item",
            Self::Code { .. } => "code",
            Self::Quote { .. } => "quote",
            Self::Divider { .. } => "divider",
        }
    }

    /// The rich text carried by this block, empty for dividers.
    pub fn rich_text(&self) -> &[RichSpan] {
        match self {
            Self::Paragraph { paragraph: p }
            | Self::Heading1 { heading_1: p }
            | Self::Heading2 { heading_2: p }
            | Self::Heading3 { heading_3: p }
            | Self::BulletedListItem {
                bulleted_list_item: p,
            }
            | Self::NumberedListItem {
                numbered_list_item: p,
            }
            | Self::Quote { quote: p } => p.rich_text.as_slice(),
            Self::Code { code } => code.rich_text.as_slice(),
            Self::Divider { .. } => &[],
        }
    }
}

impl From<BlockBody> for OutputBlock {
    fn from(body: BlockBody) -> Self {
        Self {
            object: "block",
            body,
        }
    }
}

impl From<&MdBlock> for OutputBlock {
    fn from(block: &MdBlock) -> Self {
        let text = block.content.as_str();
        let body = match block.kind {
            // Tables are never produced by the line parser; they travel as text.
            MdBlockKind::Paragraph | MdBlockKind::Table => BlockBody::Paragraph {
                paragraph: RichTextPayload::from_text(text),
            },
            MdBlockKind::Heading1 => BlockBody::Heading1 {
                heading_1: RichTextPayload::from_text(text),
            },
            MdBlockKind::Heading2 => BlockBody::Heading2 {
                heading_2: RichTextPayload::from_text(text),
            },
            MdBlockKind::Heading3 => BlockBody::Heading3 {
                heading_3: RichTextPayload::from_text(text),
            },
            MdBlockKind::BulletedListItem => BlockBody::BulletedListItem {
                bulleted_list_item: RichTextPayload::from_text(text),
            },
            MdBlockKind::NumberedListItem => BlockBody::NumberedListItem {
                numbered_list_item: RichTextPayload::from_text(text),
            },
            MdBlockKind::CodeBlock => BlockBody::Code {
                code: CodePayload {
                    rich_text: text_to_rich_text(text),
                    language: block.language.unwrap_or_default(),
                },
            },
            MdBlockKind::Blockquote => BlockBody::Quote {
                quote: RichTextPayload::from_text(text),
            },
            MdBlockKind::Divider => BlockBody::Divider {
                divider: EmptyPayload {},
            },
        };
        body.into()
    }
}

/// Maps parsed blocks one-to-one onto API block records.
pub fn to_output_blocks(blocks: &[MdBlock]) -> Vec<OutputBlock> {
    log::debug!("converting {} blocks to output records", blocks.len());
    blocks.iter().map(OutputBlock::from).collect()
}
