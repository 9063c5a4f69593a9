use serde::{Deserialize, Serialize};

/// An inline styled-text unit in the content API's text representation.
///
/// Spans built here only fill `type` and `text`; spans read back from API
/// responses also carry `plain_text` and may have no `text` at all (mentions,
/// equations).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichSpan {
    #[serde(rename = "type")]
    pub span_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plain_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContent {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
}

impl RichSpan {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            span_type: "text".to_string(),
            text: Some(TextContent {
                content: content.into(),
                link: None,
            }),
            plain_text: None,
        }
    }
}

/// Wraps plain text in a single text span.
///
/// Inline markdown (emphasis, links) is not interpreted.
pub fn text_to_rich_text(text: &str) -> Vec<RichSpan> {
    vec![RichSpan::text(text)]
}

/// Flattens spans back into plain text.
///
/// Uses each span's `plain_text`, falling back to its text content.
pub fn rich_text_to_plain_text(spans: &[RichSpan]) -> String {
    spans
        .iter()
        .map(|span| {
            span.plain_text
                .as_deref()
                .or_else(|| span.text.as_ref().map(|t| t.content.as_str()))
                .unwrap_or_default()
        })
        .collect()
}
