pub mod blocks;
pub mod rich_text;

pub use blocks::{
    BlockBody, CodePayload, EmptyPayload, OutputBlock, RichTextPayload, to_output_blocks,
};
pub use rich_text::{Link, RichSpan, TextContent, rich_text_to_plain_text, text_to_rich_text};
