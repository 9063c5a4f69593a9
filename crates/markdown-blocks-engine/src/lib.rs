pub mod ids;
pub mod language;
pub mod output;
pub mod parsing;
pub mod request;

// Re-export key types for easier usage
pub use ids::{BlockId, IdError, is_valid_block_id};
pub use language::{CodeLanguage, detect_code_block_language, normalize_language};
pub use output::{OutputBlock, RichSpan, to_output_blocks};
pub use parsing::{
    blocks::{MdBlock, MdBlockKind},
    parse_markdown,
};
pub use request::{AppendBlocksRequest, CreatePageRequest, Parent, UpdatePageRequest};

/// Converts markdown straight into API block records.
pub fn markdown_to_blocks(markdown: &str) -> Vec<OutputBlock> {
    to_output_blocks(&parse_markdown(markdown))
}
