pub mod block_quote;
pub mod code_fence;
pub mod divider;
pub mod heading;
pub mod list_item;
pub mod paragraph;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use divider::Divider;
pub use heading::Heading;
pub use list_item::ListItem;
pub use paragraph::Paragraph;
