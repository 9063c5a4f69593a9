pub mod blocks;
pub mod lines;
pub mod snapshot;

#[cfg(test)]
mod tests;

use blocks::{BlockBuilder, MdBlock};
use lines::lines_with_numbers;

/// Parses markdown into a flat, ordered list of blocks.
///
/// Total over all inputs: malformed markdown still yields a best-effort
/// structure and never an error.
pub fn parse_markdown(markdown: &str) -> Vec<MdBlock> {
    let mut builder = BlockBuilder::new();

    for line in lines_with_numbers(markdown) {
        builder.push(line);
    }

    builder.finish()
}
