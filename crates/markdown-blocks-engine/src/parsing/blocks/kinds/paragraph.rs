/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default block when no other
/// opener matches. Their lines are kept verbatim and joined with `\n`.
pub struct Paragraph;

impl Paragraph {
    pub const LINE_SEPARATOR: char = '\n';
}
