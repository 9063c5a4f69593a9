use crate::language::supported_languages;
use crate::parsing::blocks::{MdBlock, MdBlockKind};
use crate::parsing::lines::lines_with_numbers;

/// Validates parser output invariants against the source it came from.
///
/// Asserts that:
/// - No block has children
/// - Exactly the code blocks carry a language, and it is whitelisted
/// - Headings and list items are single-line
/// - Table blocks are never produced
/// - Every content line of a paragraph or code block is a source line, and
///   every other block's content lines occur within some source line
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(src: &str, blocks: &[MdBlock]) {
    let source_lines: Vec<&str> = lines_with_numbers(src).map(|l| l.text).collect();

    for (i, b) in blocks.iter().enumerate() {
        assert!(b.children.is_empty(), "block {i} has children: {b:?}");
        assert_ne!(b.kind, MdBlockKind::Table, "block {i} is a table");

        match (b.kind, b.language) {
            (MdBlockKind::CodeBlock, Some(lang)) => assert!(
                supported_languages().contains(&lang.as_str()),
                "block {i} has unsupported language {lang}"
            ),
            (MdBlockKind::CodeBlock, None) => panic!("code block {i} without language"),
            (_, Some(lang)) => panic!("non-code block {i} has language {lang}"),
            (_, None) => {}
        }

        if matches!(
            b.kind,
            MdBlockKind::Heading1
                | MdBlockKind::Heading2
                | MdBlockKind::Heading3
                | MdBlockKind::BulletedListItem
                | MdBlockKind::NumberedListItem
        ) {
            assert!(!b.content.contains('\n'), "block {i} spans lines: {b:?}");
        }

        let verbatim = matches!(b.kind, MdBlockKind::Paragraph | MdBlockKind::CodeBlock);
        if b.content.is_empty() {
            continue;
        }
        for line in b.content.split('\n') {
            let found = if verbatim {
                source_lines.contains(&line)
            } else {
                source_lines.iter().any(|s| s.contains(line))
            };
            assert!(found, "block {i} content line {line:?} not found in source");
        }
    }
}
