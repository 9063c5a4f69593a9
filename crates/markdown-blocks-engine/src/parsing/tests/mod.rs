//! Behavioural tests for `parse_markdown`.
//!
//! Every parse is also run through the snapshot invariants.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::language::{CodeLanguage, normalize_language};
use crate::parsing::{
    blocks::{MdBlock, MdBlockKind},
    parse_markdown, snapshot,
};

fn parse(md: &str) -> Vec<MdBlock> {
    let blocks = parse_markdown(md);
    snapshot::invariants(md, &blocks);
    blocks
}

fn block(kind: MdBlockKind, content: &str) -> MdBlock {
    MdBlock::new(kind, content)
}

#[test]
fn empty_document() {
    assert!(parse("").is_empty());
}

#[test]
fn blank_lines_only() {
    assert!(parse("\n  \n\t\n").is_empty());
}

#[rstest]
#[case("# Title", MdBlockKind::Heading1, "Title")]
#[case("## Section ", MdBlockKind::Heading2, "Section")]
#[case("### Sub", MdBlockKind::Heading3, "Sub")]
fn heading_extraction(#[case] md: &str, #[case] kind: MdBlockKind, #[case] text: &str) {
    assert_eq!(parse(md), vec![block(kind, text)]);
}

#[test]
fn list_items_are_not_merged() {
    assert_eq!(
        parse("- a\n- b"),
        vec![
            block(MdBlockKind::BulletedListItem, "a"),
            block(MdBlockKind::BulletedListItem, "b"),
        ]
    );
}

#[test]
fn numbered_items_are_not_merged() {
    assert_eq!(
        parse("1. one\n2. two"),
        vec![
            block(MdBlockKind::NumberedListItem, "one"),
            block(MdBlockKind::NumberedListItem, "two"),
        ]
    );
}

#[test]
fn switching_list_kind_starts_new_item() {
    assert_eq!(
        parse("- a\n1. b\n* c"),
        vec![
            block(MdBlockKind::BulletedListItem, "a"),
            block(MdBlockKind::NumberedListItem, "b"),
            block(MdBlockKind::BulletedListItem, "c"),
        ]
    );
}

#[test]
fn blockquote_lines_merge() {
    assert_eq!(
        parse("> line1\n> line2"),
        vec![block(MdBlockKind::Blockquote, "line1\nline2")]
    );
}

#[test]
fn code_fence_round_trip() {
    assert_eq!(
        parse("```py\nprint(1)\n```"),
        vec![MdBlock::code("print(1)", normalize_language("python"))]
    );
}

#[test]
fn unterminated_fence_is_flushed() {
    let blocks = parse("```js\nconsole.log(1)");
    let expected = MdBlock::code("console.log(1)", normalize_language("javascript"));
    assert_eq!(blocks, vec![expected]);
}

#[test]
fn unterminated_fence_keeps_trailing_empty_line() {
    assert_eq!(
        parse("```\ncode\n"),
        vec![MdBlock::code("code\n", CodeLanguage::PLAIN_TEXT)]
    );
}

#[test]
fn empty_terminated_fence_emits_empty_code_block() {
    assert_eq!(
        parse("```rust\n```"),
        vec![MdBlock::code("", normalize_language("rust"))]
    );
}

#[test]
fn unsupported_fence_language_degrades() {
    let blocks = parse("```brainfuck\n+++\n```");
    assert_eq!(blocks[0].language, Some(CodeLanguage::PLAIN_TEXT));
}

#[test]
fn fence_keeps_blank_and_indented_lines() {
    assert_eq!(
        parse("```\nfn main() {\n\n    body();\n}\n```"),
        vec![MdBlock::code(
            "fn main() {\n\n    body();\n}",
            CodeLanguage::PLAIN_TEXT
        )]
    );
}

#[test]
fn divider_flushes_pending_paragraph() {
    assert_eq!(
        parse("before\n---"),
        vec![block(MdBlockKind::Paragraph, "before"), MdBlock::divider()]
    );
}

#[test]
fn divider_alone() {
    assert_eq!(parse("---"), vec![MdBlock::divider()]);
}

#[test]
fn blank_line_separates_paragraphs() {
    assert_eq!(
        parse("para1\n\npara2"),
        vec![
            block(MdBlockKind::Paragraph, "para1"),
            block(MdBlockKind::Paragraph, "para2"),
        ]
    );
}

#[test]
fn paragraph_lines_merge_verbatim() {
    assert_eq!(
        parse("first\n  second "),
        vec![block(MdBlockKind::Paragraph, "first\n  second ")]
    );
}

#[test]
fn text_after_list_item_starts_paragraph() {
    assert_eq!(
        parse("- item\ncontinued"),
        vec![
            block(MdBlockKind::BulletedListItem, "item"),
            block(MdBlockKind::Paragraph, "continued"),
        ]
    );
}

#[test]
fn fence_opening_flushes_pending_block() {
    assert_eq!(
        parse("intro\n```sh\nls\n```\noutro"),
        vec![
            block(MdBlockKind::Paragraph, "intro"),
            MdBlock::code("ls", normalize_language("shell")),
            block(MdBlockKind::Paragraph, "outro"),
        ]
    );
}

#[test]
fn crlf_input_parses_like_lf() {
    assert_eq!(parse("# T\r\n\r\na\r\nb\r\n"), parse("# T\n\na\nb\n"));
}

#[test]
fn unmarked_hash_and_quote_are_text() {
    assert_eq!(
        parse("#hashtag\n>no space"),
        vec![block(MdBlockKind::Paragraph, "#hashtag\n>no space")]
    );
}

#[test]
fn blocks_never_have_children() {
    let md = "# H\n\ntext\n- a\n1. b\n> q\n---\n```\nc\n```";
    assert!(parse(md).iter().all(|b| b.children.is_empty()));
}

/// Every non-blank, non-delimiter line shows up in exactly one block.
#[test]
fn no_line_is_lost() {
    let md = "# Title\nintro one\nintro two\n\n- a\n- b\n1. c\n> q1\n> q2\n***\n```rb\nputs 1\n```\ntail";
    let blocks = parse(md);

    let contents: Vec<&str> = blocks
        .iter()
        .filter(|b| b.kind != MdBlockKind::Divider)
        .flat_map(|b| b.content.split('\n'))
        .collect();

    assert_eq!(
        contents,
        vec![
            "Title",
            "intro one",
            "intro two",
            "a",
            "b",
            "c",
            "q1",
            "q2",
            "puts 1",
            "tail"
        ]
    );
    assert_eq!(
        blocks.iter().map(|b| b.kind).collect::<Vec<_>>(),
        vec![
            MdBlockKind::Heading1,
            MdBlockKind::Paragraph,
            MdBlockKind::BulletedListItem,
            MdBlockKind::BulletedListItem,
            MdBlockKind::NumberedListItem,
            MdBlockKind::Blockquote,
            MdBlockKind::Divider,
            MdBlockKind::CodeBlock,
            MdBlockKind::Paragraph,
        ]
    );
}
