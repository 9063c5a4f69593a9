use markdown_blocks_engine::parsing::{parse_markdown, snapshot};

#[test]
fn fixture_simple_paragraph() {
    assert_fixture("simple_paragraph");
}

#[test]
fn fixture_headings_and_lists() {
    assert_fixture("headings_and_lists");
}

#[test]
fn fixture_code_fences() {
    assert_fixture("code_fences");
}

#[test]
fn fixture_quotes_and_dividers() {
    assert_fixture("quotes_and_dividers");
}

#[test]
fn fixture_unterminated_fence() {
    assert_fixture("unterminated_fence");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();

    let blocks = parse_markdown(&md);
    snapshot::invariants(&md, &blocks);

    let snap = snapshot::normalize(&blocks);
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_yaml_snapshot!(name, snap);
    });
}

/// Parsing the same input twice gives the same blocks.
#[test]
fn parsing_is_deterministic() {
    let md = "# A\n\n- b\n> c\n```go\nd\n```";
    assert_eq!(parse_markdown(md), parse_markdown(md));
}

/// Independent parses on separate threads share no state.
#[test]
fn concurrent_parses_are_independent() {
    let inputs = [
        "# One",
        "- two\n- three",
        "```py\nfour\n```",
        "> five\n> six",
    ];
    let expected: Vec<_> = inputs.iter().map(|md| parse_markdown(md)).collect();

    let handles: Vec<_> = inputs
        .iter()
        .map(|md| {
            let md = md.to_string();
            std::thread::spawn(move || parse_markdown(&md))
        })
        .collect();

    for (handle, want) in handles.into_iter().zip(expected) {
        assert_eq!(handle.join().unwrap(), want);
    }
}
