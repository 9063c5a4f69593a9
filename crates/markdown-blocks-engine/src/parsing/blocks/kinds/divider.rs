use std::sync::OnceLock;

use regex::Regex;

/// Horizontal rule (thematic break) block type.
pub struct Divider;

impl Divider {
    /// Three or more of `-`, `*` or `_` with nothing else but surrounding whitespace.
    pub fn matches(line: &str) -> bool {
        static RULE: OnceLock<Regex> = OnceLock::new();
        let rule =
            RULE.get_or_init(|| Regex::new(r"^\s*[-*_]{3,}\s*$").expect("Invalid rule regex"));
        rule.is_match(line)
    }
}
