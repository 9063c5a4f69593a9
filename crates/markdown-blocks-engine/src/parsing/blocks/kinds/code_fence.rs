use std::sync::OnceLock;

use regex::Regex;

/// Code fence block type with owned delimiter constant.
///
/// Only backtick fences are recognised; the closing line must be exactly the
/// delimiter once surrounding whitespace is removed.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Returns the raw language tag if `line` opens a fence.
    ///
    /// The tag is the run of `[a-zA-Z0-9_+-]` directly after the backticks,
    /// possibly empty.
    pub fn open_tag(line: &str) -> Option<&str> {
        static TAG: OnceLock<Regex> = OnceLock::new();
        let tag =
            TAG.get_or_init(|| Regex::new(r"^```([a-zA-Z0-9_+-]*)").expect("Invalid fence regex"));

        let t = line.trim();
        if !t.starts_with(Self::BACKTICKS) {
            return None;
        }
        Some(
            tag.captures(t)
                .and_then(|caps| caps.get(1))
                .map_or("", |m| m.as_str()),
        )
    }

    pub fn closes(line: &str) -> bool {
        line.trim() == Self::BACKTICKS
    }
}
