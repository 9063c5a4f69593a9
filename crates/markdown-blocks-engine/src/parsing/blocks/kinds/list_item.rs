use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::blocks::types::MdBlockKind;

/// List item block type.
///
/// Every marker line becomes its own item; consecutive items are never merged.
pub struct ListItem;

impl ListItem {
    /// Matches a bullet (`-`, `*`, `+`) or numbered (`12.`) marker, allowing
    /// leading indentation, and returns the item kind and trimmed content.
    pub fn parse(line: &str) -> Option<(MdBlockKind, &str)> {
        static BULLET: OnceLock<Regex> = OnceLock::new();
        static NUMBERED: OnceLock<Regex> = OnceLock::new();
        let bullet =
            BULLET.get_or_init(|| Regex::new(r"^\s*[-*+]\s+").expect("Invalid bullet regex"));
        let numbered = NUMBERED.get_or_init(|| {
            Regex::new(r"^\s*[0-9]+\.\s+").expect("Invalid numbered regex")
        });

        if let Some(m) = bullet.find(line) {
            return Some((MdBlockKind::BulletedListItem, line[m.end()..].trim()));
        }
        numbered
            .find(line)
            .map(|m| (MdBlockKind::NumberedListItem, line[m.end()..].trim()))
    }
}
