use crate::parsing::blocks::types::MdBlockKind;

/// ATX heading block type. Levels 1 to 3 only; deeper headings are text.
pub struct Heading;

impl Heading {
    /// Markers in precedence order, each with its mandatory trailing space.
    const MARKERS: [(&'static str, MdBlockKind); 3] = [
        ("# ", MdBlockKind::Heading1),
        ("## ", MdBlockKind::Heading2),
        ("### ", MdBlockKind::Heading3),
    ];

    /// Matches a heading marker at column 0, returning the kind and trimmed title.
    pub fn parse(line: &str) -> Option<(MdBlockKind, &str)> {
        for (marker, kind) in Self::MARKERS {
            if let Some(rest) = line.strip_prefix(marker) {
                return Some((kind, rest.trim()));
            }
        }
        None
    }
}
