use serde::Serialize;

use crate::parsing::blocks::MdBlock;

/// Snapshot of a parsed document for testing with `insta`.
#[derive(Serialize)]
pub struct Snap {
    /// All blocks in the document.
    pub blocks: Vec<BlockSnap>,
}

/// Snapshot of a single block for testing.
#[derive(Serialize)]
pub struct BlockSnap {
    /// Block kind as a string (e.g., "Paragraph", "CodeBlock").
    pub kind: String,
    /// Code language, `None` for every other kind.
    pub language: Option<String>,
    /// Content split on `\n`, so multi-line blocks stay readable in YAML.
    pub lines: Vec<String>,
}

/// Converts parsed blocks into a serializable snapshot for testing.
pub fn normalize(blocks: &[MdBlock]) -> Snap {
    let blocks = blocks
        .iter()
        .map(|b| BlockSnap {
            kind: format!("{:?}", b.kind),
            language: b.language.map(|l| l.as_str().to_string()),
            lines: if b.content.is_empty() {
                vec![]
            } else {
                b.content.split('\n').map(str::to_string).collect()
            },
        })
        .collect();

    Snap { blocks }
}
