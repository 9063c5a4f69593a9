use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use uuid::Uuid;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum IdError {
    #[error("Block id is empty")]
    Empty,
    #[error("Invalid block id: {id} (expected 32 hex digits, hyphens optional)")]
    Malformed { id: String },
}

/// Identifier of a page, database or block in the content API.
///
/// Accepts ids with or without hyphens, in any position, and always renders
/// the canonical hyphenated lowercase form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockId(Uuid);

impl BlockId {
    pub fn parse(id: &str) -> Result<Self, IdError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(IdError::Empty);
        }

        let digits: String = id.chars().filter(|c| *c != '-').collect();
        if digits.len() != 32 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(IdError::Malformed { id: id.to_string() });
        }

        Uuid::try_parse(&digits)
            .map(Self)
            .map_err(|_| IdError::Malformed { id: id.to_string() })
    }
}

/// Whether `id` looks like a valid block id.
pub fn is_valid_block_id(id: &str) -> bool {
    BlockId::parse(id).is_ok()
}

impl FromStr for BlockId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl Serialize for BlockId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
