//! # Request Bodies
//!
//! JSON bodies for the content API's page and block endpoints. Building a
//! body never touches the network; sending it is the caller's business.

use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::ids::BlockId;
use crate::markdown_to_blocks;
use crate::output::OutputBlock;

/// Where a new page is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Parent {
    #[serde(rename = "page_id")]
    Page(BlockId),
    #[serde(rename = "database_id")]
    Database(BlockId),
}

impl Parent {
    pub fn new(id: BlockId, is_database: bool) -> Self {
        if is_database {
            Self::Database(id)
        } else {
            Self::Page(id)
        }
    }
}

/// The `title` property value for a page title.
pub fn title_property(title: &str) -> Value {
    json!({
        "title": [
            { "text": { "content": title } }
        ]
    })
}

/// Body for creating a page with markdown content.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePageRequest {
    pub parent: Parent,
    pub properties: Map<String, Value>,
    pub children: Vec<OutputBlock>,
}

impl CreatePageRequest {
    pub fn new(parent: Parent, title: &str, markdown: &str) -> Self {
        let mut properties = Map::new();
        properties.insert("title".to_string(), title_property(title));
        Self {
            parent,
            properties,
            children: markdown_to_blocks(markdown),
        }
    }
}

/// Body for appending markdown content to an existing page or block.
///
/// The target id belongs in the request path, so it is not serialized.
#[derive(Debug, Clone, Serialize)]
pub struct AppendBlocksRequest {
    #[serde(skip)]
    block_id: BlockId,
    pub children: Vec<OutputBlock>,
}

impl AppendBlocksRequest {
    pub fn new(block_id: BlockId, markdown: &str) -> Self {
        Self {
            block_id,
            children: markdown_to_blocks(markdown),
        }
    }

    pub fn block_id(&self) -> BlockId {
        self.block_id
    }
}

/// Body for updating page properties.
#[derive(Debug, Clone, Serialize)]
pub struct UpdatePageRequest {
    #[serde(skip)]
    page_id: BlockId,
    properties: Map<String, Value>,
    #[serde(skip)]
    title: Option<String>,
}

impl UpdatePageRequest {
    pub fn new(page_id: BlockId) -> Self {
        Self {
            page_id,
            properties: Map::new(),
            title: None,
        }
    }

    pub fn with_properties(mut self, properties: Map<String, Value>) -> Self {
        self.properties.extend(properties);
        self.apply_title();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self.apply_title();
        self
    }

    pub fn page_id(&self) -> BlockId {
        self.page_id
    }

    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }

    // The explicit title always wins over a `title` key in raw properties.
    fn apply_title(&mut self) {
        if let Some(title) = &self.title {
            self.properties
                .insert("title".to_string(), title_property(title));
        }
    }
}
