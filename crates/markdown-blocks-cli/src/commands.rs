use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use markdown_blocks_config::Config;
use markdown_blocks_engine::{
    AppendBlocksRequest, BlockId, CreatePageRequest, Parent, markdown_to_blocks,
    normalize_language, parse_markdown,
};
use serde_json::{Value, json};

use crate::cli::Commands;

/// Runs one command and returns the JSON it prints.
pub fn execute(command: Commands, config: &Config) -> Result<Value> {
    match command {
        Commands::Convert { file } => {
            let md = read_input(file.as_deref())?;
            Ok(serde_json::to_value(markdown_to_blocks(&md))?)
        }
        Commands::Parse { file } => {
            let md = read_input(file.as_deref())?;
            Ok(serde_json::to_value(parse_markdown(&md))?)
        }
        Commands::Page {
            title,
            parent,
            database,
            file,
        } => {
            let parent = resolve_parent(parent, database, config)?;
            let md = read_input(file.as_deref())?;
            let request = CreatePageRequest::new(parent, &title, &md);
            log::info!(
                "built create-page request with {} blocks",
                request.children.len()
            );
            Ok(serde_json::to_value(&request)?)
        }
        Commands::Append { block, file } => {
            let block_id = BlockId::parse(&block).context("Invalid --block")?;
            let md = read_input(file.as_deref())?;
            let request = AppendBlocksRequest::new(block_id, &md);
            log::info!(
                "built append request for {block_id} with {} blocks",
                request.children.len()
            );
            Ok(json!({
                "block_id": request.block_id(),
                "body": request,
            }))
        }
        Commands::Language { tag } => Ok(Value::String(normalize_language(&tag).to_string())),
    }
}

/// Renders command output as JSON text.
pub fn render(value: &Value, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text)
}

fn resolve_parent(flag: Option<String>, database: bool, config: &Config) -> Result<Parent> {
    let (raw, is_database) = match (flag, &config.parent) {
        (Some(id), _) => (id, database),
        (None, Some(parent)) => (parent.id.clone(), parent.is_database || database),
        (None, None) => {
            return Err(anyhow!(
                "No parent given: pass --parent or set [parent] in the config file"
            ));
        }
    };
    let id = BlockId::parse(&raw).context("Invalid parent id")?;
    Ok(Parent::new(id, is_database))
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read markdown from {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read markdown from stdin")?;
            Ok(buf)
        }
    }
}

/// Loads the config from `path`, or from the default location when absent.
///
/// A missing file yields the default config.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let loaded = match path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    };
    Ok(loaded.context("Failed to load config")?.unwrap_or_default())
}
