use anyhow::{Context, Result};
use clap::Args;
use log::info;
use sp_field_mapper::config::Config;
use sp_field_mapper::mapper::{EntityValues, ItemValues};
use std::fs;
use std::path::{Path, PathBuf};

use super::load_mapper;

#[derive(Args)]
pub struct ToLocalCommand {
    /// Schema alias or path to a .toml/.json schema file
    pub schema: String,

    /// JSON object of item values keyed by internal field name
    pub item: PathBuf,
}

#[derive(Args)]
pub struct ToRemoteCommand {
    /// Schema alias or path to a .toml/.json schema file
    pub schema: String,

    /// JSON object of entity values keyed by property name
    pub entity: PathBuf,
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON: {}", path.display()))
}

pub fn to_local_command(config: &Config, args: ToLocalCommand) -> Result<()> {
    info!("Converting item {} with schema {}", args.item.display(), args.schema);
    let mapper = load_mapper(config, &args.schema)?;

    let item: ItemValues = read_json(&args.item)?;
    let entity = mapper
        .item_to_entity(item)
        .context("Failed to convert item values")?;

    println!("{}", serde_json::to_string_pretty(&entity)?);
    Ok(())
}

pub fn to_remote_command(config: &Config, args: ToRemoteCommand) -> Result<()> {
    info!("Converting entity {} with schema {}", args.entity.display(), args.schema);
    let mapper = load_mapper(config, &args.schema)?;

    let entity: EntityValues = read_json(&args.entity)?;
    let item = mapper
        .entity_to_item(&entity)
        .context("Failed to convert entity values")?;

    println!("{}", serde_json::to_string_pretty(&item)?);
    Ok(())
}
