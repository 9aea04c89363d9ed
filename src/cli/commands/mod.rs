pub mod convert;
pub mod inspect;
pub mod schema;

use anyhow::{Context, Result};
use log::debug;
use sp_field_mapper::config::{Config, OutputFormat};
use sp_field_mapper::mapper::{EntityMapper, EntitySchema};

/// Load the schema named on the command line (alias or path) and register it
pub fn load_mapper(config: &Config, schema: &str) -> Result<EntityMapper> {
    let path = config.resolve_schema_path(schema);
    debug!("Loading schema '{}' from {:?}", schema, path);

    let entity = EntitySchema::load(&path)
        .with_context(|| format!("Failed to load schema: {}", path.display()))?;

    EntityMapper::register(&entity)
        .with_context(|| format!("Failed to register schema: {}", entity.name))
}

/// Command-line format wins over the configured default
pub fn output_format(config: &Config, requested: Option<OutputFormat>) -> OutputFormat {
    requested.unwrap_or(config.settings.output_format)
}
