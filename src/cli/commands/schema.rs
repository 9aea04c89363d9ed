use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use log::info;
use sp_field_mapper::config::Config;
use sp_field_mapper::mapper::EntitySchema;
use std::path::PathBuf;

#[derive(Args)]
pub struct SchemaCommands {
    #[command(subcommand)]
    pub command: SchemaSubcommands,
}

#[derive(Subcommand)]
pub enum SchemaSubcommands {
    /// List all registered schema aliases
    List,
    /// Register a schema file under an alias
    Add {
        /// Alias used in place of the path
        alias: String,
        /// Path to a .toml/.json schema file
        path: PathBuf,
    },
    /// Remove a schema alias
    Remove {
        /// Alias to remove
        alias: String,
    },
}

pub fn schema_command(mut config: Config, args: SchemaCommands) -> Result<()> {
    match args.command {
        SchemaSubcommands::List => {
            let schemas = config.list_schemas();
            if schemas.is_empty() {
                println!("No schema aliases configured.");
                return Ok(());
            }

            println!("{:<20} -> Path", "Alias");
            println!("{}", "-".repeat(50));
            for (alias, path) in &schemas {
                println!("{:<20} -> {}", alias, path.display());
            }
            println!("\nTotal aliases: {}", schemas.len());
        }
        SchemaSubcommands::Add { alias, path } => {
            // Refuse aliases for files that do not parse
            let schema = EntitySchema::load(&path)
                .with_context(|| format!("Failed to load schema: {}", path.display()))?;
            info!("Schema {} has {} properties", schema.name, schema.properties.len());

            let path = path.canonicalize().unwrap_or(path);
            config.add_schema(alias.clone(), path.clone());
            config.save()?;
            println!("Added schema alias: {} -> {}", alias, path.display());
        }
        SchemaSubcommands::Remove { alias } => {
            config.remove_schema(&alias)?;
            config.save()?;
            println!("Removed schema alias: {}", alias);
        }
    }
    Ok(())
}
