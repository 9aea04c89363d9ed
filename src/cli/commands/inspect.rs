use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use log::info;
use serde::Serialize;
use sp_field_mapper::config::{Config, OutputFormat};
use sp_field_mapper::mapper::{FieldMapping, FieldType};

use super::{load_mapper, output_format};

#[derive(Args)]
pub struct InspectCommand {
    /// Schema alias or path to a .toml/.json schema file
    pub schema: String,

    /// Output format (defaults to the configured format)
    #[arg(long)]
    pub format: Option<OutputFormat>,
}

#[derive(Serialize)]
struct FieldRow<'a> {
    property: &'a str,
    internal_name: &'a str,
    display_name: &'a str,
    declared_type: String,
    field_type: FieldType,
}

impl<'a> From<&'a FieldMapping> for FieldRow<'a> {
    fn from(field: &'a FieldMapping) -> Self {
        Self {
            property: &field.property.name,
            internal_name: &field.names.internal,
            display_name: &field.names.display,
            declared_type: field.property.shape.type_name(),
            field_type: field.field_type,
        }
    }
}

pub fn inspect_command(config: &Config, args: InspectCommand) -> Result<()> {
    info!("Inspecting schema: {}", args.schema);
    let mapper = load_mapper(config, &args.schema)?;
    let rows: Vec<FieldRow> = mapper.fields().iter().map(FieldRow::from).collect();

    if output_format(config, args.format) == OutputFormat::Json {
        let json = serde_json::to_string_pretty(&rows).context("Failed to serialize field table")?;
        println!("{}", json);
        return Ok(());
    }

    println!("List: {}", mapper.list_name().bold());
    println!("Template: {}", mapper.list_template());
    if let Some(description) = mapper.description() {
        println!("Description: {}", description.dimmed());
    }
    println!();

    println!(
        "{:<24} {:<24} {:<24} {:<32} {}",
        "Property", "Internal Name", "Display Name", "Declared Type", "Field Type"
    );
    println!("{}", "-".repeat(120));

    for row in &rows {
        let field_type = match row.field_type {
            FieldType::Invalid => row.field_type.to_string().red().bold(),
            FieldType::Lookup => row.field_type.to_string().cyan(),
            _ => row.field_type.to_string().green(),
        };
        println!(
            "{:<24} {:<24} {:<24} {:<32} {}",
            row.property, row.internal_name, row.display_name, row.declared_type, field_type
        );
    }

    let invalid = rows.iter().filter(|r| r.field_type == FieldType::Invalid).count();
    println!("\nTotal fields: {}", rows.len());
    if invalid > 0 {
        println!(
            "{} {} field(s) have unsupported types and will be skipped",
            "⚠".yellow(),
            invalid
        );
    }
    Ok(())
}
