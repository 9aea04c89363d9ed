use super::commands::convert::{ToLocalCommand, ToRemoteCommand};
use super::commands::inspect::InspectCommand;
use super::commands::schema::SchemaCommands;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sp-field-mapper")]
#[command(about = "Inspect entity schemas and convert values for SharePoint list fields")]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the resolved field names and field types of a schema
    Inspect(InspectCommand),
    /// Convert a list item (JSON) into entity values
    ToLocal(ToLocalCommand),
    /// Convert entity values (JSON) into list item values
    ToRemote(ToRemoteCommand),
    /// Schema alias management
    Schema(SchemaCommands),
}
