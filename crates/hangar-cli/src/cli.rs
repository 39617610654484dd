use clap::{Args, Parser, Subcommand};

use hangar_core::VERSION;

/// Hangar - an aircraft characteristics catalog
#[derive(Parser)]
#[command(name = "hangar")]
#[command(version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the catalog database
    #[arg(short, long, global = true, env = "HANGAR_DB", default_value = "hangar.db")]
    pub db: String,

    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage aircraft
    #[command(subcommand)]
    Aircraft(AircraftCommand),

    /// Manage characteristics
    #[command(subcommand)]
    Characteristic(CharacteristicCommand),

    /// Manage characteristic values on an aircraft
    #[command(subcommand)]
    Value(ValueCommand),

    /// Filter aircraft by a characteristic predicate
    Filter(FilterArgs),

    /// Export the catalog to a JSON document
    Export(ExportArgs),

    /// Import a native dump or a foreign aircraft record
    Import(ImportArgs),

    /// Populate the catalog with a small demo dataset
    Seed,
}

#[derive(Subcommand)]
pub enum AircraftCommand {
    /// Add an aircraft
    Add(AircraftAddArgs),

    /// Rename an aircraft
    Rename(RenameArgs),

    /// Replace an aircraft's notes
    Notes(NotesArgs),

    /// Delete an aircraft and all its values
    Delete(DeleteArgs),

    /// List aircraft
    List(ListArgs),

    /// Show one aircraft with all its values
    Show(ShowArgs),
}

#[derive(Subcommand)]
pub enum CharacteristicCommand {
    /// Add a characteristic
    Add(CharacteristicAddArgs),

    /// Rename a characteristic
    Rename(RenameArgs),

    /// Replace a characteristic's unit label
    Unit(UnitArgs),

    /// Delete a characteristic and all values keyed to it
    Delete(DeleteArgs),

    /// List characteristics
    List(ListArgs),
}

#[derive(Subcommand)]
pub enum ValueCommand {
    /// Set (or replace) the value of a characteristic on an aircraft
    Set(ValueSetArgs),

    /// Remove the value of a characteristic from an aircraft
    Remove(ValueRemoveArgs),

    /// List all values held by an aircraft
    List(ValueListArgs),
}

#[derive(Args)]
pub struct AircraftAddArgs {
    /// Aircraft name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Free-text notes
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Args)]
pub struct CharacteristicAddArgs {
    /// Characteristic name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Unit label (free text)
    #[arg(long)]
    pub unit: Option<String>,
}

#[derive(Args)]
pub struct RenameArgs {
    /// Entity id
    #[arg(value_name = "ID")]
    pub id: i64,

    /// New name
    #[arg(value_name = "NAME")]
    pub new_name: String,
}

#[derive(Args)]
pub struct NotesArgs {
    /// Aircraft id
    #[arg(value_name = "ID")]
    pub id: i64,

    /// New notes; omit to clear
    #[arg(value_name = "NOTES")]
    pub notes: Option<String>,
}

#[derive(Args)]
pub struct UnitArgs {
    /// Characteristic id
    #[arg(value_name = "ID")]
    pub id: i64,

    /// New unit label; omit to clear
    #[arg(value_name = "UNIT")]
    pub unit: Option<String>,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Entity id
    #[arg(value_name = "ID")]
    pub id: i64,
}

#[derive(Args)]
pub struct ListArgs {
    /// Restrict to names containing this text (case-insensitive)
    #[arg(value_name = "FILTER")]
    pub filter: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Aircraft name or id
    #[arg(value_name = "NAME_OR_ID")]
    pub name_or_id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ValueSetArgs {
    /// Aircraft name or id
    #[arg(value_name = "AIRCRAFT")]
    pub aircraft: String,

    /// Characteristic name or id
    #[arg(value_name = "CHARACTERISTIC")]
    pub characteristic: String,

    /// Value, stored verbatim
    #[arg(value_name = "VALUE")]
    pub value: String,
}

#[derive(Args)]
pub struct ValueRemoveArgs {
    /// Aircraft name or id
    #[arg(value_name = "AIRCRAFT")]
    pub aircraft: String,

    /// Characteristic name or id
    #[arg(value_name = "CHARACTERISTIC")]
    pub characteristic: String,
}

#[derive(Args)]
pub struct ValueListArgs {
    /// Aircraft name or id
    #[arg(value_name = "AIRCRAFT")]
    pub aircraft: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct FilterArgs {
    /// Characteristic name
    #[arg(value_name = "CHARACTERISTIC")]
    pub characteristic: String,

    /// Operator: =, !=, >, >=, <, <=, in
    #[arg(value_name = "OP", allow_hyphen_values = true)]
    pub op: String,

    /// Query operand (lower bound for `in`)
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,

    /// Upper bound for the `in` operator
    #[arg(value_name = "UPPER", allow_hyphen_values = true)]
    pub upper: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Destination file
    #[arg(value_name = "PATH", default_value = "database_export.json")]
    pub path: String,
}

#[derive(Args)]
pub struct ImportArgs {
    /// Source JSON file (native dump or foreign aircraft record)
    #[arg(value_name = "PATH")]
    pub path: String,
}
