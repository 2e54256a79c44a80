use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "gdiff",
    about = "gdiff — structural property diff for composite object graphs",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare two object graphs field by field
    Compare(CompareArgs),
    /// List the struct and enum definitions of a schema file
    Schema(SchemaArgs),
}

#[derive(Args)]
pub struct CompareArgs {
    /// Identifier of the first graph
    pub graph_a: String,
    /// Identifier of the second graph
    pub graph_b: String,
    /// Directory graph identifiers are resolved under
    #[arg(long, default_value = ".")]
    pub root: String,
    /// JSON schema file with struct and enum definitions
    #[arg(long)]
    pub schema: String,
    /// TOML file with buckets and cross-checks
    #[arg(long)]
    pub config: Option<String>,
}

#[derive(Args)]
pub struct SchemaArgs {
    /// JSON schema file to inspect
    pub schema: String,
}
