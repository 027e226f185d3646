use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "zoo", about = "Zoo catalog — animal records over HTTP", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Catalog JSON document (default: data/animals.json).
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the catalog HTTP server
    Serve(ServeArgs),
    /// List animals, optionally filtered
    List(ListArgs),
    /// Show one animal by id
    Show(ShowArgs),
    /// Add an animal to the catalog
    Add(AddArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// TOML config file; flags below override it.
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub bind: Option<String>,
    #[arg(long)]
    pub public: Option<PathBuf>,
}

#[derive(Args)]
pub struct ListArgs {
    /// Required trait; repeat to require several.
    #[arg(long = "trait")]
    pub traits: Vec<String>,
    #[arg(long)]
    pub diet: Option<String>,
    #[arg(long)]
    pub species: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Args)]
pub struct ShowArgs {
    pub id: String,
}

#[derive(Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub species: String,
    #[arg(long)]
    pub diet: String,
    #[arg(long = "trait")]
    pub traits: Vec<String>,
}
