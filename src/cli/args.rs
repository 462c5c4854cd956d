//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand};

use crate::cli::commands::{
    check::CheckArgs, completions::CompletionsArgs, generate::GenerateArgs,
    schema::SchemaArgs,
};

#[derive(Parser)]
#[command(name = "epdconf")]
#[command(author, version, about = "ESP32 e-paper weather display configuration compiler")]
#[command(
    long_about = "Validates config.yml against the display's configuration schema and generates the defines.h header consumed by the firmware build."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate config.yml and generate the defines header
    Generate(GenerateArgs),

    /// Validate config.yml without writing anything
    Check(CheckArgs),

    /// Print the configuration schema as JSON
    Schema(SchemaArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}
