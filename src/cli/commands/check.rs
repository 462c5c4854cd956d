//! `epdconf check` command - validate only, never write

use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::cli::GlobalOpts;
use crate::schema::load_config;

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Configuration document to validate
    #[arg(long, default_value = "config.yml")]
    pub config: PathBuf,
}

pub fn run(args: CheckArgs, global: &GlobalOpts) -> Result<()> {
    load_config(&args.config)?;

    if !global.quiet {
        println!(
            "{} {} is valid",
            style("✓").green(),
            style(args.config.display()).cyan()
        );
    }

    Ok(())
}
