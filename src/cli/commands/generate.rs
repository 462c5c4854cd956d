//! `epdconf generate` command - validate and write the defines header

use console::style;
use miette::{IntoDiagnostic, Result};
use std::fs;
use std::path::PathBuf;

use crate::cli::GlobalOpts;
use crate::compile;
use crate::schema::load_config;

#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    /// Configuration document to compile
    #[arg(long, default_value = "config.yml")]
    pub config: PathBuf,

    /// Generated header path (parent directory created if absent)
    #[arg(long, default_value = "include/defines.h")]
    pub output: PathBuf,
}

pub fn run(args: GenerateArgs, global: &GlobalOpts) -> Result<()> {
    let config = load_config(&args.config)?;

    let header = compile::compile_now(&config).into_diagnostic()?;

    // The artifact is only opened once the tree is fully valid.
    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).into_diagnostic()?;
        }
    }
    fs::write(&args.output, header.text()).into_diagnostic()?;

    if !global.quiet {
        println!(
            "{} Generated {} ({} defines)",
            style("✓").green(),
            style(args.output.display()).cyan(),
            header.define_count()
        );
    }

    Ok(())
}
