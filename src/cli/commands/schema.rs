//! `epdconf schema` command - print the introspection document

use console::style;
use miette::{IntoDiagnostic, Result};
use std::fs;
use std::path::PathBuf;

use crate::cli::GlobalOpts;
use crate::schema::introspect;

#[derive(clap::Args, Debug)]
pub struct SchemaArgs {
    /// Write the schema JSON to a file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: SchemaArgs, global: &GlobalOpts) -> Result<()> {
    let doc = serde_json::to_string_pretty(&introspect::schema_json()).into_diagnostic()?;

    match args.output {
        Some(path) => {
            fs::write(&path, doc).into_diagnostic()?;
            if !global.quiet {
                println!(
                    "{} Wrote schema to {}",
                    style("✓").green(),
                    style(path.display()).cyan()
                );
            }
        }
        None => println!("{doc}"),
    }

    Ok(())
}
