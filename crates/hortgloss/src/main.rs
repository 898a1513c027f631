mod cli;
mod config;
mod convert;
mod export;
mod logging;
mod run;
mod scrape;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::GlossaryConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let verbose = if cli.verbose {
        true
    } else {
        logging::env_flag()
    };
    logging::init(verbose);
    let config = GlossaryConfig::load(cli.config.as_deref())?;
    let files = &config.files;
    match cli.command {
        Command::Fold { input, output } => {
            let lookup = config.stroke_table()?;
            convert::fold_file(
                input.as_deref().unwrap_or(&files.input_csv),
                output.as_deref().unwrap_or(&files.canonical),
                &config.columns,
                &lookup,
            )?;
        }
        Command::Unfold { input, output } => {
            export::export_csv(
                input.as_deref().unwrap_or(&files.canonical),
                output.as_deref().unwrap_or(&files.export_csv),
                &config.columns,
                config.csv.bom,
            )?;
        }
        Command::Review { input, output } => {
            export::export_review(
                input.as_deref().unwrap_or(&files.canonical),
                output.as_deref().unwrap_or(&files.review_md),
                &config.review,
            )?;
        }
        Command::Document {
            input,
            output,
            format,
        } => {
            let format = config.target_format(format.as_deref())?;
            export::export_document(
                input.as_deref().unwrap_or(&files.review_md),
                output.as_deref().unwrap_or(&files.document),
                format,
                &config.renderer(),
            )?;
        }
        Command::Scrape {
            dir,
            output,
            prefix,
        } => {
            let scraper = config.scraper()?;
            scrape::scrape_dir(
                dir.as_deref().unwrap_or(&files.legacy_dir),
                output.as_deref().unwrap_or(&files.legacy_md),
                prefix.as_deref().unwrap_or(&config.legacy.prefix),
                &scraper,
            )?;
        }
        Command::Run => run::run_from_config(&config)?,
    }
    Ok(())
}
