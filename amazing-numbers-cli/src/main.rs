mod app;
mod config;
mod formatter;
mod logger;
mod parser;

use amazing_numbers_core::utils::Terminal;
use anyhow::Context;
use app::{App, Step};
use clap::Parser;
use config::{CliConfig, OutputFormat};
use formatter::{JsonFormatter, ReportFormatter, TextFormatter};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!(?config, "starting amazing-numbers");

    let formatter: Box<dyn ReportFormatter> = match config.format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    };
    let app = App::new(formatter);
    let mut terminal = Terminal::stdio();

    match config.request {
        Some(line) => {
            let step = app
                .answer(&line, &mut terminal)
                .context("failed to write the answer")?;
            if step == Step::Rejected {
                std::process::exit(1);
            }
        }
        None => app
            .run(&mut terminal)
            .context("console session failed")?,
    }

    Ok(())
}
