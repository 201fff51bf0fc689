use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "amazing-numbers")]
#[command(about = "Classifies natural numbers: even, buzz, duck, spy, gapful, happy and more")]
pub struct CliConfig {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, help = "Answer a single request (e.g. \"1 10 even -duck\") and exit")]
    pub request: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
