//! Configuration and CLI argument handling

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser)]
#[command(name = "countdown-clock")]
#[command(about = "A four-digit MM:SS countdown timer for the terminal")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Countdown duration in minutes (1-99)
    #[arg(short, long, conflicts_with = "seconds")]
    pub minutes: Option<i64>,

    /// Countdown duration in seconds (1-5999)
    #[arg(short, long)]
    pub seconds: Option<i64>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
