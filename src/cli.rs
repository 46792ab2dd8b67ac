//! CLI definitions: argument parsing and help text.

use clap::{ArgAction, Parser};

const AFTER_HELP: &str = "\
ENVIRONMENT:
  GEMINI_API_KEY      API key for the Generative Language API (required; .env is read)
  GEMINI_BASE_URL     Catalog endpoint root (default: https://generativelanguage.googleapis.com/v1beta)
  GEMINI_PAGE_SIZE    Models requested per page (default: 50)
  RUST_LOG            Log filter, overrides -v/-q

EXAMPLES:
  gemini-models                     Print all models, generateContent models, vision models
  gemini-models -vv                 Same, with debug logs on stderr
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "List the Gemini models available to your API key",
    after_help = AFTER_HELP
)]
pub struct Args {
    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}
