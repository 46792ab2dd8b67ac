//! # gemini-models - Gemini model catalog lister
//!
//! Reads `GEMINI_API_KEY` (from the environment or a `.env` file), fetches the model
//! catalog once, and prints three reports to stdout:
//! - every model with its metadata
//! - models that support `generateContent`
//! - models whose name suggests vision/multimodal support
//!
//! A missing key is fatal (stderr, exit 1). Any later failure is printed as
//! `❌ Error: ...` with a hint, and the process exits normally.

mod cli;
mod core;
mod run;

use clap::Parser;
use dotenv::dotenv;

use crate::cli::Args;
use crate::core::models::GeminiCatalog;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);

    // Print user-friendly message; exit uses Display not Debug
    let config = core::config::load().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    log::debug!(
        "Catalog endpoint: {} (pageSize={})",
        config.base_url,
        config.page_size
    );

    match GeminiCatalog::new(&config) {
        Ok(catalog) => run::run_to_stdout(&catalog).await,
        Err(e) => run::report_error(&mut std::io::stdout(), &e),
    }
}
