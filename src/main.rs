//! Promptgen: generates evaluation prompts by filling template placeholders
//! with file content.
//!
//! This is the main entry point for the `promptgen` CLI. It parses arguments,
//! runs the single generation pipeline, and handles errors with proper exit
//! codes.

mod cli;
mod generate;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod output;
pub mod policy;
pub mod template;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match generate::run(&cli) {
        Ok(report) => {
            println!("Generated prompt saved to: {}", report.output_path.display());
            println!("  Prompt type: {}", report.prompt_type);
            println!(
                "  Policy ID:   {}",
                report.policy_id.as_deref().unwrap_or("(none)")
            );
            ExitCode::from(exit_codes::SUCCESS as u8)
        }
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
