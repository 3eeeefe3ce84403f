//! CLI argument parsing for promptgen.
//!
//! Uses clap derive macros for declarative argument definitions. The tool has
//! a single operation, so the surface is a flat set of flags rather than
//! subcommands: one required template, up to five optional content-slot
//! bindings, and an output target.

use clap::Parser;
use std::path::PathBuf;

/// Generate an evaluation prompt by replacing bracketed placeholders in a
/// template with the contents of the supplied files.
///
/// If `--output` names a directory (existing, or any path ending in a
/// separator), the output file name is auto-generated as
/// `{policy_id}_{prompt_type}.txt`; otherwise it is used as the exact path.
#[derive(Parser, Debug)]
#[command(name = "promptgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the prompt template file.
    #[arg(long)]
    pub prompt: PathBuf,

    /// Path to the original policy document (ORIGINAL_DOCUMENT_PLACEHOLDER).
    #[arg(long)]
    pub original_document: Option<PathBuf>,

    /// Path to the original patient record (ORIGINAL_PATIENT_PLACEHOLDER).
    #[arg(long)]
    pub original_patient: Option<PathBuf>,

    /// Path to the extracted data dictionary JSON
    /// (EXTRACTED_DD_JSON_PLACEHOLDER / DATA_DICTIONARY_JSON_PLACEHOLDER).
    #[arg(long)]
    pub extracted_dd: Option<PathBuf>,

    /// Path to the extracted policy conditions JSON (EXTRACTED_JSON_PLACEHOLDER).
    #[arg(long)]
    pub extracted_policy: Option<PathBuf>,

    /// Path to the extracted patient data JSON (EXTRACTED_PAT_PLACEHOLDER).
    #[arg(long)]
    pub extracted_patient: Option<PathBuf>,

    /// Output file path, or a directory to trigger auto-naming.
    #[arg(long)]
    pub output: PathBuf,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
