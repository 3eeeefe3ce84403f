//! Prompt template handling.
//!
//! A template is a text file containing zero or more bracketed placeholder
//! tokens (e.g. `[ORIGINAL_DOCUMENT_PLACEHOLDER]`). This module classifies
//! templates by file name and fills their placeholders from bound input
//! files.

mod fill;
mod slots;

pub use fill::{PLACEHOLDERS, fill_placeholders};
pub use slots::{Slot, SlotBindings};

use crate::error::{PromptGenError, Result};
use std::fmt;
use std::path::Path;

/// The evaluation category a template belongs to.
///
/// Used as the `{type}` component of auto-generated output file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptType {
    /// Data dictionary evaluation.
    Data,
    /// Patient extraction evaluation.
    Patient,
    /// Policy condition evaluation.
    Condition,
}

impl PromptType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptType::Data => "data",
            PromptType::Patient => "patient",
            PromptType::Condition => "condition",
        }
    }
}

impl fmt::Display for PromptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification markers checked against the template's base file name,
/// in order. First match wins.
const MARKERS: &[(&str, PromptType)] = &[
    ("data_dictionary_judge_prompt", PromptType::Data),
    ("patient_extraction_judge_prompt", PromptType::Patient),
    ("policy_condition_judge_prompt", PromptType::Condition),
];

/// Classify a template by its base file name.
///
/// Fails with `UnrecognizedTemplate` if the name contains none of the known
/// markers.
pub fn classify(template_path: &Path) -> Result<PromptType> {
    let name = template_path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();

    for (marker, prompt_type) in MARKERS {
        if name.contains(marker) {
            return Ok(*prompt_type);
        }
    }

    Err(PromptGenError::UnrecognizedTemplate(name.into_owned()))
}
