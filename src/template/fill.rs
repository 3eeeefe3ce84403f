//! Placeholder substitution.
//!
//! The placeholder vocabulary is a fixed, closed set of six token names.
//! Templates embed them in square brackets, e.g.
//! `[ORIGINAL_DOCUMENT_PLACEHOLDER]`. Two tokens map to the extracted data
//! dictionary slot; the older `DATA_DICTIONARY_JSON_PLACEHOLDER` spelling is
//! kept as an alias because existing templates use either.

use super::slots::{Slot, SlotBindings};
use crate::error::Result;
use crate::fs;

/// Placeholder token names and the slots they draw content from, in
/// substitution order.
pub const PLACEHOLDERS: &[(&str, Slot)] = &[
    ("ORIGINAL_DOCUMENT_PLACEHOLDER", Slot::OriginalDocument),
    ("ORIGINAL_PATIENT_PLACEHOLDER", Slot::OriginalPatient),
    ("EXTRACTED_DD_JSON_PLACEHOLDER", Slot::ExtractedDd),
    ("DATA_DICTIONARY_JSON_PLACEHOLDER", Slot::ExtractedDd),
    ("EXTRACTED_JSON_PLACEHOLDER", Slot::ExtractedPolicy),
    ("EXTRACTED_PAT_PLACEHOLDER", Slot::ExtractedPatient),
];

/// Replace every occurrence of each bound placeholder token with the bound
/// file's content.
///
/// Tokens whose slot has no bound path are left verbatim; templates are
/// routinely used with a subset of slots. If a bound file's content itself
/// contains a token appearing later in the table, the later substitution
/// rewrites it as well; recursive expansion is intentionally not prevented
/// or performed.
pub fn fill_placeholders(template: &str, bindings: &SlotBindings) -> Result<String> {
    let mut result = template.to_string();

    for (token, slot) in PLACEHOLDERS {
        if let Some(path) = bindings.get(*slot) {
            let content = fs::read_file(path)?;
            result = result.replace(&format!("[{}]", token), &content);
        }
    }

    Ok(result)
}
