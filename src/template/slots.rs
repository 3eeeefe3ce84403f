//! Content slots and their path bindings.

use std::path::{Path, PathBuf};

/// A logical content role a template placeholder draws from.
///
/// Each slot may or may not have a file path bound for a given run; unbound
/// slots are skipped during substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    OriginalDocument,
    OriginalPatient,
    ExtractedDd,
    ExtractedPolicy,
    ExtractedPatient,
}

impl Slot {
    /// All slots, in declaration order. This is the scan order for policy
    /// identifier extraction during output auto-naming.
    pub const ALL: [Slot; 5] = [
        Slot::OriginalDocument,
        Slot::OriginalPatient,
        Slot::ExtractedDd,
        Slot::ExtractedPolicy,
        Slot::ExtractedPatient,
    ];
}

/// The file paths bound to content slots for a single run.
#[derive(Debug, Default, Clone)]
pub struct SlotBindings {
    pub original_document: Option<PathBuf>,
    pub original_patient: Option<PathBuf>,
    pub extracted_dd: Option<PathBuf>,
    pub extracted_policy: Option<PathBuf>,
    pub extracted_patient: Option<PathBuf>,
}

impl SlotBindings {
    /// The path bound to a slot, if any.
    pub fn get(&self, slot: Slot) -> Option<&Path> {
        match slot {
            Slot::OriginalDocument => self.original_document.as_deref(),
            Slot::OriginalPatient => self.original_patient.as_deref(),
            Slot::ExtractedDd => self.extracted_dd.as_deref(),
            Slot::ExtractedPolicy => self.extracted_policy.as_deref(),
            Slot::ExtractedPatient => self.extracted_patient.as_deref(),
        }
    }

    /// Bound paths in slot declaration order.
    pub fn bound_paths(&self) -> impl Iterator<Item = &Path> {
        Slot::ALL.iter().filter_map(|&slot| self.get(slot))
    }
}
