//! Output path resolution.
//!
//! The `--output` target is either an exact file path or a directory. A
//! directory target (existing, or any path whose raw text ends with a
//! separator) triggers auto-naming: `{policy_id}_{prompt_type}.txt`, with
//! the identifier scanned from the bound input paths and `unknown` as the
//! fallback.

use crate::policy;
use crate::template::{PromptType, SlotBindings};
use std::path::{Path, PathBuf};

/// Resolve the final output file path.
pub fn resolve_output_path(
    output: &Path,
    prompt_type: PromptType,
    bindings: &SlotBindings,
) -> PathBuf {
    if !is_directory_target(output) {
        return output.to_path_buf();
    }

    let policy_id = bindings
        .bound_paths()
        .find_map(|path| policy::extract_policy_id(&path.to_string_lossy()).map(str::to_owned))
        .unwrap_or_else(|| "unknown".to_string());

    output.join(format!("{}_{}.txt", policy_id, prompt_type))
}

/// Whether the output target designates a directory rather than a file.
fn is_directory_target(output: &Path) -> bool {
    if output.is_dir() {
        return true;
    }

    // A not-yet-existing directory can still be requested with a trailing
    // separator.
    let raw = output.as_os_str().to_string_lossy();
    raw.ends_with('/') || raw.ends_with('\\')
}
