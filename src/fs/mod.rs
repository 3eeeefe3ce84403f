//! Filesystem helpers for promptgen.
//!
//! Inputs are prompt-sized text and JSON files, so reads load the whole file
//! into memory. Writes go through a temp-file-then-rename sequence so a
//! failed run never leaves a truncated output file behind.

use crate::error::{PromptGenError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Read a file's full content as UTF-8 text.
///
/// Fails with `MissingFile` if the path does not exist, and `Io` if the read
/// itself fails (permissions, invalid UTF-8).
pub fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(PromptGenError::MissingFile(path.to_path_buf()));
    }

    fs::read_to_string(path)
        .map_err(|e| PromptGenError::Io(format!("failed to read '{}': {}", path.display(), e)))
}

/// Write text to a file, creating missing parent directories.
///
/// The content is written to a `.{filename}.tmp` sibling first and then
/// renamed over the target, so the target is never observed half-written.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            PromptGenError::Io(format!(
                "failed to create output directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;

    let mut file = File::create(&temp_path).map_err(|e| {
        PromptGenError::Io(format!(
            "failed to create temporary file '{}': {}",
            temp_path.display(),
            e
        ))
    })?;
    if let Err(e) = file
        .write_all(content.as_bytes())
        .and_then(|_| file.sync_all())
    {
        let _ = fs::remove_file(&temp_path);
        return Err(PromptGenError::Io(format!(
            "failed to write '{}': {}",
            path.display(),
            e
        )));
    }
    drop(file);

    replace_file(&temp_path, path)
}

/// Temp file path in the same directory as the target.
fn temp_path_for(target: &Path) -> Result<std::path::PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            PromptGenError::Io(format!("invalid output path '{}'", target.display()))
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

#[cfg(unix)]
fn replace_file(source: &Path, target: &Path) -> Result<()> {
    // rename() replaces the destination atomically on the same filesystem
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        PromptGenError::Io(format!("failed to replace '{}': {}", target.display(), e))
    })
}

#[cfg(windows)]
fn replace_file(source: &Path, target: &Path) -> Result<()> {
    // Windows rename() refuses to clobber; remove the target first.
    if target.exists()
        && let Err(e) = fs::remove_file(target)
    {
        let _ = fs::remove_file(source);
        return Err(PromptGenError::Io(format!(
            "failed to replace '{}': {}",
            target.display(),
            e
        )));
    }
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        PromptGenError::Io(format!("failed to replace '{}': {}", target.display(), e))
    })
}
