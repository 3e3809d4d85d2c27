//! Study set discovery, selection and loading.

use crate::error::{CliError, Result};
use drill_core::{Interaction, WordSet};
use std::fs;
use std::path::{Path, PathBuf};

/// List the study set files of `dir`, sorted by file name.
pub fn list_sets(dir: &Path, extension: Option<&str>) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(CliError::SetsDirMissing(dir.to_path_buf()));
    }

    let mut sets = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let matches = match extension {
            Some(ext) => path
                .extension()
                .is_some_and(|e| e.to_string_lossy().eq_ignore_ascii_case(ext)),
            None => true,
        };
        if matches {
            sets.push(path);
        }
    }

    if sets.is_empty() {
        return Err(CliError::NoSets(dir.to_path_buf()));
    }

    sets.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    tracing::debug!(count = sets.len(), dir = %dir.display(), "found study sets");
    Ok(sets)
}

/// Offer the sets by index and return the chosen one.
///
/// Invalid choices are asked again.
pub fn select_set<'a, I: Interaction + ?Sized>(io: &mut I, sets: &'a [PathBuf]) -> Result<&'a Path> {
    let Some(last) = sets.len().checked_sub(1) else {
        return Err(CliError::NoSets(PathBuf::new()));
    };

    io.display("")?;
    io.display("Available study sets")?;
    for (index, path) in sets.iter().enumerate() {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        io.display(&format!("\t{index}. {name}"))?;
    }

    loop {
        let answer = io.prompt("Select study set:")?;
        match answer.trim().parse::<usize>() {
            Ok(index) if index < sets.len() => return Ok(&sets[index]),
            _ => io.display(&format!("Please enter a number between 0 and {last}"))?,
        }
    }
}

/// Read a set file and turn it into a validated word set.
pub fn load_set(path: &Path) -> Result<WordSet> {
    let bytes = fs::read(path)?;
    let content = String::from_utf8(bytes).map_err(|_| CliError::Encoding(path.to_path_buf()))?;
    let words = drill_core::load(&content)?;
    tracing::info!(path = %path.display(), words = words.len(), "loaded study set");
    Ok(words)
}
