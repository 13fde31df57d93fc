//! Desktop entry reading and scoring.
//!
//! Only `Exec=`, `StartupWMClass=` and `Icon=` are looked at, and only by
//! substring/prefix match. Anything fancier belongs to a real parser.

use crate::error::EntryError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Stem fragments marking helper launchers rather than the app itself.
const AUXILIARY_MARKERS: [&str; 4] = ["url-handler", "handler", "wayland", "wrapper"];

const WM_CLASS_SCORE: u32 = 3;
const EXEC_SCORE: u32 = 2;
const STEM_SCORE: u32 = 4;

/// A desktop file that matched a search term.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DesktopEntryCandidate {
    pub path: PathBuf,
    /// False for url-handlers, wrappers and similar helper entries.
    pub is_main: bool,
    pub score: u32,
}

/// What the taskbar keeps about a resolved app.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInfo {
    /// Icon name or path from the entry's `Icon=` line. Empty if none.
    pub icon: String,
}

/// Lowercased file name without extension.
pub(crate) fn stem_lower(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase())
}

/// Whether an entry is the app's primary launcher.
pub fn is_main_entry(path: &Path) -> bool {
    match stem_lower(path) {
        Some(stem) => !AUXILIARY_MARKERS.iter().any(|m| stem.contains(m)),
        None => true,
    }
}

/// Read a desktop file as UTF-8.
pub(crate) fn read_entry(path: &Path) -> Result<String, EntryError> {
    let bytes = fs::read(path).map_err(|source| EntryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    String::from_utf8(bytes).map_err(|_| EntryError::Decode {
        path: path.to_path_buf(),
    })
}

/// Score a desktop file against a search term.
///
/// Returns `None` when the file is not a candidate at all. A bare stem
/// substring hit is a candidate with score 0.
pub(crate) fn score_entry(path: &Path, content: &str, term: &str) -> Option<DesktopEntryCandidate> {
    let stem = stem_lower(path).unwrap_or_default();
    let term_lower = term.to_lowercase();

    let has_wm_class = content.contains(&format!("StartupWMClass={term}"));
    let has_exec = content.contains(&format!("Exec={term}"));
    let stem_exact = stem == term_lower;

    if !has_wm_class && !has_exec && !stem.contains(&term_lower) {
        return None;
    }

    let mut score = 0;
    if has_wm_class {
        score += WM_CLASS_SCORE;
    }
    if has_exec {
        score += EXEC_SCORE;
    }
    if stem_exact {
        score += STEM_SCORE;
    }

    Some(DesktopEntryCandidate {
        path: path.to_path_buf(),
        is_main: is_main_entry(path),
        score,
    })
}

/// Value of the first `Icon=` line, or an empty string.
pub fn read_icon(path: &Path) -> String {
    let file = match fs::File::open(path) {
        Ok(f) => f,
        Err(_) => return String::new(),
    };

    for line in BufReader::new(file).lines() {
        let Ok(line) = line else {
            return String::new();
        };
        if let Some(value) = line.strip_prefix("Icon=") {
            return value.trim().to_string();
        }
    }

    String::new()
}
