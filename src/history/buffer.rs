use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use globset::Glob;
use walkdir::WalkDir;

use crate::error::{AptLogError, Result};
use crate::tagfile::TagFile;

use super::Entry;
use super::parse::SectionParser;

/// Time-ordered collection of all parsed entries across one or more log
/// files. Built once per load and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryBuffer {
    entries: Vec<Entry>,
}

impl HistoryBuffer {
    /// Parse the given log files into a buffer sorted ascending by start
    /// date.
    ///
    /// # Errors
    /// Fails if any file cannot be opened or fully parsed; no partial
    /// buffer is returned.
    pub fn load(files: &[PathBuf]) -> Result<Self> {
        let parser = SectionParser::new();
        let mut entries = Vec::new();

        for path in files {
            parse_file(path, &parser, &mut entries)?;
        }

        // Dates are fixed-width, so lexicographic order is chronological.
        // The sort is stable: same-second transactions keep file order.
        entries.sort_by(|a, b| a.start_date.cmp(&b.start_date));

        Ok(Self { entries })
    }

    /// Build a buffer from already-parsed entries, preserving the sort
    /// invariant.
    #[must_use]
    pub fn from_entries(mut entries: Vec<Entry>) -> Self {
        entries.sort_by(|a, b| a.start_date.cmp(&b.start_date));
        Self { entries }
    }

    /// Discover log files matching `<log_path>*` and load them.
    ///
    /// # Errors
    /// Fails if no log file matches the pattern, or if any matched file
    /// cannot be opened or parsed.
    pub fn load_dir(log_path: &Path) -> Result<Self> {
        let files = find_log_files(log_path)?;
        Self::load(&files)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: usize) -> Option<&Entry> {
        self.entries.get(id)
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

fn parse_file(path: &Path, parser: &SectionParser, entries: &mut Vec<Entry>) -> Result<()> {
    let file = File::open(path).map_err(|source| AptLogError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut tagfile = TagFile::new(BufReader::new(file));
    loop {
        match tagfile.next_section() {
            Ok(Some(section)) => entries.push(parser.parse_section(&section)),
            Ok(None) => break,
            Err(source) => {
                return Err(AptLogError::FileParse {
                    path: path.to_path_buf(),
                    reason: source.to_string(),
                });
            }
        }
    }

    Ok(())
}

/// All files in the log path's directory whose name starts with the log
/// path's file name, sorted for deterministic same-second ordering.
fn find_log_files(log_path: &Path) -> Result<Vec<PathBuf>> {
    let dir = log_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            AptLogError::Config(format!("Invalid history log path: {}", log_path.display()))
        })?;

    let pattern = format!("{name}*");
    let matcher = Glob::new(&pattern)
        .map_err(|source| AptLogError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?
        .compile_matcher();

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.file_name().to_str().is_some_and(|n| matcher.is_match(n)))
        .map(walkdir::DirEntry::into_path)
        .collect();

    if files.is_empty() {
        return Err(AptLogError::Config(format!(
            "No history log files matching {} in {}",
            pattern,
            dir.display()
        )));
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod tests;
