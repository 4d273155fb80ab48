//! Per-language snippet files (`<language>.json`) holding many snippets.
//!
//! Entries are kept as raw JSON so that snippets written by hand or by other
//! tools (a single-string `body`, an array `prefix`, `scope`,
//! `isFileTemplate`, ...) survive a read-modify-write untouched.

use crate::error::{Result, SnipgenError};
use crate::snippet::{to_pretty_json, SnippetRecord};
use indexmap::IndexMap;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

pub const SNIPPET_FILE_EXTENSION: &str = "json";

/// Snippets for one language, in the order they were first added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetFile {
    language: String,
    snippets: IndexMap<String, Value>,
}

/// File name for a language's snippet file, e.g. `"SQF"` becomes `"sqf.json"`.
pub fn file_name(language: &str) -> Result<String> {
    let language = language.trim();
    if language.is_empty() {
        return Err(SnipgenError::InvalidArgument(
            "language must not be empty".to_string(),
        ));
    }

    let stem: String = language
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '_' | '-' => c,
            _ => '_',
        })
        .collect();

    Ok(format!("{}.{}", stem, SNIPPET_FILE_EXTENSION))
}

impl SnippetFile {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            snippets: IndexMap::new(),
        }
    }

    /// Load the snippet file for `language` from `dir`.
    ///
    /// A missing or blank file gives an empty collection.
    pub fn load(dir: &Path, language: &str) -> Result<Self> {
        let path = dir.join(file_name(language)?);
        let mut file = Self::new(language);

        if !path.exists() {
            log::debug!("No snippet file at {}, starting empty", path.display());
            return Ok(file);
        }

        let content = fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            return Ok(file);
        }

        file.snippets = serde_json::from_str(&content)?;
        log::debug!(
            "Loaded {} snippet(s) from {}",
            file.snippets.len(),
            path.display()
        );
        Ok(file)
    }

    /// Write the file into `dir`, creating the directory if needed.
    pub fn save(&self, dir: &Path) -> Result<PathBuf> {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }

        let path = self.path_in(dir)?;
        fs::write(&path, self.to_json()?)?;
        log::debug!(
            "Saved {} snippet(s) to {}",
            self.snippets.len(),
            path.display()
        );
        Ok(path)
    }

    pub fn path_in(&self, dir: &Path) -> Result<PathBuf> {
        Ok(dir.join(file_name(&self.language)?))
    }

    /// Add `record`, replacing any snippet with the same name in place.
    ///
    /// When the existing snippet is an object, only its `prefix`,
    /// `description` and `body` are overwritten; other fields are kept.
    /// Returns `true` when an existing snippet was replaced.
    pub fn insert(&mut self, record: &SnippetRecord) -> Result<bool> {
        if !record.language().eq_ignore_ascii_case(&self.language) {
            return Err(SnipgenError::InvalidArgument(format!(
                "snippet '{}' is for language '{}', not '{}'",
                record.name(),
                record.language(),
                self.language
            )));
        }

        let body = serde_json::to_value(record.body())?;
        let Some(existing) = self.snippets.get_mut(record.name()) else {
            self.snippets.insert(record.name().to_string(), body);
            return Ok(false);
        };

        match (existing, body) {
            (Value::Object(existing), Value::Object(fields)) => existing.extend(fields),
            (existing, body) => *existing = body,
        }
        Ok(true)
    }

    /// Remove a snippet by name, returning whether it existed.
    pub fn remove(&mut self, name: &str) -> bool {
        self.snippets.shift_remove(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.snippets.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.snippets.keys().map(String::as_str)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        to_pretty_json(&self.snippets)
    }
}
