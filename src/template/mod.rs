// r2-meson: radare2 Meson Build Front End
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path template resolution.
//!
//! ```text
//! TemplateRegistry { NAME -> fragment }
//!   "R2_DATDIR"  -> "share"
//!   "R2_WWWROOT" -> "{R2_DATDIR}/www"
//!
//! substitute()  one left-to-right pass, KeyNotFound on unknown names
//! resolve()     repeat substitute() until no placeholder is left,
//!               CyclicTemplate when an expansion revisits itself
//!
//! "{DIST}/{R2_WWWROOT}" --> "C:/r2/{R2_DATDIR}/www" --> "C:/r2/share/www"
//! ```
//!
//! Resolution is pure: it never touches the filesystem.

use std::collections::BTreeMap;
use std::ops::Range;
use std::path::PathBuf;

use crate::error::TemplateError;

/// Named path fragments used to expand `{NAME}` placeholders.
///
/// Built once during argument processing and passed by reference to every
/// component that resolves destination paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateRegistry {
    entries: BTreeMap<String, String>,
}

impl TemplateRegistry {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Registers (or replaces) a fragment.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Merges every entry of `other`, replacing existing keys.
    pub fn extend<I, K, V>(&mut self, entries: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in entries {
            self.insert(key, value);
        }
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Performs one left-to-right substitution pass.
    ///
    /// Values inserted by this pass are not scanned again, so a fragment
    /// that itself contains placeholders needs another pass.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::KeyNotFound`] for the first unknown name.
    pub fn substitute(&self, input: &str) -> Result<String, TemplateError> {
        let mut output = String::with_capacity(input.len());
        let mut last = 0;

        for (span, name) in placeholders(input) {
            let value = self.get(name).ok_or_else(|| TemplateError::KeyNotFound {
                key: name.to_string(),
            })?;
            output.push_str(&input[last..span.start]);
            output.push_str(value);
            last = span.end;
        }

        output.push_str(&input[last..]);
        Ok(output)
    }

    /// Expands placeholders until none remain.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::KeyNotFound`] for unknown names and
    /// [`TemplateError::CyclicTemplate`] when a fragment expands back into a
    /// placeholder already being expanded.
    pub fn resolve(&self, input: &str) -> Result<String, TemplateError> {
        // A cycle is found by walking the dependency graph, not by counting
        // passes, so deep but finite nesting always resolves. Substitution can
        // join literal braces into new placeholders, so every pass is checked.
        let mut current = input.to_string();
        loop {
            let names: Vec<&str> = placeholder_names(&current).collect();
            if names.is_empty() {
                return Ok(current);
            }
            for name in &names {
                self.check_acyclic(name, &mut Vec::new())?;
            }

            let next = self.substitute(&current)?;
            if next == current {
                return Err(TemplateError::CyclicTemplate {
                    chain: names.iter().map(ToString::to_string).collect(),
                });
            }
            current = next;
        }
    }

    /// Resolves a template straight into a path.
    ///
    /// # Errors
    ///
    /// See [`TemplateRegistry::resolve`].
    pub fn resolve_path(&self, input: &str) -> Result<PathBuf, TemplateError> {
        self.resolve(input).map(PathBuf::from)
    }

    fn check_acyclic(&self, name: &str, chain: &mut Vec<String>) -> Result<(), TemplateError> {
        if chain.iter().any(|seen| seen == name) {
            chain.push(name.to_string());
            return Err(TemplateError::CyclicTemplate {
                chain: chain.clone(),
            });
        }

        let value = self.get(name).ok_or_else(|| TemplateError::KeyNotFound {
            key: name.to_string(),
        })?;

        chain.push(name.to_string());
        for nested in placeholder_names(value) {
            self.check_acyclic(nested, chain)?;
        }
        chain.pop();
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TemplateRegistry {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}

/// Returns whether `input` still contains a `{NAME}` placeholder.
#[must_use]
pub fn has_placeholder(input: &str) -> bool {
    placeholders(input).next().is_some()
}

fn placeholder_names(input: &str) -> impl Iterator<Item = &str> {
    placeholders(input).map(|(_, name)| name)
}

/// Yields every `{NAME}` span with its name, left to right.
///
/// A name starts with an ASCII letter or `_` and continues with ASCII
/// alphanumerics or `_`; anything else between braces is literal text.
fn placeholders(input: &str) -> impl Iterator<Item = (Range<usize>, &str)> {
    let bytes = input.as_bytes();
    let mut pos = 0;

    std::iter::from_fn(move || {
        while let Some(offset) = input[pos..].find('{') {
            let open = pos + offset;
            let start = open + 1;
            let len = bytes[start..]
                .iter()
                .take_while(|b| b.is_ascii_alphanumeric() || **b == b'_')
                .count();
            let end = start + len;
            pos = start;

            let valid_head = len > 0 && !bytes[start].is_ascii_digit();
            if valid_head && bytes.get(end) == Some(&b'}') {
                pos = end + 1;
                return Some((open..end + 1, &input[start..end]));
            }
        }
        pos = input.len();
        None
    })
}

#[cfg(test)]
mod tests;
