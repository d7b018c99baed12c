// SPDX-FileCopyrightText: 2026 postcal contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fs, io, path::PathBuf};

use crate::entry::ContentEntry;

/// The entry collection plus its on-disk JSON snapshot.
///
/// The in-memory list is the source of truth during a session. Every
/// [`ContentStore::save`] overwrites the whole snapshot file; there is no
/// partial update and no cross-process coordination, so two instances
/// sharing one snapshot race last-writer-wins.
#[derive(Debug)]
pub struct ContentStore {
    path: PathBuf,
    entries: Vec<ContentEntry>,
}

impl ContentStore {
    /// Loads the snapshot at `path`.
    ///
    /// A missing file yields an empty collection. A snapshot that fails to
    /// parse also yields an empty collection, with a warning, rather than
    /// taking the whole application down.
    pub fn load(path: PathBuf) -> Result<Self, Box<dyn Error>> {
        let entries = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<Vec<ContentEntry>>(&content) {
                Ok(entries) => {
                    tracing::debug!(path = %path.display(), count = entries.len(), "loaded snapshot");
                    entries
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), "failed to parse snapshot, starting empty: {e}");
                    Vec::new()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, entries })
    }

    /// An empty store that will snapshot to `path`. For tests and first runs.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            entries: Vec::new(),
        }
    }

    /// Serializes the whole collection and overwrites the snapshot file.
    pub fn save(&self) -> Result<(), Box<dyn Error>> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string(&self.entries)?;
        fs::write(&self.path, content)?;
        tracing::debug!(path = %self.path.display(), count = self.entries.len(), "saved snapshot");
        Ok(())
    }

    /// Appends a new entry. Does not save.
    pub fn add(&mut self, entry: ContentEntry) {
        self.entries.push(entry);
    }

    /// Replaces the entry with the given id in place, keeping its position.
    /// Returns false if no entry has that id. Does not save.
    pub fn update(&mut self, id: &str, entry: ContentEntry) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(slot) => {
                *slot = entry;
                true
            }
            None => false,
        }
    }

    /// Removes the entry with the given id, if present. Does not save.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() < before
    }

    /// The entry with the given id, if it still exists.
    pub fn find(&self, id: &str) -> Option<&ContentEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// All entries, in insertion order.
    pub fn entries(&self) -> &[ContentEntry] {
        &self.entries
    }

    /// Entries scheduled on the given date-key, in insertion order.
    /// Date-keys are compared as opaque text, no timezone normalization.
    pub fn entries_on<'a>(&'a self, date_key: &'a str) -> impl Iterator<Item = &'a ContentEntry> {
        self.entries.iter().filter(move |e| e.date == date_key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
