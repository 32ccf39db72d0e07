use crate::catalog::LookupKey;
use crate::entry::{CollectionRow, Entry};
use crate::error::{PokedexError, Result};
use indexmap::IndexMap;
use log::info;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::PathBuf;

/// The collection held in memory and mirrored to one JSON file. Every
/// mutation is followed by a full save.
pub struct CollectionStore {
  path: PathBuf,
  entries: IndexMap<String, Entry>,
}

impl CollectionStore {
  pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
    let path = path.into();
    if !path.exists() {
      info!("No collection at {}, starting empty", path.display());
      return Ok(CollectionStore {
        path,
        entries: IndexMap::new(),
      });
    }

    let data = fs::read_to_string(&path).map_err(|source| PokedexError::Io {
      path: path.clone(),
      source,
    })?;

    let entries: IndexMap<String, Entry> =
      serde_json::from_str(&data).map_err(|e| PokedexError::CorruptCollection {
        path: path.clone(),
        reason: e.to_string(),
      })?;

    if let Some((key, entry)) = entries
      .iter()
      .find(|(key, entry)| entry.id == 0 || **key != entry.key())
    {
      return Err(PokedexError::CorruptCollection {
        path,
        reason: format!("key '{}' holds entry with id {}", key, entry.id),
      });
    }

    info!("Loaded {} entries from {}", entries.len(), path.display());
    Ok(CollectionStore { path, entries })
  }

  pub fn save(&self) -> Result<()> {
    if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
      fs::create_dir_all(parent).map_err(|source| PokedexError::Io {
        path: parent.to_path_buf(),
        source,
      })?;
    }

    let mut buffer = Vec::new();
    let mut serializer =
      serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
    self.entries.serialize(&mut serializer)?;

    fs::write(&self.path, buffer).map_err(|source| PokedexError::Io {
      path: self.path.clone(),
      source,
    })?;
    info!("Saved {} entries to {}", self.entries.len(), self.path.display());
    Ok(())
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn get(&self, id: u32) -> Option<&Entry> {
    self.entries.get(&id.to_string())
  }

  /// Resolves an identifier typed by the user against the stored keys: the
  /// exact text, its lowercase form, then its normalized numeric id.
  pub fn find(&self, identifier: &str) -> Option<&Entry> {
    let trimmed = identifier.trim();
    self
      .entries
      .get(trimmed)
      .or_else(|| self.entries.get(&trimmed.to_lowercase()))
      .or_else(|| match LookupKey::parse(trimmed) {
        Ok(LookupKey::Id(id)) => self.get(id),
        _ => None,
      })
  }

  pub fn contains(&self, identifier: &str) -> bool {
    self.find(identifier).is_some()
  }

  /// Returns `false` without touching memory or disk when the id is taken.
  pub fn insert(&mut self, entry: Entry) -> Result<bool> {
    let key = entry.key();
    if self.entries.contains_key(&key) {
      return Ok(false);
    }

    self.entries.insert(key.clone(), entry);
    if let Err(e) = self.save() {
      self.entries.shift_remove(&key);
      return Err(e);
    }
    Ok(true)
  }

  /// Applies `delta` clamped at zero, persists, and returns the new quantity.
  pub fn adjust_quantity(&mut self, id: u32, delta: i64) -> Result<u64> {
    let entry = self
      .entries
      .get_mut(&id.to_string())
      .ok_or(PokedexError::NotFound)?;

    let previous = entry.quantity;
    let next = if delta >= 0 {
      previous.saturating_add(delta.unsigned_abs())
    } else {
      previous.saturating_sub(delta.unsigned_abs())
    };
    entry.quantity = next;

    if let Err(e) = self.save() {
      if let Some(entry) = self.entries.get_mut(&id.to_string()) {
        entry.quantity = previous;
      }
      return Err(e);
    }
    Ok(next)
  }

  /// Table rows in ascending id order.
  pub fn rows(&self) -> Vec<CollectionRow> {
    let mut rows: Vec<CollectionRow> = self.entries.values().map(CollectionRow::from).collect();
    rows.sort_by_key(|row| row.id);
    rows
  }
}
