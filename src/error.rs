use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PokedexError {
  #[error("Pokémon not found! Check the id or name you entered.")]
  NotFound,

  #[error("{0}")]
  InvalidInput(String),

  #[error("{0} is already in the collection.")]
  DuplicateEntry(String),

  #[error("Failed to load the Pokémon sprite: {0}")]
  ImageFetch(String),

  #[error("Collection file {} is corrupt: {reason}", path.display())]
  CorruptCollection { path: PathBuf, reason: String },

  #[error("Cannot access collection file {}: {source}", path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error(transparent)]
  Serialize(#[from] serde_json::Error),

  #[error("{0}")]
  Internal(String),
}

impl PokedexError {
  pub fn kind(&self) -> &'static str {
    match self {
      PokedexError::NotFound => "notFound",
      PokedexError::InvalidInput(_) => "invalidInput",
      PokedexError::DuplicateEntry(_) => "duplicate",
      PokedexError::ImageFetch(_) => "imageFetch",
      PokedexError::CorruptCollection { .. } => "corruptCollection",
      PokedexError::Io { .. } => "io",
      PokedexError::Serialize(_) => "serialize",
      PokedexError::Internal(_) => "internal",
    }
  }
}

// Tauri hands command errors to the front end as JSON.
impl Serialize for PokedexError {
  fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    let mut state = serializer.serialize_struct("PokedexError", 2)?;
    state.serialize_field("kind", self.kind())?;
    state.serialize_field("message", &self.to_string())?;
    state.end()
  }
}

pub type Result<T> = std::result::Result<T, PokedexError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn serializes_as_kind_and_message() {
    let error = PokedexError::DuplicateEntry("Pikachu".to_string());
    let json = serde_json::to_value(&error).unwrap();

    assert_eq!(json["kind"], "duplicate");
    assert_eq!(json["message"], "Pikachu is already in the collection.");
  }

  #[test]
  fn corrupt_collection_names_the_path() {
    let error = PokedexError::CorruptCollection {
      path: PathBuf::from("/tmp/pokemon_collection.json"),
      reason: "expected value at line 1 column 1".to_string(),
    };

    let message = error.to_string();
    assert!(message.contains("/tmp/pokemon_collection.json"));
    assert!(message.contains("expected value"));
  }
}
