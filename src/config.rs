use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CATALOG_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const COLLECTION_FILE: &str = "pokemon_collection.json";
pub const REQUEST_TIMEOUT_SECONDS: u64 = 5;
pub const THUMBNAIL_SIZE: u32 = 100;

#[derive(Clone, Debug)]
pub struct PokedexConfig {
  pub data_file: PathBuf,
  pub catalog_base_url: String,
  pub request_timeout: Duration,
  pub thumbnail_size: u32,
}

impl PokedexConfig {
  /// Keeps the collection file inside `dir`.
  pub fn in_dir(dir: impl AsRef<Path>) -> Self {
    PokedexConfig {
      data_file: dir.as_ref().join(COLLECTION_FILE),
      ..PokedexConfig::default()
    }
  }
}

impl Default for PokedexConfig {
  fn default() -> Self {
    PokedexConfig {
      data_file: PathBuf::from(COLLECTION_FILE),
      catalog_base_url: CATALOG_BASE_URL.to_string(),
      request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECONDS),
      thumbnail_size: THUMBNAIL_SIZE,
    }
  }
}
