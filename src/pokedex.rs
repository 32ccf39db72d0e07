use crate::catalog::{CatalogClient, LookupKey, PokeApiClient};
use crate::config::PokedexConfig;
use crate::entry::{CollectionRow, Entry};
use crate::error::{PokedexError, Result};
use crate::store::CollectionStore;
use crate::thumbnail::{self, Thumbnail};
use log::info;
use serde::Serialize;

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuantityChange {
  pub id: u32,
  pub name: String,
  pub quantity: u64,
}

/// Owns the collection and the catalog it is filled from. Every user action
/// goes through here, so input checks live in one place.
pub struct Pokedex {
  store: CollectionStore,
  catalog: Box<dyn CatalogClient>,
  thumbnail_size: u32,
}

impl Pokedex {
  pub fn new(store: CollectionStore, catalog: Box<dyn CatalogClient>, thumbnail_size: u32) -> Self {
    Pokedex {
      store,
      catalog,
      thumbnail_size,
    }
  }

  /// Loads the collection file and connects to the public catalog.
  pub fn open(config: &PokedexConfig) -> Result<Self> {
    let store = CollectionStore::load(&config.data_file)?;
    let catalog = PokeApiClient::new(config)?;
    Ok(Pokedex::new(store, Box::new(catalog), config.thumbnail_size))
  }

  pub fn store(&self) -> &CollectionStore {
    &self.store
  }

  pub fn rows(&self) -> Vec<CollectionRow> {
    self.store.rows()
  }

  pub fn add(&mut self, identifier: &str) -> Result<Entry> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
      return Err(PokedexError::InvalidInput(
        "Please enter a valid id or name.".to_string(),
      ));
    }

    if let Some(existing) = self.store.find(identifier) {
      return Err(PokedexError::DuplicateEntry(existing.name.clone()));
    }

    let key = LookupKey::parse(identifier)?;
    let entry = self.catalog.lookup(&key)?;

    // A name lookup can resolve to an id that is already stored.
    if !self.store.insert(entry.clone())? {
      return Err(PokedexError::DuplicateEntry(entry.name));
    }

    info!("Added {} (#{}) to the collection", entry.name, entry.id);
    Ok(entry)
  }

  pub fn adjust(&mut self, selected: Option<u32>, delta: &str) -> Result<QuantityChange> {
    let id = selected.ok_or_else(|| {
      PokedexError::InvalidInput("Please select a Pokémon in the table.".to_string())
    })?;

    let delta: i64 = delta.trim().parse().map_err(|_| {
      PokedexError::InvalidInput("Please enter a valid number for the quantity.".to_string())
    })?;

    let quantity = self.store.adjust_quantity(id, delta)?;
    let name = self
      .store
      .get(id)
      .map(|entry| entry.name.clone())
      .unwrap_or_default();

    info!("Quantity of {} (#{}) is now {}", name, id, quantity);
    Ok(QuantityChange { id, name, quantity })
  }

  /// Thumbnail for the selected row. Nothing selected, or an entry without a
  /// sprite, clears the preview.
  pub fn sprite(&self, selected: Option<u32>) -> Result<Option<Thumbnail>> {
    let Some(id) = selected else {
      return Ok(None);
    };
    let entry = self.store.get(id).ok_or(PokedexError::NotFound)?;
    let Some(url) = entry.sprite.as_deref() else {
      return Ok(None);
    };

    let bytes = self.catalog.fetch_sprite(url)?;
    thumbnail::render(&bytes, self.thumbnail_size).map(Some)
  }
}
