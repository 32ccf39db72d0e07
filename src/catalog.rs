use crate::config::PokedexConfig;
use crate::entry::{capitalize, Entry};
use crate::error::{PokedexError, Result};
use log::warn;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::Url;
use serde::Deserialize;
use std::fmt;

const CLIENT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// How an identifier typed by the user is sent to the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LookupKey {
  Id(u32),
  Name(String),
}

impl LookupKey {
  pub fn parse(identifier: &str) -> Result<LookupKey> {
    let trimmed = identifier.trim();
    if trimmed.is_empty() {
      return Err(PokedexError::InvalidInput(
        "Please enter a valid id or name.".to_string(),
      ));
    }

    if trimmed.chars().all(|c| c.is_ascii_digit()) {
      // Too large for any catalog id.
      return trimmed
        .parse::<u32>()
        .map(LookupKey::Id)
        .map_err(|_| PokedexError::NotFound);
    }

    Ok(LookupKey::Name(trimmed.to_lowercase()))
  }
}

impl fmt::Display for LookupKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      LookupKey::Id(id) => write!(f, "{}", id),
      LookupKey::Name(name) => f.write_str(name),
    }
  }
}

/// The remote reference service entries are looked up in.
pub trait CatalogClient: Send + Sync {
  fn lookup(&self, key: &LookupKey) -> Result<Entry>;

  fn fetch_sprite(&self, url: &str) -> Result<Vec<u8>>;
}

#[derive(Deserialize)]
struct PokemonPayload {
  id: u32,
  name: String,
  #[serde(default)]
  types: Vec<PokemonTypeSlot>,
  #[serde(default)]
  sprites: Option<SpritesPayload>,
}

#[derive(Deserialize)]
struct PokemonTypeSlot {
  #[serde(rename = "type")]
  kind: NamedResource,
}

#[derive(Deserialize)]
struct NamedResource {
  name: String,
}

#[derive(Deserialize)]
struct SpritesPayload {
  front_default: Option<String>,
}

pub fn parse_pokemon(body: &str) -> Result<Entry> {
  let payload: PokemonPayload = serde_json::from_str(body).map_err(|e| {
    warn!("Unreadable catalog response: {}", e);
    PokedexError::NotFound
  })?;

  Ok(Entry {
    id: payload.id,
    name: capitalize(&payload.name),
    types: payload.types.into_iter().map(|slot| slot.kind.name).collect(),
    sprite: payload
      .sprites
      .and_then(|sprites| sprites.front_default)
      .filter(|url| !url.trim().is_empty()),
    quantity: 0,
  })
}

pub struct PokeApiClient {
  client: Client,
  base_url: Url,
}

impl PokeApiClient {
  pub fn new(config: &PokedexConfig) -> Result<Self> {
    let base_url = Url::parse(&config.catalog_base_url).map_err(|e| {
      PokedexError::Internal(format!(
        "Invalid catalog url '{}': {}",
        config.catalog_base_url, e
      ))
    })?;

    let client = Client::builder()
      .timeout(config.request_timeout)
      .build()
      .map_err(|e| PokedexError::Internal(e.to_string()))?;

    Ok(PokeApiClient { client, base_url })
  }

  pub fn pokemon_url(&self, key: &LookupKey) -> Result<Url> {
    let mut url = self.base_url.clone();
    url
      .path_segments_mut()
      .map_err(|_| {
        PokedexError::Internal(format!("Catalog url {} cannot take a path", self.base_url))
      })?
      .pop_if_empty()
      .push("pokemon")
      .push(&key.to_string());
    Ok(url)
  }
}

impl CatalogClient for PokeApiClient {
  fn lookup(&self, key: &LookupKey) -> Result<Entry> {
    let url = self.pokemon_url(key)?;

    let response = self
      .client
      .get(url)
      .header(USER_AGENT, CLIENT_USER_AGENT)
      .header(ACCEPT, "application/json")
      .send()
      .map_err(|e| {
        warn!("Catalog lookup for '{}' failed: {}", key, e);
        PokedexError::NotFound
      })?;

    if !response.status().is_success() {
      warn!(
        "Catalog lookup for '{}' failed with status {}",
        key,
        response.status()
      );
      return Err(PokedexError::NotFound);
    }

    let body = response.text().map_err(|e| {
      warn!("Catalog lookup for '{}' returned no body: {}", key, e);
      PokedexError::NotFound
    })?;

    parse_pokemon(&body)
  }

  fn fetch_sprite(&self, url: &str) -> Result<Vec<u8>> {
    let response = self
      .client
      .get(url)
      .header(USER_AGENT, CLIENT_USER_AGENT)
      .send()
      .map_err(|e| PokedexError::ImageFetch(e.to_string()))?;

    if !response.status().is_success() {
      return Err(PokedexError::ImageFetch(format!(
        "request failed with status {}",
        response.status()
      )));
    }

    let bytes = response
      .bytes()
      .map_err(|e| PokedexError::ImageFetch(e.to_string()))?;
    Ok(bytes.to_vec())
  }
}
