pub mod catalog;
pub mod config;
pub mod entry;
pub mod error;
pub mod pokedex;
pub mod store;
pub mod thumbnail;

#[cfg(feature = "desktop")]
mod desktop;

pub use catalog::{CatalogClient, LookupKey, PokeApiClient};
pub use config::PokedexConfig;
pub use entry::{CollectionRow, Entry};
pub use error::PokedexError;
pub use pokedex::{Pokedex, QuantityChange};
pub use store::CollectionStore;
pub use thumbnail::Thumbnail;

#[cfg(feature = "desktop")]
pub use desktop::run;
