use crate::config::PokedexConfig;
use crate::entry::{CollectionRow, Entry};
use crate::error::PokedexError;
use crate::pokedex::{Pokedex, QuantityChange};
use crate::thumbnail::Thumbnail;
use log::error;
use serde::Serialize;
use std::sync::{Mutex, MutexGuard};
use tauri::{Manager, State};

struct AppState {
  pokedex: Mutex<Pokedex>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddEntryDto {
  entry: Entry,
  rows: Vec<CollectionRow>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AdjustQuantityDto {
  change: QuantityChange,
  rows: Vec<CollectionRow>,
}

fn lock_pokedex<'a>(
  state: &'a State<'_, AppState>,
) -> Result<MutexGuard<'a, Pokedex>, PokedexError> {
  state
    .pokedex
    .lock()
    .map_err(|_| PokedexError::Internal("Collection state is unavailable.".to_string()))
}

#[tauri::command]
fn get_collection(state: State<'_, AppState>) -> Result<Vec<CollectionRow>, PokedexError> {
  let pokedex = lock_pokedex(&state)?;
  Ok(pokedex.rows())
}

#[tauri::command]
fn add_entry(state: State<'_, AppState>, identifier: String) -> Result<AddEntryDto, PokedexError> {
  let mut pokedex = lock_pokedex(&state)?;
  let entry = pokedex.add(&identifier)?;
  Ok(AddEntryDto {
    entry,
    rows: pokedex.rows(),
  })
}

#[tauri::command]
fn adjust_quantity(
  state: State<'_, AppState>,
  id: Option<u32>,
  delta: String,
) -> Result<AdjustQuantityDto, PokedexError> {
  let mut pokedex = lock_pokedex(&state)?;
  let change = pokedex.adjust(id, &delta)?;
  Ok(AdjustQuantityDto {
    change,
    rows: pokedex.rows(),
  })
}

#[tauri::command]
fn get_sprite(
  state: State<'_, AppState>,
  id: Option<u32>,
) -> Result<Option<Thumbnail>, PokedexError> {
  let pokedex = lock_pokedex(&state)?;
  pokedex.sprite(id)
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
  tauri::Builder::default()
    .setup(|app| {
      if cfg!(debug_assertions) {
        app.handle().plugin(
          tauri_plugin_log::Builder::default()
            .level(log::LevelFilter::Info)
            .build(),
        )?;
      }

      let app_data_dir = app.path().app_data_dir()?;
      let config = PokedexConfig::in_dir(&app_data_dir);
      let pokedex = Pokedex::open(&config).inspect_err(|e| {
        error!("Cannot open the collection: {}", e);
      })?;
      app.manage(AppState {
        pokedex: Mutex::new(pokedex),
      });
      Ok(())
    })
    .invoke_handler(tauri::generate_handler![
      get_collection,
      add_entry,
      adjust_quantity,
      get_sprite
    ])
    .run(tauri::generate_context!())
    .expect("error while running tauri application");
}
