use crate::error::{PokedexError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::imageops::FilterType;
use image::{GenericImageView, ImageFormat};
use serde::Serialize;
use std::io::Cursor;

#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Thumbnail {
  pub width: u32,
  pub height: u32,
  pub data_url: String,
}

/// Decodes sprite bytes and scales them to a `size` x `size` PNG.
pub fn render(bytes: &[u8], size: u32) -> Result<Thumbnail> {
  let source = image::load_from_memory(bytes)
    .map_err(|e| PokedexError::ImageFetch(format!("failed to decode image: {}", e)))?;

  let bounded = size.max(1);
  let resized = source.resize_exact(bounded, bounded, FilterType::Lanczos3);
  let (width, height) = resized.dimensions();

  let mut encoded = Cursor::new(Vec::new());
  resized
    .write_to(&mut encoded, ImageFormat::Png)
    .map_err(|e| PokedexError::ImageFetch(format!("failed to encode thumbnail: {}", e)))?;

  Ok(Thumbnail {
    width,
    height,
    data_url: format!(
      "data:image/png;base64,{}",
      STANDARD.encode(encoded.into_inner())
    ),
  })
}
