use serde::{Deserialize, Serialize};

/// One creature in the collection. `quantity` is the only field that changes
/// after the entry is created.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Entry {
  pub id: u32,
  pub name: String,
  #[serde(default)]
  pub types: Vec<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub sprite: Option<String>,
  #[serde(default, alias = "quantidade")]
  pub quantity: u64,
}

impl Entry {
  pub fn key(&self) -> String {
    self.id.to_string()
  }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CollectionRow {
  pub id: u32,
  pub name: String,
  pub types: String,
  pub quantity: u64,
  pub has_sprite: bool,
}

impl From<&Entry> for CollectionRow {
  fn from(entry: &Entry) -> Self {
    CollectionRow {
      id: entry.id,
      name: entry.name.clone(),
      types: entry.types.join(", "),
      quantity: entry.quantity,
      has_sprite: entry.sprite.is_some(),
    }
  }
}

/// Uppercases the first character and lowercases the rest.
pub fn capitalize(name: &str) -> String {
  let mut chars = name.chars();
  match chars.next() {
    Some(first) => first
      .to_uppercase()
      .chain(chars.flat_map(char::to_lowercase))
      .collect(),
    None => String::new(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn capitalize_matches_catalog_display_names() {
    assert_eq!(capitalize("pikachu"), "Pikachu");
    assert_eq!(capitalize("mr-mime"), "Mr-mime");
    assert_eq!(capitalize("PORYGON"), "Porygon");
    assert_eq!(capitalize(""), "");
  }

  #[test]
  fn reads_legacy_field_names_and_null_sprite() {
    let raw = r#"{
      "id": 1,
      "name": "Bulbasaur",
      "types": ["grass", "poison"],
      "sprite": null,
      "quantidade": 4
    }"#;

    let entry: Entry = serde_json::from_str(raw).unwrap();
    assert_eq!(entry.quantity, 4);
    assert_eq!(entry.sprite, None);
    assert_eq!(entry.types, vec!["grass", "poison"]);
  }

  #[test]
  fn writes_quantity_and_omits_missing_sprite() {
    let entry = Entry {
      id: 133,
      name: "Eevee".to_string(),
      types: vec!["normal".to_string()],
      sprite: None,
      quantity: 2,
    };

    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["quantity"], 2);
    assert!(json.get("sprite").is_none());
    assert!(json.get("quantidade").is_none());
  }

  #[test]
  fn row_joins_types_with_commas() {
    let entry = Entry {
      id: 6,
      name: "Charizard".to_string(),
      types: vec!["fire".to_string(), "flying".to_string()],
      sprite: Some("https://example.test/6.png".to_string()),
      quantity: 1,
    };

    let row = CollectionRow::from(&entry);
    assert_eq!(row.types, "fire, flying");
    assert!(row.has_sprite);
  }
}
