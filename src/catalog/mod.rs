pub mod loader;

mod catalog;
#[cfg(test)]
mod catalog_tests;

pub use catalog::ThemeCatalog;

use serde::{ Deserialize, Serialize };

use crate::core::{
    models::{ ThemeBucket, WeeklyTheme },
    utils::{ deserialize_keyed, serialize_keyed },
};

/// Wire form of `data/theme_catalog.json`: a small index header (title,
/// revision, format) ahead of the two generated tables downstream code
/// consumes. Field names, nesting, `facetPool` optionality, and array order
/// are contract; see SPEC_FULL.md.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    pub title: String,
    pub revision: String,
    pub format: u8,
    #[serde(serialize_with = "serialize_keyed", deserialize_with = "deserialize_keyed")]
    pub generated_theme_buckets: Vec<ThemeBucket>,
    pub generated_category_themes: Vec<WeeklyTheme>,
}
