use std::{ fs, path::Path };

use tracing::debug;

use super::{ CatalogDocument, ThemeCatalog };
use crate::core::ThemeError;

/// Format versions this loader understands. Regenerated catalogs bump the
/// header's `format` when the shape changes; older binaries refuse to load
/// them instead of misreading the tables.
const SUPPORTED_FORMAT: u8 = 1;

static EMBEDDED_CATALOG: &str = include_str!("../../data/theme_catalog.json");

/// Loads the catalog compiled into the crate.
pub fn load_embedded() -> Result<ThemeCatalog, ThemeError> {
    parse_catalog(EMBEDDED_CATALOG)
}

/// Loads a regenerated catalog from disk, e.g. to inspect generator output
/// before it replaces the embedded data.
pub fn load_from_path(path: &Path) -> Result<ThemeCatalog, ThemeError> {
    let data = fs::read_to_string(path)?;
    parse_catalog(&data)
}

fn parse_catalog(data: &str) -> Result<ThemeCatalog, ThemeError> {
    let doc: CatalogDocument = serde_json::from_str(data)?;
    if doc.format != SUPPORTED_FORMAT {
        return Err(ThemeError::UnsupportedFormat(doc.format));
    }

    let catalog = ThemeCatalog::from_document(doc)?;
    debug!(
        title = catalog.title(),
        revision = catalog.revision(),
        buckets = catalog.buckets().len(),
        weekly_themes = catalog.weekly_themes().len(),
        "loaded theme catalog"
    );
    Ok(catalog)
}
