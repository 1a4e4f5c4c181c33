use std::{ collections::HashMap, sync::OnceLock };

use super::{ loader, CatalogDocument };
use crate::core::{
    models::{ Subtheme, ThemeBucket, WeeklyTheme },
    ThemeError,
};

/// Read-only, indexed view over a parsed catalog document.
///
/// Buckets and weekly themes stay in authored order for iteration; key
/// lookups go through side indexes so consumers get O(1) access without
/// giving up the ordering the renderer relies on.
#[derive(Debug)]
pub struct ThemeCatalog {
    title: String,
    revision: String,
    format: u8,
    buckets: Vec<ThemeBucket>,
    weekly_themes: Vec<WeeklyTheme>,
    bucket_index: HashMap<String, usize>,
    subtheme_index: HashMap<String, (usize, usize)>, // subtheme key -> (bucket, subtheme)
    weekly_index: HashMap<String, usize>,
}

impl ThemeCatalog {
    /// Builds the indexed catalog, rejecting duplicate bucket keys, subtheme
    /// keys (catalog-global), or weekly theme ids.
    pub fn from_document(doc: CatalogDocument) -> Result<Self, ThemeError> {
        let mut bucket_index = HashMap::new();
        let mut subtheme_index = HashMap::new();
        let mut weekly_index = HashMap::new();

        for (b, bucket) in doc.generated_theme_buckets.iter().enumerate() {
            if bucket_index.insert(bucket.key.clone(), b).is_some() {
                return Err(ThemeError::DuplicateKey(bucket.key.clone()));
            }
            for (s, subtheme) in bucket.subthemes.iter().enumerate() {
                if subtheme_index.insert(subtheme.key.clone(), (b, s)).is_some() {
                    return Err(ThemeError::DuplicateKey(subtheme.key.clone()));
                }
            }
        }

        for (w, theme) in doc.generated_category_themes.iter().enumerate() {
            if weekly_index.insert(theme.id.clone(), w).is_some() {
                return Err(ThemeError::DuplicateKey(theme.id.clone()));
            }
        }

        Ok(ThemeCatalog {
            title: doc.title,
            revision: doc.revision,
            format: doc.format,
            buckets: doc.generated_theme_buckets,
            weekly_themes: doc.generated_category_themes,
            bucket_index,
            subtheme_index,
            weekly_index,
        })
    }

    /// The embedded catalog, parsed once per process.
    ///
    /// The shipped data is validated in CI, so a parse failure here means the
    /// build itself is broken; that is the one place we allow a panic.
    pub fn global() -> &'static ThemeCatalog {
        static CATALOG: OnceLock<ThemeCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| {
            loader::load_embedded().expect("embedded theme catalog failed to load")
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn revision(&self) -> &str {
        &self.revision
    }

    /// All buckets in authored order.
    pub fn buckets(&self) -> &[ThemeBucket] {
        &self.buckets
    }

    pub fn bucket(&self, key: &str) -> Option<&ThemeBucket> {
        self.bucket_index.get(key).map(|&b| &self.buckets[b])
    }

    /// Subtheme lookup scoped to a bucket; `None` when the subtheme exists
    /// but under a different bucket.
    pub fn subtheme(&self, bucket_key: &str, subtheme_key: &str) -> Option<&Subtheme> {
        let &(b, s) = self.subtheme_index.get(subtheme_key)?;
        if self.buckets[b].key != bucket_key {
            return None;
        }
        Some(&self.buckets[b].subthemes[s])
    }

    /// Subtheme keys are unique across the whole catalog, so an unscoped
    /// lookup is well-defined.
    pub fn subtheme_by_key(&self, subtheme_key: &str) -> Option<&Subtheme> {
        let &(b, s) = self.subtheme_index.get(subtheme_key)?;
        Some(&self.buckets[b].subthemes[s])
    }

    /// The bucket a subtheme lives under.
    pub fn bucket_of(&self, subtheme_key: &str) -> Option<&ThemeBucket> {
        let &(b, _) = self.subtheme_index.get(subtheme_key)?;
        Some(&self.buckets[b])
    }

    /// All weekly themes in authored order.
    pub fn weekly_themes(&self) -> &[WeeklyTheme] {
        &self.weekly_themes
    }

    pub fn weekly_theme(&self, id: &str) -> Option<&WeeklyTheme> {
        self.weekly_index.get(id).map(|&w| &self.weekly_themes[w])
    }

    /// Clones the catalog back into its wire form, entry order intact.
    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            title: self.title.clone(),
            revision: self.revision.clone(),
            format: self.format,
            generated_theme_buckets: self.buckets.clone(),
            generated_category_themes: self.weekly_themes.clone(),
        }
    }
}
