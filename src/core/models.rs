use serde::{ Deserialize, Serialize };

use crate::core::utils::{ deserialize_keyed, serialize_keyed, Keyed };

/// Top-level topic grouping ("Crystals", "Tarot", ...).
///
/// On the wire `subthemes` is a string-keyed object; entry order is the
/// authored order and downstream consumers rely on it, so it round-trips
/// through an ordered sequence instead of a hash map.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ThemeBucket {
    pub key: String,
    pub name: String,
    #[serde(serialize_with = "serialize_keyed", deserialize_with = "deserialize_keyed")]
    pub subthemes: Vec<Subtheme>,
}

/// A finer grouping of Grimoire slugs within a bucket.
///
/// Subtheme keys are unique across the whole catalog, not per bucket. Slug
/// order is curated (popularity-first inside alphabetical bands, calendar
/// order for months and moon phases) and must be preserved.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Subtheme {
    pub key: String,
    pub name: String,
    pub slugs: Vec<String>, // Grimoire content paths, e.g. "crystals/amethyst"
}

/// One generated weekly content plan, derived from a single subtheme.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyTheme {
    pub id: String, // equals the originating subtheme key
    pub name: String,
    pub description: String,
    pub category: String, // coarse tag; approximate in the data, see DESIGN.md
    pub facets: Vec<Facet>,
    pub threads: Threads,
    /// Full run of available facets, present only when the subtheme has more
    /// slugs than one week of `facets`. Its leading entries equal `facets`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facet_pool: Option<Vec<Facet>>,
}

/// One day's content assignment within a weekly theme.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Facet {
    pub day_index: u32, // zero-based, contiguous within its sequence
    pub title: String,
    pub grimoire_slug: String,
    pub focus: String,
    pub short_form_hook: String,
    pub threads: Threads,
}

/// Seed for the downstream thread writer. `angles` is always empty here;
/// a later pipeline stage fills it in.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Threads {
    pub keyword: String,
    pub angles: Vec<String>,
}

impl Keyed for ThemeBucket {
    fn key(&self) -> &str {
        &self.key
    }
}

impl Keyed for Subtheme {
    fn key(&self) -> &str {
        &self.key
    }
}

impl WeeklyTheme {
    /// All facets available to the scheduler: the pool when present,
    /// otherwise the weekly facets themselves.
    pub fn all_facets(&self) -> &[Facet] {
        self.facet_pool.as_deref().unwrap_or(&self.facets)
    }
}

impl Subtheme {
    pub fn contains_slug(&self, slug: &str) -> bool {
        self.slugs.iter().any(|s| s == slug)
    }
}
