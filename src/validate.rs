//! Structural checks for a loaded catalog.
//!
//! The generator is trusted to emit valid data, but regenerated catalogs go
//! through here before they replace the embedded one. Every violation is
//! reported, not just the first, so one inspector run shows the full damage.

use std::{ fmt, sync::OnceLock };

use regex::Regex;
use thiserror::Error;

use crate::{
    catalog::ThemeCatalog,
    core::models::{ Facet, Subtheme, WeeklyTheme },
    templates,
};

/// Facet counts a weekly plan may carry (one item per day, five-day weeks up
/// to a full week plus one bonus slot).
pub const MIN_WEEKLY_FACETS: usize = 5;
pub const MAX_WEEKLY_FACETS: usize = 8;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    #[error("subtheme '{subtheme}' has a malformed slug '{slug}'")]
    MalformedSlug { subtheme: String, slug: String },

    #[error("weekly theme '{0}' does not correspond to any subtheme")]
    OrphanWeeklyTheme(String),

    #[error("weekly theme '{id}' has {count} facets, expected 5 to 8")]
    FacetCountOutOfRange { id: String, count: usize },

    #[error("weekly theme '{id}' {array} has dayIndex {found} at position {position}")]
    DayIndexMismatch { id: String, array: FacetArray, position: usize, found: u32 },

    #[error("weekly theme '{id}' {array} references '{slug}', which is not in its subtheme")]
    SlugOutsideSubtheme { id: String, array: FacetArray, slug: String },

    #[error("weekly theme '{id}' facetPool is shorter than facets")]
    PoolShorterThanFacets { id: String },

    #[error("weekly theme '{id}' facetPool diverges from facets at position {position}")]
    PoolPrefixMismatch { id: String, position: usize },

    #[error("weekly theme '{id}' facetPool does not include slug '{slug}'")]
    PoolMissingSlug { id: String, slug: String },

    #[error("weekly theme '{id}' needs a facetPool to cover its {slug_count} slugs")]
    MissingFacetPool { id: String, slug_count: usize },

    #[error("weekly theme '{id}' has a facetPool although facets already cover every slug")]
    UnexpectedFacetPool { id: String },

    #[error("weekly theme '{id}' {field} does not match its template")]
    ThemeTextDrift { id: String, field: &'static str },

    #[error("weekly theme '{id}' {array} facet {day_index}: {field} does not match its template")]
    FacetTextDrift { id: String, array: FacetArray, day_index: u32, field: &'static str },

    #[error("weekly theme '{id}' has an empty category")]
    EmptyCategory { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetArray {
    Facets,
    FacetPool,
}

impl fmt::Display for FacetArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacetArray::Facets => f.write_str("facets"),
            FacetArray::FacetPool => f.write_str("facetPool"),
        }
    }
}

fn slug_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*(?:/[a-z0-9]+(?:-[a-z0-9]+)*)*$").unwrap()
    })
}

/// Runs every check against a loaded catalog. An empty result means the
/// catalog upholds the full data contract. Key uniqueness is not re-checked
/// here; duplicate keys already fail at `ThemeCatalog::from_document`.
pub fn validate_catalog(catalog: &ThemeCatalog) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();

    for bucket in catalog.buckets() {
        for subtheme in &bucket.subthemes {
            for slug in &subtheme.slugs {
                if !slug_regex().is_match(slug) {
                    issues.push(CatalogIssue::MalformedSlug {
                        subtheme: subtheme.key.clone(),
                        slug: slug.clone(),
                    });
                }
            }
        }
    }

    for theme in catalog.weekly_themes() {
        let Some(subtheme) = catalog.subtheme_by_key(&theme.id) else {
            issues.push(CatalogIssue::OrphanWeeklyTheme(theme.id.clone()));
            continue;
        };
        check_weekly_theme(theme, subtheme, &mut issues);
    }

    issues
}

fn check_weekly_theme(theme: &WeeklyTheme, subtheme: &Subtheme, issues: &mut Vec<CatalogIssue>) {
    let id = &theme.id;

    if theme.category.is_empty() {
        issues.push(CatalogIssue::EmptyCategory { id: id.clone() });
    }

    if theme.description != templates::weekly_description(&theme.name) {
        issues.push(CatalogIssue::ThemeTextDrift { id: id.clone(), field: "description" });
    }
    if theme.threads.keyword != theme.name || !theme.threads.angles.is_empty() {
        issues.push(CatalogIssue::ThemeTextDrift { id: id.clone(), field: "threads" });
    }

    let count = theme.facets.len();
    if !(MIN_WEEKLY_FACETS..=MAX_WEEKLY_FACETS).contains(&count) {
        issues.push(CatalogIssue::FacetCountOutOfRange { id: id.clone(), count });
    }

    check_facet_run(id, FacetArray::Facets, &theme.facets, subtheme, issues);

    match &theme.facet_pool {
        Some(pool) => {
            check_facet_run(id, FacetArray::FacetPool, pool, subtheme, issues);
            check_pool_against_facets(theme, pool, subtheme, issues);
        }
        None => {
            if subtheme.slugs.len() > count {
                issues.push(CatalogIssue::MissingFacetPool {
                    id: id.clone(),
                    slug_count: subtheme.slugs.len(),
                });
            }
        }
    }
}

/// Per-run checks shared by `facets` and `facetPool`: contiguous zero-based
/// dayIndex, slugs drawn from the subtheme, every text field on-template.
fn check_facet_run(
    id: &str,
    array: FacetArray,
    facets: &[Facet],
    subtheme: &Subtheme,
    issues: &mut Vec<CatalogIssue>,
) {
    for (position, facet) in facets.iter().enumerate() {
        if facet.day_index as usize != position {
            issues.push(CatalogIssue::DayIndexMismatch {
                id: id.to_string(),
                array,
                position,
                found: facet.day_index,
            });
        }

        if !subtheme.contains_slug(&facet.grimoire_slug) {
            issues.push(CatalogIssue::SlugOutsideSubtheme {
                id: id.to_string(),
                array,
                slug: facet.grimoire_slug.clone(),
            });
        }

        let mut drift = |field: &'static str| {
            issues.push(CatalogIssue::FacetTextDrift {
                id: id.to_string(),
                array,
                day_index: facet.day_index,
                field,
            });
        };
        if facet.title != templates::title_from_slug(&facet.grimoire_slug) {
            drift("title");
        }
        if facet.focus != templates::facet_focus(&facet.title) {
            drift("focus");
        }
        if facet.short_form_hook != templates::facet_hook(&facet.title) {
            drift("shortFormHook");
        }
        if facet.threads.keyword != facet.title || !facet.threads.angles.is_empty() {
            drift("threads");
        }
    }
}

fn check_pool_against_facets(
    theme: &WeeklyTheme,
    pool: &[Facet],
    subtheme: &Subtheme,
    issues: &mut Vec<CatalogIssue>,
) {
    let id = &theme.id;

    if subtheme.slugs.len() <= theme.facets.len() {
        issues.push(CatalogIssue::UnexpectedFacetPool { id: id.clone() });
    }

    if pool.len() < theme.facets.len() {
        issues.push(CatalogIssue::PoolShorterThanFacets { id: id.clone() });
    } else {
        for (position, (facet, pooled)) in theme.facets.iter().zip(pool).enumerate() {
            if facet.grimoire_slug != pooled.grimoire_slug || facet.title != pooled.title {
                issues.push(CatalogIssue::PoolPrefixMismatch { id: id.clone(), position });
            }
        }
    }

    // The pool is the full run: every subtheme slug must appear in it.
    for slug in &subtheme.slugs {
        if !pool.iter().any(|f| &f.grimoire_slug == slug) {
            issues.push(CatalogIssue::PoolMissingSlug { id: id.clone(), slug: slug.clone() });
        }
    }
}
