//! Weekly theme catalog for the Lunaria Grimoire content planner.
//!
//! The catalog is build-time output: a generator walks the Grimoire taxonomy
//! and emits `data/theme_catalog.json`, which this crate embeds and serves
//! through read-only lookups. Nothing here mutates at runtime; a regeneration
//! replaces the data wholesale.

pub mod catalog;
pub mod core;
pub mod templates;
pub mod validate;

pub use catalog::{ loader, CatalogDocument, ThemeCatalog };
pub use core::{ Facet, Subtheme, ThemeBucket, ThemeError, Threads, WeeklyTheme };
pub use validate::{ validate_catalog, CatalogIssue };
