pub mod errors;
pub mod models;
pub mod utils;

pub use errors::ThemeError;
pub use models::{ Facet, Subtheme, ThemeBucket, Threads, WeeklyTheme };
