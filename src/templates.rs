//! The fixed text templates the generator stamps into every catalog entry.
//!
//! Consumers never author these strings by hand; everything is reconstructible
//! from a facet title or theme name plus the templates below, and validation
//! holds the shipped data to exactly that.

/// Brand name embedded in every weekly description.
pub const BRAND: &str = "Lunaria";

/// Display title for a Grimoire slug: terminal path segment, hyphens to
/// spaces, each word capitalized ("tarot/the-high-priestess" -> "The High
/// Priestess").
pub fn title_from_slug(slug: &str) -> String {
    let segment = slug.rsplit('/').next().unwrap_or(slug);
    segment
        .split('-')
        .map(capitalize)
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn facet_focus(title: &str) -> String {
    format!("Meaning, themes, and how to work with {title}.")
}

pub fn facet_hook(title: &str) -> String {
    format!("Think you know {title}? Save this before your next reading.")
}

pub fn weekly_description(name: &str) -> String {
    format!(
        "A week of {name}: daily meanings, rituals, and journal prompts from the {BRAND} Grimoire."
    )
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
