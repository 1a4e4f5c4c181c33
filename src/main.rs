use std::{ env, path::Path, process };

use lunaria_themes::{ loader, validate_catalog, ThemeCatalog };

/// Catalog inspector: prints what the catalog contains and checks it against
/// the data contract. Pass a path to inspect regenerated output instead of
/// the embedded data. Exits non-zero when the catalog is invalid.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("lunaria_themes=info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let catalog = match args.get(1) {
        Some(path) => match loader::load_from_path(Path::new(path)) {
            Ok(catalog) => catalog,
            Err(e) => {
                eprintln!("Failed to load catalog from {}: {}", path, e);
                process::exit(1);
            }
        },
        None => match loader::load_embedded() {
            Ok(catalog) => catalog,
            Err(e) => {
                eprintln!("Failed to load embedded catalog: {}", e);
                process::exit(1);
            }
        },
    };

    print_summary(&catalog);

    let issues = validate_catalog(&catalog);
    if issues.is_empty() {
        println!("\nCatalog is valid.");
    } else {
        eprintln!("\n{} contract violation(s):", issues.len());
        for issue in &issues {
            eprintln!("  - {}", issue);
        }
        process::exit(1);
    }
}

fn print_summary(catalog: &ThemeCatalog) {
    println!("{} (revision {})", catalog.title(), catalog.revision());

    println!("\nBuckets:");
    for bucket in catalog.buckets() {
        let slug_count: usize = bucket.subthemes.iter().map(|s| s.slugs.len()).sum();
        println!(
            "  {:<14} {:<22} {:>2} subthemes, {:>3} slugs",
            bucket.key,
            bucket.name,
            bucket.subthemes.len(),
            slug_count
        );
    }

    println!("\nWeekly themes:");
    for theme in catalog.weekly_themes() {
        let pool = match &theme.facet_pool {
            Some(pool) => format!("pool {}", pool.len()),
            None => "no pool".to_string(),
        };
        println!(
            "  {:<22} {:<12} {} facets, {}",
            theme.id,
            theme.category,
            theme.facets.len(),
            pool
        );
    }
}
