use country_resolver::config::load_settings;
use country_resolver::normalizer::normalize;
use country_resolver::{ReferenceData, Resolution, Resolver};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = load_settings();
    let data = ReferenceData::load(&settings)?;
    let resolver = Resolver::new(&data.aliases, &settings.locale)?;

    println!(
        "Checking {} alternate names against {} countries ({})",
        data.aliases.len(),
        data.countries.len(),
        resolver.locale()
    );

    let mut problems = 0;

    for pair in data.aliases.pairs() {
        if !matches!(resolver.resolve(&pair.real, &[], &data.countries), Resolution::Resolved(_)) {
            println!("  '{}' -> '{}': target is not a known country", pair.alternative, pair.real);
            problems += 1;
        }
        if normalize(&pair.alternative) != pair.alternative {
            println!(
                "  '{}': not normalized, guesses arrive as '{}'",
                pair.alternative,
                normalize(&pair.alternative)
            );
            problems += 1;
        }
    }

    for pair in data.aliases.duplicate_alternatives() {
        println!("  '{}' -> '{}': shadowed by an earlier entry", pair.alternative, pair.real);
        problems += 1;
    }

    for (locale, name) in data.missing_display_names()? {
        println!("  {}: no {} display name, never suggested there", name, locale);
        problems += 1;
    }

    if problems > 0 {
        eprintln!("\n{} problems found", problems);
        std::process::exit(1);
    }

    println!("\nNo problems found.");
    Ok(())
}
