// Interactive guesser: reads one guess per line and reports what the
// resolver made of it.

use std::io::{self, BufRead, Write};

use clap::Parser;
use country_resolver::config::{load_settings, Settings};
use country_resolver::session::{daily_answer, GuessOutcome, GuessSession};
use country_resolver::{ReferenceData, Resolution, Resolver};

#[derive(Parser, Debug)]
#[command(name = "guesser")]
#[command(about = "Guess the country of the day")]
#[command(version)]
struct Args {
    /// Locale to play in, e.g. fr-FR (defaults to the configured locale)
    #[arg(long)]
    locale: Option<String>,

    /// Country to play against instead of the daily answer
    #[arg(long)]
    answer: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    log::info!("Country guesser startup - v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let settings = load_settings();
    if let Ok(path) = Settings::config_path() {
        log::debug!("[Main] Config file: {}", path.display());
    }

    let data = ReferenceData::load(&settings)?;
    let locale = args.locale.unwrap_or(settings.locale);
    let resolver = Resolver::new(&data.aliases, &locale)?.with_threshold(settings.suggestion_threshold);

    let answer = match args.answer {
        Some(name) => match resolver.resolve(&name, &[], &data.countries) {
            Resolution::Resolved(country) => country.clone(),
            _ => return Err(format!("'{}' is not a country in the dataset", name).into()),
        },
        None => daily_answer(&data.countries, chrono::Local::now().date_naive())
            .ok_or("The country dataset is empty")?
            .clone(),
    };

    let mut session = GuessSession::new(answer);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("Guess the country ({}). Ctrl-D quits.", resolver.locale());
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match session.submit(&line, &resolver, &data.countries) {
            GuessOutcome::Accepted { country, won: true } => {
                println!("{} is correct! Found in {} guesses.", country.name(), session.guesses().len());
            }
            GuessOutcome::Accepted { country, won: false } => {
                println!("{} is not the answer.", country.name());
            }
            GuessOutcome::AlreadyGuessed => println!("You already guessed that country."),
            GuessOutcome::Rejected { suggestions } if suggestions.is_empty() => {
                println!("Unknown country.");
            }
            GuessOutcome::Rejected { suggestions } => {
                println!("Did you mean {}?", suggestions.join(", "));
            }
            GuessOutcome::GameOver => {}
        }

        if session.is_won() {
            break;
        }
    }

    if !session.is_won() {
        println!("The answer was {}.", session.answer().name());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_are_optional() {
        let args = Args::try_parse_from(["guesser"]).unwrap();
        assert!(args.locale.is_none());
        assert!(args.answer.is_none());
    }

    #[test]
    fn test_locale_and_answer_flags() {
        let args = Args::try_parse_from(["guesser", "--locale", "fr-FR", "--answer", "Ivory Coast"]).unwrap();
        assert_eq!(args.locale.as_deref(), Some("fr-FR"));
        assert_eq!(args.answer.as_deref(), Some("Ivory Coast"));
    }

    #[test]
    fn test_bad_arguments_are_rejected() {
        assert!(Args::try_parse_from(["guesser", "--answer"]).is_err());
        assert!(Args::try_parse_from(["guesser", "--continent", "Europe"]).is_err());
        let help = Args::try_parse_from(["guesser", "--help"]).unwrap_err();
        assert_eq!(help.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
