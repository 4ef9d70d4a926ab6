// src/session.rs
//
// A single game as the caller of the resolver sees it: the answer, the
// countries guessed so far and whether the game is won. The resolver itself
// never holds any of this.

use chrono::{Datelike, NaiveDate};

use crate::country::Country;
use crate::resolver::{Resolution, Resolver};

/// What happened to one submitted guess
#[derive(Debug, Clone, PartialEq)]
pub enum GuessOutcome {
    /// The game is already won; the guess was not looked at
    GameOver,
    AlreadyGuessed,
    Accepted { country: Country, won: bool },
    /// No country matched; `suggestions` may be empty
    Rejected { suggestions: Vec<String> },
}

#[derive(Debug, Clone)]
pub struct GuessSession {
    answer: Country,
    guesses: Vec<Country>,
    won: bool,
}

impl GuessSession {
    pub fn new(answer: Country) -> Self {
        Self {
            answer,
            guesses: Vec::new(),
            won: false,
        }
    }

    pub fn answer(&self) -> &Country {
        &self.answer
    }

    pub fn guesses(&self) -> &[Country] {
        &self.guesses
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Resolve a raw guess and record it if it names a new country
    pub fn submit(&mut self, raw_input: &str, resolver: &Resolver, countries: &[Country]) -> GuessOutcome {
        if self.won {
            return GuessOutcome::GameOver;
        }

        match resolver.resolve(raw_input, &self.guesses, countries) {
            Resolution::AlreadyGuessed => GuessOutcome::AlreadyGuessed,
            Resolution::Resolved(country) => {
                let won = country.name() == self.answer.name();
                self.guesses.push(country.clone());
                if won {
                    log::info!("[Session] Answer found after {} guesses", self.guesses.len());
                    self.won = true;
                }
                GuessOutcome::Accepted {
                    country: country.clone(),
                    won,
                }
            }
            Resolution::NoMatchWithSuggestions(suggestions) => GuessOutcome::Rejected { suggestions },
            Resolution::NoMatchNoSuggestions => GuessOutcome::Rejected { suggestions: Vec::new() },
        }
    }
}

/// The answer for a given day: days since the common era, modulo the dataset size
pub fn daily_answer(countries: &[Country], date: NaiveDate) -> Option<&Country> {
    if countries.is_empty() {
        return None;
    }
    let day = date.num_days_from_ce().unsigned_abs() as usize;
    countries.get(day % countries.len())
}
