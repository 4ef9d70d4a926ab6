// Country name resolution for a geography guessing game: turns a free-text
// guess into a country from the reference dataset, or into a ranked list of
// close names when nothing matches.

pub mod alternate_names;
pub mod config;
pub mod country;
pub mod country_index;
pub mod error;
pub mod locale;
pub mod normalizer;
pub mod reference;
pub mod resolver;
pub mod session;
pub mod suggestions;
pub mod weighted_distance;

pub use alternate_names::{AliasPair, AliasTable};
pub use country::Country;
pub use error::{ResolveError, Result};
pub use reference::ReferenceData;
pub use resolver::{resolve, Resolution, Resolver};
pub use session::{daily_answer, GuessOutcome, GuessSession};
