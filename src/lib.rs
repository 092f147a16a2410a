//! Rating, best-score and plate statistics for maimai players, computed from
//! song catalogs and score listings fetched through pluggable providers.

pub mod client;
pub mod config;
pub mod enums;
pub mod error;
pub mod models;
pub mod plates;
pub mod providers;
pub mod scores;
pub mod songs;

#[cfg(test)]
mod client_tests;
#[cfg(test)]
mod test_fixtures;

pub use client::MaimaiClient;
pub use error::{MaimaiError, Result};
pub use plates::{MaimaiPlates, PlateObject};
pub use scores::MaimaiScores;
pub use songs::MaimaiSongs;
