//! Data sources the client pulls songs, aliases, players and scores from.

pub mod file;
pub mod http;


pub use file::FileProvider;
pub use http::HttpProvider;

use crate::error::Result;
use crate::models::{Player, PlayerIdentifier, Score, Song, SongAlias};
use serde::{Deserialize, Serialize};

/// Best-35 / best-15 subsets as selected by a provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BestScores {
    pub b35: Vec<Score>,
    pub b15: Vec<Score>,
}

#[cfg_attr(test, mockall::automock)]
pub trait SongProvider {
    fn get_songs(&self) -> Result<Vec<Song>>;
}

#[cfg_attr(test, mockall::automock)]
pub trait AliasProvider {
    fn get_aliases(&self) -> Result<Vec<SongAlias>>;
}

#[cfg_attr(test, mockall::automock)]
pub trait PlayerProvider {
    fn get_player(&self, identifier: &PlayerIdentifier) -> Result<Player>;
}

/// Score source. Some services leave `dx_rating` or `achievements` empty in
/// their full listing; callers check [`Score::is_complete`] before ranking it.
#[cfg_attr(test, mockall::automock)]
pub trait ScoreProvider {
    fn get_scores_best(&self, identifier: &PlayerIdentifier) -> Result<BestScores>;
    fn get_scores_all(&self, identifier: &PlayerIdentifier) -> Result<Vec<Score>>;
}
