use super::ranking::{compare_scores, distinct, rank};
use crate::enums::{LevelIndex, SongType};
use crate::error::{MaimaiError, Result};
use crate::models::Score;
use crate::songs::{MaimaiSongs, SONG_ID_MODULUS};
use log::debug;
use serde::Serialize;

/// Scores from songs released before the current version counted towards rating
pub const OLD_VERSION_LIMIT: usize = 35;
/// Scores from current-version songs counted towards rating
pub const NEW_VERSION_LIMIT: usize = 15;

/// A player's scores with the best-35 / best-15 subsets that make up the rating.
///
/// Each subset total is the integer part of the summed `dx_rating` of its
/// list; `rating` is the sum of the two totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaimaiScores {
    scores: Vec<Score>,
    scores_b35: Vec<Score>,
    scores_b15: Vec<Score>,
    rating: u32,
    rating_b35: u32,
    rating_b15: u32,
    #[serde(skip)]
    current_version: Option<u32>,
}

fn sum_rating(scores: &[Score]) -> u32 {
    let total: f64 = scores.iter().filter_map(|s| s.dx_rating).sum();
    total.max(0.0).trunc() as u32
}

impl MaimaiScores {
    /// Aggregate from subsets a provider already selected
    pub fn from_best(scores_b35: Vec<Score>, scores_b15: Vec<Score>) -> Self {
        let scores = scores_b35.iter().chain(scores_b15.iter()).cloned().collect();
        Self::assemble(scores, scores_b35, scores_b15, None)
    }

    /// Aggregate from a player's full score list.
    ///
    /// Every score must carry `dx_rating` and `achievements` (see
    /// [`Score::is_complete`]); providers that omit them should be asked for
    /// precomputed subsets instead. Fails with [`MaimaiError::MissingSong`]
    /// when a score references a song the catalog does not know.
    pub fn from_all(scores: Vec<Score>, songs: &MaimaiSongs, current_version: u32) -> Result<Self> {
        let mut old_pool = Vec::new();
        let mut new_pool = Vec::new();

        for score in distinct(&scores) {
            let song = songs
                .by_id(score.id)
                .ok_or(MaimaiError::MissingSong(score.id))?;
            if song.version >= current_version {
                new_pool.push(score);
            } else {
                old_pool.push(score);
            }
        }

        rank(&mut old_pool);
        rank(&mut new_pool);
        old_pool.truncate(OLD_VERSION_LIMIT);
        new_pool.truncate(NEW_VERSION_LIMIT);

        debug!(
            "Selected {} old and {} new scores out of {} (current version {})",
            old_pool.len(),
            new_pool.len(),
            scores.len(),
            current_version
        );
        Ok(Self::assemble(scores, old_pool, new_pool, Some(current_version)))
    }

    fn assemble(
        scores: Vec<Score>,
        scores_b35: Vec<Score>,
        scores_b15: Vec<Score>,
        current_version: Option<u32>,
    ) -> Self {
        let rating_b35 = sum_rating(&scores_b35);
        let rating_b15 = sum_rating(&scores_b15);
        MaimaiScores {
            scores,
            scores_b35,
            scores_b15,
            rating: rating_b35 + rating_b15,
            rating_b35,
            rating_b15,
            current_version,
        }
    }

    /// New aggregate with one score per chart. Aggregates built from a full
    /// list are re-partitioned against `songs`; ones built from provider
    /// subsets are deduplicated in place.
    pub fn as_distinct(&self, songs: &MaimaiSongs) -> Result<Self> {
        match self.current_version {
            Some(version) => Self::from_all(distinct(&self.scores), songs, version),
            None => Ok(Self::from_best(
                distinct(&self.scores_b35),
                distinct(&self.scores_b15),
            )),
        }
    }

    pub fn scores(&self) -> &[Score] {
        &self.scores
    }

    pub fn scores_b35(&self) -> &[Score] {
        &self.scores_b35
    }

    pub fn scores_b15(&self) -> &[Score] {
        &self.scores_b15
    }

    pub fn rating(&self) -> u32 {
        self.rating
    }

    pub fn rating_b35(&self) -> u32 {
        self.rating_b35
    }

    pub fn rating_b15(&self) -> u32 {
        self.rating_b15
    }

    /// All scores on a song, any chart. Ids compare modulo [`SONG_ID_MODULUS`].
    pub fn by_song(&self, song_id: u32) -> Vec<&Score> {
        let song_id = song_id % SONG_ID_MODULUS;
        self.scores
            .iter()
            .filter(|s| s.id % SONG_ID_MODULUS == song_id)
            .collect()
    }

    /// Best score on one chart
    pub fn by_level(&self, song_id: u32, song_type: SongType, level_index: LevelIndex) -> Option<&Score> {
        let song_id = song_id % SONG_ID_MODULUS;
        self.scores
            .iter()
            .filter(|s| {
                s.id % SONG_ID_MODULUS == song_id && s.song_type == song_type && s.level_index == level_index
            })
            .fold(None, |best: Option<&Score>, s| match best {
                Some(b) if compare_scores(s, b).is_le() => Some(b),
                _ => Some(s),
            })
    }
}
