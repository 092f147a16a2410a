use crate::models::Song;
use serde::{Deserialize, Serialize};

/// Attribute filter over songs; every field that is set must match
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SongFilter {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub genre: Option<String>,
    pub version: Option<u32>,
    pub bpm_thresholds: Option<BpmThresholds>,
}

/// Inclusive BPM range
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BpmThresholds {
    pub min_bpm: u32,
    pub max_bpm: u32,
}

impl SongFilter {
    pub fn matches(&self, song: &Song) -> bool {
        Self::field_matches(&self.title, &song.title)
            && Self::field_matches(&self.artist, &song.artist)
            && Self::field_matches(&self.genre, &song.genre)
            && self.version.is_none_or(|v| v == song.version)
            && self
                .bpm_thresholds
                .is_none_or(|t| (t.min_bpm..=t.max_bpm).contains(&song.bpm))
    }

    fn field_matches(expected: &Option<String>, actual: &str) -> bool {
        expected.as_deref().is_none_or(|e| e == actual)
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.artist.is_none()
            && self.genre.is_none()
            && self.version.is_none()
            && self.bpm_thresholds.is_none()
    }
}
