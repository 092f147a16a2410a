use crate::enums::{FCType, FSType, LevelIndex, RateType, SongType};
use serde::{Deserialize, Serialize};

/// A song from the catalog, with both chart groups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub id: u32,
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub bpm: u32,
    pub version: u32,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub difficulties: SongDifficulties,
}

/// Standard and DX chart groups, each ordered by level index
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SongDifficulties {
    #[serde(default)]
    pub standard: Vec<SongDifficulty>,
    #[serde(default)]
    pub dx: Vec<SongDifficulty>,
}

/// One playable chart of a song
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongDifficulty {
    #[serde(rename = "type")]
    pub song_type: SongType,
    pub level: String,
    pub level_value: f64,
    pub level_index: LevelIndex,
    #[serde(default)]
    pub note_designer: Option<String>,
    pub version: u32,
}

impl SongDifficulties {
    /// Chart group for a chart type; utage charts have no group
    pub fn group(&self, song_type: SongType) -> &[SongDifficulty] {
        match song_type {
            SongType::Standard => &self.standard,
            SongType::Dx => &self.dx,
            SongType::Utage => &[],
        }
    }
}

impl Song {
    /// Look up a single chart by type and level index
    pub fn difficulty(&self, song_type: SongType, level_index: LevelIndex) -> Option<&SongDifficulty> {
        self.difficulties
            .group(song_type)
            .iter()
            .find(|d| d.level_index == level_index)
    }
}

/// Alternative titles for one song
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongAlias {
    pub song_id: u32,
    pub aliases: Vec<String>,
}

/// A single play record as reported by a score provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub id: u32,
    #[serde(default)]
    pub song_name: Option<String>,
    pub level: String,
    pub level_index: LevelIndex,
    pub achievements: Option<f64>,
    pub fc: Option<FCType>,
    pub fs: Option<FSType>,
    pub dx_score: Option<u32>,
    pub dx_rating: Option<f64>,
    pub rate: RateType,
    #[serde(rename = "type")]
    pub song_type: SongType,
}

/// Identity of a chart a score was set on
pub type ScoreKey = (u32, SongType, LevelIndex);

impl Score {
    pub fn key(&self) -> ScoreKey {
        (self.id, self.song_type, self.level_index)
    }

    /// Integer part of `dx_rating`, as shown in score listings
    pub fn rating_points(&self) -> u32 {
        self.dx_rating.map(|r| r.max(0.0).trunc() as u32).unwrap_or(0)
    }

    /// Whether the fields needed for ranking are present
    pub fn is_complete(&self) -> bool {
        self.dx_rating.is_some() && self.achievements.is_some()
    }
}

/// Basic player profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub rating: u32,
}

/// How a player is addressed at a provider; never interpreted by the engine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerIdentifier {
    pub username: Option<String>,
    pub friend_code: Option<u64>,
    pub qq: Option<u64>,
}

impl PlayerIdentifier {
    pub fn username(name: &str) -> Self {
        Self {
            username: Some(name.to_string()),
            ..Default::default()
        }
    }

    pub fn friend_code(code: u64) -> Self {
        Self {
            friend_code: Some(code),
            ..Default::default()
        }
    }

    /// Single path segment naming this player, preferring friend code
    pub fn as_path_segment(&self) -> Option<String> {
        if let Some(code) = self.friend_code {
            return Some(code.to_string());
        }
        if let Some(name) = &self.username {
            return Some(urlencoding::encode(name).into_owned());
        }
        self.qq.map(|qq| format!("qq:{qq}"))
    }
}
