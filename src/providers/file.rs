use super::{AliasProvider, BestScores, PlayerProvider, ScoreProvider, SongProvider};
use crate::error::{MaimaiError, Result};
use crate::models::{Player, PlayerIdentifier, Score, Song, SongAlias};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Everything known about one player, as stored in `players/<id>.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerDocument {
    pub player: Player,
    #[serde(default)]
    pub best: BestScores,
    /// Full listing, absent when the source only exported best scores
    #[serde(default)]
    pub scores: Option<Vec<Score>>,
}

/// Reads exported JSON documents from a directory:
/// `songs.json`, an optional `aliases.json` and `players/<id>.json`
pub struct FileProvider {
    root: PathBuf,
}

impl FileProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FileProvider { root: root.into() }
    }

    fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
        debug!("Reading {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn player_document(&self, identifier: &PlayerIdentifier) -> Result<PlayerDocument> {
        let segment = identifier
            .as_path_segment()
            .ok_or_else(|| MaimaiError::PlayerNotFound("no username, friend code or qq given".to_string()))?;
        let path = self.root.join("players").join(format!("{segment}.json"));
        if !path.exists() {
            return Err(MaimaiError::PlayerNotFound(segment));
        }
        Self::read_json(&path)
    }
}

impl SongProvider for FileProvider {
    fn get_songs(&self) -> Result<Vec<Song>> {
        Self::read_json(&self.root.join("songs.json"))
    }
}

impl AliasProvider for FileProvider {
    fn get_aliases(&self) -> Result<Vec<SongAlias>> {
        let path = self.root.join("aliases.json");
        if !path.exists() {
            warn!("No aliases.json in {}, continuing without aliases", self.root.display());
            return Ok(Vec::new());
        }
        Self::read_json(&path)
    }
}

impl PlayerProvider for FileProvider {
    fn get_player(&self, identifier: &PlayerIdentifier) -> Result<Player> {
        Ok(self.player_document(identifier)?.player)
    }
}

impl ScoreProvider for FileProvider {
    fn get_scores_best(&self, identifier: &PlayerIdentifier) -> Result<BestScores> {
        Ok(self.player_document(identifier)?.best)
    }

    /// Falls back to the best lists when the export has no full listing
    fn get_scores_all(&self, identifier: &PlayerIdentifier) -> Result<Vec<Score>> {
        let document = self.player_document(identifier)?;
        Ok(document
            .scores
            .unwrap_or_else(|| document.best.b35.into_iter().chain(document.best.b15).collect()))
    }
}
