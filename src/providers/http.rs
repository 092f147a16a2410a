use super::{AliasProvider, BestScores, PlayerProvider, ScoreProvider, SongProvider};
use crate::error::{MaimaiError, Result};
use crate::models::{Player, PlayerIdentifier, Score, Song, SongAlias};
use log::debug;
use serde::de::DeserializeOwned;
use ureq::Agent;

/// Blocking client for a JSON mirror serving songs, aliases and player scores
/// in this crate's data model
pub struct HttpProvider {
    agent: Agent,
    base_url: String,
    token: Option<String>,
}

impl HttpProvider {
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        HttpProvider {
            agent: Agent::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn player_url(&self, identifier: &PlayerIdentifier, suffix: &str) -> Result<String> {
        let segment = identifier
            .as_path_segment()
            .ok_or_else(|| MaimaiError::PlayerNotFound("no username, friend code or qq given".to_string()))?;
        Ok(format!("{}/players/{}{}", self.base_url, segment, suffix))
    }

    /// GET a URL and decode its JSON body. A 404 on a player URL means the
    /// mirror does not know that player.
    fn fetch<T: DeserializeOwned>(&self, url: &str, player: Option<&PlayerIdentifier>) -> Result<T> {
        debug!("GET {url}");

        let mut request = self.agent.get(url);
        if let Some(token) = &self.token {
            request = request.set("Authorization", token);
        }

        let response = request.call().map_err(|e| match e {
            ureq::Error::Status(404, _) if player.is_some() => MaimaiError::PlayerNotFound(url.to_string()),
            other => MaimaiError::Transport(other.to_string()),
        })?;

        let response_text = response.into_string()?;
        Ok(serde_json::from_str(&response_text)?)
    }
}

impl SongProvider for HttpProvider {
    fn get_songs(&self) -> Result<Vec<Song>> {
        self.fetch(&format!("{}/songs", self.base_url), None)
    }
}

impl AliasProvider for HttpProvider {
    fn get_aliases(&self) -> Result<Vec<SongAlias>> {
        self.fetch(&format!("{}/aliases", self.base_url), None)
    }
}

impl PlayerProvider for HttpProvider {
    fn get_player(&self, identifier: &PlayerIdentifier) -> Result<Player> {
        self.fetch(&self.player_url(identifier, "")?, Some(identifier))
    }
}

impl ScoreProvider for HttpProvider {
    fn get_scores_best(&self, identifier: &PlayerIdentifier) -> Result<BestScores> {
        self.fetch(&self.player_url(identifier, "/scores?kind=best")?, Some(identifier))
    }

    fn get_scores_all(&self, identifier: &PlayerIdentifier) -> Result<Vec<Score>> {
        self.fetch(&self.player_url(identifier, "/scores?kind=all")?, Some(identifier))
    }
}
