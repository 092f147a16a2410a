use crate::error::{MaimaiError, Result};
use crate::models::{Player, PlayerIdentifier, Score};
use crate::plates::{MaimaiPlates, PlateSpec};
use crate::providers::{AliasProvider, PlayerProvider, ScoreProvider, SongProvider};
use crate::scores::MaimaiScores;
use crate::songs::{MaimaiSongs, SongCache};
use log::{info, warn};
use std::sync::Arc;

/// Entry point wiring providers into the catalog and the aggregation engine
pub struct MaimaiClient {
    current_version: u32,
    cache: SongCache,
}

impl MaimaiClient {
    /// `current_version` is the ordinal that separates best-15 songs from best-35 songs
    pub fn new(current_version: u32) -> Self {
        MaimaiClient {
            current_version,
            cache: SongCache::new(),
        }
    }

    pub fn current_version(&self) -> u32 {
        self.current_version
    }

    /// Fetch the song list and aliases and build a catalog. The result also
    /// replaces the cached catalog.
    pub fn songs(
        &self,
        provider: &dyn SongProvider,
        alias_provider: Option<&dyn AliasProvider>,
    ) -> Result<Arc<MaimaiSongs>> {
        let aliases = alias_provider.map(|p| p.get_aliases()).transpose()?;
        let songs = provider.get_songs()?;
        let catalog = Arc::new(MaimaiSongs::new(songs, aliases));
        info!("Loaded {} songs", catalog.len());
        self.cache.store(catalog.clone());
        Ok(catalog)
    }

    /// Catalog from the last [`MaimaiClient::songs`] call, if any
    pub fn cached_songs(&self) -> Option<Arc<MaimaiSongs>> {
        self.cache.get()
    }

    pub fn players(&self, identifier: &PlayerIdentifier, provider: &dyn PlayerProvider) -> Result<Player> {
        provider.get_player(identifier)
    }

    /// Rating-relevant scores of a player.
    ///
    /// The full listing is ranked locally when a catalog is available (given,
    /// or cached) and every score carries rating data; otherwise the
    /// provider's own best-35 / best-15 selection is used.
    pub fn scores(
        &self,
        identifier: &PlayerIdentifier,
        provider: &dyn ScoreProvider,
        songs: Option<&MaimaiSongs>,
    ) -> Result<MaimaiScores> {
        let cached = self.cache.get();
        let Some(catalog) = songs.or(cached.as_deref()) else {
            warn!("No song catalog available, using provider best scores");
            return self.best_scores(identifier, provider);
        };

        let all = provider.get_scores_all(identifier)?;
        if !all.iter().all(Score::is_complete) {
            warn!("Provider returned scores without rating data, using provider best scores");
            return self.best_scores(identifier, provider);
        }
        MaimaiScores::from_all(all, catalog, self.current_version)
    }

    fn best_scores(&self, identifier: &PlayerIdentifier, provider: &dyn ScoreProvider) -> Result<MaimaiScores> {
        let best = provider.get_scores_best(identifier)?;
        Ok(MaimaiScores::from_best(best.b35, best.b15))
    }

    /// Plate progress of a player. The plate name is checked before any
    /// request is made.
    ///
    /// Unlike [`MaimaiClient::scores`] the catalog is always passed in: the
    /// returned plate objects borrow songs from it, so it must outlive the
    /// result. To use the cached catalog, hold on to [`MaimaiClient::cached_songs`]
    /// and pass a reference to it.
    pub fn plates<'a>(
        &self,
        identifier: &PlayerIdentifier,
        plate: &str,
        provider: &dyn ScoreProvider,
        songs: &'a MaimaiSongs,
    ) -> Result<MaimaiPlates<'a>> {
        PlateSpec::parse(plate)?;
        if songs.is_empty() {
            return Err(MaimaiError::CatalogUnavailable);
        }
        let scores = provider.get_scores_all(identifier)?;
        MaimaiPlates::new(&scores, plate, songs)
    }
}
