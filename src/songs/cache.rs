use super::MaimaiSongs;
use std::sync::{Arc, Mutex};

/// Holds the most recently built catalog. Last write wins and entries never
/// expire; callers that need a specific catalog pass it explicitly.
#[derive(Debug, Default)]
pub struct SongCache {
    latest: Mutex<Option<Arc<MaimaiSongs>>>,
}

impl SongCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self, songs: Arc<MaimaiSongs>) {
        let mut latest = self.latest.lock().unwrap_or_else(|e| e.into_inner());
        *latest = Some(songs);
    }

    pub fn get(&self) -> Option<Arc<MaimaiSongs>> {
        self.latest
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn clear(&self) {
        *self.latest.lock().unwrap_or_else(|e| e.into_inner()) = None;
    }
}
