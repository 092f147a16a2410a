pub mod cache;
pub mod filters;


pub use cache::SongCache;
pub use filters::{BpmThresholds, SongFilter};

use crate::models::{Song, SongAlias};
use log::{debug, warn};
use std::collections::HashMap;

/// Provider song ids above this value encode chart variants and wrap back into the catalog range
pub const SONG_ID_MODULUS: u32 = 10000;

/// In-memory index over the song list and alias table
#[derive(Debug, Clone, Default)]
pub struct MaimaiSongs {
    songs: Vec<Song>,
    by_id: HashMap<u32, usize>,
    by_alias: HashMap<String, u32>,
}

impl MaimaiSongs {
    /// Build the catalog. Song ids are stored modulo [`SONG_ID_MODULUS`].
    /// Aliases for unknown song ids are kept out of the lookup table; an
    /// alias string claimed by two songs moves to the song that claimed it
    /// last and is dropped from the earlier song's alias list.
    pub fn new(songs: Vec<Song>, aliases: Option<Vec<SongAlias>>) -> Self {
        let mut catalog = MaimaiSongs {
            songs: Vec::with_capacity(songs.len()),
            by_id: HashMap::with_capacity(songs.len()),
            by_alias: HashMap::new(),
        };

        for mut song in songs {
            song.id %= SONG_ID_MODULUS;
            match catalog.by_id.get(&song.id) {
                Some(&index) => {
                    warn!("Duplicate song id {} in song list, keeping the later entry", song.id);
                    catalog.songs[index] = song;
                }
                None => {
                    catalog.by_id.insert(song.id, catalog.songs.len());
                    catalog.songs.push(song);
                }
            }
        }

        let mut orphans = 0;
        let mut owned: HashMap<u32, Vec<String>> = HashMap::new();
        for alias in aliases.unwrap_or_default() {
            let song_id = alias.song_id % SONG_ID_MODULUS;
            if !catalog.by_id.contains_key(&song_id) {
                orphans += 1;
                continue;
            }
            for entry in alias.aliases {
                match catalog.by_alias.insert(entry.clone(), song_id) {
                    Some(previous) if previous != song_id => {
                        warn!("Alias '{}' moved from song {} to song {}", entry, previous, song_id);
                        if let Some(list) = owned.get_mut(&previous) {
                            list.retain(|a| a != &entry);
                        }
                    }
                    Some(_) => continue,
                    None => {}
                }
                owned.entry(song_id).or_default().push(entry);
            }
        }
        for (song_id, list) in owned {
            if let Some(&index) = catalog.by_id.get(&song_id) {
                catalog.songs[index].aliases = list;
            }
        }

        debug!(
            "Built song catalog: {} songs, {} alias entries, {} orphan alias groups skipped",
            catalog.songs.len(),
            catalog.by_alias.len(),
            orphans
        );
        catalog
    }

    pub fn songs(&self) -> impl Iterator<Item = &Song> {
        self.songs.iter()
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Get a song by id. Ids at or above [`SONG_ID_MODULUS`] are reduced
    /// modulo it first, so provider ids for DX charts resolve directly.
    pub fn by_id(&self, id: u32) -> Option<&Song> {
        self.by_id
            .get(&(id % SONG_ID_MODULUS))
            .map(|&index| &self.songs[index])
    }

    pub fn by_title(&self, title: &str) -> Option<&Song> {
        self.songs.iter().find(|song| song.title == title)
    }

    pub fn by_alias(&self, alias: &str) -> Option<&Song> {
        self.by_alias.get(alias).and_then(|&id| self.by_id(id))
    }

    /// Case-sensitive artist match
    pub fn by_artist(&self, artist: &str) -> Vec<&Song> {
        self.filter(|song| song.artist == artist)
    }

    /// Case-sensitive genre match
    pub fn by_genre(&self, genre: &str) -> Vec<&Song> {
        self.filter(|song| song.genre == genre)
    }

    /// Songs with `minimum <= bpm <= maximum`
    pub fn by_bpm(&self, minimum: u32, maximum: u32) -> Vec<&Song> {
        self.filter(|song| (minimum..=maximum).contains(&song.bpm))
    }

    pub fn filter<P>(&self, predicate: P) -> Vec<&Song>
    where
        P: Fn(&Song) -> bool,
    {
        self.songs.iter().filter(|song| predicate(song)).collect()
    }

    pub fn filter_by(&self, filter: &SongFilter) -> Vec<&Song> {
        self.filter(|song| filter.matches(song))
    }
}
