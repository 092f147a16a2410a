use super::spec::PlateSpec;
use crate::enums::{LevelIndex, SongType};
use crate::error::Result;
use crate::models::{Score, Song};
use crate::scores::distinct;
use crate::songs::{MaimaiSongs, SONG_ID_MODULUS};
use log::debug;
use std::cell::OnceCell;
use std::collections::{BTreeSet, HashMap};

/// A song together with the plate-relevant levels and scores of one view
#[derive(Debug, Clone, PartialEq)]
pub struct PlateObject<'a> {
    pub song: &'a Song,
    pub levels: Vec<LevelIndex>,
    pub scores: Vec<Score>,
}

/// A catalog song the plate covers
#[derive(Debug)]
struct ScopedSong<'a> {
    song: &'a Song,
    chart_types: Vec<SongType>,
    levels: BTreeSet<LevelIndex>,
}

/// Progress of one player towards one plate
#[derive(Debug)]
pub struct MaimaiPlates<'a> {
    spec: PlateSpec,
    songs: Vec<ScopedSong<'a>>,
    scores: Vec<Score>,
    played: OnceCell<Vec<PlateObject<'a>>>,
    cleared: OnceCell<Vec<PlateObject<'a>>>,
    remained: OnceCell<Vec<PlateObject<'a>>>,
    all: OnceCell<Vec<PlateObject<'a>>>,
}

impl<'a> MaimaiPlates<'a> {
    /// Scope `scores` to the songs and charts of `plate`.
    ///
    /// A chart group (standard or DX) of a song is in scope when any of its
    /// charts carries a stamp from one of the plate's eras. Re:MASTER charts are
    /// only in scope for the 舞 and 霸 plates.
    ///
    /// Levels are tracked per song, not per chart: when both chart groups of
    /// a song are in scope their level indices are merged, so meeting the
    /// goal on one group's MASTER also satisfies the other group's MASTER.
    pub fn new(scores: &[Score], plate: &str, songs: &'a MaimaiSongs) -> Result<Self> {
        let spec = PlateSpec::parse(plate)?;

        let scoped: Vec<ScopedSong<'a>> = songs
            .songs()
            .filter_map(|song| Self::scope_song(&spec, song))
            .collect();

        let positions: HashMap<u32, usize> = scoped
            .iter()
            .enumerate()
            .map(|(index, s)| (s.song.id, index))
            .collect();

        let in_scope: Vec<Score> = scores
            .iter()
            .filter(|score| {
                positions
                    .get(&(score.id % SONG_ID_MODULUS))
                    .map(|&index| &scoped[index])
                    .is_some_and(|s| {
                        s.chart_types.contains(&score.song_type) && s.levels.contains(&score.level_index)
                    })
            })
            .cloned()
            .collect();
        let plate_scores = distinct(&in_scope);

        debug!(
            "Plate {}: {} songs in scope, {} of {} scores count",
            plate,
            scoped.len(),
            plate_scores.len(),
            scores.len()
        );

        Ok(MaimaiPlates {
            spec,
            songs: scoped,
            scores: plate_scores,
            played: OnceCell::new(),
            cleared: OnceCell::new(),
            remained: OnceCell::new(),
            all: OnceCell::new(),
        })
    }

    fn scope_song(spec: &PlateSpec, song: &'a Song) -> Option<ScopedSong<'a>> {
        let mut chart_types = Vec::new();
        let mut levels = BTreeSet::new();

        for song_type in [SongType::Standard, SongType::Dx] {
            let group = song.difficulties.group(song_type);
            if !group.iter().any(|d| spec.covers(d.version)) {
                continue;
            }
            chart_types.push(song_type);
            levels.extend(
                group
                    .iter()
                    .map(|d| d.level_index)
                    .filter(|&level| !(spec.no_remaster && level == LevelIndex::ReMaster)),
            );
        }

        if levels.is_empty() {
            return None;
        }
        Some(ScopedSong {
            song,
            chart_types,
            levels,
        })
    }

    pub fn spec(&self) -> &PlateSpec {
        &self.spec
    }

    /// Best score per chart among the charts this plate covers
    pub fn scores(&self) -> &[Score] {
        &self.scores
    }

    pub fn no_remaster(&self) -> bool {
        self.spec.no_remaster
    }

    fn scores_by_song(&self) -> HashMap<u32, Vec<&Score>> {
        let mut grouped: HashMap<u32, Vec<&Score>> = HashMap::new();
        for score in &self.scores {
            grouped.entry(score.id % SONG_ID_MODULUS).or_default().push(score);
        }
        grouped
    }

    /// One object per scoped song, dropping songs left without levels
    fn build_view<F>(&self, classify: F) -> Vec<PlateObject<'a>>
    where
        F: Fn(&ScopedSong<'a>, &[&Score]) -> (BTreeSet<LevelIndex>, Vec<Score>),
    {
        let grouped = self.scores_by_song();
        self.songs
            .iter()
            .filter_map(|scoped| {
                let song_scores = grouped.get(&scoped.song.id).map(Vec::as_slice).unwrap_or(&[]);
                let (levels, scores) = classify(scoped, song_scores);
                (!levels.is_empty()).then(|| PlateObject {
                    song: scoped.song,
                    levels: levels.into_iter().collect(),
                    scores,
                })
            })
            .collect()
    }

    /// Levels the player has any score on
    pub fn played(&self) -> &[PlateObject<'a>] {
        self.played.get_or_init(|| {
            self.build_view(|_, scores| {
                let levels = scores.iter().map(|s| s.level_index).collect();
                (levels, scores.iter().map(|&s| s.clone()).collect())
            })
        })
    }

    /// Levels with a score meeting the plate goal
    pub fn cleared(&self) -> &[PlateObject<'a>] {
        let kind = self.spec.kind;
        self.cleared.get_or_init(|| {
            self.build_view(|_, scores| {
                let met: Vec<Score> = scores
                    .iter()
                    .filter(|s| kind.is_met_by(s))
                    .map(|&s| s.clone())
                    .collect();
                (met.iter().map(|s| s.level_index).collect(), met)
            })
        })
    }

    /// Levels still missing the plate goal, with the scores that fell short
    pub fn remained(&self) -> &[PlateObject<'a>] {
        let kind = self.spec.kind;
        self.remained.get_or_init(|| {
            self.build_view(|scoped, scores| {
                let met: BTreeSet<LevelIndex> = scores
                    .iter()
                    .filter(|s| kind.is_met_by(s))
                    .map(|s| s.level_index)
                    .collect();
                let levels: BTreeSet<LevelIndex> = scoped.levels.difference(&met).copied().collect();
                let short = scores
                    .iter()
                    .filter(|s| levels.contains(&s.level_index))
                    .map(|&s| s.clone())
                    .collect();
                (levels, short)
            })
        })
    }

    /// Every level the plate requires
    pub fn all(&self) -> &[PlateObject<'a>] {
        self.all
            .get_or_init(|| self.build_view(|scoped, _| (scoped.levels.clone(), Vec::new())))
    }

    fn count_levels(objects: &[PlateObject<'a>]) -> usize {
        objects.iter().map(|o| o.levels.len()).sum()
    }

    pub fn played_num(&self) -> usize {
        Self::count_levels(self.played())
    }

    pub fn cleared_num(&self) -> usize {
        Self::count_levels(self.cleared())
    }

    pub fn remained_num(&self) -> usize {
        Self::count_levels(self.remained())
    }

    pub fn all_num(&self) -> usize {
        Self::count_levels(self.all())
    }

    pub fn is_complete(&self) -> bool {
        self.remained_num() == 0
    }
}
