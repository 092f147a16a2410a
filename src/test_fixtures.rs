// Shared builders for songs and scores used across the unit test modules

use crate::enums::{LevelIndex, RateType, SongType};
use crate::models::{Score, Song, SongDifficulties, SongDifficulty};

const LEVELS: [(LevelIndex, &str, f64); 4] = [
    (LevelIndex::Basic, "3", 3.0),
    (LevelIndex::Advanced, "7", 7.0),
    (LevelIndex::Expert, "10", 10.0),
    (LevelIndex::Master, "12+", 12.7),
];

fn chart_group(song_type: SongType, version: u32) -> Vec<SongDifficulty> {
    LEVELS
        .iter()
        .map(|(level_index, level, level_value)| SongDifficulty {
            song_type,
            level: level.to_string(),
            level_value: *level_value,
            level_index: *level_index,
            note_designer: None,
            version,
        })
        .collect()
}

/// Song with a BASIC..MASTER standard chart group stamped `version`
pub fn create_test_song(id: u32, title: &str, version: u32) -> Song {
    Song {
        id,
        title: title.to_string(),
        artist: "Test Artist".to_string(),
        genre: "maimai".to_string(),
        bpm: 150,
        version,
        aliases: Vec::new(),
        difficulties: SongDifficulties {
            standard: chart_group(SongType::Standard, version),
            dx: Vec::new(),
        },
    }
}

/// Song with only a DX chart group stamped `version`
pub fn create_test_dx_song(id: u32, title: &str, version: u32) -> Song {
    let mut song = create_test_song(id, title, version);
    song.difficulties.dx = chart_group(SongType::Dx, version);
    song.difficulties.standard.clear();
    song
}

pub fn with_remaster(mut song: Song, song_type: SongType, version: u32) -> Song {
    let chart = SongDifficulty {
        song_type,
        level: "13".to_string(),
        level_value: 13.2,
        level_index: LevelIndex::ReMaster,
        note_designer: None,
        version,
    };
    match song_type {
        SongType::Dx => song.difficulties.dx.push(chart),
        _ => song.difficulties.standard.push(chart),
    }
    song
}

/// Complete score with rank derived from the achievement
pub fn create_test_score(
    id: u32,
    song_type: SongType,
    level_index: LevelIndex,
    achievements: f64,
    dx_rating: f64,
) -> Score {
    Score {
        id,
        song_name: None,
        level: "12+".to_string(),
        level_index,
        achievements: Some(achievements),
        fc: None,
        fs: None,
        dx_score: Some(1500),
        dx_rating: Some(dx_rating),
        rate: RateType::from_achievement(achievements),
        song_type,
    }
}
