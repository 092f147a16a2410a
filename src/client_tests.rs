// Facade behaviour against mocked providers

#[cfg(test)]
mod tests {
    use crate::client::MaimaiClient;
    use crate::enums::{LevelIndex, SongType};
    use crate::error::MaimaiError;
    use crate::models::{Player, PlayerIdentifier, SongAlias};
    use crate::providers::{AliasProvider, BestScores, MockAliasProvider, MockPlayerProvider, MockScoreProvider, MockSongProvider};
    use crate::songs::MaimaiSongs;
    use crate::test_fixtures::{create_test_score, create_test_song};

    const CURRENT: u32 = 24000;

    fn mock_song_provider() -> MockSongProvider {
        let mut provider = MockSongProvider::new();
        provider.expect_get_songs().times(1).returning(|| {
            Ok(vec![
                create_test_song(834, "Pandora Paradoxxx", 18000),
                create_test_song(101, "New", CURRENT),
            ])
        });
        provider
    }

    fn mock_alias_provider() -> MockAliasProvider {
        let mut provider = MockAliasProvider::new();
        provider.expect_get_aliases().times(1).returning(|| {
            Ok(vec![SongAlias { song_id: 834, aliases: vec!["华丽".to_string()] }])
        });
        provider
    }

    fn provider_best() -> BestScores {
        BestScores {
            b35: vec![create_test_score(834, SongType::Standard, LevelIndex::Master, 99.0, 111.0)],
            b15: vec![],
        }
    }

    #[test]
    fn test_songs_builds_and_caches_catalog() {
        let client = MaimaiClient::new(CURRENT);
        assert!(client.cached_songs().is_none());

        let songs = client
            .songs(&mock_song_provider(), Some(&mock_alias_provider() as &dyn AliasProvider))
            .unwrap();

        assert_eq!(songs.len(), 2);
        assert_eq!(songs.by_alias("华丽").map(|s| s.id), Some(834));
        assert_eq!(client.cached_songs().map(|c| c.len()), Some(2));
    }

    #[test]
    fn test_songs_without_alias_provider() {
        let client = MaimaiClient::new(CURRENT);

        let songs = client.songs(&mock_song_provider(), None).unwrap();

        assert!(songs.by_alias("华丽").is_none());
        assert!(songs.by_id(834).unwrap().aliases.is_empty());
    }

    #[test]
    fn test_scores_ranks_complete_listing_locally() {
        let client = MaimaiClient::new(CURRENT);
        let songs = client.songs(&mock_song_provider(), None).unwrap();
        let songs = songs.as_ref();

        let mut provider = MockScoreProvider::new();
        provider.expect_get_scores_all().times(1).returning(|_| {
            Ok(vec![
                create_test_score(834, SongType::Standard, LevelIndex::Master, 99.0, 250.0),
                create_test_score(101, SongType::Standard, LevelIndex::Master, 100.5, 320.0),
            ])
        });
        provider.expect_get_scores_best().never();

        let scores = client
            .scores(&PlayerIdentifier::username("turou"), &provider, Some(songs))
            .unwrap();

        assert_eq!(scores.rating_b35(), 250);
        assert_eq!(scores.rating_b15(), 320);
        assert_eq!(scores.rating(), 570);
    }

    #[test]
    fn test_scores_uses_cached_catalog() {
        let client = MaimaiClient::new(CURRENT);
        client.songs(&mock_song_provider(), None).unwrap();

        let mut provider = MockScoreProvider::new();
        provider.expect_get_scores_all().times(1).returning(|_| {
            Ok(vec![create_test_score(10101, SongType::Dx, LevelIndex::Master, 100.5, 320.0)])
        });

        let scores = client
            .scores(&PlayerIdentifier::friend_code(1), &provider, None)
            .unwrap();

        assert_eq!(scores.scores_b15().len(), 1);
    }

    #[test]
    fn test_scores_falls_back_on_incomplete_listing() {
        let client = MaimaiClient::new(CURRENT);
        let songs = client.songs(&mock_song_provider(), None).unwrap();
        let songs = songs.as_ref();

        let mut provider = MockScoreProvider::new();
        provider.expect_get_scores_all().times(1).returning(|_| {
            let mut incomplete = create_test_score(834, SongType::Standard, LevelIndex::Master, 99.0, 250.0);
            incomplete.dx_rating = None;
            Ok(vec![incomplete])
        });
        provider.expect_get_scores_best().times(1).returning(|_| Ok(provider_best()));

        let scores = client
            .scores(&PlayerIdentifier::username("turou"), &provider, Some(songs))
            .unwrap();

        assert_eq!(scores.rating(), 111);
    }

    #[test]
    fn test_scores_without_catalog_uses_provider_best() {
        let client = MaimaiClient::new(CURRENT);

        let mut provider = MockScoreProvider::new();
        provider.expect_get_scores_all().never();
        provider.expect_get_scores_best().times(1).returning(|_| Ok(provider_best()));

        let scores = client
            .scores(&PlayerIdentifier::username("turou"), &provider, None)
            .unwrap();

        assert_eq!(scores.scores_b35().len(), 1);
    }

    #[test]
    fn test_scores_propagates_missing_song() {
        let client = MaimaiClient::new(CURRENT);
        let songs = MaimaiSongs::new(vec![create_test_song(1, "Only", 10000)], None);

        let mut provider = MockScoreProvider::new();
        provider.expect_get_scores_all().returning(|_| {
            Ok(vec![create_test_score(834, SongType::Standard, LevelIndex::Master, 99.0, 250.0)])
        });

        let result = client.scores(&PlayerIdentifier::username("turou"), &provider, Some(&songs));

        assert!(matches!(result, Err(MaimaiError::MissingSong(834))));
    }

    #[test]
    fn test_plates_rejects_invalid_plate_without_fetching() {
        let client = MaimaiClient::new(CURRENT);
        let songs = MaimaiSongs::new(vec![create_test_song(1, "Only", 10000)], None);

        let mut provider = MockScoreProvider::new();
        provider.expect_get_scores_all().never();

        let result = client.plates(&PlayerIdentifier::username("turou"), "真王", &provider, &songs);

        assert!(matches!(result, Err(MaimaiError::InvalidPlate(_))));
    }

    #[test]
    fn test_plates_requires_catalog() {
        let client = MaimaiClient::new(CURRENT);
        let songs = MaimaiSongs::default();
        let provider = MockScoreProvider::new();

        let result = client.plates(&PlayerIdentifier::username("turou"), "真将", &provider, &songs);

        assert!(matches!(result, Err(MaimaiError::CatalogUnavailable)));
    }

    #[test]
    fn test_plates_classifies_fetched_scores() {
        let client = MaimaiClient::new(CURRENT);
        let songs = MaimaiSongs::new(
            vec![create_test_song(1, "First", 10000), create_test_song(2, "Second", 11000)],
            None,
        );

        let mut provider = MockScoreProvider::new();
        provider.expect_get_scores_all().times(1).returning(|_| {
            Ok(vec![
                create_test_score(1, SongType::Standard, LevelIndex::Master, 100.0, 250.0),
                create_test_score(2, SongType::Standard, LevelIndex::Master, 62.0, 90.0),
            ])
        });

        let plates = client
            .plates(&PlayerIdentifier::username("turou"), "真将", &provider, &songs)
            .unwrap();

        assert_eq!(plates.cleared_num(), 1);
        assert_eq!(plates.remained_num(), 7);
        assert_eq!(plates.all_num(), 8);
    }

    #[test]
    fn test_plates_over_cached_catalog() {
        let client = MaimaiClient::new(CURRENT);
        client.songs(&mock_song_provider(), None).unwrap();

        let mut provider = MockScoreProvider::new();
        provider.expect_get_scores_all().times(1).returning(|_| {
            Ok(vec![create_test_score(101, SongType::Standard, LevelIndex::Master, 100.2, 250.0)])
        });

        let cached = client.cached_songs().unwrap();
        let plates = client
            .plates(&PlayerIdentifier::username("turou"), "双将", &provider, &cached)
            .unwrap();

        assert_eq!(plates.all_num(), 4);
        assert_eq!(plates.cleared_num(), 1);
    }

    #[test]
    fn test_players_passes_identifier_through() {
        let client = MaimaiClient::new(CURRENT);
        let mut provider = MockPlayerProvider::new();
        provider
            .expect_get_player()
            .withf(|identifier| identifier.friend_code == Some(664994421382429))
            .returning(|_| Ok(Player { name: "TUROU".to_string(), rating: 15000 }));

        let player = client
            .players(&PlayerIdentifier::friend_code(664994421382429), &provider)
            .unwrap();

        assert!(player.rating > 10000);
    }
}
