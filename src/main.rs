use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use maimai_stats::config::{Config, load_config};
use maimai_stats::models::{PlayerIdentifier, Score, Song};
use maimai_stats::providers::{
    AliasProvider, FileProvider, HttpProvider, PlayerProvider, ScoreProvider, SongProvider,
};
use maimai_stats::songs::{BpmThresholds, SongFilter};
use maimai_stats::{MaimaiClient, MaimaiSongs};

#[derive(Parser)]
#[command(name = "maimai-stats")]
#[command(about = "Rating and plate progress for maimai players")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Look up songs in the catalog
    Songs {
        #[arg(long)]
        id: Option<u32>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        alias: Option<String>,
        #[arg(long)]
        artist: Option<String>,
        #[arg(long)]
        genre: Option<String>,
        #[arg(long, requires = "max_bpm")]
        min_bpm: Option<u32>,
        #[arg(long, requires = "min_bpm")]
        max_bpm: Option<u32>,
    },
    /// Show a player's rating with best-35 / best-15 scores
    Scores {
        #[command(flatten)]
        player: PlayerArgs,
    },
    /// Show progress towards a plate such as 真将 or 舞舞舞
    Plate {
        plate: String,
        #[command(flatten)]
        player: PlayerArgs,
        /// List every remaining chart instead of a summary
        #[arg(short = 'v', long = "verbose")]
        verbose: bool,
    },
}

#[derive(clap::Args)]
struct PlayerArgs {
    #[arg(short = 'u', long = "username")]
    username: Option<String>,
    #[arg(short = 'f', long = "friend-code")]
    friend_code: Option<u64>,
    #[arg(long = "qq")]
    qq: Option<u64>,
}

impl PlayerArgs {
    fn identifier(&self) -> PlayerIdentifier {
        PlayerIdentifier {
            username: self.username.clone(),
            friend_code: self.friend_code,
            qq: self.qq,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    // Load configuration from .env
    let config = load_config()?;
    let client = MaimaiClient::new(config.current_version);
    log::info!(
        "Reading from {} (current version {})",
        describe_source(&config),
        config.current_version
    );

    match &config.data_dir {
        Some(dir) => run(&args.command, &client, &FileProvider::new(dir)),
        None => {
            let base_url = config.base_url.as_deref().unwrap_or_default();
            run(&args.command, &client, &HttpProvider::new(base_url, config.token.clone()))
        }
    }
}

fn run<P>(command: &Command, client: &MaimaiClient, provider: &P) -> Result<()>
where
    P: SongProvider + AliasProvider + PlayerProvider + ScoreProvider,
{
    let songs = client
        .songs(provider, Some(provider as &dyn AliasProvider))
        .context("Failed to load the song catalog")?;

    match command {
        Command::Songs {
            id,
            title,
            alias,
            artist,
            genre,
            min_bpm,
            max_bpm,
        } => {
            let found: Vec<&Song> = if let Some(id) = id {
                songs.by_id(*id).into_iter().collect()
            } else if let Some(alias) = alias {
                songs.by_alias(alias).into_iter().collect()
            } else {
                let filter = SongFilter {
                    title: title.clone(),
                    artist: artist.clone(),
                    genre: genre.clone(),
                    version: None,
                    bpm_thresholds: min_bpm
                        .zip(*max_bpm)
                        .map(|(min_bpm, max_bpm)| BpmThresholds { min_bpm, max_bpm }),
                };
                songs.filter_by(&filter)
            };

            println!("Found {} songs", found.len());
            for song in found {
                print_song(song);
            }
        }
        Command::Scores { player } => {
            let identifier = player.identifier();
            let profile = client.players(&identifier, provider)?;
            let scores = client
                .scores(&identifier, provider, Some(&*songs))
                .context("Failed to compute best scores")?;

            println!("{} | Rating: {}", profile.name, scores.rating());
            println!("\nBest 35 ({}):", scores.rating_b35());
            print_scores(scores.scores_b35(), &songs);
            println!("\nBest 15 ({}):", scores.rating_b15());
            print_scores(scores.scores_b15(), &songs);
        }
        Command::Plate {
            plate,
            player,
            verbose,
        } => {
            let plates = client.plates(&player.identifier(), plate, provider, &songs)?;

            println!("{plate}");
            println!("{}", "=".repeat(plate.chars().count() * 2));
            println!(
                "Played: {} | Cleared: {} | Remaining: {} | Total: {}",
                plates.played_num(),
                plates.cleared_num(),
                plates.remained_num(),
                plates.all_num()
            );

            if plates.is_complete() {
                println!("\nPlate complete!");
            } else if *verbose {
                for object in plates.remained() {
                    let levels: Vec<String> = object.levels.iter().map(|l| format!("{l:?}")).collect();
                    println!("  [{}] {} - {}", object.song.id, object.song.title, levels.join(", "));
                }
            }
        }
    }

    Ok(())
}

fn print_song(song: &Song) {
    println!("- [{}] {} by {}", song.id, song.title, song.artist);
    println!(
        "  Genre: {} | BPM: {} | Version: {}",
        song.genre, song.bpm, song.version
    );
    if !song.aliases.is_empty() {
        println!("  Aliases: {}", song.aliases.join(", "));
    }
}

fn print_scores(scores: &[Score], songs: &MaimaiSongs) {
    for (i, score) in scores.iter().enumerate() {
        let title = songs
            .by_id(score.id)
            .map(|s| s.title.as_str())
            .or(score.song_name.as_deref())
            .unwrap_or("Unknown");
        println!(
            "  {:>2}. {} [{:?} {:?} {}] {:.4}% | {}",
            i + 1,
            title,
            score.song_type,
            score.level_index,
            score.level,
            score.achievements.unwrap_or(0.0),
            score.rating_points()
        );
    }
}

fn describe_source(config: &Config) -> String {
    match (&config.data_dir, &config.base_url) {
        (Some(dir), _) => format!("files in {}", dir.display()),
        (None, Some(url)) => url.clone(),
        (None, None) => "nothing".to_string(),
    }
}
