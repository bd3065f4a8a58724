use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use tokio::sync::Mutex;
use trendcli::{
    cli, config, error,
    types::{RecommendationCriteria, TimeRange, Token},
    utils,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Show your top tracks over time
    Top(TopOptions),

    /// List your playlists
    Playlists(PlaylistsOptions),

    /// List available recommendation genre seeds
    Genres,

    /// Show Spotify's featured playlists
    Featured,

    #[clap(about = "Recommend tracks from genre seeds and audio-feature targets")]
    Recommend(RecommendOptions),

    /// Clear the stored session
    Logout,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct TopOptions {
    /// Time range to show (short_term, medium_term, long_term);
    /// omit for the cross-range comparison table
    #[clap(long, value_parser = utils::parse_time_range)]
    pub time_range: Option<TimeRange>,
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistsOptions {
    /// Filter playlists by name
    #[clap(long)]
    pub search: Option<String>,

    /// Also fetch each playlist's tracks (first page per playlist)
    #[clap(long)]
    pub tracks: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct RecommendOptions {
    /// Genre seed; can be repeated (see trendcli genres)
    #[clap(long = "genre")]
    pub genres: Vec<String>,

    /// Track ID seed; can be repeated
    #[clap(long = "seed-track")]
    pub seed_tracks: Vec<String>,

    /// Number of tracks to recommend
    #[clap(long)]
    pub limit: Option<u32>,

    /// Target acousticness (0.0 - 1.0)
    #[clap(long)]
    pub acousticness: Option<f32>,

    /// Target danceability (0.0 - 1.0)
    #[clap(long)]
    pub danceability: Option<f32>,

    /// Target energy (0.0 - 1.0)
    #[clap(long)]
    pub energy: Option<f32>,

    /// Target instrumentalness (0.0 - 1.0)
    #[clap(long)]
    pub instrumentalness: Option<f32>,

    /// Target valence, i.e. musical positivity (0.0 - 1.0)
    #[clap(long)]
    pub valence: Option<f32>,

    /// Target tempo in BPM
    #[clap(long)]
    pub tempo: Option<f32>,

    /// Target popularity (0 - 100)
    #[clap(long)]
    pub popularity: Option<u32>,
}

impl From<RecommendOptions> for RecommendationCriteria {
    fn from(opt: RecommendOptions) -> Self {
        RecommendationCriteria {
            seed_genres: opt.genres,
            seed_tracks: opt.seed_tracks,
            limit: opt.limit,
            target_acousticness: opt.acousticness,
            target_danceability: opt.danceability,
            target_energy: opt.energy,
            target_instrumentalness: opt.instrumentalness,
            target_valence: opt.valence,
            target_tempo: opt.tempo,
            target_popularity: opt.popularity,
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let auth_result: Arc<Mutex<Option<Token>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&auth_result)).await;
        }
        Command::Top(opt) => cli::top(opt.time_range).await,
        Command::Playlists(opt) => cli::playlists(opt.search, opt.tracks).await,
        Command::Genres => cli::genres().await,
        Command::Featured => cli::featured().await,
        Command::Recommend(opt) => cli::recommend(opt.into()).await,
        Command::Logout => cli::logout().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
