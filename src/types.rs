use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeRange {
    ShortTerm,
    MediumTerm,
    LongTerm,
}

impl TimeRange {
    pub const ALL: [TimeRange; 3] = [
        TimeRange::ShortTerm,
        TimeRange::MediumTerm,
        TimeRange::LongTerm,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::ShortTerm => "Short Term",
            TimeRange::MediumTerm => "Medium Term",
            TimeRange::LongTerm => "Long Term",
        }
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TimeRange::ShortTerm => "short_term",
            TimeRange::MediumTerm => "medium_term",
            TimeRange::LongTerm => "long_term",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub limit: u64,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub uri: String,
    pub preview_url: Option<String>,
    pub artists: Vec<TrackArtist>,
    pub album: Option<Album>,
    pub popularity: Option<u32>,
}

impl Track {
    pub fn primary_artist(&self) -> &str {
        self.artists.first().map(|a| a.name.as_str()).unwrap_or("-")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub name: String,
    pub release_date: String,
    pub images: Vec<AlbumImage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumImage {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub public: Option<bool>,
    pub collaborative: bool,
    pub snapshot_id: String,
    pub owner: PlaylistOwner,
    pub tracks: PlaylistTracksRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistOwner {
    pub id: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksRef {
    pub href: String,
    pub total: u64,
}

// Playlist items wrap the track; local files come back with a null track.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistWithTracks {
    pub playlist: Playlist,
    pub tracks: Page<PlaylistItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub display_name: Option<String>,
}

impl UserProfile {
    pub fn first_name(&self) -> &str {
        self.display_name
            .as_deref()
            .and_then(|n| n.split_whitespace().next())
            .unwrap_or("you")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreSeedsResponse {
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturedPlaylistsResponse {
    pub message: Option<String>,
    pub playlists: Page<Playlist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub tracks: Vec<Track>,
    pub seeds: Vec<RecommendationSeed>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationSeed {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default)]
pub struct RecommendationCriteria {
    pub seed_genres: Vec<String>,
    pub seed_tracks: Vec<String>,
    pub limit: Option<u32>,
    pub target_acousticness: Option<f32>,
    pub target_danceability: Option<f32>,
    pub target_energy: Option<f32>,
    pub target_instrumentalness: Option<f32>,
    pub target_valence: Option<f32>,
    pub target_tempo: Option<f32>,
    pub target_popularity: Option<u32>,
}

impl RecommendationCriteria {
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();

        if !self.seed_genres.is_empty() {
            pairs.push(("seed_genres".to_string(), self.seed_genres.join(",")));
        }
        if !self.seed_tracks.is_empty() {
            pairs.push(("seed_tracks".to_string(), self.seed_tracks.join(",")));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }

        let features = [
            ("target_acousticness", self.target_acousticness),
            ("target_danceability", self.target_danceability),
            ("target_energy", self.target_energy),
            ("target_instrumentalness", self.target_instrumentalness),
            ("target_valence", self.target_valence),
            ("target_tempo", self.target_tempo),
        ];
        for (key, value) in features {
            if let Some(v) = value {
                pairs.push((key.to_string(), v.to_string()));
            }
        }
        if let Some(pop) = self.target_popularity {
            pairs.push(("target_popularity".to_string(), pop.to_string()));
        }

        pairs
    }
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub position: usize,
    pub name: String,
    pub artist: String,
    pub year: String,
}

#[derive(Tabled)]
pub struct TrendTableRow {
    pub name: String,
    pub artist: String,
    pub year: String,
    #[tabled(rename = "Short Term")]
    pub short_term: String,
    #[tabled(rename = "Medium Term")]
    pub medium_term: String,
    #[tabled(rename = "Long Term")]
    pub long_term: String,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub name: String,
    pub owner: String,
    pub tracks: u64,
    pub public: String,
}

#[derive(Tabled)]
pub struct RecommendationTableRow {
    pub name: String,
    pub artist: String,
    pub album: String,
}
