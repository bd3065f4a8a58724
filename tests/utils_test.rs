use trendcli::management::TokenManager;
use trendcli::spotify::SpotifyClient;
use trendcli::spotify::auth::build_authentication_url;
use trendcli::spotify::pages::expected_page_count;
use trendcli::types::{
    Album, RecommendationCriteria, TimeRange, Token, Track, TrackArtist, UserProfile,
};
use trendcli::utils::*;

// Helper function to create a test track
fn create_test_track(id: &str, name: &str, artist: &str, year: &str) -> Track {
    Track {
        id: id.to_string(),
        name: name.to_string(),
        uri: format!("spotify:track:{}", id),
        preview_url: None,
        artists: vec![TrackArtist {
            id: format!("{}_artist_id", id),
            name: artist.to_string(),
        }],
        album: Some(Album {
            id: format!("{}_album_id", id),
            name: format!("{} Album", name),
            release_date: format!("{}-06-01", year),
            images: Vec::new(),
        }),
        popularity: Some(50),
    }
}

fn create_test_token(value: &str) -> Token {
    Token {
        access_token: value.to_string(),
        expires_in: 3600,
        obtained_at: 0,
    }
}

#[test]
fn test_parse_token_fragment() {
    let fragment = "access_token=BQCabc123&token_type=Bearer&expires_in=7200";
    let token = parse_token_fragment(fragment).unwrap();
    assert_eq!(token.access_token, "BQCabc123");
    assert_eq!(token.expires_in, 7200);

    // A leading '#' is tolerated
    let token = parse_token_fragment("#access_token=xyz&expires_in=60").unwrap();
    assert_eq!(token.access_token, "xyz");
    assert_eq!(token.expires_in, 60);

    // expires_in defaults when absent or unparsable
    let token = parse_token_fragment("access_token=xyz").unwrap();
    assert_eq!(token.expires_in, 3600);
    let token = parse_token_fragment("access_token=xyz&expires_in=soon").unwrap();
    assert_eq!(token.expires_in, 3600);
}

#[test]
fn test_parse_token_fragment_missing_token() {
    // No access_token parameter at all
    assert!(parse_token_fragment("token_type=Bearer&expires_in=3600").is_none());

    // Empty value counts as absent
    assert!(parse_token_fragment("access_token=&token_type=Bearer").is_none());

    // Empty fragment
    assert!(parse_token_fragment("").is_none());
}

#[test]
fn test_parse_time_range() {
    assert_eq!(parse_time_range("short_term").unwrap(), TimeRange::ShortTerm);
    assert_eq!(parse_time_range("medium_term").unwrap(), TimeRange::MediumTerm);
    assert_eq!(parse_time_range("long_term").unwrap(), TimeRange::LongTerm);

    // Shorthand, hyphens and case are accepted
    assert_eq!(parse_time_range("short").unwrap(), TimeRange::ShortTerm);
    assert_eq!(parse_time_range("LONG-TERM").unwrap(), TimeRange::LongTerm);
    assert_eq!(parse_time_range(" medium ").unwrap(), TimeRange::MediumTerm);

    let result = parse_time_range("fortnight");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("invalid value 'fortnight'"));
}

#[test]
fn test_time_range_display() {
    assert_eq!(TimeRange::ShortTerm.to_string(), "short_term");
    assert_eq!(TimeRange::MediumTerm.to_string(), "medium_term");
    assert_eq!(TimeRange::LongTerm.to_string(), "long_term");
    assert_eq!(TimeRange::ShortTerm.label(), "Short Term");
}

#[test]
fn test_release_year() {
    let track = create_test_track("id1", "Song", "Artist", "2019");
    assert_eq!(release_year(&track), "2019");

    let mut no_album = create_test_track("id2", "Song", "Artist", "2019");
    no_album.album = None;
    assert_eq!(release_year(&no_album), "-");
}

#[test]
fn test_build_trend_rows() {
    let a = create_test_track("a", "Track A", "Artist A", "2020");
    let b = create_test_track("b", "Track B", "Artist B", "2021");
    let c = create_test_track("c", "Track C", "Artist C", "2022");

    // Ranges deliberately out of display order; rows must merge by range
    // key, not by position in this list.
    let ranked = vec![
        (TimeRange::LongTerm, vec![b.clone(), a.clone()]),
        (TimeRange::ShortTerm, vec![a.clone(), b.clone(), c.clone()]),
    ];

    let rows = build_trend_rows(&ranked);

    // Deduplicated: a and b appear once even though both chart twice
    assert_eq!(rows.len(), 3);

    // First occurrence order: long_term list first in the input
    assert_eq!(rows[0].name, "Track B");
    assert_eq!(rows[0].short_term, "2");
    assert_eq!(rows[0].medium_term, "-");
    assert_eq!(rows[0].long_term, "1");

    assert_eq!(rows[1].name, "Track A");
    assert_eq!(rows[1].short_term, "1");
    assert_eq!(rows[1].long_term, "2");

    // c only charts short-term
    assert_eq!(rows[2].name, "Track C");
    assert_eq!(rows[2].short_term, "3");
    assert_eq!(rows[2].medium_term, "-");
    assert_eq!(rows[2].long_term, "-");

    assert_eq!(rows[0].artist, "Artist B");
    assert_eq!(rows[0].year, "2021");
}

#[test]
fn test_build_authentication_url() {
    unsafe {
        std::env::set_var("SPOTIFY_API_AUTH_URL", "https://accounts.spotify.com/authorize");
        std::env::set_var("SPOTIFY_API_AUTH_CLIENT_ID", "test-client-id");
    }

    let url = build_authentication_url("https://app/callback", &["scope-a", "scope-b"]);

    assert!(url.starts_with("https://accounts.spotify.com/authorize?"));
    assert!(url.contains("client_id=test-client-id"));
    assert!(url.contains("response_type=token"));
    assert!(url.contains("redirect_uri=https://app/callback"));
    assert!(url.contains("scope=scope-a scope-b"));

    // Each parameter appears exactly once
    assert_eq!(url.matches("client_id=").count(), 1);
    assert_eq!(url.matches("response_type=").count(), 1);
    assert_eq!(url.matches("redirect_uri=").count(), 1);
    assert_eq!(url.matches("scope=").count(), 1);
}

#[test]
fn test_token_manager_apply_overrides_client() {
    // The stored token is authoritative over any in-memory value
    let mut client = SpotifyClient::with_token("stale-in-memory");
    let manager = TokenManager::new(create_test_token("fresh-from-storage"));

    let applied = manager.apply(&mut client);

    assert_eq!(applied.access_token, "fresh-from-storage");
    assert_eq!(client.access_token(), Some("fresh-from-storage"));
}

#[test]
fn test_clear_access_token() {
    let mut client = SpotifyClient::with_token("some-token");
    assert_eq!(client.access_token(), Some("some-token"));

    client.clear_access_token();
    assert_eq!(client.access_token(), None);
}

#[test]
fn test_token_expiry() {
    // obtained_at = 0 puts the expiry far in the past
    let expired = TokenManager::new(create_test_token("old"));
    assert!(expired.is_expired());

    let fresh = TokenManager::new(Token {
        access_token: "new".to_string(),
        expires_in: 3600,
        obtained_at: chrono::Utc::now().timestamp() as u64,
    });
    assert!(!fresh.is_expired());
}

#[test]
fn test_expected_page_count() {
    assert_eq!(expected_page_count(100, 50), 2);
    assert_eq!(expected_page_count(5, 50), 1); // rounds to 0, clamped to 1
    assert_eq!(expected_page_count(120, 50), 2); // 2.4 rounds down
    assert_eq!(expected_page_count(130, 50), 3); // 2.6 rounds up
    assert_eq!(expected_page_count(0, 50), 1);
    assert_eq!(expected_page_count(100, 0), 1); // degenerate limit
}

#[test]
fn test_user_first_name() {
    let user = UserProfile {
        id: "u1".to_string(),
        display_name: Some("Jane Doe".to_string()),
    };
    assert_eq!(user.first_name(), "Jane");

    let anonymous = UserProfile {
        id: "u2".to_string(),
        display_name: None,
    };
    assert_eq!(anonymous.first_name(), "you");
}

#[test]
fn test_recommendation_criteria_query_pairs() {
    let criteria = RecommendationCriteria {
        seed_genres: vec!["techno".to_string(), "house".to_string()],
        limit: Some(10),
        target_energy: Some(0.8),
        ..Default::default()
    };

    let pairs = criteria.to_query_pairs();

    assert!(pairs.contains(&("seed_genres".to_string(), "techno,house".to_string())));
    assert!(pairs.contains(&("limit".to_string(), "10".to_string())));
    assert!(pairs.contains(&("target_energy".to_string(), "0.8".to_string())));

    // Unset criteria are omitted entirely
    assert!(pairs.iter().all(|(k, _)| k != "seed_tracks"));
    assert!(pairs.iter().all(|(k, _)| k != "target_tempo"));
}
