use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use trendcli::spotify::{ApiError, SpotifyClient, pages, playlists};
use trendcli::types::{Page, Playlist, PlaylistOwner, PlaylistTracksRef};

fn create_test_playlist(id: &str, name: &str, tracks_href: String, total: u64) -> Playlist {
    Playlist {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        public: Some(true),
        collaborative: false,
        snapshot_id: format!("{}_snapshot", id),
        owner: PlaylistOwner {
            id: "owner_id".to_string(),
            display_name: Some("Owner".to_string()),
        },
        tracks: PlaylistTracksRef {
            href: tracks_href,
            total,
        },
    }
}

fn track_page_body(track_id: &str, total: u64) -> serde_json::Value {
    json!({
        "items": [
            {
                "track": {
                    "id": track_id,
                    "name": format!("Track {}", track_id),
                    "uri": format!("spotify:track:{}", track_id),
                    "artists": [{"id": "a1", "name": "Artist"}]
                }
            }
        ],
        "total": total,
        "limit": 100,
        "next": null
    })
}

#[tokio::test]
async fn collects_all_pages_in_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/page2"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [3],
            "total": 5,
            "limit": 2,
            "next": format!("{}/page3", server.uri())
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/page3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [4, 5],
            "total": 5,
            "limit": 2,
            "next": null
        })))
        .mount(&server)
        .await;

    let client = SpotifyClient::with_token("test-token");
    let first_page = Page {
        items: vec![1_u64, 2],
        total: 5,
        limit: 2,
        next: Some(format!("{}/page2", server.uri())),
    };

    let items = pages::get_all_pages(&client, first_page).await.unwrap();
    assert_eq!(items, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn is_idempotent_against_the_same_sequence() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/next"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": ["c", "d"],
            "total": 4,
            "limit": 2,
            "next": null
        })))
        .mount(&server)
        .await;

    let client = SpotifyClient::with_token("test-token");
    let first_page = || Page {
        items: vec!["a".to_string(), "b".to_string()],
        total: 4,
        limit: 2,
        next: Some(format!("{}/next", server.uri())),
    };

    let once = pages::get_all_pages(&client, first_page()).await.unwrap();
    let twice = pages::get_all_pages(&client, first_page()).await.unwrap();

    assert_eq!(once, vec!["a", "b", "c", "d"]);
    assert_eq!(once, twice);
}

#[tokio::test]
async fn single_page_needs_no_network() {
    // No server is running: any attempted fetch would fail, so an Ok result
    // proves the traversal stopped at the first page.
    let client = SpotifyClient::with_token("test-token");
    let first_page = Page {
        items: vec![10_u64, 20, 30],
        total: 3,
        limit: 50,
        next: None,
    };

    let items = pages::get_all_pages(&client, first_page).await.unwrap();
    assert_eq!(items, vec![10, 20, 30]);
}

#[tokio::test]
async fn traversal_ignores_misreported_totals() {
    let server = MockServer::start().await;

    // total/limit claim a single page; the next links say otherwise. The
    // traversal must follow the links, not the estimate.
    Mock::given(method("GET"))
        .and(path("/p2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [2],
            "total": 1,
            "limit": 50,
            "next": format!("{}/p3", server.uri())
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/p3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [3],
            "total": 1,
            "limit": 50,
            "next": null
        })))
        .mount(&server)
        .await;

    let client = SpotifyClient::with_token("test-token");
    let first_page = Page {
        items: vec![1_u64],
        total: 1,
        limit: 50,
        next: Some(format!("{}/p2", server.uri())),
    };

    let items = pages::get_all_pages(&client, first_page).await.unwrap();
    assert_eq!(items, vec![1, 2, 3]);
}

#[tokio::test]
async fn failing_page_fails_the_whole_aggregation() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let client = SpotifyClient::with_token("test-token");
    let first_page = Page {
        items: vec![1_u64, 2],
        total: 4,
        limit: 2,
        next: Some(format!("{}/broken", server.uri())),
    };

    let result = pages::get_all_pages(&client, first_page).await;
    assert!(matches!(result, Err(ApiError::Status(status)) if status.as_u16() == 502));
}

#[tokio::test]
async fn malformed_page_fails_fast() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/garbage"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"foo": 1})))
        .mount(&server)
        .await;

    let client = SpotifyClient::with_token("test-token");
    let first_page = Page {
        items: vec![1_u64],
        total: 2,
        limit: 1,
        next: Some(format!("{}/garbage", server.uri())),
    };

    let result = pages::get_all_pages(&client, first_page).await;
    assert!(matches!(result, Err(ApiError::MalformedResponse(_))));
}

#[tokio::test]
async fn missing_token_is_rejected_before_any_request() {
    let client = SpotifyClient::new();
    let first_page = Page {
        items: vec![1_u64],
        total: 2,
        limit: 1,
        next: Some("http://127.0.0.1:1/never".to_string()),
    };

    let result = pages::get_all_pages(&client, first_page).await;
    assert!(matches!(result, Err(ApiError::MissingToken)));
}

#[tokio::test]
async fn fetches_all_user_playlists_across_pages() {
    let server = MockServer::start().await;

    let playlist_json = |id: &str| {
        json!({
            "id": id,
            "name": format!("Playlist {}", id),
            "collaborative": false,
            "snapshot_id": format!("{}_snapshot", id),
            "owner": {"id": "owner_id", "display_name": "Owner"},
            "tracks": {"href": format!("{}/playlists/{}/tracks", server.uri(), id), "total": 1}
        })
    };

    Mock::given(method("GET"))
        .and(path("/me/playlists"))
        .and(wiremock::matchers::query_param_is_missing("offset"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [playlist_json("p1"), playlist_json("p2")],
            "total": 3,
            "limit": 2,
            "next": format!("{}/me/playlists?offset=2", server.uri())
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/me/playlists"))
        .and(wiremock::matchers::query_param("offset", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [playlist_json("p3")],
            "total": 3,
            "limit": 2,
            "next": null
        })))
        .mount(&server)
        .await;

    unsafe {
        std::env::set_var("SPOTIFY_API_URL", server.uri());
    }

    let client = SpotifyClient::with_token("test-token");
    let all = playlists::get_all_user_playlists(&client).await.unwrap();

    assert_eq!(all.len(), 3);
    assert_eq!(all[0].id, "p1");
    assert_eq!(all[2].id, "p3");
}

#[tokio::test]
async fn attaches_tracks_to_every_playlist() {
    let server = MockServer::start().await;

    for (id, track) in [("p1", "t1"), ("p2", "t2")] {
        Mock::given(method("GET"))
            .and(path(format!("/tracks/{}", id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(track_page_body(track, 40)))
            .mount(&server)
            .await;
    }

    let client = SpotifyClient::with_token("test-token");
    let input = vec![
        create_test_playlist("p1", "First", format!("{}/tracks/p1", server.uri()), 40),
        create_test_playlist("p2", "Second", format!("{}/tracks/p2", server.uri()), 40),
    ];

    let enriched = playlists::attach_tracks_to_playlists(&client, input)
        .await
        .unwrap();

    // Input order is preserved and summary fields survive the merge
    assert_eq!(enriched.len(), 2);
    assert_eq!(enriched[0].playlist.name, "First");
    assert_eq!(enriched[1].playlist.name, "Second");
    assert_eq!(enriched[0].playlist.tracks.total, 40);

    let track = enriched[0].tracks.items[0].track.as_ref().unwrap();
    assert_eq!(track.id, "t1");
}

#[tokio::test]
async fn one_failing_playlist_fails_the_batch() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tracks/ok1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(track_page_body("t1", 1)))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/tracks/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/tracks/ok2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(track_page_body("t3", 1)))
        .mount(&server)
        .await;

    let client = SpotifyClient::with_token("test-token");
    let input = vec![
        create_test_playlist("p1", "One", format!("{}/tracks/ok1", server.uri()), 1),
        create_test_playlist("p2", "Two", format!("{}/tracks/broken", server.uri()), 1),
        create_test_playlist("p3", "Three", format!("{}/tracks/ok2", server.uri()), 1),
    ];

    let result = playlists::attach_tracks_to_playlists(&client, input).await;
    assert!(matches!(result, Err(ApiError::Status(status)) if status.as_u16() == 500));
}
