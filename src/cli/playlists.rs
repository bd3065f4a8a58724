use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error, info, spotify,
    success,
    types::{PlaylistTableRow, TrackTableRow},
    utils, warning,
};

pub async fn playlists(search: Option<String>, with_tracks: bool) {
    let client = super::authed_client().await;

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching playlists...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let first_page = match client.get_user_playlists().await {
        Ok(page) => page,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch playlists: {}", e);
        }
    };

    // display hint only, the traversal runs until the next link is exhausted
    let expected = spotify::pages::expected_page_count(first_page.total, first_page.limit);
    pb.set_message(format!("Fetching playlists (~{} pages)...", expected));

    let mut playlists = match spotify::pages::get_all_pages(&client, first_page).await {
        Ok(playlists) => {
            pb.finish_and_clear();
            playlists
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch playlists: {}", e);
        }
    };

    if let Some(playlist_search) = search {
        let search_term = playlist_search.to_lowercase();
        playlists.retain(|p| p.name.to_lowercase().contains(&search_term));
    }

    if playlists.is_empty() {
        warning!("No playlists found.");
        return;
    }

    success!("Fetched {} playlists.", playlists.len());

    if !with_tracks {
        let table_rows: Vec<PlaylistTableRow> = playlists
            .iter()
            .map(|p| PlaylistTableRow {
                name: p.name.clone(),
                owner: p
                    .owner
                    .display_name
                    .clone()
                    .unwrap_or_else(|| p.owner.id.clone()),
                tracks: p.tracks.total,
                public: match p.public {
                    Some(true) => "yes".to_string(),
                    Some(false) => "no".to_string(),
                    None => "-".to_string(),
                },
            })
            .collect();

        let table = Table::new(table_rows);
        println!("{}", table);
        return;
    }

    let pb = ProgressBar::new_spinner();
    pb.set_message("Attaching tracks to playlists...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let enriched = match spotify::playlists::attach_tracks_to_playlists(&client, playlists).await {
        Ok(enriched) => {
            pb.finish_and_clear();
            enriched
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to attach tracks to playlists: {}", e);
        }
    };

    for entry in &enriched {
        info!(
            "{} ({} of {} tracks)",
            entry.playlist.name,
            entry.tracks.items.len(),
            entry.playlist.tracks.total
        );

        let table_rows: Vec<TrackTableRow> = entry
            .tracks
            .items
            .iter()
            .filter_map(|item| item.track.as_ref())
            .enumerate()
            .map(|(index, track)| TrackTableRow {
                position: index + 1,
                name: track.name.clone(),
                artist: track.primary_artist().to_string(),
                year: utils::release_year(track),
            })
            .collect();

        if table_rows.is_empty() {
            warning!("Playlist {} has no tracks", entry.playlist.name);
            continue;
        }

        let table = Table::new(table_rows);
        println!("{}", table);
    }
}
