use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error, info, spotify,
    spotify::SpotifyClient,
    success,
    types::{TimeRange, TrackTableRow},
    utils, warning,
};

pub async fn top(time_range: Option<TimeRange>) {
    let client = super::authed_client().await;

    match time_range {
        Some(range) => single_range(&client, range).await,
        None => trend_table(&client).await,
    }
}

async fn single_range(client: &SpotifyClient, range: TimeRange) {
    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Fetching top tracks ({})...", range.label()));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let tracks = match spotify::tracks::get_all_my_top_tracks(client, Some(range)).await {
        Ok(tracks) => {
            pb.finish_and_clear();
            tracks
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch top tracks: {}", e);
        }
    };

    if tracks.is_empty() {
        warning!("No listening history for {} yet.", range.label());
        return;
    }

    success!("Fetched {} tracks for {}.", tracks.len(), range.label());

    let table_rows: Vec<TrackTableRow> = tracks
        .iter()
        .enumerate()
        .map(|(index, track)| TrackTableRow {
            position: index + 1,
            name: track.name.clone(),
            artist: track.primary_artist().to_string(),
            year: utils::release_year(track),
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}

async fn trend_table(client: &SpotifyClient) {
    if let Ok(user) = client.get_me().await {
        info!("Hi {}! Here are your hot tracks over time.", user.first_name());
    }

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching top tracks for all time ranges...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let ranked = match spotify::tracks::get_top_tracks_by_range(client).await {
        Ok(ranked) => {
            pb.finish_and_clear();
            ranked
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch top tracks: {}", e);
        }
    };

    let rows = utils::build_trend_rows(&ranked);
    if rows.is_empty() {
        warning!("No listening history yet.");
        return;
    }

    success!("Fetched {} distinct tracks across all time ranges.", rows.len());

    let table = Table::new(rows);
    println!("{}", table);
}
