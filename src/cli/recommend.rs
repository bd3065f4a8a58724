use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error, success,
    types::{RecommendationCriteria, RecommendationTableRow},
    warning,
};

pub async fn recommend(criteria: RecommendationCriteria) {
    if criteria.seed_genres.is_empty() && criteria.seed_tracks.is_empty() {
        error!("At least one --genre or --seed-track is required. See trendcli genres.");
    }

    let client = super::authed_client().await;

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching recommendations...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let response = match client.get_recommendations(&criteria).await {
        Ok(response) => {
            pb.finish_and_clear();
            response
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch recommendations: {}", e);
        }
    };

    if response.tracks.is_empty() {
        warning!("No recommendations for these criteria. Try loosening the targets.");
        return;
    }

    success!("{} recommended tracks.", response.tracks.len());

    let table_rows: Vec<RecommendationTableRow> = response
        .tracks
        .iter()
        .map(|track| RecommendationTableRow {
            name: track.name.clone(),
            artist: track.primary_artist().to_string(),
            album: track
                .album
                .as_ref()
                .map(|a| a.name.clone())
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}
