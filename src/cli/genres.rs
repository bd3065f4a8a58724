use crate::{error, info, success};

pub async fn genres() {
    let client = super::authed_client().await;

    match client.get_available_genre_seeds().await {
        Ok(response) => {
            success!("{} genre seeds available.", response.genres.len());
            for genre in &response.genres {
                println!("  {}", genre);
            }
            info!("Use these as --genre values for trendcli recommend.");
        }
        Err(e) => {
            error!("Failed to fetch genre seeds: {}", e);
        }
    }
}
