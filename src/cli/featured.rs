use tabled::Table;

use crate::{error, info, success, types::PlaylistTableRow, warning};

pub async fn featured() {
    let client = super::authed_client().await;

    match client.get_featured_playlists().await {
        Ok(response) => {
            if let Some(message) = response.message {
                info!("{}", message);
            }

            if response.playlists.items.is_empty() {
                warning!("No featured playlists right now.");
                return;
            }

            success!("{} featured playlists.", response.playlists.items.len());

            let table_rows: Vec<PlaylistTableRow> = response
                .playlists
                .items
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
        }
        Err(e) => {
            error!("Failed to fetch featured playlists: {}", e);
        }
    }
}
