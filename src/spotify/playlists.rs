use crate::{
    spotify::{ApiError, SpotifyClient, pages},
    types::{Page, Playlist, PlaylistItem, PlaylistWithTracks},
};

/// Retrieves every playlist the current user owns or follows.
///
/// Fetches the first page of the playlist collection and follows the
/// pagination to the end. Collection size does not matter; the traversal
/// stops only when a page reports no further link.
///
/// # Errors
///
/// Propagates the first page-fetch failure without returning a partial
/// list.
pub async fn get_all_user_playlists(client: &SpotifyClient) -> Result<Vec<Playlist>, ApiError> {
    let first_page = client.get_user_playlists().await?;
    pages::get_all_pages(client, first_page).await
}

/// Attaches track listings to a batch of playlist summaries.
///
/// Each playlist's track collection is fetched through its own `tracks.href`
/// link. The fetches are independent and run as concurrent tasks; the result
/// keeps the input playlist order, not task completion order, and every
/// summary field of the original playlist is preserved next to the fetched
/// listing.
///
/// Only the first page of each playlist's tracks is fetched; the summary's
/// `tracks.total` still reports the full count.
///
/// # Errors
///
/// All-or-nothing: the first playlist whose track fetch fails aborts the
/// whole batch and no partial batch is returned.
///
/// # Example
///
/// ```
/// let playlists = get_all_user_playlists(&client).await?;
/// let enriched = attach_tracks_to_playlists(&client, playlists).await?;
/// ```
pub async fn attach_tracks_to_playlists(
    client: &SpotifyClient,
    playlists: Vec<Playlist>,
) -> Result<Vec<PlaylistWithTracks>, ApiError> {
    let mut handles = Vec::with_capacity(playlists.len());

    for playlist in playlists {
        let task_client = client.clone();
        let handle = tokio::spawn(async move {
            let tracks: Page<PlaylistItem> = task_client.get(&playlist.tracks.href).await?;
            Ok::<PlaylistWithTracks, ApiError>(PlaylistWithTracks { playlist, tracks })
        });
        handles.push(handle);
    }

    let mut enriched = Vec::with_capacity(handles.len());
    for handle in handles {
        enriched.push(handle.await??);
    }

    Ok(enriched)
}
