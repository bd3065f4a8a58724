use crate::{
    spotify::{ApiError, SpotifyClient, pages},
    types::{TimeRange, Track},
};

/// Retrieves the user's complete top-track list for one time range.
///
/// Fetches the first page of the top-tracks collection and then follows the
/// pagination to the end, regardless of how many pages the ranking spans.
/// The returned order is the API's ranking order.
///
/// # Arguments
///
/// * `client` - Authenticated API client
/// * `time_range` - Rolling listening-history window; `None` lets the API
///   pick its default window
///
/// # Errors
///
/// Propagates the first page-fetch failure without returning a partial
/// ranking.
pub async fn get_all_my_top_tracks(
    client: &SpotifyClient,
    time_range: Option<TimeRange>,
) -> Result<Vec<Track>, ApiError> {
    let first_page = client.get_my_top_tracks(time_range).await?;
    pages::get_all_pages(client, first_page).await
}

/// Retrieves the complete top-track lists for all three time ranges.
///
/// The three collections are independent, so their traversals run as
/// concurrent tasks. Results are keyed by time range and returned in the
/// fixed short/medium/long order, independent of task completion order.
///
/// # Errors
///
/// One failing range fails the whole fetch; tasks already in flight are not
/// awaited for partial results.
pub async fn get_top_tracks_by_range(
    client: &SpotifyClient,
) -> Result<Vec<(TimeRange, Vec<Track>)>, ApiError> {
    let mut handles = Vec::with_capacity(TimeRange::ALL.len());

    for range in TimeRange::ALL {
        let task_client = client.clone();
        let handle =
            tokio::spawn(async move { get_all_my_top_tracks(&task_client, Some(range)).await });
        handles.push((range, handle));
    }

    let mut ranked = Vec::with_capacity(handles.len());
    for (range, handle) in handles {
        let tracks = handle.await??;
        ranked.push((range, tracks));
    }

    Ok(ranked)
}
