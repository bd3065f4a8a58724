use serde::de::DeserializeOwned;

use crate::{
    spotify::{ApiError, SpotifyClient},
    types::Page,
};

/// Retrieves every remaining page of a paginated collection and returns the
/// fully concatenated item list.
///
/// Takes the first page, already fetched by the caller through one of the
/// collection endpoints, and follows `next` links one at a time until a page
/// reports none. Each page's items are appended in visit order, so the
/// result preserves the collection's original item order end to end.
///
/// Page fetches are strictly sequential: page *N+1*'s URL is only known
/// after page *N* is parsed, so there is nothing to parallelize within one
/// collection. Independent collections can run their own traversals
/// concurrently.
///
/// Termination depends only on the `next` link. The `total`/`limit` metadata
/// on the first page is never consulted here; `expected_page_count` derives
/// a display hint from it, and a wrong hint cannot truncate or otherwise
/// affect this traversal.
///
/// # Arguments
///
/// * `client` - Authenticated API client used to follow `next` links
/// * `first_page` - The collection's first page, consumed into the result
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<T>)` - All items of the collection, first page to last
/// - `Err(ApiError)` - The first failure encountered; no partial result is
///   returned
///
/// # Errors
///
/// Any page fetch that fails (network error, non-2xx status, malformed
/// body) fails the whole aggregation. No retry is performed here.
///
/// # Example
///
/// ```
/// let first = client.get_user_playlists().await?;
/// let playlists = get_all_pages(&client, first).await?;
/// ```
pub async fn get_all_pages<T>(
    client: &SpotifyClient,
    first_page: Page<T>,
) -> Result<Vec<T>, ApiError>
where
    T: DeserializeOwned,
{
    let mut items = first_page.items;
    let mut next = first_page.next;

    while let Some(url) = next {
        let page: Page<T> = client.get(&url).await?;
        items.extend(page.items);
        next = page.next;
    }

    Ok(items)
}

/// Estimates how many pages a collection spans, for progress display only.
///
/// Mirrors the `total / limit` arithmetic the API metadata suggests. The
/// total reported by some endpoints is only approximate, so this is a hint:
/// traversal in `get_all_pages` ignores it entirely and runs until the
/// `next` link is exhausted.
pub fn expected_page_count(total: u64, limit: u64) -> u64 {
    if limit == 0 {
        return 1;
    }
    ((total as f64 / limit as f64).round() as u64).max(1)
}
