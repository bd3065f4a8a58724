use std::collections::HashSet;

use chrono::Utc;

use crate::types::{TimeRange, Token, Track, TrendTableRow};

/// Extracts an access token from a redirect URL fragment such as
/// `access_token=BQC...&token_type=Bearer&expires_in=3600`. A leading `#`
/// is tolerated. Returns `None` when no `access_token` parameter is present.
pub fn parse_token_fragment(fragment: &str) -> Option<Token> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);

    let mut access_token: Option<String> = None;
    let mut expires_in: u64 = 3600;

    for pair in fragment.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        match key {
            "access_token" if !value.is_empty() => access_token = Some(value.to_string()),
            "expires_in" => expires_in = value.parse().unwrap_or(3600),
            _ => {}
        }
    }

    access_token.map(|access_token| Token {
        access_token,
        expires_in,
        obtained_at: Utc::now().timestamp() as u64,
    })
}

pub fn parse_time_range(raw: &str) -> Result<TimeRange, String> {
    match raw.trim().to_lowercase().replace('-', "_").as_str() {
        "short" | "short_term" => Ok(TimeRange::ShortTerm),
        "medium" | "medium_term" => Ok(TimeRange::MediumTerm),
        "long" | "long_term" => Ok(TimeRange::LongTerm),
        other => Err(format!(
            "invalid value '{}' (expected short_term, medium_term or long_term)",
            other
        )),
    }
}

/// Release year of a track's album, or "-" when the album is unknown.
pub fn release_year(track: &Track) -> String {
    track
        .album
        .as_ref()
        .and_then(|album| album.release_date.get(0..4))
        .unwrap_or("-")
        .to_string()
}

fn position_in(tracks: &[Track], track_id: &str) -> Option<usize> {
    tracks.iter().position(|t| t.id == track_id).map(|p| p + 1)
}

/// Builds the cross-range comparison rows: every distinct track across all
/// ranges, first occurrence wins, with its 1-based rank in each range or "-"
/// where it does not chart.
pub fn build_trend_rows(ranked: &[(TimeRange, Vec<Track>)]) -> Vec<TrendTableRow> {
    let lookup = |range: TimeRange| {
        ranked
            .iter()
            .find(|(r, _)| *r == range)
            .map(|(_, tracks)| tracks.as_slice())
            .unwrap_or(&[])
    };

    let mut seen_ids = HashSet::new();
    let mut rows = Vec::new();

    for (_, tracks) in ranked {
        for track in tracks {
            if !seen_ids.insert(track.id.clone()) {
                continue;
            }

            let fmt_position = |tracks: &[Track]| {
                position_in(tracks, &track.id)
                    .map(|p| p.to_string())
                    .unwrap_or_else(|| "-".to_string())
            };

            rows.push(TrendTableRow {
                name: track.name.clone(),
                artist: track.primary_artist().to_string(),
                year: release_year(track),
                short_term: fmt_position(lookup(TimeRange::ShortTerm)),
                medium_term: fmt_position(lookup(TimeRange::MediumTerm)),
                long_term: fmt_position(lookup(TimeRange::LongTerm)),
            });
        }
    }

    rows
}
