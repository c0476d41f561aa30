use std::{collections::BTreeMap, str::FromStr};

use chrono::{Datelike, NaiveDate};

use crate::types::{Image, SimplifiedArtist, Track};

/// Requested resolution of an album cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverSize {
    /// Largest image by area
    Max,
    /// Smallest image by area
    Min,
    /// Image whose width is closest to the given pixels
    Width(u32),
}

impl FromStr for CoverSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "max" => Ok(CoverSize::Max),
            "min" => Ok(CoverSize::Min),
            other => other
                .parse::<u32>()
                .map(CoverSize::Width)
                .map_err(|_| format!("Invalid cover size '{}', use max, min or a width", s)),
        }
    }
}

pub fn select_cover(images: &[Image], size: CoverSize) -> Option<&Image> {
    match size {
        CoverSize::Max => images.iter().max_by_key(|image| image.area()),
        CoverSize::Min => images.iter().min_by_key(|image| image.area()),
        CoverSize::Width(width) => images
            .iter()
            .min_by_key(|image| (image.width.unwrap_or(0) as i64 - width as i64).abs()),
    }
}

/// URL of the smallest image, or an empty string when there is none.
pub fn smallest_image_url(images: &[Image]) -> String {
    select_cover(images, CoverSize::Min)
        .map(|image| image.url.clone())
        .unwrap_or_default()
}

/// Formats a track duration as `m:ss`.
///
/// Seconds are rounded up, matching what the album listing always showed.
pub fn format_duration(duration_ms: u64) -> String {
    let total_seconds = duration_ms as f64 / 1000.0;
    let minutes = (total_seconds / 60.0).floor() as u64;
    let seconds = (total_seconds % 60.0).ceil() as u64;
    if seconds < 10 {
        format!("{}:0{}", minutes, seconds)
    } else {
        format!("{}:{}", minutes, seconds)
    }
}

/// Splits a Spotify URI like `spotify:album:0sNOF9WDwhWunNAHPD3Baj` into kind and ID.
pub fn parse_spotify_uri(uri: &str) -> Option<(String, String)> {
    let parts: Vec<&str> = uri.split(':').collect();
    match parts.as_slice() {
        ["spotify", kind, id] if !kind.is_empty() && !id.is_empty() => {
            Some((kind.to_string(), id.to_string()))
        }
        _ => None,
    }
}

pub fn join_artist_names(artists: &[SimplifiedArtist]) -> String {
    artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Groups tracks by disc number, discs ascending, tracks in input order.
pub fn group_tracks_by_disc(tracks: &[Track]) -> Vec<(u32, Vec<Track>)> {
    let mut discs: BTreeMap<u32, Vec<Track>> = BTreeMap::new();
    for track in tracks {
        discs
            .entry(track.disc_number)
            .or_default()
            .push(track.clone());
    }
    discs.into_iter().collect()
}

/// Keeps the tracks whose number is selected; an empty selection keeps all.
pub fn select_tracks(tracks: &[Track], numbers: &[u32]) -> Vec<Track> {
    if numbers.is_empty() {
        return tracks.to_vec();
    }

    tracks
        .iter()
        .filter(|t| numbers.contains(&t.track_number))
        .cloned()
        .collect()
}

pub fn any_track_has_preview(tracks: &[Track]) -> bool {
    tracks.iter().any(|t| t.preview_url.is_some())
}

/// Year of a Spotify release date.
///
/// Handles the `day`, `month` and `year` precisions (`1999-03-01`,
/// `1999-03`, `1999`). Anything else is returned unchanged.
pub fn release_year(release_date: &str) -> String {
    if let Ok(date) = NaiveDate::parse_from_str(release_date, "%Y-%m-%d") {
        return date.year().to_string();
    }

    match release_date.split('-').next() {
        Some(year) if year.len() == 4 && year.chars().all(|c| c.is_ascii_digit()) => {
            year.to_string()
        }
        _ => release_date.to_string(),
    }
}

/// Track numbers selected for an export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackNumbers(pub Vec<u32>);

/// Parses a comma separated list of track numbers like `1,2,5`.
pub fn parse_track_numbers(s: &str) -> Result<TrackNumbers, String> {
    s.split(',')
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u32>()
                .map_err(|_| format!("Invalid track number '{}'", part))
        })
        .collect::<Result<Vec<u32>, String>>()
        .map(TrackNumbers)
}
