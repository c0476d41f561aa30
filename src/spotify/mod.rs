//! # Spotify Integration Module
//!
//! Thin client for the parts of the Spotify Web API that cots needs: catalog
//! search, album lookup and raw downloads of cover images. Requests are sent
//! unauthenticated against the base URL from [`crate::config::spotify_apiurl`],
//! which can point at a proxy that adds credentials.
//!
//! ## Endpoints
//!
//! - `GET /search?type={artist|album}&q={query}` - [`search::search`]
//! - `GET /albums/{id}` - [`albums::get_album`]
//! - any `next` link of a paging object - [`search::next_page`], [`load_url`]
//!
//! ## Error Handling
//!
//! All requests go through [`load_url`] or [`download_bytes`]. A `502 Bad
//! Gateway` answer is retried after a short pause; every other HTTP or
//! decoding error is returned to the caller as `reqwest::Error`.

use std::{fmt, str::FromStr, time::Duration};

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tokio::time::sleep;

pub mod albums;
pub mod search;

const BAD_GATEWAY_RETRIES: u32 = 3;
const BAD_GATEWAY_DELAY: Duration = Duration::from_secs(10);

/// Catalog entity a search is run for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    Artist,
    Album,
}

impl SearchType {
    /// Key of the paging object in a search response (`artists`, `albums`).
    pub fn result_key(&self) -> &'static str {
        match self {
            SearchType::Artist => "artists",
            SearchType::Album => "albums",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchType::Artist => write!(f, "artist"),
            SearchType::Album => write!(f, "album"),
        }
    }
}

impl FromStr for SearchType {
    type Err = String;

    /// Accepts singular and plural forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "artist" | "artists" => Ok(SearchType::Artist),
            "album" | "albums" => Ok(SearchType::Album),
            _ => Err(format!("Type '{}' is unknown.", s)),
        }
    }
}

/// Builds the search URL for a query.
///
/// The query is form encoded; a plain word results in
/// `{base}/search?type=album&q=test`.
pub fn search_url(base: &str, search_type: SearchType, query: &str) -> String {
    let type_str = search_type.to_string();
    match Url::parse_with_params(
        &format!("{base}/search"),
        &[("type", type_str.as_str()), ("q", query)],
    ) {
        Ok(url) => url.to_string(),
        Err(_) => format!("{base}/search?type={type_str}&q={query}"),
    }
}

pub fn album_url(base: &str, id: &str) -> String {
    format!("{base}/albums/{id}")
}

/// URL of an artist or album in the Spotify web player.
pub fn play_url(play_base: &str, kind: &str, id: &str) -> String {
    format!("{play_base}/{kind}/{id}")
}

/// Loads a URL via GET and decodes the JSON body.
///
/// Retries up to three times on `502 Bad Gateway` with a 10 second pause.
pub async fn load_url<T: DeserializeOwned>(url: &str) -> Result<T, reqwest::Error> {
    let response = get_with_retry(url).await?;
    response.json::<T>().await
}

/// Loads a URL via GET and returns the raw body.
pub async fn download_bytes(url: &str) -> Result<Vec<u8>, reqwest::Error> {
    let response = get_with_retry(url).await?;
    let bytes = response.bytes().await?;
    Ok(bytes.to_vec())
}

async fn get_with_retry(url: &str) -> Result<reqwest::Response, reqwest::Error> {
    let client = Client::new();
    let mut attempts = 0;

    loop {
        let response = client.get(url).send().await;

        match response {
            Ok(resp) => match resp.error_for_status() {
                Ok(valid_response) => return Ok(valid_response),
                Err(err) => {
                    if err.status() == Some(StatusCode::BAD_GATEWAY)
                        && attempts < BAD_GATEWAY_RETRIES
                    {
                        attempts += 1;
                        sleep(BAD_GATEWAY_DELAY).await;
                        continue; // retry
                    }
                    return Err(err); // propagate other errors
                }
            },
            Err(err) => return Err(err), // network or reqwest error
        }
    }
}
