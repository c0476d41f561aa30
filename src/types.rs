use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    pub url: String,
}

impl Image {
    pub fn area(&self) -> u64 {
        self.width.unwrap_or(0) as u64 * self.height.unwrap_or(0) as u64
    }
}

/// Artist as embedded in albums and tracks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimplifiedArtist {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub track_number: u32,
    #[serde(default = "default_disc_number")]
    pub disc_number: u32,
    pub duration_ms: u64,
    #[serde(default)]
    pub artists: Vec<SimplifiedArtist>,
    #[serde(default)]
    pub explicit: bool,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub uri: String,
}

fn default_disc_number() -> u32 {
    1
}

/// Page of results as returned by the Spotify Web API.
///
/// `next` holds the absolute URL of the following page or `None` on the last
/// page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paging<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub offset: Option<u32>,
    #[serde(default)]
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimplifiedAlbum {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub album_type: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub artists: Vec<SimplifiedArtist>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub album_type: String,
    #[serde(default)]
    pub artists: Vec<SimplifiedArtist>,
    #[serde(default)]
    pub available_markets: Vec<String>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub release_date_precision: String,
    pub tracks: Paging<Track>,
    #[serde(default)]
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub artists: Option<Paging<Artist>>,
    #[serde(default)]
    pub albums: Option<Paging<SimplifiedAlbum>>,
}

/// A row of search results, independent of the searched type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchItem {
    pub name: String,
    pub uri: String,
    pub images: Vec<Image>,
}

impl From<Artist> for SearchItem {
    fn from(artist: Artist) -> Self {
        SearchItem {
            name: artist.name,
            uri: artist.uri,
            images: artist.images,
        }
    }
}

impl From<SimplifiedAlbum> for SearchItem {
    fn from(album: SimplifiedAlbum) -> Self {
        SearchItem {
            name: album.name,
            uri: album.uri,
            images: album.images,
        }
    }
}

#[derive(Tabled)]
pub struct SearchTableRow {
    pub name: String,
    pub reference: String,
    pub cover: String,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub disc: u32,
    pub number: u32,
    pub name: String,
    pub duration: String,
    pub explicit: String,
}

#[derive(Tabled)]
pub struct TrackPreviewTableRow {
    pub disc: u32,
    pub number: u32,
    pub name: String,
    pub duration: String,
    pub explicit: String,
    pub preview: String,
}

#[derive(Tabled)]
pub struct LanguageTableRow {
    pub key: String,
    pub name: String,
}
