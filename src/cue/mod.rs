//! # CUE Sheet Generation
//!
//! Builds CUE sheets for Spotify albums. A sheet starts with a header naming
//! the generating application and the service, followed by one block per
//! disc. Every disc block repeats the album metadata and lists its tracks
//! with an `INDEX 01` position computed from the running playback time.
//!
//! ```text
//! REM CREATOR "cots version 0.1.0 (more information on: https://...)"
//! REM SERVICE "Spotify"
//! REM DISCNUMBER 1
//! REM TOTALDISCS 1
//! REM DATE "1999"
//! PERFORMER "Artist A, Artist B"
//! TITLE "Album X"
//! TRACK 1 AUDIO
//! TITLE "Song 1"
//! PERFORMER "Artist A"
//! INDEX 01 "00:00:00"
//! ```
//!
//! ## Timing
//!
//! The running time starts at zero when the builder is created and is never
//! reset, so the first track of disc 2 continues where disc 1 ended. After
//! every track the time advances by the track duration plus a systematic
//! per-track offset that models the pause some players insert between
//! tracks ([`DEFAULT_OFFSET_PER_TRACK_MS`] unless given explicitly).
//!
//! ## Limitations
//!
//! Values are written verbatim into quoted fields. A `"` inside an artist or
//! title ends the field early and the sheet becomes unreadable for strict
//! parsers.

use std::{fmt::Display, path::PathBuf};

use crate::{
    download::{DownloadError, Downloader},
    types::Track,
    utils,
};

mod time;

pub use time::time_to_string;
pub use time::zero_pad;

/// Systematic offset added after every track, in milliseconds.
pub const DEFAULT_OFFSET_PER_TRACK_MS: u64 = 3100;

/// Name of the streaming service written to the `REM SERVICE` line.
pub const SERVICE: &str = "Spotify";

/// Identifies the application that generated a sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
    pub url: String,
}

impl AppInfo {
    pub fn new(name: impl Into<String>, version: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            url: url.into(),
        }
    }

    /// Application info of this build, with the url taken from configuration.
    pub fn from_env() -> Self {
        Self::new(
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            crate::config::app_url(),
        )
    }
}

/// Incrementally renders a CUE sheet for one album.
///
/// Create one builder per export, append the discs in order and read the
/// text with [`CueSheetBuilder::render`]. There is no reset; build a new
/// sheet for every album.
#[derive(Debug, Clone)]
pub struct CueSheetBuilder {
    app: AppInfo,
    artist: String,
    title: String,
    year: String,
    total_disks: Option<u32>,
    result: String,
    cum_time_ms: u64,
}

impl CueSheetBuilder {
    /// Creates a builder and renders the header right away.
    ///
    /// # Arguments
    ///
    /// * `app` - Application written to the `REM CREATOR` line
    /// * `artist` - Album artist(s), already joined
    /// * `title` - Album title
    /// * `year` - Release year or date, anything printable
    /// * `total_disks` - Number of discs in total; `None` leaves the value empty
    pub fn new(
        app: AppInfo,
        artist: impl Into<String>,
        title: impl Into<String>,
        year: impl Display,
        total_disks: Option<u32>,
    ) -> Self {
        let mut builder = Self {
            app,
            artist: artist.into(),
            title: title.into(),
            year: year.to_string(),
            total_disks,
            result: String::new(),
            cum_time_ms: 0,
        };
        builder.result = builder.header();
        builder
    }

    fn header(&self) -> String {
        format!(
            "REM CREATOR \"{name} version {version} (more information on: {url})\"\nREM SERVICE \"{service}\"\n",
            name = self.app.name,
            version = self.app.version,
            url = self.app.url,
            service = SERVICE
        )
    }

    /// Appends a disc using [`DEFAULT_OFFSET_PER_TRACK_MS`] between tracks.
    pub fn add_disk(&mut self, disk_number: u32, tracks: &[Track]) -> &mut Self {
        self.add_disk_with_offset(disk_number, tracks, DEFAULT_OFFSET_PER_TRACK_MS)
    }

    /// Appends a disc block followed by one entry per track.
    ///
    /// Only the disc number is taken from the disc; performer, title, date
    /// and total disc count always come from the album. The `INDEX 01`
    /// position of each track is the running time before the track starts.
    pub fn add_disk_with_offset(
        &mut self,
        disk_number: u32,
        tracks: &[Track],
        offset_per_track_ms: u64,
    ) -> &mut Self {
        let total_disks = self
            .total_disks
            .map(|t| t.to_string())
            .unwrap_or_default();

        self.result.push_str(&format!(
            "REM DISCNUMBER {disk_number}\nREM TOTALDISCS {total_disks}\nREM DATE \"{year}\"\nPERFORMER \"{artist}\"\nTITLE \"{title}\"\n",
            year = self.year,
            artist = self.artist,
            title = self.title,
        ));

        for track in tracks {
            self.result.push_str(&format!(
                "TRACK {number} AUDIO\nTITLE \"{name}\"\nPERFORMER \"{performer}\"\nINDEX 01 \"{index}\"\n",
                number = track.track_number,
                name = track.name,
                performer = utils::join_artist_names(&track.artists),
                index = time_to_string(self.cum_time_ms),
            ));
            self.cum_time_ms += track.duration_ms + offset_per_track_ms;
        }

        self
    }

    /// Returns the sheet rendered so far.
    pub fn render(&self) -> String {
        self.result.clone()
    }

    pub fn cumulative_ms(&self) -> u64 {
        self.cum_time_ms
    }

    /// `<artist> - <title>.cue`
    pub fn default_filename(&self) -> String {
        format!("{} - {}.cue", self.artist, self.title)
    }

    /// Hands the rendered sheet to a downloader.
    ///
    /// Falls back to [`CueSheetBuilder::default_filename`] when no filename
    /// is given. Where the file ends up is entirely up to the downloader.
    pub async fn export_and_download<D: Downloader>(
        &self,
        downloader: &D,
        filename: Option<&str>,
    ) -> Result<PathBuf, DownloadError> {
        let filename = match filename {
            Some(name) => name.to_string(),
            None => self.default_filename(),
        };

        downloader.save(self.render().as_bytes(), &filename).await
    }
}
