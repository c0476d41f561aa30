use tabled::Table;

use crate::{
    cli::spinner,
    error, info, spotify,
    types::{Album, Track, TrackPreviewTableRow, TrackTableRow},
    utils,
};

/// Shows album metadata and the track listing.
///
/// The preview column is only printed when at least one track has a preview.
pub async fn album(id: String) {
    let album = load_album(&id).await;

    info!("{}", album.name);
    info!("Released: {}", album.release_date);
    info!("Artists: {}", utils::join_artist_names(&album.artists));
    if !album.available_markets.is_empty() {
        info!("Markets: {}", album.available_markets.join(" "));
    }
    if let Some(cover) = utils::select_cover(&album.images, utils::CoverSize::Width(300)) {
        info!("Cover: {}", cover.url);
    }

    let tracks = &album.tracks.items;
    if utils::any_track_has_preview(tracks) {
        let rows: Vec<TrackPreviewTableRow> = tracks
            .iter()
            .map(|t| TrackPreviewTableRow {
                disc: t.disc_number,
                number: t.track_number,
                name: t.name.clone(),
                duration: utils::format_duration(t.duration_ms),
                explicit: explicit_mark(t),
                preview: t.preview_url.clone().unwrap_or_default(),
            })
            .collect();
        println!("{}", Table::new(rows));
    } else {
        let rows: Vec<TrackTableRow> = tracks
            .iter()
            .map(|t| TrackTableRow {
                disc: t.disc_number,
                number: t.track_number,
                name: t.name.clone(),
                duration: utils::format_duration(t.duration_ms),
                explicit: explicit_mark(t),
            })
            .collect();
        println!("{}", Table::new(rows));
    }
}

/// Loads an album behind a spinner; exits when the album cannot be fetched.
pub(crate) async fn load_album(id: &str) -> Album {
    let pb = spinner("Fetching album...");
    let album = spotify::albums::get_album(id).await;
    pb.finish_and_clear();

    match album {
        Ok(album) => album,
        Err(e) => error!("Failed to load album {}: {}", id, e),
    }
}

fn explicit_mark(track: &Track) -> String {
    let mark = if track.explicit { "✓" } else { "-" };
    mark.to_string()
}
