use std::path::PathBuf;

use crate::{
    cli::album::load_album,
    config,
    cue::{AppInfo, CueSheetBuilder},
    download::FileDownloader,
    error, info, success,
    types::{Album, Track},
    utils, warning,
};

/// Options of the `cue` command.
#[derive(Debug, Clone, Default)]
pub struct CueOptions {
    pub output: Option<PathBuf>,
    pub filename: Option<String>,
    pub offset_ms: Option<u64>,
    pub tracks: Vec<u32>,
    pub year_only: bool,
    pub print: bool,
}

/// Exports the CUE sheet of an album.
///
/// Every disc of the album becomes one disc block. With `tracks` set only the
/// selected track numbers are exported, on every disc.
pub async fn cue(id: String, options: CueOptions) {
    let album = load_album(&id).await;

    // --print writes the sheet to stdout, which must stay valid CUE
    if !options.print {
        report_discs(&album, &options.tracks);
    }

    let builder = build_sheet(
        &album,
        AppInfo::from_env(),
        options.offset_ms.unwrap_or_else(config::offset_per_track_ms),
        &options.tracks,
        options.year_only,
    );

    if options.print {
        print!("{}", builder.render());
        return;
    }

    let downloader = FileDownloader::new(options.output.unwrap_or_else(config::download_dir));
    match builder
        .export_and_download(&downloader, options.filename.as_deref())
        .await
    {
        Ok(path) => success!("CUE sheet saved to {}", path.display()),
        Err(e) => error!("Failed to save CUE sheet: {}", e),
    }
}

fn report_discs(album: &Album, track_numbers: &[u32]) {
    let discs = utils::group_tracks_by_disc(&album.tracks.items);
    for (disc_number, tracks) in &discs {
        let selected = utils::select_tracks(tracks, track_numbers);
        if selected.is_empty() {
            warning!("No selected tracks on disc {}.", disc_number);
        } else {
            info!("Adding disc {} with {} tracks.", disc_number, selected.len());
        }
    }
}

/// Discs of an album with their selected tracks, discs ascending.
///
/// Discs without a selected track are left out.
pub fn selected_discs(album: &Album, track_numbers: &[u32]) -> Vec<(u32, Vec<Track>)> {
    utils::group_tracks_by_disc(&album.tracks.items)
        .into_iter()
        .map(|(disc_number, tracks)| (disc_number, utils::select_tracks(&tracks, track_numbers)))
        .filter(|(_, tracks)| !tracks.is_empty())
        .collect()
}

/// Builds the sheet for an album, one disc block per disc.
///
/// Writes nothing to the console; `REM TOTALDISCS` counts every disc of the
/// album, including discs without a selected track.
pub fn build_sheet(
    album: &Album,
    app: AppInfo,
    offset_per_track_ms: u64,
    track_numbers: &[u32],
    year_only: bool,
) -> CueSheetBuilder {
    let discs = utils::group_tracks_by_disc(&album.tracks.items);
    let year = if year_only {
        utils::release_year(&album.release_date)
    } else {
        album.release_date.clone()
    };

    let mut builder = CueSheetBuilder::new(
        app,
        utils::join_artist_names(&album.artists),
        album.name.clone(),
        year,
        Some(discs.len() as u32),
    );

    for (disc_number, tracks) in selected_discs(album, track_numbers) {
        builder.add_disk_with_offset(disc_number, &tracks, offset_per_track_ms);
    }

    builder
}
