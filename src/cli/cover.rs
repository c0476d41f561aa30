use std::path::PathBuf;

use crate::{
    Res,
    cli::{album::load_album, spinner},
    config,
    download::{Downloader, FileDownloader},
    error, spotify, success,
    types::Album,
    utils::{self, CoverSize},
};

/// Downloads the album cover as `<artists> - <album>.jpg`.
pub async fn cover(id: String, output: Option<PathBuf>, size: CoverSize) {
    let album = load_album(&id).await;
    let downloader = FileDownloader::new(output.unwrap_or_else(config::download_dir));

    let pb = spinner("Downloading cover...");
    let result = download_cover(&album, size, &downloader).await;
    pb.finish_and_clear();

    match result {
        Ok(path) => success!("Cover saved to {}", path.display()),
        Err(e) => error!("Failed to download cover: {}", e),
    }
}

async fn download_cover<D: Downloader>(
    album: &Album,
    size: CoverSize,
    downloader: &D,
) -> Res<PathBuf> {
    let image = utils::select_cover(&album.images, size)
        .ok_or_else(|| format!("Album {} has no cover.", album.name))?;

    let data = spotify::download_bytes(&image.url).await?;
    let path = downloader.save(&data, &cover_filename(album)).await?;
    Ok(path)
}

pub fn cover_filename(album: &Album) -> String {
    format!(
        "{} - {}.jpg",
        utils::join_artist_names(&album.artists),
        album.name
    )
}
