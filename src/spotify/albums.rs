use crate::{
    config,
    spotify::{album_url, load_url},
    types::{Album, Paging, Track},
};

/// Retrieves an album with its complete track listing.
///
/// The album endpoint embeds only the first page of tracks. Albums with more
/// tracks than fit on one page carry a `next` link in `tracks`, which is
/// followed until the listing is complete so exports never miss a track.
///
/// # Arguments
///
/// * `id` - Spotify ID of the album
///
/// # Example
///
/// ```
/// let album = get_album("0sNOF9WDwhWunNAHPD3Baj").await?;
/// println!("{} has {} tracks", album.name, album.tracks.items.len());
/// ```
pub async fn get_album(id: &str) -> Result<Album, reqwest::Error> {
    let api_url = album_url(&config::spotify_apiurl(), id);
    let mut album = load_url::<Album>(&api_url).await?;

    while let Some(next) = album.tracks.next.take() {
        let page = load_url::<Paging<Track>>(&next).await?;
        album.tracks.items.extend(page.items);
        album.tracks.next = page.next;
    }

    Ok(album)
}
