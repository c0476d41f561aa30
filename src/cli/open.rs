use crate::{config, error, info, spotify, warning};

/// Opens an artist or album in the Spotify web player.
///
/// `reference` is either `<kind>/<id>` as printed by `search` or a Spotify
/// URI like `spotify:album:<id>`.
pub async fn open(reference: String) {
    let Some((kind, id)) = split_reference(&reference) else {
        error!("Cannot parse reference '{}'.", reference);
    };

    let url = spotify::play_url(&config::spotify_playurl(), &kind, &id);
    info!("Opening {}", url);
    if webbrowser::open(&url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            url
        )
    }
}

fn split_reference(reference: &str) -> Option<(String, String)> {
    if let Some(parsed) = crate::utils::parse_spotify_uri(reference) {
        return Some(parsed);
    }

    match reference.split_once('/') {
        Some((kind, id)) if !kind.is_empty() && !id.is_empty() => {
            Some((kind.to_string(), id.to_string()))
        }
        _ => None,
    }
}
