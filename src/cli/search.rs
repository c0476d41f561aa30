use tabled::Table;

use crate::{
    cli::spinner,
    error, info,
    spotify::{self, SearchType},
    types::{SearchItem, SearchTableRow},
    utils, warning,
};

/// Searches the catalog and prints the results as a table.
///
/// # Arguments
///
/// * `query` - Free text query; an empty query is rejected
/// * `search_type` - `artist(s)` or `album(s)`
/// * `pages` - Number of result pages to load by following `next` links
pub async fn search(query: String, search_type: String, pages: u32) {
    if query.trim().is_empty() {
        error!("Search query must not be empty.");
    }

    let search_type: SearchType = match search_type.parse() {
        Ok(t) => t,
        Err(e) => error!("{}", e),
    };

    let pb = spinner(&format!(
        "Searching {} for '{}'...",
        search_type.result_key(),
        query
    ));
    let mut results = match spotify::search::search(search_type, &query).await {
        Ok(results) => results,
        Err(e) => {
            pb.finish_and_clear();
            error!("Search failed: {}", e);
        }
    };

    for _ in 1..pages.max(1) {
        match spotify::search::next_page(search_type, &results).await {
            Ok(Some(merged)) => results = merged,
            Ok(None) => break,
            Err(e) => {
                warning!("Failed to load next page: {}", e);
                break;
            }
        }
    }
    pb.finish_and_clear();

    if results.items.is_empty() {
        info!("No results.");
        return;
    }

    let rows: Vec<SearchTableRow> = results.items.iter().map(to_row).collect();
    println!("{}", Table::new(rows));

    if results.next.is_some() {
        info!(
            "Showing {} of {} results. Use --pages to load more.",
            results.items.len(),
            results.total.unwrap_or(0)
        );
    }
}

fn to_row(item: &SearchItem) -> SearchTableRow {
    let reference = match utils::parse_spotify_uri(&item.uri) {
        Some((kind, id)) => format!("{}/{}", kind, id),
        None => item.uri.clone(),
    };

    SearchTableRow {
        name: item.name.clone(),
        reference,
        cover: utils::smallest_image_url(&item.images),
    }
}
