use crate::{
    config,
    spotify::{SearchType, load_url, search_url},
    types::{Paging, SearchItem, SearchResponse},
};

/// Searches the Spotify catalog for artists or albums.
///
/// # Arguments
///
/// * `search_type` - Entity to search for
/// * `query` - Free text query
///
/// # Returns
///
/// The first page of results. A response without a paging object for the
/// requested type yields an empty page.
///
/// # Example
///
/// ```
/// let page = search(SearchType::Album, "kind of blue").await?;
/// for item in page.items {
///     println!("{}", item.name);
/// }
/// ```
pub async fn search(
    search_type: SearchType,
    query: &str,
) -> Result<Paging<SearchItem>, reqwest::Error> {
    let api_url = search_url(&config::spotify_apiurl(), search_type, query);
    let response = load_url::<SearchResponse>(&api_url).await?;
    Ok(select_page(search_type, response))
}

/// Loads the page behind `next` and appends its items to the known ones.
///
/// Returns `Ok(None)` when `paging` is the last page. The returned paging
/// object carries the `next` link of the newly loaded page.
pub async fn next_page(
    search_type: SearchType,
    paging: &Paging<SearchItem>,
) -> Result<Option<Paging<SearchItem>>, reqwest::Error> {
    let Some(next) = &paging.next else {
        return Ok(None);
    };

    let response = load_url::<SearchResponse>(next).await?;
    Ok(Some(merge_pages(paging, select_page(search_type, response))))
}

/// Picks the paging object of the searched type out of a search response.
pub fn select_page(search_type: SearchType, response: SearchResponse) -> Paging<SearchItem> {
    match search_type {
        SearchType::Artist => response
            .artists
            .map(convert_page)
            .unwrap_or_else(empty_page),
        SearchType::Album => response
            .albums
            .map(convert_page)
            .unwrap_or_else(empty_page),
    }
}

/// Previous items first, followed by the items of `next`.
pub fn merge_pages(previous: &Paging<SearchItem>, next: Paging<SearchItem>) -> Paging<SearchItem> {
    let mut items = previous.items.clone();
    items.extend(next.items);
    Paging { items, ..next }
}

fn convert_page<T: Into<SearchItem>>(page: Paging<T>) -> Paging<SearchItem> {
    Paging {
        items: page.items.into_iter().map(Into::into).collect(),
        next: page.next,
        previous: page.previous,
        limit: page.limit,
        offset: page.offset,
        total: page.total,
    }
}

fn empty_page() -> Paging<SearchItem> {
    Paging {
        items: Vec::new(),
        next: None,
        previous: None,
        limit: None,
        offset: None,
        total: Some(0),
    }
}
