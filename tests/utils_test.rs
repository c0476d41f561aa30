use cots::types::{Image, SimplifiedArtist, Track};
use cots::utils::*;

// Helper function to create a test image
fn create_test_image(width: u32, height: u32, url: &str) -> Image {
    Image {
        width: Some(width),
        height: Some(height),
        url: url.to_string(),
    }
}

// Helper function to create a test track
fn create_test_track(disc: u32, number: u32, name: &str) -> Track {
    Track {
        id: format!("{}_{}", disc, number),
        name: name.to_string(),
        track_number: number,
        disc_number: disc,
        duration_ms: 1000,
        artists: vec![SimplifiedArtist {
            id: "artist_id".to_string(),
            name: "Artist".to_string(),
            uri: "spotify:artist:artist_id".to_string(),
        }],
        explicit: false,
        preview_url: None,
        uri: format!("spotify:track:{}_{}", disc, number),
    }
}

fn test_images() -> Vec<Image> {
    vec![
        create_test_image(300, 300, "medium"),
        create_test_image(640, 640, "large"),
        create_test_image(64, 64, "small"),
    ]
}

#[test]
fn test_select_cover() {
    let images = test_images();

    assert_eq!(select_cover(&images, CoverSize::Max).unwrap().url, "large");
    assert_eq!(select_cover(&images, CoverSize::Min).unwrap().url, "small");

    // Closest width wins
    assert_eq!(
        select_cover(&images, CoverSize::Width(300)).unwrap().url,
        "medium"
    );
    assert_eq!(
        select_cover(&images, CoverSize::Width(500)).unwrap().url,
        "large"
    );
    assert_eq!(
        select_cover(&images, CoverSize::Width(100)).unwrap().url,
        "small"
    );

    // No images, no cover
    assert!(select_cover(&[], CoverSize::Max).is_none());
}

#[test]
fn test_smallest_image_url() {
    assert_eq!(smallest_image_url(&test_images()), "small");
    assert_eq!(smallest_image_url(&[]), "");
}

#[test]
fn test_cover_size_from_str() {
    assert_eq!("max".parse::<CoverSize>(), Ok(CoverSize::Max));
    assert_eq!("MIN".parse::<CoverSize>(), Ok(CoverSize::Min));
    assert_eq!("300".parse::<CoverSize>(), Ok(CoverSize::Width(300)));
    assert!("huge".parse::<CoverSize>().is_err());
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(200000), "3:20");
    assert_eq!(format_duration(5000), "0:05");

    // Seconds are rounded up
    assert_eq!(format_duration(65500), "1:06");
    assert_eq!(format_duration(0), "0:00");
}

#[test]
fn test_parse_spotify_uri() {
    assert_eq!(
        parse_spotify_uri("spotify:album:0sNOF9WDwhWunNAHPD3Baj"),
        Some(("album".to_string(), "0sNOF9WDwhWunNAHPD3Baj".to_string()))
    );
    assert_eq!(
        parse_spotify_uri("spotify:artist:abc"),
        Some(("artist".to_string(), "abc".to_string()))
    );

    assert_eq!(parse_spotify_uri("album/abc"), None);
    assert_eq!(parse_spotify_uri("spotify:album:"), None);
    assert_eq!(parse_spotify_uri(""), None);
}

#[test]
fn test_join_artist_names() {
    let track = create_test_track(1, 1, "One");
    assert_eq!(join_artist_names(&track.artists), "Artist");

    let artists = vec![
        SimplifiedArtist {
            id: "a".to_string(),
            name: "Artist A".to_string(),
            uri: String::new(),
        },
        SimplifiedArtist {
            id: "b".to_string(),
            name: "Artist B".to_string(),
            uri: String::new(),
        },
    ];
    assert_eq!(join_artist_names(&artists), "Artist A, Artist B");
    assert_eq!(join_artist_names(&[]), "");
}

#[test]
fn test_group_tracks_by_disc() {
    let tracks = vec![
        create_test_track(2, 1, "Disc 2 Track 1"),
        create_test_track(1, 1, "Disc 1 Track 1"),
        create_test_track(1, 2, "Disc 1 Track 2"),
        create_test_track(2, 2, "Disc 2 Track 2"),
    ];

    let grouped = group_tracks_by_disc(&tracks);

    assert_eq!(grouped.len(), 2);
    assert_eq!(grouped[0].0, 1);
    assert_eq!(grouped[1].0, 2);

    // Input order is kept within a disc
    let disc_one: Vec<&str> = grouped[0].1.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(disc_one, vec!["Disc 1 Track 1", "Disc 1 Track 2"]);
    let disc_two: Vec<&str> = grouped[1].1.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(disc_two, vec!["Disc 2 Track 1", "Disc 2 Track 2"]);

    assert!(group_tracks_by_disc(&[]).is_empty());
}

#[test]
fn test_select_tracks() {
    let tracks = vec![
        create_test_track(1, 1, "One"),
        create_test_track(1, 2, "Two"),
        create_test_track(1, 3, "Three"),
    ];

    let selected = select_tracks(&tracks, &[3, 1]);
    let names: Vec<&str> = selected.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["One", "Three"]);

    // Empty selection keeps everything
    assert_eq!(select_tracks(&tracks, &[]).len(), 3);
}

#[test]
fn test_any_track_has_preview() {
    let mut tracks = vec![create_test_track(1, 1, "One"), create_test_track(1, 2, "Two")];
    assert!(!any_track_has_preview(&tracks));

    tracks[1].preview_url = Some("https://p.scdn.co/mp3-preview/abc".to_string());
    assert!(any_track_has_preview(&tracks));
}

#[test]
fn test_release_year() {
    assert_eq!(release_year("1999-03-01"), "1999");
    assert_eq!(release_year("1999-03"), "1999");
    assert_eq!(release_year("1999"), "1999");
    assert_eq!(release_year("unknown"), "unknown");
    assert_eq!(release_year(""), "");
}

#[test]
fn test_parse_track_numbers() {
    assert_eq!(parse_track_numbers("1,2,5"), Ok(TrackNumbers(vec![1, 2, 5])));
    assert_eq!(parse_track_numbers(" 3 , 4 "), Ok(TrackNumbers(vec![3, 4])));
    assert_eq!(parse_track_numbers("1,,2"), Ok(TrackNumbers(vec![1, 2])));
    assert!(parse_track_numbers("1,two").is_err());
}
