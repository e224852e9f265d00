use mixcloud_api::types::{Cloudcast, Page};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_cloudcasts_full() {
    let json = load_fixture("cloudcasts.json");
    let page: Page<Cloudcast> = serde_json::from_str(&json).unwrap();
    assert_eq!(page.data.len(), 2);
    assert_eq!(
        page.next_url(),
        Some("https://api.mixcloud.com/somebody/playlists/late-night-tapes/cloudcasts/?limit=100&offset=100")
    );

    let first = &page.data[0];
    assert_eq!(first.key, "/somebody/late-night-tape-1/");
    assert_eq!(first.name, "Late Night Tape #1");
    assert_eq!(first.slug.as_deref(), Some("late-night-tape-1"));
    assert_eq!(first.audio_length, 3672);
    assert_eq!(first.play_count, Some(1204));
    assert_eq!(first.created_time.to_rfc3339(), "2023-04-12T21:30:00+00:00");
    assert_eq!(first.tags.len(), 2);
    assert_eq!(first.tags[0].name, "Ambient");

    let pictures = first.pictures.as_ref().unwrap();
    assert_eq!(
        pictures.extra_large.as_deref(),
        Some("https://thumbnailer.mixcloud.com/unsafe/600x600/extaudio/tape1.jpg")
    );
    assert_eq!(
        pictures.square_1024.as_deref(),
        Some("https://thumbnailer.mixcloud.com/unsafe/1024x1024/extaudio/tape1.jpg")
    );

    let user = first.user.as_ref().unwrap();
    assert_eq!(user.username, "somebody");
}

#[test]
fn deserialize_last_page_without_paging() {
    let json = load_fixture("cloudcasts_last.json");
    let page: Page<Cloudcast> = serde_json::from_str(&json).unwrap();
    assert_eq!(page.data.len(), 1);
    assert!(page.paging.is_none());
    assert_eq!(page.next_url(), None);

    // Optional metadata is genuinely optional.
    let only = &page.data[0];
    assert_eq!(only.play_count, None);
    assert!(only.pictures.is_none());
    assert!(only.user.is_none());
}

#[test]
fn deserialize_empty_page() {
    let json = load_fixture("cloudcasts_empty.json");
    let page: Page<Cloudcast> = serde_json::from_str(&json).unwrap();
    assert!(page.data.is_empty());
    assert_eq!(page.next_url(), None);
}

#[test]
fn null_picture_sizes_accepted() {
    let json = load_fixture("cloudcasts.json");
    let page: Page<Cloudcast> = serde_json::from_str(&json).unwrap();
    let pictures = page.data[1].pictures.as_ref().unwrap();
    assert!(pictures.small.is_none());
    assert!(pictures.extra_large.is_none());
    assert_eq!(
        pictures.medium.as_deref(),
        Some("https://thumbnailer.mixcloud.com/unsafe/100x100/extaudio/tape2.jpg")
    );
}
