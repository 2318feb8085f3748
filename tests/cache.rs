//! Identity cache semantics: opportunistic population, nested hydration,
//! overwrite on refetch, per-type opt-outs.

use serde_json::json;
use spotify_web::{Cache, CacheConfig};
use spotify_web::model::{ArtistId, Episode, Playlist, Track, TrackId};

fn track(name: &str) -> Track {
    serde_json::from_value(json!({
        "album": {
            "artists": [],
            "external_urls": {},
            "id": "6QaVfG1pHYl1z15ZxkvVDW",
            "images": [],
            "name": "Mob Rules",
            "release_date": "1981-11-04",
            "release_date_precision": "day",
            "uri": "spotify:album:6QaVfG1pHYl1z15ZxkvVDW"
        },
        "artists": [{
            "external_urls": {},
            "id": "2FgNPojcg85KizBDr1drlx",
            "name": "Black Sabbath",
            "uri": "spotify:artist:2FgNPojcg85KizBDr1drlx"
        }],
        "disc_number": 1,
        "duration_ms": 222075,
        "explicit": false,
        "external_urls": {},
        "id": "4iV5W9uYEdYUVa79Axb7Rh",
        "is_local": false,
        "name": name,
        "track_number": 4,
        "uri": "spotify:track:4iV5W9uYEdYUVa79Axb7Rh"
    }))
    .unwrap()
}

fn track_id() -> TrackId {
    TrackId::from_id("4iV5W9uYEdYUVa79Axb7Rh").unwrap()
}

#[test]
fn store_then_lookup_returns_same_instance() {
    let cache = Cache::new(CacheConfig::default());
    let stored = cache.store_track(track("The Mob Rules"));
    let found = cache.track(&track_id()).unwrap();
    assert!(std::sync::Arc::ptr_eq(&stored, &found));
}

#[test]
fn storing_a_track_hydrates_its_relations() {
    let cache = Cache::new(CacheConfig::default());
    cache.store_track(track("The Mob Rules"));

    let artist_id = ArtistId::from_id("2FgNPojcg85KizBDr1drlx").unwrap();
    assert_eq!(cache.artist(&artist_id).unwrap().name, "Black Sabbath");

    let album_id = spotify_web::model::AlbumId::from_id("6QaVfG1pHYl1z15ZxkvVDW").unwrap();
    assert_eq!(cache.album(&album_id).unwrap().name, "Mob Rules");
    // Track, album and artist: three entries.
    assert_eq!(cache.len(), 3);
}

#[test]
fn refetch_overwrites_the_entry() {
    let cache = Cache::new(CacheConfig::default());
    cache.store_track(track("Old Name"));
    cache.store_track(track("New Name"));
    assert_eq!(cache.track(&track_id()).unwrap().name, "New Name");
    assert_eq!(cache.len(), 3);
}

#[test]
fn disabled_types_are_never_stored_or_consulted() {
    let config = CacheConfig {
        tracks: false,
        ..CacheConfig::default()
    };
    let cache = Cache::new(config);
    cache.store_track(track("The Mob Rules"));
    // The track itself is skipped but its relations still land.
    assert!(cache.track(&track_id()).is_none());
    assert_eq!(cache.len(), 2);

    let cache = Cache::new(CacheConfig::disabled());
    cache.store_track(track("The Mob Rules"));
    assert!(cache.is_empty());
}

#[test]
fn local_tracks_without_ids_are_not_cached() {
    let cache = Cache::new(CacheConfig::default());
    let local: Track = serde_json::from_value(json!({
        "artists": [{"external_urls": {}, "id": null, "name": "Unknown", "uri": null}],
        "disc_number": 0,
        "duration_ms": 127000,
        "explicit": false,
        "external_urls": {},
        "id": null,
        "is_local": true,
        "name": "Rehearsal 3",
        "track_number": 0
    }))
    .unwrap();
    let stored = cache.store_track(local);
    assert_eq!(stored.name, "Rehearsal 3");
    assert!(cache.is_empty());
}

#[test]
fn storing_an_episode_hydrates_its_show() {
    let cache = Cache::new(CacheConfig::default());
    let episode: Episode = serde_json::from_value(json!({
        "description": "Riffs.",
        "duration_ms": 1685023,
        "explicit": false,
        "external_urls": {},
        "id": "512ojhOuo1ktJprKbVcKyQ",
        "is_externally_hosted": false,
        "name": "Heavy metal through the ages",
        "release_date": "2021-03-05",
        "release_date_precision": "day",
        "uri": "spotify:episode:512ojhOuo1ktJprKbVcKyQ",
        "show": {
            "description": "Riffs.",
            "explicit": false,
            "external_urls": {},
            "id": "38bS44xjbVVZ3No3ByF4Ga",
            "name": "The Riff Cast",
            "publisher": "Riff Networks",
            "uri": "spotify:show:38bS44xjbVVZ3No3ByF4Ga"
        }
    }))
    .unwrap();
    let show_id = episode.show_id().unwrap();
    let stored = cache.store_episode(episode);

    // The parent show can now be resolved without another fetch.
    assert_eq!(cache.show(&show_id).unwrap().name, "The Riff Cast");
    assert_eq!(cache.episode(&stored.id).unwrap().name, stored.name);
}

#[test]
fn storing_a_playlist_hydrates_owner_and_tracks() {
    let cache = Cache::new(CacheConfig::default());
    let playlist: Playlist = serde_json::from_value(json!({
        "collaborative": false,
        "external_urls": {},
        "id": "3cEYpjA9oz9GiPac4AsH4n",
        "images": [],
        "name": "Sabbath Sunday",
        "owner": {"external_urls": {}, "id": "dio", "display_name": "dio"},
        "snapshot_id": "MTgsZWFmMWZjY2I5ZjY1",
        "tracks": {"items": [{"is_local": false, "track": null}], "total": 1},
        "uri": "spotify:playlist:3cEYpjA9oz9GiPac4AsH4n"
    }))
    .unwrap();
    cache.store_playlist(playlist);

    let user_id = spotify_web::model::UserId::from_id("dio").unwrap();
    assert_eq!(
        cache.user(&user_id).unwrap().display_name.as_deref(),
        Some("dio")
    );

    cache.clear();
    assert!(cache.is_empty());
}
