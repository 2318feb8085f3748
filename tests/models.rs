//! Hydration of typed structures from captured API payloads.

use chrono::{Duration, NaiveDate};
use serde_json::json;
use spotify_web::model::{
    Album, AlbumType, Episode, Page, PlayableItem, Playlist, PrivateUser, SearchResult, Track,
    playlist::PlaylistTracks,
};

fn full_track() -> serde_json::Value {
    json!({
        "album": {
            "album_type": "album",
            "artists": [simple_artist()],
            "available_markets": ["DE", "US"],
            "external_urls": {"spotify": "https://open.spotify.com/album/6QaVfG1pHYl1z15ZxkvVDW"},
            "href": "https://api.spotify.com/v1/albums/6QaVfG1pHYl1z15ZxkvVDW",
            "id": "6QaVfG1pHYl1z15ZxkvVDW",
            "images": [{"url": "https://i.scdn.co/image/a", "height": 640, "width": 640}],
            "name": "Mob Rules",
            "release_date": "1981-11-04",
            "release_date_precision": "day",
            "total_tracks": 9,
            "type": "album",
            "uri": "spotify:album:6QaVfG1pHYl1z15ZxkvVDW"
        },
        "artists": [simple_artist()],
        "available_markets": ["DE", "US"],
        "disc_number": 1,
        "duration_ms": 222075,
        "explicit": false,
        "external_ids": {"isrc": "GBF088590110"},
        "external_urls": {"spotify": "https://open.spotify.com/track/4iV5W9uYEdYUVa79Axb7Rh"},
        "href": "https://api.spotify.com/v1/tracks/4iV5W9uYEdYUVa79Axb7Rh",
        "id": "4iV5W9uYEdYUVa79Axb7Rh",
        "is_local": false,
        "name": "The Mob Rules",
        "popularity": 48,
        "preview_url": null,
        "track_number": 4,
        "type": "track",
        "uri": "spotify:track:4iV5W9uYEdYUVa79Axb7Rh"
    })
}

fn simple_artist() -> serde_json::Value {
    json!({
        "external_urls": {"spotify": "https://open.spotify.com/artist/2FgNPojcg85KizBDr1drlx"},
        "href": "https://api.spotify.com/v1/artists/2FgNPojcg85KizBDr1drlx",
        "id": "2FgNPojcg85KizBDr1drlx",
        "name": "Black Sabbath",
        "type": "artist",
        "uri": "spotify:artist:2FgNPojcg85KizBDr1drlx"
    })
}

fn full_episode() -> serde_json::Value {
    json!({
        "audio_preview_url": "https://p.scdn.co/mp3-preview/x",
        "description": "A metal retrospective.",
        "duration_ms": 1685023,
        "explicit": false,
        "external_urls": {"spotify": "https://open.spotify.com/episode/512ojhOuo1ktJprKbVcKyQ"},
        "href": "https://api.spotify.com/v1/episodes/512ojhOuo1ktJprKbVcKyQ",
        "id": "512ojhOuo1ktJprKbVcKyQ",
        "images": [],
        "is_externally_hosted": false,
        "is_playable": true,
        "languages": ["en"],
        "name": "Heavy metal through the ages",
        "release_date": "2021-03",
        "release_date_precision": "month",
        "resume_point": {"fully_played": false, "resume_position_ms": 3500},
        "type": "episode",
        "uri": "spotify:episode:512ojhOuo1ktJprKbVcKyQ",
        "show": {
            "available_markets": ["US"],
            "description": "Riffs.",
            "explicit": false,
            "external_urls": {"spotify": "https://open.spotify.com/show/38bS44xjbVVZ3No3ByF4Ga"},
            "href": "https://api.spotify.com/v1/shows/38bS44xjbVVZ3No3ByF4Ga",
            "id": "38bS44xjbVVZ3No3ByF4Ga",
            "images": [],
            "is_externally_hosted": false,
            "languages": ["en"],
            "media_type": "audio",
            "name": "The Riff Cast",
            "publisher": "Riff Networks",
            "total_episodes": 122,
            "type": "show",
            "uri": "spotify:show:38bS44xjbVVZ3No3ByF4Ga"
        }
    })
}

#[test]
fn full_track_hydrates() {
    let track: Track = serde_json::from_value(full_track()).unwrap();
    assert_eq!(track.name, "The Mob Rules");
    assert_eq!(track.duration, Duration::milliseconds(222_075));
    assert_eq!(track.popularity, Some(48));
    assert_eq!(track.id.unwrap().uri(), "spotify:track:4iV5W9uYEdYUVa79Axb7Rh");
    assert_eq!(track.primary_artist().unwrap().name, "Black Sabbath");
    assert_eq!(
        track.external_ids.unwrap().get("isrc").map(String::as_str),
        Some("GBF088590110")
    );

    let album = track.album.unwrap();
    assert_eq!(album.album_type, Some(AlbumType::Album));
    assert_eq!(
        album.release_date(),
        NaiveDate::from_ymd_opt(1981, 11, 4)
    );
    // Simplified album payload: no full-object fields.
    assert!(album.tracks.is_none());
    assert!(album.popularity.is_none());
}

#[test]
fn simplified_track_in_album_listing_hydrates() {
    // Album track listings omit the album and popularity fields entirely.
    let payload = json!({
        "artists": [simple_artist()],
        "disc_number": 1,
        "duration_ms": 200040,
        "explicit": false,
        "external_urls": {},
        "name": "Turn Up The Night",
        "track_number": 1,
        "type": "track",
        "uri": "spotify:track:2TSFxjCnDAbezBnGWPTO12",
        "id": "2TSFxjCnDAbezBnGWPTO12",
        "is_local": false
    });
    let track: Track = serde_json::from_value(payload).unwrap();
    assert!(track.album.is_none());
    assert!(track.popularity.is_none());
    assert!(track.available_markets.is_empty());
}

#[test]
fn local_file_track_has_no_catalog_id() {
    let payload = json!({
        "album": {
            "artists": [],
            "external_urls": {},
            "id": null,
            "images": [],
            "name": "Bootleg Tapes",
            "release_date": null,
            "release_date_precision": null,
            "uri": null
        },
        "artists": [{"external_urls": {}, "id": null, "name": "Unknown", "uri": null}],
        "disc_number": 0,
        "duration_ms": 127000,
        "explicit": false,
        "external_urls": {},
        "id": null,
        "is_local": true,
        "name": "Rehearsal 3",
        "track_number": 0,
        "uri": "spotify:local:Unknown:Bootleg+Tapes:Rehearsal+3:127"
    });
    let track: Track = serde_json::from_value(payload).unwrap();
    assert!(track.is_local);
    assert!(track.id.is_none());
    assert!(track.album.as_ref().unwrap().id.is_none());
    assert_eq!(track.album.unwrap().release_date(), None);
}

#[test]
fn episode_hydrates_with_embedded_show() {
    let episode: Episode = serde_json::from_value(full_episode()).unwrap();
    assert_eq!(episode.release_date(), NaiveDate::from_ymd_opt(2021, 3, 1));
    assert_eq!(episode.duration, Duration::milliseconds(1_685_023));
    let resume = episode.resume_point.as_ref().unwrap();
    assert!(!resume.fully_played);
    assert_eq!(resume.resume_position, Duration::milliseconds(3500));
    assert_eq!(
        episode.show_id().unwrap().uri(),
        "spotify:show:38bS44xjbVVZ3No3ByF4Ga"
    );
    assert_eq!(episode.show.unwrap().name, "The Riff Cast");
}

#[test]
fn full_playlist_carries_inlined_items() {
    let payload = json!({
        "collaborative": false,
        "description": "Doom and gloom",
        "external_urls": {},
        "followers": {"total": 12},
        "href": "https://api.spotify.com/v1/playlists/3cEYpjA9oz9GiPac4AsH4n",
        "id": "3cEYpjA9oz9GiPac4AsH4n",
        "images": null,
        "name": "Sabbath Sunday",
        "owner": {"display_name": "dio", "external_urls": {}, "id": "dio", "type": "user"},
        "public": true,
        "snapshot_id": "MTgsZWFmMWZjY2I5ZjY1",
        "tracks": {
            "items": [
                {"added_at": "2015-01-09T04:17:16Z", "is_local": false, "track": full_track()},
                {"is_local": false, "track": full_episode()},
                {"is_local": false, "track": null}
            ],
            "total": 3
        },
        "type": "playlist",
        "uri": "spotify:playlist:3cEYpjA9oz9GiPac4AsH4n"
    });
    let playlist: Playlist = serde_json::from_value(payload).unwrap();
    // Nulled image array maps to empty.
    assert!(playlist.images.is_empty());
    assert_eq!(playlist.total_tracks(), 3);

    let items = playlist.tracks.items();
    assert_eq!(items.len(), 3);
    assert!(matches!(items[0].track, Some(PlayableItem::Track(_))));
    assert!(matches!(items[1].track, Some(PlayableItem::Episode(_))));
    assert!(items[2].track.is_none());
    assert_eq!(items[0].track.as_ref().unwrap().name(), "The Mob Rules");
}

#[test]
fn simplified_playlist_carries_track_reference() {
    let payload = json!({
        "collaborative": false,
        "external_urls": {},
        "id": "3cEYpjA9oz9GiPac4AsH4n",
        "images": [],
        "name": "Sabbath Sunday",
        "owner": {"external_urls": {}, "id": "dio"},
        "snapshot_id": "MTgsZWFmMWZjY2I5ZjY1",
        "tracks": {"href": "https://api.spotify.com/v1/playlists/3cEYpjA9oz9GiPac4AsH4n/tracks", "total": 42},
        "uri": "spotify:playlist:3cEYpjA9oz9GiPac4AsH4n"
    });
    let playlist: Playlist = serde_json::from_value(payload).unwrap();
    assert!(matches!(playlist.tracks, PlaylistTracks::Reference(_)));
    assert_eq!(playlist.total_tracks(), 42);
    assert!(playlist.tracks.items().is_empty());
    assert!(playlist.public.is_none());
}

#[test]
fn private_user_hydrates() {
    let payload = json!({
        "country": "DE",
        "display_name": "Ronnie",
        "email": "ronnie@example.com",
        "explicit_content": {"filter_enabled": false, "filter_locked": false},
        "external_urls": {},
        "followers": {"total": 7},
        "href": "https://api.spotify.com/v1/users/ronnie",
        "id": "ronnie",
        "images": [],
        "product": "premium",
        "type": "user",
        "uri": "spotify:user:ronnie"
    });
    let user: PrivateUser = serde_json::from_value(payload).unwrap();
    assert_eq!(user.id.id(), "ronnie");
    assert_eq!(user.product.as_deref(), Some("premium"));
    assert!(!user.explicit_content.unwrap().filter_enabled);
}

#[test]
fn search_result_has_one_page_per_requested_kind() {
    let payload = json!({
        "tracks": {
            "href": "https://api.spotify.com/v1/search?query=mob+rules&type=track",
            "items": [full_track(), null],
            "limit": 20,
            "offset": 0,
            "next": null,
            "previous": null,
            "total": 1
        }
    });
    let result: SearchResult = serde_json::from_value(payload).unwrap();
    let tracks = result.tracks.unwrap();
    assert_eq!(tracks.items.len(), 1);
    assert!(tracks.is_last());
    assert!(result.albums.is_none());
    assert!(result.episodes.is_none());
}

#[test]
fn several_albums_page_drops_nulls() {
    let page: Page<Album> = serde_json::from_value(json!({
        "items": [null, {
            "artists": [simple_artist()],
            "external_urls": {},
            "id": "6QaVfG1pHYl1z15ZxkvVDW",
            "images": [],
            "name": "Mob Rules",
            "release_date": "1981",
            "release_date_precision": "year",
            "uri": "spotify:album:6QaVfG1pHYl1z15ZxkvVDW"
        }],
        "total": 2
    }))
    .unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(
        page.items[0].release_date(),
        NaiveDate::from_ymd_opt(1981, 1, 1)
    );
}
