//! Identity cache for hydrated structures.
//!
//! One map per resource type, keyed by typed ID and holding `Arc`s so that
//! related structures can hand out references without cloning payloads.
//! Entries are inserted opportunistically whenever a response is hydrated,
//! overwritten on refetch, and never evicted. Storing an object also stores
//! the objects embedded in it (a track's artists and album, an episode's
//! show, a playlist's owner), which is what lets accessors resolve
//! relations without another network call.

use crate::model::{
    Album, AlbumId, Artist, ArtistId, Episode, EpisodeId, Playlist, PlaylistId, PublicUser, Show,
    ShowId, Track, TrackId, UserId,
};
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

/// Per-type opt-outs. A disabled type is neither stored nor consulted, so
/// lookups for it always miss.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct CacheConfig {
    pub tracks: bool,
    pub albums: bool,
    pub artists: bool,
    pub playlists: bool,
    pub shows: bool,
    pub episodes: bool,
    pub users: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            tracks: true,
            albums: true,
            artists: true,
            playlists: true,
            shows: true,
            episodes: true,
            users: true,
        }
    }
}

impl CacheConfig {
    /// Disables every type; the client then behaves as a plain fetcher.
    pub const fn disabled() -> Self {
        Self {
            tracks: false,
            albums: false,
            artists: false,
            playlists: false,
            shows: false,
            episodes: false,
            users: false,
        }
    }
}

#[derive(Debug, Default)]
pub struct Cache {
    config: CacheConfig,
    tracks: DashMap<TrackId, Arc<Track>>,
    albums: DashMap<AlbumId, Arc<Album>>,
    artists: DashMap<ArtistId, Arc<Artist>>,
    playlists: DashMap<PlaylistId, Arc<Playlist>>,
    shows: DashMap<ShowId, Arc<Show>>,
    episodes: DashMap<EpisodeId, Arc<Episode>>,
    users: DashMap<UserId, Arc<PublicUser>>,
}

impl Cache {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    // Lookups. A hit hands back the stored Arc.

    pub fn track(&self, id: &TrackId) -> Option<Arc<Track>> {
        if !self.config.tracks {
            return None;
        }
        self.tracks.get(id).map(|entry| Arc::clone(&entry))
    }

    pub fn album(&self, id: &AlbumId) -> Option<Arc<Album>> {
        if !self.config.albums {
            return None;
        }
        self.albums.get(id).map(|entry| Arc::clone(&entry))
    }

    pub fn artist(&self, id: &ArtistId) -> Option<Arc<Artist>> {
        if !self.config.artists {
            return None;
        }
        self.artists.get(id).map(|entry| Arc::clone(&entry))
    }

    pub fn playlist(&self, id: &PlaylistId) -> Option<Arc<Playlist>> {
        if !self.config.playlists {
            return None;
        }
        self.playlists.get(id).map(|entry| Arc::clone(&entry))
    }

    pub fn show(&self, id: &ShowId) -> Option<Arc<Show>> {
        if !self.config.shows {
            return None;
        }
        self.shows.get(id).map(|entry| Arc::clone(&entry))
    }

    pub fn episode(&self, id: &EpisodeId) -> Option<Arc<Episode>> {
        if !self.config.episodes {
            return None;
        }
        self.episodes.get(id).map(|entry| Arc::clone(&entry))
    }

    pub fn user(&self, id: &UserId) -> Option<Arc<PublicUser>> {
        if !self.config.users {
            return None;
        }
        self.users.get(id).map(|entry| Arc::clone(&entry))
    }

    // Stores. Each returns the Arc now held by the cache (or a fresh one
    // when the type is disabled or the object has no catalog id, as local
    // files don't).

    pub fn store_track(&self, track: Track) -> Arc<Track> {
        for artist in &track.artists {
            self.store_artist(artist.clone());
        }
        if let Some(album) = &track.album {
            self.store_album(album.clone());
        }
        let track = Arc::new(track);
        if self.config.tracks
            && let Some(id) = track.id
        {
            debug!(id = %id, "caching track");
            self.tracks.insert(id, Arc::clone(&track));
        }
        track
    }

    pub fn store_album(&self, album: Album) -> Arc<Album> {
        for artist in &album.artists {
            self.store_artist(artist.clone());
        }
        if let Some(tracks) = &album.tracks {
            for track in &tracks.items {
                self.store_track(track.clone());
            }
        }
        let album = Arc::new(album);
        if self.config.albums
            && let Some(id) = album.id
        {
            debug!(id = %id, "caching album");
            self.albums.insert(id, Arc::clone(&album));
        }
        album
    }

    pub fn store_artist(&self, artist: Artist) -> Arc<Artist> {
        let artist = Arc::new(artist);
        if self.config.artists
            && let Some(id) = artist.id
        {
            self.artists.insert(id, Arc::clone(&artist));
        }
        artist
    }

    pub fn store_playlist(&self, playlist: Playlist) -> Arc<Playlist> {
        self.store_user(playlist.owner.clone());
        for item in playlist.tracks.items() {
            if let Some(crate::model::PlayableItem::Track(track)) = &item.track {
                self.store_track(track.clone());
            }
        }
        let playlist = Arc::new(playlist);
        if self.config.playlists {
            debug!(id = %playlist.id, "caching playlist");
            self.playlists.insert(playlist.id, Arc::clone(&playlist));
        }
        playlist
    }

    pub fn store_show(&self, show: Show) -> Arc<Show> {
        if let Some(episodes) = &show.episodes {
            for episode in &episodes.items {
                self.store_episode(episode.clone());
            }
        }
        let show = Arc::new(show);
        if self.config.shows {
            debug!(id = %show.id, "caching show");
            self.shows.insert(show.id, Arc::clone(&show));
        }
        show
    }

    pub fn store_episode(&self, episode: Episode) -> Arc<Episode> {
        if let Some(show) = &episode.show {
            self.store_show((**show).clone());
        }
        let episode = Arc::new(episode);
        if self.config.episodes {
            self.episodes.insert(episode.id, Arc::clone(&episode));
        }
        episode
    }

    pub fn store_user(&self, user: PublicUser) -> Arc<PublicUser> {
        let user = Arc::new(user);
        if self.config.users {
            self.users.insert(user.id.clone(), Arc::clone(&user));
        }
        user
    }

    /// Number of entries across all types, mainly for diagnostics.
    pub fn len(&self) -> usize {
        self.tracks.len()
            + self.albums.len()
            + self.artists.len()
            + self.playlists.len()
            + self.shows.len()
            + self.episodes.len()
            + self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every entry of every type.
    pub fn clear(&self) {
        self.tracks.clear();
        self.albums.clear();
        self.artists.clear();
        self.playlists.clear();
        self.shows.clear();
        self.episodes.clear();
        self.users.clear();
    }
}
