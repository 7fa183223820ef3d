//! Adapter layer: Convert Jamendo DTOs to model entities
//!
//! This is the ONLY place where Jamendo DTO types are converted to model
//! types. Id prefixing for this source happens here and nowhere else.

use rand::Rng;

use super::dto;
use crate::model::{Album, AlbumRef, EntityRef, Playlist, PlaylistDetail, Source, Track};

/// Convert a Jamendo track into the canonical shape.
///
/// Jamendo reports duration in whole seconds and has no popularity signal in
/// the track payload, so popularity is synthesized into a mid-range band.
pub fn to_track(raw: dto::JamendoTrack) -> Track {
    let album = (!raw.album_id.is_empty()).then(|| AlbumRef {
        id: Source::Jamendo.id(&raw.album_id),
        name: raw.album_name,
        image_urls: non_empty(vec![raw.album_image, raw.image.clone()]),
    });

    let artists = if raw.artist_name.is_empty() {
        vec![]
    } else {
        vec![EntityRef::new(
            Source::Jamendo.id(&raw.artist_id),
            raw.artist_name,
        )]
    };

    let genres = raw
        .musicinfo
        .and_then(|mi| mi.tags)
        .map(|t| t.genres)
        .unwrap_or_default();

    Track {
        id: Source::Jamendo.id(&raw.id),
        name: raw.name,
        artists,
        album,
        duration_ms: raw.duration * 1000,
        audio_url: non_first(raw.audio).or(non_first(raw.audiodownload)),
        preview_url: None,
        source: Source::Jamendo,
        popularity: synthetic_popularity(),
        genres,
    }
}

pub fn to_album(raw: dto::JamendoAlbum) -> Album {
    let year = Album::year_from_date(&raw.releasedate);
    let artists = if raw.artist_name.is_empty() {
        vec![]
    } else {
        vec![EntityRef::new(
            Source::Jamendo.id(&raw.artist_id),
            raw.artist_name,
        )]
    };

    Album {
        id: Source::Jamendo.id(&raw.id),
        name: raw.name,
        artists,
        image_urls: non_empty(vec![raw.image]),
        release_date: non_first(raw.releasedate),
        year,
        track_count: 0,
        source: Source::Jamendo,
    }
}

pub fn to_playlist(raw: dto::JamendoPlaylist) -> Playlist {
    Playlist {
        id: Source::Jamendo.id(&raw.id),
        name: raw.name,
        description: String::new(),
        image_urls: vec![],
        track_count: 0,
        owner: non_first(raw.user_name),
        source: Source::Jamendo,
    }
}

pub fn to_playlist_detail(raw: dto::JamendoPlaylistTracks) -> PlaylistDetail {
    let tracks: Vec<Track> = raw.tracks.into_iter().map(to_track).collect();
    let playlist = Playlist {
        id: Source::Jamendo.id(&raw.id),
        name: raw.name,
        description: String::new(),
        image_urls: tracks
            .iter()
            .filter_map(|t| t.album.as_ref())
            .flat_map(|a| a.image_urls.first().cloned())
            .take(1)
            .collect(),
        track_count: tracks.len() as u32,
        owner: non_first(raw.user_name),
        source: Source::Jamendo,
    };
    PlaylistDetail { playlist, tracks }
}

/// Mid-range filler for a source with no real popularity signal.
fn synthetic_popularity() -> u8 {
    rand::rng().random_range(30..=80)
}

fn non_first(s: String) -> Option<String> {
    (!s.is_empty()).then_some(s)
}

fn non_empty(urls: Vec<String>) -> Vec<String> {
    let mut urls: Vec<String> = urls.into_iter().filter(|u| !u.is_empty()).collect();
    urls.dedup();
    urls
}
