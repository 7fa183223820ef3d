//! Adapter layer: Convert Deezer DTOs to model entities
//!
//! This is the ONLY place where Deezer DTO types are converted to model
//! types. Deezer's `rank` (0..=1_000_000) is scaled to the 0-100 popularity
//! band; follower counts come from `nb_fan`.

use super::dto;
use crate::model::{Album, AlbumDetail, AlbumRef, Artist, EntityRef, Source, Track};

pub fn to_track(raw: dto::DeezerTrack) -> Track {
    let artists = raw
        .artist
        .as_ref()
        .map(|a| vec![EntityRef::new(Source::Deezer.id(a.id), a.name.clone())])
        .unwrap_or_default();

    let album = raw.album.as_ref().map(|a| AlbumRef {
        id: Source::Deezer.id(a.id),
        name: a.title.clone(),
        image_urls: images(&[&a.cover_big, &a.cover_medium]),
    });

    Track {
        id: Source::Deezer.id(raw.id),
        name: raw.title,
        artists,
        album,
        duration_ms: raw.duration * 1000,
        audio_url: None,
        preview_url: (!raw.preview.is_empty()).then_some(raw.preview),
        source: Source::Deezer,
        popularity: rank_to_popularity(raw.rank),
        genres: vec![],
    }
}

pub fn to_artist(raw: dto::DeezerArtist) -> Artist {
    Artist {
        id: Source::Deezer.id(raw.id),
        name: raw.name,
        image_urls: images(&[&raw.picture_big, &raw.picture_medium]),
        genres: vec![],
        followers: raw.nb_fan,
        popularity: fans_to_popularity(raw.nb_fan),
        source: Source::Deezer,
    }
}

pub fn to_album(raw: dto::DeezerAlbum) -> Album {
    let artists = raw
        .artist
        .as_ref()
        .map(|a| vec![EntityRef::new(Source::Deezer.id(a.id), a.name.clone())])
        .unwrap_or_default();

    let year = raw.release_date.as_deref().and_then(Album::year_from_date);

    Album {
        id: Source::Deezer.id(raw.id),
        name: raw.title,
        artists,
        image_urls: images(&[&raw.cover_big, &raw.cover_medium]),
        release_date: raw.release_date,
        year,
        track_count: raw.nb_tracks,
        source: Source::Deezer,
    }
}

/// Album detail keeps the track listing; embedded tracks lack album refs, so
/// the parent album's reference is stitched onto each of them.
pub fn to_album_detail(raw: dto::DeezerAlbum) -> AlbumDetail {
    let track_dtos = raw.tracks.clone().map(|t| t.data).unwrap_or_default();
    let album = to_album(raw);

    let album_ref = AlbumRef {
        id: album.id.clone(),
        name: album.name.clone(),
        image_urls: album.image_urls.clone(),
    };

    let tracks = track_dtos
        .into_iter()
        .map(|t| {
            let mut track = to_track(t);
            if track.album.is_none() {
                track.album = Some(album_ref.clone());
            }
            track
        })
        .collect();

    AlbumDetail { album, tracks }
}

fn rank_to_popularity(rank: u64) -> u8 {
    (rank / 10_000).min(100) as u8
}

fn fans_to_popularity(fans: u64) -> u8 {
    // log-ish bands: 1M+ fans is a top artist
    match fans {
        0..=1_000 => 10,
        1_001..=10_000 => 25,
        10_001..=100_000 => 45,
        100_001..=1_000_000 => 70,
        _ => 90,
    }
}

fn images(urls: &[&String]) -> Vec<String> {
    let mut out: Vec<String> = urls
        .iter()
        .filter(|u| !u.is_empty())
        .map(|u| u.to_string())
        .collect();
    out.dedup();
    out
}
