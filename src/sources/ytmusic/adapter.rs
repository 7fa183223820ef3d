//! YouTube Music DTO to Model Adapters
//!
//! Converts bridge API responses into canonical model entities.

use rand::Rng;

use super::dto;
use crate::model::{
    Album, AlbumDetail, AlbumRef, Artist, EntityRef, Playlist, PlaylistDetail, Source, Track,
};

/// Convert a bridge track to a model Track.
///
/// No stream URL: playback resolution happens client-side from the video id,
/// so `audio_url` stays empty here.
pub fn to_track(raw: dto::YtTrack) -> Track {
    let album = raw.album.map(|a| AlbumRef {
        id: a.id.map(|i| Source::YtMusic.id(i)).unwrap_or_default(),
        name: a.name,
        image_urls: thumbnail_urls(&raw.thumbnails),
    });

    Track {
        id: Source::YtMusic.id(&raw.video_id),
        name: raw.title,
        artists: raw.artists.into_iter().map(to_ref).collect(),
        album,
        duration_ms: raw.duration_seconds * 1000,
        audio_url: None,
        preview_url: None,
        source: Source::YtMusic,
        popularity: synthetic_popularity(),
        genres: vec![],
    }
}

pub fn to_artist(raw: dto::YtArtist) -> Artist {
    Artist {
        id: Source::YtMusic.id(&raw.browse_id),
        name: raw.name,
        image_urls: thumbnail_urls(&raw.thumbnails),
        genres: vec![],
        followers: raw
            .subscribers
            .as_deref()
            .and_then(parse_subscribers)
            .unwrap_or(0),
        popularity: synthetic_popularity(),
        source: Source::YtMusic,
    }
}

pub fn to_album(raw: dto::YtAlbum) -> Album {
    Album {
        id: Source::YtMusic.id(&raw.browse_id),
        name: raw.title,
        artists: raw.artists.into_iter().map(to_ref).collect(),
        image_urls: thumbnail_urls(&raw.thumbnails),
        year: raw.year.as_deref().and_then(Album::year_from_date),
        release_date: raw.year,
        track_count: raw.track_count,
        source: Source::YtMusic,
    }
}

/// Album detail: the embedded track rows carry no album of their own, so
/// stitch the parent onto each one.
pub fn to_album_detail(mut raw: dto::YtAlbum) -> AlbumDetail {
    let raw_tracks = std::mem::take(&mut raw.tracks);
    let album = to_album(raw);

    let album_ref = AlbumRef {
        id: album.id.clone(),
        name: album.name.clone(),
        image_urls: album.image_urls.clone(),
    };

    let tracks = raw_tracks
        .into_iter()
        .map(|t| {
            let mut track = to_track(t);
            track.album = Some(album_ref.clone());
            track
        })
        .collect();

    AlbumDetail { album, tracks }
}

pub fn to_playlist(raw: dto::YtPlaylist) -> Playlist {
    Playlist {
        id: Source::YtMusic.id(&raw.playlist_id),
        name: raw.title,
        description: raw.description,
        image_urls: thumbnail_urls(&raw.thumbnails),
        track_count: raw.track_count,
        owner: raw.author,
        source: Source::YtMusic,
    }
}

pub fn to_playlist_detail(mut raw: dto::YtPlaylist) -> PlaylistDetail {
    let tracks = std::mem::take(&mut raw.tracks)
        .into_iter()
        .map(to_track)
        .collect();
    let playlist = to_playlist(raw);
    PlaylistDetail { playlist, tracks }
}

fn to_ref(raw: dto::YtRef) -> EntityRef {
    EntityRef {
        id: raw.id.map(|i| Source::YtMusic.id(i)).unwrap_or_default(),
        name: raw.name,
    }
}

/// Thumbnail URLs largest first.
fn thumbnail_urls(thumbs: &[dto::Thumbnail]) -> Vec<String> {
    let mut sorted: Vec<&dto::Thumbnail> = thumbs.iter().collect();
    sorted.sort_by(|a, b| (b.width * b.height).cmp(&(a.width * a.height)));
    sorted.into_iter().map(|t| t.url.clone()).collect()
}

/// Parse a "2.1M subscribers" display string into a count.
fn parse_subscribers(display: &str) -> Option<u64> {
    let token = display.split_whitespace().next()?;
    let (number, multiplier) = match token.chars().last()? {
        'K' => (&token[..token.len() - 1], 1_000.0),
        'M' => (&token[..token.len() - 1], 1_000_000.0),
        'B' => (&token[..token.len() - 1], 1_000_000_000.0),
        _ => (token, 1.0),
    };
    let value: f64 = number.parse().ok()?;
    Some((value * multiplier) as u64)
}

/// YouTube exposes no numeric popularity. Same trick as the other adapters
/// without a signal: a stable-ish random score so shuffles and sorts have
/// something to work with.
fn synthetic_popularity() -> u8 {
    rand::rng().random_range(40..=85)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_track() -> dto::YtTrack {
        dto::YtTrack {
            video_id: "dQw4w9WgXcQ".to_string(),
            title: "Never Gonna Give You Up".to_string(),
            artists: vec![dto::YtRef {
                id: Some("UCuAXF".to_string()),
                name: "Rick Astley".to_string(),
            }],
            album: Some(dto::YtRef {
                id: Some("MPREb_abc".to_string()),
                name: "Whenever You Need Somebody".to_string(),
            }),
            duration_seconds: 213,
            thumbnails: vec![
                dto::Thumbnail {
                    url: "https://img/small.jpg".to_string(),
                    width: 120,
                    height: 90,
                },
                dto::Thumbnail {
                    url: "https://img/large.jpg".to_string(),
                    width: 544,
                    height: 544,
                },
            ],
        }
    }

    #[test]
    fn test_track_conversion() {
        let track = to_track(sample_track());

        assert_eq!(track.id, "ytmusic_dQw4w9WgXcQ");
        assert_eq!(track.source, Source::YtMusic);
        assert_eq!(track.duration_ms, 213_000);
        assert_eq!(track.artist_name(), "Rick Astley");
        assert!(track.audio_url.is_none());

        let album = track.album.expect("album ref");
        assert_eq!(album.id, "ytmusic_MPREb_abc");
        // Largest thumbnail first
        assert_eq!(album.image_urls[0], "https://img/large.jpg");
    }

    #[test]
    fn test_album_detail_stitches_parent() {
        let detail = to_album_detail(dto::YtAlbum {
            browse_id: "MPREb_abc".to_string(),
            title: "Whenever You Need Somebody".to_string(),
            artists: vec![],
            thumbnails: vec![],
            year: Some("1987".to_string()),
            track_count: 10,
            tracks: vec![dto::YtTrack {
                video_id: "v1".to_string(),
                title: "Track One".to_string(),
                artists: vec![],
                album: None,
                duration_seconds: 200,
                thumbnails: vec![],
            }],
        });

        assert_eq!(detail.album.year, Some(1987));
        assert_eq!(detail.tracks.len(), 1);
        let album_ref = detail.tracks[0].album.as_ref().expect("parent stitched");
        assert_eq!(album_ref.id, "ytmusic_MPREb_abc");
    }

    #[test]
    fn test_parse_subscribers() {
        assert_eq!(parse_subscribers("2.1M subscribers"), Some(2_100_000));
        assert_eq!(parse_subscribers("987K subscribers"), Some(987_000));
        assert_eq!(parse_subscribers("42 subscribers"), Some(42));
        assert_eq!(parse_subscribers(""), None);
    }

    #[test]
    fn test_synthetic_popularity_in_range() {
        for _ in 0..50 {
            let p = synthetic_popularity();
            assert!((40..=85).contains(&p));
        }
    }
}
