//! Hardcoded fallback catalog.
//!
//! The last stage of every fallback chain. When all upstream sources are
//! down (or none are configured) feeds render this data instead of an
//! empty screen. Everything here carries [`Source::Mock`] ids so detail
//! lookups on these entities resolve locally.

use crate::model::{
    Album, AlbumDetail, AlbumRef, Artist, EntityRef, Playlist, PlaylistDetail, Source, Track,
};

pub fn mock_tracks() -> Vec<Track> {
    [
        ("1", "Midnight Drive", "Neon Harbor", 214, 72, "synthwave"),
        ("2", "Paper Lanterns", "Iris Vale", 187, 68, "indie pop"),
        ("3", "Cold Static", "The Wavelengths", 243, 65, "post-rock"),
        ("4", "Glass Gardens", "Neon Harbor", 198, 61, "synthwave"),
        ("5", "Slow Orbit", "Marrow & Pine", 276, 58, "ambient"),
        ("6", "Copper Sky", "Iris Vale", 205, 55, "indie pop"),
        ("7", "Undertow", "The Wavelengths", 231, 51, "post-rock"),
        ("8", "First Light", "Marrow & Pine", 162, 47, "ambient"),
    ]
    .into_iter()
    .map(|(id, name, artist, secs, pop, genre)| Track {
        id: Source::Mock.id(id),
        name: name.to_string(),
        artists: vec![artist_ref(artist)],
        album: Some(AlbumRef {
            id: Source::Mock.id(format!("al{id}")),
            name: format!("{name} EP"),
            image_urls: vec![],
        }),
        duration_ms: secs * 1000,
        audio_url: None,
        preview_url: None,
        source: Source::Mock,
        popularity: pop,
        genres: vec![genre.to_string()],
    })
    .collect()
}

pub fn mock_artists() -> Vec<Artist> {
    [
        ("a1", "Neon Harbor", "synthwave", 48_200, 70),
        ("a2", "Iris Vale", "indie pop", 31_500, 64),
        ("a3", "The Wavelengths", "post-rock", 19_800, 57),
        ("a4", "Marrow & Pine", "ambient", 12_400, 49),
    ]
    .into_iter()
    .map(|(id, name, genre, followers, pop)| Artist {
        id: Source::Mock.id(id),
        name: name.to_string(),
        image_urls: vec![],
        genres: vec![genre.to_string()],
        followers,
        popularity: pop,
        source: Source::Mock,
    })
    .collect()
}

pub fn mock_albums() -> Vec<Album> {
    [
        ("b1", "Night Circuit", "Neon Harbor", "2023-04-14", 10),
        ("b2", "Field Notes", "Iris Vale", "2022-09-02", 12),
        ("b3", "Low Tide Atlas", "The Wavelengths", "2024-01-26", 8),
    ]
    .into_iter()
    .map(|(id, name, artist, date, count)| Album {
        id: Source::Mock.id(id),
        name: name.to_string(),
        artists: vec![artist_ref(artist)],
        image_urls: vec![],
        release_date: Some(date.to_string()),
        year: Album::year_from_date(date),
        track_count: count,
        source: Source::Mock,
    })
    .collect()
}

pub fn mock_playlists() -> Vec<Playlist> {
    [
        ("p1", "Late Night Coding", "Low-key electronic for focus"),
        ("p2", "Sunday Morning", "Slow starts and warm acoustics"),
        ("p3", "Road Trip Fuel", "Windows down, volume up"),
    ]
    .into_iter()
    .map(|(id, name, description)| Playlist {
        id: Source::Mock.id(id),
        name: name.to_string(),
        description: description.to_string(),
        image_urls: vec![],
        track_count: 8,
        owner: Some("Fonos".to_string()),
        source: Source::Mock,
    })
    .collect()
}

// ------------------------------------------------------------------
// Detail lookups for mock ids
// ------------------------------------------------------------------

pub fn mock_track(id: &str) -> Option<Track> {
    mock_tracks().into_iter().find(|t| t.id == id)
}

pub fn mock_artist(id: &str) -> Option<Artist> {
    mock_artists().into_iter().find(|a| a.id == id)
}

/// Mock albums list every mock track as their listing; good enough for a
/// catalog that only exists when everything else is down.
pub fn mock_album_detail(id: &str) -> Option<AlbumDetail> {
    let album = mock_albums().into_iter().find(|a| a.id == id)?;
    let tracks = mock_tracks()
        .into_iter()
        .filter(|t| t.artists.first().map(|a| &a.name) == album.artists.first().map(|a| &a.name))
        .collect();
    Some(AlbumDetail { album, tracks })
}

pub fn mock_playlist_detail(id: &str) -> Option<PlaylistDetail> {
    let mut playlist = mock_playlists().into_iter().find(|p| p.id == id)?;
    let tracks = mock_tracks();
    playlist.track_count = tracks.len() as u32;
    Some(PlaylistDetail { playlist, tracks })
}

fn artist_ref(name: &str) -> EntityRef {
    let raw = match name {
        "Neon Harbor" => "a1",
        "Iris Vale" => "a2",
        "The Wavelengths" => "a3",
        _ => "a4",
    };
    EntityRef::new(Source::Mock.id(raw), name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_never_empty() {
        assert!(!mock_tracks().is_empty());
        assert!(!mock_artists().is_empty());
        assert!(!mock_albums().is_empty());
        assert!(!mock_playlists().is_empty());
    }

    #[test]
    fn test_ids_are_mock_prefixed() {
        for track in mock_tracks() {
            assert!(track.id.starts_with("mock_"));
            assert_eq!(track.source, Source::Mock);
        }
    }

    #[test]
    fn test_detail_lookups_resolve() {
        let track = mock_tracks().remove(0);
        assert_eq!(mock_track(&track.id).unwrap().name, track.name);
        assert!(mock_track("mock_does-not-exist").is_none());

        let detail = mock_album_detail("mock_b1").unwrap();
        assert_eq!(detail.album.name, "Night Circuit");
        assert!(!detail.tracks.is_empty());
        assert!(detail.tracks.iter().all(|t| t.artist_name() == "Neon Harbor"));

        let playlist = mock_playlist_detail("mock_p2").unwrap();
        assert_eq!(playlist.playlist.track_count, playlist.tracks.len() as u32);
    }

    #[test]
    fn test_artist_refs_resolve_to_mock_artists() {
        let artists = mock_artists();
        for track in mock_tracks() {
            let credit = &track.artists[0];
            assert!(artists.iter().any(|a| a.id == credit.id && a.name == credit.name));
        }
    }
}
