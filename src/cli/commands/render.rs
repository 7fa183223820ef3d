//! Shared rendering helpers for command output.
//!
//! Degradation notices go to stderr so piped stdout stays parseable.

use crate::aggregator::Degradation;
use crate::model::{Album, Artist, Playlist, Track};

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_degradations(degradations: &[Degradation]) {
    for d in degradations {
        eprintln!("note: {} unavailable ({})", d.source, d.reason);
    }
}

pub fn format_duration(ms: u64) -> String {
    if ms == 0 {
        return "--:--".to_string();
    }
    let secs = ms / 1000;
    format!("{}:{:02}", secs / 60, secs % 60)
}

pub fn print_tracks(tracks: &[Track]) {
    for (i, track) in tracks.iter().enumerate() {
        let artist = match track.artist_name() {
            "" => "(unknown)",
            name => name,
        };
        println!(
            "{:>3}. {} - {}  [{}]  {}",
            i + 1,
            artist,
            track.name,
            format_duration(track.duration_ms),
            track.id
        );
    }
}

pub fn print_artists(artists: &[Artist]) {
    for (i, artist) in artists.iter().enumerate() {
        println!(
            "{:>3}. {}  ({} followers)  {}",
            i + 1,
            artist.name,
            artist.followers,
            artist.id
        );
    }
}

pub fn print_albums(albums: &[Album]) {
    for (i, album) in albums.iter().enumerate() {
        let artist = album
            .artists
            .first()
            .map(|a| a.name.as_str())
            .unwrap_or("(unknown)");
        let year = album
            .year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "----".to_string());
        println!(
            "{:>3}. {} - {}  ({})  {}",
            i + 1,
            artist,
            album.name,
            year,
            album.id
        );
    }
}

pub fn print_playlists(playlists: &[Playlist]) {
    for (i, playlist) in playlists.iter().enumerate() {
        println!(
            "{:>3}. {}  ({} tracks)  {}",
            i + 1,
            playlist.name,
            playlist.track_count,
            playlist.id
        );
    }
}
