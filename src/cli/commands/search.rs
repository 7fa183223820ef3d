//! Search commands.

use super::render;
use crate::aggregator::MusicAggregator;
use crate::model::SearchKind;

pub async fn cmd_search(
    aggregator: &MusicAggregator,
    query: &str,
    kind: SearchKind,
    limit: usize,
    json: bool,
) -> anyhow::Result<()> {
    let outcome = aggregator.search(query, kind, limit).await;
    if json {
        return render::print_json(&outcome);
    }

    render::print_degradations(&outcome.degradations);
    let results = outcome.data;
    if results.is_empty() {
        println!("No results for \"{query}\".");
        return Ok(());
    }

    if !results.tracks.is_empty() {
        println!("Tracks:");
        render::print_tracks(&results.tracks);
    }
    if !results.artists.is_empty() {
        println!("\nArtists:");
        render::print_artists(&results.artists);
    }
    if !results.albums.is_empty() {
        println!("\nAlbums:");
        render::print_albums(&results.albums);
    }
    if !results.playlists.is_empty() {
        println!("\nPlaylists:");
        render::print_playlists(&results.playlists);
    }
    Ok(())
}

pub async fn cmd_find(
    aggregator: &MusicAggregator,
    artist: &str,
    title: &str,
    json: bool,
) -> anyhow::Result<()> {
    match aggregator.find_exact(artist, title).await? {
        Some(track) => {
            if json {
                render::print_json(&track)?;
            } else {
                render::print_tracks(std::slice::from_ref(&track));
            }
        }
        None => println!("No match for {artist} - {title}."),
    }
    Ok(())
}
