//! Detail lookup commands, routed by id prefix.

use super::render;
use crate::aggregator::MusicAggregator;

pub async fn cmd_track(aggregator: &MusicAggregator, id: &str, json: bool) -> anyhow::Result<()> {
    let track = aggregator.track(id).await?;
    if json {
        return render::print_json(&track);
    }

    println!("{} - {}", track.artist_name(), track.name);
    println!("  duration: {}", render::format_duration(track.duration_ms));
    println!("  source:   {}", track.source);
    if let Some(album) = &track.album {
        println!("  album:    {}", album.name);
    }
    if !track.genres.is_empty() {
        println!("  genres:   {}", track.genres.join(", "));
    }
    if let Some(url) = track.audio_url.as_deref().or(track.preview_url.as_deref()) {
        println!("  stream:   {url}");
    }
    Ok(())
}

pub async fn cmd_artist(aggregator: &MusicAggregator, id: &str, json: bool) -> anyhow::Result<()> {
    let artist = aggregator.artist(id).await?;
    let (top_tracks, albums) = tokio::join!(
        aggregator.artist_top_tracks(id, 10),
        aggregator.artist_albums(id, 10),
    );
    // Some sources serve the artist but not its listings
    let top_tracks = top_tracks.unwrap_or_default();
    let albums = albums.unwrap_or_default();

    if json {
        return render::print_json(&serde_json::json!({
            "artist": artist,
            "top_tracks": top_tracks,
            "albums": albums,
        }));
    }

    println!("{}  ({} followers)", artist.name, artist.followers);
    if !artist.genres.is_empty() {
        println!("  genres: {}", artist.genres.join(", "));
    }
    if !top_tracks.is_empty() {
        println!("\nTop tracks:");
        render::print_tracks(&top_tracks);
    }
    if !albums.is_empty() {
        println!("\nAlbums:");
        render::print_albums(&albums);
    }
    Ok(())
}

pub async fn cmd_album(aggregator: &MusicAggregator, id: &str, json: bool) -> anyhow::Result<()> {
    let detail = aggregator.album(id).await?;
    if json {
        return render::print_json(&detail);
    }

    let artist = detail
        .album
        .artists
        .first()
        .map(|a| a.name.as_str())
        .unwrap_or("(unknown)");
    match detail.album.year {
        Some(year) => println!("{} - {} ({})", artist, detail.album.name, year),
        None => println!("{} - {}", artist, detail.album.name),
    }
    render::print_tracks(&detail.tracks);
    Ok(())
}

pub async fn cmd_playlist(
    aggregator: &MusicAggregator,
    id: &str,
    json: bool,
) -> anyhow::Result<()> {
    let detail = aggregator.playlist(id).await?;
    if json {
        return render::print_json(&detail);
    }

    println!("{}  ({} tracks)", detail.playlist.name, detail.playlist.track_count);
    if !detail.playlist.description.is_empty() {
        println!("  {}", detail.playlist.description);
    }
    render::print_tracks(&detail.tracks);
    Ok(())
}

pub async fn cmd_lyrics(aggregator: &MusicAggregator, id: &str) -> anyhow::Result<()> {
    let lyrics = aggregator.lyrics(id).await?;
    println!("{}", lyrics.lyrics);
    if let Some(attribution) = lyrics.attribution {
        println!("\n{attribution}");
    }
    Ok(())
}
