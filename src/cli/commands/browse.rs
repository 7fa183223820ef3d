//! Browse commands: home feed, charts, releases, genres, stations.

use super::render;
use crate::aggregator::MusicAggregator;

pub async fn cmd_home(aggregator: &MusicAggregator, json: bool) -> anyhow::Result<()> {
    let outcome = aggregator.home().await;
    if json {
        return render::print_json(&outcome);
    }

    render::print_degradations(&outcome.degradations);
    let feed = outcome.data;

    println!("Trending:");
    render::print_tracks(&feed.trending);
    println!("\nFeatured playlists:");
    render::print_playlists(&feed.featured_playlists);
    println!("\nNew releases:");
    render::print_albums(&feed.new_releases);
    println!("\nPopular artists:");
    render::print_artists(&feed.popular_artists);
    Ok(())
}

pub async fn cmd_charts(
    aggregator: &MusicAggregator,
    limit: usize,
    json: bool,
) -> anyhow::Result<()> {
    let outcome = aggregator.charts(limit).await;
    if json {
        return render::print_json(&outcome);
    }
    render::print_degradations(&outcome.degradations);
    render::print_tracks(&outcome.data);
    Ok(())
}

pub async fn cmd_releases(
    aggregator: &MusicAggregator,
    limit: usize,
    json: bool,
) -> anyhow::Result<()> {
    let outcome = aggregator.new_releases(limit).await;
    if json {
        return render::print_json(&outcome);
    }
    render::print_degradations(&outcome.degradations);
    render::print_albums(&outcome.data);
    Ok(())
}

pub fn cmd_genres() -> anyhow::Result<()> {
    for genre in MusicAggregator::genres() {
        println!("{:<12} {}", genre.id, genre.name);
    }
    Ok(())
}

pub async fn cmd_genre(aggregator: &MusicAggregator, id: &str, json: bool) -> anyhow::Result<()> {
    let outcome = aggregator.genre_playlists(id).await;
    if json {
        return render::print_json(&outcome);
    }
    render::print_degradations(&outcome.degradations);
    render::print_playlists(&outcome.data);
    Ok(())
}

pub async fn cmd_stations(
    aggregator: &MusicAggregator,
    query: &str,
    limit: usize,
    json: bool,
) -> anyhow::Result<()> {
    let outcome = aggregator.stations(query, limit).await;
    if json {
        return render::print_json(&outcome);
    }
    render::print_degradations(&outcome.degradations);
    if outcome.data.is_empty() {
        println!("No stations found for \"{query}\".");
        return Ok(());
    }
    for (i, station) in outcome.data.iter().enumerate() {
        let genres = station.genres.join(", ");
        println!("{:>3}. {}  [{}]  {}", i + 1, station.name, genres, station.id);
    }
    Ok(())
}
