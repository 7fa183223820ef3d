//! History and library commands, backed by the local store.

use super::render;
use crate::aggregator::MusicAggregator;
use crate::history::HistoryStore;

/// Record a play: resolve the id, enhance the metadata, store the entry.
pub async fn cmd_play(
    aggregator: &MusicAggregator,
    store: &HistoryStore,
    id: &str,
) -> anyhow::Result<()> {
    let track = aggregator.track(id).await?;
    let track = aggregator.enhance_track(track).await;
    store.add_recently_played(&track)?;
    println!("Recorded play: {} - {}", track.artist_name(), track.name);
    Ok(())
}

pub async fn cmd_save(
    aggregator: &MusicAggregator,
    store: &HistoryStore,
    id: &str,
) -> anyhow::Result<()> {
    if store.is_saved(id) {
        println!("Already saved.");
        return Ok(());
    }
    let track = aggregator.track(id).await?;
    store.save_track(&track)?;
    println!("Saved: {} - {}", track.artist_name(), track.name);
    Ok(())
}

pub fn cmd_unsave(store: &HistoryStore, id: &str) -> anyhow::Result<()> {
    if !store.is_saved(id) {
        println!("Not in your library.");
        return Ok(());
    }
    store.remove_saved(id)?;
    println!("Removed {id} from your library.");
    Ok(())
}

pub fn cmd_saved(store: &HistoryStore, json: bool) -> anyhow::Result<()> {
    let tracks = store.saved_tracks();
    if json {
        return render::print_json(&tracks);
    }
    if tracks.is_empty() {
        println!("No saved tracks yet.");
        return Ok(());
    }
    render::print_tracks(&tracks);
    Ok(())
}

pub fn cmd_history_list(store: &HistoryStore, limit: usize, json: bool) -> anyhow::Result<()> {
    let entries = store.recently_played(limit);
    if json {
        return render::print_json(&entries);
    }
    if entries.is_empty() {
        println!("No listening history yet.");
        return Ok(());
    }
    for entry in &entries {
        println!(
            "{}  {} - {}",
            entry.played_at,
            entry.track.artist_name(),
            entry.track.name
        );
    }
    Ok(())
}

pub fn cmd_history_clear(store: &HistoryStore) -> anyhow::Result<()> {
    store.clear_recently_played()?;
    println!("History cleared.");
    Ok(())
}
