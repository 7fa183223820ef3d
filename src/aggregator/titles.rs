//! Display-title cleaning heuristics.
//!
//! Scraped and radio-sourced track names arrive as strings like
//! `"Artist - Song (Official Video) [HD]"`. These helpers strip the junk
//! and best-guess an artist/title split. Everything here is lossy
//! guesswork for display and lookup purposes, never ground truth.

/// Remove bracketed junk groups and collapse whitespace.
///
/// A parenthesized or bracketed group is junk when it names a video
/// artifact (`Official Video`, `Lyric Video`, `HD`, ...) or is a bare
/// year. Meaningful groups like `(Acoustic)` survive.
pub fn clean_title(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    let mut out = String::with_capacity(raw.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == '(' || c == '[' {
            let close = if c == '(' { ')' } else { ']' };
            if let Some(end) = find_close(&chars, i + 1, c, close) {
                let content: String = chars[i + 1..end].iter().collect();
                if is_junk_group(&content) {
                    i = end + 1;
                    continue;
                }
            }
        }
        out.push(c);
        i += 1;
    }

    collapse_spaces(&out)
}

/// Split `"Artist - Title"` on the first `" - "`.
///
/// Returns `None` when the separator is absent or either side is empty,
/// in which case callers must not guess an artist.
pub fn split_artist_title(display: &str) -> Option<(String, String)> {
    let (artist, title) = display.split_once(" - ")?;
    let artist = artist.trim();
    let title = title.trim();
    (!artist.is_empty() && !title.is_empty()).then(|| (artist.to_string(), title.to_string()))
}

/// Whether an artist credit is a placeholder rather than a real name.
pub fn looks_generic(name: &str) -> bool {
    matches!(
        name.trim().to_lowercase().as_str(),
        "" | "unknown" | "unknown artist" | "various" | "various artists" | "va" | "n/a"
    )
}

fn find_close(chars: &[char], mut i: usize, open: char, close: char) -> Option<usize> {
    let mut depth = 1;
    while i < chars.len() {
        if chars[i] == open {
            depth += 1;
        } else if chars[i] == close {
            depth -= 1;
            if depth == 0 {
                return Some(i);
            }
        }
        i += 1;
    }
    None
}

fn is_junk_group(content: &str) -> bool {
    let lower = content.trim().to_lowercase();
    if lower.is_empty() {
        return true;
    }

    // Bare year like (2019)
    if let Ok(year) = lower.parse::<u32>()
        && (1900..=2100).contains(&year)
    {
        return true;
    }

    const SUBSTRINGS: &[&str] = &[
        "official",
        "video",
        "audio",
        "lyric",
        "visuali",
        "remaster",
    ];
    if SUBSTRINGS.iter().any(|k| lower.contains(k)) {
        return true;
    }

    // Short quality markers match whole tokens only, so (HQ Mix) is junk
    // but a title containing those letters is not
    const TOKENS: &[&str] = &["hd", "hq", "4k", "mv", "mix"];
    lower.split_whitespace().all(|t| TOKENS.contains(&t))
}

fn collapse_spaces(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last_space = true;
    for c in s.chars() {
        if c.is_whitespace() {
            if !last_space {
                out.push(' ');
            }
            last_space = true;
        } else {
            out.push(c);
            last_space = false;
        }
    }
    out.trim_end().to_string()
}
