use crate::domain::song::{SongKind, SongRecord};

pub const HEADER: &str = "#EXTM3U";
pub const TITLE_MARKER: &str = "#PLAYLIST:";

/// Extended M3U: header, title line, then a display line and a url line per song.
///
/// Synthetic songs cannot be played, so their url line is a comment.
pub fn render(title: &str, records: &[&SongRecord]) -> String {
    let mut out = format!("{HEADER}\n{TITLE_MARKER}{title}\n");

    for record in records {
        match &record.kind {
            SongKind::Real(attrs) => {
                out.push_str(&format!("#EXTINF:-1,{} - {}\n", record.artist, record.title));
                out.push_str(&format!("{}\n", attrs.url));
            }
            SongKind::Synthetic(attrs) => {
                out.push_str(&format!(
                    "#EXTINF:-1,{} - {} ({})\n",
                    attrs.algorithm.as_deref().unwrap_or_default(),
                    record.filename,
                    attrs.genre.as_deref().unwrap_or_default()
                ));
                out.push_str(&format!("# Synthetic song: {}\n", record.filename));
            }
        }
    }

    out
}

/// Plain M3U of playable songs only, for players that choke on comment entries.
pub fn render_playable(title: &str, records: &[&SongRecord]) -> String {
    let playable: Vec<&SongRecord> = records
        .iter()
        .copied()
        .filter(|r| r.playback_url().is_some())
        .collect();
    render(title, &playable)
}
