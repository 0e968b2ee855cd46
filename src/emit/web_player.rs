use crate::{domain::song::SongRecord, emit::escape_markup, playback};

const STYLE: &str = r#"        body { font-family: Arial, sans-serif; margin: 20px; background: #f0f0f0; }
        .container { max-width: 1200px; margin: 0 auto; }
        h1 { color: #333; text-align: center; }
        .player-container { background: white; margin: 20px 0; padding: 20px; border-radius: 10px; box-shadow: 0 2px 5px rgba(0,0,0,0.1); }
        .song-info { margin: 10px 0; }
        .song-title { font-size: 1.2em; font-weight: bold; color: #333; }
        .song-artist { color: #666; font-style: italic; }
        .youtube-player { width: 100%; height: 315px; border: none; border-radius: 5px; }
        .controls { margin: 10px 0; }
        button { background: #1a73e8; color: white; border: none; padding: 10px 20px; border-radius: 5px; cursor: pointer; margin: 5px; }
        button:hover { background: #1557b0; }
        .playlist-nav { position: fixed; top: 20px; right: 20px; background: white; padding: 15px; border-radius: 10px; box-shadow: 0 2px 10px rgba(0,0,0,0.2); max-height: 400px; overflow-y: auto; width: 300px; }
        .nav-item { padding: 5px; cursor: pointer; border-bottom: 1px solid #eee; }
        .nav-item:hover { background: #f5f5f5; }
"#;

const SCRIPT: &str = r#"
    <script>
        function scrollToSong(index) {
            document.getElementById('song-' + index).scrollIntoView({behavior: 'smooth'});
        }

        function copyToClipboard(text) {
            navigator.clipboard.writeText(text).then(function() {
                alert('URL copied to clipboard!');
            });
        }
    </script>
"#;

/// Page with one embedded player per playable song and a navigation panel.
pub fn render(title: &str, records: &[&SongRecord]) -> String {
    let playable: Vec<(&SongRecord, &str)> = records
        .iter()
        .filter_map(|r| r.playback_url().map(|url| (*r, url)))
        .collect();
    let title = escape_markup(title);

    let mut out = format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>{title}</title>
    <meta charset="utf-8">
    <style>
{STYLE}    </style>
</head>
<body>
    <div class="container">
        <h1>{title} ({} songs)</h1>

        <div class="playlist-nav">
            <h3>Playlist Navigation</h3>
"#,
        playable.len()
    );

    for (i, (record, _)) in playable.iter().enumerate() {
        out.push_str(&format!(
            "            <div class=\"nav-item\" onclick=\"scrollToSong({i})\">{}. {} - {}</div>\n",
            i + 1,
            escape_markup(&record.artist),
            escape_markup(&record.title)
        ));
    }
    out.push_str("        </div>\n");

    for (i, (record, url)) in playable.iter().enumerate() {
        // the url ends up inside a single-quoted js string in an attribute
        let js_url = escape_markup(&url.replace('\\', "\\\\").replace('\'', "\\'"));
        out.push_str(&format!(
            r#"
        <div class="player-container" id="song-{i}">
            <div class="song-info">
                <div class="song-title">{}. {}</div>
                <div class="song-artist">by {}</div>
            </div>
            <iframe class="youtube-player"
                    src="{}"
                    allowfullscreen>
            </iframe>
            <div class="controls">
                <button onclick="window.open('{js_url}', '_blank')">Open in YouTube</button>
                <button onclick="copyToClipboard('{js_url}')">Copy URL</button>
            </div>
        </div>
"#,
            i + 1,
            escape_markup(&record.title),
            escape_markup(&record.artist),
            escape_markup(&playback::embed_url(url)),
        ));
    }

    out.push_str("\n    </div>\n");
    out.push_str(SCRIPT);
    out.push_str("</body>\n</html>\n");
    out
}
