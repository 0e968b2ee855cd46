use crate::{
    domain::song::SongRecord,
    emit::{EmitError, shell_quote, single_line},
};

/// Bash script playing the playlist through mpv, which resolves the urls with yt-dlp.
///
/// `./script.sh` plays everything, `./script.sh N` plays song N.
pub fn render(
    title: &str,
    records: &[&SongRecord],
    ytdl_format: &str,
) -> Result<String, EmitError> {
    let playable: Vec<(&SongRecord, &str)> = records
        .iter()
        .filter_map(|r| r.playback_url().map(|url| (*r, url)))
        .collect();
    let count = playable.len();
    let title = single_line(title);
    let ytdl_format = shell_quote(ytdl_format)?;

    let mut out = format!(
        r#"#!/bin/bash
# {title}
# Usage: ./script.sh [song_number] or ./script.sh to play all

if [ "$1" ]; then
    SONG_NUM=$1
    echo "Playing song #$SONG_NUM..."
else
    echo "Playing all {count} songs..."
    SONG_NUM=1
fi

SONGS=(
"#
    );

    for (i, (record, url)) in playable.iter().enumerate() {
        out.push_str(&format!(
            "    {}  # {}. {}\n",
            shell_quote(url)?,
            i + 1,
            single_line(&format!("{} - {}", record.artist, record.title))
        ));
    }

    out.push_str(&format!(
        r#")

if [ "$1" ]; then
    if [ $SONG_NUM -le {count} ] && [ $SONG_NUM -ge 1 ]; then
        echo "Playing: ${{SONGS[$SONG_NUM-1]}}"
        mpv --ytdl-format={ytdl_format} "${{SONGS[$SONG_NUM-1]}}"
    else
        echo "Invalid song number. Choose 1-{count}"
    fi
else
    for url in "${{SONGS[@]}}"; do
        echo "Playing: $url"
        mpv --ytdl-format={ytdl_format} "$url"
    done
fi
"#
    ));

    Ok(out)
}
