use crate::{
    domain::song::{SongKind, SongRecord},
    emit::escape_markup,
};

const STYLE: &str = r#"        body { font-family: Arial, sans-serif; margin: 20px; background: #f5f5f5; }
        .container { max-width: 1200px; margin: 0 auto; background: white; padding: 20px; border-radius: 10px; }
        h1 { color: #333; border-bottom: 2px solid #1a73e8; padding-bottom: 10px; }
        .stats { background: #e3f2fd; padding: 15px; border-radius: 5px; margin: 20px 0; }
        .song { margin: 10px 0; padding: 15px; border: 1px solid #ddd; border-radius: 8px; background: #fafafa; }
        .real-song { border-left: 4px solid #4caf50; }
        .synthetic-song { border-left: 4px solid #ff9800; }
        .title { font-weight: bold; color: #333; font-size: 1.1em; }
        .artist { color: #666; font-style: italic; margin: 5px 0; }
        .metadata { font-size: 0.9em; color: #888; }
        .filename { font-size: 0.8em; color: #999; font-family: monospace; }
        a { color: #1a73e8; text-decoration: none; }
        a:hover { text-decoration: underline; }
        .tag { display: inline-block; background: #e1f5fe; color: #0277bd; padding: 2px 8px; border-radius: 12px; font-size: 0.8em; margin: 2px; }
"#;

/// Song counts shown in the page banner
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub real: usize,
    pub synthetic: usize,
}

impl Summary {
    pub fn of(records: &[&SongRecord]) -> Self {
        let real = records.iter().filter(|r| r.is_real()).count();
        Self {
            total: records.len(),
            real,
            synthetic: records.len() - real,
        }
    }
}

/// Styled html listing. Real songs link to their playback url.
pub fn render(title: &str, records: &[&SongRecord]) -> String {
    let title = escape_markup(title);
    let summary = Summary::of(records);

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
        <h1>{title}</h1>
        <div class="stats">
            <strong>Total songs:</strong> {} |
            <strong>Real songs:</strong> {} |
            <strong>Synthetic songs:</strong> {}
        </div>
"#,
        summary.total, summary.real, summary.synthetic
    );

    for (i, record) in records.iter().enumerate() {
        out.push_str(&song_block(i + 1, record));
    }

    out.push_str(
        r#"
    </div>
</body>
</html>
"#,
    );
    out
}

fn song_block(number: usize, record: &SongRecord) -> String {
    let filename = escape_markup(&record.filename);

    match &record.kind {
        SongKind::Real(attrs) => {
            let mut tags = vec![tag("Real Song")];
            if let Some(year) = &attrs.year {
                tags.push(tag(&format!("Year: {year}")));
            }
            if let Some(duration) = &attrs.duration {
                tags.push(tag(&format!("Duration: {duration}s")));
            }

            format!(
                r#"
        <div class="song real-song">
            <div class="title">{number}. <a href="{}" target="_blank">{}</a></div>
            <div class="artist">by {}</div>
            <div class="metadata">
                {}
            </div>
            <div class="filename">{filename}</div>
        </div>
"#,
                escape_markup(&attrs.url),
                escape_markup(&record.title),
                escape_markup(&record.artist),
                tags.join("\n                ")
            )
        }
        SongKind::Synthetic(attrs) => {
            let value = |v: &Option<String>| v.as_deref().unwrap_or_default().to_string();
            let tags = [
                tag("Synthetic Song"),
                tag(&format!("Genre: {}", value(&attrs.genre))),
                tag(&format!("Mood: {}", value(&attrs.mood))),
                tag(&format!("Topic: {}", value(&attrs.topic))),
                tag(&format!("Style: {}", value(&attrs.style))),
            ];

            format!(
                r#"
        <div class="song synthetic-song">
            <div class="title">{number}. {filename}</div>
            <div class="artist">Generated by {}</div>
            <div class="metadata">
                {}
            </div>
            <div class="filename">{filename}</div>
        </div>
"#,
                escape_markup(attrs.algorithm.as_deref().unwrap_or_default()),
                tags.join("\n                ")
            )
        }
    }
}

fn tag(text: &str) -> String {
    format!(r#"<span class="tag">{}</span>"#, escape_markup(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::fixtures::{fake, real};

    #[test]
    fn summary_counts_each_kind() {
        let a = real("real_1.mp3", "Hello", "Adele", "abc");
        let b = fake("fake_1.mp3", "suno", "pop");

        assert_eq!(
            Summary::of(&[&a, &b, &b]),
            Summary {
                total: 3,
                real: 1,
                synthetic: 2
            }
        );
    }

    #[test]
    fn real_songs_are_links_and_synthetic_songs_are_text() {
        let a = real("real_1.mp3", "Hello", "Adele", "abc");
        let b = fake("fake_1.mp3", "suno", "pop");

        let page = render("Genre: pop (2 songs)", &[&a, &b]);

        assert!(page.contains("<title>Genre: pop (2 songs)</title>"));
        assert!(page.contains(
            r#"1. <a href="https://www.youtube.com/watch?v=abc" target="_blank">Hello</a>"#
        ));
        assert!(page.contains("by Adele"));
        assert!(page.contains(r#"<span class="tag">Year: 1994</span>"#));
        assert!(page.contains(r#"<span class="tag">Duration: 215s</span>"#));
        assert!(page.contains(r#"<div class="title">2. fake_1.mp3</div>"#));
        assert!(page.contains("Generated by suno"));
        assert!(page.contains(r#"<span class="tag">Genre: pop</span>"#));
        assert!(page.contains("<strong>Total songs:</strong> 2 |"));
        assert!(page.contains("<strong>Real songs:</strong> 1 |"));
        assert!(page.contains("<strong>Synthetic songs:</strong> 1"));
        assert!(page.trim_end().ends_with("</html>"));
    }

    #[test]
    fn text_is_escaped() {
        let a = real("real_1.mp3", "<script>", "A & B", "abc");
        let page = render("Artist: A & B", &[&a]);

        assert!(page.contains("<title>Artist: A &amp; B</title>"));
        assert!(page.contains("&lt;script&gt;"));
        assert!(!page.contains("<script>"));
    }
}
