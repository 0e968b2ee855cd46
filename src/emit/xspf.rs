use crate::{domain::song::SongRecord, emit::escape_xml};

pub const NAMESPACE: &str = "http://xspf.org/ns/0/";
pub const VERSION: &str = "1";

/// XSPF playlist. Each track keeps its source filename in a `meta` element.
///
/// Synthetic songs are listed without a `location`.
pub fn render(title: &str, records: &[&SongRecord]) -> String {
    let mut out = String::from("<?xml version='1.0' encoding='utf-8'?>\n");
    out.push_str(&format!(
        "<playlist version=\"{VERSION}\" xmlns=\"{NAMESPACE}\">\n"
    ));
    out.push_str(&format!("  <title>{}</title>\n", escape_xml(title)));

    if records.is_empty() {
        out.push_str("  <trackList />\n");
    } else {
        out.push_str("  <trackList>\n");
        for record in records {
            out.push_str("    <track>\n");
            if let Some(url) = record.playback_url() {
                out.push_str(&format!(
                    "      <location>{}</location>\n",
                    escape_xml(url)
                ));
            }
            out.push_str(&format!(
                "      <title>{}</title>\n",
                escape_xml(&record.title)
            ));
            out.push_str(&format!(
                "      <creator>{}</creator>\n",
                escape_xml(&record.artist)
            ));
            out.push_str(&format!(
                "      <meta rel=\"filename\">{}</meta>\n",
                escape_xml(&record.filename)
            ));
            out.push_str("    </track>\n");
        }
        out.push_str("  </trackList>\n");
    }

    out.push_str("</playlist>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::fixtures::{fake, real};

    #[test]
    fn renders_tracks_in_order() {
        let a = real("real_1.mp3", "Hello", "Adele", "abc");
        let b = real("real_2.mp3", "Rain & Tears", "Aphrodite's Child", "def&t=3");

        let xml = render("Real Songs Playlist", &[&a, &b]);

        assert!(xml.starts_with("<?xml version='1.0' encoding='utf-8'?>\n"));
        assert!(xml.contains(r#"<playlist version="1" xmlns="http://xspf.org/ns/0/">"#));
        assert!(xml.contains("<title>Real Songs Playlist</title>"));
        assert!(xml.contains("<title>Rain &amp; Tears</title>"));
        assert!(xml.contains("<creator>Aphrodite&#39;s Child</creator>"));
        assert!(xml.contains(
            "<location>https://www.youtube.com/watch?v=def&amp;t=3</location>"
        ));
        assert!(xml.contains(r#"<meta rel="filename">real_2.mp3</meta>"#));

        let first = xml.find("real_1.mp3").unwrap();
        let second = xml.find("real_2.mp3").unwrap();
        assert!(first < second);
        assert!(xml.ends_with("</playlist>\n"));
    }

    #[test]
    fn synthetic_tracks_have_no_location() {
        let b = fake("fake_1.mp3", "suno", "pop");
        let xml = render("t", &[&b]);

        assert!(!xml.contains("<location>"));
        assert!(xml.contains("<creator>suno</creator>"));
    }

    #[test]
    fn control_characters_are_dropped() {
        let a = real("real_1.mp3", "Bell\u{7}Song\u{1B}[0m", "Adele\u{0}", "abc");
        let xml = render("t\u{C}", &[&a]);

        assert!(xml.contains("<title>BellSong[0m</title>"));
        assert!(xml.contains("<creator>Adele</creator>"));
        assert!(xml.contains("<title>t</title>"));
        assert!(!xml.chars().any(|c| c.is_control() && !matches!(c, '\t' | '\n' | '\r')));
    }

    #[test]
    fn empty_track_list() {
        let xml = render("t", &[]);
        assert!(xml.contains("<trackList />"));
    }
}
