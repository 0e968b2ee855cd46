const WATCH_URL: &str = "https://www.youtube.com/watch?v=";
const EMBED_URL: &str = "https://www.youtube.com/embed/";

/// returns url a real song is played back from
pub fn watch_url(youtube_id: &str) -> String {
    format!("{WATCH_URL}{youtube_id}")
}

/// extracts the video id back out of a playback url
///
/// Takes whatever follows the last `v=` up to the next `&`.
/// Urls without `v=` are returned whole.
pub fn video_id(url: &str) -> &str {
    let tail = url.rsplit("v=").next().unwrap_or(url);
    tail.split('&').next().unwrap_or(tail)
}

/// url of the embeddable player for a playback url
pub fn embed_url(url: &str) -> String {
    format!("{EMBED_URL}{}?rel=0&modestbranding=1", video_id(url))
}

#[cfg(test)]
mod tests {
    use crate::playback::{embed_url, video_id, watch_url};

    #[test]
    fn test_watch_url() {
        assert_eq!(
            watch_url("UZtMKpvksvE"),
            "https://www.youtube.com/watch?v=UZtMKpvksvE"
        );
    }

    #[test]
    fn test_video_id_round_trip() {
        let url = watch_url("abc123");
        assert_eq!(video_id(&url), "abc123");
    }

    #[test]
    fn test_video_id_drops_extra_params() {
        assert_eq!(
            video_id("https://www.youtube.com/watch?v=abc&t=42"),
            "abc"
        );
    }

    #[test]
    fn test_embed_url() {
        assert_eq!(
            embed_url("https://www.youtube.com/watch?v=abc"),
            "https://www.youtube.com/embed/abc?rel=0&modestbranding=1"
        );
    }
}
