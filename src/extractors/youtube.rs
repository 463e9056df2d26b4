use crate::core::{Extractor, Provider};
use regex::Regex;
use std::sync::LazyLock;

const EMBED_BASE: &str = "https://www.youtube-nocookie.com/embed";

/// URL shapes tried in order; each captures an 11 character video id.
/// End of input also accepts one trailing newline.
static ID_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        // youtube.com/watch?v=ID, optionally followed by more query params
        Regex::new(r"(?:https?://)?(?:www\.)?youtube\.com/watch\?v=([A-Za-z0-9_-]{11})(?:&|\n?\z)")
            .unwrap(),
        Regex::new(r"(?:https?://)?(?:www\.)?youtu\.be/([A-Za-z0-9_-]{11})(?:\?|\n?\z)").unwrap(),
        Regex::new(r"(?:https?://)?(?:www\.)?youtube\.com/embed/([A-Za-z0-9_-]{11})(?:\?|\n?\z)")
            .unwrap(),
    ]
});

#[derive(Debug, Default)]
pub struct YouTubeExtractor;

impl YouTubeExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract_video_id(&self, url: &str) -> Option<String> {
        if url.is_empty() {
            return None;
        }

        ID_PATTERNS
            .iter()
            .find_map(|pattern| pattern.captures(url))
            .and_then(|captures| captures.get(1))
            .map(|id| id.as_str().to_string())
    }
}

impl Extractor for YouTubeExtractor {
    fn name(&self) -> &'static str {
        "youtube"
    }

    fn provider(&self) -> Provider {
        Provider::YouTube
    }

    fn markers(&self) -> &'static [&'static str] {
        &["youtube.com", "youtu.be"]
    }

    fn hosts(&self) -> &'static [&'static str] {
        &["youtube.com", "youtu.be"]
    }

    fn extract_id(&self, url: &str) -> Option<String> {
        self.extract_video_id(url)
    }

    // The nocookie domain avoids third-party cookies and consent banners.
    fn embed_url(&self, video_id: &str) -> String {
        format!("{}/{}", EMBED_BASE, video_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HostMatch;

    #[test]
    fn test_watch_urls() {
        let extractor = YouTubeExtractor::new();
        let cases = [
            ("https://www.youtube.com/watch?v=rHux0gMZ3Eg", "rHux0gMZ3Eg"),
            ("http://youtube.com/watch?v=rHux0gMZ3Eg", "rHux0gMZ3Eg"),
            ("youtube.com/watch?v=a_b-c_d-e_f", "a_b-c_d-e_f"),
            ("https://www.youtube.com/watch?v=rHux0gMZ3Eg&t=30s", "rHux0gMZ3Eg"),
        ];
        for (url, expected) in cases {
            assert_eq!(extractor.extract_video_id(url).as_deref(), Some(expected), "{}", url);
        }
    }

    #[test]
    fn test_short_and_embed_urls() {
        let extractor = YouTubeExtractor::new();
        assert_eq!(
            extractor.extract_video_id("https://youtu.be/DxCJBeF2MqE").as_deref(),
            Some("DxCJBeF2MqE")
        );
        assert_eq!(
            extractor.extract_video_id("https://youtu.be/DxCJBeF2MqE?t=12").as_deref(),
            Some("DxCJBeF2MqE")
        );
        assert_eq!(
            extractor
                .extract_video_id("https://www.youtube.com/embed/ZxoDjaCHiBo")
                .as_deref(),
            Some("ZxoDjaCHiBo")
        );
        assert_eq!(
            extractor
                .extract_video_id("https://www.youtube.com/embed/ZxoDjaCHiBo?autoplay=1")
                .as_deref(),
            Some("ZxoDjaCHiBo")
        );
    }

    #[test]
    fn test_id_length_must_be_exact() {
        let extractor = YouTubeExtractor::new();
        // 12 characters
        assert_eq!(extractor.extract_video_id("https://www.youtube.com/watch?v=rHux0gMZ3Eg1"), None);
        // 10 characters
        assert_eq!(extractor.extract_video_id("https://youtu.be/DxCJBeF2Mq"), None);
        // id not followed by a boundary
        assert_eq!(extractor.extract_video_id("https://youtu.be/DxCJBeF2MqE/extra"), None);
        assert_eq!(
            extractor.extract_video_id("https://www.youtube.com/watch?v=rHux0gMZ3Eg#t=3"),
            None
        );
    }

    #[test]
    fn test_single_trailing_newline_ends_the_url() {
        let extractor = YouTubeExtractor::new();
        assert_eq!(
            extractor.extract_video_id("https://youtu.be/DxCJBeF2MqE\n").as_deref(),
            Some("DxCJBeF2MqE")
        );
        assert_eq!(
            extractor
                .extract_video_id("https://www.youtube.com/watch?v=rHux0gMZ3Eg\n")
                .as_deref(),
            Some("rHux0gMZ3Eg")
        );
        assert_eq!(
            extractor
                .extract_video_id("https://www.youtube.com/embed/ZxoDjaCHiBo\n")
                .as_deref(),
            Some("ZxoDjaCHiBo")
        );
        assert_eq!(extractor.extract_video_id("https://youtu.be/DxCJBeF2MqE\n\n"), None);
        assert_eq!(extractor.extract_video_id("https://youtu.be/DxCJBeF2MqE\nmore"), None);
    }

    #[test]
    fn test_unmatched_shapes() {
        let extractor = YouTubeExtractor::new();
        assert_eq!(extractor.extract_video_id(""), None);
        assert_eq!(extractor.extract_video_id("rHux0gMZ3Eg"), None);
        assert_eq!(extractor.extract_video_id("https://m.youtube.com/watch?v=abc"), None);
        assert_eq!(
            extractor.extract_video_id("https://www.youtube.com/watch?feature=share&v=rHux0gMZ3Eg"),
            None
        );
        assert_eq!(extractor.extract_video_id("https://www.youtube.com/shorts/rHux0gMZ3Eg"), None);
    }

    #[test]
    fn test_suitable_by_marker() {
        let extractor = YouTubeExtractor::new();
        assert!(extractor.suitable("https://m.youtube.com/watch?v=abc", HostMatch::Substring));
        assert!(extractor.suitable("https://youtu.be/x", HostMatch::Substring));
        assert!(!extractor.suitable("https://YouTube.com/watch", HostMatch::Substring));
        assert!(!extractor.suitable("https://vimeo.com/1", HostMatch::Substring));
    }

    #[test]
    fn test_embed_url() {
        assert_eq!(
            YouTubeExtractor::new().embed_url("rHux0gMZ3Eg"),
            "https://www.youtube-nocookie.com/embed/rHux0gMZ3Eg"
        );
    }
}
