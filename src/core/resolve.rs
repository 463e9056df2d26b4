//! Process-wide resolver functions backed by a default [`ResolverEngine`]
//! using substring host matching.
//!
//! Every function is total: unrecognised input yields `Provider::Unknown`
//! or `None`, never an error. The empty string stands in for a missing URL.

use crate::core::{HostMatch, Provider, ResolverEngine, VideoReference};
use crate::extractors::{VimeoExtractor, YouTubeExtractor};
use std::sync::LazyLock;

static DEFAULT_ENGINE: LazyLock<ResolverEngine> =
    LazyLock::new(|| ResolverEngine::with_defaults(HostMatch::Substring));

pub fn identify_provider(url: &str) -> Provider {
    DEFAULT_ENGINE.identify_provider(url)
}

pub fn is_youtube(url: &str) -> bool {
    identify_provider(url) == Provider::YouTube
}

pub fn is_vimeo(url: &str) -> bool {
    // A URL mentioning both hosts is classified as YouTube.
    identify_provider(url) == Provider::Vimeo
}

/// Video id from the first matching YouTube URL shape, regardless of how
/// the URL as a whole is classified.
pub fn extract_youtube_id(url: &str) -> Option<String> {
    YouTubeExtractor::new().extract_video_id(url)
}

pub fn extract_vimeo_id(url: &str) -> Option<String> {
    VimeoExtractor::new().extract_video_id(url)
}

pub fn get_embed_url(url: &str) -> Option<String> {
    DEFAULT_ENGINE.embed_url(url)
}

/// [`get_embed_url`] for a URL that may be absent.
pub fn embed_url_for(url: Option<&str>) -> Option<String> {
    url.and_then(get_embed_url)
}

pub fn resolve(url: &str) -> VideoReference {
    DEFAULT_ENGINE.resolve(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identify_provider() {
        assert_eq!(identify_provider(""), Provider::Unknown);
        assert_eq!(identify_provider("https://youtu.be/DxCJBeF2MqE"), Provider::YouTube);
        assert_eq!(identify_provider("https://vimeo.com/76979871"), Provider::Vimeo);
        assert_eq!(identify_provider("https://example.com/video.mp4"), Provider::Unknown);
        // case-sensitive containment
        assert_eq!(identify_provider("https://VIMEO.COM/76979871"), Provider::Unknown);
    }

    #[test]
    fn test_is_youtube_is_substring_match() {
        assert!(is_youtube("https://m.youtube.com/watch?v=abc"));
        assert!(!is_vimeo("https://m.youtube.com/watch?v=abc"));
        assert!(is_vimeo("https://player.vimeo.com/video/1"));
        assert!(!is_youtube(""));
        assert!(!is_vimeo(""));
    }

    #[test]
    fn test_embed_url_concrete_cases() {
        let cases = [
            (
                "https://www.youtube.com/watch?v=rHux0gMZ3Eg",
                Some("https://www.youtube-nocookie.com/embed/rHux0gMZ3Eg"),
            ),
            (
                "https://youtu.be/DxCJBeF2MqE",
                Some("https://www.youtube-nocookie.com/embed/DxCJBeF2MqE"),
            ),
            ("https://vimeo.com/76979871", Some("https://player.vimeo.com/video/76979871")),
            (
                "https://player.vimeo.com/video/76979871",
                Some("https://player.vimeo.com/video/76979871"),
            ),
            ("https://example.com/video.mp4", None),
            ("", None),
        ];
        for (url, expected) in cases {
            assert_eq!(get_embed_url(url).as_deref(), expected, "{}", url);
        }
        assert_eq!(embed_url_for(None), None);
    }

    #[test]
    fn test_extract_youtube_id_needs_a_host() {
        let id = extract_youtube_id("https://www.youtube.com/watch?v=rHux0gMZ3Eg&t=30s");
        assert_eq!(id.as_deref(), Some("rHux0gMZ3Eg"));
        assert_eq!(extract_youtube_id(id.as_deref().unwrap_or_default()), None);
    }

    #[test]
    fn test_resolve_keeps_original_url() {
        let reference = resolve("https://vimeo.com/76979871");
        assert_eq!(reference.provider, Provider::Vimeo);
        assert_eq!(reference.video_id.as_deref(), Some("76979871"));
        assert_eq!(reference.original_url, "https://vimeo.com/76979871");

        let reference = resolve("https://m.youtube.com/watch?v=abc");
        assert_eq!(reference.provider, Provider::Unknown);
        assert_eq!(reference.video_id, None);
    }
}
