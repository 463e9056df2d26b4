use crate::core::{Extractor, Provider};
use regex::Regex;
use std::sync::LazyLock;

const PLAYER_BASE: &str = "https://player.vimeo.com/video";

static ID_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"(?:https?://)?(?:www\.)?vimeo\.com/(\d+)").unwrap(),
        Regex::new(r"(?:https?://)?player\.vimeo\.com/video/(\d+)").unwrap(),
    ]
});

#[derive(Debug, Default)]
pub struct VimeoExtractor;

impl VimeoExtractor {
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

impl Extractor for VimeoExtractor {
    fn name(&self) -> &'static str {
        "vimeo"
    }

    fn provider(&self) -> Provider {
        Provider::Vimeo
    }

    fn markers(&self) -> &'static [&'static str] {
        &["vimeo.com"]
    }

    fn hosts(&self) -> &'static [&'static str] {
        &["vimeo.com"]
    }

    fn extract_id(&self, url: &str) -> Option<String> {
        self.extract_video_id(url)
    }

    fn embed_url(&self, video_id: &str) -> String {
        format!("{}/{}", PLAYER_BASE, video_id)
    }
}
