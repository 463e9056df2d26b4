use crate::core::{HostMatch, Provider, VideoReference};
use crate::extractors::{VimeoExtractor, YouTubeExtractor};
use tracing::debug;
use url::{ParseError, Url};

/// A single video hosting provider: how to recognise its URLs, pull the
/// video identifier out of them and build the player URL.
pub trait Extractor: Send + Sync {
    fn name(&self) -> &'static str;
    fn provider(&self) -> Provider;

    /// Substrings whose presence classifies a URL as this provider.
    fn markers(&self) -> &'static [&'static str];

    /// Registrable hosts accepted under [`HostMatch::Strict`].
    fn hosts(&self) -> &'static [&'static str];

    fn extract_id(&self, url: &str) -> Option<String>;
    fn embed_url(&self, video_id: &str) -> String;

    fn suitable(&self, url: &str, mode: HostMatch) -> bool {
        match mode {
            HostMatch::Substring => self.markers().iter().any(|marker| url.contains(marker)),
            HostMatch::Strict => match host_of(url) {
                Some(host) => self.hosts().iter().any(|allowed| host_matches(&host, allowed)),
                None => false,
            },
        }
    }
}

fn host_of(url: &str) -> Option<String> {
    let parsed = match Url::parse(url) {
        Err(ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("https://{}", url)),
        parsed => parsed,
    };
    parsed.ok()?.host_str().map(|host| host.to_string())
}

fn host_matches(host: &str, allowed: &str) -> bool {
    host == allowed
        || host
            .strip_suffix(allowed)
            .is_some_and(|prefix| prefix.ends_with('.'))
}

/// Ordered set of extractors. Classification walks the list in
/// registration order and stops at the first suitable extractor.
pub struct ResolverEngine {
    pub extractors: Vec<Box<dyn Extractor>>,
    host_match: HostMatch,
}

impl ResolverEngine {
    pub fn new(host_match: HostMatch) -> Self {
        Self {
            extractors: Vec::new(),
            host_match,
        }
    }

    /// Engine with the built-in providers, YouTube first.
    pub fn with_defaults(host_match: HostMatch) -> Self {
        let mut engine = Self::new(host_match);
        engine.register_extractor(Box::new(YouTubeExtractor::new()));
        engine.register_extractor(Box::new(VimeoExtractor::new()));
        engine
    }

    pub fn register_extractor(&mut self, extractor: Box<dyn Extractor>) {
        self.extractors.push(extractor);
    }

    pub fn host_match(&self) -> HostMatch {
        self.host_match
    }

    fn find(&self, url: &str) -> Option<&dyn Extractor> {
        if url.is_empty() {
            return None;
        }
        self.extractors
            .iter()
            .find(|extractor| extractor.suitable(url, self.host_match))
            .map(|extractor| extractor.as_ref())
    }

    pub fn identify_provider(&self, url: &str) -> Provider {
        self.find(url)
            .map(|extractor| extractor.provider())
            .unwrap_or(Provider::Unknown)
    }

    pub fn resolve(&self, url: &str) -> VideoReference {
        let Some(extractor) = self.find(url) else {
            debug!("No provider recognised for {:?}", url);
            return VideoReference::unrecognized(url);
        };

        match extractor.extract_id(url) {
            Some(video_id) => {
                debug!("{} video id {} from {:?}", extractor.name(), video_id, url);
                VideoReference::new(extractor.provider(), video_id, url)
            }
            None => {
                debug!("{} URL without a recognised id: {:?}", extractor.name(), url);
                VideoReference::unrecognized(url)
            }
        }
    }

    /// Player URL for `url`, or `None` when the provider is unknown or the
    /// classified provider's patterns do not yield an id.
    pub fn embed_url(&self, url: &str) -> Option<String> {
        let extractor = self.find(url)?;
        let video_id = extractor.extract_id(url)?;
        Some(extractor.embed_url(&video_id))
    }
}

impl Default for ResolverEngine {
    fn default() -> Self {
        Self::with_defaults(HostMatch::default())
    }
}
