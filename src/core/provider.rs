use serde::{Deserialize, Serialize};
use std::fmt;

/// Video hosting platform a URL belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    YouTube,
    Vimeo,
    Unknown,
}

impl Provider {
    pub fn is_known(&self) -> bool {
        !matches!(self, Provider::Unknown)
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Provider::YouTube => "YouTube",
            Provider::Vimeo => "Vimeo",
            Provider::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// How a URL string is matched against a provider's hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostMatch {
    /// Plain substring containment, e.g. `youtube.com` anywhere in the text.
    #[default]
    Substring,
    /// The text must parse as a URL whose host is the provider host or one
    /// of its subdomains.
    Strict,
}

/// A video URL broken down into provider and identifier.
///
/// `provider` is `Unknown` exactly when `video_id` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoReference {
    pub provider: Provider,
    pub video_id: Option<String>,
    pub original_url: String,
}

impl VideoReference {
    pub fn new(provider: Provider, video_id: String, original_url: &str) -> Self {
        debug_assert!(provider.is_known());
        Self {
            provider,
            video_id: Some(video_id),
            original_url: original_url.to_string(),
        }
    }

    pub fn unrecognized(original_url: &str) -> Self {
        Self {
            provider: Provider::Unknown,
            video_id: None,
            original_url: original_url.to_string(),
        }
    }

    pub fn is_recognized(&self) -> bool {
        self.video_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_display() {
        assert_eq!(Provider::YouTube.to_string(), "YouTube");
        assert_eq!(Provider::Vimeo.to_string(), "Vimeo");
        assert_eq!(Provider::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn test_unrecognized_reference_has_no_id() {
        let reference = VideoReference::unrecognized("https://example.com/video.mp4");
        assert_eq!(reference.provider, Provider::Unknown);
        assert!(reference.video_id.is_none());
        assert!(!reference.is_recognized());
    }

    #[test]
    fn test_host_match_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: HostMatch,
        }
        let parsed: Wrapper = toml::from_str("mode = \"strict\"").unwrap();
        assert_eq!(parsed.mode, HostMatch::Strict);
    }
}
