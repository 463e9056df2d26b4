pub mod cli;
pub mod config;
pub mod core;
pub mod extractors;
pub mod utils;

pub use crate::core::resolve::{
    embed_url_for, extract_vimeo_id, extract_youtube_id, get_embed_url, identify_provider,
    is_vimeo, is_youtube, resolve,
};
pub use crate::core::{
    Category, Extractor, HostMatch, PostDraft, PostError, Provider, PublishStatus, ResolverEngine,
    VideoReference, VlogPost,
};
pub use crate::extractors::{VimeoExtractor, YouTubeExtractor};
