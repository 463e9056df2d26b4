pub mod extractor;
pub mod post;
pub mod provider;
pub mod resolve;
pub mod samples;

pub use extractor::{Extractor, ResolverEngine};
pub use post::{Category, PostDraft, PostError, PublishStatus, VlogPost};
pub use provider::{HostMatch, Provider, VideoReference};
