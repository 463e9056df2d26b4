pub mod vimeo;
pub mod youtube;

pub use vimeo::VimeoExtractor;
pub use youtube::YouTubeExtractor;
