pub mod aggregator;
pub mod content_fetcher;
pub mod link_enumerator;
pub mod lyric_cleaner;
pub mod name_resolver;

pub use aggregator::Aggregator;
pub use content_fetcher::{ContentFetcher, LyricExtractor};
pub use link_enumerator::{
    AlbumEnumerator, CursorEnumerator, LinkEnumerator, ProgressiveEnumerator,
};
pub use lyric_cleaner::clean;
pub use name_resolver::NameResolver;
