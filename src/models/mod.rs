pub mod artist;
pub mod catalog;
pub mod song;

pub use artist::{ArtistQuery, CatalogIdentifier, ResolvedArtist};
pub use song::{Corpus, Enumeration, EnumerationOutcome, LyricDocument, SongLink};
