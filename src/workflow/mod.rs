pub mod artist_ctx;
pub mod artist_flow;

pub use artist_ctx::ArtistCtx;
pub use artist_flow::{ArtistFlow, ArtistReport};
