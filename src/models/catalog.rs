//! 目录 JSON 接口的响应结构
//!
//! 只声明用到的字段，其余字段由 serde 忽略

use serde::Deserialize;

/// `/api/artists/{id}` 的响应
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistEnvelope {
    pub response: ArtistResponse,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistResponse {
    pub artist: ArtistDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistDetail {
    pub name: String,
    /// 歌手主页，如 `https://genius.com/artists/Ac-dc`
    #[serde(default)]
    pub url: Option<String>,
}

/// `/api/artists/{id}/songs` 的响应
#[derive(Debug, Clone, Deserialize)]
pub struct SongsEnvelope {
    pub response: SongsPage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SongsPage {
    #[serde(default)]
    pub songs: Vec<SongEntry>,
    pub next_page: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SongEntry {
    pub url: Option<String>,
}
