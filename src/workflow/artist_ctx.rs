//! 歌手处理上下文
//!
//! 封装"我正在处理第几个歌手、哪张专辑"这一信息，沿调用链显式传递

use std::fmt::Display;

use crate::models::ArtistQuery;

/// 歌手处理上下文
#[derive(Debug, Clone)]
pub struct ArtistCtx {
    /// 用户输入
    pub query: ArtistQuery,

    /// 只处理某张专辑时的专辑名
    pub album: Option<String>,

    /// 批次中的序号（从 1 开始，仅用于日志）
    pub index: usize,
}

impl ArtistCtx {
    pub fn new(name: impl Into<String>, index: usize) -> Self {
        Self {
            query: ArtistQuery::new(name),
            album: None,
            index,
        }
    }

    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }
}

impl Display for ArtistCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.album {
            Some(album) => write!(f, "[歌手 #{} {} / {}]", self.index, self.query, album),
            None => write!(f, "[歌手 #{} {}]", self.index, self.query),
        }
    }
}
