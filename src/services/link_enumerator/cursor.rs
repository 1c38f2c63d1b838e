use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use super::{Collected, LinkEnumerator};
use crate::error::AppResult;
use crate::infrastructure::{get_json, HttpFetcher};
use crate::models::catalog::SongsEnvelope;
use crate::models::ResolvedArtist;

/// 游标翻页：从第 1 页开始，跟随 `next_page` 直到为 null
pub struct CursorEnumerator {
    fetcher: Arc<dyn HttpFetcher>,
    base_url: String,
    per_page: usize,
}

impl CursorEnumerator {
    pub fn new(fetcher: Arc<dyn HttpFetcher>, base_url: impl Into<String>, per_page: usize) -> Self {
        Self {
            fetcher,
            base_url: base_url.into(),
            per_page: per_page.max(1),
        }
    }

    fn page_url(&self, artist: &ResolvedArtist, page: u32) -> String {
        format!(
            "{}/api/artists/{}/songs?page={}&per_page={}&sort=popularity",
            self.base_url, artist.id, page, self.per_page
        )
    }
}

#[async_trait]
impl LinkEnumerator for CursorEnumerator {
    fn name(&self) -> &'static str {
        "游标翻页"
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn collect(&self, artist: &ResolvedArtist) -> AppResult<Collected> {
        let mut urls = Vec::new();
        let mut page = 1u32;

        loop {
            let envelope: SongsEnvelope =
                get_json(self.fetcher.as_ref(), &self.page_url(artist, page)).await?;
            let songs = envelope.response;

            urls.extend(songs.songs.into_iter().filter_map(|s| s.url));
            debug!("[{}] 第 {} 页完成，累计 {} 个链接", artist.query, page, urls.len());

            match songs.next_page {
                Some(next) if next > page => page = next,
                Some(next) => {
                    warn!("[{}] next_page 未前进 ({} -> {})，停止翻页", artist.query, page, next);
                    break;
                }
                None => break,
            }
        }

        info!("[{}] ✓ 翻页结束，共 {} 个链接", artist.query, urls.len());
        Ok(Collected::complete(urls))
    }
}
