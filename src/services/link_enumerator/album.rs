use std::sync::Arc;

use async_trait::async_trait;
use scraper::{Html, Selector};
use tracing::info;

use super::{Collected, LinkEnumerator};
use crate::error::{AppResult, ConfigError};
use crate::infrastructure::HttpFetcher;
use crate::models::artist::slugify;
use crate::models::ResolvedArtist;

/// 只收集某一张专辑的歌曲链接
pub struct AlbumEnumerator {
    fetcher: Arc<dyn HttpFetcher>,
    base_url: String,
    album_slug: String,
    link_selector: Selector,
}

impl AlbumEnumerator {
    pub fn new(
        fetcher: Arc<dyn HttpFetcher>,
        base_url: impl Into<String>,
        album: &str,
        link_selector: &str,
    ) -> AppResult<Self> {
        let link_selector = Selector::parse(link_selector).map_err(|_| ConfigError::InvalidPattern {
            name: "专辑链接选择器".to_string(),
            value: link_selector.to_string(),
        })?;
        Ok(Self {
            fetcher,
            base_url: base_url.into(),
            album_slug: slugify(album),
            link_selector,
        })
    }

    fn album_url(&self, artist: &ResolvedArtist) -> String {
        format!("{}/albums/{}/{}", self.base_url, artist.url_slug(), self.album_slug)
    }

    fn extract_links(&self, page: &str) -> Vec<String> {
        let document = Html::parse_document(page);
        document
            .select(&self.link_selector)
            .filter_map(|a| a.value().attr("href"))
            .map(str::to_string)
            .collect()
    }
}

#[async_trait]
impl LinkEnumerator for AlbumEnumerator {
    fn name(&self) -> &'static str {
        "专辑"
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn collect(&self, artist: &ResolvedArtist) -> AppResult<Collected> {
        let url = self.album_url(artist);
        let page = self.fetcher.get_text(&url).await?;
        let urls = self.extract_links(&page);
        info!("[{}] 专辑 {} 中找到 {} 个链接", artist.query, self.album_slug, urls.len());
        Ok(Collected::complete(urls))
    }
}
