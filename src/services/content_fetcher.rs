//! 歌词抓取服务 - 业务能力层
//!
//! 并发抓取每个链接并清洗歌词。输出顺序与输入一致，单个链接失败只记日志、
//! 在对应位置放空字符串，不会中断整批。

use std::sync::Arc;

use scraper::{Html, Selector};
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult, ConfigError};
use crate::infrastructure::HttpFetcher;
use crate::models::{LyricDocument, SongLink};
use crate::services::lyric_cleaner::clean;

/// 超过这个数量时提示耗时较长
const LARGE_BATCH: usize = 250;

/// 从歌词页 HTML 中提取并清洗歌词
pub struct LyricExtractor {
    selector: Selector,
}

impl LyricExtractor {
    pub fn new(selector: &str) -> AppResult<Self> {
        let parsed = Selector::parse(selector).map_err(|_| ConfigError::InvalidPattern {
            name: "歌词容器选择器".to_string(),
            value: selector.to_string(),
        })?;
        Ok(Self { selector: parsed })
    }

    /// 每个歌词容器的内部 HTML 分别清洗后用空格拼接；没有容器时返回 None
    pub fn extract(&self, page: &str) -> Option<String> {
        let document = Html::parse_document(page);
        let portions: Vec<String> = document
            .select(&self.selector)
            .map(|el| clean(&el.inner_html()))
            .collect();
        if portions.is_empty() {
            return None;
        }
        Some(
            portions
                .into_iter()
                .filter(|p| !p.is_empty())
                .collect::<Vec<_>>()
                .join(" "),
        )
    }
}

/// 歌词抓取服务
pub struct ContentFetcher {
    fetcher: Arc<dyn HttpFetcher>,
    extractor: Arc<LyricExtractor>,
    concurrency: usize,
}

impl ContentFetcher {
    pub fn new(fetcher: Arc<dyn HttpFetcher>, extractor: LyricExtractor, concurrency: usize) -> Self {
        Self {
            fetcher,
            extractor: Arc::new(extractor),
            concurrency: concurrency.max(1),
        }
    }

    /// 抓取全部链接，返回与输入等长、同序的结果
    pub async fn fetch_all(&self, links: &[SongLink]) -> Vec<LyricDocument> {
        info!("📝 正在处理 {} 首歌词 (并发 {})...", links.len(), self.concurrency);
        if links.len() > LARGE_BATCH {
            info!("💡 歌曲较多，可能需要一段时间...");
        }

        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let mut handles = Vec::with_capacity(links.len());

        for link in links {
            let semaphore = semaphore.clone();
            let fetcher = self.fetcher.clone();
            let extractor = self.extractor.clone();
            let link = link.clone();

            let handle = tokio::spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .map_err(|e| AppError::transient(link.as_str(), e))?;
                fetch_one(fetcher.as_ref(), &extractor, &link).await
            });
            handles.push(handle);
        }

        // 按输入顺序等待，保证输出顺序与完成顺序无关
        let mut documents = Vec::with_capacity(links.len());
        let mut failed = 0usize;
        for (link, handle) in links.iter().zip(handles) {
            let text = match handle.await {
                Ok(Ok(text)) => text,
                Ok(Err(e)) => {
                    warn!("⚠️ 跳过 {}: {}", link, e);
                    failed += 1;
                    String::new()
                }
                Err(e) => {
                    warn!("⚠️ 任务执行失败 {}: {}", link, e);
                    failed += 1;
                    String::new()
                }
            };
            documents.push(LyricDocument::new(link.clone(), text));
        }

        info!(
            "✓ 歌词处理完成: 成功 {}/{}",
            links.len() - failed,
            links.len()
        );
        documents
    }
}

async fn fetch_one(fetcher: &dyn HttpFetcher, extractor: &LyricExtractor, link: &SongLink) -> AppResult<String> {
    let page = fetcher.get_text(link.as_str()).await?;
    let text = extractor
        .extract(&page)
        .ok_or_else(|| AppError::not_found(format!("{} 中的歌词", link)))?;
    debug!("{} -> {} 字符", link, text.len());
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http::fake::FakeFetcher;

    const SELECTOR: &str = r#"div[data-lyrics-container="true"]"#;

    fn lyric_page(body: &str) -> String {
        format!(
            r#"<html><body><h1>Title</h1><div data-lyrics-container="true">{}</div></body></html>"#,
            body
        )
    }

    #[test]
    fn extracts_and_cleans_every_container() {
        let extractor = LyricExtractor::new(SELECTOR).unwrap();
        let page = r#"<div data-lyrics-container="true">[Verse 1]<br>Hello, World!</div>
            <div class="ad">buy now</div>
            <div data-lyrics-container="true"><i>Goodbye</i> (now)</div>"#;
        assert_eq!(extractor.extract(page).as_deref(), Some("hello world goodbye now"));
    }

    #[test]
    fn page_without_containers_yields_none() {
        let extractor = LyricExtractor::new(SELECTOR).unwrap();
        assert_eq!(extractor.extract("<html><p>instrumental</p></html>"), None);
    }

    #[tokio::test]
    async fn failed_url_leaves_empty_slot_and_keeps_order() {
        let urls: Vec<String> = (0..5).map(|i| format!("https://genius.test/A-song-{i}-lyrics")).collect();
        let mut fetcher = FakeFetcher::new();
        for (i, url) in urls.iter().enumerate() {
            // 第 3 个链接不注册，返回错误
            if i != 2 {
                fetcher = fetcher.with_page(url.clone(), lyric_page(&format!("Line {i}!")));
            }
        }
        let links: Vec<SongLink> = urls.iter().map(SongLink::new).collect();
        let content = ContentFetcher::new(Arc::new(fetcher), LyricExtractor::new(SELECTOR).unwrap(), 2);

        let docs = content.fetch_all(&links).await;

        assert_eq!(docs.len(), 5);
        let texts: Vec<&str> = docs.iter().map(|d| d.text.as_str()).collect();
        assert_eq!(texts, vec!["line 0", "line 1", "", "line 3", "line 4"]);
        for (doc, link) in docs.iter().zip(&links) {
            assert_eq!(&doc.link, link);
        }
    }

    #[tokio::test]
    async fn page_without_lyrics_is_skipped() {
        let fetcher = FakeFetcher::new().with_page("https://genius.test/A-x-lyrics", "<html></html>");
        let content = ContentFetcher::new(Arc::new(fetcher), LyricExtractor::new(SELECTOR).unwrap(), 4);
        let docs = content.fetch_all(&[SongLink::new("https://genius.test/A-x-lyrics")]).await;
        assert_eq!(docs.len(), 1);
        assert!(docs[0].is_empty());
    }

    #[tokio::test]
    async fn empty_input_returns_empty_output() {
        let content = ContentFetcher::new(
            Arc::new(FakeFetcher::new()),
            LyricExtractor::new(SELECTOR).unwrap(),
            4,
        );
        assert!(content.fetch_all(&[]).await.is_empty());
    }
}
