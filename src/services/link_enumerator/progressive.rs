use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use super::stall::{CollectState, StallTracker};
use super::{Collected, LinkEnumerator};
use crate::error::{AppError, AppResult};
use crate::infrastructure::JsExecutor;
use crate::models::{EnumerationOutcome, ResolvedArtist};

/// 超过这个数量的曲库很可能无法一次加载完整
const LARGE_LIBRARY: usize = 500;

/// 渐进渲染的歌曲列表页面
///
/// 真实实现是浏览器页面，测试中可以用脚本化的实现替换
#[async_trait]
pub trait RenderedListing: Send + Sync {
    /// 打开列表页
    async fn open(&self, url: &str) -> AppResult<()>;
    /// 摘要元素中的歌曲总数，元素不存在时为 None
    async fn expected_total(&self) -> AppResult<Option<usize>>;
    /// 触发加载更多内容
    async fn load_more(&self) -> AppResult<()>;
    /// 当前可见的链接数量
    async fn visible_count(&self) -> AppResult<usize>;
    /// 当前可见的所有链接
    async fn visible_links(&self) -> AppResult<Vec<String>>;
}

/// 基于 chromiumoxide 页面的列表实现
pub struct BrowserListing {
    executor: JsExecutor,
    summary_selector: String,
    link_class: String,
}

impl BrowserListing {
    pub fn new(
        executor: JsExecutor,
        summary_selector: impl Into<String>,
        link_class: impl Into<String>,
    ) -> Self {
        Self {
            executor,
            summary_selector: summary_selector.into(),
            link_class: link_class.into(),
        }
    }
}

#[async_trait]
impl RenderedListing for BrowserListing {
    async fn open(&self, url: &str) -> AppResult<()> {
        self.executor
            .goto(url)
            .await
            .map_err(|e| AppError::transient(url, e))
    }

    async fn expected_total(&self) -> AppResult<Option<usize>> {
        let js_code = format!(
            r#"(() => {{
                const el = document.querySelector({});
                return el ? el.textContent : "";
            }})()"#,
            serde_json::to_string(&self.summary_selector)?
        );
        let text: String = self.executor.eval_as(js_code).await?;
        Ok(parse_total(&text))
    }

    async fn load_more(&self) -> AppResult<()> {
        self.executor
            .eval("window.scrollTo(0, document.body.scrollHeight); true")
            .await?;
        Ok(())
    }

    async fn visible_count(&self) -> AppResult<usize> {
        let js_code = format!(
            "document.getElementsByClassName({}).length",
            serde_json::to_string(&self.link_class)?
        );
        self.executor.eval_as(js_code).await
    }

    async fn visible_links(&self) -> AppResult<Vec<String>> {
        let js_code = format!(
            r#"Array.from(document.getElementsByClassName({}))
                .map(el => el.getAttribute('href') ? el.href : null)
                .filter(href => href)"#,
            serde_json::to_string(&self.link_class)?
        );
        self.executor.eval_as(js_code).await
    }
}

/// 从摘要文本中取出数字，如 "Seether has 152 songs" → 152
pub fn parse_total(text: &str) -> Option<usize> {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// 渐进加载 + 停滞检测
pub struct ProgressiveEnumerator<L: RenderedListing> {
    listing: L,
    base_url: String,
    max_stalls: usize,
    interval: Duration,
}

impl<L: RenderedListing> ProgressiveEnumerator<L> {
    pub fn new(listing: L, base_url: impl Into<String>, max_stalls: usize, interval: Duration) -> Self {
        Self {
            listing,
            base_url: base_url.into(),
            max_stalls,
            interval,
        }
    }

    fn listing_url(&self, artist: &ResolvedArtist) -> String {
        format!("{}/artists/{}/songs", self.base_url, artist.url_slug())
    }
}

#[async_trait]
impl<L: RenderedListing> LinkEnumerator for ProgressiveEnumerator<L> {
    fn name(&self) -> &'static str {
        "渐进加载"
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn collect(&self, artist: &ResolvedArtist) -> AppResult<Collected> {
        let url = self.listing_url(artist);
        self.listing.open(&url).await?;
        // 等待首屏渲染
        sleep(self.interval).await;

        info!("[{}] 正在确定曲库大小...", artist.query);
        let expected = self
            .listing
            .expected_total()
            .await?
            .ok_or_else(|| AppError::not_found(format!("{} 的歌曲总数", url)))?;
        info!("[{}] 共 {} 首歌曲，开始收集链接", artist.query, expected);
        if expected > LARGE_LIBRARY {
            warn!(
                "[{}] ⚠️ 曲库较大，可能无法全部加载，将尽量收集",
                artist.query
            );
        }

        let mut tracker = StallTracker::new(expected, self.max_stalls);
        while !tracker.is_terminal() {
            self.listing.load_more().await?;
            sleep(self.interval).await;
            let count = self.listing.visible_count().await?;

            match tracker.observe(count) {
                CollectState::Collecting => {
                    info!("[{}] 已收集 {}/{} 个链接", artist.query, count, expected)
                }
                CollectState::Stalled(n) => {
                    debug!("[{}] 没有新链接 ({} 次), 当前 {}/{}", artist.query, n, count, expected)
                }
                CollectState::Complete | CollectState::Aborted => {}
            }
        }

        let mut urls = self.listing.visible_links().await?;
        urls.truncate(expected);

        if tracker.state() == CollectState::Aborted {
            warn!(
                "[{}] 连续 {} 次没有新链接，使用前 {} 首歌曲继续",
                artist.query,
                tracker.stalls(),
                urls.len()
            );
        } else if urls.len() < expected {
            warn!(
                "[{}] 可见元素 {} 个，但只有 {} 个带链接",
                artist.query,
                tracker.last_count(),
                urls.len()
            );
        }
        // 以实际拿到的链接数为准，而不是采样计数
        let outcome = if urls.len() < expected {
            EnumerationOutcome::Partial {
                expected,
                collected: urls.len(),
            }
        } else {
            EnumerationOutcome::Complete
        };

        info!("[{}] ✓ 收集结束，共 {} 个链接", artist.query, urls.len());
        Ok(Collected { urls, outcome })
    }
}
