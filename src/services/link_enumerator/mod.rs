//! 链接枚举服务 - 业务能力层
//!
//! 给定已解析的歌手，产出去重、有序、通过校验的歌词页链接。
//!
//! 三种实现共享 [`LinkEnumerator`] 接口，由配置显式选择：
//! - [`CursorEnumerator`] - JSON 接口 + next_page 游标翻页
//! - [`ProgressiveEnumerator`] - 无头浏览器滚动加载 + 停滞检测
//! - [`AlbumEnumerator`] - 单张专辑页面

pub mod album;
pub mod cursor;
pub mod progressive;
pub mod stall;
pub mod validation;

pub use album::AlbumEnumerator;
pub use cursor::CursorEnumerator;
pub use progressive::{BrowserListing, ProgressiveEnumerator, RenderedListing};
pub use stall::{CollectState, StallTracker};
pub use validation::LinkValidator;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::error::AppResult;
use crate::models::{Enumeration, EnumerationOutcome, ResolvedArtist};

/// 原始收集结果（校验前）
#[derive(Debug, Clone)]
pub struct Collected {
    pub urls: Vec<String>,
    pub outcome: EnumerationOutcome,
}

impl Collected {
    pub fn complete(urls: Vec<String>) -> Self {
        Self {
            urls,
            outcome: EnumerationOutcome::Complete,
        }
    }
}

/// 链接枚举接口
#[async_trait]
pub trait LinkEnumerator: Send + Sync {
    /// 策略名称（仅用于日志）
    fn name(&self) -> &'static str;

    /// 站点根地址，用于构建校验规则
    fn base_url(&self) -> &str;

    /// 收集原始链接
    async fn collect(&self, artist: &ResolvedArtist) -> AppResult<Collected>;

    /// 收集并校验
    async fn enumerate(&self, artist: &ResolvedArtist) -> AppResult<Enumeration> {
        info!("[{}] 🔗 使用 {} 策略收集链接...", artist.query, self.name());
        let collected = self.collect(artist).await?;

        let validator = LinkValidator::new(self.base_url(), artist.url_slug())?;
        let (links, discarded) = validator.filter(collected.urls);

        if discarded > 0 {
            info!(
                "[{}] 校验丢弃 {} 个无关链接，保留 {} 个",
                artist.query,
                discarded,
                links.len()
            );
        }
        if let EnumerationOutcome::Partial { expected, collected: got } = collected.outcome {
            warn!(
                "[{}] ⚠️ 链接收集未完成: {}/{}，继续处理已收集的部分",
                artist.query, got, expected
            );
        }

        Ok(Enumeration {
            links,
            outcome: collected.outcome,
            discarded,
        })
    }
}
