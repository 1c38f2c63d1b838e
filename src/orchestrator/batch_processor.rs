//! 批量歌手处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责资源装配和歌手级别的调度。
//!
//! 1. **应用初始化**：创建 HTTP 客户端，按策略启动 / 连接浏览器
//! 2. **装配流程**：枚举器、歌词抓取、渲染器 → `ArtistFlow`
//! 3. **批量模式**：逐个处理命令行给出的歌手，失败跳过并汇总
//! 4. **交互模式**：逐行读取歌手名，找不到时重新提示，空行退出
//! 5. **资源管理**：唯一持有 Browser 的模块
//!
//! 歌手之间串行处理：渐进加载共享同一个页面，并发只发生在歌词抓取阶段。

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use chromiumoxide::Browser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use crate::browser;
use crate::config::{Config, EnumerationStrategy};
use crate::error::AppResult;
use crate::infrastructure::{HttpFetcher, JsExecutor, ReqwestFetcher};
use crate::orchestrator::artist_processor::{process_artist, ArtistOutcome};
use crate::render::{CloudConfig, FrequencyTableRenderer};
use crate::services::link_enumerator::BrowserListing;
use crate::services::{
    Aggregator, ContentFetcher, CursorEnumerator, LinkEnumerator, LyricExtractor,
    ProgressiveEnumerator,
};
use crate::utils::logging::{log_startup, print_final_stats};
use crate::workflow::{ArtistCtx, ArtistFlow};

/// 应用主结构
pub struct App {
    flow: ArtistFlow,
    _browser: Option<Browser>,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> AppResult<Self> {
        let concurrency = config.effective_concurrency();
        log_startup(&format!("{:?}", config.strategy), concurrency);

        let fetcher: Arc<dyn HttpFetcher> = Arc::new(ReqwestFetcher::new(&config)?);

        let (enumerator, browser): (Box<dyn LinkEnumerator>, Option<Browser>) =
            match config.strategy {
                EnumerationStrategy::Cursor => {
                    let cursor: Box<dyn LinkEnumerator> = Box::new(CursorEnumerator::new(
                        fetcher.clone(),
                        config.base_url(),
                        config.per_page,
                    ));
                    (cursor, None)
                }
                EnumerationStrategy::Progressive => {
                    info!("🌐 正在准备浏览器...");
                    let (browser, page) = browser::open_browser(&config).await?;
                    let listing = BrowserListing::new(
                        JsExecutor::new(page),
                        config.summary_selector.clone(),
                        config.link_class.clone(),
                    );
                    let progressive: Box<dyn LinkEnumerator> = Box::new(ProgressiveEnumerator::new(
                        listing,
                        config.base_url(),
                        config.max_stall_retries,
                        Duration::from_millis(config.scroll_interval_ms),
                    ));
                    (progressive, Some(browser))
                }
            };

        let content = ContentFetcher::new(
            fetcher.clone(),
            LyricExtractor::new(&config.lyric_selector)?,
            concurrency,
        );
        let aggregator = Aggregator::new(
            Arc::new(FrequencyTableRenderer::new(&config.output_dir)),
            CloudConfig::default(),
        );
        let flow = ArtistFlow::new(&config, fetcher, enumerator, content, aggregator);

        Ok(Self::from_parts(flow, browser))
    }

    /// 由已装配好的流程构建（不启动任何外部资源）
    pub fn from_parts(flow: ArtistFlow, browser: Option<Browser>) -> Self {
        Self {
            flow,
            _browser: browser,
        }
    }

    /// 批量模式：每个名字独立处理，失败不中断
    pub async fn run_batch(&self, names: &[String], album: Option<&str>) -> BatchStats {
        let mut stats = BatchStats {
            total: names.len(),
            ..Default::default()
        };
        info!("✓ 共 {} 个待处理的歌手", names.len());

        for (idx, name) in names.iter().enumerate() {
            let mut ctx = ArtistCtx::new(name.as_str(), idx + 1);
            if let Some(album) = album {
                ctx = ctx.with_album(album);
            }

            if process_artist(&self.flow, &ctx).await.is_done() {
                stats.success += 1;
            } else {
                stats.failed += 1;
            }
        }

        print_final_stats(stats.success, stats.failed, stats.total);
        stats
    }

    /// 交互模式：逐行读取歌手名，空行退出
    pub async fn run_interactive(&self) -> AppResult<BatchStats> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stats = BatchStats::default();

        loop {
            print!("请输入歌手名（直接回车退出）: ");
            std::io::stdout().flush().ok();

            let Some(line) = lines.next_line().await.map_err(stdin_error)? else {
                break;
            };
            let name = line.trim();
            if name.is_empty() {
                break;
            }

            stats.total += 1;
            let ctx = ArtistCtx::new(name, stats.total);
            match process_artist(&self.flow, &ctx).await {
                ArtistOutcome::Done(_) => stats.success += 1,
                ArtistOutcome::NotFound => {
                    stats.failed += 1;
                    println!("没有找到「{}」，请换个名字再试", name);
                }
                ArtistOutcome::Failed => stats.failed += 1,
            }
        }

        if stats.total > 0 {
            print_final_stats(stats.success, stats.failed, stats.total);
        }
        Ok(stats)
    }
}

fn stdin_error(e: std::io::Error) -> crate::error::AppError {
    crate::error::AppError::transient("stdin", e)
}

/// 处理统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchStats {
    pub success: usize,
    pub failed: usize,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::infrastructure::http::fake::FakeFetcher;
    use crate::models::Corpus;
    use crate::render::CloudRenderer;

    const BASE: &str = "https://genius.test";

    struct NullRenderer;

    impl CloudRenderer for NullRenderer {
        fn render(&self, _corpus: &Corpus, _config: &CloudConfig, output_name: &str) -> AppResult<PathBuf> {
            Ok(PathBuf::from(output_name))
        }
    }

    fn app(fetcher: FakeFetcher) -> App {
        let config = Config {
            catalog_base_url: BASE.to_string(),
            ..Config::default()
        };
        let fetcher: Arc<dyn HttpFetcher> = Arc::new(fetcher);
        let content = ContentFetcher::new(
            fetcher.clone(),
            LyricExtractor::new(&config.lyric_selector).unwrap(),
            2,
        );
        let flow = ArtistFlow::new(
            &config,
            fetcher.clone(),
            Box::new(CursorEnumerator::new(fetcher, BASE, 20)),
            content,
            Aggregator::new(Arc::new(NullRenderer), CloudConfig::default()),
        );
        App::from_parts(flow, None)
    }

    #[tokio::test]
    async fn batch_skips_unknown_artists_and_keeps_going() {
        let fetcher = FakeFetcher::new()
            .with_page(format!("{BASE}/artists/seether/songs"), "artists/7")
            .with_page(
                format!("{BASE}/api/artists/7"),
                r#"{"response":{"artist":{"name":"Seether"}}}"#,
            )
            .with_page(
                format!("{BASE}/api/artists/7/songs?page=1&per_page=20&sort=popularity"),
                r#"{"response":{"songs":[],"next_page":null}}"#,
            );

        let names = vec![
            "asddasnopdas".to_string(),
            "Seether".to_string(),
            "かめりあ".to_string(),
        ];
        let stats = app(fetcher).run_batch(&names, None).await;

        assert_eq!(
            stats,
            BatchStats {
                success: 1,
                failed: 2,
                total: 3
            }
        );
    }

    #[tokio::test]
    async fn empty_batch_reports_zero() {
        let stats = app(FakeFetcher::new()).run_batch(&[], None).await;
        assert_eq!(stats, BatchStats::default());
    }
}
