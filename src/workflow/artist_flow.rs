//! 歌手处理流程 - 流程层
//!
//! 核心职责：定义"一个歌手"的完整处理流程
//!
//! 流程顺序：
//! 1. 名字解析 → 目录 id
//! 2. 链接枚举（游标 / 渐进加载 / 专辑）
//! 3. 并发抓取并清洗歌词
//! 4. 合并语料 → 渲染保存

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, warn};

use crate::config::Config;
use crate::error::AppResult;
use crate::infrastructure::HttpFetcher;
use crate::models::{Corpus, EnumerationOutcome, ResolvedArtist};
use crate::services::{
    AlbumEnumerator, Aggregator, ContentFetcher, LinkEnumerator, NameResolver,
};
use crate::workflow::artist_ctx::ArtistCtx;

/// 单个歌手的处理结果
#[derive(Debug, Clone)]
pub struct ArtistReport {
    pub artist: ResolvedArtist,
    /// 通过校验的链接数
    pub links: usize,
    pub outcome: EnumerationOutcome,
    /// 成功取到歌词的数量
    pub fetched: usize,
    pub corpus: Corpus,
    /// 渲染结果路径，只构建语料时为 None
    pub output: Option<PathBuf>,
}

/// 歌手处理流程
///
/// - 编排 resolve → enumerate → fetch → aggregate
/// - 不持有浏览器，只依赖业务能力（services）
pub struct ArtistFlow {
    resolver: NameResolver,
    enumerator: Box<dyn LinkEnumerator>,
    content: ContentFetcher,
    aggregator: Aggregator,
    fetcher: Arc<dyn HttpFetcher>,
    base_url: String,
    album_link_selector: String,
}

impl ArtistFlow {
    pub fn new(
        config: &Config,
        fetcher: Arc<dyn HttpFetcher>,
        enumerator: Box<dyn LinkEnumerator>,
        content: ContentFetcher,
        aggregator: Aggregator,
    ) -> Self {
        Self {
            resolver: NameResolver::new(fetcher.clone(), config.base_url()),
            enumerator,
            content,
            aggregator,
            fetcher,
            base_url: config.base_url().to_string(),
            album_link_selector: config.album_link_selector.clone(),
        }
    }

    /// 只解析 + 枚举 + 抓取，返回语料（不渲染）
    pub async fn build_corpus(&self, ctx: &ArtistCtx) -> AppResult<ArtistReport> {
        info!("{} 🔍 正在解析歌手...", ctx);
        let artist = self.resolver.resolve_artist(&ctx.query).await?;

        let enumeration = match &ctx.album {
            Some(album) => {
                let album_enumerator = AlbumEnumerator::new(
                    self.fetcher.clone(),
                    self.base_url.clone(),
                    album,
                    &self.album_link_selector,
                )?;
                album_enumerator.enumerate(&artist).await?
            }
            None => self.enumerator.enumerate(&artist).await?,
        };
        info!("{} ✓ 找到 {} 首歌曲", ctx, enumeration.len());
        if enumeration.is_empty() {
            warn!("{} ⚠️ 没有可用的歌曲链接", ctx);
        }

        let documents = self.content.fetch_all(&enumeration.links).await;
        let fetched = documents.iter().filter(|d| !d.is_empty()).count();
        let corpus = self.aggregator.aggregate(&documents);

        Ok(ArtistReport {
            artist,
            links: enumeration.len(),
            outcome: enumeration.outcome,
            fetched,
            corpus,
            output: None,
        })
    }

    /// 完整流程
    pub async fn run(&self, ctx: &ArtistCtx) -> AppResult<ArtistReport> {
        let mut report = self.build_corpus(ctx).await?;
        if report.corpus.is_empty() {
            warn!("{} ⚠️ 语料为空，仍然生成空词云", ctx);
        }

        let output = self
            .aggregator
            .render(&report.corpus, ctx.query.output_name())?;
        report.output = Some(output);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http::fake::FakeFetcher;
    use crate::render::{CloudConfig, CloudRenderer};
    use crate::services::{CursorEnumerator, LyricExtractor};

    const BASE: &str = "https://genius.test";

    struct NullRenderer;

    impl CloudRenderer for NullRenderer {
        fn render(&self, _corpus: &Corpus, _config: &CloudConfig, output_name: &str) -> AppResult<PathBuf> {
            Ok(PathBuf::from(output_name))
        }
    }

    fn flow(fetcher: FakeFetcher) -> ArtistFlow {
        let config = Config {
            catalog_base_url: BASE.to_string(),
            ..Config::default()
        };
        let fetcher: Arc<dyn HttpFetcher> = Arc::new(fetcher);
        let enumerator = Box::new(CursorEnumerator::new(fetcher.clone(), BASE, 20));
        let content = ContentFetcher::new(
            fetcher.clone(),
            LyricExtractor::new(&config.lyric_selector).unwrap(),
            2,
        );
        let aggregator = Aggregator::new(Arc::new(NullRenderer), CloudConfig::default());
        ArtistFlow::new(&config, fetcher, enumerator, content, aggregator)
    }

    fn lyric(body: &str) -> String {
        format!(r#"<div data-lyrics-container="true">{}</div>"#, body)
    }

    #[tokio::test]
    async fn runs_the_whole_pipeline_in_input_order() {
        let fetcher = FakeFetcher::new()
            .with_page(format!("{BASE}/artists/seether/songs"), "artists/7")
            .with_page(
                format!("{BASE}/api/artists/7"),
                r#"{"response":{"artist":{"name":"Seether"}}}"#,
            )
            .with_page(
                format!("{BASE}/api/artists/7/songs?page=1&per_page=20&sort=popularity"),
                r#"{"response":{"songs":[
                    {"url":"https://genius.test/Seether-broken-lyrics"},
                    {"url":"https://genius.test/Seether-remedy-lyrics"},
                    {"url":"https://genius.test/Seether-gone-lyrics"}
                ],"next_page":null}}"#,
            )
            .with_page(
                "https://genius.test/Seether-broken-lyrics",
                lyric("[Verse]<br>Broken, glass"),
            )
            .with_page("https://genius.test/Seether-remedy-lyrics", lyric("Remedy!"));

        let report = flow(fetcher).run(&ArtistCtx::new("Seether", 1)).await.unwrap();

        assert_eq!(report.artist.id.as_str(), "7");
        assert_eq!(report.links, 3);
        assert_eq!(report.fetched, 2);
        assert_eq!(report.corpus.as_str(), "broken glass remedy");
        assert_eq!(report.output, Some(PathBuf::from("seether")));
    }

    #[tokio::test]
    async fn punctuated_artist_keeps_its_own_songs() {
        let fetcher = FakeFetcher::new()
            .with_page(format!("{BASE}/artists/acdc/songs"), "artists/64")
            .with_page(
                format!("{BASE}/api/artists/64"),
                r#"{"response":{"artist":{"name":"AC/DC","url":"https://genius.test/artists/Ac-dc"}}}"#,
            )
            .with_page(
                format!("{BASE}/api/artists/64/songs?page=1&per_page=20&sort=popularity"),
                r#"{"response":{"songs":[
                    {"url":"https://genius.test/Ac-dc-highway-to-hell-lyrics"},
                    {"url":"https://genius.test/Ac-dc-thunderstruck-lyrics"},
                    {"url":"https://genius.test/Airbourne-runnin-wild-lyrics"}
                ],"next_page":null}}"#,
            )
            .with_page(
                "https://genius.test/Ac-dc-highway-to-hell-lyrics",
                lyric("Highway to hell"),
            )
            .with_page(
                "https://genius.test/Ac-dc-thunderstruck-lyrics",
                lyric("Thunder!"),
            );

        let report = flow(fetcher).run(&ArtistCtx::new("AC/DC", 1)).await.unwrap();

        assert_eq!(report.links, 2);
        assert_eq!(report.fetched, 2);
        assert_eq!(report.corpus.as_str(), "highway to hell thunder");
        assert_eq!(report.output, Some(PathBuf::from("acdc")));
    }

    #[tokio::test]
    async fn unknown_artist_is_not_found() {
        let err = flow(FakeFetcher::new())
            .run(&ArtistCtx::new("asddasnopdas", 1))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn album_mode_reads_the_album_page() {
        let fetcher = FakeFetcher::new()
            .with_page(format!("{BASE}/artists/seether/songs"), "artists/7")
            .with_page(
                format!("{BASE}/api/artists/7"),
                r#"{"response":{"artist":{"name":"Seether"}}}"#,
            )
            .with_page(
                format!("{BASE}/albums/seether/karma-and-effect"),
                r#"<a class="u-display_block" href="https://genius.test/Seether-remedy-lyrics">Remedy</a>"#,
            )
            .with_page("https://genius.test/Seether-remedy-lyrics", lyric("Remedy"));

        let ctx = ArtistCtx::new("Seether", 1).with_album("Karma and Effect");
        let report = flow(fetcher).run(&ctx).await.unwrap();
        assert_eq!(report.links, 1);
        assert_eq!(report.corpus.as_str(), "remedy");
    }
}
