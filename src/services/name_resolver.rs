//! 歌手名解析服务 - 业务能力层
//!
//! 把用户输入的名字映射为目录中的歌手 id

use std::sync::Arc;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};
use crate::infrastructure::{get_json, HttpFetcher};
use crate::models::artist::match_key;
use crate::models::catalog::ArtistEnvelope;
use crate::models::{ArtistQuery, CatalogIdentifier, ResolvedArtist};

static CANDIDATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"artists/([0-9]+)").expect("静态正则"));

/// 歌手名解析服务
///
/// 流程：slug → 目录页 → 提取候选 id → 逐个取详情比对名字 → 第一个匹配即返回。
/// 多个候选都匹配时不做排序，取页面中最先出现的那个。
pub struct NameResolver {
    fetcher: Arc<dyn HttpFetcher>,
    base_url: String,
}

impl NameResolver {
    pub fn new(fetcher: Arc<dyn HttpFetcher>, base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            base_url: base_url.into(),
        }
    }

    /// 目录页地址
    pub fn directory_url(&self, query: &ArtistQuery) -> String {
        format!("{}/artists/{}/songs", self.base_url, query.slug())
    }

    /// 解析歌手，找不到时返回 `NotFound`
    pub async fn resolve(&self, query: &ArtistQuery) -> AppResult<CatalogIdentifier> {
        self.resolve_artist(query).await.map(|artist| artist.id)
    }

    /// 同 [`resolve`](Self::resolve)，同时带上目录主页路径，供链接校验使用
    pub async fn resolve_artist(&self, query: &ArtistQuery) -> AppResult<ResolvedArtist> {
        if !query.is_resolvable() {
            debug!("'{}' 无法生成有效的 slug", query);
            return Err(AppError::not_found(format!("歌手 '{}'", query)));
        }

        let directory_url = self.directory_url(query);
        let page = match self.fetcher.get_text(&directory_url).await {
            Ok(page) => page,
            Err(e) => {
                warn!("目录页获取失败 {}: {}", directory_url, e);
                return Err(AppError::not_found(format!("歌手 '{}' 的目录页", query)));
            }
        };

        let candidates = extract_candidates(&page);
        debug!("[{}] 找到 {} 个候选 id: {:?}", query, candidates.len(), candidates);
        if candidates.is_empty() {
            return Err(AppError::not_found(format!("歌手 '{}' 的候选 id", query)));
        }

        for candidate in candidates {
            let detail_url = format!("{}/api/artists/{}", self.base_url, candidate);
            let detail: ArtistEnvelope = match get_json(self.fetcher.as_ref(), &detail_url).await {
                Ok(detail) => detail,
                Err(e) => {
                    warn!("[{}] 候选 {} 详情获取失败，跳过: {}", query, candidate, e);
                    continue;
                }
            };

            let artist = detail.response.artist;
            if names_match(query.match_key(), &artist.name) {
                info!("✓ '{}' 匹配到目录歌手 '{}' (id: {})", query, artist.name, candidate);
                let resolved = ResolvedArtist::new(query.clone(), CatalogIdentifier::new(candidate));
                return Ok(match artist.url.as_deref() {
                    Some(url) => resolved.with_catalog_url(url),
                    None => resolved,
                });
            }
            debug!("[{}] 候选 {} ({}) 不匹配", query, candidate, artist.name);
        }

        Err(AppError::not_found(format!("歌手 '{}'", query)))
    }
}

/// 按页面出现顺序提取 `artists/<数字>` 中的 id，重复的只保留第一次
pub fn extract_candidates(page: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    CANDIDATE_RE
        .captures_iter(page)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
        .filter(|id| seen.insert(id.clone()))
        .collect()
}

/// 目录名的比对键包含查询的比对键即视为匹配
pub fn names_match(query_key: &str, catalog_name: &str) -> bool {
    !query_key.is_empty() && match_key(catalog_name).contains(query_key)
}
