use std::collections::HashSet;

use regex::{Regex, RegexBuilder};

use crate::error::{AppResult, ConfigError};
use crate::models::SongLink;

/// 歌词页允许的后缀
const ACCEPTED_SUFFIXES: &str = "lyrics|annotated";

/// 按歌手 slug 校验歌曲链接，排除合作 / 引用等无关页面
///
/// 目录在歌手名的标点处使用连字符（AC/DC → `Ac-dc`），而查询 slug 会去掉标点，
/// 所以 slug 的相邻字符之间允许出现一个可选的 `-`。
pub struct LinkValidator {
    pattern: Regex,
}

impl LinkValidator {
    pub fn new(base_url: &str, slug: &str) -> AppResult<Self> {
        let raw = format!(
            r"^{}/{}-[^/?#]+-({})/?$",
            regex::escape(base_url.trim_end_matches('/')),
            hyphen_tolerant(slug),
            ACCEPTED_SUFFIXES
        );
        let pattern = RegexBuilder::new(&raw)
            .case_insensitive(true)
            .build()
            .map_err(|_| ConfigError::InvalidPattern {
                name: "链接校验正则".to_string(),
                value: raw.clone(),
            })?;
        Ok(Self { pattern })
    }

    pub fn is_valid(&self, url: &str) -> bool {
        self.pattern.is_match(url.trim())
    }

    /// 保留合法链接并去重（保持顺序），返回 (链接, 丢弃数)
    pub fn filter(&self, urls: Vec<String>) -> (Vec<SongLink>, usize) {
        let total = urls.len();
        let mut seen = HashSet::new();
        let links: Vec<SongLink> = urls
            .into_iter()
            .map(|u| u.trim().to_string())
            .filter(|u| self.is_valid(u))
            .filter(|u| seen.insert(u.clone()))
            .map(SongLink::new)
            .collect();
        let discarded = total - links.len();
        (links, discarded)
    }
}

/// `acdc` → `a-?c-?d-?c`；slug 自带的连字符同样变为可选
fn hyphen_tolerant(slug: &str) -> String {
    slug.chars()
        .filter(|c| *c != '-')
        .map(|c| regex::escape(&c.to_string()))
        .collect::<Vec<_>>()
        .join("-?")
}
