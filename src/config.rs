use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::error::{AppResult, ConfigError};

/// 默认配置文件名
pub const DEFAULT_CONFIG_FILE: &str = "wordcloud.toml";

/// 链接枚举策略
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnumerationStrategy {
    /// 通过 JSON 接口的 next_page 游标翻页
    Cursor,
    /// 在无头浏览器中滚动加载，带停滞检测
    Progressive,
}

impl EnumerationStrategy {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "cursor" => Some(Self::Cursor),
            "progressive" => Some(Self::Progressive),
            _ => None,
        }
    }
}

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 目录站点根地址
    pub catalog_base_url: String,
    /// 链接枚举策略
    pub strategy: EnumerationStrategy,
    /// 游标翻页每页数量
    pub per_page: usize,
    /// 连续停滞多少次后放弃（渐进加载）
    pub max_stall_retries: usize,
    /// 每次滚动后的等待时间（毫秒）
    pub scroll_interval_ms: u64,
    /// 单次 HTTP 请求超时（秒）
    pub request_timeout_secs: u64,
    /// 歌词抓取并发数，None 表示按 CPU 核数
    pub fetch_concurrency: Option<usize>,
    /// HTTP User-Agent
    pub user_agent: String,
    /// 浏览器可执行文件路径，None 表示由 chromiumoxide 自动查找
    pub browser_executable: Option<String>,
    /// 已运行浏览器的调试端口，设置后不再启动新浏览器
    pub browser_debug_port: Option<u16>,
    /// 歌词容器 CSS 选择器
    pub lyric_selector: String,
    /// 歌曲列表链接的 class
    pub link_class: String,
    /// 歌曲总数摘要元素的 CSS 选择器
    pub summary_selector: String,
    /// 专辑页面中歌曲链接的 CSS 选择器
    pub album_link_selector: String,
    /// 结果输出目录
    pub output_dir: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_base_url: "https://genius.com".to_string(),
            strategy: EnumerationStrategy::Cursor,
            per_page: 20,
            max_stall_retries: 5,
            scroll_interval_ms: 1000,
            request_timeout_secs: 30,
            fetch_concurrency: None,
            user_agent: "Mozilla/5.0 (X11; Linux x86_64) artist-wordcloud/0.1".to_string(),
            browser_executable: None,
            browser_debug_port: None,
            lyric_selector: r#"div[data-lyrics-container="true"]"#.to_string(),
            link_class: "ListItem__Link-sc-122yj9e-1".to_string(),
            summary_selector: ".ListSectiondesktop__Summary-sc-53xokv-6.dSgVld".to_string(),
            album_link_selector: "a.u-display_block".to_string(),
            output_dir: ".".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 加载配置：配置文件（如果存在）→ 环境变量覆盖
    ///
    /// 配置文件路径取自 `WORDCLOUD_CONFIG`，默认 `wordcloud.toml`
    pub fn load() -> AppResult<Self> {
        let path = std::env::var("WORDCLOUD_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        let base = if Path::new(&path).exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };
        Ok(base.with_env_overrides())
    }

    /// 从 TOML 文件加载，缺失字段使用默认值
    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content, &path.display().to_string())
    }

    fn from_toml_str(content: &str, origin: &str) -> AppResult<Self> {
        let config = toml::from_str(content).map_err(|source| ConfigError::TomlParseFailed {
            path: origin.to_string(),
            source,
        })?;
        Ok(config)
    }

    /// 仅使用默认值 + 环境变量
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    fn with_env_overrides(self) -> Self {
        let d = self;
        Self {
            catalog_base_url: env_string("CATALOG_BASE_URL").unwrap_or(d.catalog_base_url),
            strategy: env_string("ENUMERATION_STRATEGY")
                .and_then(|v| {
                    let parsed = EnumerationStrategy::parse(&v);
                    if parsed.is_none() {
                        warn!("忽略无效的 ENUMERATION_STRATEGY: {}", v);
                    }
                    parsed
                })
                .unwrap_or(d.strategy),
            per_page: env_parsed("PER_PAGE").unwrap_or(d.per_page),
            max_stall_retries: env_parsed("MAX_STALL_RETRIES").unwrap_or(d.max_stall_retries),
            scroll_interval_ms: env_parsed("SCROLL_INTERVAL_MS").unwrap_or(d.scroll_interval_ms),
            request_timeout_secs: env_parsed("REQUEST_TIMEOUT_SECS").unwrap_or(d.request_timeout_secs),
            fetch_concurrency: env_parsed("FETCH_CONCURRENCY").or(d.fetch_concurrency),
            user_agent: env_string("USER_AGENT").unwrap_or(d.user_agent),
            browser_executable: env_string("BROWSER_EXECUTABLE").or(d.browser_executable),
            browser_debug_port: env_parsed("BROWSER_DEBUG_PORT").or(d.browser_debug_port),
            lyric_selector: env_string("LYRIC_SELECTOR").unwrap_or(d.lyric_selector),
            link_class: env_string("LINK_CLASS").unwrap_or(d.link_class),
            summary_selector: env_string("SUMMARY_SELECTOR").unwrap_or(d.summary_selector),
            album_link_selector: env_string("ALBUM_LINK_SELECTOR").unwrap_or(d.album_link_selector),
            output_dir: env_string("OUTPUT_DIR").unwrap_or(d.output_dir),
            verbose_logging: env_parsed("VERBOSE_LOGGING").unwrap_or(d.verbose_logging),
        }
    }

    /// 实际使用的抓取并发数
    pub fn effective_concurrency(&self) -> usize {
        self.fetch_concurrency
            .filter(|n| *n > 0)
            .unwrap_or_else(|| {
                std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(4)
            })
    }

    /// 去掉末尾斜杠的根地址
    pub fn base_url(&self) -> &str {
        self.catalog_base_url.trim_end_matches('/')
    }
}

fn env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn env_parsed<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = env_string(name)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("忽略无效的环境变量 {}={}", name, raw);
            None
        }
    }
}
