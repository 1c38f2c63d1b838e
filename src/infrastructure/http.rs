//! HTTP 客户端 - 基础设施层
//!
//! 只暴露"取文本 / 取 JSON"的能力，不认识歌手和歌曲

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Config;
use crate::error::{AppError, AppResult, ConfigError};

/// 远程读取能力
///
/// 服务层只依赖这个 trait，测试中用内存实现替换
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    /// GET 并返回响应正文；非 2xx 状态视为 `Transient`
    async fn get_text(&self, url: &str) -> AppResult<String>;
}

/// 取 JSON 并反序列化为指定类型
pub async fn get_json<T: DeserializeOwned>(fetcher: &dyn HttpFetcher, url: &str) -> AppResult<T> {
    let body = fetcher.get_text(url).await?;
    serde_json::from_str(&body).map_err(|e| AppError::transient(url, e))
}

/// 基于 reqwest 的实现，每个请求都带超时
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpFetcher for ReqwestFetcher {
    async fn get_text(&self, url: &str) -> AppResult<String> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;
        debug!("GET {} -> {} 字节", url, body.len());
        Ok(body)
    }
}
