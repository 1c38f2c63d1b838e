//! 词云渲染边界
//!
//! 核心流程只产出语料字符串；这里接收语料 + 固定配置，生成并保存结果文件

pub mod frequency;
pub mod stopwords;

pub use frequency::FrequencyTableRenderer;

use std::path::PathBuf;

use crate::error::AppResult;
use crate::models::Corpus;

/// 词云的固定配置
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CloudConfig {
    pub width: u32,
    pub height: u32,
    pub background_color: &'static str,
    pub max_words: usize,
    pub min_font_size: u32,
    pub relative_scaling: f64,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            width: 1080,
            height: 1080,
            background_color: "black",
            max_words: 150,
            min_font_size: 8,
            relative_scaling: 0.7,
        }
    }
}

/// 渲染协作者
pub trait CloudRenderer: Send + Sync {
    /// 渲染并保存，返回写入的文件路径；无法写入时返回 `WriteFailure`
    fn render(&self, corpus: &Corpus, config: &CloudConfig, output_name: &str) -> AppResult<PathBuf>;
}
