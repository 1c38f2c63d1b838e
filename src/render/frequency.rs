use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::{debug, info};

use super::stopwords::is_stopword;
use super::{CloudConfig, CloudRenderer};
use crate::error::{AppError, AppResult};
use crate::models::Corpus;

/// 至少两个字符，允许词内撇号
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w[\w']+").expect("静态正则"));

/// 一个词的统计结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordWeight {
    pub word: String,
    pub count: usize,
    /// 相对最高频词的频率 (0, 1]
    pub weight: f64,
    /// 按 relative_scaling 换算后的相对字号 (0, 1]
    pub relative_size: f64,
}

#[derive(Debug, Serialize)]
struct CloudArtifact<'a> {
    name: &'a str,
    generated_at: String,
    config: &'a CloudConfig,
    total_tokens: usize,
    words: Vec<WordWeight>,
}

/// 统计词频并把词表写成 JSON
pub struct FrequencyTableRenderer {
    output_dir: PathBuf,
}

impl FrequencyTableRenderer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_path(&self, output_name: &str) -> PathBuf {
        self.output_dir.join(format!("{}.json", output_name))
    }
}

impl CloudRenderer for FrequencyTableRenderer {
    fn render(&self, corpus: &Corpus, config: &CloudConfig, output_name: &str) -> AppResult<PathBuf> {
        info!("☁️ 正在生成词云...");
        let (total_tokens, words) = weigh_words(corpus.as_str(), config);
        debug!("有效词 {} 个，保留 {} 个", total_tokens, words.len());

        let artifact = CloudArtifact {
            name: output_name,
            generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            config,
            total_tokens,
            words,
        };

        let path = self.output_path(output_name);
        write_json(&path, &artifact)?;
        info!("✅ 词云已保存: {}", path.display());
        Ok(path)
    }
}

fn write_json(path: &Path, artifact: &CloudArtifact<'_>) -> AppResult<()> {
    let display = path.display().to_string();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| AppError::write_failure(&display, e))?;
    }
    let json = serde_json::to_string_pretty(artifact).map_err(|e| AppError::write_failure(&display, e))?;
    std::fs::write(path, json).map_err(|e| AppError::write_failure(&display, e))
}

/// 分词、去停用词、统计，按频率降序（同频按字母序）保留前 `max_words` 个
pub fn weigh_words(text: &str, config: &CloudConfig) -> (usize, Vec<WordWeight>) {
    let ascii = deunicode::deunicode(text).to_lowercase();
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut total = 0usize;

    for m in TOKEN_RE.find_iter(&ascii) {
        let token = m.as_str();
        let token = token.strip_suffix("'s").unwrap_or(token).trim_matches('\'');
        if token.len() < 2 || token.chars().all(|c| c.is_ascii_digit()) || is_stopword(token) {
            continue;
        }
        total += 1;
        *counts.entry(token.to_string()).or_default() += 1;
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(config.max_words);

    let top = ranked.first().map(|(_, c)| *c).unwrap_or(1) as f64;
    let rs = config.relative_scaling.clamp(0.0, 1.0);
    let words = ranked
        .into_iter()
        .map(|(word, count)| {
            let weight = count as f64 / top;
            WordWeight {
                word,
                count,
                weight,
                relative_size: rs * weight + (1.0 - rs),
            }
        })
        .collect();

    (total, words)
}
