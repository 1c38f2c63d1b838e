//! 语料聚合 - 业务能力层
//!
//! 把清洗后的歌词拼成一份语料，交给渲染协作者；自身不做词频统计

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::error::AppResult;
use crate::models::{Corpus, LyricDocument};
use crate::render::{CloudConfig, CloudRenderer};

pub struct Aggregator {
    renderer: Arc<dyn CloudRenderer>,
    config: CloudConfig,
}

impl Aggregator {
    pub fn new(renderer: Arc<dyn CloudRenderer>, config: CloudConfig) -> Self {
        Self { renderer, config }
    }

    /// 按输入顺序单空格拼接
    pub fn aggregate(&self, documents: &[LyricDocument]) -> Corpus {
        let corpus = Corpus::from_documents(documents);
        info!(
            "语料合并完成: {} 首歌词, {} 个词",
            documents.iter().filter(|d| !d.is_empty()).count(),
            corpus.word_count()
        );
        corpus
    }

    /// 交给渲染协作者
    pub fn render(&self, corpus: &Corpus, output_name: &str) -> AppResult<PathBuf> {
        self.renderer.render(corpus, &self.config, output_name)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::models::SongLink;

    #[derive(Default)]
    struct RecordingRenderer {
        seen: Mutex<Vec<(String, CloudConfig, String)>>,
    }

    impl CloudRenderer for RecordingRenderer {
        fn render(&self, corpus: &Corpus, config: &CloudConfig, output_name: &str) -> AppResult<PathBuf> {
            self.seen.lock().unwrap().push((
                corpus.as_str().to_string(),
                config.clone(),
                output_name.to_string(),
            ));
            Ok(PathBuf::from(format!("{output_name}.json")))
        }
    }

    #[test]
    fn hands_corpus_and_fixed_config_to_renderer() {
        let renderer = Arc::new(RecordingRenderer::default());
        let aggregator = Aggregator::new(renderer.clone(), CloudConfig::default());
        let docs = vec![
            LyricDocument::new(SongLink::new("a"), "one two".to_string()),
            LyricDocument::new(SongLink::new("b"), String::new()),
            LyricDocument::new(SongLink::new("c"), "three".to_string()),
        ];

        let corpus = aggregator.aggregate(&docs);
        let path = aggregator.render(&corpus, "seether").unwrap();

        assert_eq!(path, PathBuf::from("seether.json"));
        let seen = renderer.seen.lock().unwrap();
        assert_eq!(seen[0].0, "one two three");
        assert_eq!(seen[0].1, CloudConfig::default());
        assert_eq!(seen[0].2, "seether");
    }
}
