use std::fmt::Display;

/// 一首歌的歌词页面链接
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SongLink(String);

impl SongLink {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SongLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 链接 + 清洗后的歌词，创建后不再修改
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricDocument {
    pub link: SongLink,
    pub text: String,
}

impl LyricDocument {
    pub fn new(link: SongLink, text: String) -> Self {
        Self { link, text }
    }

    /// 抓取失败或页面没有歌词时为空
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// 枚举结束时的状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumerationOutcome {
    /// 已收集到全部链接（或游标翻页自然结束）
    Complete,
    /// 停滞次数达到上限，只拿到部分链接；不是错误
    Partial { expected: usize, collected: usize },
}

impl EnumerationOutcome {
    pub fn is_partial(&self) -> bool {
        matches!(self, EnumerationOutcome::Partial { .. })
    }
}

/// 一次链接枚举的结果
#[derive(Debug, Clone)]
pub struct Enumeration {
    /// 通过校验、去重后的链接，保持收集顺序
    pub links: Vec<SongLink>,
    pub outcome: EnumerationOutcome,
    /// 校验阶段丢弃的链接数
    pub discarded: usize,
}

impl Enumeration {
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

/// 所有歌词拼接成的语料
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus(String);

impl Corpus {
    /// 按输入顺序以单个空格拼接，空块跳过
    pub fn from_documents(documents: &[LyricDocument]) -> Self {
        let text = documents
            .iter()
            .map(|d| d.text.as_str())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.0.split_whitespace().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(url: &str, text: &str) -> LyricDocument {
        LyricDocument::new(SongLink::new(url), text.to_string())
    }

    #[test]
    fn corpus_keeps_input_order_with_single_spaces() {
        let docs = vec![doc("a", "first verse"), doc("b", ""), doc("c", "third")];
        let corpus = Corpus::from_documents(&docs);
        assert_eq!(corpus.as_str(), "first verse third");
        assert_eq!(corpus.word_count(), 3);
    }

    #[test]
    fn corpus_of_failed_documents_is_empty() {
        let corpus = Corpus::from_documents(&[doc("a", ""), doc("b", "")]);
        assert!(corpus.is_empty());
    }
}
