//! 歌手查询与目录标识

use std::fmt::Display;

use deunicode::deunicode_char;

/// 用户输入的歌手名，构造后不可变
///
/// 同时保存派生出的 slug（用于 URL 和输出文件名）和匹配键（用于名字比对）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistQuery {
    raw: String,
    slug: String,
    match_key: String,
}

impl ArtistQuery {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let slug = slugify(&raw);
        let match_key = match_key(&raw);
        Self {
            raw,
            slug,
            match_key,
        }
    }

    /// 原始输入
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// URL 安全的 slug：音译、小写、空格变连字符、只保留 `[a-z0-9-]`
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// 去掉非单词字符、音译、小写后的比对键
    pub fn match_key(&self) -> &str {
        &self.match_key
    }

    /// 输出文件名与 slug 使用同一套规则
    pub fn output_name(&self) -> &str {
        &self.slug
    }

    /// slug 或比对键为空时无法在目录中定位
    pub fn is_resolvable(&self) -> bool {
        !self.slug.is_empty() && !self.match_key.is_empty()
    }
}

impl Display for ArtistQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// 目录中歌手的唯一标识（如 Genius 的数字 id）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CatalogIdentifier(String);

impl CatalogIdentifier {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CatalogIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 已解析的歌手：查询 + 标识，沿调用链显式传递
#[derive(Debug, Clone)]
pub struct ResolvedArtist {
    pub query: ArtistQuery,
    pub id: CatalogIdentifier,
    /// 目录主页路径的最后一段（如 `Ac-dc`），目录没有给出主页时为 None
    pub catalog_slug: Option<String>,
}

impl ResolvedArtist {
    pub fn new(query: ArtistQuery, id: CatalogIdentifier) -> Self {
        Self {
            query,
            id,
            catalog_slug: None,
        }
    }

    /// 从目录给出的歌手主页取路径段
    pub fn with_catalog_url(mut self, url: &str) -> Self {
        self.catalog_slug = url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty() && !segment.contains(':'))
            .map(str::to_string);
        self
    }

    /// 查询 slug，用于输出文件名
    pub fn slug(&self) -> &str {
        self.query.slug()
    }

    /// 站内 URL 使用的歌手路径段：优先目录主页，否则退回查询 slug
    pub fn url_slug(&self) -> &str {
        self.catalog_slug.as_deref().unwrap_or(self.query.slug())
    }
}

/// 只音译拉丁字母；其它文字（假名、汉字、谚文等）不在支持范围内，直接丢弃
pub fn transliterate(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if c.is_ascii() {
            out.push(c);
        } else if is_latin(c) {
            if let Some(ascii) = deunicode_char(c) {
                out.push_str(ascii);
            }
        } else if c.is_whitespace() {
            out.push(' ');
        }
    }
    out
}

fn is_latin(c: char) -> bool {
    matches!(c as u32,
        0x00C0..=0x024F     // Latin-1 Supplement 字母 + Latin Extended-A/B
        | 0x1E00..=0x1EFF   // Latin Extended Additional
        | 0x2018..=0x201F   // 弯引号
    ) && c != '\u{00D7}'
        && c != '\u{00F7}'
}

/// 生成 slug：音译 → 小写 → 空格变 `-` → 去掉 `[a-z0-9-]` 以外的字符
pub fn slugify(input: &str) -> String {
    transliterate(input)
        .to_lowercase()
        .replace(' ', "-")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

/// 生成比对键：去掉非单词字符 → 音译 → 小写
pub fn match_key(input: &str) -> String {
    let words: String = input
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect();
    transliterate(&words)
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_of_simple_names() {
        assert_eq!(slugify("Seether"), "seether");
        assert_eq!(slugify("Taylor Swift"), "taylor-swift");
        assert_eq!(slugify("TOMORROW X TOGETHER"), "tomorrow-x-together");
    }

    #[test]
    fn slug_strips_punctuation_and_transliterates() {
        assert_eq!(slugify("AC/DC"), "acdc");
        assert_eq!(slugify("J. Cole"), "j-cole");
        assert_eq!(slugify("Beyoncé"), "beyonce");
        assert_eq!(slugify("Björk"), "bjork");
        assert_eq!(slugify("D'Angelo"), "dangelo");
        assert_eq!(slugify(";return;"), "return");
    }

    #[test]
    fn unsupported_scripts_produce_empty_slug() {
        assert_eq!(slugify("かめりあ"), "");
        assert_eq!(slugify("周杰倫"), "");
        assert_eq!(slugify("에픽하이"), "");
        assert!(!ArtistQuery::new("かめりあ").is_resolvable());
    }

    #[test]
    fn garbage_input_is_not_resolvable() {
        for name in ["", "/", ";", "   "] {
            assert!(!ArtistQuery::new(name).is_resolvable(), "{name:?}");
        }
    }

    #[test]
    fn match_key_drops_non_word_characters() {
        assert_eq!(match_key("AC/DC"), "acdc");
        assert_eq!(match_key("D'Angelo"), "dangelo");
        assert_eq!(match_key("Beyoncé"), "beyonce");
        assert_eq!(match_key("?return"), "return");
    }

    #[test]
    fn url_slug_prefers_catalog_path() {
        let artist = ResolvedArtist::new(ArtistQuery::new("AC/DC"), CatalogIdentifier::new("1"))
            .with_catalog_url("https://genius.com/artists/Ac-dc");
        assert_eq!(artist.url_slug(), "Ac-dc");
        assert_eq!(artist.slug(), "acdc");

        let bare = ResolvedArtist::new(ArtistQuery::new("AC/DC"), CatalogIdentifier::new("1"));
        assert_eq!(bare.url_slug(), "acdc");

        let odd = bare.with_catalog_url("https://");
        assert_eq!(odd.url_slug(), "acdc");
    }

    #[test]
    fn output_name_matches_slug() {
        let q = ArtistQuery::new("Charli XCX");
        assert_eq!(q.output_name(), "charli-xcx");
        assert_eq!(q.raw(), "Charli XCX");
    }
}
