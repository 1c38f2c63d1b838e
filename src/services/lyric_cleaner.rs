//! 歌词清洗
//!
//! 去掉 HTML 标签、段落标记（如 `[Chorus]`）和固定的标点集合 `{,.?!()\n}`，
//! 合并空白并转小写。结果可以直接作为词频统计的输入。

use std::sync::LazyLock;

use regex::Regex;

/// 段落标记 | 连续标签 | 标点
static FLUFF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\[[^\[\]]*\])|((<[^>]*>)+)|([,.?!()\n])").expect("静态正则")
});

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("静态正则"));

/// 清洗一段歌词 HTML
///
/// 替换会一直进行到没有可匹配的片段为止（嵌套的 `[a [b] c]` 也会被清掉），
/// 因此 `clean(clean(x)) == clean(x)`。
pub fn clean(raw: &str) -> String {
    let mut text = raw.to_lowercase();
    while FLUFF_RE.is_match(&text) {
        text = FLUFF_RE.replace_all(&text, " ").into_owned();
    }
    WHITESPACE_RE.replace_all(&text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_section_labels_tags_and_punctuation() {
        assert_eq!(clean("[Chorus]<div>Hi there!</div>"), "hi there");
    }

    #[test]
    fn br_tags_and_newlines_become_single_spaces() {
        assert_eq!(
            clean("I'm falling<br/>\n<br>down, (again)."),
            "i'm falling down again"
        );
    }

    #[test]
    fn nested_brackets_are_removed() {
        assert_eq!(clean("a [Verse [x] 1] b"), "a b");
    }

    #[test]
    fn keeps_apostrophes_and_other_punctuation() {
        assert_eq!(clean("Don't - stop; now"), "don't - stop; now");
    }

    #[test]
    fn is_idempotent() {
        let samples = [
            "[Chorus]<div>Hi there!</div>",
            "<a href=\"/x\">[Intro: Shaun Morgan]</a><br>Broken   glass\t\n",
            "a [Verse [x] 1] b",
            "<<i>b>c",
            "x ] [ y",
            "ÉCOUTE, Ça (va)?",
            "",
        ];
        for s in samples {
            let once = clean(s);
            assert_eq!(clean(&once), once, "input: {s:?}");
        }
    }

    #[test]
    fn output_never_contains_removed_characters() {
        let out = clean("<p>[Hook]\nYeah, yeah! (Oh?) <i>ok</i>.</p>");
        assert!(!out.contains(|c: char| ",.?!()\n<>".contains(c)));
        assert!(!out.contains("  "));
        assert_eq!(out, "yeah yeah oh ok");
    }
}
