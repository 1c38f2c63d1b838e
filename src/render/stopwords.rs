//! 多语言停用词（英 / 西 / 法 / 德 / 葡 / 意，均为音译后的小写形式）

use phf::phf_set;

/// 词频统计时忽略的词
pub static STOPWORDS: phf::Set<&'static str> = phf_set! {
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "can't", "cannot", "could", "couldn't", "did", "didn't", "do",
    "does", "doesn't", "doing", "don't", "down", "during", "each", "few", "for", "from",
    "further", "get", "got", "had", "hadn't", "has", "hasn't", "have", "haven't", "having",
    "he", "he'd", "he'll", "he's", "her", "here", "here's", "hers", "herself", "him",
    "himself", "his", "how", "how's", "however", "i", "i'd", "i'll", "i'm", "i've", "if", "in",
    "into", "is", "isn't", "it", "it's", "its", "itself", "just", "let's", "like", "me",
    "more", "most", "mustn't", "my", "myself", "no", "nor", "not", "of", "off", "on", "once",
    "only", "or", "other", "ought", "our", "ours", "ourselves", "out", "over", "own", "same",
    "shan't", "she", "she'd", "she'll", "she's", "should", "shouldn't", "so", "some", "such",
    "than", "that", "that's", "the", "their", "theirs", "them", "themselves", "then", "there",
    "there's", "these", "they", "they'd", "they'll", "they're", "they've", "this", "those",
    "through", "to", "too", "under", "until", "up", "very", "was", "wasn't", "we", "we'd",
    "we'll", "we're", "we've", "were", "weren't", "what", "what's", "when", "when's", "where",
    "where's", "which", "while", "who", "who's", "whom", "why", "why's", "with", "won't",
    "would", "wouldn't", "you", "you'd", "you'll", "you're", "you've", "your", "yours",
    "yourself", "yourselves", "yeah", "oh", "ooh", "uh", "na", "la", "ya", "gonna", "wanna",
    "gotta", "ain't", "ay", "hey", "el", "los", "las", "un", "una", "unos", "unas", "y", "o",
    "pero", "de", "del", "al", "en", "con", "por", "para", "sin", "sobre", "que", "se", "lo",
    "le", "les", "te", "nos", "mi", "tu", "su", "sus", "es", "son", "fue", "ser", "estar",
    "esta", "este", "esto", "eso", "como", "mas", "muy", "si", "yo", "ella", "ellos",
    "nosotros", "une", "des", "et", "ou", "mais", "du", "au", "aux", "dans", "avec", "pour",
    "par", "sur", "qui", "ne", "pas", "je", "il", "elle", "nous", "vous", "ils", "elles",
    "mon", "ma", "mes", "ton", "ta", "tes", "sa", "ses", "est", "sont", "c'est", "ce", "cette",
    "ces", "der", "die", "das", "ein", "eine", "einer", "und", "oder", "aber", "von", "zu",
    "mit", "fur", "auf", "ist", "sind", "ich", "er", "sie", "wir", "ihr", "nicht", "nur",
    "auch", "noch", "wie", "dass", "den", "dem", "im", "os", "um", "uma", "uns", "umas", "e",
    "da", "dos", "nas", "em", "com", "nao", "eu", "ele", "ela", "voce", "meu", "minha", "gli",
    "ed", "di", "non", "che", "chi", "sono", "mio", "mia", "tuo", "tua", "suo", "sua",
};

/// 是否为停用词（调用方负责先转小写）
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_several_languages() {
        for w in ["the", "don't", "que", "nous", "und", "nao", "che"] {
            assert!(is_stopword(w), "{w}");
        }
        assert!(!is_stopword("broken"));
    }
}
