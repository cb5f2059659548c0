//! Tokenisation and stop-word filtering.
//!
//! Splits text at punctuation and whitespace and keeps only purely
//! alphanumeric tokens, so "dragon's" yields "dragon" while "e-mail" is
//! dropped.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Standard English stop-word list
const STOPWORDS_EN: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

static STOPWORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOPWORDS_EN.iter().copied().collect());

/// Check if a lower-cased word is an English stop word
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}

/// Lower-case and split text into word-like units, preserving order.
///
/// Splits on every non-alphanumeric character except `-`, so clitics and
/// joining punctuation break words apart ("dragon's" gives "dragon", "s").
/// Hyphenated words stay whole and are left for callers to filter.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '-')
        .map(|chunk| chunk.trim_matches('-'))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Tokens that are alphanumeric, longer than `min_len - 1` characters and not stop words.
pub fn content_tokens(text: &str, min_len: usize) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|token| {
            token.chars().all(char::is_alphanumeric)
                && token.chars().count() >= min_len
                && !is_stopword(token)
        })
        .collect()
}
