//! Text normalization and keyword extraction

use std::collections::HashSet;

/// Common English stop words plus domain filler words that carry no signal
/// in resumes or job descriptions.
const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from",
    "had", "has", "have", "he", "her", "his", "how", "in", "is", "it", "its",
    "of", "on", "or", "our", "she", "that", "the", "their", "them", "they",
    "this", "to", "was", "we", "were", "what", "when", "where", "which",
    "who", "why", "will", "with", "you", "your",
    // Domain filler words common to nearly every posting
    "experience", "team", "company", "role", "position", "job", "opportunity",
];

/// Lower-case, strip punctuation, and collapse whitespace.
///
/// Every character outside `[a-z0-9_\- ]` becomes a space, then runs of
/// whitespace collapse to a single space. Idempotent by construction.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped: String = lowered
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '_' | '-' => c,
            _ => ' ',
        })
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Stop-word-aware tokenizer producing single keywords and two-word phrases.
pub struct TextProcessor {
    stop_words: HashSet<&'static str>,
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor {
    pub fn new() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
        }
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Extract the keyword set of a free-text blob.
    ///
    /// Single tokens longer than two characters are kept unless they are
    /// stop words. Adjacent token pairs where neither side is a stop word
    /// are additionally kept as a two-word phrase, regardless of the
    /// single-token length filter.
    pub fn extract_words_and_phrases(&self, text: &str) -> HashSet<String> {
        let normalized = normalize(text);
        let tokens: Vec<&str> = normalized.split_whitespace().collect();
        let mut keywords = HashSet::new();

        for token in &tokens {
            if token.len() > 2 && !self.is_stop_word(token) {
                keywords.insert((*token).to_string());
            }
        }

        for pair in tokens.windows(2) {
            if !self.is_stop_word(pair[0]) && !self.is_stop_word(pair[1]) {
                keywords.insert(format!("{} {}", pair[0], pair[1]));
            }
        }

        keywords
    }
}
