//! Text metrics: word and sentence counts, Flesch Reading Ease, SMOG index,
//! and statistical language detection.
//!
//! Metrics are a pure function of the text. They are recomputed for every
//! input and never cached or reused across different texts.

use serde::Serialize;
use tracing::debug;

/// Metrics for a single text blob.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextMetrics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub flesch_score: f64,
    pub smog_score: f64,
    /// ISO 639-1 code where one exists, otherwise the 639-3 code,
    /// or "und" when detection has no signal.
    pub language: String,
}

/// Compute all metrics for a text.
pub fn text_metrics(text: &str) -> TextMetrics {
    let word_count = text.split_whitespace().count();
    let sentence_count = count_sentences(text);
    let syllable_count: usize = text.split_whitespace().map(count_syllables).sum();
    let polysyllable_count = text
        .split_whitespace()
        .filter(|word| count_syllables(word) >= 3)
        .count();

    let flesch_score = flesch_reading_ease(word_count, sentence_count, syllable_count);
    let smog_score = smog_index(sentence_count, polysyllable_count);
    let language = detect_language(text);

    debug!(
        "Metrics: {} words, {} sentences, language {}",
        word_count, sentence_count, language
    );

    TextMetrics {
        word_count,
        sentence_count,
        flesch_score,
        smog_score,
        language,
    }
}

/// Percentage reduction in word count from original to summary.
/// Caller guards against a zero original count.
pub fn compression_ratio(original_words: usize, summary_words: usize) -> f64 {
    (1.0 - summary_words as f64 / original_words as f64) * 100.0
}

/// Sentence-boundary segmentation on `.`, `!`, and `?` runs.
/// Non-empty text always counts as at least one sentence.
fn count_sentences(text: &str) -> usize {
    if text.trim().is_empty() {
        return 0;
    }

    let count = text
        .split(['.', '!', '?'])
        .filter(|segment| segment.chars().any(|c| c.is_alphanumeric()))
        .count();

    count.max(1)
}

/// Heuristic syllable count: vowel groups, minus a silent trailing "e",
/// with a floor of one per word.
fn count_syllables(word: &str) -> usize {
    let letters: String = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .collect::<String>()
        .to_lowercase();

    if letters.is_empty() {
        return 0;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');

    let mut count = 0;
    let mut previous_was_vowel = false;
    for c in letters.chars() {
        let vowel = is_vowel(c);
        if vowel && !previous_was_vowel {
            count += 1;
        }
        previous_was_vowel = vowel;
    }

    if letters.ends_with('e') && !letters.ends_with("le") && count > 1 {
        count -= 1;
    }

    count.max(1)
}

/// Flesch Reading Ease. Returns 0.0 on degenerate input rather than
/// dividing by zero.
fn flesch_reading_ease(words: usize, sentences: usize, syllables: usize) -> f64 {
    if words == 0 || sentences == 0 {
        return 0.0;
    }

    206.835
        - 1.015 * (words as f64 / sentences as f64)
        - 84.6 * (syllables as f64 / words as f64)
}

/// SMOG index. Returns 0.0 on degenerate input rather than dividing by zero.
fn smog_index(sentences: usize, polysyllables: usize) -> f64 {
    if sentences == 0 {
        return 0.0;
    }

    1.0430 * (polysyllables as f64 * 30.0 / sentences as f64).sqrt() + 3.1291
}

/// Best-guess language code via statistical detection.
fn detect_language(text: &str) -> String {
    match whatlang::detect(text) {
        Some(info) => {
            let code_639_3 = info.lang().code();
            isolang::Language::from_639_3(code_639_3)
                .and_then(|lang| lang.to_639_1())
                .unwrap_or(code_639_3)
                .to_string()
        }
        None => "und".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENGLISH: &str = "The quick brown fox jumps over the lazy dog. \
        It was a bright cold day in April, and the clocks were striking thirteen. \
        Nobody expected anything unusual to happen that afternoon!";

    #[test]
    fn test_word_count_matches_whitespace_split() {
        let text = "one two  three\nfour\tfive";
        let metrics = text_metrics(text);
        assert_eq!(metrics.word_count, text.split_whitespace().count());
        assert_eq!(metrics.word_count, 5);
    }

    #[test]
    fn test_sentence_count_at_least_one_for_non_empty() {
        assert_eq!(text_metrics("no terminal punctuation here").sentence_count, 1);
        assert_eq!(text_metrics(ENGLISH).sentence_count, 3);
    }

    #[test]
    fn test_metrics_are_idempotent() {
        let first = text_metrics(ENGLISH);
        let second = text_metrics(ENGLISH);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_text_does_not_panic() {
        let metrics = text_metrics("");
        assert_eq!(metrics.word_count, 0);
        assert_eq!(metrics.sentence_count, 0);
        assert_eq!(metrics.flesch_score, 0.0);
        assert_eq!(metrics.smog_score, 0.0);
        assert_eq!(metrics.language, "und");
    }

    #[test]
    fn test_detects_english_as_en() {
        assert_eq!(text_metrics(ENGLISH).language, "en");
    }

    #[test]
    fn test_detects_spanish_as_es() {
        let text = "El rápido zorro marrón salta sobre el perro perezoso. \
            Era un día frío y luminoso de abril y los relojes daban las trece.";
        assert_eq!(text_metrics(text).language, "es");
    }

    #[test]
    fn test_syllable_counts() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("hello"), 2);
        assert_eq!(count_syllables("beautiful"), 3);
        assert_eq!(count_syllables("the"), 1);
    }

    #[test]
    fn test_flesch_simple_text_reads_easier_than_dense_text() {
        let simple = "The cat sat. The dog ran. We had fun.";
        let dense = "Institutional heterogeneity necessitates comprehensive \
            organizational restructuring throughout multinational conglomerates.";
        assert!(text_metrics(simple).flesch_score > text_metrics(dense).flesch_score);
    }

    #[test]
    fn test_compression_ratio_positive_for_shorter_summary() {
        assert!(compression_ratio(100, 40) > 0.0);
        assert_eq!(compression_ratio(100, 100), 0.0);
        assert_eq!(compression_ratio(200, 50), 75.0);
    }
}
