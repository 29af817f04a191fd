use std::collections::BTreeMap;

use crate::lexicon::{normalize_word, Lexicon};
use crate::models::{zero_emotions, Emotion, HeadlineScore, Tag};

/// Split text into normalized word tokens: maximal alphanumeric runs, each
/// NFC-normalized and lowercased with the same `normalize_word` the lexicon
/// builder uses.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(normalize_word)
        .collect()
}

/// Score one text against the lexicon.
///
/// Every tag a word carries increments that tag's raw count, so one word can
/// bump several emotions and a valence tag at once. Sentiment is the raw
/// positive-minus-negative delta, left unnormalized. The emotion vector is
/// normalized by the total count over the eight emotion categories only
/// (valence excluded); an emotion-free text yields the all-zero vector rather
/// than NaN. Pure function: no errors, no hidden state.
pub fn score_text(lexicon: &Lexicon, text: &str) -> HeadlineScore {
    let mut raw: BTreeMap<Tag, u32> = BTreeMap::new();
    for token in tokenize(text) {
        if let Some(tags) = lexicon.lookup(&token) {
            for &tag in tags {
                *raw.entry(tag).or_insert(0) += 1;
            }
        }
    }

    let positive = raw.get(&Tag::Positive).copied().unwrap_or(0) as i64;
    let negative = raw.get(&Tag::Negative).copied().unwrap_or(0) as i64;
    let sentiment = positive - negative;

    let total: u32 = Emotion::ALL
        .iter()
        .map(|&e| raw.get(&Tag::Emotion(e)).copied().unwrap_or(0))
        .sum();

    let mut emotions = zero_emotions();
    if total > 0 {
        for &e in Emotion::ALL.iter() {
            let count = raw.get(&Tag::Emotion(e)).copied().unwrap_or(0);
            emotions.insert(e, count as f64 / total as f64);
        }
    }

    HeadlineScore { sentiment, emotions }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_lexicon() -> Lexicon {
        Lexicon::from_entries([
            ("happy", Tag::Emotion(Emotion::Joy)),
            ("happy", Tag::Positive),
            ("joyful", Tag::Emotion(Emotion::Joy)),
            ("joyful", Tag::Positive),
            ("scared", Tag::Emotion(Emotion::Fear)),
            ("scared", Tag::Negative),
            ("outrage", Tag::Emotion(Emotion::Anger)),
            ("outrage", Tag::Emotion(Emotion::Disgust)),
            ("outrage", Tag::Negative),
        ])
    }

    #[test]
    fn test_joy_fear_example() {
        let lex = sample_lexicon();
        let score = score_text(&lex, "I am happy and joyful but also scared");

        assert_eq!(score.emotions.len(), 8);
        assert!((score.emotions[&Emotion::Joy] - 2.0 / 3.0).abs() < 1e-9);
        assert!((score.emotions[&Emotion::Fear] - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!(score.emotions[&Emotion::Sadness], 0.0);
        // happy + joyful positive, scared negative
        assert_eq!(score.sentiment, 1);

        let sum: f64 = score.emotions.values().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_and_emotion_free_text_yield_zero_vector() {
        let lex = sample_lexicon();
        for text in ["", "the quick brown fox", "   \t\n"] {
            let score = score_text(&lex, text);
            assert_eq!(score.sentiment, 0);
            assert_eq!(score.emotions.len(), 8);
            assert!(score.emotions.values().all(|&v| v == 0.0));
        }
    }

    #[test]
    fn test_multi_tag_word_increments_all_its_categories() {
        let lex = sample_lexicon();
        let score = score_text(&lex, "outrage");
        assert!((score.emotions[&Emotion::Anger] - 0.5).abs() < 1e-9);
        assert!((score.emotions[&Emotion::Disgust] - 0.5).abs() < 1e-9);
        assert_eq!(score.sentiment, -1);
    }

    #[test]
    fn test_valence_only_words_do_not_enter_the_emotion_total() {
        let lex = Lexicon::from_entries([("good", Tag::Positive), ("sad", Tag::Emotion(Emotion::Sadness))]);
        let score = score_text(&lex, "good good sad");
        // total emotion words is 1 (sad); the two positives feed sentiment only
        assert_eq!(score.emotions[&Emotion::Sadness], 1.0);
        assert_eq!(score.sentiment, 2);
    }

    #[test]
    fn test_tokenization_strips_punctuation_and_case() {
        let lex = sample_lexicon();
        assert_eq!(tokenize("Happy, SCARED... joy-ful!"), ["happy", "scared", "joy", "ful"]);
        let score = score_text(&lex, "HAPPY!!! (scared?)");
        assert!((score.emotions[&Emotion::Joy] - 0.5).abs() < 1e-9);
        assert!((score.emotions[&Emotion::Fear] - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_scoring_is_deterministic_and_stateless() {
        let lex = sample_lexicon();
        let first = score_text(&lex, "happy scared outrage");
        for _ in 0..10 {
            assert_eq!(score_text(&lex, "happy scared outrage"), first);
        }
    }

    #[test]
    fn test_vector_entries_stay_in_unit_interval_and_sum_to_one() {
        let lex = sample_lexicon();
        let score = score_text(&lex, "happy happy joyful scared outrage outrage");
        for &v in score.emotions.values() {
            assert!((0.0..=1.0).contains(&v));
        }
        let sum: f64 = score.emotions.values().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }
}
