use anyhow::{Context, Result};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};
use unicode_normalization::UnicodeNormalization;

use crate::models::Tag;

/// Normalize one word the same way at lexicon-build time and at lookup time:
/// NFC, then lowercase. Token boundaries (non-alphanumeric) are handled by the
/// tokenizer; this only canonicalizes the word itself.
pub fn normalize_word(word: &str) -> String {
    word.nfc().collect::<String>().to_lowercase()
}

/// Static word → tag-set association table, queried read-only per token.
/// A word may carry zero, one, or several tags; tags are not mutually
/// exclusive (e.g. a word tagged both `fear` and `negative`).
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, BTreeSet<Tag>>,
}

impl Lexicon {
    /// Load from an NRC Emotion Lexicon file: one `word<TAB>tag<TAB>0|1`
    /// triple per line. Lines with association 0, blank lines, and unknown
    /// tag names are skipped.
    pub fn from_tsv_path<P: AsRef<Path>>(path: P) -> Result<Lexicon> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Reading lexicon file {}", path.display()))?;
        let lex = Self::from_tsv(&raw);
        info!(
            "Lexicon loaded - path={}, words={}",
            path.display(),
            lex.len()
        );
        Ok(lex)
    }

    pub fn from_tsv(raw: &str) -> Lexicon {
        let mut entries: HashMap<String, BTreeSet<Tag>> = HashMap::new();
        let mut skipped_tags = 0usize;

        for line in raw.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let mut parts = line.split('\t');
            let (word, tag, assoc) = match (parts.next(), parts.next(), parts.next()) {
                (Some(w), Some(t), Some(a)) => (w, t, a),
                _ => continue,
            };
            if assoc.trim() != "1" {
                continue;
            }
            match Tag::from_str(tag.trim()) {
                Ok(tag) => {
                    entries.entry(normalize_word(word)).or_default().insert(tag);
                }
                Err(()) => skipped_tags += 1,
            }
        }

        if skipped_tags > 0 {
            debug!("Lexicon parse - skipped {} unknown tag rows", skipped_tags);
        }
        Lexicon { entries }
    }

    /// Build directly from (word, tag) pairs; word keys get the same
    /// normalization as TSV input.
    pub fn from_entries<'a, I>(pairs: I) -> Lexicon
    where
        I: IntoIterator<Item = (&'a str, Tag)>,
    {
        let mut entries: HashMap<String, BTreeSet<Tag>> = HashMap::new();
        for (word, tag) in pairs {
            entries.entry(normalize_word(word)).or_default().insert(tag);
        }
        Lexicon { entries }
    }

    /// Tag set for an already-normalized token; empty when the word carries
    /// no association.
    pub fn lookup(&self, word: &str) -> Option<&BTreeSet<Tag>> {
        self.entries.get(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Emotion;

    #[test]
    fn test_tsv_parse_keeps_only_positive_associations() {
        let lex = Lexicon::from_tsv(
            "abandon\tfear\t1\n\
             abandon\tjoy\t0\n\
             abandon\tnegative\t1\n\
             abandon\tsadness\t1\n",
        );
        let tags = lex.lookup("abandon").unwrap();
        assert_eq!(tags.len(), 3);
        assert!(tags.contains(&Tag::Emotion(Emotion::Fear)));
        assert!(tags.contains(&Tag::Emotion(Emotion::Sadness)));
        assert!(tags.contains(&Tag::Negative));
        assert!(!tags.contains(&Tag::Emotion(Emotion::Joy)));
    }

    #[test]
    fn test_unknown_tags_and_garbage_lines_are_skipped() {
        let lex = Lexicon::from_tsv(
            "cheer\tjoy\t1\n\
             cheer\tanticip\t1\n\
             not-a-triple\n\
             \n",
        );
        assert_eq!(lex.len(), 1);
        assert_eq!(lex.lookup("cheer").unwrap().len(), 1);
    }

    #[test]
    fn test_lookup_is_case_insensitive_via_shared_normalization() {
        let lex = Lexicon::from_tsv("Cheer\tjoy\t1\n");
        assert!(lex.lookup(&normalize_word("CHEER")).is_some());
        assert!(lex.lookup(&normalize_word("cheer")).is_some());
        // raw uppercase bypasses normalization and must miss
        assert!(lex.lookup("CHEER").is_none());
    }
}
