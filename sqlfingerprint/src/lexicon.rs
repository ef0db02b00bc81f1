//! Keyword and phrase classification tables.
//!
//! Lookups canonicalize spellings to uppercase and run over sorted tables,
//! the same shape of binary search the fingerprint index uses. The tables
//! are validated and sorted at construction; a malformed entry refuses to
//! build rather than being dropped, since a silently missing classification
//! for a dangerous keyword would be a detection gap.

use std::sync::OnceLock;

use crate::data;
use crate::error::TableError;
use crate::tokens::TokenCategory;

static BUILTIN: OnceLock<Result<Lexicon, TableError>> = OnceLock::new();

/// Immutable word and phrase classification tables.
///
/// Construct once (usually via [`Lexicon::builtin`]) and share freely:
/// queries are read-only and lock-free.
#[derive(Debug, Clone)]
pub struct Lexicon {
    /// Single-word entries, sorted by spelling.
    words: Vec<(Box<str>, TokenCategory)>,
    /// Phrase entries keyed by space-joined spelling, sorted.
    phrases: Vec<(Box<str>, TokenCategory)>,
    /// First words of all phrases, sorted; drives the folding lookahead.
    phrase_starts: Vec<Box<str>>,
}

impl Lexicon {
    /// The table compiled into this crate.
    ///
    /// Built on first use; the outcome is cached so every caller observes
    /// the same table (or the same construction error).
    pub fn builtin() -> Result<&'static Lexicon, TableError> {
        BUILTIN
            .get_or_init(|| Lexicon::from_entries(data::KEYWORDS, data::PHRASES))
            .as_ref()
            .map_err(|err| err.clone())
    }

    /// Build a lexicon from raw `(spelling, tag)` entries.
    ///
    /// Spellings must already be canonical uppercase; entries are sorted
    /// here, so input order never matters. Any malformed entry (empty or
    /// non-canonical spelling, unusable tag, duplicate spelling, phrase
    /// with fewer than two words) fails the whole build.
    pub fn from_entries(
        words: &[(&str, u8)],
        phrases: &[(&str, u8)],
    ) -> Result<Self, TableError> {
        let words = build_table(words, false)?;
        let phrases = build_table(phrases, true)?;

        let mut phrase_starts: Vec<Box<str>> = phrases
            .iter()
            .filter_map(|(spelling, _)| spelling.split(' ').next())
            .map(Box::from)
            .collect();
        phrase_starts.sort_unstable();
        phrase_starts.dedup();

        Ok(Self {
            words,
            phrases,
            phrase_starts,
        })
    }

    /// Classify a single token spelling, case-insensitively.
    ///
    /// `None` means the spelling is not in the table; the caller decides
    /// the default category (the tokenizer uses bareword).
    pub fn classify(&self, token: &str) -> Option<TokenCategory> {
        lookup(&self.words, &token.to_ascii_uppercase())
    }

    /// Classify a two-token sequence as a phrase.
    ///
    /// The spellings are joined with a single space and looked up in the
    /// phrase table. A hit means both tokens were consumed and the phrase
    /// tag overrides whatever `first` would classify as on its own; callers
    /// must try this before [`classify`](Self::classify).
    pub fn classify_pair(&self, first: &str, second: &str) -> Option<TokenCategory> {
        let mut joined = String::with_capacity(first.len() + second.len() + 1);
        joined.push_str(first);
        joined.push(' ');
        joined.push_str(second);
        joined.make_ascii_uppercase();
        lookup(&self.phrases, &joined)
    }

    /// Whether `word` begins at least one phrase entry.
    pub fn is_phrase_start(&self, word: &str) -> bool {
        let key = word.to_ascii_uppercase();
        self.phrase_starts
            .binary_search_by(|s| s.as_ref().cmp(key.as_str()))
            .is_ok()
    }

    /// Sorted single-word entries.
    pub fn words(&self) -> impl Iterator<Item = (&str, TokenCategory)> {
        self.words.iter().map(|(s, c)| (s.as_ref(), *c))
    }

    /// Sorted phrase entries.
    pub fn phrases(&self) -> impl Iterator<Item = (&str, TokenCategory)> {
        self.phrases.iter().map(|(s, c)| (s.as_ref(), *c))
    }
}

fn lookup(table: &[(Box<str>, TokenCategory)], key: &str) -> Option<TokenCategory> {
    table
        .binary_search_by(|(spelling, _)| spelling.as_ref().cmp(key))
        .ok()
        .map(|i| table[i].1)
}

/// Bytes a canonical spelling may consist of; mirrors the tokenizer's word
/// character set.
fn is_spelling_byte(b: u8) -> bool {
    b.is_ascii_uppercase() || b.is_ascii_digit() || matches!(b, b'_' | b'.' | b'$')
}

fn build_table(
    entries: &[(&str, u8)],
    phrase: bool,
) -> Result<Vec<(Box<str>, TokenCategory)>, TableError> {
    let mut table = Vec::with_capacity(entries.len());
    for &(spelling, tag) in entries {
        if spelling.is_empty() {
            return Err(TableError::EmptySpelling);
        }
        let words = spelling.split(' ').count();
        if phrase && words < 2 {
            return Err(TableError::NotAPhrase {
                spelling: spelling.to_owned(),
            });
        }
        let canonical = spelling
            .split(' ')
            .all(|w| !w.is_empty() && w.bytes().all(is_spelling_byte));
        if !canonical || (!phrase && words != 1) {
            return Err(TableError::NotCanonical {
                spelling: spelling.to_owned(),
            });
        }
        let category = TokenCategory::from_tag(tag)
            .filter(|_| TokenCategory::is_lexicon_tag(tag))
            .ok_or_else(|| TableError::UnknownTag {
                spelling: spelling.to_owned(),
                tag: tag as char,
            })?;
        table.push((Box::from(spelling), category));
    }

    // Sortedness is (re)established here on every build; the lookups above
    // depend on it.
    table.sort_unstable_by(|(a, _): &(Box<str>, TokenCategory), (b, _)| a.cmp(b));
    for pair in table.windows(2) {
        if pair[0].0 == pair[1].0 {
            return Err(TableError::DuplicateSpelling {
                spelling: pair[0].0.as_ref().to_owned(),
            });
        }
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_builds() -> Result<(), TableError> {
        let lexicon = Lexicon::builtin()?;
        assert!(lexicon.words().count() > 400);
        assert!(lexicon.phrases().count() > 30);
        Ok(())
    }

    #[test]
    fn every_entry_round_trips() -> Result<(), TableError> {
        let lexicon = Lexicon::builtin()?;
        for &(spelling, tag) in data::KEYWORDS {
            assert_eq!(
                lexicon.classify(spelling),
                TokenCategory::from_tag(tag),
                "keyword {spelling}"
            );
            // any letter case resolves to the same entry
            assert_eq!(
                lexicon.classify(&spelling.to_ascii_lowercase()),
                TokenCategory::from_tag(tag),
                "keyword {spelling} (lowercase)"
            );
        }
        for &(spelling, tag) in data::PHRASES {
            if let Some((first, rest)) = spelling.split_once(' ') {
                assert_eq!(
                    lexicon.classify_pair(first, rest),
                    TokenCategory::from_tag(tag),
                    "phrase {spelling}"
                );
            }
        }
        Ok(())
    }

    #[test]
    fn classification_is_case_insensitive() -> Result<(), TableError> {
        let lexicon = Lexicon::builtin()?;
        assert_eq!(lexicon.classify("select"), Some(TokenCategory::Keyword));
        assert_eq!(lexicon.classify("SeLeCt"), Some(TokenCategory::Keyword));
        assert_eq!(lexicon.classify("sleep"), Some(TokenCategory::Function));
        assert_eq!(lexicon.classify("null"), Some(TokenCategory::Literal));
        Ok(())
    }

    #[test]
    fn phrase_overrides_first_word() -> Result<(), TableError> {
        let lexicon = Lexicon::builtin()?;
        // GROUP alone is a bareword, GROUP BY is a statement boundary
        assert_eq!(lexicon.classify("GROUP"), Some(TokenCategory::Bareword));
        assert_eq!(
            lexicon.classify_pair("group", "by"),
            Some(TokenCategory::Group)
        );
        // UNION ALL stays in the union class but consumes both tokens
        assert_eq!(lexicon.classify("UNION"), Some(TokenCategory::Union));
        assert_eq!(
            lexicon.classify_pair("UNION", "ALL"),
            Some(TokenCategory::Union)
        );
        Ok(())
    }

    #[test]
    fn unknown_spellings_are_absent() -> Result<(), TableError> {
        let lexicon = Lexicon::builtin()?;
        assert_eq!(lexicon.classify("USERNAME"), None);
        assert_eq!(lexicon.classify(""), None);
        assert_eq!(lexicon.classify_pair("FOO", "BAR"), None);
        Ok(())
    }

    #[test]
    fn phrase_starts_cover_first_words() -> Result<(), TableError> {
        let lexicon = Lexicon::builtin()?;
        assert!(lexicon.is_phrase_start("UNION"));
        assert!(lexicon.is_phrase_start("not"));
        assert!(lexicon.is_phrase_start("NATURAL"));
        assert!(!lexicon.is_phrase_start("SELECTED"));
        assert!(!lexicon.is_phrase_start("FROM"));
        Ok(())
    }

    #[test]
    fn malformed_entries_refuse_to_build() {
        // missing tag
        assert!(matches!(
            Lexicon::from_entries(&[("FOO", 0)], &[]),
            Err(TableError::UnknownTag { tag: '\0', .. })
        ));
        // tag outside the classifier alphabet
        assert!(matches!(
            Lexicon::from_entries(&[("FOO", b's')], &[]),
            Err(TableError::UnknownTag { tag: 's', .. })
        ));
        // duplicate spelling
        assert!(matches!(
            Lexicon::from_entries(&[("FOO", b'k'), ("FOO", b'f')], &[]),
            Err(TableError::DuplicateSpelling { spelling }) if spelling == "FOO"
        ));
        // not canonical uppercase
        assert!(matches!(
            Lexicon::from_entries(&[("foo", b'k')], &[]),
            Err(TableError::NotCanonical { .. })
        ));
        // single word in the phrase table
        assert!(matches!(
            Lexicon::from_entries(&[], &[("FOO", b'k')]),
            Err(TableError::NotAPhrase { .. })
        ));
        // empty spelling
        assert!(matches!(
            Lexicon::from_entries(&[("", b'k')], &[]),
            Err(TableError::EmptySpelling)
        ));
        // word entry with an embedded space
        assert!(matches!(
            Lexicon::from_entries(&[("A B", b'k')], &[]),
            Err(TableError::NotCanonical { .. })
        ));
    }
}
