//! Fingerprints and the exact-match pattern index.

use core::cmp::Ordering;
use core::fmt;

use crate::error::{CorpusError, TableError};
use crate::fold::TokenFolder;
use crate::tokenizer::{Tokenizer, TokenizerFlags};

/// Tokens contributing to a fingerprint. Statements longer than this are
/// judged on their first tokens only.
pub const MAX_FINGERPRINT_TOKENS: usize = 5;

/// Category tags of the leading tokens of a statement, concatenated.
///
/// This is the unit of pattern matching: two statements with the same
/// fingerprint have the same lexical shape regardless of the literal
/// values, identifiers, and spacing in them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Fingerprint {
    tags: [u8; MAX_FINGERPRINT_TOKENS],
    len: u8,
}

impl Fingerprint {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Append a tag; returns `false` once the fingerprint is full.
    pub(crate) fn push(&mut self, tag: u8) -> bool {
        let len = self.len as usize;
        if len == MAX_FINGERPRINT_TOKENS {
            return false;
        }
        self.tags[len] = tag;
        self.len += 1;
        true
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.tags[..self.len as usize]
    }

    /// The fingerprint as text. Tags are ASCII by construction.
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(self.as_bytes()).unwrap_or("")
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fingerprint of `input`: the tags of its first
/// [`MAX_FINGERPRINT_TOKENS`] folded tokens.
pub fn fingerprint_of(
    input: &[u8],
    flags: TokenizerFlags,
) -> Result<Fingerprint, TableError> {
    let tokenizer = Tokenizer::new(input, flags)?;
    let mut folder = TokenFolder::new(tokenizer);
    let mut fingerprint = Fingerprint::empty();
    while let Some(token) = folder.next_token() {
        if !fingerprint.push(token.tag()) {
            break;
        }
    }
    Ok(fingerprint)
}

/// Immutable, sorted set of fingerprint strings with exact-match lookup.
///
/// Sortedness (strict ascending, byte-wise) is the load-bearing invariant
/// of [`contains`](Self::contains); it is re-established on every
/// [`build`](Self::build), never assumed from input order. To update a
/// corpus at runtime, build a new index and swap the shared reference;
/// never mutate one in place while readers exist.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FingerprintIndex {
    entries: Vec<Box<str>>,
}

impl FingerprintIndex {
    /// Index containing nothing; answers `false` to every query.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build an index from fingerprint strings.
    ///
    /// Input order is irrelevant. Duplicate entries are rejected rather
    /// than silently merged, so repeated builds of one corpus source are
    /// bitwise identical or fail loudly; the same goes for empty strings,
    /// which are always a corpus-file defect.
    pub fn build<I, S>(fingerprints: I) -> Result<Self, CorpusError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<Box<str>> = Vec::new();
        for fingerprint in fingerprints {
            let fingerprint = fingerprint.as_ref();
            if fingerprint.is_empty() {
                return Err(CorpusError::EmptyFingerprint);
            }
            entries.push(Box::from(fingerprint));
        }
        entries.sort_unstable();
        for pair in entries.windows(2) {
            if pair[0] == pair[1] {
                return Err(CorpusError::DuplicateFingerprint {
                    fingerprint: pair[0].as_ref().to_owned(),
                });
            }
        }
        Ok(Self { entries })
    }

    /// Exact-match membership test, O(log n).
    ///
    /// Binary search over the sorted entries with byte-wise comparison; no
    /// prefix or partial matching of any kind.
    pub fn contains(&self, candidate: &str) -> bool {
        let key = candidate.as_bytes();
        let mut left: isize = 0;
        let mut right: isize = self.entries.len() as isize - 1;
        while left <= right {
            let pos = ((left + right) / 2) as usize;
            match self.entries[pos].as_bytes().cmp(key) {
                Ordering::Equal => return true,
                Ordering::Less => left = pos as isize + 1,
                Ordering::Greater => right = pos as isize - 1,
            }
        }
        false
    }

    /// [`contains`](Self::contains) for a computed [`Fingerprint`].
    pub fn contains_fingerprint(&self, fingerprint: &Fingerprint) -> bool {
        self.contains(fingerprint.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.as_ref())
    }
}
