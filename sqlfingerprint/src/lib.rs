//! Lexical classification and fingerprint matching for SQL injection
//! detection.
//!
//! The crate turns raw input bytes into a short *fingerprint* -- the
//! syntactic category tags of the statement's leading tokens -- and decides
//! whether that fingerprint matches a known-malicious pattern via exact
//! lookup over a sorted, immutable index.
//!
//! ## API Guide
//!
//! Most callers want the high-level entry points:
//!
//! - [`scan`] - test an input in every quote context against the built-in
//!   pattern corpus
//! - [`fingerprint_of`] - compute the fingerprint of an input in one
//!   context
//!
//! The building blocks are public for engines that drive their own
//! tokenization or carry their own corpus:
//!
//! - [`ByteClass`] - byte-level character classes (tokenizer dispatch)
//! - [`Lexicon`] - keyword and phrase classification tables
//! - [`OperatorTable`] - longest-match operator recognition
//! - [`Tokenizer`] / [`TokenFolder`] - raw token stream and phrase folding
//! - [`FingerprintIndex`] - sorted exact-match pattern set
//! - [`TableExport`] - the tables in serialized interchange form
//!
//! All tables are built once, behind the scenes, on first use; afterwards
//! every query path is read-only and safe to hit from any number of
//! threads concurrently. To run against an updated corpus, build a fresh
//! [`FingerprintIndex`] and swap the reference your readers use.
//!
//! ## Examples
//!
//! ```
//! use sqlfingerprint::{fingerprint_of, scan, TokenizerFlags};
//!
//! fn main() -> Result<(), sqlfingerprint::Error> {
//!     // classic string-breakout payload, evaluated inside single quotes
//!     let fp = fingerprint_of(b"1' OR '1'='1", TokenizerFlags::QUOTE_SINGLE)?;
//!     assert_eq!(fp.as_str(), "s&sos");
//!
//!     // scan() tries every quote context
//!     assert!(scan(b"1' OR '1'='1")?.is_match());
//!     assert!(!scan(b"hello world")?.is_match());
//!     Ok(())
//! }
//! ```

use core::fmt;

mod charmap;
mod corpus;
mod data;
mod error;
mod export;
mod fingerprint;
mod fold;
mod lexicon;
mod operators;
mod tokenizer;
mod tokens;

#[cfg(test)]
mod tests;

pub use charmap::ByteClass;
pub use corpus::builtin_index;
pub use error::{CorpusError, Error, TableError};
pub use export::{export_tables, TableExport};
pub use fingerprint::{
    fingerprint_of, Fingerprint, FingerprintIndex, MAX_FINGERPRINT_TOKENS,
};
pub use fold::TokenFolder;
pub use lexicon::Lexicon;
pub use operators::OperatorTable;
pub use tokenizer::{Token, Tokenizer, TokenizerFlags, TOKEN_TEXT_MAX};
pub use tokens::TokenCategory;

/// Outcome of scanning an input against the built-in corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanResult {
    /// No context produced a fingerprint in the corpus.
    Clean,
    /// Some quote context produced a known-malicious fingerprint.
    Match { fingerprint: Fingerprint },
}

impl ScanResult {
    pub fn is_match(&self) -> bool {
        matches!(self, ScanResult::Match { .. })
    }

    pub fn fingerprint(&self) -> Option<&Fingerprint> {
        match self {
            ScanResult::Match { fingerprint } => Some(fingerprint),
            ScanResult::Clean => None,
        }
    }
}

impl fmt::Display for ScanResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanResult::Clean => write!(f, "clean"),
            ScanResult::Match { fingerprint } => {
                write!(f, "matched fingerprint {fingerprint}")
            }
        }
    }
}

/// Fingerprint `input` in one context and test it against the built-in
/// corpus.
pub fn matches_known_pattern(
    input: &[u8],
    flags: TokenizerFlags,
) -> Result<bool, Error> {
    let index = corpus::builtin_index()?;
    let fingerprint = fingerprint_of(input, flags)?;
    Ok(index.contains_fingerprint(&fingerprint))
}

/// Scan `input` against the built-in corpus in every quote context.
///
/// The input is fingerprinted as-is, then -- when the corresponding quote
/// byte is present -- as a continuation of a single- and double-quoted
/// string, since an injected value typically lands inside quotes in the
/// final statement. The first matching context wins.
pub fn scan(input: &[u8]) -> Result<ScanResult, Error> {
    let index = corpus::builtin_index()?;

    let mut contexts = [Some(TokenizerFlags::NONE), None, None];
    if input.contains(&b'\'') {
        contexts[1] = Some(TokenizerFlags::QUOTE_SINGLE);
    }
    if input.contains(&b'"') {
        contexts[2] = Some(TokenizerFlags::QUOTE_DOUBLE);
    }

    for flags in contexts.into_iter().flatten() {
        let fingerprint = fingerprint_of(input, flags)?;
        if index.contains_fingerprint(&fingerprint) {
            return Ok(ScanResult::Match { fingerprint });
        }
    }
    Ok(ScanResult::Clean)
}

/// Library version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
