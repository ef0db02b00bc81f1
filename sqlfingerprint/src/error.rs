use thiserror::Error;

/// Construction-time failure in the keyword, phrase, or operator tables.
///
/// A malformed entry means the table refuses to build; nothing is dropped or
/// defaulted silently. Query paths never return errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("table entry has an empty spelling")]
    EmptySpelling,

    #[error("table spelling {spelling:?} is not canonical uppercase")]
    NotCanonical { spelling: String },

    #[error("table entry {spelling:?} carries unusable category tag {tag:?}")]
    UnknownTag { spelling: String, tag: char },

    #[error("duplicate table spelling {spelling:?}")]
    DuplicateSpelling { spelling: String },

    #[error("phrase entry {spelling:?} has fewer than two words")]
    NotAPhrase { spelling: String },

    #[error("operator spelling {spelling:?} is shorter than two characters")]
    ShortOperator { spelling: String },

    #[error("duplicate operator spelling {spelling:?}")]
    DuplicateOperator { spelling: String },
}

/// Construction-time failure in a fingerprint corpus.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CorpusError {
    /// Duplicate entries are rejected rather than silently merged, so that
    /// two builds of the same corpus always observe the same input set.
    #[error("duplicate fingerprint {fingerprint:?} in corpus")]
    DuplicateFingerprint { fingerprint: String },

    #[error("empty fingerprint in corpus")]
    EmptyFingerprint,
}

/// Any failure this crate can produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Corpus(#[from] CorpusError),
}
