//! Multi-character operator recognition.

use std::sync::OnceLock;

use crate::data;
use crate::error::TableError;

static BUILTIN: OnceLock<Result<OperatorTable, TableError>> = OnceLock::new();

/// Immutable table of multi-character operator spellings.
///
/// Matching is longest-spelling-first, so a two-character operator that is
/// a strict prefix of a longer spelling (`<=` inside `<=>`) is never
/// returned when the longer form is present in the input. Spellings of
/// equal length cannot both prefix the same input without being identical,
/// so the remaining order is irrelevant; it is kept lexicographic for
/// determinism.
#[derive(Debug, Clone)]
pub struct OperatorTable {
    /// Sorted longest-first, then bytewise.
    spellings: Vec<Box<str>>,
}

impl OperatorTable {
    /// The operator set compiled into this crate.
    pub fn builtin() -> Result<&'static OperatorTable, TableError> {
        BUILTIN
            .get_or_init(|| OperatorTable::from_spellings(data::OPERATORS))
            .as_ref()
            .map_err(|err| err.clone())
    }

    /// Build a table from literal spellings.
    ///
    /// Spellings must be at least two characters (single-character
    /// operators are dispatched straight off the character class table) and
    /// character-identical duplicates are rejected.
    pub fn from_spellings(spellings: &[&str]) -> Result<Self, TableError> {
        let mut table: Vec<Box<str>> = Vec::with_capacity(spellings.len());
        for &spelling in spellings {
            if spelling.len() < 2 {
                return Err(TableError::ShortOperator {
                    spelling: spelling.to_owned(),
                });
            }
            table.push(Box::from(spelling));
        }
        table.sort_unstable_by(|a, b| {
            b.len().cmp(&a.len()).then_with(|| a.cmp(b))
        });
        for pair in table.windows(2) {
            if pair[0] == pair[1] {
                return Err(TableError::DuplicateOperator {
                    spelling: pair[0].as_ref().to_owned(),
                });
            }
        }
        Ok(Self { spellings: table })
    }

    /// Match an operator at the start of `input`.
    ///
    /// Returns the spelling and its byte length, or `None` when no known
    /// multi-character operator starts here.
    pub fn match_at(&self, input: &[u8]) -> Option<(&str, usize)> {
        self.spellings
            .iter()
            .find(|s| input.starts_with(s.as_bytes()))
            .map(|s| (s.as_ref(), s.len()))
    }

    /// Spellings in match order (longest first).
    pub fn spellings(&self) -> impl Iterator<Item = &str> {
        self.spellings.iter().map(|s| s.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_builds() -> Result<(), TableError> {
        let ops = OperatorTable::builtin()?;
        assert_eq!(ops.spellings().count(), data::OPERATORS.len());
        Ok(())
    }

    #[test]
    fn longest_match_wins() -> Result<(), TableError> {
        let ops = OperatorTable::builtin()?;
        // <= is a strict prefix of the null-safe <=>
        assert_eq!(ops.match_at(b"<=> 1"), Some(("<=>", 3)));
        assert_eq!(ops.match_at(b"<= 1"), Some(("<=", 2)));
        assert_eq!(ops.match_at(b"<>"), Some(("<>", 2)));
        assert_eq!(ops.match_at(b"<@x"), Some(("<@", 2)));
        Ok(())
    }

    #[test]
    fn unknown_runs_do_not_match() -> Result<(), TableError> {
        let ops = OperatorTable::builtin()?;
        assert_eq!(ops.match_at(b"= 1"), None);
        assert_eq!(ops.match_at(b"<"), None);
        assert_eq!(ops.match_at(b""), None);
        assert_eq!(ops.match_at(b"abc"), None);
        Ok(())
    }

    #[test]
    fn every_spelling_matches_itself() -> Result<(), TableError> {
        let ops = OperatorTable::builtin()?;
        for &spelling in data::OPERATORS {
            assert_eq!(
                ops.match_at(spelling.as_bytes()),
                Some((spelling, spelling.len())),
                "operator {spelling}"
            );
        }
        Ok(())
    }

    #[test]
    fn malformed_tables_refuse_to_build() {
        assert!(matches!(
            OperatorTable::from_spellings(&["<", ">="]),
            Err(TableError::ShortOperator { .. })
        ));
        assert!(matches!(
            OperatorTable::from_spellings(&[">=", ">="]),
            Err(TableError::DuplicateOperator { .. })
        ));
    }
}
