//! Serialized table interchange.
//!
//! The four classification tables can be exported as one structured record
//! for auditing and offline tooling: keyword map, 256-entry character-class
//! array, operator list, phrase map. Keys are sorted so regenerated dumps
//! diff cleanly; there is no versioning beyond that stable ordering.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::charmap::ByteClass;
use crate::error::TableError;
use crate::lexicon::Lexicon;
use crate::operators::OperatorTable;

/// Snapshot of the classification tables in interchange form.
#[derive(Debug, Clone, Serialize)]
pub struct TableExport {
    /// Single-word spelling to category tag, sorted by spelling.
    pub keywords: BTreeMap<String, char>,
    /// Character-class name per byte value, 0-indexed, 256 entries.
    pub charmap: Vec<&'static str>,
    /// Multi-character operator spellings, sorted.
    pub operators: Vec<String>,
    /// Phrase spelling to category tag, sorted by spelling.
    pub phrases: BTreeMap<String, char>,
}

impl TableExport {
    pub fn new(lexicon: &Lexicon, operators: &OperatorTable) -> Self {
        let keywords = lexicon
            .words()
            .map(|(spelling, category)| (spelling.to_owned(), category.as_tag() as char))
            .collect();
        let phrases = lexicon
            .phrases()
            .map(|(spelling, category)| (spelling.to_owned(), category.as_tag() as char))
            .collect();
        let mut operators: Vec<String> =
            operators.spellings().map(str::to_owned).collect();
        operators.sort_unstable();
        let charmap = (0..=255u8).map(|b| ByteClass::of(b).name()).collect();
        Self {
            keywords,
            charmap,
            operators,
            phrases,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Export the built-in tables.
pub fn export_tables() -> Result<TableExport, TableError> {
    Ok(TableExport::new(
        Lexicon::builtin()?,
        OperatorTable::builtin()?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn charmap_has_one_entry_per_byte() -> Result<(), TableError> {
        let export = export_tables()?;
        assert_eq!(export.charmap.len(), 256);
        assert_eq!(export.charmap[b'A' as usize], "word");
        assert_eq!(export.charmap[b'\'' as usize], "str");
        assert_eq!(export.charmap[255], "other");
        Ok(())
    }

    #[test]
    fn operators_are_sorted_and_unique() -> Result<(), TableError> {
        let export = export_tables()?;
        for pair in export.operators.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        Ok(())
    }

    #[test]
    fn json_round_trip_shape() -> Result<(), Box<dyn std::error::Error>> {
        let export = export_tables().map_err(Error::from)?;
        let json = export.to_json()?;
        let value: serde_json::Value = serde_json::from_str(&json)?;
        let keys = ["keywords", "charmap", "operators", "phrases"];
        for key in keys {
            assert!(value.get(key).is_some(), "missing field {key}");
        }
        assert_eq!(
            value["keywords"]["SELECT"],
            serde_json::Value::String("k".to_owned())
        );
        assert_eq!(
            value["phrases"]["UNION ALL"],
            serde_json::Value::String("U".to_owned())
        );
        Ok(())
    }
}
