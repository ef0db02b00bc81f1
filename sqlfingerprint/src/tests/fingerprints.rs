//! Fingerprint scenarios: payload -> fingerprint -> corpus lookup.

use crate::{
    builtin_index, fingerprint_of, matches_known_pattern, scan, Error,
    FingerprintIndex, TokenizerFlags,
};

#[test]
fn classic_payload_fingerprints() -> Result<(), Error> {
    let cases: &[(&[u8], TokenizerFlags, &str)] = &[
        (b"1' OR '1'='1", TokenizerFlags::QUOTE_SINGLE, "s&sos"),
        (b"admin'--", TokenizerFlags::QUOTE_SINGLE, "sc"),
        (b"1 UNION SELECT", TokenizerFlags::NONE, "1Uk"),
        (b"SELECT * FROM users WHERE id = 1", TokenizerFlags::NONE, "koknk"),
        (b"1 AND 1", TokenizerFlags::NONE, "1&1"),
    ];
    for &(input, flags, expected) in cases {
        let fingerprint = fingerprint_of(input, flags)?;
        assert_eq!(
            fingerprint.as_str(),
            expected,
            "input {:?}",
            String::from_utf8_lossy(input)
        );
    }
    Ok(())
}

#[test]
fn scan_matches_injections_across_contexts() -> Result<(), Error> {
    let injections: &[&[u8]] = &[
        b"1' OR '1'='1",
        b"admin'--",
        b"1 UNION SELECT",
        b"1\" OR \"\"=\"",
        b"1 AND 1",
    ];
    for &input in injections {
        assert!(
            scan(input)?.is_match(),
            "expected match for {:?}",
            String::from_utf8_lossy(input)
        );
    }
    Ok(())
}

#[test]
fn scan_passes_ordinary_values() -> Result<(), Error> {
    let clean: &[&[u8]] = &[
        b"hello world",
        b"october sales report",
        b"",
        b"42",
        b"o'neill",
    ];
    for &input in clean {
        assert!(
            !scan(input)?.is_match(),
            "false positive on {:?}",
            String::from_utf8_lossy(input)
        );
    }
    Ok(())
}

#[test]
fn scan_match_reports_the_fingerprint() -> Result<(), Error> {
    let result = scan(b"1' OR '1'='1")?;
    assert_eq!(result.fingerprint().map(|f| f.as_str()), Some("s&sos"));
    Ok(())
}

#[test]
fn single_context_lookup() -> Result<(), Error> {
    assert!(matches_known_pattern(
        b"1' OR '1'='1",
        TokenizerFlags::QUOTE_SINGLE
    )?);
    assert!(!matches_known_pattern(
        b"1' OR '1'='1",
        TokenizerFlags::NONE
    )?);
    Ok(())
}

#[test]
fn empty_input_has_an_empty_fingerprint() -> Result<(), Error> {
    let fingerprint = fingerprint_of(b"", TokenizerFlags::NONE)?;
    assert!(fingerprint.is_empty());
    assert_eq!(fingerprint.as_str(), "");
    // an empty fingerprint never matches: empty corpus entries are rejected
    assert!(!builtin_index()?.contains_fingerprint(&fingerprint));
    Ok(())
}

#[test]
fn long_statements_are_judged_on_their_head() -> Result<(), Error> {
    let long = b"SELECT * FROM users WHERE id = 1 AND name = 'x' ORDER BY 1";
    let fingerprint = fingerprint_of(long, TokenizerFlags::NONE)?;
    assert_eq!(fingerprint.as_str(), "koknk");
    Ok(())
}

#[test]
fn external_corpus_round_trip() -> Result<(), Error> {
    // a caller-supplied corpus behaves exactly like the built-in one
    let index = FingerprintIndex::build(["1Uk", "s&sos"]).map_err(Error::from)?;
    let fingerprint = fingerprint_of(b"1 UNION SELECT", TokenizerFlags::NONE)?;
    assert!(index.contains_fingerprint(&fingerprint));
    assert!(!index.contains("koknk"));
    Ok(())
}
