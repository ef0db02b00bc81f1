//! Built-in corpus of known-malicious fingerprints.
//!
//! The patterns are curated offline from observed injection payloads, one
//! fingerprint per entry, and compiled into the crate. Loading an external
//! corpus instead is just [`FingerprintIndex::build`] over the lines of
//! whatever file the caller reads.

use std::sync::OnceLock;

use crate::error::CorpusError;
use crate::fingerprint::FingerprintIndex;

static BUILTIN: OnceLock<Result<FingerprintIndex, CorpusError>> = OnceLock::new();

/// Known-malicious fingerprints. Kept duplicate-free by hand; the index
/// build rejects duplicates, so a careless edit here fails every query
/// loudly instead of shifting detection behavior.
pub(crate) static PATTERNS: &[&str] = &[
    // string-breakout boolean tests: 1' OR '1'='1 and friends
    "s&sos",
    "s&so1",
    "s&son",
    "s&sov",
    "s&sof",
    "s&soU",
    "sosos",
    "sos",
    "so1",
    "son",
    "sov",
    // numeric boolean tests
    "1&1",
    "1&s",
    "1&so",
    "1&sos",
    "1&son",
    "1&sov",
    "1o1",
    "1o1o1",
    // comment truncation: admin'-- and friends
    "sc",
    "s&sc",
    "1sc",
    "nsc",
    "vsc",
    "n&sc",
    "v&sc",
    "nc",
    "vc",
    "1c",
    "kc",
    "fc",
    // union-based extraction
    "1U",
    "sU",
    "nU",
    "vU",
    "Un",
    "Us",
    "U1",
    "Uk",
    "Uv",
    "1Uk",
    "1U1",
    "1Us",
    "1Un",
    "1Uks",
    "sUk",
    "nUk",
    "vUk",
    "kUk",
    // leading keyword shapes: stacked or bare statements
    "kn",
    "ks",
    "kv",
    "k1",
    "ko",
    "koknk",
    "kons",
    "konv",
    // function probes: SLEEP(5), BENCHMARK(...)
    "f(",
    "f()",
    "f(1",
    "f(n",
    "f(s",
    "f(v",
    // parenthesized boolean shapes
    "&(1",
    "&(n",
    "&(s",
    "&(v",
    "1o(",
    "so(",
    "no(",
    "vo(",
    "(1)",
    "(n)",
    "(s)",
    "(v)",
    "(1o",
    "(so",
    "(no",
    "(vo",
    // statement stacking through a semicolon
    "1;kn",
    "n;kn",
    "s;kn",
    "v;kn",
];

/// The compiled-in pattern index, built on first use.
///
/// The outcome is cached; every caller observes the same index or the same
/// construction error.
pub fn builtin_index() -> Result<&'static FingerprintIndex, CorpusError> {
    BUILTIN
        .get_or_init(|| FingerprintIndex::build(PATTERNS.iter().copied()))
        .as_ref()
        .map_err(|err| err.clone())
}
