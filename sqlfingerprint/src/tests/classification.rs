//! End-to-end classification behavior across the tokenizer, lexicon, and
//! folding layers.

use crate::{
    Lexicon, TableError, Token, TokenCategory, TokenFolder, Tokenizer,
    TokenizerFlags,
};

fn raw_tags(input: &[u8]) -> Result<String, TableError> {
    Ok(Tokenizer::new(input, TokenizerFlags::NONE)?
        .map(|t| t.tag() as char)
        .collect())
}

fn folded_tags(input: &[u8], flags: TokenizerFlags) -> Result<String, TableError> {
    let tokenizer = Tokenizer::new(input, flags)?;
    Ok(TokenFolder::new(tokenizer)
        .map(|t| t.tag() as char)
        .collect())
}

#[test]
fn statement_shape_survives_identifier_changes() -> Result<(), TableError> {
    let a = raw_tags(b"SELECT name FROM users WHERE id = 1")?;
    let b = raw_tags(b"SELECT zip FROM addresses WHERE pk = 9")?;
    assert_eq!(a, b);
    Ok(())
}

#[test]
fn letter_case_never_changes_the_shape() -> Result<(), TableError> {
    let upper = raw_tags(b"SELECT A FROM B")?;
    let lower = raw_tags(b"select a from b")?;
    let mixed = raw_tags(b"SeLeCt a FrOm B")?;
    assert_eq!(upper, lower);
    assert_eq!(upper, mixed);
    Ok(())
}

#[test]
fn structural_punctuation_is_preserved() -> Result<(), TableError> {
    assert_eq!(raw_tags(b"SELECT name, id FROM t;")?, "kn,nkn;");
    assert_eq!(raw_tags(b"f(1)")?, "n(1)");
    Ok(())
}

#[test]
fn dual_role_spellings_carry_one_fixed_tag() -> Result<(), TableError> {
    let lexicon = Lexicon::builtin()?;
    // CHAR() the function vs CHAR the type: the table fixes one tag
    assert_eq!(lexicon.classify("CHAR"), Some(TokenCategory::Function));
    // PASSWORD the function vs SET PASSWORD: fixed as keyword
    assert_eq!(lexicon.classify("PASSWORD"), Some(TokenCategory::Keyword));
    Ok(())
}

#[test]
fn unknown_identifiers_default_to_bareword() -> Result<(), TableError> {
    let mut tokenizer = Tokenizer::new(b"flurble", TokenizerFlags::NONE)?;
    let token = tokenizer.next_token();
    assert_eq!(
        token.as_ref().map(Token::category),
        Some(TokenCategory::Bareword)
    );
    assert_eq!(token.as_ref().map(Token::value_str), Some("FLURBLE"));
    Ok(())
}

#[test]
fn null_safe_comparison_is_not_split() -> Result<(), TableError> {
    // <=> must come out as one operator, never <= followed by >
    let values: Vec<String> = Tokenizer::new(b"a<=>b", TokenizerFlags::NONE)?
        .map(|t| t.value_str().to_owned())
        .collect();
    assert_eq!(values, ["A", "<=>", "B"]);
    Ok(())
}

#[test]
fn folding_is_stable_over_whitespace() -> Result<(), TableError> {
    let tight = folded_tags(b"1 UNION ALL SELECT", TokenizerFlags::NONE)?;
    let spaced = folded_tags(b"  1\tUNION\n ALL   SELECT ", TokenizerFlags::NONE)?;
    assert_eq!(tight, spaced);
    assert_eq!(tight, "1Uk");
    Ok(())
}

#[test]
fn quote_context_changes_the_shape() -> Result<(), TableError> {
    let bare = folded_tags(b"1' OR '1'='1", TokenizerFlags::NONE)?;
    let quoted = folded_tags(b"1' OR '1'='1", TokenizerFlags::QUOTE_SINGLE)?;
    assert_eq!(quoted, "s&sos");
    assert_ne!(bare, quoted);
    Ok(())
}

#[test]
fn conditional_comments_unwrap_to_their_body() -> Result<(), TableError> {
    assert_eq!(
        folded_tags(b"1 /*!UNION*/ /*!ALL*/ SELECT", TokenizerFlags::NONE)?,
        "1Uk"
    );
    Ok(())
}
