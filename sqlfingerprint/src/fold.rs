//! Phrase folding over the raw token stream.
//!
//! The tokenizer emits one token per lexeme; this pass holds one token of
//! lookahead and merges adjacent word-like tokens through the phrase table,
//! so `UNION ALL` comes out as a single union token and `GROUP BY` as a
//! statement boundary. Longer phrases merge pair-at-a-time: `IS` + `NOT`
//! becomes `IS NOT`, which then merges with `DISTINCT`, and so on.
//!
//! The same pass performs the stream cleanups the classifier's callers
//! expect: adjacent strings collapse into one, a unary operator directly
//! after another operator is dropped, and comments are withheld unless they
//! end the statement.

use crate::tokenizer::{Token, Tokenizer, TOKEN_TEXT_MAX};
use crate::tokens::TokenCategory;

/// Iterator adapter that folds phrases in a raw token stream.
pub struct TokenFolder<'a> {
    tokenizer: Tokenizer<'a>,
    last: Option<Token>,
    last_comment: Option<Token>,
}

impl<'a> TokenFolder<'a> {
    pub fn new(tokenizer: Tokenizer<'a>) -> Self {
        Self {
            tokenizer,
            last: None,
            last_comment: None,
        }
    }

    /// Produce the next folded token.
    pub fn next_token(&mut self) -> Option<Token> {
        while let Some(current) = self.tokenizer.next_token() {
            if current.category() == TokenCategory::Comment {
                // only a trailing comment survives folding
                self.last_comment = Some(current);
                continue;
            }
            self.last_comment = None;

            let last = match self.last.take() {
                None => {
                    match current.category() {
                        TokenCategory::String => {
                            self.last = Some(current);
                            continue;
                        }
                        TokenCategory::Bareword
                        | TokenCategory::Keyword
                        | TokenCategory::Union
                        | TokenCategory::Logic
                        | TokenCategory::Operator => {
                            let lexicon = self.tokenizer.lexicon();
                            if lexicon.is_phrase_start(current.value_str())
                                || matches!(
                                    current.category(),
                                    TokenCategory::Operator | TokenCategory::Logic
                                )
                            {
                                self.last = Some(current);
                                continue;
                            }
                            return Some(current);
                        }
                        _ => return Some(current),
                    }
                }
                Some(last) => last,
            };

            match current.category() {
                TokenCategory::String => {
                    if last.category() == TokenCategory::String {
                        // "FOO" "BAR" is one string; drop the second
                        self.last = Some(last);
                        continue;
                    }
                    self.last = Some(current);
                    return Some(last);
                }
                TokenCategory::Operator => {
                    if let Some(merged) = self.merge(&last, &current) {
                        self.last = Some(merged);
                        continue;
                    }
                    if is_unary_operator(&current)
                        && matches!(
                            last.category(),
                            TokenCategory::Operator
                                | TokenCategory::Logic
                                | TokenCategory::Union
                        )
                    {
                        // AND +1: the sign is unary, not arithmetic
                        self.last = Some(last);
                        continue;
                    }
                    self.last = Some(current);
                    return Some(last);
                }
                TokenCategory::Bareword | TokenCategory::Keyword => {
                    if let Some(merged) = self.merge(&last, &current) {
                        self.last = Some(merged);
                        continue;
                    }
                    self.last = Some(current);
                    return Some(last);
                }
                _ => {
                    // IN reads as a function when no phrase follows it
                    if last.category() == TokenCategory::Bareword
                        && last.value() == b"IN"
                    {
                        self.last = Some(current);
                        return Some(Token::new(
                            TokenCategory::Function,
                            last.pos(),
                            b"IN",
                        ));
                    }
                    self.last = Some(current);
                    return Some(last);
                }
            }
        }

        if let Some(last) = self.last.take() {
            return Some(last);
        }
        self.last_comment.take()
    }

    /// Join two spellings through the phrase table.
    fn merge(&self, a: &Token, b: &Token) -> Option<Token> {
        if !matches!(
            a.category(),
            TokenCategory::Keyword
                | TokenCategory::Bareword
                | TokenCategory::Operator
                | TokenCategory::Union
        ) {
            return None;
        }
        // merged spelling must still fit a token
        if a.value().len() + b.value().len() + 1 >= TOKEN_TEXT_MAX {
            return None;
        }
        let category = self
            .tokenizer
            .lexicon()
            .classify_pair(a.value_str(), b.value_str())?;
        let mut joined = Vec::with_capacity(a.value().len() + b.value().len() + 1);
        joined.extend_from_slice(a.value());
        joined.push(b' ');
        joined.extend_from_slice(b.value());
        Some(Token::new(category, a.pos(), &joined))
    }
}

fn is_unary_operator(token: &Token) -> bool {
    token.category() == TokenCategory::Operator
        && matches!(
            token.value(),
            b"+" | b"-" | b"!" | b"!!" | b"~" | b"NOT"
        )
}

impl Iterator for TokenFolder<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}
