//! Byte-level SQL tokenizer.
//!
//! The scanner walks the input one byte at a time and dispatches on
//! [`ByteClass`]: word starts go through the keyword table, operator runs
//! through the [`OperatorTable`] (longest match), string delimiters open a
//! quoted-string scan, and so on. Only ASCII drives decisions; high-bit
//! bytes are skipped.
//!
//! Tokens carry at most [`TOKEN_TEXT_MAX`]` - 1` bytes of text; longer
//! spans keep their full length in the input but store a clipped value.

use bitflags::bitflags;
use smallvec::SmallVec;

use crate::charmap::ByteClass;
use crate::error::TableError;
use crate::lexicon::Lexicon;
use crate::operators::OperatorTable;
use crate::tokens::TokenCategory;

/// Token text buffer size; values are clipped to one less than this.
pub const TOKEN_TEXT_MAX: usize = 32;

bitflags! {
    /// Quote context the input is evaluated in.
    ///
    /// An attacker-controlled value is typically pasted into a statement
    /// inside quotes; re-tokenizing with the matching context set treats
    /// the input as if it started mid-string.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TokenizerFlags: u32 {
        const NONE = 0;
        /// Input continues a single-quoted string.
        const QUOTE_SINGLE = 1 << 0;
        /// Input continues a double-quoted string.
        const QUOTE_DOUBLE = 1 << 1;
    }
}

impl TokenizerFlags {
    fn delimiter(self) -> Option<u8> {
        if self.contains(TokenizerFlags::QUOTE_SINGLE) {
            Some(b'\'')
        } else if self.contains(TokenizerFlags::QUOTE_DOUBLE) {
            Some(b'"')
        } else {
            None
        }
    }
}

/// One lexed token: category, position, and (clipped) text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    category: TokenCategory,
    pos: usize,
    value: SmallVec<[u8; TOKEN_TEXT_MAX]>,
}

impl Token {
    pub(crate) fn new(category: TokenCategory, pos: usize, value: &[u8]) -> Self {
        let take = value.len().min(TOKEN_TEXT_MAX - 1);
        Self {
            category,
            pos,
            value: SmallVec::from_slice(&value[..take]),
        }
    }

    pub fn category(&self) -> TokenCategory {
        self.category
    }

    pub(crate) fn set_category(&mut self, category: TokenCategory) {
        self.category = category;
    }

    /// Single-byte tag, as used in fingerprints.
    pub fn tag(&self) -> u8 {
        self.category.as_tag()
    }

    /// Byte offset of the token in the original input.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Raw token text, clipped to the token buffer size.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Token text as UTF-8; non-UTF-8 bytes yield an empty string.
    pub fn value_str(&self) -> &str {
        core::str::from_utf8(&self.value).unwrap_or("")
    }
}

/// Word constituents; the set the class table routes to [`ByteClass::Word`]
/// plus digits, so words like `USERS.NAME` or `DBMS_PIPE.RECEIVE_MESSAGE`
/// scan as one token.
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b'$' | b'`')
}

/// Variable-name constituents; variables do not take backticks.
fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b'$')
}

fn upper(bytes: &[u8]) -> SmallVec<[u8; TOKEN_TEXT_MAX]> {
    bytes.iter().map(|b| b.to_ascii_uppercase()).collect()
}

/// Streaming tokenizer over a byte slice.
///
/// Yields raw tokens; phrase folding happens one layer up in
/// [`TokenFolder`](crate::TokenFolder).
pub struct Tokenizer<'a> {
    input: &'a [u8],
    pos: usize,
    flags: TokenizerFlags,
    lexicon: &'a Lexicon,
    operators: &'a OperatorTable,
    /// Inside a MySQL `/*!` conditional comment; its body is tokenized,
    /// the delimiters are dropped.
    in_conditional_comment: bool,
    started: bool,
}

impl<'a> Tokenizer<'a> {
    /// Tokenizer over `input` using the built-in tables.
    pub fn new(input: &'a [u8], flags: TokenizerFlags) -> Result<Self, TableError> {
        Ok(Self::with_tables(
            input,
            flags,
            Lexicon::builtin()?,
            OperatorTable::builtin()?,
        ))
    }

    /// Tokenizer with caller-supplied tables.
    pub fn with_tables(
        input: &'a [u8],
        flags: TokenizerFlags,
        lexicon: &'a Lexicon,
        operators: &'a OperatorTable,
    ) -> Self {
        Self {
            input,
            pos: 0,
            flags,
            lexicon,
            operators,
            in_conditional_comment: false,
            started: false,
        }
    }

    pub(crate) fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    /// Produce the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<Token> {
        if !self.started {
            self.started = true;
            if let Some(delim) = self.flags.delimiter() {
                // Quote context: the input starts mid-string.
                return Some(self.scan_string_body(0, delim, 0));
            }
        }

        while self.pos < self.input.len() {
            let b = self.input[self.pos];
            match ByteClass::of(b) {
                ByteClass::White => self.pos += 1,
                ByteClass::Word | ByteClass::Money => return Some(self.scan_word()),
                ByteClass::Num => return Some(self.scan_number()),
                ByteClass::Str => {
                    return Some(self.scan_string_body(self.pos, b, 1));
                }
                ByteClass::Punct => {
                    let category =
                        TokenCategory::from_tag(b).unwrap_or(TokenCategory::Unknown);
                    return Some(self.single(category));
                }
                ByteClass::Op1 => return Some(self.single(TokenCategory::Operator)),
                ByteClass::Op2 => {
                    if let Some(token) = self.scan_operator() {
                        return Some(token);
                    }
                    // conditional-comment close, nothing to emit
                }
                ByteClass::Dash => return Some(self.scan_dash()),
                ByteClass::Slash => {
                    if let Some(token) = self.scan_slash() {
                        return Some(token);
                    }
                    // conditional-comment open, nothing to emit
                }
                ByteClass::CommentHash => return Some(self.scan_eol_comment()),
                ByteClass::Var => return Some(self.scan_variable()),
                ByteClass::Backslash => return Some(self.scan_backslash()),
                ByteClass::Other => {
                    if b < 128 {
                        return Some(self.single(TokenCategory::Unknown));
                    }
                    // high-bit bytes carry no lexical meaning; skip
                    self.pos += 1;
                }
            }
        }
        None
    }

    fn single(&mut self, category: TokenCategory) -> Token {
        let token = Token::new(category, self.pos, &self.input[self.pos..=self.pos]);
        self.pos += 1;
        token
    }

    fn scan_word(&mut self) -> Token {
        let start = self.pos;
        let mut end = start;
        while end < self.input.len() && is_word_byte(self.input[end]) {
            end += 1;
        }
        self.pos = end;

        let value = upper(&self.input[start..end]);
        let mut token = Token::new(TokenCategory::Bareword, start, &value);
        // spellings that overflow the token buffer stay barewords
        if end - start < TOKEN_TEXT_MAX {
            if let Some(category) = self.lexicon.classify(token.value_str()) {
                token.set_category(category);
            }
        }
        token
    }

    fn scan_number(&mut self) -> Token {
        let input = self.input;
        let len = input.len();
        let start = self.pos;

        // hex literal
        if input[start] == b'0'
            && start + 1 < len
            && matches!(input[start + 1], b'X' | b'x')
        {
            let mut end = start + 2;
            while end < len && input[end].is_ascii_hexdigit() {
                end += 1;
            }
            self.pos = end;
            if end == start + 2 {
                // "0X" with no digits is not a number
                return Token::new(TokenCategory::Bareword, start, b"0X");
            }
            return Token::new(TokenCategory::Literal, start, &upper(&input[start..end]));
        }

        let mut end = start;
        while end < len && input[end].is_ascii_digit() {
            end += 1;
        }
        if end < len && input[end] == b'.' {
            end += 1;
            while end < len && input[end].is_ascii_digit() {
                end += 1;
            }
            if end - start == 1 {
                // a lone dot is no number at all
                self.pos = end;
                return Token::new(TokenCategory::Bareword, start, b".");
            }
        }

        if end < len && matches!(input[end], b'E' | b'e') {
            end += 1;
            if end < len && matches!(input[end], b'+' | b'-') {
                end += 1;
            }
            while end < len && input[end].is_ascii_digit() {
                end += 1;
            }
        } else if end < len && input[end].is_ascii_alphabetic() {
            // something like 6FOO: not a number, grab the alphanumeric run
            end += 1;
            while end < len && input[end].is_ascii_alphanumeric() {
                end += 1;
            }
            self.pos = end;
            return Token::new(TokenCategory::Bareword, start, &upper(&input[start..end]));
        }

        self.pos = end;
        Token::new(TokenCategory::Literal, start, &upper(&input[start..end]))
    }

    /// Scan a quoted string whose body starts at `token_start + offset`.
    ///
    /// `offset` of 1 skips an opening quote; 0 resumes mid-string (quote
    /// context). The token text includes whatever delimiters are present.
    fn scan_string_body(&mut self, token_start: usize, delim: u8, offset: usize) -> Token {
        let input = self.input;
        let mut search = token_start + offset;
        loop {
            let found = input
                .get(search..)
                .and_then(|rest| rest.iter().position(|&c| c == delim))
                .map(|rel| search + rel);
            match found {
                None => {
                    // unterminated; consume the rest
                    self.pos = input.len();
                    return Token::new(TokenCategory::String, token_start, &input[token_start..]);
                }
                Some(q) if q > 0 && input[q - 1] == b'\\' => {
                    search = q + 1;
                }
                Some(q) => {
                    self.pos = q + 1;
                    return Token::new(
                        TokenCategory::String,
                        token_start,
                        &input[token_start..=q],
                    );
                }
            }
        }
    }

    fn scan_operator(&mut self) -> Option<Token> {
        let input = self.input;
        let pos = self.pos;

        // `*/` closing a conditional comment is not an operator
        if self.in_conditional_comment
            && input[pos] == b'*'
            && input.get(pos + 1) == Some(&b'/')
        {
            self.in_conditional_comment = false;
            self.pos = pos + 2;
            return None;
        }

        if let Some((spelling, len)) = self.operators.match_at(&input[pos..]) {
            let category = if spelling == "&&" || spelling == "||" {
                TokenCategory::Logic
            } else {
                TokenCategory::Operator
            };
            let token = Token::new(category, pos, spelling.as_bytes());
            self.pos = pos + len;
            return Some(token);
        }
        Some(self.single(TokenCategory::Operator))
    }

    fn scan_dash(&mut self) -> Token {
        if self.input.get(self.pos + 1) == Some(&b'-') {
            self.scan_eol_comment()
        } else {
            self.single(TokenCategory::Operator)
        }
    }

    fn scan_slash(&mut self) -> Option<Token> {
        let input = self.input;
        let pos = self.pos;
        if input.get(pos + 1) != Some(&b'*') {
            return Some(self.single(TokenCategory::Operator));
        }

        let inc = conditional_comment_len(input, pos);
        if inc > 0 {
            // MySQL executes the body of /*!...*/; tokenize it
            self.in_conditional_comment = true;
            self.pos = pos + inc;
            return None;
        }

        let close = input[pos..]
            .windows(2)
            .position(|w| w == b"*/")
            .map(|rel| pos + rel + 2);
        let end = match close {
            Some(end) => end,
            None => input.len(), // unterminated comment
        };
        self.pos = end;
        Some(Token::new(TokenCategory::Comment, pos, &input[pos..end]))
    }

    fn scan_eol_comment(&mut self) -> Token {
        let input = self.input;
        let start = self.pos;
        match input[start..].iter().position(|&c| c == b'\n') {
            Some(rel) => {
                self.pos = start + rel + 1;
                Token::new(TokenCategory::Comment, start, &input[start..start + rel])
            }
            None => {
                self.pos = input.len();
                Token::new(TokenCategory::Comment, start, &input[start..])
            }
        }
    }

    fn scan_variable(&mut self) -> Token {
        let input = self.input;
        let start = self.pos;
        let mut end = start + 1;
        // @@ for session variables
        if end < input.len() && input[end] == b'@' {
            end += 1;
        }
        while end < input.len() && is_name_byte(input[end]) {
            end += 1;
        }
        self.pos = end;
        Token::new(TokenCategory::Variable, start, &input[start..end])
    }

    fn scan_backslash(&mut self) -> Token {
        if matches!(self.input.get(self.pos + 1), Some(&(b'N' | b'n'))) {
            let token = Token::new(TokenCategory::Literal, self.pos, b"NULL");
            self.pos += 2;
            token
        } else {
            self.single(TokenCategory::Unknown)
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

/// Length of a MySQL conditional-comment opener at `pos`, or 0 if the
/// span is an ordinary comment. `/*!` alone is 3 bytes; a version-gated
/// `/*!00000` opener is 8.
fn conditional_comment_len(input: &[u8], pos: usize) -> usize {
    let len = input.len();
    if pos + 2 >= len || input[pos + 2] != b'!' {
        return 0;
    }
    if pos + 3 >= len || !input[pos + 3].is_ascii_digit() {
        return 3;
    }
    // odd case of /*!0SELECT
    if pos + 4 >= len || !input[pos + 4].is_ascii_digit() {
        return 4;
    }
    if pos + 7 >= len {
        return 4;
    }
    for i in pos + 5..=pos + 7 {
        if !input[i].is_ascii_digit() {
            return 3;
        }
    }
    8
}
