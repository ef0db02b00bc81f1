//! Byte-level character classes driving tokenizer dispatch.
//!
//! Every byte value has exactly one class; there are no gaps and no failure
//! mode. The table is ASCII-oriented: bytes 128..=255 carry no lexical
//! meaning in SQL and all map to [`ByteClass::Other`].

/// Lexical class of a single input byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteClass {
    /// Whitespace and control bytes; skipped between tokens.
    White,
    /// Word constituent: letters, `_`, and the backtick.
    Word,
    /// Digit or `.`; starts a numeric literal.
    Num,
    /// String delimiter (`'` or `"`).
    Str,
    /// Single-character operator (`%`, `+`, `^`, `~`).
    Op1,
    /// Byte that may begin a multi-character operator (`!`, `&`, `<`, ...).
    Op2,
    /// `-`; either an operator or the start of a `--` comment.
    Dash,
    /// `/`; either an operator or the start of a `/* */` comment.
    Slash,
    /// `#`; starts an end-of-line comment.
    CommentHash,
    /// `$`; treated as a word constituent (pgsql/T-SQL names).
    Money,
    /// `@`; starts a session or user variable.
    Var,
    /// `\`; only meaningful before `N` (the `\N` null literal).
    Backslash,
    /// Structural punctuation emitted as its own token (`(`, `)`, `,`, `;`, `:`).
    Punct,
    /// Anything without lexical meaning, including all high-bit bytes.
    Other,
}

impl ByteClass {
    /// Classify one byte. Total over `0..=255`, pure, O(1).
    #[inline]
    pub fn of(byte: u8) -> ByteClass {
        CHAR_CLASS[byte as usize]
    }

    /// Stable lowercase name used by the serialized table interchange.
    pub fn name(self) -> &'static str {
        match self {
            ByteClass::White => "white",
            ByteClass::Word => "word",
            ByteClass::Num => "num",
            ByteClass::Str => "str",
            ByteClass::Op1 => "op1",
            ByteClass::Op2 => "op2",
            ByteClass::Dash => "dash",
            ByteClass::Slash => "slash",
            ByteClass::CommentHash => "comment_hash",
            ByteClass::Money => "money",
            ByteClass::Var => "var",
            ByteClass::Backslash => "backslash",
            ByteClass::Punct => "punct",
            ByteClass::Other => "other",
        }
    }
}

use ByteClass::*;

/// Classes for the ASCII range. Indexed by byte value.
const ASCII_CLASS: [ByteClass; 128] = [
    White, // 0
    White, // 1
    White, // 2
    White, // 3
    White, // 4
    White, // 5
    White, // 6
    White, // 7
    White, // 8
    White, // 9 tab
    White, // 10 \n
    White, // 11
    White, // 12
    White, // 13 \r
    White, // 14
    White, // 15
    White, // 16
    White, // 17
    White, // 18
    White, // 19
    White, // 20
    White, // 21
    White, // 22
    White, // 23
    White, // 24
    White, // 25
    White, // 26
    White, // 27
    White, // 28
    White, // 29
    White, // 30
    White, // 31
    White, // 32 space
    Op2,   // 33 !
    Str,   // 34 "
    CommentHash, // 35 #
    Money, // 36 $
    Op1,   // 37 %
    Op2,   // 38 &
    Str,   // 39 '
    Punct, // 40 (
    Punct, // 41 )
    Op2,   // 42 *
    Op1,   // 43 +
    Punct, // 44 ,
    Dash,  // 45 -
    Num,   // 46 .
    Slash, // 47 /
    Num,   // 48 0
    Num,   // 49 1
    Num,   // 50 2
    Num,   // 51 3
    Num,   // 52 4
    Num,   // 53 5
    Num,   // 54 6
    Num,   // 55 7
    Num,   // 56 8
    Num,   // 57 9
    Punct, // 58 :
    Punct, // 59 ;
    Op2,   // 60 <
    Op2,   // 61 =
    Op2,   // 62 >
    Other, // 63 ?
    Var,   // 64 @
    Word,  // 65 A
    Word,  // 66 B
    Word,  // 67 C
    Word,  // 68 D
    Word,  // 69 E
    Word,  // 70 F
    Word,  // 71 G
    Word,  // 72 H
    Word,  // 73 I
    Word,  // 74 J
    Word,  // 75 K
    Word,  // 76 L
    Word,  // 77 M
    Word,  // 78 N
    Word,  // 79 O
    Word,  // 80 P
    Word,  // 81 Q
    Word,  // 82 R
    Word,  // 83 S
    Word,  // 84 T
    Word,  // 85 U
    Word,  // 86 V
    Word,  // 87 W
    Word,  // 88 X
    Word,  // 89 Y
    Word,  // 90 Z
    Other, // 91 [
    Backslash, // 92 \
    Other, // 93 ]
    Op1,   // 94 ^
    Word,  // 95 _
    Word,  // 96 `
    Word,  // 97 a
    Word,  // 98 b
    Word,  // 99 c
    Word,  // 100 d
    Word,  // 101 e
    Word,  // 102 f
    Word,  // 103 g
    Word,  // 104 h
    Word,  // 105 i
    Word,  // 106 j
    Word,  // 107 k
    Word,  // 108 l
    Word,  // 109 m
    Word,  // 110 n
    Word,  // 111 o
    Word,  // 112 p
    Word,  // 113 q
    Word,  // 114 r
    Word,  // 115 s
    Word,  // 116 t
    Word,  // 117 u
    Word,  // 118 v
    Word,  // 119 w
    Word,  // 120 x
    Word,  // 121 y
    Word,  // 122 z
    Other, // 123 {
    Op2,   // 124 |
    Other, // 125 }
    Op1,   // 126 ~
    White, // 127
];

/// Full 256-entry table; the high half is uniformly [`ByteClass::Other`].
pub(crate) const CHAR_CLASS: [ByteClass; 256] = {
    let mut table = [Other; 256];
    let mut i = 0;
    while i < 128 {
        table[i] = ASCII_CLASS[i];
        i += 1;
    }
    table
};

#[cfg(test)]
mod tests {
    use super::*;

    // Spot checks against the class groups the tokenizer depends on.
    #[test]
    fn ascii_classes() {
        assert_eq!(ByteClass::of(b' '), White);
        assert_eq!(ByteClass::of(b'\t'), White);
        assert_eq!(ByteClass::of(b'\n'), White);
        for b in b'0'..=b'9' {
            assert_eq!(ByteClass::of(b), Num);
        }
        for b in b'A'..=b'Z' {
            assert_eq!(ByteClass::of(b), Word);
        }
        for b in b'a'..=b'z' {
            assert_eq!(ByteClass::of(b), Word);
        }
        assert_eq!(ByteClass::of(b'_'), Word);
        assert_eq!(ByteClass::of(b'`'), Word);
        assert_eq!(ByteClass::of(b'\''), Str);
        assert_eq!(ByteClass::of(b'"'), Str);
        assert_eq!(ByteClass::of(b'#'), CommentHash);
        assert_eq!(ByteClass::of(b'-'), Dash);
        assert_eq!(ByteClass::of(b'/'), Slash);
        assert_eq!(ByteClass::of(b'@'), Var);
        assert_eq!(ByteClass::of(b'\\'), Backslash);
        assert_eq!(ByteClass::of(b'$'), Money);
        for b in [b'(', b')', b',', b';', b':'] {
            assert_eq!(ByteClass::of(b), Punct);
        }
        for b in [b'!', b'&', b'*', b'<', b'=', b'>', b'|'] {
            assert_eq!(ByteClass::of(b), Op2);
        }
        for b in [b'%', b'+', b'^', b'~'] {
            assert_eq!(ByteClass::of(b), Op1);
        }
        for b in [b'?', b'[', b']', b'{', b'}'] {
            assert_eq!(ByteClass::of(b), Other);
        }
    }

    #[test]
    fn total_over_all_bytes() {
        // Every byte resolves to a class and every name is non-empty; the
        // high half is uniformly Other.
        for b in 0..=255u8 {
            let class = ByteClass::of(b);
            assert!(!class.name().is_empty());
            if b >= 128 {
                assert_eq!(class, Other, "byte {b}");
            }
        }
    }
}
