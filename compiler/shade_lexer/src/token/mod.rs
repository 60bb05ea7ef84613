//! Token kinds and the token record.

use std::fmt;

use shade_lexer_core::Span;

/// Lexical category of a token.
///
/// The tokenizer never produces the angle-bracket variants: `<` and `>`
/// come out as [`TokenKind::ComparisonOp`] or [`TokenKind::BitwiseOp`].
/// They exist for callers that re-tag template argument lists afterwards.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum TokenKind {
    #[default]
    Undefined,
    Identifier,
    NumericConstant,
    /// Quoted text; the literal span excludes the quotes.
    StringConstant,
    /// `#` through the end of the line.
    PreprocessorDirective,
    /// `=` and compound forms such as `+=` or `<<=`.
    Assignment,
    ComparisonOp,
    LogicOp,
    BitwiseOp,
    MathOp,
    IncDecOp,
    Colon,
    DoubleColon,
    Comma,
    Semicolon,
    QuestionMark,
    OpenParen,
    ClosingParen,
    OpenBrace,
    ClosingBrace,
    OpenSquareBracket,
    ClosingSquareBracket,
    OpenAngleBracket,
    ClosingAngleBracket,
}

impl TokenKind {
    /// Any of `(`, `{`, `[`, or a re-tagged `<`.
    pub fn is_open_bracket(self) -> bool {
        matches!(
            self,
            TokenKind::OpenParen
                | TokenKind::OpenBrace
                | TokenKind::OpenSquareBracket
                | TokenKind::OpenAngleBracket
        )
    }

    /// Any of `)`, `}`, `]`, or a re-tagged `>`.
    pub fn is_closing_bracket(self) -> bool {
        matches!(
            self,
            TokenKind::ClosingParen
                | TokenKind::ClosingBrace
                | TokenKind::ClosingSquareBracket
                | TokenKind::ClosingAngleBracket
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Undefined => "undefined",
            TokenKind::Identifier => "identifier",
            TokenKind::NumericConstant => "numeric constant",
            TokenKind::StringConstant => "string constant",
            TokenKind::PreprocessorDirective => "preprocessor directive",
            TokenKind::Assignment => "assignment",
            TokenKind::ComparisonOp => "comparison operator",
            TokenKind::LogicOp => "logic operator",
            TokenKind::BitwiseOp => "bitwise operator",
            TokenKind::MathOp => "math operator",
            TokenKind::IncDecOp => "increment/decrement",
            TokenKind::Colon => "colon",
            TokenKind::DoubleColon => "double colon",
            TokenKind::Comma => "comma",
            TokenKind::Semicolon => "semicolon",
            TokenKind::QuestionMark => "question mark",
            TokenKind::OpenParen => "open paren",
            TokenKind::ClosingParen => "closing paren",
            TokenKind::OpenBrace => "open brace",
            TokenKind::ClosingBrace => "closing brace",
            TokenKind::OpenSquareBracket => "open square bracket",
            TokenKind::ClosingSquareBracket => "closing square bracket",
            TokenKind::OpenAngleBracket => "open angle bracket",
            TokenKind::ClosingAngleBracket => "closing angle bracket",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified token.
///
/// Both spans are absolute byte offsets into the tokenized source; the
/// delimiter span (whitespace and comments) always ends where the literal
/// span begins, or one byte earlier for a string constant's opening quote.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Token {
    pub kind: TokenKind,
    pub delimiter: Span,
    pub literal: Span,
}

impl Token {
    pub fn new(kind: TokenKind, delimiter: Span, literal: Span) -> Self {
        debug_assert!(
            !delimiter.overlaps(literal),
            "delimiter {delimiter} overlaps literal {literal}"
        );
        Token {
            kind,
            delimiter,
            literal,
        }
    }

    /// The literal text, or `""` if the span does not fit `source`.
    #[inline]
    pub fn literal_text<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.literal.to_range()).unwrap_or_default()
    }

    /// The preceding whitespace and comments.
    #[inline]
    pub fn delimiter_text<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.delimiter.to_range()).unwrap_or_default()
    }

    /// Compare the literal against `text` without allocating.
    #[inline]
    pub fn compare_literal(&self, source: &str, text: &str) -> bool {
        self.literal_text(source) == text
    }
}
