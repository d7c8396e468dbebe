use logos::Logos;

use crate::error::ParseError;

/// Longest identifier the lexer accepts, in bytes.
pub const MAX_NAME_LENGTH: usize = 255;

/// Failure reported by the generated lexer for a single token.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// The text looked like a number but does not parse as a double.
    BadNumericLiteral,
    /// No token starts with this character.
    #[default]
    UnexpectedCharacter,
}

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Composite operators are listed as their own tokens so that the longest
/// match always wins over the single character prefix.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\n\r\f\x0B]+")]
pub enum Token {
    /// Unsigned numeric literal tokens, such as `3.14`, `.5`, `42` or
    /// `1.53158e+15`. Digits and dots are scanned greedily so that `1.2.3`
    /// is reported as one bad literal instead of two numbers.
    #[regex(r"[0-9][0-9.]*([eE][+-]?[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9][0-9.]*([eE][+-]?[0-9]*)?", parse_number)]
    Number(f64),
    /// Variable or function names such as `x`, `timems` or `sqrt`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Name(String),
    /// `+=`
    #[token("+=")]
    PlusAssign,
    /// `-=`
    #[token("-=")]
    MinusAssign,
    /// `*=`
    #[token("*=")]
    StarAssign,
    /// `/=`
    #[token("/=")]
    SlashAssign,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `&&`
    #[token("&&")]
    AndAnd,
    /// `||`
    #[token("||")]
    OrOr,
    /// `=`
    #[token("=")]
    Equals,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `!`
    #[token("!")]
    Bang,
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Ok(f64)`: The parsed value.
/// - `Err(LexError::BadNumericLiteral)`: If the slice is not a valid double,
///   for example `1.2.3` or `4e`.
fn parse_number(lex: &logos::Lexer<Token>) -> Result<f64, LexError> {
    lex.slice().parse().map_err(|_| LexError::BadNumericLiteral)
}

/// Where the lexer stands relative to the token stream.
#[derive(Debug, Clone, PartialEq)]
enum Cursor {
    /// No token has been read yet.
    Start,
    /// The current token.
    At(Token),
    /// The end of input has been reported once.
    End,
}

/// On-demand scanner over one expression.
///
/// The lexer holds exactly one current token. Each call to
/// [`Lexer::next_token`] replaces it and moves the scan position past the
/// text it consumed. Whether a leading `+` or `-` belongs to a number depends
/// on where the parser stands, so the caller decides per call.
pub struct Lexer<'src> {
    source:      &'src str,
    inner:       logos::Lexer<'src, Token>,
    cursor:      Cursor,
    token_start: usize,
    token_end:   usize,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned before the first token of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { source,
               inner: Token::lexer(source),
               cursor: Cursor::Start,
               token_start: 0,
               token_end: 0 }
    }

    /// Reads the next token and makes it current.
    ///
    /// With `ignore_sign` unset, a `+` or `-` immediately followed by a digit
    /// or `.` is folded into a signed number literal. Operand-completing
    /// positions pass `true` so that `2-3` stays a subtraction.
    ///
    /// # Errors
    /// - `UnexpectedEndOfInput` when the end of input was already reported
    ///   and another token is requested.
    /// - `BadNumericLiteral`, `UnexpectedCharacter` or `NameTooLong` for
    ///   malformed input.
    pub fn next_token(&mut self, ignore_sign: bool) -> Result<(), ParseError> {
        let Some(lexed) = self.inner.next() else {
            self.token_start = self.source.len();
            self.token_end = self.source.len();
            if self.cursor == Cursor::End {
                return Err(ParseError::UnexpectedEndOfInput { position: self.token_start });
            }
            self.cursor = Cursor::End;
            return Ok(());
        };

        let span = self.inner.span();
        self.token_start = span.start;
        self.token_end = span.end;

        let token = match lexed.map_err(|e| self.lex_error(&e))? {
            Token::Plus if !ignore_sign && self.number_follows() => self.signed_number(false)?,
            Token::Minus if !ignore_sign && self.number_follows() => self.signed_number(true)?,
            Token::Name(name) if name.len() > MAX_NAME_LENGTH => {
                return Err(ParseError::NameTooLong { length:   name.len(),
                                                     limit:    MAX_NAME_LENGTH,
                                                     position: self.token_start, });
            },
            token => token,
        };

        self.cursor = Cursor::At(token);
        Ok(())
    }

    /// The current token, or `None` before the first read and at the end.
    #[must_use]
    pub const fn current(&self) -> Option<&Token> {
        match &self.cursor {
            Cursor::At(token) => Some(token),
            Cursor::Start | Cursor::End => None,
        }
    }

    /// Returns `true` once the end of input has been reached.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.cursor == Cursor::End
    }

    /// Byte offset where the current token begins.
    #[must_use]
    pub const fn token_start(&self) -> usize {
        self.token_start
    }

    /// Source text of the current token, as written.
    #[must_use]
    pub fn token_text(&self) -> &'src str {
        if self.at_end() {
            "<end of expression>"
        } else {
            self.source.get(self.token_start..self.token_end).unwrap_or_default()
        }
    }

    /// Source text from the start of the current token to the end of input.
    #[must_use]
    pub fn remaining(&self) -> &'src str {
        self.source.get(self.token_start..).unwrap_or_default()
    }

    fn number_follows(&self) -> bool {
        self.inner
            .remainder()
            .starts_with(|c: char| c.is_ascii_digit() || c == '.')
    }

    /// Folds a sign that was just read into the number literal after it.
    fn signed_number(&mut self, negative: bool) -> Result<Token, ParseError> {
        let start = self.token_start;
        let lexed = self.inner.next();
        self.token_end = self.inner.span().end;

        match lexed {
            Some(Ok(Token::Number(value))) => Ok(Token::Number(if negative { -value } else { value })),
            _ => Err(ParseError::BadNumericLiteral { literal:  self.source[start..self.token_end].to_string(),
                                                     position: start, }),
        }
    }

    fn lex_error(&self, error: &LexError) -> ParseError {
        let text = self.source.get(self.token_start..).unwrap_or_default();
        match error {
            LexError::BadNumericLiteral => {
                ParseError::BadNumericLiteral { literal:  self.token_text().to_string(),
                                                position: self.token_start, }
            },
            LexError::UnexpectedCharacter => {
                ParseError::UnexpectedCharacter { character: text.chars().next().unwrap_or('\0'),
                                                  position:  self.token_start, }
            },
        }
    }
}
