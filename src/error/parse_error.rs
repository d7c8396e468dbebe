use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found a token that cannot start or continue an expression here.
    #[error("Unexpected token: '{token}' (at position {position})")]
    UnexpectedToken {
        /// The token text.
        token:    String,
        /// Byte offset where the token starts.
        position: usize,
    },
    /// Reached the end of input while an operand was still expected.
    #[error("Unexpected end of expression (at position {position})")]
    UnexpectedEndOfInput {
        /// Byte offset of the end of input.
        position: usize,
    },
    /// A numeric literal could not be converted to a double.
    #[error("Bad numeric literal: {literal} (at position {position})")]
    BadNumericLiteral {
        /// The literal as written, including any leading sign.
        literal:  String,
        /// Byte offset where the literal starts.
        position: usize,
    },
    /// A character that no token can start with.
    #[error("Unexpected character {} (at position {position})", describe_char(.character))]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character.
        position:  usize,
    },
    /// Found extra text after a complete expression.
    #[error("Unexpected text at end of expression: '{text}' (at position {position})")]
    UnexpectedTrailingText {
        /// The remaining, unparsed source text.
        text:     String,
        /// Byte offset where the trailing text starts.
        position: usize,
    },
    /// A closing parenthesis or an argument separator was required.
    #[error("expected '{expected}' but found '{found}' (at position {position})")]
    ExpectedToken {
        /// The punctuation that was required.
        expected: char,
        /// The token that was found instead.
        found:    String,
        /// Byte offset of the token that was found.
        position: usize,
    },
    /// An identifier exceeded the maximum supported length.
    #[error("Name is too long: {length} characters, limit is {limit} (at position {position})")]
    NameTooLong {
        /// Length of the identifier in bytes.
        length:   usize,
        /// Maximum accepted length.
        limit:    usize,
        /// Byte offset where the identifier starts.
        position: usize,
    },
    /// Parentheses, function calls or unary operators nested beyond the limit.
    #[error("Expression is nested too deeply, limit is {limit} (at position {position})")]
    NestingTooDeep {
        /// The configured nesting limit.
        limit:    usize,
        /// Byte offset where the limit was exceeded.
        position: usize,
    },
}

impl ParseError {
    /// Byte offset in the source text where the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::BadNumericLiteral { position, .. }
            | Self::UnexpectedCharacter { position, .. }
            | Self::UnexpectedTrailingText { position, .. }
            | Self::ExpectedToken { position, .. }
            | Self::NameTooLong { position, .. }
            | Self::NestingTooDeep { position, .. } => *position,
        }
    }
}

/// Quotes printable characters and spells out control characters as hex.
#[allow(clippy::trivially_copy_pass_by_ref)]
fn describe_char(character: &char) -> String {
    if character.is_control() {
        format!("0x{:02x}", u32::from(*character))
    } else {
        format!("'{character}'")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_characters_are_shown_in_hex() {
        let err = ParseError::UnexpectedCharacter { character: '\u{7}',
                                                    position:  3, };
        assert_eq!(err.to_string(), "Unexpected character 0x07 (at position 3)");
    }

    #[test]
    fn printable_characters_are_quoted() {
        let err = ParseError::UnexpectedCharacter { character: '#',
                                                    position:  0, };
        assert_eq!(err.to_string(), "Unexpected character '#' (at position 0)");
    }
}
