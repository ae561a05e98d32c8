use thiserror::Error;

/// Represents all errors that can occur while tokenizing a line.
///
/// Positions are zero-based byte offsets into the line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that does not start any token.
    #[error("Unknown token '{character}' at position {position}.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Where it was found.
        position:  usize,
    },
    /// A numeral containing more than one decimal point.
    #[error("Invalid number '{text}' at position {position}.")]
    MalformedNumeral {
        /// The numeral as written.
        text:     String,
        /// Where the numeral starts.
        position: usize,
    },
    /// `let` was not followed by a variable name.
    #[error("Expected variable name after 'let' at position {position}.")]
    ExpectedVariableName {
        /// Where the name was expected.
        position: usize,
    },
    /// `let NAME` was not followed by `=`.
    #[error("Expected '=' after variable name '{name}' at position {position}.")]
    ExpectedAssign {
        /// The variable being declared.
        name:     String,
        /// Where the `=` was expected.
        position: usize,
    },
    /// Character literals are reserved but not part of the language yet.
    #[error("Character literals are not supported (position {position}).")]
    CharacterLiteral {
        /// Where the quote was found.
        position: usize,
    },
}
