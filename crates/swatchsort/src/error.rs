//! Utility module with swatchsort's errors.

/// An erroneous hexadecimal color token.
///
/// Tokens are sanitized before validation, so neither surrounding white space
/// nor a leading number sign can cause an error. What remains after
/// sanitizing must be exactly three or six hexadecimal digits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A token with an unexpected number of characters. For example, `#ab` is
    /// missing a hexadecimal digit, whereas `#aabbccdd` has two too many. The
    /// empty token also falls into this category.
    UnexpectedCharacters,

    /// A token with the right number of characters but a malformed
    /// hexadecimal digit. For example, `#efghij` has the length of a valid
    /// token but `g` through `j` are not hexadecimal digits.
    MalformedHex,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ColorFormatError::UnexpectedCharacters => f.write_str(
                "color token should comprise 3 or 6 hexadecimal digits after an optional `#`",
            ),
            ColorFormatError::MalformedHex => {
                f.write_str("color token should contain only hexadecimal digits")
            }
        }
    }
}

impl std::error::Error for ColorFormatError {}
