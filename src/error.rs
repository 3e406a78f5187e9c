//! Error types for the rotorcrypt library.

use thiserror::Error;

/// Errors produced by the rotorcrypt library.
///
/// Configuration errors abort the mutation that raised them and leave the
/// machine untouched. Format errors report input the cipher cannot process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RotorCryptError {
    /// Rotor position key is not exactly three letters.
    #[error("Please provide a three letter position key such as AAA.")]
    InvalidKey(String),
    /// Rotor type name is not in the catalog.
    #[error("Unknown rotor type '{0}'")]
    UnknownRotor(String),
    /// Rotor order does not name exactly three rotors.
    #[error("Rotor order must name exactly 3 rotors, got {0}")]
    InvalidRotorOrder(usize),
    /// Plug pair is not two distinct letters.
    #[error("Plug pair '{0}' must be two distinct letters")]
    MalformedPlugPair(String),
    /// A letter is already wired to a different plug pair.
    #[error("Letter '{0}' is already used by another plug pair")]
    PlugLetterReused(char),
    /// The plugboard would hold more than the allowed number of pairs.
    #[error("Only a maximum of 6 swaps is allowed.")]
    PlugboardFull {
        /// Number of pairs the rejected update would have produced.
        requested: usize,
    },
    /// Reflector wiring is not a fixed-point-free involution.
    #[error("Reflector wiring '{0}' is not a fixed-point-free involution")]
    InvalidReflector(String),
    /// Reflector name is not in the catalog.
    #[error("Unknown reflector type '{0}'")]
    UnknownReflector(String),
    /// Single-letter input is not in a-zA-Z.
    #[error("Please provide a letter in a-zA-Z.")]
    InvalidLetter(char),
    /// Text contains characters other than a-zA-Z and spaces.
    #[error("Please provide a string containing only the characters a-zA-Z and spaces.")]
    InvalidText(char),
    /// Machine settings could not be parsed or serialised.
    #[error("Invalid machine settings: {0}")]
    Settings(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_letter() {
        let err = RotorCryptError::InvalidLetter('4');
        assert_eq!(format!("{}", err), "Please provide a letter in a-zA-Z.");
    }

    #[test]
    fn test_display_invalid_text() {
        let err = RotorCryptError::InvalidText('!');
        assert_eq!(
            format!("{}", err),
            "Please provide a string containing only the characters a-zA-Z and spaces."
        );
    }

    #[test]
    fn test_display_invalid_key() {
        let err = RotorCryptError::InvalidKey("MNOP".to_string());
        assert_eq!(
            format!("{}", err),
            "Please provide a three letter position key such as AAA."
        );
    }

    #[test]
    fn test_display_plugboard_full() {
        let err = RotorCryptError::PlugboardFull { requested: 9 };
        assert_eq!(format!("{}", err), "Only a maximum of 6 swaps is allowed.");
    }

    #[test]
    fn test_display_unknown_rotor() {
        let err = RotorCryptError::UnknownRotor("IV".to_string());
        assert_eq!(format!("{}", err), "Unknown rotor type 'IV'");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            RotorCryptError::InvalidLetter('x'),
            RotorCryptError::InvalidLetter('x')
        );
        assert_ne!(
            RotorCryptError::InvalidLetter('x'),
            RotorCryptError::InvalidText('x')
        );
    }
}
