//! Alphabet conversions and modular offset arithmetic.
//!
//! Every wiring and rotor offset in the machine is defined over the 26
//! letters `A..=Z`, so all index arithmetic here is modulo [`ALPHABET_LEN`].

use crate::error::RotorCryptError;

/// The machine alphabet, in wiring order.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of letters (and positions) on every rotor.
pub const ALPHABET_LEN: usize = 26;

/// Returns the alphabet index of an ASCII letter, case-insensitively.
///
/// # Errors
/// Returns [`RotorCryptError::InvalidLetter`] for anything outside `a-zA-Z`.
pub fn letter_to_index(letter: char) -> Result<usize, RotorCryptError> {
    if letter.is_ascii_alphabetic() {
        Ok((letter.to_ascii_uppercase() as u8 - b'A') as usize)
    } else {
        Err(RotorCryptError::InvalidLetter(letter))
    }
}

/// Returns the uppercase letter at `index` (taken modulo 26).
pub fn index_to_letter(index: usize) -> char {
    (b'A' + (index % ALPHABET_LEN) as u8) as char
}

/// Moves `index` forward by `offset` positions around the alphabet.
pub fn rotate_forward(index: usize, offset: usize) -> usize {
    (index + offset) % ALPHABET_LEN
}

/// Moves `index` backward by `offset` positions around the alphabet.
pub fn rotate_backward(index: usize, offset: usize) -> usize {
    (index + ALPHABET_LEN - offset % ALPHABET_LEN) % ALPHABET_LEN
}

/// Parses a 3-letter rotor position key into offsets (left, middle, right).
///
/// The key is case-insensitive; anything other than exactly three ASCII
/// letters is rejected.
///
/// # Errors
/// Returns [`RotorCryptError::InvalidKey`] carrying the rejected key.
pub fn parse_key(key: &str) -> Result<[usize; 3], RotorCryptError> {
    let mut offsets = [0usize; 3];
    let mut chars = key.chars();
    for slot in offsets.iter_mut() {
        let c = chars
            .next()
            .ok_or_else(|| RotorCryptError::InvalidKey(key.to_string()))?;
        *slot = letter_to_index(c).map_err(|_| RotorCryptError::InvalidKey(key.to_string()))?;
    }
    if chars.next().is_some() {
        return Err(RotorCryptError::InvalidKey(key.to_string()));
    }
    Ok(offsets)
}

/// Parses a 26-letter wiring string into a table of alphabet indices.
///
/// Returns `None` if the string is not a permutation of the alphabet.
pub(crate) fn parse_permutation(wiring: &str) -> Option<[u8; ALPHABET_LEN]> {
    let mut table = [0u8; ALPHABET_LEN];
    let mut seen = [false; ALPHABET_LEN];
    let mut count = 0;
    for (i, c) in wiring.chars().enumerate() {
        if i >= ALPHABET_LEN {
            return None;
        }
        let idx = letter_to_index(c).ok()?;
        if seen[idx] {
            return None;
        }
        seen[idx] = true;
        table[i] = idx as u8;
        count += 1;
    }
    (count == ALPHABET_LEN).then_some(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_to_index_case_insensitive() {
        assert_eq!(letter_to_index('A'), Ok(0));
        assert_eq!(letter_to_index('z'), Ok(25));
        assert_eq!(letter_to_index('q'), letter_to_index('Q'));
    }

    #[test]
    fn test_letter_to_index_rejects_non_letters() {
        assert_eq!(letter_to_index('4'), Err(RotorCryptError::InvalidLetter('4')));
        assert_eq!(letter_to_index(' '), Err(RotorCryptError::InvalidLetter(' ')));
        assert!(letter_to_index('é').is_err());
    }

    #[test]
    fn test_index_to_letter_wraps() {
        assert_eq!(index_to_letter(0), 'A');
        assert_eq!(index_to_letter(25), 'Z');
        assert_eq!(index_to_letter(26), 'A');
    }

    #[test]
    fn test_rotate_wraps_both_ways() {
        assert_eq!(rotate_forward(25, 1), 0);
        assert_eq!(rotate_forward(3, 15), 18);
        assert_eq!(rotate_backward(0, 1), 25);
        assert_eq!(rotate_backward(11, 15), 22);
    }

    #[test]
    fn test_parse_key() {
        assert_eq!(parse_key("AAA"), Ok([0, 0, 0]));
        assert_eq!(parse_key("xyz"), Ok([23, 24, 25]));
    }

    #[test]
    fn test_parse_key_rejects_bad_lengths_and_chars() {
        for bad in ["", "AA", "MNOP", "A1B", "A B"] {
            assert_eq!(
                parse_key(bad),
                Err(RotorCryptError::InvalidKey(bad.to_string())),
                "key {:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_parse_permutation() {
        let identity = parse_permutation(ALPHABET).unwrap();
        for (i, &v) in identity.iter().enumerate() {
            assert_eq!(v as usize, i);
        }
        assert!(parse_permutation("ABC").is_none());
        assert!(parse_permutation("AACDEFGHIJKLMNOPQRSTUVWXYZ").is_none());
        assert!(parse_permutation("ABCDEFGHIJKLMNOPQRSTUVWXYZA").is_none());
    }
}
