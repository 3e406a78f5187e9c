//! Reflector: fixed involutive wiring at the far end of the rotor chain.
//!
//! The reflector sends the signal back through the rotors along a
//! different path. Because its wiring is a fixed-point-free involution,
//! the whole machine is its own inverse and no letter ever enciphers to
//! itself.

use std::fmt;

use crate::catalog::ReflectorType;
use crate::error::RotorCryptError;
use crate::utils::letters::{index_to_letter, parse_permutation, ALPHABET_LEN};

/// Stateless reflector wiring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    wiring: [u8; ALPHABET_LEN],
}

impl Default for Reflector {
    fn default() -> Self {
        Self::from_type(ReflectorType::default())
    }
}

impl Reflector {
    /// Creates a reflector from 26 wiring letters.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::InvalidReflector`] if the wiring is not a
    /// permutation, maps any letter to itself, or is not self-inverse.
    pub fn new(wiring: &str) -> Result<Self, RotorCryptError> {
        let invalid = || RotorCryptError::InvalidReflector(wiring.to_string());
        let table = parse_permutation(wiring).ok_or_else(invalid)?;
        for (i, &target) in table.iter().enumerate() {
            let target = target as usize;
            if target == i || table[target] as usize != i {
                return Err(invalid());
            }
        }
        Ok(Reflector { wiring: table })
    }

    /// Creates a reflector from the catalog.
    pub fn from_type(kind: ReflectorType) -> Self {
        let mut wiring = [0u8; ALPHABET_LEN];
        for (slot, c) in wiring.iter_mut().zip(kind.wiring().bytes()) {
            *slot = c - b'A';
        }
        Reflector { wiring }
    }

    /// Reflects the signal at contact `index`.
    pub fn encode(&self, index: usize) -> usize {
        self.wiring[index % ALPHABET_LEN] as usize
    }

    /// The wiring spelled out as 26 letters.
    pub fn letters(&self) -> String {
        self.wiring.iter().map(|&i| index_to_letter(i as usize)).collect()
    }
}

impl fmt::Display for Reflector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reflector wiring: {}", self.letters())
    }
}
