//! Fixed catalog of rotor and reflector wirings.
//!
//! Wirings are computed at compile time, together with their inverse
//! tables, so lookups in the cipher path are plain array indexing.

use std::fmt;
use std::str::FromStr;

use crate::error::RotorCryptError;
use crate::utils::letters::{index_to_letter, ALPHABET_LEN};

/// A permutation of the alphabet with its precomputed inverse.
///
/// `forward[i]` is the letter index wired to contact `i`; `backward` is the
/// inverse lookup used when the signal returns from the reflector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wiring {
    forward: [u8; ALPHABET_LEN],
    backward: [u8; ALPHABET_LEN],
}

impl Wiring {
    /// Builds a wiring from 26 uppercase ASCII letters.
    ///
    /// Only used for catalog constants, whose contents are known to be
    /// permutations of `A..=Z`.
    const fn from_letters(letters: &[u8; ALPHABET_LEN]) -> Self {
        let mut forward = [0u8; ALPHABET_LEN];
        let mut backward = [0u8; ALPHABET_LEN];
        let mut i = 0;
        while i < ALPHABET_LEN {
            let target = letters[i] - b'A';
            forward[i] = target;
            backward[target as usize] = i as u8;
            i += 1;
        }
        Wiring { forward, backward }
    }

    /// Letter index wired to contact `index`.
    pub fn forward(&self, index: usize) -> usize {
        self.forward[index % ALPHABET_LEN] as usize
    }

    /// Contact wired to letter index `index`.
    pub fn backward(&self, index: usize) -> usize {
        self.backward[index % ALPHABET_LEN] as usize
    }

    /// The wiring spelled out as 26 letters.
    pub fn letters(&self) -> String {
        self.forward.iter().map(|&i| index_to_letter(i as usize)).collect()
    }
}

const WIRING_I: Wiring = Wiring::from_letters(b"EKMFLGDQVZNTOWYHXUSPAIBRCJ");
const WIRING_II: Wiring = Wiring::from_letters(b"AJDKSIRUXBLHWTMCQGZNPYFVOE");
const WIRING_III: Wiring = Wiring::from_letters(b"BDFHJLCPRTXVZNYEIWGAKMUSQO");

/// Reflector B wiring.
pub const REFLECTOR_B: &str = "YRUHQSLDPXNGOKMIEBFZCWVJAT";
/// Reflector C wiring.
pub const REFLECTOR_C: &str = "FVPJIAOYEDRZXWGCTKUQSBNMHL";

/// Rotor types available to the machine, named by roman numeral.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotorType {
    I,
    II,
    III,
}

impl RotorType {
    /// Every rotor in the catalog.
    pub const ALL: [RotorType; 3] = [RotorType::I, RotorType::II, RotorType::III];

    /// Catalog name, e.g. `"II"`.
    pub fn name(self) -> &'static str {
        match self {
            RotorType::I => "I",
            RotorType::II => "II",
            RotorType::III => "III",
        }
    }

    /// Fixed wiring of this rotor type.
    pub fn wiring(self) -> &'static Wiring {
        match self {
            RotorType::I => &WIRING_I,
            RotorType::II => &WIRING_II,
            RotorType::III => &WIRING_III,
        }
    }

    /// Window letter at which this rotor carries its left neighbour along
    /// on the next keystroke.
    pub fn notch(self) -> char {
        match self {
            RotorType::I => 'Q',
            RotorType::II => 'E',
            RotorType::III => 'V',
        }
    }
}

impl fmt::Display for RotorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RotorType {
    type Err = RotorCryptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RotorType::ALL
            .into_iter()
            .find(|kind| kind.name() == s.trim())
            .ok_or_else(|| RotorCryptError::UnknownRotor(s.to_string()))
    }
}

/// Reflector types available to the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReflectorType {
    #[default]
    B,
    C,
}

impl ReflectorType {
    /// Every reflector in the catalog.
    pub const ALL: [ReflectorType; 2] = [ReflectorType::B, ReflectorType::C];

    /// Catalog name, e.g. `"B"`.
    pub fn name(self) -> &'static str {
        match self {
            ReflectorType::B => "B",
            ReflectorType::C => "C",
        }
    }

    /// Wiring letters of this reflector.
    pub fn wiring(self) -> &'static str {
        match self {
            ReflectorType::B => REFLECTOR_B,
            ReflectorType::C => REFLECTOR_C,
        }
    }
}

impl fmt::Display for ReflectorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReflectorType {
    type Err = RotorCryptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "B" => Ok(ReflectorType::B),
            "C" => Ok(ReflectorType::C),
            _ => Err(RotorCryptError::UnknownReflector(s.to_string())),
        }
    }
}
