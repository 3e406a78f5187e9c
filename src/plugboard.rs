//! Plugboard: symmetric letter-pair substitution.
//!
//! The plugboard is applied once when the signal enters the machine and
//! once when it leaves. Unplugged letters pass through unchanged.

use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, warn};

use crate::error::RotorCryptError;

/// Maximum number of plug pairs the board accepts.
pub const MAX_PLUG_PAIRS: usize = 6;

/// Symmetric swap table with at most [`MAX_PLUG_PAIRS`] disjoint pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plugboard {
    swaps: BTreeMap<char, char>,
}

impl Plugboard {
    /// Creates an empty plugboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a plugboard wired with the given pairs.
    ///
    /// # Errors
    /// Same as [`update_swaps`](Self::update_swaps).
    pub fn with_pairs<S: AsRef<str>>(pairs: &[S]) -> Result<Self, RotorCryptError> {
        let mut board = Self::new();
        board.update_swaps(Some(pairs), true)?;
        Ok(board)
    }

    /// Adds or replaces plug pairs.
    ///
    /// Each pair is a 2-letter string such as `"AB"`, case-insensitive.
    /// When `replace` is set the current pairs are discarded first;
    /// `None` with `replace` clears the board, and `None` without it is a
    /// no-op. Re-adding a pair that is already plugged is accepted.
    ///
    /// The update is all-or-nothing: on error the board is left as it was.
    ///
    /// # Errors
    /// - [`RotorCryptError::MalformedPlugPair`] if a pair is not two distinct letters.
    /// - [`RotorCryptError::PlugLetterReused`] if a letter is already plugged elsewhere.
    /// - [`RotorCryptError::PlugboardFull`] if more than 6 pairs would result.
    pub fn update_swaps<S: AsRef<str>>(
        &mut self,
        pairs: Option<&[S]>,
        replace: bool,
    ) -> Result<(), RotorCryptError> {
        let Some(pairs) = pairs else {
            if replace {
                self.clear();
            }
            return Ok(());
        };

        if pairs.len() > MAX_PLUG_PAIRS {
            warn!(requested = pairs.len(), "plugboard update rejected");
            return Err(RotorCryptError::PlugboardFull {
                requested: pairs.len(),
            });
        }

        let mut candidate = if replace {
            BTreeMap::new()
        } else {
            self.swaps.clone()
        };

        for pair in pairs {
            let (a, b) = parse_pair(pair.as_ref())?;
            match (candidate.get(&a).copied(), candidate.get(&b).copied()) {
                (Some(x), _) if x == b => continue,
                (Some(_), _) => return Err(RotorCryptError::PlugLetterReused(a)),
                (_, Some(_)) => return Err(RotorCryptError::PlugLetterReused(b)),
                (None, None) => {
                    candidate.insert(a, b);
                    candidate.insert(b, a);
                }
            }
        }

        let requested = candidate.len() / 2;
        if requested > MAX_PLUG_PAIRS {
            warn!(requested, "plugboard update rejected");
            return Err(RotorCryptError::PlugboardFull { requested });
        }

        self.swaps = candidate;
        debug!(pairs = %self, replace, "plugboard updated");
        Ok(())
    }

    /// Removes every plug pair.
    pub fn clear(&mut self) {
        self.swaps.clear();
        debug!("plugboard cleared");
    }

    /// Substitutes `letter` through the board. Unplugged letters are
    /// returned unchanged.
    pub fn encode(&self, letter: char) -> char {
        self.swaps.get(&letter).copied().unwrap_or(letter)
    }

    /// The full symmetric swap table.
    pub fn swaps(&self) -> &BTreeMap<char, char> {
        &self.swaps
    }

    /// Number of plugged pairs.
    pub fn pair_count(&self) -> usize {
        self.swaps.len() / 2
    }

    /// Plugged pairs as 2-letter strings, each pair listed once.
    pub fn pairs(&self) -> Vec<String> {
        self.swaps
            .iter()
            .filter(|(a, b)| a < b)
            .map(|(a, b)| format!("{}{}", a, b))
            .collect()
    }
}

impl fmt::Display for Plugboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Swaps: [{}]", self.pairs().join(" "))
    }
}

/// Parses a plug pair into two distinct uppercase letters.
fn parse_pair(pair: &str) -> Result<(char, char), RotorCryptError> {
    let malformed = || RotorCryptError::MalformedPlugPair(pair.to_string());
    let mut chars = pair.chars();
    let (Some(a), Some(b), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(malformed());
    };
    if !a.is_ascii_alphabetic() || !b.is_ascii_alphabetic() {
        return Err(malformed());
    }
    let (a, b) = (a.to_ascii_uppercase(), b.to_ascii_uppercase());
    if a == b {
        return Err(malformed());
    }
    Ok((a, b))
}
