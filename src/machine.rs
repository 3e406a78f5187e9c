//! Machine: plugboard, rotor chain and reflector composed into one
//! self-inverse letter transform.
//!
//! Every keystroke first steps the rotors, then sends the signal through
//! plugboard → rotors (right to left) → reflector → rotors (left to right)
//! → plugboard.

use std::fmt;

use tracing::{debug, info};

use crate::catalog::{ReflectorType, RotorType};
use crate::error::RotorCryptError;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::RotorSlot;
use crate::rotor_chain::{RotorChain, CHAIN_LEN};
use crate::settings::MachineSettings;
use crate::utils::letters::{index_to_letter, letter_to_index, parse_key};

/// Three-rotor cipher machine.
///
/// Enciphering and deciphering are the same operation: a machine started
/// from the same key, rotor order and plug pairs turns ciphertext back
/// into plaintext.
///
/// # Examples
///
/// ```
/// use rotorcrypt::Machine;
///
/// let mut encoder = Machine::new("AAA", Some(&["AB", "CD"][..]), &["I", "II", "III"]).unwrap();
/// assert_eq!(encoder.encipher("Hello World").unwrap(), "ILACBBMTBE");
///
/// let mut decoder = Machine::new("AAA", Some(&["AB", "CD"][..]), &["I", "II", "III"]).unwrap();
/// assert_eq!(decoder.decipher("ILACBBMTBE").unwrap(), "HELLOWORLD");
/// ```
#[derive(Debug, Clone)]
pub struct Machine {
    plugboard: Plugboard,
    reflector: Reflector,
    chain: RotorChain,
    initial_key: [usize; CHAIN_LEN],
}

impl Machine {
    /// Creates a machine with reflector `B`.
    ///
    /// # Parameters
    /// - `key`: Starting windows read left to right, e.g. `"AAA"`.
    /// - `swaps`: Plug pairs such as `"AB"`, or `None` for an empty board.
    /// - `rotor_order`: Three catalog names ordered left, middle, right.
    ///
    /// # Errors
    /// - [`RotorCryptError::InvalidKey`] if `key` is not exactly 3 letters.
    /// - [`RotorCryptError::InvalidRotorOrder`] / [`RotorCryptError::UnknownRotor`]
    ///   for a bad rotor order.
    /// - Any plugboard error from [`Plugboard::update_swaps`].
    pub fn new<S, R>(
        key: &str,
        swaps: Option<&[S]>,
        rotor_order: &[R],
    ) -> Result<Self, RotorCryptError>
    where
        S: AsRef<str>,
        R: AsRef<str>,
    {
        let offsets = parse_key(key)?;
        let order = parse_rotor_order(rotor_order)?;
        let mut plugboard = Plugboard::new();
        plugboard.update_swaps(swaps, true)?;

        let machine = Machine {
            plugboard,
            reflector: Reflector::default(),
            chain: RotorChain::new(order, offsets),
            initial_key: offsets,
        };
        debug!(machine = %machine, "machine built");
        Ok(machine)
    }

    /// Builds a machine from [`MachineSettings`].
    ///
    /// # Errors
    /// Same as [`new`](Self::new), plus [`RotorCryptError::UnknownReflector`].
    pub fn from_settings(settings: &MachineSettings) -> Result<Self, RotorCryptError> {
        let reflector: ReflectorType = settings.reflector.parse()?;
        let machine = Self::new(
            &settings.key,
            Some(settings.swaps.as_slice()),
            settings.rotor_order.as_slice(),
        )?;
        Ok(machine.with_reflector(reflector))
    }

    /// Swaps in a catalog reflector.
    pub fn with_reflector(mut self, kind: ReflectorType) -> Self {
        self.reflector = Reflector::from_type(kind);
        self
    }

    /// Snapshot of the current configuration, using the current windows
    /// as the key.
    pub fn settings(&self) -> MachineSettings {
        let reflector = ReflectorType::ALL
            .into_iter()
            .find(|kind| Reflector::from_type(*kind) == self.reflector)
            .unwrap_or_default();
        MachineSettings {
            key: self.key(),
            swaps: self.plugboard.pairs(),
            rotor_order: self
                .chain
                .order()
                .iter()
                .map(|kind| kind.name().to_string())
                .collect(),
            reflector: reflector.name().to_string(),
        }
    }

    /// Enciphers (or deciphers) a single letter.
    ///
    /// The rotors step before the letter is encoded, once per call. The
    /// result is always uppercase.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::InvalidLetter`] for anything outside
    /// `a-zA-Z`, including a space; the rotors do not move.
    pub fn encode_decode_letter(&mut self, letter: char) -> Result<char, RotorCryptError> {
        let letter = index_to_letter(letter_to_index(letter)?);
        self.chain.step();

        let entry = letter_to_index(self.plugboard.encode(letter))?;
        let index = self.chain.encode_forward(entry);
        let index = self.reflector.encode(index);
        let index = self.chain.encode_backward(index);
        Ok(self.plugboard.encode(index_to_letter(index)))
    }

    /// Enciphers a text of letters and spaces.
    ///
    /// Letters are uppercased and each consumes one rotor step. Spaces are
    /// dropped without stepping the rotors.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::InvalidText`] naming the first character
    /// that is neither an ASCII letter nor a space. Validation happens
    /// before any letter is processed, so the rotors do not move.
    pub fn encipher(&mut self, text: &str) -> Result<String, RotorCryptError> {
        if let Some(bad) = text
            .chars()
            .find(|c| !c.is_ascii_alphabetic() && *c != ' ')
        {
            return Err(RotorCryptError::InvalidText(bad));
        }

        text.chars()
            .filter(|c| *c != ' ')
            .map(|c| self.encode_decode_letter(c))
            .collect()
    }

    /// Deciphers a text of letters and spaces.
    ///
    /// Identical to [`encipher`](Self::encipher): the machine is its own
    /// inverse.
    ///
    /// # Errors
    /// Same as [`encipher`](Self::encipher).
    pub fn decipher(&mut self, text: &str) -> Result<String, RotorCryptError> {
        self.encipher(text)
    }

    /// Sets the rotor windows directly, bypassing the stepping protocol.
    ///
    /// The new position also becomes the target of [`reset`](Self::reset).
    /// When `announce` is set the change is logged at `info` level.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::InvalidKey`] unless `key` is exactly
    /// three letters; the rotors are left unchanged.
    pub fn set_rotor_position(&mut self, key: &str, announce: bool) -> Result<(), RotorCryptError> {
        let offsets = parse_key(key)?;
        self.chain.set_offsets(offsets);
        self.initial_key = offsets;
        if announce {
            info!(
                "Rotor position successfully updated. Now using {}.",
                self.key()
            );
        } else {
            debug!(key = %self.key(), "rotor position updated");
        }
        Ok(())
    }

    /// Replaces the rotors with new catalog types ordered left, middle,
    /// right. Each slot keeps its current offset.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::InvalidRotorOrder`] or
    /// [`RotorCryptError::UnknownRotor`]; the chain is left unchanged.
    pub fn set_rotor_order<R: AsRef<str>>(&mut self, order: &[R]) -> Result<(), RotorCryptError> {
        let order = parse_rotor_order(order)?;
        self.chain = RotorChain::new(order, self.chain.offsets());
        debug!(machine = %self, "rotor order updated");
        Ok(())
    }

    /// Adds or replaces plug pairs. See [`Plugboard::update_swaps`].
    ///
    /// # Errors
    /// Any plugboard error; the board is left unchanged.
    pub fn set_plugs<S: AsRef<str>>(
        &mut self,
        pairs: Option<&[S]>,
        replace: bool,
    ) -> Result<(), RotorCryptError> {
        self.plugboard.update_swaps(pairs, replace)
    }

    /// Returns the rotors to the last explicitly set position.
    pub fn reset(&mut self) {
        self.chain.set_offsets(self.initial_key);
    }

    /// Current windows read left to right.
    pub fn key(&self) -> String {
        self.chain.key()
    }

    /// Rotor types ordered left, middle, right.
    pub fn rotor_order(&self) -> [RotorType; CHAIN_LEN] {
        self.chain.order()
    }

    /// Letter in the window of the rotor in `slot`.
    pub fn rotor_window(&self, slot: RotorSlot) -> char {
        self.chain.window(slot)
    }

    /// The plugboard.
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    /// The reflector.
    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    /// The rotor chain.
    pub fn chain(&self) -> &RotorChain {
        &self.chain
    }
}

impl fmt::Display for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [left, middle, right] = self.chain.order();
        write!(
            f,
            "Keyboard <-> Plugboard <-> Rotor {} <-> Rotor {} <-> Rotor {} <-> Reflector | Key: {}",
            left,
            middle,
            right,
            self.key()
        )
    }
}

/// Parses three rotor catalog names ordered left, middle, right.
fn parse_rotor_order<R: AsRef<str>>(order: &[R]) -> Result<[RotorType; CHAIN_LEN], RotorCryptError> {
    let [left, middle, right] = order else {
        return Err(RotorCryptError::InvalidRotorOrder(order.len()));
    };
    Ok([
        left.as_ref().parse()?,
        middle.as_ref().parse()?,
        right.as_ref().parse()?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDER: [&str; 3] = ["I", "II", "III"];

    fn valid_machine() -> Machine {
        Machine::new("AAA", Some(&["AB", "CD"][..]), &ORDER).unwrap()
    }

    #[test]
    fn test_new_sets_key_and_order() {
        let m = valid_machine();
        assert_eq!(m.key(), "AAA");
        assert_eq!(m.rotor_order(), [RotorType::I, RotorType::II, RotorType::III]);
        assert_eq!(m.plugboard().pair_count(), 2);
    }

    #[test]
    fn test_invalid_key() {
        let result = Machine::new("AA", None::<&[&str]>, &ORDER);
        assert_eq!(result.unwrap_err(), RotorCryptError::InvalidKey("AA".to_string()));
    }

    #[test]
    fn test_invalid_rotor_order() {
        let result = Machine::new("AAA", None::<&[&str]>, &["I", "II"]);
        assert_eq!(result.unwrap_err(), RotorCryptError::InvalidRotorOrder(2));

        let result = Machine::new("AAA", None::<&[&str]>, &["I", "II", "IV"]);
        assert_eq!(
            result.unwrap_err(),
            RotorCryptError::UnknownRotor("IV".to_string())
        );
    }

    #[test]
    fn test_invalid_swaps() {
        let result = Machine::new("AAA", Some(&["AB", "BC"][..]), &ORDER);
        assert_eq!(result.unwrap_err(), RotorCryptError::PlugLetterReused('B'));
    }

    #[test]
    fn test_encipher_known_vector() {
        let mut m = valid_machine();
        assert_eq!(m.encipher("Hello World").unwrap(), "ILACBBMTBE");
        assert_eq!(m.key(), "AAK");
    }

    #[test]
    fn test_decipher_known_vector() {
        let mut m = valid_machine();
        assert_eq!(m.decipher("ILACBBMTBE").unwrap(), "HELLOWORLD");
    }

    #[test]
    fn test_encipher_invalid_text_no_step() {
        let mut m = valid_machine();
        assert_eq!(
            m.encipher("Hello 12!"),
            Err(RotorCryptError::InvalidText('1'))
        );
        assert_eq!(m.key(), "AAA");
    }

    #[test]
    fn test_encode_decode_letter_steps_first() {
        let mut m = valid_machine();
        // 'H' enciphers to 'I' at AAB.
        assert_eq!(m.encode_decode_letter('h'), Ok('I'));
        assert_eq!(m.key(), "AAB");
    }

    #[test]
    fn test_encode_decode_letter_invalid() {
        let mut m = valid_machine();
        assert_eq!(
            m.encode_decode_letter('4'),
            Err(RotorCryptError::InvalidLetter('4'))
        );
        assert_eq!(
            m.encode_decode_letter(' '),
            Err(RotorCryptError::InvalidLetter(' '))
        );
        assert_eq!(m.key(), "AAA");
    }

    #[test]
    fn test_repeated_letter_steps_each_time() {
        let mut m = valid_machine();
        let out = m.encipher("AAAAA").unwrap();
        assert_eq!(m.key(), "AAF");
        assert!(!out.contains('A'));
    }

    #[test]
    fn test_set_rotor_position() {
        let mut m = valid_machine();
        m.set_rotor_position("XYZ", true).unwrap();
        assert_eq!(m.key(), "XYZ");
        assert_eq!(m.rotor_window(RotorSlot::Left), 'X');
        assert_eq!(m.rotor_window(RotorSlot::Middle), 'Y');
        assert_eq!(m.rotor_window(RotorSlot::Right), 'Z');

        assert_eq!(
            m.set_rotor_position("MNOP", false),
            Err(RotorCryptError::InvalidKey("MNOP".to_string()))
        );
        assert!(m.set_rotor_position("333", false).is_err());
        assert_eq!(m.key(), "XYZ");

        m.set_rotor_position("xyz", false).unwrap();
        assert_eq!(m.key(), "XYZ");
    }

    #[test]
    fn test_set_rotor_order_relinks_and_keeps_offsets() {
        let mut m = valid_machine();
        m.set_rotor_position("XYZ", false).unwrap();
        m.set_rotor_order(&["II", "III", "I"]).unwrap();
        assert_eq!(m.rotor_order(), [RotorType::II, RotorType::III, RotorType::I]);
        assert_eq!(m.key(), "XYZ");

        let chain = m.chain();
        let arena = chain.arena();
        let left = chain.rotor(RotorSlot::Left);
        let middle = chain.rotor(RotorSlot::Middle);
        let right = chain.rotor(RotorSlot::Right);
        assert_eq!(arena.kind(arena.prev(middle).unwrap()), RotorType::I);
        assert_eq!(arena.kind(arena.prev(left).unwrap()), RotorType::III);
        assert_eq!(arena.next(right), Some(middle));
    }

    #[test]
    fn test_set_rotor_order_invalid_keeps_chain() {
        let mut m = valid_machine();
        assert!(m.set_rotor_order(&["II", "V", "I"]).is_err());
        assert_eq!(m.rotor_order(), [RotorType::I, RotorType::II, RotorType::III]);
    }

    #[test]
    fn test_set_plugs() {
        let mut m = valid_machine();
        m.set_plugs(Some(&["ST", "UV"][..]), true).unwrap();
        assert_eq!(m.plugboard().pairs(), vec!["ST", "UV"]);
        m.set_plugs(Some(&["PQ"][..]), false).unwrap();
        assert_eq!(m.plugboard().pairs(), vec!["PQ", "ST", "UV"]);
        m.set_plugs(None::<&[&str]>, true).unwrap();
        assert_eq!(m.plugboard().pair_count(), 0);
    }

    #[test]
    fn test_reset_restores_start() {
        let mut m = valid_machine();
        let first = m.encipher("HELLOWORLD").unwrap();
        m.reset();
        assert_eq!(m.key(), "AAA");
        assert_eq!(m.encipher("HELLOWORLD").unwrap(), first);
    }

    #[test]
    fn test_reflector_changes_output() {
        let mut b = valid_machine();
        let mut c = valid_machine().with_reflector(ReflectorType::C);
        assert_ne!(b.encipher("HELLOWORLD").unwrap(), c.encipher("HELLOWORLD").unwrap());
    }

    #[test]
    fn test_settings_roundtrip() {
        let m = valid_machine().with_reflector(ReflectorType::C);
        let settings = m.settings();
        assert_eq!(settings.key, "AAA");
        assert_eq!(settings.swaps, vec!["AB", "CD"]);
        assert_eq!(settings.reflector, "C");
        let rebuilt = Machine::from_settings(&settings).unwrap();
        assert_eq!(rebuilt.settings(), settings);
    }

    #[test]
    fn test_display() {
        let m = valid_machine();
        assert_eq!(
            format!("{}", m),
            "Keyboard <-> Plugboard <-> Rotor I <-> Rotor II <-> Rotor III <-> Reflector | Key: AAA"
        );
    }
}
