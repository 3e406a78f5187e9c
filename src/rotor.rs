//! Rotor: rotating substitution disc.
//!
//! Each rotor holds a fixed catalog wiring, a turnover notch and a mutable
//! offset. Rotors are linked to their neighbours so a signal entering one
//! rotor continues through the rest of the chain.
//!
//! Uses an arena-based design to avoid cyclic references. All rotors are
//! stored in a [`RotorArena`] and referenced by [`RotorId`]; `next` points
//! toward the reflector and `prev` toward the plugboard.

use std::fmt;

use crate::catalog::{RotorType, Wiring};
use crate::error::RotorCryptError;
use crate::utils::letters::{
    index_to_letter, letter_to_index, rotate_backward, rotate_forward, ALPHABET_LEN,
};

/// Unique identifier for a rotor within an arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorId(pub usize);

/// Position of a rotor in the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotorSlot {
    /// Fastest rotor, next to the plugboard.
    Right,
    Middle,
    /// Slowest rotor, next to the reflector.
    Left,
}

/// Direction of the signal through the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Plugboard to reflector, following `next` links.
    Forward,
    /// Reflector to plugboard, following `prev` links.
    Backward,
}

/// Internal state of a single rotor.
#[derive(Debug, Clone)]
struct RotorData {
    kind: RotorType,
    wiring: &'static Wiring,
    notch: usize,
    offset: usize,
    slot: RotorSlot,
    next: Option<RotorId>,
    prev: Option<RotorId>,
}

/// Arena owning a set of rotors and their neighbour links.
#[derive(Debug, Clone, Default)]
pub struct RotorArena {
    rotors: Vec<RotorData>,
}

impl RotorArena {
    /// Creates a new empty arena.
    pub fn new() -> Self {
        RotorArena { rotors: Vec::new() }
    }

    /// Creates a new rotor showing `window` and adds it to the arena.
    ///
    /// The rotor starts unlinked in the [`RotorSlot::Right`] slot; chains
    /// assign slots and links with [`set_chain`](Self::set_chain).
    ///
    /// # Errors
    /// Returns [`RotorCryptError::InvalidLetter`] if `window` is not a letter.
    pub fn new_rotor(&mut self, kind: RotorType, window: char) -> Result<RotorId, RotorCryptError> {
        let offset = letter_to_index(window)?;
        Ok(self.new_rotor_at(kind, offset))
    }

    /// Creates a new rotor at a numeric offset (taken modulo 26).
    pub fn new_rotor_at(&mut self, kind: RotorType, offset: usize) -> RotorId {
        let id = RotorId(self.rotors.len());
        // Catalog notches are always letters.
        let notch = (kind.notch() as u8 - b'A') as usize;
        self.rotors.push(RotorData {
            kind,
            wiring: kind.wiring(),
            notch,
            offset: offset % ALPHABET_LEN,
            slot: RotorSlot::Right,
            next: None,
            prev: None,
        });
        id
    }

    /// Returns the number of rotors in the arena.
    pub fn len(&self) -> usize {
        self.rotors.len()
    }

    /// Returns `true` if the arena holds no rotors.
    pub fn is_empty(&self) -> bool {
        self.rotors.is_empty()
    }

    /// Places a rotor in `slot` and links it to its neighbours.
    pub fn set_chain(
        &mut self,
        id: RotorId,
        slot: RotorSlot,
        prev: Option<RotorId>,
        next: Option<RotorId>,
    ) {
        let rotor = &mut self.rotors[id.0];
        rotor.slot = slot;
        rotor.prev = prev;
        rotor.next = next;
    }

    /// Advances the rotor by one position. Neighbours are not touched;
    /// the carry protocol lives in the chain.
    pub fn rotate(&mut self, id: RotorId) {
        let rotor = &mut self.rotors[id.0];
        rotor.offset = rotate_forward(rotor.offset, 1);
    }

    /// Sets the window directly, bypassing the stepping protocol.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::InvalidLetter`] if `letter` is not a
    /// letter; the rotor is left unchanged.
    pub fn change_setting(&mut self, id: RotorId, letter: char) -> Result<(), RotorCryptError> {
        let offset = letter_to_index(letter)?;
        self.set_offset(id, offset);
        Ok(())
    }

    /// Sets the offset directly (taken modulo 26).
    pub fn set_offset(&mut self, id: RotorId, offset: usize) {
        self.rotors[id.0].offset = offset % ALPHABET_LEN;
    }

    /// Passes the signal at contact `index` through this rotor and every
    /// rotor beyond it in `direction`, returning the exit contact.
    pub fn encode_by_index(&self, id: RotorId, index: usize, direction: Direction) -> usize {
        let mut current = Some(id);
        let mut index = index % ALPHABET_LEN;
        while let Some(rid) = current {
            let rotor = &self.rotors[rid.0];
            let contact = rotate_forward(index, rotor.offset);
            let wired = match direction {
                Direction::Forward => rotor.wiring.forward(contact),
                Direction::Backward => rotor.wiring.backward(contact),
            };
            index = rotate_backward(wired, rotor.offset);
            current = match direction {
                Direction::Forward => rotor.next,
                Direction::Backward => rotor.prev,
            };
        }
        index
    }

    /// Letter-level form of [`encode_by_index`](Self::encode_by_index).
    ///
    /// # Errors
    /// Returns [`RotorCryptError::InvalidLetter`] if `letter` is not a letter.
    pub fn encode_by_letter(
        &self,
        id: RotorId,
        letter: char,
        direction: Direction,
    ) -> Result<char, RotorCryptError> {
        let index = letter_to_index(letter)?;
        Ok(index_to_letter(self.encode_by_index(id, index, direction)))
    }

    /// Returns `true` if the rotor's window shows its notch letter.
    pub fn at_notch(&self, id: RotorId) -> bool {
        let rotor = &self.rotors[id.0];
        rotor.offset == rotor.notch
    }

    // --- Getters ---

    /// Returns the rotor's catalog type.
    pub fn kind(&self, id: RotorId) -> RotorType {
        self.rotors[id.0].kind
    }

    /// Returns the current offset in `0..26`.
    pub fn offset(&self, id: RotorId) -> usize {
        self.rotors[id.0].offset
    }

    /// Returns the letter currently shown in the rotor window.
    pub fn window(&self, id: RotorId) -> char {
        index_to_letter(self.rotors[id.0].offset)
    }

    /// Returns the rotor's notch letter.
    pub fn notch(&self, id: RotorId) -> char {
        index_to_letter(self.rotors[id.0].notch)
    }

    /// Returns the slot the rotor occupies.
    pub fn slot(&self, id: RotorId) -> RotorSlot {
        self.rotors[id.0].slot
    }

    /// Returns the neighbour toward the reflector.
    pub fn next(&self, id: RotorId) -> Option<RotorId> {
        self.rotors[id.0].next
    }

    /// Returns the neighbour toward the plugboard.
    pub fn prev(&self, id: RotorId) -> Option<RotorId> {
        self.rotors[id.0].prev
    }

    /// Borrows a rotor for display.
    pub fn describe(&self, id: RotorId) -> RotorView<'_> {
        RotorView { arena: self, id }
    }
}

/// Display adapter for a single rotor.
pub struct RotorView<'a> {
    arena: &'a RotorArena,
    id: RotorId,
}

impl fmt::Display for RotorView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rotor = &self.arena.rotors[self.id.0];
        write!(
            f,
            "Rotor {} wiring: {} window: {}",
            rotor.kind,
            rotor.wiring.letters(),
            self.arena.window(self.id)
        )
    }
}
