//! RotorChain: three rotors linked right → middle → left.
//!
//! The chain owns its rotors in a [`RotorArena`] and implements the
//! keystroke stepping protocol, including the double-step of the middle
//! rotor.

use tracing::trace;

use crate::catalog::RotorType;
use crate::rotor::{Direction, RotorArena, RotorId, RotorSlot};
use crate::utils::letters::index_to_letter;

/// Number of rotors in the chain.
pub const CHAIN_LEN: usize = 3;

/// Right, middle and left rotors linked as a chain.
///
/// Rotor types and offsets are given left-to-right, matching the order in
/// which the windows are read as a key: the right rotor is the last
/// character.
#[derive(Debug, Clone)]
pub struct RotorChain {
    arena: RotorArena,
    left: RotorId,
    middle: RotorId,
    right: RotorId,
}

impl RotorChain {
    /// Builds a chain from rotor types and offsets, both ordered
    /// (left, middle, right).
    pub fn new(order: [RotorType; CHAIN_LEN], offsets: [usize; CHAIN_LEN]) -> Self {
        let mut arena = RotorArena::new();
        let left = arena.new_rotor_at(order[0], offsets[0]);
        let middle = arena.new_rotor_at(order[1], offsets[1]);
        let right = arena.new_rotor_at(order[2], offsets[2]);

        arena.set_chain(right, RotorSlot::Right, None, Some(middle));
        arena.set_chain(middle, RotorSlot::Middle, Some(right), Some(left));
        arena.set_chain(left, RotorSlot::Left, Some(middle), None);

        RotorChain {
            arena,
            left,
            middle,
            right,
        }
    }

    /// Advances the chain for one keystroke.
    ///
    /// Notch conditions are read before any rotor moves:
    /// 1. A middle rotor sitting on its notch advances together with the
    ///    left rotor (double step).
    /// 2. Otherwise a right rotor on its notch carries the middle rotor.
    /// 3. The right rotor always advances.
    pub fn step(&mut self) {
        let middle_at_notch = self.arena.at_notch(self.middle);
        let right_at_notch = self.arena.at_notch(self.right);

        if middle_at_notch {
            self.arena.rotate(self.middle);
            self.arena.rotate(self.left);
        } else if right_at_notch {
            self.arena.rotate(self.middle);
        }
        self.arena.rotate(self.right);

        trace!(
            key = %self.key(),
            carried = right_at_notch,
            double_step = middle_at_notch,
            "rotors stepped"
        );
    }

    /// Passes the signal from the plugboard side through right, middle
    /// and left rotors.
    pub fn encode_forward(&self, index: usize) -> usize {
        self.arena
            .encode_by_index(self.right, index, Direction::Forward)
    }

    /// Passes the signal from the reflector side through left, middle
    /// and right rotors.
    pub fn encode_backward(&self, index: usize) -> usize {
        self.arena
            .encode_by_index(self.left, index, Direction::Backward)
    }

    /// Returns the rotor in `slot`.
    pub fn rotor(&self, slot: RotorSlot) -> RotorId {
        match slot {
            RotorSlot::Left => self.left,
            RotorSlot::Middle => self.middle,
            RotorSlot::Right => self.right,
        }
    }

    /// Read access to the rotors.
    pub fn arena(&self) -> &RotorArena {
        &self.arena
    }

    /// Rotor types ordered (left, middle, right).
    pub fn order(&self) -> [RotorType; CHAIN_LEN] {
        [
            self.arena.kind(self.left),
            self.arena.kind(self.middle),
            self.arena.kind(self.right),
        ]
    }

    /// Offsets ordered (left, middle, right).
    pub fn offsets(&self) -> [usize; CHAIN_LEN] {
        [
            self.arena.offset(self.left),
            self.arena.offset(self.middle),
            self.arena.offset(self.right),
        ]
    }

    /// Sets all offsets directly, bypassing the stepping protocol.
    pub fn set_offsets(&mut self, offsets: [usize; CHAIN_LEN]) {
        self.arena.set_offset(self.left, offsets[0]);
        self.arena.set_offset(self.middle, offsets[1]);
        self.arena.set_offset(self.right, offsets[2]);
    }

    /// Letter shown in the window of the rotor in `slot`.
    pub fn window(&self, slot: RotorSlot) -> char {
        self.arena.window(self.rotor(slot))
    }

    /// Current windows read left to right, e.g. `"AAZ"`.
    pub fn key(&self) -> String {
        self.offsets().iter().map(|&o| index_to_letter(o)).collect()
    }
}
