//! rotorcrypt: three-rotor electromechanical cipher machine.
//!
//! The machine enciphers text one letter at a time through a reversible
//! substitution pipeline. Rotors step before every letter, so the same
//! plaintext letter produces different ciphertext as the message advances,
//! and the same machine settings turn the ciphertext back into plaintext.
//!
//! # Architecture
//!
//! ```text
//! Plugboard   (≤ 6 symmetric letter swaps)
//!     ↕
//! RotorChain  (right → middle → left, arena-linked; owns the double-step protocol)
//!     ↕
//! Reflector   (fixed-point-free involution)
//! ```
//!
//! [`Machine`] composes the stages for each keystroke:
//! step, plugboard, rotors forward, reflector, rotors backward, plugboard.
//!
//! # Examples
//!
//! Encipher and decipher a message:
//!
//! ```
//! use rotorcrypt::Machine;
//!
//! let mut encoder = Machine::new("AAA", Some(&["AB", "CD"][..]), &["I", "II", "III"]).unwrap();
//! let ciphertext = encoder.encipher("Hello World").unwrap();
//! assert_eq!(ciphertext, "ILACBBMTBE");
//!
//! let mut decoder = Machine::new("AAA", Some(&["AB", "CD"][..]), &["I", "II", "III"]).unwrap();
//! assert_eq!(decoder.decipher(&ciphertext).unwrap(), "HELLOWORLD");
//! ```
//!
//! Build a machine from TOML settings:
//!
//! ```
//! use rotorcrypt::settings::MachineSettings;
//! use rotorcrypt::Machine;
//!
//! let settings = MachineSettings::from_toml_str(
//!     r#"
//!     key = "ELQ"
//!     swaps = ["AB", "TG"]
//!     rotor_order = ["II", "I", "III"]
//!     "#,
//! )
//! .unwrap();
//! let mut machine = Machine::from_settings(&settings).unwrap();
//! assert!(machine.encipher("My name is Sarwar").is_ok());
//! ```

#![deny(clippy::all)]

pub mod catalog;
pub mod error;
pub mod plugboard;
pub mod reflector;
pub mod rotor;
pub mod rotor_chain;
pub mod settings;
pub mod utils;

mod machine;

pub use error::RotorCryptError;
pub use machine::Machine;
