//! Machine settings loadable from TOML.
//!
//! ```
//! use rotorcrypt::settings::MachineSettings;
//!
//! let settings = MachineSettings::from_toml_str(
//!     r#"
//!     key = "AAA"
//!     swaps = ["AB", "CD"]
//!     rotor_order = ["I", "II", "III"]
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(settings.reflector, "B");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::RotorCryptError;

/// Starting configuration of a [`Machine`](crate::Machine).
///
/// Missing fields fall back to [`Default`]: key `AAA`, no plug pairs,
/// rotors `I II III` and reflector `B`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MachineSettings {
    /// Initial windows read left to right.
    pub key: String,
    /// Plug pairs such as `"AB"`.
    pub swaps: Vec<String>,
    /// Rotor catalog names ordered left, middle, right.
    pub rotor_order: Vec<String>,
    /// Reflector catalog name.
    pub reflector: String,
}

impl Default for MachineSettings {
    fn default() -> Self {
        MachineSettings {
            key: "AAA".to_string(),
            swaps: Vec::new(),
            rotor_order: vec!["I".to_string(), "II".to_string(), "III".to_string()],
            reflector: "B".to_string(),
        }
    }
}

impl MachineSettings {
    /// Parses settings from a TOML document.
    ///
    /// Only the document structure is checked here; values are validated
    /// when the machine is built.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::Settings`] if the TOML is malformed or
    /// contains unknown fields.
    pub fn from_toml_str(input: &str) -> Result<Self, RotorCryptError> {
        toml::from_str(input).map_err(|e| RotorCryptError::Settings(e.to_string()))
    }

    /// Serialises the settings as a TOML document.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::Settings`] if serialisation fails.
    pub fn to_toml_string(&self) -> Result<String, RotorCryptError> {
        toml::to_string(self).map_err(|e| RotorCryptError::Settings(e.to_string()))
    }
}
