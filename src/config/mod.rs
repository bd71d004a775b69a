//! Machine configuration.
//!
//! The only knob is how the machine reacts to a transition registered with a
//! missing endpoint. The default reproduces the silent behavior expected on
//! a control loop; `Reject` turns it into an error for tests and tooling.
//!
//! # Example
//!
//! ```rust
//! use tickfsm::config::{InvalidInputPolicy, MachineConfig};
//!
//! let config: MachineConfig = serde_json::from_str(r#"{ "on_invalid": "reject" }"#).unwrap();
//! assert_eq!(config.on_invalid, InvalidInputPolicy::Reject);
//!
//! assert_eq!(MachineConfig::default(), MachineConfig::lenient());
//! ```

use serde::{Deserialize, Serialize};

/// Reaction to a registration with a missing endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidInputPolicy {
    /// Drop the registration and carry on
    #[default]
    Ignore,

    /// Drop the registration and report it as an error
    Reject,
}

/// Settings for a `StateMachine`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    pub on_invalid: InvalidInputPolicy,
}

impl MachineConfig {
    /// Ignore invalid registrations (the default).
    pub fn lenient() -> Self {
        Self {
            on_invalid: InvalidInputPolicy::Ignore,
        }
    }

    /// Reject invalid registrations with an error.
    pub fn strict() -> Self {
        Self {
            on_invalid: InvalidInputPolicy::Reject,
        }
    }

    pub fn rejects_invalid(&self) -> bool {
        self.on_invalid == InvalidInputPolicy::Reject
    }
}
