//! Machine characteristics supplied by the operator for one diagnosis run.

use serde::{Deserialize, Serialize};

/// Named machine characteristics used when evaluating fault signatures.
///
/// Every field defaults to zero; an unspecified parameter therefore
/// behaves as zero throughout the engine. The set is immutable for the
/// duration of one diagnosis run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct MachineParameters {
    /// Shaft rotation frequency in Hz.
    #[serde(default)]
    pub fr: f64,
    /// Electrical supply frequency in Hz.
    #[serde(default)]
    pub fs: f64,
    /// Gear tooth count.
    #[serde(default)]
    pub z: f64,
    /// Bearing rolling-element count.
    #[serde(default)]
    pub nb: f64,
    /// Rolling-element diameter in metres.
    #[serde(default)]
    pub db: f64,
    /// Bearing pitch diameter in metres.
    #[serde(default)]
    pub dp: f64,
    /// Bearing contact angle in radians.
    #[serde(default)]
    pub theta: f64,
    /// Known critical (resonance) frequency in Hz, when available.
    #[serde(default)]
    pub f_critical: f64,
    /// Belt passing frequency in Hz.
    #[serde(default)]
    pub fp: f64,
    /// Induction motor slip (dimensionless).
    #[serde(default)]
    pub g: f64,
    /// Pole-pair count.
    #[serde(default)]
    pub nr: f64,
    /// Blade passing frequency in Hz.
    #[serde(default)]
    pub f_blades: f64,
}

impl MachineParameters {
    /// Sets the contact angle from a value in degrees.
    ///
    /// This is the only unit conversion the engine performs; every other
    /// field is stored exactly as supplied.
    pub fn with_contact_angle_degrees(mut self, degrees: f64) -> Self {
        self.theta = degrees.to_radians();
        self
    }
}
