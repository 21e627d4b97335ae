#![deny(missing_docs)]
#![doc = "Core data types for the machine fault diagnosis engine."]

pub mod errors;
pub mod input;
pub mod params;
pub mod provenance;
mod types;

pub use errors::{ErrorInfo, MfdError};
pub use input::{parse_measured_frequencies, MEASURED_DIRECTIONS};
pub use params::MachineParameters;
pub use provenance::SchemaVersion;
pub use types::FaultSignature;
