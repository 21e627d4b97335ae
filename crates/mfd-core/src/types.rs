use serde::{Deserialize, Serialize};

/// One catalog entry pairing a named fault with its frequency signature.
///
/// Records are created at catalog-load time and read-only thereafter. The
/// `signature` text is free-form author input; the engine classifies it
/// into a closed rule set rather than parsing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaultSignature {
    /// Fault label, e.g. "Balourd" or "Desalignement".
    pub name: String,
    /// Free-text description of the characteristic frequency pattern.
    pub signature: String,
    /// Vibration direction the fault is known to excite, free text
    /// (e.g. "Axiale", "Radiale", "Axiale et radiale").
    #[serde(default)]
    pub direction: String,
    /// Free-text remarks about the probable cause.
    #[serde(default)]
    pub cause: String,
}

impl FaultSignature {
    /// Creates a new signature record from its four fields.
    pub fn new(
        name: impl Into<String>,
        signature: impl Into<String>,
        direction: impl Into<String>,
        cause: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            signature: signature.into(),
            direction: direction.into(),
            cause: cause.into(),
        }
    }
}
