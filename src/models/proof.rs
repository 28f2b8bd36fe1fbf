//! Payment proof (QR code) descriptors.

use std::fmt;

use serde::Deserialize;

/// Identifier of a payment proof, unique within the site config.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct ProofId(String);

impl ProofId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProofId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A payment QR image the visitor can enlarge.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PaymentProof {
    pub id: ProofId,
    /// Caption under the thumbnail.
    pub title: String,
    /// Opaque asset path.
    pub src: String,
    pub alt: String,
}
