//! Page content loaded from `assets/site.toml`.

use std::collections::HashSet;

use serde::Deserialize;

use super::{LinkEntry, PaymentProof, ProofId};
use crate::core::error::ConfigError;
use crate::utils::validate_link_url;

/// Profile header shown above the links.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub image: String,
    pub image_alt: String,
}

/// Payment section: QR proofs plus the address payment confirmations go to.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Payments {
    pub heading: String,
    pub contact_email: String,
    #[serde(default)]
    pub proofs: Vec<PaymentProof>,
}

/// Everything the page renders besides chrome.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SiteConfig {
    pub profile: Profile,
    /// Display order is file order.
    #[serde(default)]
    pub links: Vec<LinkEntry>,
    pub payments: Payments,
}

impl SiteConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Look up a proof by id.
    pub fn proof(&self, id: &ProofId) -> Option<&PaymentProof> {
        self.payments.proofs.iter().find(|p| &p.id == id)
    }

    /// Mail link for the payment instructions.
    pub fn contact_href(&self) -> String {
        format!("mailto:{}", self.payments.contact_email)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        require("profile.name", &self.profile.name)?;
        require("payments.contact_email", &self.payments.contact_email)?;

        for link in &self.links {
            require("links.name", &link.name)?;
            validate_link_url(&link.url).map_err(|source| ConfigError::InvalidLinkUrl {
                name: link.name.clone(),
                source,
            })?;
        }

        let mut seen = HashSet::new();
        for proof in &self.payments.proofs {
            require("payments.proofs.id", proof.id.as_str())?;
            if !seen.insert(proof.id.as_str()) {
                return Err(ConfigError::DuplicateProof(proof.id.to_string()));
            }
        }

        Ok(())
    }
}

fn require(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        Err(ConfigError::EmptyField(field))
    } else {
        Ok(())
    }
}
