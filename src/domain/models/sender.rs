use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::DomainError;

/// Who the caller says sent the transmission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SenderHint {
    /// Let the model decide between pilot and ATC.
    #[default]
    Auto,
    Pilot,
    Atc,
}

impl SenderHint {
    pub fn as_str(&self) -> &'static str {
        match self {
            SenderHint::Auto => "AUTO",
            SenderHint::Pilot => "PILOT",
            SenderHint::Atc => "ATC",
        }
    }

    pub fn all() -> [SenderHint; 3] {
        [SenderHint::Auto, SenderHint::Pilot, SenderHint::Atc]
    }
}

impl FromStr for SenderHint {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "AUTO" => Ok(SenderHint::Auto),
            "PILOT" => Ok(SenderHint::Pilot),
            "ATC" => Ok(SenderHint::Atc),
            other => Err(DomainError::invalid_input(format!(
                "unknown sender hint '{other}', expected AUTO, PILOT or ATC"
            ))),
        }
    }
}

impl std::fmt::Display for SenderHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
