//! Risk-classifier boundary contract
//!
//! The classifier is an external collaborator; this module fixes only its
//! input/output contract. The core consumes the resulting label string for
//! the advice prompt and needs nothing else from it.

use crate::population::UserProfile;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Binary depression-risk outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLabel {
    Yes,
    No,
}

impl RiskLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }

    /// Map a classifier's numeric class id (1 = at risk, 0 = not)
    pub fn from_class_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::Yes),
            0 => Some(Self::No),
            _ => None,
        }
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "1" => Ok(Self::Yes),
            "no" | "0" => Ok(Self::No),
            other => Err(format!("unknown risk label '{other}', expected Yes or No")),
        }
    }
}

/// External collaborator exposing one operation: profile in, label out
pub trait RiskClassifier {
    fn predict(&self, profile: &UserProfile) -> Result<RiskLabel>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_parsing() {
        assert_eq!("Yes".parse::<RiskLabel>().unwrap(), RiskLabel::Yes);
        assert_eq!("no".parse::<RiskLabel>().unwrap(), RiskLabel::No);
        assert_eq!("1".parse::<RiskLabel>().unwrap(), RiskLabel::Yes);
        assert_eq!("0".parse::<RiskLabel>().unwrap(), RiskLabel::No);
        assert!("maybe".parse::<RiskLabel>().is_err());
    }

    #[test]
    fn test_class_id_mapping() {
        assert_eq!(RiskLabel::from_class_id(1), Some(RiskLabel::Yes));
        assert_eq!(RiskLabel::from_class_id(0), Some(RiskLabel::No));
        assert_eq!(RiskLabel::from_class_id(7), None);
    }

    #[test]
    fn test_boundary_contract_is_implementable() {
        struct AlwaysNo;
        impl RiskClassifier for AlwaysNo {
            fn predict(&self, _profile: &UserProfile) -> Result<RiskLabel> {
                Ok(RiskLabel::No)
            }
        }

        let label = AlwaysNo.predict(&UserProfile::new()).unwrap();
        assert_eq!(label.as_str(), "No");
    }
}
