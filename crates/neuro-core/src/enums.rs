//! Closed-set clinical enums.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and reject unknown tokens on deserialization. Downstream collaborators
//! (persistence, analysis agents) rely on these sets being closed.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Gender
// ---------------------------------------------------------------------------

/// Patient gender options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Return the string token used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// NeurologicalCondition
// ---------------------------------------------------------------------------

/// Neurological conditions the tracker supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum NeurologicalCondition {
    Epilepsy,
    Migraine,
    Parkinsons,
    MultipleSclerosis,
    Alzheimers,
    Stroke,
    Neuropathy,
    Other,
}

impl NeurologicalCondition {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Epilepsy => "epilepsy",
            Self::Migraine => "migraine",
            Self::Parkinsons => "parkinsons",
            Self::MultipleSclerosis => "multiple_sclerosis",
            Self::Alzheimers => "alzheimers",
            Self::Stroke => "stroke",
            Self::Neuropathy => "neuropathy",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for NeurologicalCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PrognosisTrend
// ---------------------------------------------------------------------------

/// Direction of a clinical trend over a patient's visit history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PrognosisTrend {
    Improving,
    Stable,
    Declining,
    Unknown,
}

impl PrognosisTrend {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Stable => "stable",
            Self::Declining => "declining",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PrognosisTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SeverityLevel
// ---------------------------------------------------------------------------

/// Severity classification for a patient's current or predicted state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SeverityLevel {
    Mild,
    Moderate,
    Severe,
    Critical,
}

impl SeverityLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(gender_male, Gender, Gender::Male, "male");
    test_serde_roundtrip!(gender_female, Gender, Gender::Female, "female");
    test_serde_roundtrip!(gender_other, Gender, Gender::Other, "other");

    test_serde_roundtrip!(
        condition_epilepsy,
        NeurologicalCondition,
        NeurologicalCondition::Epilepsy,
        "epilepsy"
    );
    test_serde_roundtrip!(
        condition_multiple_sclerosis,
        NeurologicalCondition,
        NeurologicalCondition::MultipleSclerosis,
        "multiple_sclerosis"
    );
    test_serde_roundtrip!(
        condition_parkinsons,
        NeurologicalCondition,
        NeurologicalCondition::Parkinsons,
        "parkinsons"
    );
    test_serde_roundtrip!(
        condition_alzheimers,
        NeurologicalCondition,
        NeurologicalCondition::Alzheimers,
        "alzheimers"
    );

    test_serde_roundtrip!(
        trend_improving,
        PrognosisTrend,
        PrognosisTrend::Improving,
        "improving"
    );
    test_serde_roundtrip!(
        trend_declining,
        PrognosisTrend,
        PrognosisTrend::Declining,
        "declining"
    );
    test_serde_roundtrip!(
        trend_unknown,
        PrognosisTrend,
        PrognosisTrend::Unknown,
        "unknown"
    );

    test_serde_roundtrip!(severity_mild, SeverityLevel, SeverityLevel::Mild, "mild");
    test_serde_roundtrip!(
        severity_critical,
        SeverityLevel,
        SeverityLevel::Critical,
        "critical"
    );

    #[test]
    fn unknown_tokens_are_rejected() {
        assert!(serde_json::from_str::<Gender>("\"unknown_value\"").is_err());
        assert!(serde_json::from_str::<NeurologicalCondition>("\"dementia\"").is_err());
        assert!(serde_json::from_str::<PrognosisTrend>("\"worsening\"").is_err());
        assert!(serde_json::from_str::<SeverityLevel>("\"fatal\"").is_err());
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(format!("{}", Gender::Female), "female");
        assert_eq!(
            format!("{}", NeurologicalCondition::MultipleSclerosis),
            "multiple_sclerosis"
        );
        assert_eq!(format!("{}", PrognosisTrend::Stable), "stable");
        assert_eq!(format!("{}", SeverityLevel::Moderate), "moderate");
    }
}
