//! Roster of the multi-agent tracking system.
//!
//! The data model only needs the agents' attribution strings (reports record
//! which agent produced them). Reasoning and prompting live elsewhere.

use std::fmt;

/// The agents that collaborate on patient tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentKind {
    ClinicalArchitect,
    PrognosisAnalyst,
    Neurologist,
    ReportGenerator,
    QaValidator,
    TreatmentAdvisor,
    BackendDeveloper,
}

impl AgentKind {
    /// Canonical attribution string, as recorded in `generated_by` fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ClinicalArchitect => "ClinicalArchitectAgent",
            Self::PrognosisAnalyst => "PrognosisAnalystAgent",
            Self::Neurologist => "NeurologistAgent",
            Self::ReportGenerator => "ReportGeneratorAgent",
            Self::QaValidator => "QAValidatorAgent",
            Self::TreatmentAdvisor => "TreatmentAdvisorAgent",
            Self::BackendDeveloper => "BackendDeveloperAgent",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_as_str() {
        assert_eq!(
            format!("{}", AgentKind::PrognosisAnalyst),
            "PrognosisAnalystAgent"
        );
        assert_eq!(format!("{}", AgentKind::QaValidator), "QAValidatorAgent");
        assert_eq!(
            format!("{}", AgentKind::TreatmentAdvisor),
            "TreatmentAdvisorAgent"
        );
    }
}
