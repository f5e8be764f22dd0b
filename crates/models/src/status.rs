use crate::requisite::PrerequisiteKind;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Lifecycle status of a single enrollment attempt
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EnrollmentStatus {
    /// Attending the course ("cursando")
    Enrolled,
    /// Coursework done, final exam pending ("cursada")
    Completed,
    /// Passed ("aprobada")
    Approved,
    /// Withdrawn or lost regular standing ("libre")
    Free,
}

impl EnrollmentStatus {
    /// Whether the grading collaborator may move a record from `self` to `next`
    pub fn can_transition_to(self, next: Self) -> bool {
        use EnrollmentStatus::*;

        matches!(
            (self, next),
            (Enrolled, Completed | Approved | Free) | (Completed, Approved | Free)
        )
    }

    /// Whether a record in this status satisfies a prerequisite edge of `kind`
    pub fn counts_for(self, kind: PrerequisiteKind) -> bool {
        match kind {
            PrerequisiteKind::Cursada => matches!(self, Self::Completed | Self::Approved),
            PrerequisiteKind::Final => self == Self::Approved,
        }
    }

    /// Final exams are open to students who finished the coursework
    pub fn allows_final_exam(self) -> bool {
        matches!(self, Self::Completed | Self::Approved)
    }
}

/// Status of a registration to a final-exam session
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RegistrationStatus {
    #[default]
    Registered,
    Graded,
    Absent,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_status_round_trips_through_strings() {
        for status in EnrollmentStatus::iter() {
            let parsed = EnrollmentStatus::from_str(status.as_ref()).unwrap();
            assert_eq!(parsed, status);
        }
        assert_eq!(EnrollmentStatus::Free.to_string(), "free");
        assert!(EnrollmentStatus::from_str("cursando").is_err());
    }

    #[test]
    fn test_transitions() {
        use EnrollmentStatus::*;

        assert!(Enrolled.can_transition_to(Completed));
        assert!(Enrolled.can_transition_to(Free));
        assert!(Enrolled.can_transition_to(Approved));
        assert!(Completed.can_transition_to(Approved));
        assert!(Completed.can_transition_to(Free));

        assert!(!Enrolled.can_transition_to(Enrolled));
        assert!(!Completed.can_transition_to(Enrolled));
        assert!(!Approved.can_transition_to(Completed));
        assert!(!Free.can_transition_to(Enrolled));
    }

    #[test]
    fn test_terminal_statuses_have_no_exits() {
        for from in [EnrollmentStatus::Approved, EnrollmentStatus::Free] {
            assert!(EnrollmentStatus::iter().all(|to| !from.can_transition_to(to)));
        }
    }

    #[test]
    fn test_counts_for_prerequisite_kind() {
        use EnrollmentStatus::*;

        assert!(Completed.counts_for(PrerequisiteKind::Cursada));
        assert!(Approved.counts_for(PrerequisiteKind::Cursada));
        assert!(!Enrolled.counts_for(PrerequisiteKind::Cursada));
        assert!(!Free.counts_for(PrerequisiteKind::Cursada));

        assert!(Approved.counts_for(PrerequisiteKind::Final));
        assert!(!Completed.counts_for(PrerequisiteKind::Final));
    }

    #[test]
    fn test_registration_status_default() {
        assert_eq!(RegistrationStatus::default(), RegistrationStatus::Registered);
        assert_eq!(RegistrationStatus::Graded.to_string(), "graded");
    }
}
