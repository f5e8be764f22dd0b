use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Custom error type for out-of-range grades
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeOutOfRange(pub i16);

impl Display for GradeOutOfRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "grade {} is outside the range {}-{}",
            self.0,
            Grade::MIN,
            Grade::MAX
        )
    }
}

impl std::error::Error for GradeOutOfRange {}

/// A final-exam grade on the 0-10 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub struct Grade(i16);

impl Grade {
    pub const MIN: i16 = 0;
    pub const MAX: i16 = 10;

    /// The usual approval threshold
    pub const DEFAULT_PASSING: Grade = Grade(4);

    pub fn new(value: i16) -> Result<Self, GradeOutOfRange> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(GradeOutOfRange(value))
        }
    }

    pub fn value(self) -> i16 {
        self.0
    }

    pub fn is_passing(self, passing: Grade) -> bool {
        self >= passing
    }
}

impl TryFrom<i16> for Grade {
    type Error = GradeOutOfRange;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Grade> for i16 {
    fn from(grade: Grade) -> Self {
        grade.0
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_bounds() {
        assert!(Grade::new(0).is_ok());
        assert!(Grade::new(10).is_ok());
        assert_eq!(Grade::new(11), Err(GradeOutOfRange(11)));
        assert_eq!(Grade::new(-1), Err(GradeOutOfRange(-1)));
    }

    #[test]
    fn test_is_passing() {
        let four = Grade::DEFAULT_PASSING;

        assert!(Grade::new(4).unwrap().is_passing(four));
        assert!(Grade::new(9).unwrap().is_passing(four));
        assert!(!Grade::new(3).unwrap().is_passing(four));
    }

    #[test]
    fn test_grade_deserialization_validates() {
        let grade: Grade = serde_json::from_str("7").unwrap();
        assert_eq!(grade.value(), 7);
        assert!(serde_json::from_str::<Grade>("12").is_err());
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            GradeOutOfRange(15).to_string(),
            "grade 15 is outside the range 0-10"
        );
    }
}
