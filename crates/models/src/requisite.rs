use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Which milestone a prerequisite (correlativa) gates.
///
/// A `Cursada` edge must be satisfied before enrolling in a course, a `Final`
/// edge before sitting its final exam. The two edge sets are independent: the
/// same pair of courses may be linked under one kind, both, or neither.
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
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PrerequisiteKind {
    Cursada,
    Final,
}
