use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Represents the day of the week a schedule block occurs on
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Weekday {
    #[strum(to_string = "monday", serialize = "M")]
    Monday,
    #[strum(to_string = "tuesday", serialize = "T")]
    Tuesday,
    #[strum(to_string = "wednesday", serialize = "W")]
    Wednesday,
    #[strum(to_string = "thursday", serialize = "R")]
    Thursday,
    #[strum(to_string = "friday", serialize = "F")]
    Friday,
    #[strum(to_string = "saturday", serialize = "S")]
    Saturday,
    #[strum(to_string = "sunday", serialize = "U")]
    Sunday,
}
