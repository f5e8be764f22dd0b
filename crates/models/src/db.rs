//! sea-orm column support for the string-backed enums in this crate.

use crate::{
    days::Weekday,
    requisite::PrerequisiteKind,
    status::{EnrollmentStatus, RegistrationStatus},
};
use sea_orm::{
    ColIdx, DbErr, QueryResult, TryGetError, TryGetable, Value,
    sea_query::{ArrayType, ColumnType, Nullable, StringLen, ValueType, ValueTypeErr},
};

/// Stores an enum as its `Display` string and reads it back through `FromStr`
macro_rules! string_column {
    ($ty:ty, $len:expr) => {
        impl ValueType for $ty {
            fn try_from(v: Value) -> Result<Self, ValueTypeErr> {
                match v {
                    Value::String(Some(s)) => s.parse().map_err(|_| ValueTypeErr),
                    _ => Err(ValueTypeErr),
                }
            }

            fn type_name() -> String {
                stringify!($ty).to_string()
            }

            fn array_type() -> ArrayType {
                ArrayType::String
            }

            fn column_type() -> ColumnType {
                ColumnType::String(StringLen::N($len))
            }
        }

        impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Value::String(Some(Box::new(value.to_string())))
            }
        }

        impl TryGetable for $ty {
            fn try_get_by<I: ColIdx>(res: &QueryResult, index: I) -> Result<Self, TryGetError> {
                let val: String = res.try_get_by(index)?;

                val.parse().map_err(|e| {
                    TryGetError::DbErr(DbErr::Type(format!(
                        "Failed to parse {} from {val:?}: {e}",
                        stringify!($ty)
                    )))
                })
            }
        }

        impl Nullable for $ty {
            fn null() -> Value {
                Value::String(None)
            }
        }
    };
}

string_column!(EnrollmentStatus, 16);
string_column!(RegistrationStatus, 16);
string_column!(PrerequisiteKind, 16);
string_column!(Weekday, 16);
