use thiserror::Error;

/// Returned when a `Name=value1,value2` filter expression cannot be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFilterError {
    #[error("filter `{0}` must have the form Name=value1,value2")]
    MissingSeparator(String),

    #[error("filter `{0}` has an empty name")]
    EmptyName(String),
}
