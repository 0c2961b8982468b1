use crate::error::CoreError;

/// All database primary keys are PostgreSQL SERIAL (INT4).
pub type DbId = i32;

/// Coerce a command-line value into an INT4 column value.
///
/// The whole value, minus surrounding whitespace, must be an integer:
/// `"2010abc"` is rejected rather than read as 2010. `field` names the
/// argument in the validation message.
pub fn parse_int(field: &'static str, raw: &str) -> Result<i32, CoreError> {
    raw.trim()
        .parse()
        .map_err(|_| CoreError::Validation(format!("{field} must be an integer, got {raw:?}")))
}
