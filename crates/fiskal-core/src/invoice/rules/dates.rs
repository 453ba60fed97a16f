//! Receipt timestamp normalization.

use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{ExtractionError, FiskalError};

/// Parse a configured IANA zone name.
pub fn parse_timezone(name: &str) -> Result<Tz, FiskalError> {
    name.parse::<Tz>()
        .map_err(|e| FiskalError::Config(format!("invalid timezone '{}': {}", name, e)))
}

/// Parse the printed local receipt time and convert it to UTC.
///
/// A time repeated by the autumn clock change resolves to standard time (the
/// later instant). A time skipped by the spring change does not exist and is
/// a parse error.
pub fn parse_receipt_datetime(
    value: &str,
    format: &str,
    tz: Tz,
) -> Result<DateTime<Utc>, ExtractionError> {
    let parse_error = || ExtractionError::Parse {
        field: "datetime".to_string(),
        value: value.to_string(),
    };

    let naive = NaiveDateTime::parse_from_str(value.trim(), format).map_err(|_| parse_error())?;

    let local = match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(_, standard) => standard,
        LocalResult::None => return Err(parse_error()),
    };

    Ok(local.with_timezone(&Utc))
}
