//! Parsers for the string tags carried by trade documents.

use chrono::NaiveDate;
use fxb_core::{Error, Position, Result};
use fxb_instruments::{BarrierType, OptionType};

/// Parse an option type tag ("Call" / "Put").
pub fn parse_option_type(s: &str) -> Result<OptionType> {
    match s.trim() {
        "Call" => Ok(OptionType::Call),
        "Put" => Ok(OptionType::Put),
        other => Err(Error::MalformedConfiguration(format!(
            "option type must be Call or Put, got {other:?}"
        ))),
    }
}

/// Parse a position tag ("Long" / "Short").
pub fn parse_position_type(s: &str) -> Result<Position> {
    match s.trim() {
        "Long" => Ok(Position::Long),
        "Short" => Ok(Position::Short),
        other => Err(Error::MalformedConfiguration(format!(
            "position must be Long or Short, got {other:?}"
        ))),
    }
}

/// Parse a barrier type tag ("UpAndIn" / "UpAndOut" / "DownAndIn" /
/// "DownAndOut").
pub fn parse_barrier_type(s: &str) -> Result<BarrierType> {
    match s.trim() {
        "UpAndIn" => Ok(BarrierType::UpIn),
        "UpAndOut" => Ok(BarrierType::UpOut),
        "DownAndIn" => Ok(BarrierType::DownIn),
        "DownAndOut" => Ok(BarrierType::DownOut),
        other => Err(Error::UnknownBarrierType(other.to_string())),
    }
}

/// Parse an ISO 8601 date (`YYYY-MM-DD`).
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|e| {
        Error::MalformedConfiguration(format!("cannot parse date {s:?}: {e}"))
    })
}
