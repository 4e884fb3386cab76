//! `Currency` — definition and metadata for a financial currency.
//!
//! Only the majors actively quoted in FX option markets are pre-defined;
//! [`parse_currency`] resolves an ISO 4217 alphabetic code to one of them.

use crate::errors::{Error, Result};

/// Data describing a single currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Currency {
    /// Full name (e.g. "United States Dollar").
    pub name: &'static str,
    /// ISO 4217 alphabetic code (e.g. "USD").
    pub code: &'static str,
    /// ISO 4217 numeric code (e.g. 840).
    pub numeric_code: u16,
    /// Symbol used in financial notation (e.g. "$").
    pub symbol: &'static str,
    /// Number of fractional units per whole unit (e.g. 100 for cents).
    pub fractions_per_unit: u32,
    /// Rounding precision (decimal places for display).
    pub rounding: u8,
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// United States Dollar.
pub static USD: Currency = Currency {
    name: "United States Dollar",
    code: "USD",
    numeric_code: 840,
    symbol: "$",
    fractions_per_unit: 100,
    rounding: 2,
};

/// Euro.
pub static EUR: Currency = Currency {
    name: "Euro",
    code: "EUR",
    numeric_code: 978,
    symbol: "€",
    fractions_per_unit: 100,
    rounding: 2,
};

/// British Pound Sterling.
pub static GBP: Currency = Currency {
    name: "British Pound",
    code: "GBP",
    numeric_code: 826,
    symbol: "£",
    fractions_per_unit: 100,
    rounding: 2,
};

/// Swiss Franc.
pub static CHF: Currency = Currency {
    name: "Swiss Franc",
    code: "CHF",
    numeric_code: 756,
    symbol: "Fr",
    fractions_per_unit: 100,
    rounding: 2,
};

/// Japanese Yen.
pub static JPY: Currency = Currency {
    name: "Japanese Yen",
    code: "JPY",
    numeric_code: 392,
    symbol: "¥",
    fractions_per_unit: 1,
    rounding: 0,
};

/// Australian Dollar.
pub static AUD: Currency = Currency {
    name: "Australian Dollar",
    code: "AUD",
    numeric_code: 36,
    symbol: "A$",
    fractions_per_unit: 100,
    rounding: 2,
};

/// Canadian Dollar.
pub static CAD: Currency = Currency {
    name: "Canadian Dollar",
    code: "CAD",
    numeric_code: 124,
    symbol: "C$",
    fractions_per_unit: 100,
    rounding: 2,
};

/// New Zealand Dollar.
pub static NZD: Currency = Currency {
    name: "New Zealand Dollar",
    code: "NZD",
    numeric_code: 554,
    symbol: "NZ$",
    fractions_per_unit: 100,
    rounding: 2,
};

/// Swedish Krona.
pub static SEK: Currency = Currency {
    name: "Swedish Krona",
    code: "SEK",
    numeric_code: 752,
    symbol: "kr",
    fractions_per_unit: 100,
    rounding: 2,
};

/// Norwegian Krone.
pub static NOK: Currency = Currency {
    name: "Norwegian Krone",
    code: "NOK",
    numeric_code: 578,
    symbol: "kr",
    fractions_per_unit: 100,
    rounding: 2,
};

/// Resolve an ISO 4217 alphabetic code to a known [`Currency`].
///
/// # Errors
/// Returns [`Error::InvalidArgument`] if the code is not recognized.
pub fn parse_currency(code: &str) -> Result<Currency> {
    match code.trim() {
        "USD" => Ok(USD),
        "EUR" => Ok(EUR),
        "GBP" => Ok(GBP),
        "CHF" => Ok(CHF),
        "JPY" => Ok(JPY),
        "AUD" => Ok(AUD),
        "CAD" => Ok(CAD),
        "NZD" => Ok(NZD),
        "SEK" => Ok(SEK),
        "NOK" => Ok(NOK),
        other => Err(Error::InvalidArgument(format!(
            "unknown currency code: {other:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_codes() {
        assert_eq!(parse_currency("USD").unwrap(), USD);
        assert_eq!(parse_currency(" EUR ").unwrap(), EUR);
        assert_eq!(parse_currency("JPY").unwrap().rounding, 0);
    }

    #[test]
    fn parse_unknown_code() {
        assert!(matches!(
            parse_currency("XXX"),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn display_is_code() {
        assert_eq!(GBP.to_string(), "GBP");
    }
}
