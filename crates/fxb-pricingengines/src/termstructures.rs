//! Flat term structures.
//!
//! The engines in this crate consume the simplest possible market view: a
//! constant continuously-compounded rate per currency and a constant Black
//! volatility. Richer term-structure construction lives with the caller.

use chrono::NaiveDate;
use fxb_core::{DiscountFactor, Rate, Real, Time, Volatility};

/// Act/365-fixed year fraction between two dates.
pub fn year_fraction(start: NaiveDate, end: NaiveDate) -> Time {
    (end - start).num_days() as Real / 365.0
}

/// A flat (constant) forward-rate yield curve.
///
/// Discount factors are computed as `P(t) = exp(-r·t)` where `r` is a
/// continuously-compounded rate.
#[derive(Debug, Clone, Copy)]
pub struct FlatForward {
    reference_date: NaiveDate,
    rate: Rate,
}

impl FlatForward {
    /// Create a flat curve from a continuously-compounded rate.
    pub fn new(reference_date: NaiveDate, rate: Rate) -> Self {
        Self {
            reference_date,
            rate,
        }
    }

    /// The curve's reference date.
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// The continuously-compounded flat rate.
    pub fn rate(&self) -> Rate {
        self.rate
    }

    /// Discount factor for a time in years from the reference date.
    pub fn discount(&self, t: Time) -> DiscountFactor {
        (-self.rate * t).exp()
    }

    /// Discount factor for a date.
    pub fn discount_date(&self, date: NaiveDate) -> DiscountFactor {
        self.discount(year_fraction(self.reference_date, date))
    }
}

/// A constant Black volatility surface.
#[derive(Debug, Clone, Copy)]
pub struct BlackConstantVol {
    reference_date: NaiveDate,
    vol: Volatility,
}

impl BlackConstantVol {
    /// Create a constant vol surface.
    pub fn new(reference_date: NaiveDate, vol: Volatility) -> Self {
        Self {
            reference_date,
            vol,
        }
    }

    /// The surface's reference date.
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Black volatility for a given time to expiry and strike.
    pub fn black_vol(&self, _t: Time, _strike: Real) -> Volatility {
        self.vol
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn year_fraction_act365() {
        let d1 = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        assert_abs_diff_eq!(year_fraction(d1, d2), 365.0 / 365.0, epsilon = 1e-15);
        assert!(year_fraction(d2, d1) < 0.0);
    }

    #[test]
    fn flat_discounting() {
        let ref_date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let curve = FlatForward::new(ref_date, 0.05);
        assert_abs_diff_eq!(curve.discount(0.0), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(curve.discount(1.0), (-0.05f64).exp(), epsilon = 1e-15);
        let one_year = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        assert_abs_diff_eq!(
            curve.discount_date(one_year),
            (-0.05f64).exp(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn constant_vol_ignores_strike_and_time() {
        let ref_date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let vol = BlackConstantVol::new(ref_date, 0.2);
        assert_abs_diff_eq!(vol.black_vol(0.5, 80.0), 0.2, epsilon = 1e-15);
        assert_abs_diff_eq!(vol.black_vol(3.0, 120.0), 0.2, epsilon = 1e-15);
    }
}
