//! Garman–Kohlhagen FX process.

use crate::termstructures::{BlackConstantVol, FlatForward};
use chrono::NaiveDate;
use fxb_core::Real;

/// Market snapshot for an FX pair under the Garman–Kohlhagen model:
/// spot rate, domestic and foreign flat discount curves, and a constant
/// Black volatility. The foreign rate plays the role the dividend yield
/// plays for equities.
///
/// Immutable once constructed; safe to share across threads.
#[derive(Debug, Clone, Copy)]
pub struct GarmanKohlhagenProcess {
    spot: Real,
    domestic: FlatForward,
    foreign: FlatForward,
    vol: BlackConstantVol,
}

impl GarmanKohlhagenProcess {
    /// Create a new process.
    pub fn new(
        spot: Real,
        domestic: FlatForward,
        foreign: FlatForward,
        vol: BlackConstantVol,
    ) -> Self {
        Self {
            spot,
            domestic,
            foreign,
            vol,
        }
    }

    /// Convenience: build a process from flat numbers and one reference date.
    pub fn flat(
        reference_date: NaiveDate,
        spot: Real,
        domestic_rate: Real,
        foreign_rate: Real,
        vol: Real,
    ) -> Self {
        Self {
            spot,
            domestic: FlatForward::new(reference_date, domestic_rate),
            foreign: FlatForward::new(reference_date, foreign_rate),
            vol: BlackConstantVol::new(reference_date, vol),
        }
    }

    /// The FX spot rate (units of domestic per unit of foreign).
    pub fn spot(&self) -> Real {
        self.spot
    }

    /// The domestic discount curve.
    pub fn domestic(&self) -> &FlatForward {
        &self.domestic
    }

    /// The foreign discount curve.
    pub fn foreign(&self) -> &FlatForward {
        &self.foreign
    }

    /// The Black volatility surface.
    pub fn volatility(&self) -> &BlackConstantVol {
        &self.vol
    }

    /// The process reference date (the domestic curve's).
    pub fn reference_date(&self) -> NaiveDate {
        self.domestic.reference_date()
    }
}
