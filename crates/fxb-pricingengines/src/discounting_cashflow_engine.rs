//! Discounting engine for fixed cashflows (premium legs).

use crate::termstructures::FlatForward;
use fxb_core::Result;
use fxb_instruments::{CashflowArguments, PricingEngine, PricingResults};

/// Prices a fixed cashflow by discounting on a yield curve:
/// `npv = amount · d(pay date)`. Cashflows on or before the curve's
/// reference date have already settled and are worth zero.
#[derive(Debug)]
pub struct DiscountingCashflowEngine {
    discount_curve: FlatForward,
}

impl DiscountingCashflowEngine {
    /// Create a new engine with the given discount curve.
    pub fn new(discount_curve: FlatForward) -> Self {
        Self { discount_curve }
    }
}

impl PricingEngine<CashflowArguments> for DiscountingCashflowEngine {
    fn calculate(&self, args: &CashflowArguments) -> Result<PricingResults> {
        if args.date <= self.discount_curve.reference_date() {
            return Ok(PricingResults::from_npv(0.0));
        }
        let df = self.discount_curve.discount_date(args.date);
        Ok(PricingResults::from_npv(args.amount * df).with_result("discount_factor", df))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::NaiveDate;
    use fxb_instruments::{Instrument, SimpleCashflow};
    use std::sync::Arc;

    #[test]
    fn discounts_future_cashflow() {
        let ref_date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let pay_date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let engine = Arc::new(DiscountingCashflowEngine::new(FlatForward::new(
            ref_date, 0.05,
        )));
        let mut cf = SimpleCashflow::new(1000.0, pay_date);
        cf.set_pricing_engine(engine).unwrap();
        assert_abs_diff_eq!(
            cf.npv().unwrap(),
            1000.0 * (-0.05f64).exp(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn settled_cashflow_is_worthless() {
        let ref_date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let engine = Arc::new(DiscountingCashflowEngine::new(FlatForward::new(
            ref_date, 0.05,
        )));
        let mut cf = SimpleCashflow::new(1000.0, ref_date);
        cf.set_pricing_engine(engine).unwrap();
        assert_abs_diff_eq!(cf.npv().unwrap(), 0.0, epsilon = 1e-15);
    }
}
