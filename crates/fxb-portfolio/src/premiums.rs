//! Premium handling.
//!
//! Premium payments are additional fixed cashflows settled alongside the
//! option. Each leg is priced by discounting and appended to the trade's
//! additional-instrument list with a signed multiplier (a long position pays
//! premiums, so their sign is opposite to the trade direction).

use crate::enginefactory::EngineFactory;
use crate::tradedata::PremiumData;
use chrono::NaiveDate;
use fxb_core::{ensure, Currency, Error, Real, Result};
use fxb_instruments::SimpleCashflow;

/// Price the premium schedule and append the legs to
/// `additional_instruments` as (cashflow, multiplier) pairs.
///
/// `sign` is the multiplier applied to every leg (−1 for a long trade,
/// +1 for a short one). Premiums must settle in the trade's settlement
/// currency; a cross-currency premium is a different trade structure.
///
/// Returns the latest premium settlement date, if any legs were priced.
pub fn add_premiums(
    additional_instruments: &mut Vec<(SimpleCashflow, Real)>,
    premiums: &[PremiumData],
    sign: Real,
    settlement_ccy: &Currency,
    factory: &dyn EngineFactory,
) -> Result<Option<NaiveDate>> {
    let mut last_premium_date = None;
    for premium in premiums {
        ensure!(
            premium.currency == settlement_ccy.code,
            Error::UnsupportedStructure(format!(
                "premium currency {} differs from settlement currency {}",
                premium.currency, settlement_ccy.code
            ))
        );
        let mut leg = SimpleCashflow::new(premium.amount, premium.pay_date);
        leg.set_pricing_engine(factory.cashflow_engine(settlement_ccy)?)?;
        additional_instruments.push((leg, sign));
        last_premium_date = last_premium_date.max(Some(premium.pay_date));
    }
    Ok(last_premium_date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enginefactory::BlackScholesEngineFactory;
    use approx::assert_abs_diff_eq;
    use fxb_core::currency::USD;
    use fxb_instruments::Instrument;
    use fxb_pricingengines::FlatForward;

    fn factory() -> BlackScholesEngineFactory {
        let ref_date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        BlackScholesEngineFactory::new(ref_date)
            .with_discount_curve(&USD, FlatForward::new(ref_date, 0.05))
    }

    #[test]
    fn premiums_are_discounted_and_signed() {
        let factory = factory();
        let mut legs = Vec::new();
        let last = add_premiums(
            &mut legs,
            &[
                PremiumData {
                    amount: 1000.0,
                    currency: "USD".into(),
                    pay_date: NaiveDate::from_ymd_opt(2025, 7, 15).unwrap(),
                },
                PremiumData {
                    amount: 500.0,
                    currency: "USD".into(),
                    pay_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
                },
            ],
            -1.0,
            &USD,
            &factory,
        )
        .unwrap();

        assert_eq!(last, NaiveDate::from_ymd_opt(2026, 1, 15));
        assert_eq!(legs.len(), 2);
        assert_eq!(legs[0].1, -1.0);
        let t = (NaiveDate::from_ymd_opt(2025, 7, 15).unwrap()
            - NaiveDate::from_ymd_opt(2025, 1, 15).unwrap())
        .num_days() as f64
            / 365.0;
        assert_abs_diff_eq!(
            legs[0].0.npv().unwrap(),
            1000.0 * (-0.05 * t).exp(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn empty_schedule_yields_no_date() {
        let factory = factory();
        let mut legs = Vec::new();
        let last = add_premiums(&mut legs, &[], -1.0, &USD, &factory).unwrap();
        assert_eq!(last, None);
        assert!(legs.is_empty());
    }

    #[test]
    fn cross_currency_premium_rejected() {
        let factory = factory();
        let mut legs = Vec::new();
        let err = add_premiums(
            &mut legs,
            &[PremiumData {
                amount: 1000.0,
                currency: "EUR".into(),
                pay_date: NaiveDate::from_ymd_opt(2025, 7, 15).unwrap(),
            }],
            -1.0,
            &USD,
            &factory,
        );
        assert!(matches!(err, Err(Error::UnsupportedStructure(_))));
    }
}
