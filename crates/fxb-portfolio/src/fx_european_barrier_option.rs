//! FX European barrier option trade.
//!
//! Turns a validated trade document into a priced instrument: replicate the
//! barrier payoff, attach pricing engines per payoff class, fold in premium
//! cashflows, and apply direction and notional scaling.

use crate::enginefactory::EngineFactory;
use crate::parsers::{parse_barrier_type, parse_option_type, parse_position_type};
use crate::premiums::add_premiums;
use crate::replication::replicate_barrier;
use crate::tradedata::FxEuropeanBarrierOptionData;
use chrono::NaiveDate;
use fxb_core::{parse_currency, Currency, Real, Result};
use fxb_instruments::{CompositeInstrument, Instrument, Payoff, SimpleCashflow};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// A scaled composite plus additional premium legs.
///
/// `npv = multiplier · composite + Σ multiplierᵢ · legᵢ`, with the
/// multiplier carrying both the trade direction and the notional scale.
#[derive(Debug, Clone)]
pub struct VanillaInstrument {
    composite: CompositeInstrument,
    multiplier: Real,
    additional: Vec<(SimpleCashflow, Real)>,
}

impl VanillaInstrument {
    /// Wrap a composite with its multiplier and additional legs.
    pub fn new(
        composite: CompositeInstrument,
        multiplier: Real,
        additional: Vec<(SimpleCashflow, Real)>,
    ) -> Self {
        Self {
            composite,
            multiplier,
            additional,
        }
    }

    /// The replication composite.
    pub fn composite(&self) -> &CompositeInstrument {
        &self.composite
    }

    /// The trade multiplier (signed notional scale).
    pub fn multiplier(&self) -> Real {
        self.multiplier
    }

    /// The additional (premium) legs with their multipliers.
    pub fn additional(&self) -> &[(SimpleCashflow, Real)] {
        &self.additional
    }
}

impl Instrument for VanillaInstrument {
    fn npv(&self) -> Result<Real> {
        let mut total = self.multiplier * self.composite.npv()?;
        for (leg, multiplier) in &self.additional {
            total += multiplier * leg.npv()?;
        }
        Ok(total)
    }

    fn maturity_date(&self) -> Option<NaiveDate> {
        let premium_dates = self.additional.iter().filter_map(|(leg, _)| leg.maturity_date());
        self.composite.maturity_date().into_iter().chain(premium_dates).max()
    }
}

/// The priced trade handed back to the caller.
#[derive(Debug, Clone)]
pub struct PricedTrade {
    /// The priceable instrument.
    pub instrument: VanillaInstrument,
    /// Reporting currency of the NPV (the sold side is the domestic).
    pub npv_currency: Currency,
    /// Trade notional.
    pub notional: Real,
    /// Currency of the notional.
    pub notional_currency: Currency,
    /// Latest relevant date: max(expiry, last premium date).
    pub maturity: NaiveDate,
    /// Descriptive fields (bought/sold currency and amount).
    pub additional_data: HashMap<String, String>,
}

impl PricedTrade {
    /// Net present value in `npv_currency`.
    pub fn npv(&self) -> Result<Real> {
        self.instrument.npv()
    }
}

/// FX European single-barrier option trade.
#[derive(Debug, Clone)]
pub struct FxEuropeanBarrierOption {
    data: FxEuropeanBarrierOptionData,
}

impl FxEuropeanBarrierOption {
    /// Create a trade from its document.
    pub fn new(data: FxEuropeanBarrierOptionData) -> Self {
        Self { data }
    }

    /// The underlying trade document.
    pub fn data(&self) -> &FxEuropeanBarrierOptionData {
        &self.data
    }

    /// Validate, replicate, attach engines, and assemble the priced trade.
    pub fn build(&self, factory: &dyn EngineFactory) -> Result<PricedTrade> {
        let data = &self.data;
        data.validate()?;

        let bought = parse_currency(&data.bought_currency)?;
        let sold = parse_currency(&data.sold_currency)?;
        let position = parse_position_type(&data.option.long_short)?;
        let option_type = parse_option_type(&data.option.call_put)?;
        let barrier_type = parse_barrier_type(&data.barrier.barrier_type)?;

        // Strike in domestic per foreign, like the spot the engines quote.
        let strike = data.sold_amount / data.bought_amount;
        let level = data.barrier.levels[0];
        let rebate = data.barrier.rebate;
        let expiry = data.option.exercise_dates[0];

        debug!(
            %option_type,
            %barrier_type,
            strike,
            level,
            rebate,
            "replicating European barrier payoff"
        );
        let mut composite =
            replicate_barrier(option_type, barrier_type, strike, level, rebate, expiry)?;

        let vanilla_engine = factory.vanilla_option_engine(&bought, &sold, expiry)?;
        let digital_engine = factory.digital_option_engine(&bought, &sold)?;
        for (leaf, _) in composite.components_mut() {
            let engine = match leaf.payoff() {
                Payoff::Vanilla(_) => Arc::clone(&vanilla_engine),
                Payoff::Digital(_) => Arc::clone(&digital_engine),
            };
            leaf.set_pricing_engine(engine)?;
        }
        debug!(leaves = composite.len(), "pricing engines attached");

        let direction = position.sign();
        let multiplier = data.bought_amount * direction;
        let mut additional = Vec::new();
        let last_premium_date = add_premiums(
            &mut additional,
            &data.option.premium_data,
            -direction,
            &sold,
            factory,
        )?;

        let maturity = last_premium_date.map_or(expiry, |d| d.max(expiry));
        let mut additional_data = HashMap::new();
        additional_data.insert("boughtCurrency".to_string(), data.bought_currency.clone());
        additional_data.insert("boughtAmount".to_string(), data.bought_amount.to_string());
        additional_data.insert("soldCurrency".to_string(), data.sold_currency.clone());
        additional_data.insert("soldAmount".to_string(), data.sold_amount.to_string());

        debug!(%sold, notional = data.sold_amount, %maturity, "trade assembled");
        Ok(PricedTrade {
            instrument: VanillaInstrument::new(composite, multiplier, additional),
            npv_currency: sold,
            notional: data.sold_amount,
            notional_currency: sold,
            maturity,
            additional_data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enginefactory::BlackScholesEngineFactory;
    use crate::tradedata::{BarrierData, OptionData, PremiumData};
    use approx::assert_abs_diff_eq;
    use fxb_core::currency::{EUR, USD};
    use fxb_core::Error;
    use fxb_pricingengines::{FlatForward, GarmanKohlhagenProcess};

    fn ref_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    fn expiry() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    fn factory() -> BlackScholesEngineFactory {
        BlackScholesEngineFactory::new(ref_date())
            .with_process(
                &EUR,
                &USD,
                GarmanKohlhagenProcess::flat(ref_date(), 1.10, 0.05, 0.03, 0.12),
            )
            .with_discount_curve(&USD, FlatForward::new(ref_date(), 0.05))
    }

    fn trade_data(long_short: &str, barrier_type: &str) -> FxEuropeanBarrierOptionData {
        FxEuropeanBarrierOptionData {
            option: OptionData {
                long_short: long_short.into(),
                call_put: "Call".into(),
                style: "European".into(),
                exercise_dates: vec![expiry()],
                premium_data: vec![],
            },
            barrier: BarrierData {
                barrier_type: barrier_type.into(),
                style: String::new(),
                levels: vec![1.25],
                rebate: 0.01,
            },
            bought_currency: "EUR".into(),
            bought_amount: 1_000_000.0,
            sold_currency: "USD".into(),
            sold_amount: 1_100_000.0,
            trade_actions: vec![],
        }
    }

    #[test]
    fn builds_and_prices() {
        let trade = FxEuropeanBarrierOption::new(trade_data("Long", "UpAndOut"));
        let priced = trade.build(&factory()).unwrap();
        assert_eq!(priced.npv_currency.code, "USD");
        assert_eq!(priced.notional, 1_100_000.0);
        assert_eq!(priced.maturity, expiry());
        assert_eq!(priced.additional_data["boughtCurrency"], "EUR");
        assert_eq!(priced.additional_data["soldAmount"], "1100000");
        let npv = priced.npv().unwrap();
        assert!(npv.is_finite() && npv > 0.0, "npv = {npv}");
    }

    #[test]
    fn short_is_minus_long() {
        let long = FxEuropeanBarrierOption::new(trade_data("Long", "DownAndIn"))
            .build(&factory())
            .unwrap();
        let short = FxEuropeanBarrierOption::new(trade_data("Short", "DownAndIn"))
            .build(&factory())
            .unwrap();
        assert_abs_diff_eq!(
            long.npv().unwrap(),
            -short.npv().unwrap(),
            epsilon = 1e-6
        );
    }

    #[test]
    fn premiums_shift_npv_and_maturity() {
        let pay_date = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        let mut data = trade_data("Long", "UpAndOut");
        data.option.premium_data.push(PremiumData {
            amount: 25_000.0,
            currency: "USD".into(),
            pay_date,
        });
        let with_premium = FxEuropeanBarrierOption::new(data.clone())
            .build(&factory())
            .unwrap();
        data.option.premium_data.clear();
        let without = FxEuropeanBarrierOption::new(data).build(&factory()).unwrap();

        // a long position pays the premium
        assert!(with_premium.npv().unwrap() < without.npv().unwrap());
        assert_eq!(with_premium.maturity, pay_date);
        let df = (-0.05 * (pay_date - ref_date()).num_days() as f64 / 365.0).exp();
        assert_abs_diff_eq!(
            without.npv().unwrap() - with_premium.npv().unwrap(),
            25_000.0 * df,
            epsilon = 1e-6
        );
    }

    #[test]
    fn unregistered_market_fails_with_no_engine_found() {
        let empty = BlackScholesEngineFactory::new(ref_date());
        let trade = FxEuropeanBarrierOption::new(trade_data("Long", "UpAndIn"));
        assert!(matches!(
            trade.build(&empty),
            Err(Error::NoEngineFound { .. })
        ));
    }

    #[test]
    fn invalid_document_fails_before_replication() {
        let mut data = trade_data("Long", "UpAndIn");
        data.barrier.rebate = -1.0;
        let trade = FxEuropeanBarrierOption::new(data);
        assert!(matches!(
            trade.build(&factory()),
            Err(Error::MalformedConfiguration(_))
        ));
    }
}
