//! Composite instrument: a linear combination of option leaves.

use crate::instrument::{EuropeanOption, Instrument};
use chrono::NaiveDate;
use fxb_core::{Real, Result};

/// An ordered collection of (leaf, multiplier) pairs whose value is the
/// linear combination of the constituent values.
///
/// Multipliers may be negative (short positions). The order of addition is
/// irrelevant to the value but is preserved for diagnostics.
#[derive(Debug, Clone, Default)]
pub struct CompositeInstrument {
    components: Vec<(EuropeanOption, Real)>,
}

impl CompositeInstrument {
    /// Create an empty composite.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a leaf with multiplier +1.
    pub fn add(&mut self, instrument: EuropeanOption) {
        self.add_with_multiplier(instrument, 1.0);
    }

    /// Add a leaf with an explicit multiplier.
    pub fn add_with_multiplier(&mut self, instrument: EuropeanOption, multiplier: Real) {
        self.components.push((instrument, multiplier));
    }

    /// Add a leaf with multiplier −1.
    pub fn subtract(&mut self, instrument: EuropeanOption) {
        self.add_with_multiplier(instrument, -1.0);
    }

    /// The (leaf, multiplier) pairs in insertion order.
    pub fn components(&self) -> &[(EuropeanOption, Real)] {
        &self.components
    }

    /// Mutable access to the leaves, for engine attachment.
    pub fn components_mut(&mut self) -> impl Iterator<Item = &mut (EuropeanOption, Real)> {
        self.components.iter_mut()
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the composite has no components.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Undiscounted terminal value at expiry for a given underlying price.
    ///
    /// Pure payoff algebra; needs no pricing engines.
    pub fn terminal_value(&self, price: Real) -> Real {
        self.components
            .iter()
            .map(|(leaf, m)| m * leaf.payoff().value(price))
            .sum()
    }
}

impl Instrument for CompositeInstrument {
    /// Σ multiplierᵢ · npv(leafᵢ).
    ///
    /// Fails with `EngineNotAttached` (naming the leaf) on the first
    /// constituent without an attached engine.
    fn npv(&self) -> Result<Real> {
        let mut total = 0.0;
        for (leaf, multiplier) in &self.components {
            total += multiplier * leaf.npv()?;
        }
        Ok(total)
    }

    fn maturity_date(&self) -> Option<NaiveDate> {
        self.components
            .iter()
            .filter_map(|(leaf, _)| leaf.maturity_date())
            .max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercise::Exercise;
    use crate::instrument::{OptionArguments, PricingEngine, PricingResults};
    use crate::payoff::{OptionType, Payoff};
    use fxb_core::Error;
    use std::sync::Arc;

    #[derive(Debug)]
    struct FixedEngine(Real);

    impl PricingEngine<OptionArguments> for FixedEngine {
        fn calculate(&self, _args: &OptionArguments) -> Result<PricingResults> {
            Ok(PricingResults::from_npv(self.0))
        }
    }

    fn leaf(npv: Real) -> EuropeanOption {
        let expiry = NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();
        let mut opt = EuropeanOption::new(
            Payoff::vanilla(OptionType::Call, 100.0),
            Exercise::european(expiry),
        );
        opt.set_pricing_engine(Arc::new(FixedEngine(npv))).unwrap();
        opt
    }

    #[test]
    fn linear_combination() {
        let mut composite = CompositeInstrument::new();
        composite.add(leaf(10.0));
        composite.add_with_multiplier(leaf(4.0), 2.5);
        composite.subtract(leaf(3.0));
        assert_eq!(composite.len(), 3);
        assert!((composite.npv().unwrap() - 17.0).abs() < 1e-12);
    }

    #[test]
    fn missing_engine_reports_leaf() {
        let expiry = NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();
        let bare = EuropeanOption::new(
            Payoff::digital_cash_or_nothing(OptionType::Put, 120.0, 5.0),
            Exercise::european(expiry),
        );
        let mut composite = CompositeInstrument::new();
        composite.add(leaf(1.0));
        composite.add(bare);
        match composite.npv() {
            Err(Error::EngineNotAttached { leaf }) => {
                assert!(leaf.contains("CashOrNothing Put @ 120"), "leaf = {leaf}")
            }
            other => panic!("expected EngineNotAttached, got {other:?}"),
        }
    }

    #[test]
    fn sign_flip_negates_value() {
        let mut long = CompositeInstrument::new();
        long.add(leaf(10.0));
        long.subtract(leaf(4.0));

        let mut short = CompositeInstrument::new();
        for (l, m) in long.components() {
            short.add_with_multiplier(l.clone(), -m);
        }
        assert!((long.npv().unwrap() + short.npv().unwrap()).abs() < 1e-12);
    }

    #[test]
    fn terminal_value_is_payoff_algebra() {
        let expiry = NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();
        let mut composite = CompositeInstrument::new();
        composite.add(EuropeanOption::new(
            Payoff::vanilla(OptionType::Call, 100.0),
            Exercise::european(expiry),
        ));
        composite.subtract(EuropeanOption::new(
            Payoff::vanilla(OptionType::Call, 120.0),
            Exercise::european(expiry),
        ));
        // a 100/120 call spread at S = 130 is worth 20
        assert!((composite.terminal_value(130.0) - 20.0).abs() < 1e-15);
        assert!((composite.terminal_value(90.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn empty_composite_prices_to_zero() {
        let composite = CompositeInstrument::new();
        assert!(composite.is_empty());
        assert!((composite.npv().unwrap() - 0.0).abs() < 1e-15);
        assert_eq!(composite.maturity_date(), None);
    }
}
