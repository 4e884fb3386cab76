//! Engine factory.
//!
//! Resolves the pricing engine appropriate to each elementary instrument
//! class. Accessors are strongly typed per class, so asking for the wrong
//! kind of engine is impossible by construction; asking for an unregistered
//! market is a declared [`Error::NoEngineFound`].

use chrono::NaiveDate;
use fxb_core::{Currency, Error, Result};
use fxb_instruments::{CashflowArguments, OptionArguments, PricingEngine};
use fxb_pricingengines::{
    AnalyticDigitalEngine, AnalyticEuropeanEngine, DiscountingCashflowEngine, FlatForward,
    GarmanKohlhagenProcess,
};
use std::collections::HashMap;
use std::sync::Arc;

/// Supplies pricing engines per elementary instrument class.
///
/// Implementations read from a registry populated before pricing begins;
/// lookups are read-only and safe to run concurrently.
pub trait EngineFactory: std::fmt::Debug + Send + Sync {
    /// Engine for European vanilla options on the given currency pair.
    fn vanilla_option_engine(
        &self,
        bought: &Currency,
        sold: &Currency,
        expiry: NaiveDate,
    ) -> Result<Arc<dyn PricingEngine<OptionArguments>>>;

    /// Engine for cash-or-nothing digital options on the given currency pair.
    fn digital_option_engine(
        &self,
        bought: &Currency,
        sold: &Currency,
    ) -> Result<Arc<dyn PricingEngine<OptionArguments>>>;

    /// Engine for fixed cashflows in the given currency.
    fn cashflow_engine(
        &self,
        currency: &Currency,
    ) -> Result<Arc<dyn PricingEngine<CashflowArguments>>>;
}

/// An [`EngineFactory`] backed by Garman–Kohlhagen market snapshots, one per
/// currency pair, plus discount curves per currency for premium cashflows.
///
/// Immutable once built; share it across threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct BlackScholesEngineFactory {
    reference_date: NaiveDate,
    processes: HashMap<(String, String), Arc<GarmanKohlhagenProcess>>,
    discount_curves: HashMap<String, FlatForward>,
}

impl BlackScholesEngineFactory {
    /// Create an empty factory with the given evaluation date.
    pub fn new(reference_date: NaiveDate) -> Self {
        Self {
            reference_date,
            processes: HashMap::new(),
            discount_curves: HashMap::new(),
        }
    }

    /// The factory's evaluation date.
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// Register the market snapshot for a currency pair
    /// (bought = foreign, sold = domestic).
    pub fn with_process(
        mut self,
        bought: &Currency,
        sold: &Currency,
        process: GarmanKohlhagenProcess,
    ) -> Self {
        self.processes.insert(
            (bought.code.to_string(), sold.code.to_string()),
            Arc::new(process),
        );
        self
    }

    /// Register a discount curve for premium cashflows in a currency.
    pub fn with_discount_curve(mut self, currency: &Currency, curve: FlatForward) -> Self {
        self.discount_curves
            .insert(currency.code.to_string(), curve);
        self
    }

    fn process(
        &self,
        bought: &Currency,
        sold: &Currency,
        instrument_class: &str,
    ) -> Result<Arc<GarmanKohlhagenProcess>> {
        self.processes
            .get(&(bought.code.to_string(), sold.code.to_string()))
            .cloned()
            .ok_or_else(|| Error::NoEngineFound {
                instrument_class: format!("{instrument_class} {}{}", bought.code, sold.code),
            })
    }
}

impl EngineFactory for BlackScholesEngineFactory {
    fn vanilla_option_engine(
        &self,
        bought: &Currency,
        sold: &Currency,
        _expiry: NaiveDate,
    ) -> Result<Arc<dyn PricingEngine<OptionArguments>>> {
        let process = self.process(bought, sold, "FxOption")?;
        Ok(Arc::new(AnalyticEuropeanEngine::new(process)))
    }

    fn digital_option_engine(
        &self,
        bought: &Currency,
        sold: &Currency,
    ) -> Result<Arc<dyn PricingEngine<OptionArguments>>> {
        let process = self.process(bought, sold, "FxDigitalOption")?;
        Ok(Arc::new(AnalyticDigitalEngine::new(process)))
    }

    fn cashflow_engine(
        &self,
        currency: &Currency,
    ) -> Result<Arc<dyn PricingEngine<CashflowArguments>>> {
        let curve = self
            .discount_curves
            .get(currency.code)
            .copied()
            .ok_or_else(|| Error::NoEngineFound {
                instrument_class: format!("Cashflow {}", currency.code),
            })?;
        Ok(Arc::new(DiscountingCashflowEngine::new(curve)))
    }
}
