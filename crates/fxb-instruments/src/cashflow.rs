//! Fixed cashflows, used for option premium legs.

use crate::instrument::{Instrument, PricingEngine};
use chrono::NaiveDate;
use fxb_core::{Error, Real, Result};
use std::sync::Arc;

/// Arguments needed for pricing a fixed cashflow.
#[derive(Debug, Clone, Copy)]
pub struct CashflowArguments {
    /// Amount paid.
    pub amount: Real,
    /// Payment date.
    pub date: NaiveDate,
}

/// A single fixed cashflow paid on a known date.
///
/// Like option leaves, a cashflow becomes priceable once an engine is
/// attached; attachment is write-once.
#[derive(Debug, Clone)]
pub struct SimpleCashflow {
    amount: Real,
    date: NaiveDate,
    engine: Option<Arc<dyn PricingEngine<CashflowArguments>>>,
}

impl SimpleCashflow {
    /// Create a new cashflow.
    pub fn new(amount: Real, date: NaiveDate) -> Self {
        Self {
            amount,
            date,
            engine: None,
        }
    }

    /// The amount paid.
    pub fn amount(&self) -> Real {
        self.amount
    }

    /// The payment date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Human-readable description (used in error reporting).
    pub fn description(&self) -> String {
        format!("Cashflow {} on {}", self.amount, self.date)
    }

    /// Attach a pricing engine. Write-once.
    ///
    /// # Errors
    /// [`Error::DuplicateEngine`] if an engine is already attached.
    pub fn set_pricing_engine(
        &mut self,
        engine: Arc<dyn PricingEngine<CashflowArguments>>,
    ) -> Result<()> {
        if self.engine.is_some() {
            return Err(Error::DuplicateEngine {
                leaf: self.description(),
            });
        }
        self.engine = Some(engine);
        Ok(())
    }

    fn arguments(&self) -> CashflowArguments {
        CashflowArguments {
            amount: self.amount,
            date: self.date,
        }
    }
}

impl Instrument for SimpleCashflow {
    fn npv(&self) -> Result<Real> {
        match &self.engine {
            Some(engine) => Ok(engine.calculate(&self.arguments())?.npv),
            None => Err(Error::EngineNotAttached {
                leaf: self.description(),
            }),
        }
    }

    fn maturity_date(&self) -> Option<NaiveDate> {
        Some(self.date)
    }
}
