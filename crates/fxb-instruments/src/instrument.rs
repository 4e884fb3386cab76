//! Priceable instruments and the pricing-engine contract.
//!
//! An instrument owns its terms; a pricing engine owns the market view.
//! The two are bound by [`EuropeanOption::set_pricing_engine`], a write-once
//! operation: valuation before binding fails with `EngineNotAttached`,
//! binding twice fails with `DuplicateEngine`.

use crate::exercise::Exercise;
use crate::payoff::Payoff;
use chrono::NaiveDate;
use fxb_core::{Error, Real, Result};
use std::collections::HashMap;
use std::sync::Arc;

/// Results of pricing an instrument.
///
/// Contains the NPV and optionally additional named results
/// (e.g. "delta", "gamma", "vega").
#[derive(Debug, Clone, Default)]
pub struct PricingResults {
    /// Net present value.
    pub npv: Real,
    /// Additional named results.
    pub additional_results: HashMap<String, Real>,
}

impl PricingResults {
    /// Create pricing results with just an NPV.
    pub fn from_npv(npv: Real) -> Self {
        Self {
            npv,
            additional_results: HashMap::new(),
        }
    }

    /// Add a named result.
    pub fn with_result(mut self, key: impl Into<String>, value: Real) -> Self {
        self.additional_results.insert(key.into(), value);
        self
    }
}

/// Base trait for all pricing engines.
///
/// A pricing engine computes [`PricingResults`] for the argument type of a
/// specific instrument class.
pub trait PricingEngine<Args>: std::fmt::Debug + Send + Sync {
    /// Price the instrument described by `args`.
    fn calculate(&self, args: &Args) -> Result<PricingResults>;
}

/// Base trait for all priceable financial instruments.
pub trait Instrument: std::fmt::Debug + Send + Sync {
    /// Net present value. Fails if no pricing engine has been attached.
    fn npv(&self) -> Result<Real>;

    /// The maturity or last relevant date, if any.
    fn maturity_date(&self) -> Option<NaiveDate> {
        None
    }
}

/// Arguments needed for pricing a European option leaf.
#[derive(Debug, Clone)]
pub struct OptionArguments {
    /// The payoff.
    pub payoff: Payoff,
    /// The exercise specification.
    pub exercise: Exercise,
}

/// A European option on a single underlying, priceable once a pricing
/// engine has been attached.
///
/// Payoff and exercise are immutable after construction; engine attachment
/// is the only allowed post-construction mutation and happens exactly once.
#[derive(Debug, Clone)]
pub struct EuropeanOption {
    payoff: Payoff,
    exercise: Exercise,
    engine: Option<Arc<dyn PricingEngine<OptionArguments>>>,
}

impl EuropeanOption {
    /// Create a new option leaf from a payoff and an exercise.
    pub fn new(payoff: Payoff, exercise: Exercise) -> Self {
        Self {
            payoff,
            exercise,
            engine: None,
        }
    }

    /// The payoff.
    pub fn payoff(&self) -> &Payoff {
        &self.payoff
    }

    /// The exercise.
    pub fn exercise(&self) -> &Exercise {
        &self.exercise
    }

    /// Human-readable description (used in error reporting).
    pub fn description(&self) -> String {
        format!("{} {}", self.payoff.description(), self.exercise)
    }

    /// Whether a pricing engine has been attached.
    pub fn has_engine(&self) -> bool {
        self.engine.is_some()
    }

    /// Attach a pricing engine. Write-once.
    ///
    /// # Errors
    /// [`Error::DuplicateEngine`] if an engine is already attached.
    pub fn set_pricing_engine(
        &mut self,
        engine: Arc<dyn PricingEngine<OptionArguments>>,
    ) -> Result<()> {
        if self.engine.is_some() {
            return Err(Error::DuplicateEngine {
                leaf: self.description(),
            });
        }
        self.engine = Some(engine);
        Ok(())
    }

    /// Get the arguments for a pricing engine.
    pub fn arguments(&self) -> OptionArguments {
        OptionArguments {
            payoff: self.payoff,
            exercise: self.exercise.clone(),
        }
    }

    /// Full pricing results from the attached engine.
    ///
    /// # Errors
    /// [`Error::EngineNotAttached`] if no engine has been attached.
    pub fn results(&self) -> Result<PricingResults> {
        match &self.engine {
            Some(engine) => engine.calculate(&self.arguments()),
            None => Err(Error::EngineNotAttached {
                leaf: self.description(),
            }),
        }
    }
}

impl Instrument for EuropeanOption {
    fn npv(&self) -> Result<Real> {
        Ok(self.results()?.npv)
    }

    fn maturity_date(&self) -> Option<NaiveDate> {
        Some(self.exercise.last_date())
    }
}
