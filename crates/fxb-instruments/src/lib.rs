//! # fxb-instruments
//!
//! Financial instruments for fxbarrier-rs: terminal payoff descriptions,
//! exercise specifications, priceable European option leaves, premium
//! cashflows, and linear combinations of instruments.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod barrier;
pub mod cashflow;
pub mod composite;
pub mod exercise;
pub mod instrument;
pub mod payoff;

pub use barrier::BarrierType;
pub use cashflow::{CashflowArguments, SimpleCashflow};
pub use composite::CompositeInstrument;
pub use exercise::{Exercise, ExerciseType};
pub use instrument::{
    EuropeanOption, Instrument, OptionArguments, PricingEngine, PricingResults,
};
pub use payoff::{CashOrNothingPayoff, OptionType, Payoff, PlainVanillaPayoff};
