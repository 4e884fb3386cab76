//! # fxb-pricingengines
//!
//! Pricing engines for fxbarrier-rs: flat term structures, the
//! Garman–Kohlhagen FX process, analytic engines for vanilla and
//! cash-or-nothing digital options, and a discounting engine for fixed
//! cashflows.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analytic_digital_engine;
pub mod analytic_european_engine;
pub mod discounting_cashflow_engine;
pub mod distributions;
pub mod process;
pub mod termstructures;

pub use analytic_digital_engine::AnalyticDigitalEngine;
pub use analytic_european_engine::{garman_kohlhagen, AnalyticEuropeanEngine};
pub use discounting_cashflow_engine::DiscountingCashflowEngine;
pub use process::GarmanKohlhagenProcess;
pub use termstructures::{year_fraction, BlackConstantVol, FlatForward};
