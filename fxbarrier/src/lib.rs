//! # fxbarrier
//!
//! Static-replication pricing of FX European single-barrier options.
//!
//! A declarative trade document (currencies, amounts, option and barrier
//! terms) is turned into a priced instrument: the barrier payoff is
//! replicated exactly by a fixed combination of vanilla and cash-or-nothing
//! digital options, each leaf is bound to its Garman–Kohlhagen engine, and
//! direction, notional, and premiums are folded in.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `fxb-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use fxbarrier::instruments::{BarrierType, OptionType};
//! use fxbarrier::portfolio::replicate_barrier;
//!
//! let expiry = chrono::NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();
//! let composite = replicate_barrier(
//!     OptionType::Call,
//!     BarrierType::UpOut,
//!     100.0, // strike
//!     120.0, // barrier
//!     5.0,   // rebate
//!     expiry,
//! )
//! .unwrap();
//! assert_eq!(composite.len(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, currencies, and error definitions.
pub use fxb_core as core;

/// Payoffs, option leaves, cashflows, and composite instruments.
pub use fxb_instruments as instruments;

/// Term structures and analytic pricing engines.
pub use fxb_pricingengines as pricingengines;

/// Trade documents, replication, engine factory, and trade assembly.
pub use fxb_portfolio as portfolio;
