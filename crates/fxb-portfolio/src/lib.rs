//! # fxb-portfolio
//!
//! The trade layer of fxbarrier-rs: declarative trade documents, string
//! parsers, the engine factory, the static-replication selector for European
//! single-barrier options, premium handling, and trade assembly.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod enginefactory;
pub mod fx_european_barrier_option;
pub mod parsers;
pub mod premiums;
pub mod replication;
pub mod tradedata;

pub use enginefactory::{BlackScholesEngineFactory, EngineFactory};
pub use fx_european_barrier_option::{FxEuropeanBarrierOption, PricedTrade, VanillaInstrument};
pub use parsers::{parse_barrier_type, parse_date, parse_option_type, parse_position_type};
pub use premiums::add_premiums;
pub use replication::replicate_barrier;
pub use tradedata::{BarrierData, FxEuropeanBarrierOptionData, OptionData, PremiumData};
