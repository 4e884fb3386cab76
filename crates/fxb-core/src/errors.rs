//! Error types for fxbarrier-rs.
//!
//! A single `thiserror`-derived enum covers every failure the pricing
//! pipeline can report. All failures are deterministic logic errors and are
//! surfaced synchronously to the caller of the build/value step; there is no
//! retry and no partial result.

use thiserror::Error;

/// The top-level error type used throughout fxbarrier-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A trade document is missing required fields, carries fields with the
    /// wrong cardinality, or holds values outside their domain
    /// (e.g. a negative rebate).
    #[error("malformed configuration: {0}")]
    MalformedConfiguration(String),

    /// The trade is well-formed but describes a structure this library does
    /// not price (non-European style, multiple exercise dates, ...).
    #[error("unsupported structure: {0}")]
    UnsupportedStructure(String),

    /// A barrier tag in a trade document is not one of the four
    /// recognized values.
    #[error("unknown barrier type: {0}")]
    UnknownBarrierType(String),

    /// The engine factory has no builder registered for a required
    /// instrument class. Aborts pricing of the trade.
    #[error("no engine found for {instrument_class}")]
    NoEngineFound {
        /// The instrument class the factory was asked for.
        instrument_class: String,
    },

    /// A present value was requested before a pricing engine was bound.
    /// A programming-contract violation, not a data problem.
    #[error("no pricing engine attached to {leaf}")]
    EngineNotAttached {
        /// Description of the instrument missing its engine.
        leaf: String,
    },

    /// A pricing engine was attached twice to the same instrument.
    /// Attachment is write-once.
    #[error("pricing engine already attached to {leaf}")]
    DuplicateEngine {
        /// Description of the instrument.
        leaf: String,
    },

    /// Invalid argument to a lower-level API (unknown currency code,
    /// wrong payoff class for an engine, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout fxbarrier-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return early with the given error unless the condition holds.
///
/// # Example
/// ```
/// use fxb_core::{ensure, errors::Error};
/// fn non_negative(x: f64) -> fxb_core::errors::Result<f64> {
///     ensure!(
///         x >= 0.0,
///         Error::MalformedConfiguration(format!("expected non-negative value, got {x}"))
///     );
///     Ok(x)
/// }
/// assert!(non_negative(1.0).is_ok());
/// assert!(non_negative(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
}

/// Return early with the given error.
///
/// # Example
/// ```
/// use fxb_core::{fail, errors::Error};
/// fn always_err() -> fxb_core::errors::Result<()> {
///     fail!(Error::InvalidArgument("nothing to do".into()));
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($err:expr) => {
        return Err($err)
    };
}
