//! Terminal payoff descriptions.
//!
//! Payoffs describe the payoff of an option at expiry as a function of the
//! underlying price. Two elementary payoffs are enough to statically
//! replicate a European single-barrier option: the plain vanilla payoff and
//! the cash-or-nothing digital.

use fxb_core::Real;
use std::fmt;

/// Option type (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionType {
    /// A call option (right to buy).
    Call,
    /// A put option (right to sell).
    Put,
}

impl OptionType {
    /// +1 for Call, −1 for Put.
    pub fn sign(self) -> Real {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

/// Standard "plain vanilla" European option payoff.
///
/// `payoff = max(φ(S − K), 0)` where `φ = +1` for Call, `−1` for Put.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlainVanillaPayoff {
    /// Option type.
    pub option_type: OptionType,
    /// Strike price.
    pub strike: Real,
}

impl PlainVanillaPayoff {
    /// Create a new plain vanilla payoff.
    pub fn new(option_type: OptionType, strike: Real) -> Self {
        Self {
            option_type,
            strike,
        }
    }

    /// The payoff at underlying price `price`.
    pub fn value(&self, price: Real) -> Real {
        (self.option_type.sign() * (price - self.strike)).max(0.0)
    }
}

/// Cash-or-nothing digital payoff: pays a fixed amount if in the money.
///
/// `payoff = cash` if `φ(S − K) > 0`, else 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CashOrNothingPayoff {
    /// Option type.
    pub option_type: OptionType,
    /// Strike price.
    pub strike: Real,
    /// Fixed cash payoff.
    pub cash: Real,
}

impl CashOrNothingPayoff {
    /// Create a new cash-or-nothing payoff.
    pub fn new(option_type: OptionType, strike: Real, cash: Real) -> Self {
        Self {
            option_type,
            strike,
            cash,
        }
    }

    /// The payoff at underlying price `price`.
    pub fn value(&self, price: Real) -> Real {
        if self.option_type.sign() * (price - self.strike) > 0.0 {
            self.cash
        } else {
            0.0
        }
    }
}

/// A terminal payoff, either vanilla or digital.
///
/// Immutable once constructed. Note that a digital payoff used inside a
/// barrier replication may carry an option type different from the outer
/// option's type; the type selects which side of the barrier pays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payoff {
    /// Plain vanilla payoff.
    Vanilla(PlainVanillaPayoff),
    /// Cash-or-nothing digital payoff.
    Digital(CashOrNothingPayoff),
}

impl Payoff {
    /// Create a plain vanilla payoff.
    pub fn vanilla(option_type: OptionType, strike: Real) -> Self {
        Payoff::Vanilla(PlainVanillaPayoff::new(option_type, strike))
    }

    /// Create a cash-or-nothing digital payoff.
    pub fn digital_cash_or_nothing(option_type: OptionType, strike: Real, cash: Real) -> Self {
        Payoff::Digital(CashOrNothingPayoff::new(option_type, strike, cash))
    }

    /// The payoff at underlying price `price`.
    pub fn value(&self, price: Real) -> Real {
        match self {
            Payoff::Vanilla(p) => p.value(price),
            Payoff::Digital(p) => p.value(price),
        }
    }

    /// The option type (call/put).
    pub fn option_type(&self) -> OptionType {
        match self {
            Payoff::Vanilla(p) => p.option_type,
            Payoff::Digital(p) => p.option_type,
        }
    }

    /// The strike (the digital's trigger level counts as its strike).
    pub fn strike(&self) -> Real {
        match self {
            Payoff::Vanilla(p) => p.strike,
            Payoff::Digital(p) => p.strike,
        }
    }

    /// Human-readable description.
    pub fn description(&self) -> String {
        match self {
            Payoff::Vanilla(p) => format!("Vanilla {} @ {}", p.option_type, p.strike),
            Payoff::Digital(p) => format!(
                "CashOrNothing {} @ {} paying {}",
                p.option_type, p.strike, p.cash
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_vanilla_call() {
        let p = PlainVanillaPayoff::new(OptionType::Call, 100.0);
        assert!((p.value(110.0) - 10.0).abs() < 1e-15);
        assert!((p.value(90.0) - 0.0).abs() < 1e-15);
        assert!((p.value(100.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn plain_vanilla_put() {
        let p = PlainVanillaPayoff::new(OptionType::Put, 100.0);
        assert!((p.value(90.0) - 10.0).abs() < 1e-15);
        assert!((p.value(110.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn cash_or_nothing_call() {
        let p = CashOrNothingPayoff::new(OptionType::Call, 100.0, 5.0);
        assert!((p.value(110.0) - 5.0).abs() < 1e-15);
        assert!((p.value(90.0) - 0.0).abs() < 1e-15);
        // at the strike the condition is strict, so nothing is paid
        assert!((p.value(100.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn cash_or_nothing_put() {
        let p = CashOrNothingPayoff::new(OptionType::Put, 100.0, 5.0);
        assert!((p.value(90.0) - 5.0).abs() < 1e-15);
        assert!((p.value(110.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn tagged_variant_dispatch() {
        let v = Payoff::vanilla(OptionType::Call, 100.0);
        let d = Payoff::digital_cash_or_nothing(OptionType::Put, 120.0, 5.0);
        assert!((v.value(105.0) - 5.0).abs() < 1e-15);
        assert!((d.value(110.0) - 5.0).abs() < 1e-15);
        assert_eq!(v.option_type(), OptionType::Call);
        assert_eq!(d.option_type(), OptionType::Put);
        assert!((d.strike() - 120.0).abs() < 1e-15);
    }

    #[test]
    fn descriptions() {
        let v = Payoff::vanilla(OptionType::Put, 95.0);
        assert_eq!(v.description(), "Vanilla Put @ 95");
        let d = Payoff::digital_cash_or_nothing(OptionType::Call, 120.0, 20.0);
        assert_eq!(d.description(), "CashOrNothing Call @ 120 paying 20");
    }
}
