//! Static replication of European single-barrier options.
//!
//! A European barrier option (strike K, barrier B, monitored at expiry only)
//! is replicated exactly by a fixed linear combination of vanilla options and
//! cash-or-nothing digitals:
//!
//! - a rebate digital at B paying the rebate on the side of the barrier where
//!   the vanilla payoff is dead, always held long;
//! - in the region where the payoff is alive, either the vanilla struck at K,
//!   or (when the barrier cuts through the payoff, B > K for calls, B < K for
//!   puts) the vanilla struck at B plus a digital paying the gap |B − K|;
//! - knock-out legs are the complement of the knock-in legs, so the In and
//!   Out combinations of the same side sum to the plain vanilla.
//!
//! The combination is chosen by a pure decision table over
//! (option type, barrier class, B vs K); no market data is involved.

use chrono::NaiveDate;
use fxb_core::{ensure, Error, Real, Result};
use fxb_instruments::{
    BarrierType, CompositeInstrument, EuropeanOption, Exercise, OptionType, Payoff,
};

/// The side of the barrier on which the vanilla payoff is alive at expiry.
///
/// Up-and-in and down-and-out options pay the vanilla payoff above the
/// barrier; up-and-out and down-and-in options pay it below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActiveSide {
    AboveBarrier,
    BelowBarrier,
}

impl ActiveSide {
    fn of(barrier_type: BarrierType) -> Self {
        match barrier_type {
            BarrierType::UpIn | BarrierType::DownOut => ActiveSide::AboveBarrier,
            BarrierType::UpOut | BarrierType::DownIn => ActiveSide::BelowBarrier,
        }
    }
}

/// Barrier level relative to the strike; `B == K` counts as `AtOrBelow`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Moneyness {
    Above,
    AtOrBelow,
}

/// The three leaf templates the decision table selects from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LeafKind {
    /// Vanilla option struck at K.
    VanillaK,
    /// Vanilla option struck at B.
    VanillaB,
    /// Digital at B paying |B − K|.
    DigitalGap,
}

/// Build the composite instrument that statically replicates a European
/// single-barrier option with the given terms.
///
/// Pure payoff algebra: the result carries no pricing engines and no market
/// data. The rebate digital is always present with weight +1, so the
/// composite is never empty; the remaining 0–3 leaves follow the decision
/// table. `B == K` deliberately routes to the `B ≤ K` branch.
///
/// # Errors
/// `MalformedConfiguration` if the strike or level is not positive or the
/// rebate is negative.
pub fn replicate_barrier(
    option_type: OptionType,
    barrier_type: BarrierType,
    strike: Real,
    level: Real,
    rebate: Real,
    expiry: NaiveDate,
) -> Result<CompositeInstrument> {
    ensure!(
        strike > 0.0,
        Error::MalformedConfiguration(format!("strike must be positive, got {strike}"))
    );
    ensure!(
        level > 0.0,
        Error::MalformedConfiguration(format!("barrier level must be positive, got {level}"))
    );
    ensure!(
        rebate >= 0.0,
        Error::MalformedConfiguration(format!("rebate must be non-negative, got {rebate}"))
    );

    let exercise = Exercise::european(expiry);
    let side = ActiveSide::of(barrier_type);
    let moneyness = if level > strike {
        Moneyness::Above
    } else {
        Moneyness::AtOrBelow
    };

    // The rebate pays on the dead side of the barrier: a put digital when the
    // payoff is alive above, a call digital when it is alive below.
    let rebate_type = match side {
        ActiveSide::AboveBarrier => OptionType::Put,
        ActiveSide::BelowBarrier => OptionType::Call,
    };
    let rebate_payoff = Payoff::digital_cash_or_nothing(rebate_type, level, rebate);

    let legs: &[(LeafKind, Real)] = match (option_type, side, moneyness) {
        (OptionType::Call, ActiveSide::AboveBarrier, Moneyness::Above) => {
            &[(LeafKind::VanillaB, 1.0), (LeafKind::DigitalGap, 1.0)]
        }
        (OptionType::Call, ActiveSide::AboveBarrier, Moneyness::AtOrBelow) => {
            &[(LeafKind::VanillaK, 1.0)]
        }
        (OptionType::Call, ActiveSide::BelowBarrier, Moneyness::Above) => &[
            (LeafKind::VanillaK, 1.0),
            (LeafKind::VanillaB, -1.0),
            (LeafKind::DigitalGap, -1.0),
        ],
        (OptionType::Call, ActiveSide::BelowBarrier, Moneyness::AtOrBelow) => &[],
        (OptionType::Put, ActiveSide::AboveBarrier, Moneyness::Above) => &[],
        (OptionType::Put, ActiveSide::AboveBarrier, Moneyness::AtOrBelow) => &[
            (LeafKind::VanillaK, 1.0),
            (LeafKind::VanillaB, -1.0),
            (LeafKind::DigitalGap, -1.0),
        ],
        (OptionType::Put, ActiveSide::BelowBarrier, Moneyness::Above) => {
            &[(LeafKind::VanillaK, 1.0)]
        }
        (OptionType::Put, ActiveSide::BelowBarrier, Moneyness::AtOrBelow) => {
            &[(LeafKind::VanillaB, 1.0), (LeafKind::DigitalGap, 1.0)]
        }
    };

    let mut composite = CompositeInstrument::new();
    composite.add(EuropeanOption::new(rebate_payoff, exercise.clone()));
    for &(kind, multiplier) in legs {
        let payoff = match kind {
            LeafKind::VanillaK => Payoff::vanilla(option_type, strike),
            LeafKind::VanillaB => Payoff::vanilla(option_type, level),
            LeafKind::DigitalGap => {
                Payoff::digital_cash_or_nothing(option_type, level, (level - strike).abs())
            }
        };
        composite.add_with_multiplier(EuropeanOption::new(payoff, exercise.clone()), multiplier);
    }
    Ok(composite)
}
