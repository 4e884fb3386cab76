//! Analytic European vanilla option engine (Garman–Kohlhagen).
//!
//! Prices European vanilla FX options using the closed-form
//! Garman–Kohlhagen formula, i.e. Black–Scholes–Merton with the foreign
//! interest rate in place of the dividend yield.

use crate::distributions::{normal_cdf, normal_pdf};
use crate::process::GarmanKohlhagenProcess;
use crate::termstructures::year_fraction;
use fxb_core::{Error, Real, Result};
use fxb_instruments::{OptionArguments, OptionType, Payoff, PricingEngine, PricingResults};
use std::sync::Arc;

/// Analytic pricing engine for European vanilla FX options.
///
/// $$C = S e^{-r_f T} N(d_1) - K e^{-r_d T} N(d_2)$$
/// $$P = K e^{-r_d T} N(-d_2) - S e^{-r_f T} N(-d_1)$$
///
/// where $d_{1,2} = \frac{\ln(S/K) + (r_d - r_f \pm \sigma^2/2)T}{\sigma\sqrt{T}}$.
#[derive(Debug)]
pub struct AnalyticEuropeanEngine {
    process: Arc<GarmanKohlhagenProcess>,
}

impl AnalyticEuropeanEngine {
    /// Create a new engine with the given process.
    pub fn new(process: Arc<GarmanKohlhagenProcess>) -> Self {
        Self { process }
    }
}

/// Compute the Garman–Kohlhagen price and Greeks for a European FX option.
///
/// Returns `(price, delta, gamma, vega)`.
pub fn garman_kohlhagen(
    option_type: OptionType,
    spot: Real,
    strike: Real,
    domestic_rate: Real,
    foreign_rate: Real,
    volatility: Real,
    time_to_expiry: Real,
) -> (Real, Real, Real, Real) {
    let phi = option_type.sign();
    let t = time_to_expiry;

    if t <= 0.0 {
        let intrinsic = (phi * (spot - strike)).max(0.0);
        return (intrinsic, 0.0, 0.0, 0.0);
    }

    let rd = domestic_rate;
    let rf = foreign_rate;
    let sigma = volatility;
    let sqrt_t = t.sqrt();
    let std_dev = sigma * sqrt_t;
    let df_d = (-rd * t).exp();
    let df_f = (-rf * t).exp();
    let fwd = spot * ((rd - rf) * t).exp();

    let (d1, d2) = if std_dev > 1e-15 {
        let d1 = ((spot / strike).ln() + (rd - rf + 0.5 * sigma * sigma) * t) / std_dev;
        let d2 = d1 - std_dev;
        (d1, d2)
    } else {
        let big = if fwd > strike { 1e15 } else { -1e15 };
        (big, big)
    };

    let nd1 = normal_cdf(phi * d1);
    let nd2 = normal_cdf(phi * d2);
    let npd1 = normal_pdf(d1);

    let price = phi * (spot * df_f * nd1 - strike * df_d * nd2);
    let delta = phi * df_f * nd1;
    let gamma = if std_dev > 1e-15 {
        df_f * npd1 / (spot * std_dev)
    } else {
        0.0
    };
    let vega = spot * df_f * npd1 * sqrt_t;

    (price, delta, gamma, vega)
}

impl PricingEngine<OptionArguments> for AnalyticEuropeanEngine {
    fn calculate(&self, args: &OptionArguments) -> Result<PricingResults> {
        let payoff = match &args.payoff {
            Payoff::Vanilla(p) => p,
            other => {
                return Err(Error::InvalidArgument(format!(
                    "vanilla option engine cannot price {}",
                    other.description()
                )))
            }
        };

        let spot = self.process.spot();
        let expiry = args.exercise.last_date();
        let t = year_fraction(self.process.reference_date(), expiry);
        let rd = self.process.domestic().rate();
        let rf = self.process.foreign().rate();
        let sigma = self.process.volatility().black_vol(t, payoff.strike);

        let (price, delta, gamma, vega) =
            garman_kohlhagen(payoff.option_type, spot, payoff.strike, rd, rf, sigma, t);

        Ok(PricingResults::from_npv(price)
            .with_result("delta", delta)
            .with_result("gamma", gamma)
            .with_result("vega", vega))
    }
}
