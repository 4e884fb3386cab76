//! Analytic cash-or-nothing digital option engine.

use crate::distributions::normal_cdf;
use crate::process::GarmanKohlhagenProcess;
use crate::termstructures::year_fraction;
use fxb_core::{Error, Result};
use fxb_instruments::{OptionArguments, Payoff, PricingEngine, PricingResults};
use std::sync::Arc;

/// Analytic pricing engine for European cash-or-nothing digital FX options.
///
/// $$V = c \cdot e^{-r_d T} N(\phi d_2)$$
///
/// with $d_2 = \frac{\ln(S/K) + (r_d - r_f - \sigma^2/2)T}{\sigma\sqrt{T}}$.
#[derive(Debug)]
pub struct AnalyticDigitalEngine {
    process: Arc<GarmanKohlhagenProcess>,
}

impl AnalyticDigitalEngine {
    /// Create a new engine with the given process.
    pub fn new(process: Arc<GarmanKohlhagenProcess>) -> Self {
        Self { process }
    }
}

impl PricingEngine<OptionArguments> for AnalyticDigitalEngine {
    fn calculate(&self, args: &OptionArguments) -> Result<PricingResults> {
        let payoff = match &args.payoff {
            Payoff::Digital(p) => p,
            other => {
                return Err(Error::InvalidArgument(format!(
                    "digital option engine cannot price {}",
                    other.description()
                )))
            }
        };

        let phi = payoff.option_type.sign();
        let spot = self.process.spot();
        let strike = payoff.strike;
        let expiry = args.exercise.last_date();
        let t = year_fraction(self.process.reference_date(), expiry);
        let rd = self.process.domestic().rate();
        let rf = self.process.foreign().rate();
        let sigma = self.process.volatility().black_vol(t, strike);

        if t <= 0.0 {
            let intrinsic = if phi * (spot - strike) > 0.0 {
                payoff.cash
            } else {
                0.0
            };
            return Ok(PricingResults::from_npv(intrinsic));
        }

        let std_dev = sigma * t.sqrt();
        let d2 = if std_dev > 1e-15 {
            ((spot / strike).ln() + (rd - rf - 0.5 * sigma * sigma) * t) / std_dev
        } else {
            let fwd = spot * ((rd - rf) * t).exp();
            if fwd > strike {
                1e15
            } else {
                -1e15
            }
        };

        let df_d = (-rd * t).exp();
        let npv = payoff.cash * df_d * normal_cdf(phi * d2);
        Ok(PricingResults::from_npv(npv))
    }
}
