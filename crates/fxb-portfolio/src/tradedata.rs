//! Declarative trade documents.
//!
//! These types mirror the persisted trade representation: plain data with
//! string tags, validated before any replication work is done. Field names
//! follow the document schema (PascalCase).

use crate::parsers::{parse_barrier_type, parse_option_type, parse_position_type};
use chrono::NaiveDate;
use fxb_core::{ensure, Currency, Error, Real, Result};
use serde::{Deserialize, Serialize};

/// Option terms of a trade document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OptionData {
    /// Long/short indicator ("Long" / "Short").
    pub long_short: String,
    /// Option type tag ("Call" / "Put").
    pub call_put: String,
    /// Option style tag; only "European" is supported.
    #[serde(default)]
    pub style: String,
    /// Exercise dates; must contain exactly one.
    pub exercise_dates: Vec<NaiveDate>,
    /// Premium schedule (may be empty).
    #[serde(default)]
    pub premium_data: Vec<PremiumData>,
}

/// Barrier terms of a trade document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BarrierData {
    /// Barrier type tag ("UpAndIn" / "UpAndOut" / "DownAndIn" / "DownAndOut").
    #[serde(rename = "Type")]
    pub barrier_type: String,
    /// Barrier monitoring style; empty or "European".
    #[serde(default)]
    pub style: String,
    /// Barrier levels; must contain exactly one.
    pub levels: Vec<Real>,
    /// Rebate paid on the losing side of the barrier event. Non-negative.
    #[serde(default)]
    pub rebate: Real,
}

/// A single premium payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PremiumData {
    /// Premium amount (absolute, in `currency`).
    pub amount: Real,
    /// Premium settlement currency code.
    pub currency: String,
    /// Premium settlement date.
    pub pay_date: NaiveDate,
}

/// A complete FX European barrier option trade document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FxEuropeanBarrierOptionData {
    /// Option terms.
    #[serde(rename = "OptionData")]
    pub option: OptionData,
    /// Barrier terms.
    #[serde(rename = "BarrierData")]
    pub barrier: BarrierData,
    /// Bought (foreign) currency code.
    pub bought_currency: String,
    /// Bought amount; positive.
    pub bought_amount: Real,
    /// Sold (domestic) currency code.
    pub sold_currency: String,
    /// Sold amount; positive.
    pub sold_amount: Real,
    /// Trade-level side actions; must be empty.
    #[serde(default)]
    pub trade_actions: Vec<String>,
}

impl FxEuropeanBarrierOptionData {
    /// Validate the document.
    ///
    /// Detects malformed and unsupported structures before any replication
    /// work is done; replication itself can then assume a well-formed trade.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.option.style == "European",
            Error::UnsupportedStructure(format!("option style unknown: {:?}", self.option.style))
        );
        ensure!(
            self.option.exercise_dates.len() == 1,
            Error::UnsupportedStructure(format!(
                "expected exactly one exercise date, got {}",
                self.option.exercise_dates.len()
            ))
        );
        ensure!(
            self.barrier.levels.len() == 1,
            Error::UnsupportedStructure(format!(
                "expected exactly one barrier level, got {}",
                self.barrier.levels.len()
            ))
        );
        ensure!(
            self.barrier.style.is_empty() || self.barrier.style == "European",
            Error::UnsupportedStructure(format!(
                "only European barrier style supported, got {:?}",
                self.barrier.style
            ))
        );
        ensure!(
            self.trade_actions.is_empty(),
            Error::UnsupportedStructure("trade actions not supported".to_string())
        );

        parse_position_type(&self.option.long_short)?;
        parse_option_type(&self.option.call_put)?;
        parse_barrier_type(&self.barrier.barrier_type)?;
        self.parsed_currency(&self.bought_currency)?;
        self.parsed_currency(&self.sold_currency)?;

        ensure!(
            self.bought_amount > 0.0,
            Error::MalformedConfiguration(format!(
                "bought amount must be positive, got {}",
                self.bought_amount
            ))
        );
        ensure!(
            self.sold_amount > 0.0,
            Error::MalformedConfiguration(format!(
                "sold amount must be positive, got {}",
                self.sold_amount
            ))
        );
        ensure!(
            self.barrier.rebate >= 0.0,
            Error::MalformedConfiguration(format!(
                "rebate must be non-negative, got {}",
                self.barrier.rebate
            ))
        );
        ensure!(
            self.barrier.levels[0] > 0.0,
            Error::MalformedConfiguration(format!(
                "barrier level must be positive, got {}",
                self.barrier.levels[0]
            ))
        );

        for premium in &self.option.premium_data {
            self.parsed_currency(&premium.currency)?;
            ensure!(
                premium.amount.is_finite(),
                Error::MalformedConfiguration(format!(
                    "premium amount must be finite, got {}",
                    premium.amount
                ))
            );
        }
        Ok(())
    }

    fn parsed_currency(&self, code: &str) -> Result<Currency> {
        fxb_core::parse_currency(code)
            .map_err(|_| Error::MalformedConfiguration(format!("unknown currency code {code:?}")))
    }
}
