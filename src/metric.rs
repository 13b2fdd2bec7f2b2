#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::Serialize;

use crate::constants::{
    DPPI_SCALE, WEIGHT_AVERAGE, WEIGHT_BOUNDARY_PERCENTAGE, WEIGHT_FIFTIES, WEIGHT_HUNDREDS,
    WEIGHT_NOT_OUTS, WEIGHT_STRIKE_RATE,
};
use crate::error::Result;
use crate::record::BattingRecord;
use crate::validation::ValidationPolicy;

/// One weighted term of the BPI formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Component {
    StrikeRate,
    NotOuts,
    Hundreds,
    Fifties,
    Average,
    BoundaryPercentage,
}

impl Component {
    /// All components in formula order.
    pub const ALL: [Component; 6] = [
        Component::StrikeRate,
        Component::NotOuts,
        Component::Hundreds,
        Component::Fifties,
        Component::Average,
        Component::BoundaryPercentage,
    ];

    pub fn weight(self) -> f64 {
        match self {
            Component::StrikeRate => WEIGHT_STRIKE_RATE,
            Component::NotOuts => WEIGHT_NOT_OUTS,
            Component::Hundreds => WEIGHT_HUNDREDS,
            Component::Fifties => WEIGHT_FIFTIES,
            Component::Average => WEIGHT_AVERAGE,
            Component::BoundaryPercentage => WEIGHT_BOUNDARY_PERCENTAGE,
        }
    }

    /// Display label used for the breakdown chart.
    pub fn label(self) -> &'static str {
        match self {
            Component::StrikeRate => "Strike Rate Contribution",
            Component::NotOuts => "Not Outs Contribution",
            Component::Hundreds => "Hundreds Contribution",
            Component::Fifties => "Fifties Contribution",
            Component::Average => "Average Contribution",
            Component::BoundaryPercentage => "Boundary % Contribution",
        }
    }

    fn raw_value(self, record: &BattingRecord) -> f64 {
        match self {
            Component::StrikeRate => record.strike_rate,
            Component::NotOuts => record.not_outs as f64,
            Component::Hundreds => record.hundreds as f64,
            Component::Fifties => record.fifties as f64,
            Component::Average => record.batting_average,
            Component::BoundaryPercentage => record.boundary_percentage,
        }
    }

    /// Weighted contribution of this component for `record`.
    pub fn contribution(self, record: &BattingRecord) -> f64 {
        self.raw_value(record) * self.weight()
    }
}

/// The six weighted BPI terms, in formula order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComponentBreakdown {
    contributions: [(Component, f64); 6],
}

impl ComponentBreakdown {
    fn of(record: &BattingRecord) -> Self {
        ComponentBreakdown {
            contributions: Component::ALL.map(|c| (c, c.contribution(record))),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Component, f64)> + '_ {
        self.contributions.iter().copied()
    }

    pub fn get(&self, component: Component) -> f64 {
        self.contributions
            .iter()
            .find(|(c, _)| *c == component)
            .map(|&(_, v)| v)
            .unwrap_or(0.0)
    }

    /// `(label, value)` pairs for chart rendering.
    pub fn labelled(&self) -> Vec<(&'static str, f64)> {
        self.iter().map(|(c, v)| (c.label(), v)).collect()
    }

    /// Left-to-right sum of the terms. This is the BPI.
    pub fn total(&self) -> f64 {
        self.contributions.iter().fold(0.0, |acc, &(_, v)| acc + v)
    }
}

/// BPI, DPPI and the component breakdown for one record.
#[cfg_attr(feature = "python", pyclass(frozen))]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScoreCard {
    pub record: BattingRecord,
    pub bpi: f64,
    pub dppi: f64,
    pub breakdown: ComponentBreakdown,
}

impl std::fmt::Display for ScoreCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BPI {:.2} | DPPI {:.2}", self.bpi, self.dppi)
    }
}

/// Calculate the Batsman Performance Index under the default policy.
///
/// ```text
/// BPI = SR*0.30 + NO*0.10 + 100s*0.05 + 50s*0.15 + Avg*0.20 + Bdry%*0.20
/// ```
///
/// # Errors
/// `InvalidInput` for non-finite fields and for negative strike rate,
/// average or counts.
pub fn compute_bpi(record: &BattingRecord) -> Result<f64> {
    compute_bpi_with_policy(record, ValidationPolicy::default())
}

/// Calculate BPI, validating `record` under `policy` first.
pub fn compute_bpi_with_policy(record: &BattingRecord, policy: ValidationPolicy) -> Result<f64> {
    Ok(component_breakdown_with_policy(record, policy)?.total())
}

/// Calculate DPPI (`average * strike_rate / 100`) under the default policy.
pub fn compute_dppi(average: f64, strike_rate: f64) -> Result<f64> {
    compute_dppi_with_policy(average, strike_rate, ValidationPolicy::default())
}

/// Calculate DPPI, validating both arguments under `policy` first.
pub fn compute_dppi_with_policy(
    average: f64,
    strike_rate: f64,
    policy: ValidationPolicy,
) -> Result<f64> {
    policy.check_rate("batting_average", average)?;
    policy.check_rate("strike_rate", strike_rate)?;
    Ok((average * strike_rate) / DPPI_SCALE)
}

/// Split BPI into its six weighted terms under the default policy.
pub fn component_breakdown(record: &BattingRecord) -> Result<ComponentBreakdown> {
    component_breakdown_with_policy(record, ValidationPolicy::default())
}

/// Split BPI into its six weighted terms, validating under `policy`.
pub fn component_breakdown_with_policy(
    record: &BattingRecord,
    policy: ValidationPolicy,
) -> Result<ComponentBreakdown> {
    record.validate(policy)?;
    Ok(ComponentBreakdown::of(record))
}

/// Everything the calculator shows for one record.
pub fn score_record(record: &BattingRecord, policy: ValidationPolicy) -> Result<ScoreCard> {
    let breakdown = component_breakdown_with_policy(record, policy)?;
    let dppi = compute_dppi_with_policy(record.batting_average, record.strike_rate, policy)?;

    Ok(ScoreCard {
        record: *record,
        bpi: breakdown.total(),
        dppi,
        breakdown,
    })
}
