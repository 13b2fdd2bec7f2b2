#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::{
    CALCULATOR_DEFAULT_AVERAGE, CALCULATOR_DEFAULT_BOUNDARY_PERCENTAGE,
    CALCULATOR_DEFAULT_FIFTIES, CALCULATOR_DEFAULT_HUNDREDS, CALCULATOR_DEFAULT_NOT_OUTS,
    CALCULATOR_DEFAULT_STRIKE_RATE,
};

/// Batting statistics consumed by the metric engine.
///
/// A plain value: it has no identity and is never mutated after construction.
/// Counts are signed so that a negative count reaches validation instead of
/// failing at the caller's type boundary.
#[cfg_attr(feature = "python", pyclass(frozen, get_all))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BattingRecord {
    /// Runs per 100 balls faced
    pub strike_rate: f64,

    /// Runs per dismissal
    pub batting_average: f64,

    pub fifties: i64,

    pub hundreds: i64,

    /// Share of runs scored in boundaries (0-100 by convention)
    pub boundary_percentage: f64,

    pub not_outs: i64,
}

impl BattingRecord {
    pub fn new(
        strike_rate: f64,
        batting_average: f64,
        fifties: i64,
        hundreds: i64,
        boundary_percentage: f64,
        not_outs: i64,
    ) -> Self {
        BattingRecord {
            strike_rate,
            batting_average,
            fifties,
            hundreds,
            boundary_percentage,
            not_outs,
        }
    }

    /// The values the calculator form starts with.
    pub fn calculator_default() -> Self {
        BattingRecord {
            strike_rate: CALCULATOR_DEFAULT_STRIKE_RATE,
            batting_average: CALCULATOR_DEFAULT_AVERAGE,
            fifties: CALCULATOR_DEFAULT_FIFTIES,
            hundreds: CALCULATOR_DEFAULT_HUNDREDS,
            boundary_percentage: CALCULATOR_DEFAULT_BOUNDARY_PERCENTAGE,
            not_outs: CALCULATOR_DEFAULT_NOT_OUTS,
        }
    }

    /// Raw statistics in `STAT_LABELS` order (average first).
    pub fn stat_values(&self) -> [f64; 6] {
        [
            self.batting_average,
            self.strike_rate,
            self.fifties as f64,
            self.hundreds as f64,
            self.boundary_percentage,
            self.not_outs as f64,
        ]
    }
}

impl std::fmt::Display for BattingRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SR {} | Avg {} | 50s {} | 100s {} | Bdry% {} | NO {}",
            self.strike_rate,
            self.batting_average,
            self.fifties,
            self.hundreds,
            self.boundary_percentage,
            self.not_outs
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::STAT_LABELS;

    #[test]
    fn test_stat_values_follow_label_order() {
        let record = BattingRecord::new(126.13, 37.60, 2, 0, 47.99, 41);
        let values = record.stat_values();

        assert_eq!(values.len(), STAT_LABELS.len());
        assert_eq!(values[0], 37.60); // Average
        assert_eq!(values[1], 126.13); // Strike_Rate
        assert_eq!(values[5], 41.0); // Not_Outs
    }

    #[test]
    fn test_calculator_default() {
        let record = BattingRecord::calculator_default();
        assert_eq!(record, BattingRecord::new(120.0, 30.0, 10, 1, 50.0, 5));
    }
}
