//! Cricket Core - Batsman Performance Index (BPI) and DPPI scoring library.
//!
//! This library computes batting metrics from six statistics, scores and
//! compares player rosters, and exposes it all to a Python dashboard via PyO3
//! when built with the `python` feature.

pub mod comparison;
pub mod constants;
pub mod error;
pub mod logging;
pub mod metric;
pub mod record;
pub mod roster;
pub mod validation;

#[cfg(feature = "python")]
mod python;

pub use comparison::{
    radar_axis_max, rank_by_bpi, score_player, score_players, select_players, summarize,
    write_comparison, ComparisonSummary, PlayerScore,
};
pub use constants::{BPI_WEIGHTS, DPPI_SCALE, STAT_LABELS};
pub use error::{MetricError, Result};
pub use logging::init_logging;
pub use metric::{
    component_breakdown, component_breakdown_with_policy, compute_bpi, compute_bpi_with_policy,
    compute_dppi, compute_dppi_with_policy, score_record, Component, ComponentBreakdown,
    ScoreCard,
};
pub use record::BattingRecord;
pub use roster::{read_roster, sample_players, Player};
pub use validation::ValidationPolicy;
