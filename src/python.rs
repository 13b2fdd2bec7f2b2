//! Python bindings for the dashboard.
//!
//! Built only with the `python` feature. Every function that validates input
//! takes an optional policy name (`"permissive"`, `"non_negative"`,
//! `"calculator"`); the default is `"non_negative"`.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;
use std::fs::File;

use crate::comparison::{
    radar_axis_max, rank_by_bpi, score_players, select_players, summarize, write_comparison,
    ComparisonSummary, PlayerScore,
};
use crate::constants::{BPI_WEIGHTS, DPPI_SCALE, STAT_LABELS};
use crate::error::MetricError;
use crate::logging::init_logging;
use crate::metric::{
    component_breakdown_with_policy, compute_bpi_with_policy, compute_dppi_with_policy,
    score_record, Component, ComponentBreakdown, ScoreCard,
};
use crate::record::BattingRecord;
use crate::roster::{read_roster, sample_players, Player};
use crate::validation::ValidationPolicy;

impl From<MetricError> for PyErr {
    fn from(err: MetricError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

fn parse_policy(policy: Option<&str>) -> PyResult<ValidationPolicy> {
    match policy {
        Some(name) => Ok(name.parse::<ValidationPolicy>()?),
        None => Ok(ValidationPolicy::default()),
    }
}

fn breakdown_dict<'py>(
    py: Python<'py>,
    breakdown: &ComponentBreakdown,
) -> PyResult<Bound<'py, PyDict>> {
    // Python dicts keep insertion order, so chart slices come out in formula order.
    let dict = PyDict::new_bound(py);
    for (label, value) in breakdown.labelled() {
        dict.set_item(label, value)?;
    }
    Ok(dict)
}

#[pymethods]
impl BattingRecord {
    #[new]
    #[pyo3(signature = (strike_rate, batting_average, fifties, hundreds, boundary_percentage, not_outs))]
    fn py_new(
        strike_rate: f64,
        batting_average: f64,
        fifties: i64,
        hundreds: i64,
        boundary_percentage: f64,
        not_outs: i64,
    ) -> Self {
        BattingRecord::new(
            strike_rate,
            batting_average,
            fifties,
            hundreds,
            boundary_percentage,
            not_outs,
        )
    }

    /// The calculator form's starting values.
    #[staticmethod]
    #[pyo3(name = "calculator_default")]
    fn py_calculator_default() -> Self {
        BattingRecord::calculator_default()
    }

    /// Raw statistics in STAT_LABELS order.
    #[pyo3(name = "stat_values")]
    fn py_stat_values(&self) -> Vec<f64> {
        self.stat_values().to_vec()
    }

    /// Raise ValueError if the record fails `policy`.
    #[pyo3(name = "validate", signature = (policy = None))]
    fn py_validate(&self, policy: Option<&str>) -> PyResult<()> {
        Ok(self.validate(parse_policy(policy)?)?)
    }

    fn __str__(&self) -> String {
        self.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "BattingRecord(strike_rate={}, batting_average={}, fifties={}, hundreds={}, boundary_percentage={}, not_outs={})",
            self.strike_rate,
            self.batting_average,
            self.fifties,
            self.hundreds,
            self.boundary_percentage,
            self.not_outs
        )
    }
}

#[pymethods]
impl Player {
    #[new]
    fn py_new(name: String, record: BattingRecord) -> Self {
        Player::new(name, record)
    }

    fn __repr__(&self) -> String {
        format!("Player({:?}, {})", self.name, self.record)
    }
}

#[pymethods]
impl ScoreCard {
    #[getter(record)]
    fn py_record(&self) -> BattingRecord {
        self.record
    }

    #[getter(bpi)]
    fn py_bpi(&self) -> f64 {
        self.bpi
    }

    #[getter(dppi)]
    fn py_dppi(&self) -> f64 {
        self.dppi
    }

    /// Component label -> weighted contribution, in formula order.
    #[getter(breakdown)]
    fn py_breakdown<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        breakdown_dict(py, &self.breakdown)
    }

    fn __str__(&self) -> String {
        self.to_string()
    }

    fn __repr__(&self) -> String {
        format!("ScoreCard(bpi={:.4}, dppi={:.4})", self.bpi, self.dppi)
    }
}

#[pymethods]
impl PlayerScore {
    fn __str__(&self) -> String {
        self.to_string()
    }

    fn __repr__(&self) -> String {
        format!("PlayerScore({:?}, bpi={:.4}, dppi={:.4})", self.name, self.bpi, self.dppi)
    }
}

#[pymethods]
impl ComparisonSummary {
    fn __repr__(&self) -> String {
        format!(
            "ComparisonSummary({} players, mean_bpi={:.2}, top={:?})",
            self.count, self.mean_bpi, self.top_player
        )
    }
}

/// Batsman Performance Index for a record.
#[pyfunction]
#[pyo3(name = "compute_bpi", signature = (record, policy = None))]
fn py_compute_bpi(record: &BattingRecord, policy: Option<&str>) -> PyResult<f64> {
    Ok(compute_bpi_with_policy(record, parse_policy(policy)?)?)
}

/// DPPI: average * strike rate / 100.
#[pyfunction]
#[pyo3(name = "compute_dppi", signature = (average, strike_rate, policy = None))]
fn py_compute_dppi(average: f64, strike_rate: f64, policy: Option<&str>) -> PyResult<f64> {
    Ok(compute_dppi_with_policy(average, strike_rate, parse_policy(policy)?)?)
}

/// Ordered dict of the six weighted BPI terms.
#[pyfunction]
#[pyo3(name = "component_breakdown", signature = (record, policy = None))]
fn py_component_breakdown<'py>(
    py: Python<'py>,
    record: &BattingRecord,
    policy: Option<&str>,
) -> PyResult<Bound<'py, PyDict>> {
    let breakdown = component_breakdown_with_policy(record, parse_policy(policy)?)?;
    breakdown_dict(py, &breakdown)
}

/// BPI, DPPI and breakdown in one call (calculator page).
#[pyfunction]
#[pyo3(name = "score_record", signature = (record, policy = None))]
fn py_score_record(record: &BattingRecord, policy: Option<&str>) -> PyResult<ScoreCard> {
    Ok(score_record(record, parse_policy(policy)?)?)
}

#[pyfunction]
#[pyo3(name = "sample_players")]
fn py_sample_players() -> Vec<Player> {
    sample_players().to_vec()
}

/// Load a roster CSV (Player,Average,Strike_Rate,Fifties,Hundreds,Boundary_Percentage,Not_Outs).
#[pyfunction]
#[pyo3(name = "read_roster_csv")]
fn py_read_roster_csv(path: &str) -> PyResult<Vec<Player>> {
    let file = File::open(path).map_err(MetricError::from)?;
    Ok(read_roster(file)?)
}

/// Write scored players as the detailed statistics CSV.
#[pyfunction]
#[pyo3(name = "write_comparison_csv")]
fn py_write_comparison_csv(path: &str, scores: Vec<PlayerScore>) -> PyResult<()> {
    let file = File::create(path).map_err(MetricError::from)?;
    Ok(write_comparison(file, &scores)?)
}

/// BPI and DPPI for each player, in input order.
#[pyfunction]
#[pyo3(name = "score_players", signature = (players, policy = None))]
fn py_score_players(
    py: Python<'_>,
    players: Vec<Player>,
    policy: Option<&str>,
) -> PyResult<Vec<PlayerScore>> {
    let policy = parse_policy(policy)?;
    Ok(py.allow_threads(|| score_players(&players, policy))?)
}

#[pyfunction]
#[pyo3(name = "select_players")]
fn py_select_players(players: Vec<Player>, names: Vec<String>) -> Vec<Player> {
    select_players(&players, &names)
}

#[pyfunction]
#[pyo3(name = "rank_by_bpi")]
fn py_rank_by_bpi(scores: Vec<PlayerScore>) -> Vec<PlayerScore> {
    rank_by_bpi(&scores)
}

/// Summary statistics, or None for an empty selection.
#[pyfunction]
#[pyo3(name = "summarize")]
fn py_summarize(scores: Vec<PlayerScore>) -> Option<ComparisonSummary> {
    summarize(&scores)
}

#[pyfunction]
#[pyo3(name = "radar_axis_max")]
fn py_radar_axis_max(players: Vec<Player>) -> f64 {
    radar_axis_max(&players)
}

#[pyfunction]
#[pyo3(name = "init_logging", signature = (verbose = false))]
fn py_init_logging(verbose: bool) -> bool {
    init_logging(verbose)
}

/// Python module definition
#[pymodule]
fn cricket_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Classes
    m.add_class::<BattingRecord>()?;
    m.add_class::<Player>()?;
    m.add_class::<ScoreCard>()?;
    m.add_class::<PlayerScore>()?;
    m.add_class::<ComparisonSummary>()?;

    // Metric functions
    m.add_function(wrap_pyfunction!(py_compute_bpi, m)?)?;
    m.add_function(wrap_pyfunction!(py_compute_dppi, m)?)?;
    m.add_function(wrap_pyfunction!(py_component_breakdown, m)?)?;
    m.add_function(wrap_pyfunction!(py_score_record, m)?)?;

    // Roster and comparison functions
    m.add_function(wrap_pyfunction!(py_sample_players, m)?)?;
    m.add_function(wrap_pyfunction!(py_read_roster_csv, m)?)?;
    m.add_function(wrap_pyfunction!(py_write_comparison_csv, m)?)?;
    m.add_function(wrap_pyfunction!(py_score_players, m)?)?;
    m.add_function(wrap_pyfunction!(py_select_players, m)?)?;
    m.add_function(wrap_pyfunction!(py_rank_by_bpi, m)?)?;
    m.add_function(wrap_pyfunction!(py_summarize, m)?)?;
    m.add_function(wrap_pyfunction!(py_radar_axis_max, m)?)?;

    m.add_function(wrap_pyfunction!(py_init_logging, m)?)?;

    // Constants
    m.add("WEIGHTS", BPI_WEIGHTS.to_vec())?;
    m.add(
        "COMPONENT_LABELS",
        Component::ALL.iter().map(|c| c.label()).collect::<Vec<_>>(),
    )?;
    m.add("STAT_LABELS", STAT_LABELS.to_vec())?;
    m.add("DPPI_SCALE", DPPI_SCALE)?;

    Ok(())
}
