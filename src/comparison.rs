#[cfg(feature = "python")]
use pyo3::prelude::*;
use rayon::prelude::*;
use serde::Serialize;
use statrs::statistics::{Data, Median, Statistics};
use std::collections::HashSet;
use std::io;
use tracing::{debug, warn};

use crate::error::Result;
use crate::metric::{compute_bpi_with_policy, compute_dppi_with_policy};
use crate::record::BattingRecord;
use crate::roster::Player;
use crate::validation::ValidationPolicy;

/// A player's BPI and DPPI alongside the statistics they came from.
#[cfg_attr(feature = "python", pyclass(frozen, get_all))]
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerScore {
    pub name: String,
    pub record: BattingRecord,
    pub bpi: f64,
    pub dppi: f64,
}

impl std::fmt::Display for PlayerScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: BPI {:.2} | DPPI {:.2}", self.name, self.bpi, self.dppi)
    }
}

/// Summary statistics over a selection of scored players.
#[cfg_attr(feature = "python", pyclass(frozen, get_all))]
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonSummary {
    pub count: usize,
    pub mean_bpi: f64,
    pub median_bpi: f64,
    /// Population standard deviation (0.0 for a single player)
    pub std_dev_bpi: f64,
    pub mean_dppi: f64,
    /// Highest BPI; the earliest player wins ties
    pub top_player: String,
}

/// Score a single player.
pub fn score_player(player: &Player, policy: ValidationPolicy) -> Result<PlayerScore> {
    let record = &player.record;
    let bpi = compute_bpi_with_policy(record, policy)?;
    let dppi = compute_dppi_with_policy(record.batting_average, record.strike_rate, policy)?;

    Ok(PlayerScore {
        name: player.name.clone(),
        record: *record,
        bpi,
        dppi,
    })
}

/// Calculate BPI and DPPI for every player.
///
/// Uses parallel processing; results keep the input order. The first
/// invalid record fails the whole call.
pub fn score_players(players: &[Player], policy: ValidationPolicy) -> Result<Vec<PlayerScore>> {
    let scores = players
        .par_iter()
        .map(|player| score_player(player, policy))
        .collect::<Result<Vec<_>>>()?;

    debug!(players = scores.len(), %policy, "scored roster");
    Ok(scores)
}

/// Pick players by name, keeping roster order.
///
/// Names not on the roster are skipped.
pub fn select_players<S: AsRef<str>>(players: &[Player], names: &[S]) -> Vec<Player> {
    let wanted: HashSet<&str> = names.iter().map(|n| n.as_ref()).collect();

    for name in &wanted {
        if !players.iter().any(|p| p.name == *name) {
            warn!(player = %name, "selected player is not on the roster");
        }
    }

    players
        .iter()
        .filter(|p| wanted.contains(p.name.as_str()))
        .cloned()
        .collect()
}

/// Sort by descending BPI. Ties keep their input order.
pub fn rank_by_bpi(scores: &[PlayerScore]) -> Vec<PlayerScore> {
    let mut ranked = scores.to_vec();
    ranked.sort_by(|a, b| b.bpi.total_cmp(&a.bpi));
    ranked
}

/// Summarise a selection. Returns `None` when it is empty.
pub fn summarize(scores: &[PlayerScore]) -> Option<ComparisonSummary> {
    let top = rank_by_bpi(scores).into_iter().next()?;

    let bpis: Vec<f64> = scores.iter().map(|s| s.bpi).collect();
    let dppis: Vec<f64> = scores.iter().map(|s| s.dppi).collect();

    Some(ComparisonSummary {
        count: scores.len(),
        mean_bpi: bpis.iter().mean(),
        median_bpi: Data::new(bpis.clone()).median(),
        std_dev_bpi: bpis.iter().population_std_dev(),
        mean_dppi: dppis.iter().mean(),
        top_player: top.name,
    })
}

/// Upper bound for the radar chart's radial axis.
///
/// The largest of the six raw statistics across all players, or 0.0 when
/// there are none.
pub fn radar_axis_max(players: &[Player]) -> f64 {
    players
        .iter()
        .flat_map(|p| p.record.stat_values())
        .fold(0.0, f64::max)
}

#[derive(Serialize)]
struct ComparisonRow<'a> {
    #[serde(rename = "Player")]
    player: &'a str,
    #[serde(rename = "Average")]
    average: f64,
    #[serde(rename = "Strike_Rate")]
    strike_rate: f64,
    #[serde(rename = "Fifties")]
    fifties: i64,
    #[serde(rename = "Hundreds")]
    hundreds: i64,
    #[serde(rename = "Boundary_Percentage")]
    boundary_percentage: f64,
    #[serde(rename = "Not_Outs")]
    not_outs: i64,
    #[serde(rename = "BPI")]
    bpi: f64,
    #[serde(rename = "DPPI")]
    dppi: f64,
}

impl<'a> From<&'a PlayerScore> for ComparisonRow<'a> {
    fn from(score: &'a PlayerScore) -> Self {
        let r = &score.record;
        ComparisonRow {
            player: &score.name,
            average: r.batting_average,
            strike_rate: r.strike_rate,
            fifties: r.fifties,
            hundreds: r.hundreds,
            boundary_percentage: r.boundary_percentage,
            not_outs: r.not_outs,
            bpi: score.bpi,
            dppi: score.dppi,
        }
    }
}

/// Write the detailed statistics table as CSV (roster columns plus BPI and DPPI).
pub fn write_comparison<W: io::Write>(writer: W, scores: &[PlayerScore]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for score in scores {
        csv_writer.serialize(ComparisonRow::from(score))?;
    }
    csv_writer.flush()?;
    Ok(())
}
