#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::Deserialize;
use std::io;
use std::sync::OnceLock;
use tracing::debug;

use crate::error::Result;
use crate::record::BattingRecord;

/// A named batting record (one roster row).
#[cfg_attr(feature = "python", pyclass(frozen, get_all))]
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub name: String,
    pub record: BattingRecord,
}

impl Player {
    pub fn new(name: impl Into<String>, record: BattingRecord) -> Self {
        Player {
            name: name.into(),
            record,
        }
    }
}

/// CSV row layout of a roster file.
#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(rename = "Player")]
    player: String,
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
}

impl From<RosterRow> for Player {
    fn from(row: RosterRow) -> Self {
        Player::new(
            row.player,
            BattingRecord::new(
                row.strike_rate,
                row.average,
                row.fifties,
                row.hundreds,
                row.boundary_percentage,
                row.not_outs,
            ),
        )
    }
}

// (name, average, strike rate, fifties, hundreds, boundary %, not outs)
const SAMPLE_ROWS: [(&str, f64, f64, i64, i64, f64, i64); 5] = [
    ("MS Dhoni", 37.60, 126.13, 2, 0, 47.99, 41),
    ("Chris Gayle", 27.92, 137.50, 14, 2, 72.46, 7),
    ("AB de Villiers", 37.05, 151.68, 22, 1, 58.32, 11),
    ("Virat Kohli", 52.73, 138.43, 37, 1, 54.76, 15),
    ("Rohit Sharma", 32.32, 139.02, 29, 4, 62.18, 12),
];

static SAMPLE_PLAYERS: OnceLock<Vec<Player>> = OnceLock::new();

/// The built-in five-player sample roster.
///
/// Built on first use and read-only afterwards.
pub fn sample_players() -> &'static [Player] {
    SAMPLE_PLAYERS.get_or_init(|| {
        let players: Vec<Player> = SAMPLE_ROWS
            .iter()
            .map(|&(name, avg, sr, fifties, hundreds, bdry, no)| {
                Player::new(name, BattingRecord::new(sr, avg, fifties, hundreds, bdry, no))
            })
            .collect();
        debug!(players = players.len(), "initialised sample roster");
        players
    })
}

/// Read a roster from CSV.
///
/// Expects the header `Player,Average,Strike_Rate,Fifties,Hundreds,Boundary_Percentage,Not_Outs`.
/// Rows are not validated here; scoring applies the validation policy.
pub fn read_roster<R: io::Read>(reader: R) -> Result<Vec<Player>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut players = Vec::new();
    for row in csv_reader.deserialize::<RosterRow>() {
        players.push(Player::from(row?));
    }

    debug!(players = players.len(), "read roster");
    Ok(players)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MetricError;

    #[test]
    fn test_sample_players() {
        let players = sample_players();
        assert_eq!(players.len(), 5);
        assert_eq!(players[0].name, "MS Dhoni");
        assert_eq!(players[0].record, BattingRecord::new(126.13, 37.60, 2, 0, 47.99, 41));
        assert_eq!(players[4].name, "Rohit Sharma");
    }

    #[test]
    fn test_sample_players_initialised_once() {
        let first = sample_players().as_ptr();
        let second = sample_players().as_ptr();
        assert_eq!(first, second);
    }

    #[test]
    fn test_read_roster() {
        let csv = "\
Player,Average,Strike_Rate,Fifties,Hundreds,Boundary_Percentage,Not_Outs
Suryakumar Yadav, 38.20, 167.07, 21, 4, 61.5, 10
Babar Azam,39.83,129.22,36,3,50.1,15
";
        let players = read_roster(csv.as_bytes()).unwrap();

        assert_eq!(players.len(), 2);
        assert_eq!(players[0].name, "Suryakumar Yadav");
        assert_eq!(players[0].record.strike_rate, 167.07);
        assert_eq!(players[0].record.batting_average, 38.20);
        assert_eq!(players[1].record.fifties, 36);
        assert_eq!(players[1].record.not_outs, 15);
    }

    #[test]
    fn test_read_roster_keeps_negative_counts() {
        let csv = "Player,Average,Strike_Rate,Fifties,Hundreds,Boundary_Percentage,Not_Outs\nX,10,100,1,-1,40,0\n";
        let players = read_roster(csv.as_bytes()).unwrap();
        assert_eq!(players[0].record.hundreds, -1);
    }

    #[test]
    fn test_read_roster_malformed_row() {
        let csv = "Player,Average,Strike_Rate,Fifties,Hundreds,Boundary_Percentage,Not_Outs\nX,ten,100,1,0,40,0\n";
        let err = read_roster(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, MetricError::Csv(_)));
    }
}
