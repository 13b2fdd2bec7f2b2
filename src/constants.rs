/// Weight applied to strike rate
pub const WEIGHT_STRIKE_RATE: f64 = 0.30;

/// Weight applied to the not-out count
pub const WEIGHT_NOT_OUTS: f64 = 0.10;

/// Weight applied to the hundreds count
pub const WEIGHT_HUNDREDS: f64 = 0.05;

/// Weight applied to the fifties count
pub const WEIGHT_FIFTIES: f64 = 0.15;

/// Weight applied to batting average
pub const WEIGHT_AVERAGE: f64 = 0.20;

/// Weight applied to boundary percentage
pub const WEIGHT_BOUNDARY_PERCENTAGE: f64 = 0.20;

/// BPI weights in formula order: SR, not outs, 100s, 50s, average, boundary %
pub const BPI_WEIGHTS: [f64; 6] = [
    WEIGHT_STRIKE_RATE,
    WEIGHT_NOT_OUTS,
    WEIGHT_HUNDREDS,
    WEIGHT_FIFTIES,
    WEIGHT_AVERAGE,
    WEIGHT_BOUNDARY_PERCENTAGE,
];

/// Divisor applied to average * strike rate for DPPI
pub const DPPI_SCALE: f64 = 100.0;

/// Raw statistic labels in radar-chart order
pub const STAT_LABELS: [&str; 6] = [
    "Average",
    "Strike_Rate",
    "Fifties",
    "Hundreds",
    "Boundary_Percentage",
    "Not_Outs",
];

/// Input ranges accepted by the dashboard calculator form (inclusive).
pub const CALCULATOR_MAX_AVERAGE: f64 = 100.0;
pub const CALCULATOR_MAX_STRIKE_RATE: f64 = 200.0;
pub const CALCULATOR_MAX_FIFTIES: i64 = 100;
pub const CALCULATOR_MAX_HUNDREDS: i64 = 50;
pub const CALCULATOR_MAX_BOUNDARY_PERCENTAGE: f64 = 100.0;
pub const CALCULATOR_MAX_NOT_OUTS: i64 = 100;

/// Initial calculator form values
pub const CALCULATOR_DEFAULT_AVERAGE: f64 = 30.0;
pub const CALCULATOR_DEFAULT_STRIKE_RATE: f64 = 120.0;
pub const CALCULATOR_DEFAULT_FIFTIES: i64 = 10;
pub const CALCULATOR_DEFAULT_HUNDREDS: i64 = 1;
pub const CALCULATOR_DEFAULT_BOUNDARY_PERCENTAGE: f64 = 50.0;
pub const CALCULATOR_DEFAULT_NOT_OUTS: i64 = 5;
