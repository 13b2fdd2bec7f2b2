use std::str::FromStr;

use crate::constants::{
    CALCULATOR_MAX_AVERAGE, CALCULATOR_MAX_BOUNDARY_PERCENTAGE, CALCULATOR_MAX_FIFTIES,
    CALCULATOR_MAX_HUNDREDS, CALCULATOR_MAX_NOT_OUTS, CALCULATOR_MAX_STRIKE_RATE,
};
use crate::error::{MetricError, Result};
use crate::record::BattingRecord;

/// Which finite inputs the engine rejects.
///
/// Non-finite values (NaN, infinities) are rejected under every policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ValidationPolicy {
    /// Accept any finite value, including negatives.
    Permissive,
    /// Reject negative strike rate, average and counts.
    #[default]
    NonNegative,
    /// Enforce the calculator form's input ranges.
    Calculator,
}

impl ValidationPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            ValidationPolicy::Permissive => "permissive",
            ValidationPolicy::NonNegative => "non_negative",
            ValidationPolicy::Calculator => "calculator",
        }
    }

    /// Check a strike rate or batting average.
    ///
    /// DPPI runs both of its arguments through this so it stays commutative.
    pub fn check_rate(&self, field: &'static str, value: f64) -> Result<()> {
        check_finite(field, value)?;
        match self {
            ValidationPolicy::Permissive => Ok(()),
            ValidationPolicy::NonNegative => check_non_negative(field, value),
            ValidationPolicy::Calculator => {
                let max = CALCULATOR_MAX_AVERAGE.max(CALCULATOR_MAX_STRIKE_RATE);
                check_range(field, value, 0.0, max)
            }
        }
    }

    /// Check every field of a record.
    pub fn check_record(&self, record: &BattingRecord) -> Result<()> {
        check_finite("strike_rate", record.strike_rate)?;
        check_finite("batting_average", record.batting_average)?;
        check_finite("boundary_percentage", record.boundary_percentage)?;

        match self {
            ValidationPolicy::Permissive => Ok(()),
            ValidationPolicy::NonNegative => {
                check_non_negative("strike_rate", record.strike_rate)?;
                check_non_negative("batting_average", record.batting_average)?;
                check_count("fifties", record.fifties, None)?;
                check_count("hundreds", record.hundreds, None)?;
                check_count("not_outs", record.not_outs, None)
            }
            ValidationPolicy::Calculator => {
                check_range("strike_rate", record.strike_rate, 0.0, CALCULATOR_MAX_STRIKE_RATE)?;
                check_range("batting_average", record.batting_average, 0.0, CALCULATOR_MAX_AVERAGE)?;
                check_count("fifties", record.fifties, Some(CALCULATOR_MAX_FIFTIES))?;
                check_count("hundreds", record.hundreds, Some(CALCULATOR_MAX_HUNDREDS))?;
                check_range(
                    "boundary_percentage",
                    record.boundary_percentage,
                    0.0,
                    CALCULATOR_MAX_BOUNDARY_PERCENTAGE,
                )?;
                check_count("not_outs", record.not_outs, Some(CALCULATOR_MAX_NOT_OUTS))
            }
        }
    }
}

impl FromStr for ValidationPolicy {
    type Err = MetricError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "permissive" => Ok(ValidationPolicy::Permissive),
            "non_negative" | "nonnegative" => Ok(ValidationPolicy::NonNegative),
            "calculator" => Ok(ValidationPolicy::Calculator),
            _ => Err(MetricError::UnknownPolicy(s.to_string())),
        }
    }
}

impl std::fmt::Display for ValidationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl BattingRecord {
    /// Validate this record under `policy`.
    pub fn validate(&self, policy: ValidationPolicy) -> Result<()> {
        policy.check_record(self)
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(MetricError::invalid(field, value, "value must be finite"))
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<()> {
    if value < 0.0 {
        return Err(MetricError::invalid(field, value, "value must not be negative"));
    }
    Ok(())
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if value < min || value > max {
        return Err(MetricError::invalid(
            field,
            value,
            format!("value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

fn check_count(field: &'static str, value: i64, max: Option<i64>) -> Result<()> {
    if value < 0 {
        return Err(MetricError::invalid(field, value as f64, "count must not be negative"));
    }
    match max {
        Some(max) if value > max => Err(MetricError::invalid(
            field,
            value as f64,
            format!("count must be at most {}", max),
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dhoni() -> BattingRecord {
        BattingRecord::new(126.13, 37.60, 2, 0, 47.99, 41)
    }

    #[test]
    fn test_default_policy_is_non_negative() {
        assert_eq!(ValidationPolicy::default(), ValidationPolicy::NonNegative);
    }

    #[test]
    fn test_nan_rejected_under_every_policy() {
        let record = BattingRecord { strike_rate: f64::NAN, ..dhoni() };

        for policy in [
            ValidationPolicy::Permissive,
            ValidationPolicy::NonNegative,
            ValidationPolicy::Calculator,
        ] {
            let err = record.validate(policy).unwrap_err();
            assert!(err.is_invalid_input(), "{} should reject NaN", policy);
        }
    }

    #[test]
    fn test_infinity_rejected() {
        let record = BattingRecord { boundary_percentage: f64::INFINITY, ..dhoni() };
        assert!(record.validate(ValidationPolicy::Permissive).is_err());
    }

    #[test]
    fn test_negative_count_policy() {
        let record = BattingRecord { hundreds: -1, ..dhoni() };

        match record.validate(ValidationPolicy::NonNegative) {
            Err(MetricError::InvalidInput { field, value, .. }) => {
                assert_eq!(field, "hundreds");
                assert_eq!(value, -1.0);
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }

        assert!(record.validate(ValidationPolicy::Permissive).is_ok());
    }

    #[test]
    fn test_boundary_percentage_not_range_checked_by_default() {
        let record = BattingRecord { boundary_percentage: 140.0, ..dhoni() };
        assert!(record.validate(ValidationPolicy::NonNegative).is_ok());
        assert!(record.validate(ValidationPolicy::Calculator).is_err());
    }

    #[test]
    fn test_calculator_limits() {
        let too_fast = BattingRecord { strike_rate: 250.0, ..dhoni() };
        assert!(too_fast.validate(ValidationPolicy::Calculator).is_err());
        assert!(too_fast.validate(ValidationPolicy::NonNegative).is_ok());

        let too_many_hundreds = BattingRecord { hundreds: 51, ..dhoni() };
        assert!(too_many_hundreds.validate(ValidationPolicy::Calculator).is_err());

        let defaults = BattingRecord::calculator_default();
        assert!(defaults.validate(ValidationPolicy::Calculator).is_ok());
    }

    #[test]
    fn test_parse_policy() {
        assert_eq!("permissive".parse::<ValidationPolicy>().unwrap(), ValidationPolicy::Permissive);
        assert_eq!("Non-Negative".parse::<ValidationPolicy>().unwrap(), ValidationPolicy::NonNegative);
        assert_eq!(" calculator ".parse::<ValidationPolicy>().unwrap(), ValidationPolicy::Calculator);

        let err = "lenient".parse::<ValidationPolicy>().unwrap_err();
        assert!(matches!(err, MetricError::UnknownPolicy(ref name) if name == "lenient"));
    }

    #[test]
    fn test_policy_name_round_trips() {
        for policy in [
            ValidationPolicy::Permissive,
            ValidationPolicy::NonNegative,
            ValidationPolicy::Calculator,
        ] {
            assert_eq!(policy.name().parse::<ValidationPolicy>().unwrap(), policy);
        }
    }
}
