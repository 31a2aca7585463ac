//! Granularity rounding for transfer amounts.
//!
//! Amounts are rounded to a fixed unit of minor currency (1, 10 or 100).
//! The quotient is floored/ceiled as a signed value, so negative inputs round
//! toward the mathematically correct neighbor rather than away from zero.

use thiserror::Error;

/// Granularity of emitted transfer amounts, in minor currency units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RoundingUnit {
    One,
    #[default]
    Ten,
    Hundred,
}

impl RoundingUnit {
    pub const fn minor_units(self) -> i64 {
        match self {
            Self::One => 1,
            Self::Ten => 10,
            Self::Hundred => 100,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("rounding unit must be 1, 10 or 100 (got {0})")]
pub struct InvalidRoundingUnit(pub i64);

impl TryFrom<i64> for RoundingUnit {
    type Error = InvalidRoundingUnit;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            10 => Ok(Self::Ten),
            100 => Ok(Self::Hundred),
            other => Err(InvalidRoundingUnit(other)),
        }
    }
}

/// Smallest unit multiple that is >= `amount`.
pub fn ceil_to_unit(amount: f64, unit: RoundingUnit) -> i64 {
    let unit = unit.minor_units();
    (amount / unit as f64).ceil() as i64 * unit
}

/// Largest unit multiple that is <= `amount`.
pub fn floor_to_unit(amount: f64, unit: RoundingUnit) -> i64 {
    let unit = unit.minor_units();
    (amount / unit as f64).floor() as i64 * unit
}

/// Nearest unit multiple; ties round up.
pub fn round_to_unit(amount: f64, unit: RoundingUnit) -> i64 {
    let unit = unit.minor_units();
    (amount / unit as f64 + 0.5).floor() as i64 * unit
}
