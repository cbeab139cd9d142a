//! # Length units
//!
//! Linear conversion between the user-facing length units and millimeters, the base unit of
//! every computation in the crate.
//!
//! | Unit | Millimeters per unit |
//! |------|----------------------|
//! | `mm` | 1                    |
//! | `m`  | 1000                 |
//! | `ft` | 304.8                |
//! | `in` | 25.4                 |
//!
//! ```rust
//! use wallfit::units::{from_base_unit, to_base_unit, Unit};
//!
//! let mm = to_base_unit(100.0, Unit::In);
//! assert!((mm - 2540.0).abs() < 1e-9);
//! assert!((from_base_unit(mm, Unit::In) - 100.0).abs() < 1e-9);
//! ```
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    constants::{Millimeter, MM_PER_FT, MM_PER_IN, MM_PER_M},
    wallfit_errors::WallFitError,
};

/// Length unit accepted for height, width and diagonal inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Mm,
    M,
    Ft,
    In,
}

impl Unit {
    /// All supported units, in display order.
    pub const ALL: [Unit; 4] = [Unit::Mm, Unit::M, Unit::Ft, Unit::In];

    /// Number of millimeters in one of this unit.
    pub fn mm_per_unit(self) -> f64 {
        match self {
            Unit::Mm => 1.0,
            Unit::M => MM_PER_M,
            Unit::Ft => MM_PER_FT,
            Unit::In => MM_PER_IN,
        }
    }

    /// Short label of the unit (`"mm"`, `"m"`, `"ft"`, `"in"`).
    pub fn label(self) -> &'static str {
        match self {
            Unit::Mm => "mm",
            Unit::M => "m",
            Unit::Ft => "ft",
            Unit::In => "in",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Unit {
    type Err = WallFitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "mm" => Ok(Unit::Mm),
            "m" => Ok(Unit::M),
            "ft" => Ok(Unit::Ft),
            "in" => Ok(Unit::In),
            other => Err(WallFitError::InvalidUnit(other.to_string())),
        }
    }
}

impl TryFrom<&str> for Unit {
    type Error = WallFitError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Convert a value expressed in `unit` to millimeters.
pub fn to_base_unit(value: f64, unit: Unit) -> Millimeter {
    value * unit.mm_per_unit()
}

/// Convert a length in millimeters to `unit`.
pub fn from_base_unit(mm: Millimeter, unit: Unit) -> f64 {
    mm / unit.mm_per_unit()
}

/// Convert a value from one unit to another, going through millimeters.
pub fn convert_unit(value: f64, from: Unit, to: Unit) -> f64 {
    from_base_unit(to_base_unit(value, from), to)
}

/// Round to `decimals` decimal places (half away from zero).
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
