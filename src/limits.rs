//! # Physical limits
//!
//! [`PhysicalLimits`] is the immutable envelope a wall must fit in. It caps the target before
//! the search ([`PhysicalLimits::clamp`]) and bounds the number of columns and rows the solver
//! may use ([`PhysicalLimits::max_cols`], [`PhysicalLimits::max_rows`]).
//!
//! The limits are plain configuration: they deserialize from any `serde` format, and a missing
//! field falls back to the default envelope of 6000 × 2500 mm.
//!
//! ```rust
//! use wallfit::limits::PhysicalLimits;
//!
//! let limits = PhysicalLimits::default();
//! assert_eq!(limits.max_width_mm, 6000.0);
//! assert_eq!(limits.max_height_mm, 2500.0);
//! ```
use serde::{Deserialize, Serialize};

use crate::{
    cabinet::{format_aspect_ratio, Cabinet},
    constants::{AspectRatio, Millimeter, AR_NOTICE_TOLERANCE, MAX_HEIGHT_MM, MAX_WIDTH_MM},
    target::TargetSpec,
    tolerance::is_strictly_above,
    units::{from_base_unit, Unit},
};

fn default_max_width() -> Millimeter {
    MAX_WIDTH_MM
}

fn default_max_height() -> Millimeter {
    MAX_HEIGHT_MM
}

/// Maximum physical wall envelope, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalLimits {
    #[serde(default = "default_max_width")]
    pub max_width_mm: Millimeter,
    #[serde(default = "default_max_height")]
    pub max_height_mm: Millimeter,
}

impl Default for PhysicalLimits {
    fn default() -> Self {
        PhysicalLimits {
            max_width_mm: MAX_WIDTH_MM,
            max_height_mm: MAX_HEIGHT_MM,
        }
    }
}

impl PhysicalLimits {
    pub fn new(max_width_mm: Millimeter, max_height_mm: Millimeter) -> Self {
        PhysicalLimits {
            max_width_mm,
            max_height_mm,
        }
    }

    /// Largest column count that fits the width limit.
    pub fn max_cols(&self, cabinet: &Cabinet) -> u32 {
        (self.max_width_mm / cabinet.width_mm).floor() as u32
    }

    /// Largest row count that fits the height limit.
    pub fn max_rows(&self, cabinet: &Cabinet) -> u32 {
        (self.max_height_mm / cabinet.height_mm).floor() as u32
    }

    /// True when at least one cabinet fits inside the envelope.
    pub fn fits(&self, cabinet: &Cabinet) -> bool {
        self.max_cols(cabinet) >= 1 && self.max_rows(cabinet) >= 1
    }

    /// Cap the target to the envelope.
    ///
    /// Height and width are checked independently; each side exceeding its limit by more than
    /// [`EPS`](crate::constants::EPS) is replaced by the limit and a notice is appended,
    /// expressed in the caller's `unit`.
    ///
    /// Arguments
    /// -----------------
    /// * `target`: The derived target (left untouched).
    /// * `unit`: Unit the user entered values in, used for the notice text.
    /// * `notices`: Notice list to append to.
    ///
    /// Return
    /// ----------
    /// * A new, clamped [`TargetSpec`].
    pub fn clamp(&self, target: &TargetSpec, unit: Unit, notices: &mut Vec<String>) -> TargetSpec {
        let mut clamped = *target;

        if is_strictly_above(target.height_mm, self.max_height_mm) {
            notices.push(clamp_notice("height", target.height_mm, self.max_height_mm, unit));
            clamped.height_mm = self.max_height_mm;
        }

        if is_strictly_above(target.width_mm, self.max_width_mm) {
            notices.push(clamp_notice("width", target.width_mm, self.max_width_mm, unit));
            clamped.width_mm = self.max_width_mm;
        }

        if clamped != *target {
            log::debug!(
                "target clamped from {:.3} x {:.3} mm to {:.3} x {:.3} mm",
                target.width_mm,
                target.height_mm,
                clamped.width_mm,
                clamped.height_mm
            );
        }
        clamped
    }
}

fn clamp_notice(side: &str, value_mm: Millimeter, max_mm: Millimeter, unit: Unit) -> String {
    let max_in_unit = from_base_unit(max_mm, unit);
    format!(
        "Your {side} input ({value:.2} {unit}) exceeds the maximum of {max_in_unit:.2} {unit} \
         ({max_mm} mm). It has been clamped to {max_in_unit:.2} {unit}.",
        value = from_base_unit(value_mm, unit),
    )
}

/// Notice emitted when the cabinet's native ratio is more than
/// [`AR_NOTICE_TOLERANCE`] away from the requested one, `None` otherwise.
pub fn aspect_ratio_notice(cabinet: &Cabinet, requested: AspectRatio) -> Option<String> {
    let native = cabinet.native_aspect_ratio();
    if (native - requested).abs() <= AR_NOTICE_TOLERANCE {
        return None;
    }

    Some(format!(
        "The {} cabinet (native AR approx. {native:.3}) may not perfectly achieve a {} aspect \
         ratio. The closest achievable ratio is shown in each result.",
        cabinet.id,
        format_aspect_ratio(requested)
    ))
}
