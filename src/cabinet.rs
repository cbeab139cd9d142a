//! # Cabinets and aspect-ratio presets
//!
//! A [`Cabinet`] is the fixed-size rectangular module a display wall is tiled from. The crate
//! ships the two cabinet sizes and the aspect-ratio presets offered by the calculator as static
//! data; callers may also build their own cabinets with [`Cabinet::new`].
//!
//! ## Catalog
//!
//! | id     | width (mm) | height (mm) |
//! |--------|------------|-------------|
//! | `16:9` | 600        | 337.5       |
//! | `1:1`  | 500        | 500         |
//!
//! ## Presets
//!
//! `16:9`, `32:9`, `4:3`, `24:9`, `9:16`, `16:10`, `2.40:1`, `16:18`, `48:9`.
use serde::{Deserialize, Serialize};

use crate::{
    constants::{AspectRatio, Millimeter},
    wallfit_errors::WallFitError,
};

/// Immutable physical display module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cabinet {
    pub id: String,
    pub label: String,
    pub width_mm: Millimeter,
    pub height_mm: Millimeter,
}

impl Cabinet {
    /// Build a cabinet, rejecting non-finite or non-positive dimensions.
    ///
    /// Arguments
    /// -----------------
    /// * `id`: Short identifier (e.g. `"16:9"`), used in notices.
    /// * `label`: Human readable description.
    /// * `width_mm`, `height_mm`: Physical size of one module in millimeters.
    ///
    /// Return
    /// ----------
    /// * The cabinet, or [`WallFitError::InvalidCabinet`] when a dimension is not a finite
    ///   positive number.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        width_mm: Millimeter,
        height_mm: Millimeter,
    ) -> Result<Self, WallFitError> {
        let id = id.into();
        if !(width_mm.is_finite() && width_mm > 0.0 && height_mm.is_finite() && height_mm > 0.0) {
            return Err(WallFitError::InvalidCabinet(format!(
                "{id}: {width_mm} x {height_mm} mm"
            )));
        }
        Ok(Cabinet {
            id,
            label: label.into(),
            width_mm,
            height_mm,
        })
    }

    /// Native aspect ratio (`width / height`) of one module.
    pub fn native_aspect_ratio(&self) -> AspectRatio {
        self.width_mm / self.height_mm
    }

    /// The cabinets offered by the calculator.
    pub fn catalog() -> Vec<Cabinet> {
        vec![
            Cabinet {
                id: "16:9".into(),
                label: "16:9 Cabinet (600 × 337.5 mm)".into(),
                width_mm: 600.0,
                height_mm: 337.5,
            },
            Cabinet {
                id: "1:1".into(),
                label: "1:1 Cabinet (500 × 500 mm)".into(),
                width_mm: 500.0,
                height_mm: 500.0,
            },
        ]
    }

    /// Look up a catalog cabinet by its id.
    pub fn from_catalog(id: &str) -> Result<Cabinet, WallFitError> {
        Cabinet::catalog()
            .into_iter()
            .find(|cab| cab.id == id)
            .ok_or_else(|| WallFitError::UnknownCabinet(id.to_string()))
    }
}

/// Named aspect ratio offered to the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectRatioPreset {
    pub label: &'static str,
    pub value: AspectRatio,
}

pub const ASPECT_RATIO_PRESETS: [AspectRatioPreset; 9] = [
    AspectRatioPreset { label: "16:9", value: 16.0 / 9.0 },
    AspectRatioPreset { label: "32:9", value: 32.0 / 9.0 },
    AspectRatioPreset { label: "4:3", value: 4.0 / 3.0 },
    AspectRatioPreset { label: "24:9", value: 24.0 / 9.0 },
    AspectRatioPreset { label: "9:16", value: 9.0 / 16.0 },
    AspectRatioPreset { label: "16:10", value: 16.0 / 10.0 },
    AspectRatioPreset { label: "2.40:1", value: 2.40 },
    AspectRatioPreset { label: "16:18", value: 16.0 / 18.0 },
    AspectRatioPreset { label: "48:9", value: 48.0 / 9.0 },
];

/// Find a preset by its label (`"16:9"`, `"2.40:1"`, ...).
pub fn find_preset(label: &str) -> Option<&'static AspectRatioPreset> {
    ASPECT_RATIO_PRESETS.iter().find(|p| p.label == label)
}

/// Parse a `W:H` ratio (or a bare decimal ratio) into `W / H`.
///
/// Return
/// ----------
/// * The ratio, or [`WallFitError::InvalidAspectRatio`] if either side is not a finite
///   positive number.
pub fn parse_aspect_ratio(text: &str) -> Result<AspectRatio, WallFitError> {
    let invalid = || WallFitError::InvalidAspectRatio(text.to_string());
    let positive = |s: &str| {
        s.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v > 0.0)
    };

    match text.split_once(':') {
        Some((w, h)) => {
            let w = positive(w).ok_or_else(invalid)?;
            let h = positive(h).ok_or_else(invalid)?;
            Ok(w / h)
        }
        None => positive(text).ok_or_else(invalid),
    }
}

/// Format a ratio with at most four decimals and no trailing zeros (`1.7778`, `2.4`, `1`).
pub fn format_aspect_ratio(ratio: AspectRatio) -> String {
    let fixed = format!("{ratio:.4}");
    if fixed.contains('.') {
        fixed
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        fixed
    }
}
