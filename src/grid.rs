use std::fmt;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::{
    cabinet::Cabinet,
    constants::{AspectRatio, Millimeter},
    units::{from_base_unit, Unit},
};

/// A `cols × rows` arrangement of identical cabinets and its physical dimensions.
///
/// Every derived field is a pure function of `(cols, rows, cabinet)`; a grid is never built
/// with fewer than one column or one row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub cols: u32,
    pub rows: u32,
    pub total_cabinets: u64,
    pub width_mm: Millimeter,
    pub height_mm: Millimeter,
    pub diag_mm: Millimeter,
    pub aspect_ratio: AspectRatio,
}

impl GridConfig {
    /// Realize a grid of `cols × rows` cabinets.
    ///
    /// Arguments
    /// -----------------
    /// * `cols`, `rows`: Grid size, both clamped to at least 1.
    /// * `cabinet`: The module the grid is tiled from.
    ///
    /// Return
    /// ----------
    /// * The grid with its total width, height, diagonal and aspect ratio.
    pub fn new(cols: u32, rows: u32, cabinet: &Cabinet) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        let size = Vector2::new(
            cols as f64 * cabinet.width_mm,
            rows as f64 * cabinet.height_mm,
        );

        GridConfig {
            cols,
            rows,
            total_cabinets: u64::from(cols) * u64::from(rows),
            width_mm: size.x,
            height_mm: size.y,
            diag_mm: size.norm(),
            aspect_ratio: size.x / size.y,
        }
    }

    /// True when both grids have the same column and row counts.
    pub fn same_layout(&self, other: &GridConfig) -> bool {
        self.cols == other.cols && self.rows == other.rows
    }

    /// `(width, height, diagonal)` expressed in `unit`.
    pub fn dimensions_in(&self, unit: Unit) -> (f64, f64, f64) {
        (
            from_base_unit(self.width_mm, unit),
            from_base_unit(self.height_mm, unit),
            from_base_unit(self.diag_mm, unit),
        )
    }
}

impl fmt::Display for GridConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.cols, self.rows)
    }
}
