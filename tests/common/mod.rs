#![allow(dead_code)]

use approx::assert_abs_diff_eq;
use wallfit::constants::EPS;
use wallfit::{calculate, Cabinet, CalcInput, CalcResult, GridConfig, ParamId, Unit};

pub const AR_16_9: f64 = 16.0 / 9.0;

pub fn wide() -> Cabinet {
    Cabinet::from_catalog("16:9").unwrap()
}

pub fn square() -> Cabinet {
    Cabinet::from_catalog("1:1").unwrap()
}

/// Run a request built from `(parameter, raw value)` entries; `ar` fills the aspect ratio slot.
pub fn run(
    active: (ParamId, ParamId),
    values: &[(ParamId, &str)],
    ar: Option<f64>,
    cabinet: &Cabinet,
    unit: Unit,
) -> CalcResult {
    let mut input = CalcInput::new(active, cabinet.clone(), unit);
    for (id, raw) in values {
        input = input.with_value(*id, *raw);
    }
    if let Some(ar) = ar {
        input = input.with_aspect_ratio(ar);
    }
    calculate(&input)
}

pub fn layout(grid: &Option<GridConfig>) -> Option<(u32, u32)> {
    grid.as_ref().map(|g| (g.cols, g.rows))
}

/// Check that the derived fields of `grid` agree with its counts.
pub fn assert_grid_consistent(grid: &GridConfig, cabinet: &Cabinet) {
    let width = grid.cols as f64 * cabinet.width_mm;
    let height = grid.rows as f64 * cabinet.height_mm;

    assert_eq!(grid.total_cabinets, u64::from(grid.cols) * u64::from(grid.rows));
    assert_abs_diff_eq!(grid.width_mm, width, epsilon = EPS);
    assert_abs_diff_eq!(grid.height_mm, height, epsilon = EPS);
    assert_abs_diff_eq!(grid.diag_mm, width.hypot(height), epsilon = EPS);
    assert_abs_diff_eq!(grid.aspect_ratio, width / height, epsilon = EPS);
}
