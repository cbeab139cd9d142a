//! # Grid configuration solver
//!
//! Given a (clamped) [`TargetSpec`] and a [`Cabinet`], the solver brackets the target between
//! two integer grids:
//!
//! - **lower**: the best-fitting grid no larger than the target,
//! - **upper**: the best-fitting grid no smaller than the target.
//!
//! Three mutually exclusive searches are available, selected by [`SearchStrategy`]:
//!
//! | Strategy                           | Driven axis | Free axis chosen by          |
//! |------------------------------------|-------------|------------------------------|
//! | [`SearchStrategy::AspectByHeight`] | rows        | closest aspect ratio         |
//! | [`SearchStrategy::AspectByWidth`]  | columns     | closest aspect ratio         |
//! | [`SearchStrategy::Diagonal`]       | both        | closest diagonal in a window |
//!
//! A missing side of the bracket is a legitimate answer ("no configuration exists on that side")
//! and is reported as `None`, never as an error.
//!
//! ## Invariants
//!
//! - every returned grid has `1 ≤ cols ≤ max_cols` and `1 ≤ rows ≤ max_rows`,
//! - when both sides exist they are different layouts and `upper` is not smaller than `lower`.
//!
//! ## See also
//! ------------
//! * [`PhysicalLimits`] – Envelope bounding the column and row counts.
//! * [`TargetParams::strategy`](crate::target::TargetParams::strategy) – Strategy selection.
mod aspect;
mod diagonal;

use serde::{Deserialize, Serialize};

use crate::{
    cabinet::Cabinet,
    constants::AspectRatio,
    grid::GridConfig,
    limits::PhysicalLimits,
    target::{SearchStrategy, TargetSpec},
    wallfit_errors::WallFitError,
};

use aspect::Axis;

/// Lower/upper pair of grids surrounding a target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bracket {
    pub lower: Option<GridConfig>,
    pub upper: Option<GridConfig>,
}

impl Bracket {
    /// Bracket for a target smaller than one cabinet: nothing below, `1 × 1` above.
    pub fn minimum(cabinet: &Cabinet) -> Self {
        Bracket {
            lower: None,
            upper: Some(GridConfig::new(1, 1, cabinet)),
        }
    }
}

/// Pick the grid whose aspect ratio is closest to `target_ar`.
///
/// Ties keep the first candidate in iteration order; an empty input yields `None`.
pub fn closest_ar<I>(candidates: I, target_ar: AspectRatio) -> Option<GridConfig>
where
    I: IntoIterator<Item = GridConfig>,
{
    candidates.into_iter().min_by(|a, b| {
        (a.aspect_ratio - target_ar)
            .abs()
            .total_cmp(&(b.aspect_ratio - target_ar).abs())
    })
}

/// Search engine bound to one cabinet and one envelope.
#[derive(Debug, Clone)]
pub struct ConfigSolver<'a> {
    cabinet: &'a Cabinet,
    limits: &'a PhysicalLimits,
    max_cols: u32,
    max_rows: u32,
}

impl<'a> ConfigSolver<'a> {
    /// Bind the solver to a cabinet and an envelope.
    ///
    /// Return
    /// ----------
    /// * The solver, or [`WallFitError::CabinetExceedsLimits`] when not even a single cabinet
    ///   fits in `limits`.
    pub fn new(cabinet: &'a Cabinet, limits: &'a PhysicalLimits) -> Result<Self, WallFitError> {
        if !limits.fits(cabinet) {
            return Err(WallFitError::CabinetExceedsLimits(cabinet.id.clone()));
        }

        Ok(ConfigSolver {
            cabinet,
            limits,
            max_cols: limits.max_cols(cabinet),
            max_rows: limits.max_rows(cabinet),
        })
    }

    pub fn max_cols(&self) -> u32 {
        self.max_cols
    }

    pub fn max_rows(&self) -> u32 {
        self.max_rows
    }

    /// Run the search selected by `strategy`.
    ///
    /// Arguments
    /// -----------------
    /// * `strategy`: Which parameters were fixed by the user.
    /// * `target`: Clamped target size.
    /// * `notices`: Notice list to append to (too small, capped).
    ///
    /// Return
    /// ----------
    /// * The [`Bracket`] around the target.
    pub fn solve(
        &self,
        strategy: SearchStrategy,
        target: &TargetSpec,
        notices: &mut Vec<String>,
    ) -> Bracket {
        let bracket = match strategy {
            SearchStrategy::AspectByHeight(ar) => {
                self.find_by_aspect_height(target.height_mm, ar, notices)
            }
            SearchStrategy::AspectByWidth(ar) => {
                self.find_by_aspect_width(target.width_mm, ar, notices)
            }
            SearchStrategy::Diagonal => self.find_by_diagonal(target, notices),
        };

        log::debug!(
            "{strategy:?} on {} cabinet: lower={:?} upper={:?}",
            self.cabinet.id,
            bracket.lower.as_ref().map(|g| (g.cols, g.rows)),
            bracket.upper.as_ref().map(|g| (g.cols, g.rows)),
        );
        bracket
    }

    /// Aspect ratio fixed with height: the row count follows the height.
    pub fn find_by_aspect_height(
        &self,
        target_height_mm: f64,
        ar: AspectRatio,
        notices: &mut Vec<String>,
    ) -> Bracket {
        self.find_by_aspect(Axis::Rows, target_height_mm, ar, notices)
    }

    /// Aspect ratio fixed with width: the column count follows the width.
    pub fn find_by_aspect_width(
        &self,
        target_width_mm: f64,
        ar: AspectRatio,
        notices: &mut Vec<String>,
    ) -> Bracket {
        self.find_by_aspect(Axis::Cols, target_width_mm, ar, notices)
    }

    fn too_small_notice(dimension: &str) -> String {
        format!(
            "Requested {dimension} is smaller than a single cabinet. No lower configuration \
             exists; showing the minimum 1×1 grid as upper."
        )
    }
}

#[cfg(test)]
pub(crate) mod solver_test {
    use super::*;

    pub(crate) fn wide() -> Cabinet {
        Cabinet::from_catalog("16:9").unwrap()
    }

    pub(crate) fn square() -> Cabinet {
        Cabinet::from_catalog("1:1").unwrap()
    }

    #[test]
    fn test_closest_ar_keeps_first_on_tie() {
        let cab = square();
        // 2x2 and 1x1 share the same ratio
        let picked = closest_ar(
            [GridConfig::new(2, 2, &cab), GridConfig::new(1, 1, &cab)],
            1.25,
        )
        .unwrap();
        assert_eq!((picked.cols, picked.rows), (2, 2));

        let picked = closest_ar(
            [GridConfig::new(1, 2, &cab), GridConfig::new(3, 2, &cab)],
            1.0,
        )
        .unwrap();
        assert_eq!((picked.cols, picked.rows), (1, 2));

        assert!(closest_ar(Vec::new(), 1.0).is_none());
    }

    #[test]
    fn test_closest_ar_picks_nearest() {
        let cab = wide();
        let picked = closest_ar(
            [GridConfig::new(6, 7, &cab), GridConfig::new(7, 7, &cab)],
            16.0 / 9.0,
        )
        .unwrap();
        assert_eq!(picked.cols, 7);
    }

    #[test]
    fn test_solver_rejects_oversized_cabinet() {
        let cab = Cabinet::new("big", "big", 700.0, 700.0).unwrap();
        let limits = PhysicalLimits::new(600.0, 2500.0);
        assert_eq!(
            ConfigSolver::new(&cab, &limits).unwrap_err(),
            WallFitError::CabinetExceedsLimits("big".into())
        );
    }

    #[test]
    fn test_solve_dispatch() {
        let cab = square();
        let limits = PhysicalLimits::default();
        let solver = ConfigSolver::new(&cab, &limits).unwrap();
        let mut notices = Vec::new();

        let by_height = solver.solve(
            SearchStrategy::AspectByHeight(1.0),
            &TargetSpec::new(1000.0, 1000.0),
            &mut notices,
        );
        let direct = solver.find_by_aspect_height(1000.0, 1.0, &mut notices);
        assert_eq!(by_height, direct);

        let by_diag = solver.solve(
            SearchStrategy::Diagonal,
            &TargetSpec::new(1000.0, 1000.0),
            &mut notices,
        );
        assert_eq!(by_diag.lower.map(|g| (g.cols, g.rows)), Some((2, 2)));
        assert!(notices.is_empty());
    }
}
