//! Diagonal-driven bracket search.
//!
//! Used whenever both target sides are pinned in millimeters (aspect + diagonal, height + width,
//! height + diagonal, width + diagonal). The search enumerates a small window of column/row
//! counts around the natural counts and keeps the grids whose diagonal lies closest below and
//! closest above the target diagonal.
use itertools::Itertools;

use crate::{
    cabinet::Cabinet,
    constants::DIAGONAL_WINDOW_MARGIN,
    grid::GridConfig,
    target::TargetSpec,
    tolerance::{is_at_or_above, is_at_or_below, is_strictly_above, is_strictly_below},
};

use super::{Bracket, ConfigSolver};

/// Inclusive column and row ranges examined by the diagonal search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SearchWindow {
    pub(crate) cols: (u32, u32),
    pub(crate) rows: (u32, u32),
}

impl SearchWindow {
    fn around(natural: f64, max: u32) -> (u32, u32) {
        let low = (natural.floor() as u32)
            .saturating_sub(DIAGONAL_WINDOW_MARGIN)
            .max(1);
        let high = (natural.ceil() as u32)
            .saturating_add(DIAGONAL_WINDOW_MARGIN)
            .min(max);
        (low, high)
    }

    /// Every grid of the window, rows in the outer loop and columns in the inner loop.
    fn grids<'c>(&self, cabinet: &'c Cabinet) -> impl Iterator<Item = GridConfig> + 'c {
        (self.rows.0..=self.rows.1)
            .cartesian_product(self.cols.0..=self.cols.1)
            .map(move |(rows, cols)| GridConfig::new(cols, rows, cabinet))
    }
}

impl ConfigSolver<'_> {
    pub(crate) fn search_window(&self, target: &TargetSpec) -> SearchWindow {
        SearchWindow {
            cols: SearchWindow::around(target.width_mm / self.cabinet.width_mm, self.max_cols),
            rows: SearchWindow::around(target.height_mm / self.cabinet.height_mm, self.max_rows),
        }
    }

    /// Bracket the target by straight-line diagonal distance.
    ///
    /// Arguments
    /// -----------------
    /// * `target`: Clamped target size.
    /// * `notices`: Notice list to append to.
    ///
    /// Return
    /// ----------
    /// * `lower`: the window grid with `diag ≤ target` minimizing `|diag − target|`.
    /// * `upper`: the window grid with `diag ≥ target` minimizing `diag − target`; when this is
    ///   the same layout as `lower` (exact match) it is replaced by the closest grid strictly
    ///   above the target, if any.
    pub fn find_by_diagonal(&self, target: &TargetSpec, notices: &mut Vec<String>) -> Bracket {
        let cabinet = self.cabinet;

        if is_strictly_below(target.width_mm, cabinet.width_mm)
            || is_strictly_below(target.height_mm, cabinet.height_mm)
        {
            notices.push(Self::too_small_notice("size"));
            return Bracket::minimum(cabinet);
        }

        let target_diag = target.diagonal_mm();
        let window = self.search_window(target);

        // Compared as floats: counts past u32::MAX saturate in a cast
        let natural_cols = (target.width_mm / cabinet.width_mm).ceil();
        let natural_rows = (target.height_mm / cabinet.height_mm).ceil();
        if natural_cols > f64::from(self.max_cols) || natural_rows > f64::from(self.max_rows) {
            notices.push(format!(
                "Requested size exceeds maximum supported dimensions. Results are capped at \
                 {} columns x {} rows (max {} mm wide x {} mm tall).",
                self.max_cols, self.max_rows, self.limits.max_width_mm, self.limits.max_height_mm,
            ));
        }

        let mut lower: Option<(f64, GridConfig)> = None;
        let mut upper: Option<(f64, GridConfig)> = None;

        for grid in window.grids(cabinet) {
            let delta = grid.diag_mm - target_diag;
            log::trace!("window grid {grid}: delta {delta:.6} mm");

            if is_at_or_below(grid.diag_mm, target_diag)
                && lower.as_ref().map_or(true, |(best, _)| delta.abs() < *best)
            {
                lower = Some((delta.abs(), grid.clone()));
            }
            if is_at_or_above(grid.diag_mm, target_diag)
                && upper.as_ref().map_or(true, |(best, _)| delta < *best)
            {
                upper = Some((delta, grid));
            }
        }

        let lower = lower.map(|(_, grid)| grid);
        let mut upper = upper.map(|(_, grid)| grid);

        if let (Some(low), Some(up)) = (&lower, &upper) {
            if low.same_layout(up) {
                upper = window
                    .grids(cabinet)
                    .filter(|grid| is_strictly_above(grid.diag_mm, target_diag))
                    .min_by(|a, b| a.diag_mm.total_cmp(&b.diag_mm));
            }
        }

        Bracket { lower, upper }
    }
}

#[cfg(test)]
mod diagonal_test {
    use super::super::solver_test::{square, wide};
    use super::*;
    use crate::{constants::EPS, limits::PhysicalLimits};

    fn layout(grid: &Option<GridConfig>) -> Option<(u32, u32)> {
        grid.as_ref().map(|g| (g.cols, g.rows))
    }

    #[test]
    fn test_exact_match_promotes_upper() {
        let cab = square();
        let limits = PhysicalLimits::default();
        let solver = ConfigSolver::new(&cab, &limits).unwrap();
        let mut notices = Vec::new();

        let bracket = solver.find_by_diagonal(&TargetSpec::new(2000.0, 1500.0), &mut notices);

        assert_eq!(layout(&bracket.lower), Some((4, 3)));
        // 3x4 has the same diagonal and is not strictly larger; 5x2 is the next one up
        assert_eq!(layout(&bracket.upper), Some((5, 2)));
        assert!(notices.is_empty());
    }

    #[test]
    fn test_window_bounds() {
        let cab = square();
        let limits = PhysicalLimits::default();
        let solver = ConfigSolver::new(&cab, &limits).unwrap();

        let window = solver.search_window(&TargetSpec::new(2000.0, 1500.0));
        assert_eq!(window.cols, (3, 5));
        assert_eq!(window.rows, (2, 4));

        let window = solver.search_window(&TargetSpec::new(6000.0, 2500.0));
        assert_eq!(window.cols, (11, 12));
        assert_eq!(window.rows, (4, 5));

        let window = solver.search_window(&TargetSpec::new(500.0, 700.0));
        assert_eq!(window.cols, (1, 2));
        assert_eq!(window.rows, (1, 3));
    }

    #[test]
    fn test_at_maximum_has_no_upper() {
        let cab = square();
        let limits = PhysicalLimits::default();
        let solver = ConfigSolver::new(&cab, &limits).unwrap();
        let mut notices = Vec::new();

        let bracket = solver.find_by_diagonal(&TargetSpec::new(6000.0, 2500.0), &mut notices);

        assert_eq!(layout(&bracket.lower), Some((12, 5)));
        assert_eq!(bracket.upper, None);
        assert!(notices.is_empty());
    }

    #[test]
    fn test_capped_notice() {
        let cab = wide();
        let limits = PhysicalLimits::default();
        let solver = ConfigSolver::new(&cab, &limits).unwrap();
        let mut notices = Vec::new();

        // 2500 mm tall is 7.4 rows of 337.5 mm, only 7 fit
        let bracket = solver.find_by_diagonal(&TargetSpec::new(4000.0, 2500.0), &mut notices);

        assert_eq!(
            notices,
            vec![
                "Requested size exceeds maximum supported dimensions. Results are capped at \
                 10 columns x 7 rows (max 6000 mm wide x 2500 mm tall)."
                    .to_string()
            ]
        );
        let lower = bracket.lower.unwrap();
        let upper = bracket.upper.unwrap();
        assert!(lower.rows <= 7 && upper.rows <= 7);
        assert!(upper.diag_mm > lower.diag_mm);
    }

    /// Diagonal of the grid closest to `target_diag` among `grids`, keeping only those with
    /// `keep(delta)`.
    fn scan(
        grids: &[GridConfig],
        target_diag: f64,
        keep: impl Fn(f64) -> bool,
        cost: impl Fn(f64) -> f64,
    ) -> Option<f64> {
        grids
            .iter()
            .map(|g| g.diag_mm - target_diag)
            .filter(|delta| keep(*delta))
            .min_by(|a, b| cost(*a).total_cmp(&cost(*b)))
            .map(|delta| target_diag + delta)
    }

    fn grids_in(cab: &Cabinet, cols: (u32, u32), rows: (u32, u32)) -> Vec<GridConfig> {
        (rows.0..=rows.1)
            .flat_map(|r| (cols.0..=cols.1).map(move |c| (c, r)))
            .map(|(c, r)| GridConfig::new(c, r, cab))
            .collect()
    }

    #[test]
    fn test_window_matches_neighbourhood_scan() {
        let limits = PhysicalLimits::default();

        for cab in [wide(), square()] {
            let solver = ConfigSolver::new(&cab, &limits).unwrap();

            for width in (600..=6000).step_by(350) {
                for height in (500..=2500).step_by(250) {
                    let target = TargetSpec::new(width as f64, height as f64);
                    let target_diag = target.diagonal_mm();

                    let range = |natural: f64, max: u32| {
                        let low = (natural.floor() as u32).saturating_sub(1).max(1);
                        let high = (natural.ceil() as u32 + 1).min(max);
                        (low, high)
                    };
                    let grids = grids_in(
                        &cab,
                        range(target.width_mm / cab.width_mm, solver.max_cols()),
                        range(target.height_mm / cab.height_mm, solver.max_rows()),
                    );

                    let lower = scan(&grids, target_diag, |d| d <= EPS, f64::abs);
                    let exact = lower.is_some_and(|diag| (diag - target_diag).abs() <= EPS);
                    let upper = if exact {
                        scan(&grids, target_diag, |d| d > EPS, |d| d)
                    } else {
                        scan(&grids, target_diag, |d| d > -EPS, |d| d)
                    };

                    let bracket = solver.find_by_diagonal(&target, &mut Vec::new());
                    assert_eq!(
                        bracket.lower.map(|g| g.diag_mm),
                        lower,
                        "lower of {width} x {height} on {}",
                        cab.id
                    );
                    assert_eq!(
                        bracket.upper.map(|g| g.diag_mm),
                        upper,
                        "upper of {width} x {height} on {}",
                        cab.id
                    );
                }
            }
        }
    }

    #[test]
    fn test_window_keeps_the_requested_shape() {
        let cab = wide();
        let limits = PhysicalLimits::default();
        let solver = ConfigSolver::new(&cab, &limits).unwrap();
        let target = TargetSpec::new(600.0, 2400.0);
        let target_diag = target.diagonal_mm();

        // A one-cabinet-wide column stays one or two cabinets wide
        let bracket = solver.find_by_diagonal(&target, &mut Vec::new());
        assert_eq!(layout(&bracket.lower), Some((1, 7)));

        // Over every allowed grid a 3 x 5 block gets closer by diagonal, at the cost of the shape
        let everything = grids_in(&cab, (1, solver.max_cols()), (1, solver.max_rows()));
        let closest = everything
            .iter()
            .filter(|g| g.diag_mm - target_diag <= EPS)
            .min_by(|a, b| {
                (a.diag_mm - target_diag)
                    .abs()
                    .total_cmp(&(b.diag_mm - target_diag).abs())
            })
            .unwrap();
        assert_eq!((closest.cols, closest.rows), (3, 5));
        assert!(closest.diag_mm > bracket.lower.unwrap().diag_mm);
    }

    #[test]
    fn test_tiny_cabinet_counts_past_u32() {
        let cab = Cabinet::new("micro", "micro", 0.05, 0.05).unwrap();
        let limits = PhysicalLimits::default();
        let solver = ConfigSolver::new(&cab, &limits).unwrap();
        let mut notices = Vec::new();

        let bracket = solver.find_by_diagonal(&TargetSpec::new(6000.0, 2500.0), &mut notices);

        let lower = bracket.lower.unwrap();
        assert!(lower.cols >= 119_999 && lower.rows >= 49_999);
        assert!(lower.total_cabinets > u64::from(u32::MAX));
        assert!(lower.cols <= solver.max_cols() && lower.rows <= solver.max_rows());
    }

    #[test]
    fn test_saturated_column_count() {
        // 6000 mm / 1e-6 mm is more columns than u32 can count
        let cab = Cabinet::new("dust", "dust", 1e-6, 1e-6).unwrap();
        let limits = PhysicalLimits::default();
        let solver = ConfigSolver::new(&cab, &limits).unwrap();
        assert_eq!(solver.max_cols(), u32::MAX);

        let window = solver.search_window(&TargetSpec::new(6000.0, 2500.0));
        assert_eq!(window.cols, (u32::MAX - 1, u32::MAX));

        let mut notices = Vec::new();
        let bracket = solver.find_by_diagonal(&TargetSpec::new(6000.0, 2500.0), &mut notices);
        assert!(bracket.lower.is_some());
        assert!(notices[0].starts_with("Requested size exceeds maximum supported dimensions."));
    }

    #[test]
    fn test_too_small_on_either_side() {
        let cab = wide();
        let limits = PhysicalLimits::default();
        let solver = ConfigSolver::new(&cab, &limits).unwrap();
        let mut notices = Vec::new();

        let bracket = solver.find_by_diagonal(&TargetSpec::new(3000.0, 300.0), &mut notices);

        assert_eq!(bracket, Bracket::minimum(&cab));
        assert_eq!(
            notices,
            vec![
                "Requested size is smaller than a single cabinet. No lower configuration \
                 exists; showing the minimum 1×1 grid as upper."
                    .to_string()
            ]
        );
    }
}
