//! Aspect-ratio driven searches.
//!
//! One axis is *driven* by the fixed dimension (rows by height, columns by width) and the other
//! is *free*, chosen to match the requested aspect ratio as closely as possible. Both searches
//! share the same code; [`Axis`] maps "driven/free" onto columns and rows.
use std::collections::BTreeSet;

use crate::{
    cabinet::Cabinet,
    constants::{AspectRatio, Millimeter},
    grid::GridConfig,
    tolerance::{is_strictly_above, is_strictly_below},
};

use super::{Bracket, ConfigSolver};

/// The axis whose count follows the fixed dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    /// Height is fixed: rows are driven, columns are free.
    Rows,
    /// Width is fixed: columns are driven, rows are free.
    Cols,
}

impl Axis {
    /// Size of one cabinet along the driven axis.
    fn cabinet_extent(self, cabinet: &Cabinet) -> Millimeter {
        match self {
            Axis::Rows => cabinet.height_mm,
            Axis::Cols => cabinet.width_mm,
        }
    }

    /// Real-valued free count that gives exactly `ar` for `driven` cabinets on the driven axis.
    fn ideal_free(self, driven: u32, ar: AspectRatio, cabinet: &Cabinet) -> f64 {
        match self {
            Axis::Rows => (driven as f64 * cabinet.height_mm * ar) / cabinet.width_mm,
            Axis::Cols => (driven as f64 * cabinet.width_mm) / (ar * cabinet.height_mm),
        }
    }

    fn grid(self, driven: u32, free: u32, cabinet: &Cabinet) -> GridConfig {
        match self {
            Axis::Rows => GridConfig::new(free, driven, cabinet),
            Axis::Cols => GridConfig::new(driven, free, cabinet),
        }
    }

    fn free_count(self, grid: &GridConfig) -> u32 {
        match self {
            Axis::Rows => grid.cols,
            Axis::Cols => grid.rows,
        }
    }

    fn dimension(self) -> &'static str {
        match self {
            Axis::Rows => "height",
            Axis::Cols => "width",
        }
    }

    fn count_name(self) -> &'static str {
        match self {
            Axis::Rows => "rows",
            Axis::Cols => "columns",
        }
    }
}

impl ConfigSolver<'_> {
    fn max_driven(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Rows => self.max_rows,
            Axis::Cols => self.max_cols,
        }
    }

    fn max_free(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Rows => self.max_cols,
            Axis::Cols => self.max_rows,
        }
    }

    fn limit_mm(&self, axis: Axis) -> Millimeter {
        match axis {
            Axis::Rows => self.limits.max_height_mm,
            Axis::Cols => self.limits.max_width_mm,
        }
    }

    /// AR-closest grid with `driven` cabinets on the driven axis.
    ///
    /// The free count is taken from `{floor(ideal), ceil(ideal)}`, both clamped to
    /// `[1, max_free]`. Clamping keeps `floor ≤ ceil`, so the ascending set iterates in
    /// generation order and `closest_ar` favours the floor candidate on ties.
    fn best_for_aspect(&self, axis: Axis, driven: u32, ar: AspectRatio) -> Option<GridConfig> {
        let ideal = axis.ideal_free(driven, ar, self.cabinet);
        let max_free = self.max_free(axis);

        let candidates: BTreeSet<u32> = [ideal.floor(), ideal.ceil()]
            .into_iter()
            .map(|count| (count as u32).clamp(1, max_free))
            .collect();

        super::closest_ar(
            candidates
                .into_iter()
                .map(|free| axis.grid(driven, free, self.cabinet)),
            ar,
        )
    }

    pub(super) fn find_by_aspect(
        &self,
        axis: Axis,
        target_mm: Millimeter,
        ar: AspectRatio,
        notices: &mut Vec<String>,
    ) -> Bracket {
        let max_driven = self.max_driven(axis);
        let natural = target_mm / axis.cabinet_extent(self.cabinet);

        if is_strictly_below(natural, 1.0) {
            notices.push(Self::too_small_notice(axis.dimension()));
            return Bracket::minimum(self.cabinet);
        }

        let below = (natural.floor() as u32).clamp(1, max_driven);
        let above = natural.ceil() as u32;

        if natural.ceil() > f64::from(max_driven) {
            notices.push(format!(
                "Requested size exceeds maximum supported dimensions. Results are capped at \
                 {max_driven} {} (max {} {} mm).",
                axis.count_name(),
                axis.dimension(),
                self.limit_mm(axis),
            ));
        }

        let above_clamped = above.min(max_driven);
        let lower = self.best_for_aspect(axis, below, ar);

        let upper = if above_clamped == below {
            // The target sits on a whole count (or on the cap): look one step further
            if below < max_driven {
                self.best_for_aspect(axis, below + 1, ar)
            } else {
                lower.as_ref().and_then(|lower| {
                    let free = axis
                        .free_count(lower)
                        .saturating_add(1)
                        .min(self.max_free(axis));
                    let candidate = axis.grid(below, free, self.cabinet);
                    is_strictly_above(candidate.diag_mm, lower.diag_mm).then_some(candidate)
                })
            }
        } else {
            self.best_for_aspect(axis, above_clamped, ar)
        };

        Bracket { lower, upper }
    }
}
