//! # Wall size calculator
//!
//! This module defines [`WallCalculator`], the façade that wires together the steps of a sizing
//! request:
//!
//! 1. **Selection** – the two active parameters form a [`ParamPair`].
//! 2. **Derivation** – raw values are validated, converted to millimeters and turned into a
//!    [`TargetSpec`](crate::target::TargetSpec) ([`TargetParams`]).
//! 3. **Clamping** – the target is capped to the [`PhysicalLimits`] envelope.
//! 4. **Search** – the [`ConfigSolver`] brackets the target between two integer grids.
//!
//! Problems are reported in two disjoint lists of [`CalcResult`]:
//!
//! - `errors` are blocking: when non-empty, no search runs and both grids are `None`,
//! - `notices` are informational and never prevent a result.
//!
//! ## Typical usage
//!
//! ```rust
//! use wallfit::{calculate, Cabinet, CalcInput, ParamId, Unit};
//!
//! let input = CalcInput::new(
//!     (ParamId::AspectRatio, ParamId::Width),
//!     Cabinet::from_catalog("16:9").unwrap(),
//!     Unit::Mm,
//! )
//! .with_aspect_ratio(16.0 / 9.0)
//! .with_value(ParamId::Width, "3000");
//!
//! let result = calculate(&input);
//! assert!(result.errors.is_empty());
//! assert_eq!(result.lower.unwrap().cols, 5);
//! assert_eq!(result.upper.unwrap().cols, 6);
//! ```
//!
//! Every call is independent: the calculator holds only its immutable limits, so one instance
//! can serve any number of callers.
use serde::{Deserialize, Serialize};

use crate::{
    cabinet::Cabinet,
    grid::GridConfig,
    limits::{aspect_ratio_notice, PhysicalLimits},
    params::{ParamId, ParamPair, RawValues},
    solver::ConfigSolver,
    target::TargetParams,
    units::Unit,
    wallfit_errors::WallFitError,
};

/// A sizing request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcInput {
    /// The two distinct active parameters.
    pub active_params: (ParamId, ParamId),
    /// Raw strings for the active height/width/diagonal parameters, in `unit`.
    #[serde(default)]
    pub values: RawValues,
    /// Precomputed aspect ratio, required iff `ar` is active.
    #[serde(default)]
    pub ar_value: Option<f64>,
    pub cabinet: Cabinet,
    pub unit: Unit,
}

impl CalcInput {
    pub fn new(active_params: (ParamId, ParamId), cabinet: Cabinet, unit: Unit) -> Self {
        CalcInput {
            active_params,
            values: RawValues::new(),
            ar_value: None,
            cabinet,
            unit,
        }
    }

    pub fn with_value(mut self, id: ParamId, raw: impl Into<String>) -> Self {
        self.values.insert(id, raw.into());
        self
    }

    pub fn with_aspect_ratio(mut self, ar: f64) -> Self {
        self.ar_value = Some(ar);
        self
    }
}

/// Outcome of a sizing request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalcResult {
    pub lower: Option<GridConfig>,
    pub upper: Option<GridConfig>,
    /// Blocking problems; when present both grids are `None`.
    pub errors: Vec<String>,
    /// Informational messages (clamping, capping, approximate ratio).
    pub notices: Vec<String>,
}

impl CalcResult {
    fn failed<I>(errors: I, notices: Vec<String>) -> Self
    where
        I: IntoIterator<Item = WallFitError>,
    {
        let errors: Vec<String> = errors.into_iter().map(|e| e.to_string()).collect();
        log::debug!("request rejected: {errors:?}");
        CalcResult {
            lower: None,
            upper: None,
            errors,
            notices,
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// No error, yet no configuration on either side.
    pub fn is_empty(&self) -> bool {
        !self.has_errors() && self.lower.is_none() && self.upper.is_none()
    }
}

/// Sizing façade holding the physical envelope.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WallCalculator {
    limits: PhysicalLimits,
}

impl WallCalculator {
    pub fn new(limits: PhysicalLimits) -> Self {
        WallCalculator { limits }
    }

    pub fn limits(&self) -> &PhysicalLimits {
        &self.limits
    }

    /// Run a sizing request end to end.
    ///
    /// Arguments
    /// -----------------
    /// * `input`: Active pair, raw values, aspect ratio, cabinet and unit.
    ///
    /// Return
    /// ----------
    /// * A [`CalcResult`]. Invalid input is reported through `errors` (both grids `None`);
    ///   clamping, capping and approximate ratios through `notices`.
    ///
    /// See also
    /// ------------
    /// * [`TargetParams::resolve`] / [`TargetParams::derive`] – Validation and derivation.
    /// * [`PhysicalLimits::clamp`] – Envelope capping.
    /// * [`ConfigSolver::solve`] – Bracket search.
    pub fn calculate(&self, input: &CalcInput) -> CalcResult {
        let mut notices = Vec::new();

        let (first, second) = input.active_params;
        let pair = match ParamPair::from_ids(first, second) {
            Ok(pair) => pair,
            Err(err) => return CalcResult::failed([err], notices),
        };

        let solver = match ConfigSolver::new(&input.cabinet, &self.limits) {
            Ok(solver) => solver,
            Err(err) => return CalcResult::failed([err], notices),
        };

        let params = match TargetParams::resolve(pair, &input.values, input.ar_value, input.unit)
        {
            Ok(params) => params,
            Err(errors) => return CalcResult::failed(errors, notices),
        };

        let target = match params.derive() {
            Ok(target) => target,
            Err(err) => return CalcResult::failed([err], notices),
        };

        let target = self.limits.clamp(&target, input.unit, &mut notices);

        if let Some(ar) = params.aspect_ratio() {
            notices.extend(aspect_ratio_notice(&input.cabinet, ar));
        }

        let bracket = solver.solve(params.strategy(), &target, &mut notices);

        CalcResult {
            lower: bracket.lower,
            upper: bracket.upper,
            errors: Vec::new(),
            notices,
        }
    }
}

/// Run a sizing request against the default 6000 × 2500 mm envelope.
pub fn calculate(input: &CalcInput) -> CalcResult {
    WallCalculator::default().calculate(input)
}

#[cfg(test)]
mod calculator_test {
    use super::*;

    #[test]
    fn test_duplicate_parameter_is_an_error() {
        let input = CalcInput::new(
            (ParamId::Height, ParamId::Height),
            Cabinet::from_catalog("1:1").unwrap(),
            Unit::Mm,
        )
        .with_value(ParamId::Height, "1000");

        let result = calculate(&input);
        assert_eq!(result.errors, vec!["Parameter height cannot be selected twice."]);
        assert!(result.lower.is_none() && result.upper.is_none());
    }

    #[test]
    fn test_aspect_notice_comes_after_clamp() {
        let input = CalcInput::new(
            (ParamId::Height, ParamId::AspectRatio),
            Cabinet::from_catalog("1:1").unwrap(),
            Unit::Mm,
        )
        .with_aspect_ratio(16.0 / 9.0)
        .with_value(ParamId::Height, "3000");

        let result = calculate(&input);
        assert!(!result.has_errors());
        assert!(result.notices[0].starts_with("Your height input (3000.00 mm)"));
        assert!(result.notices[1].starts_with("The 1:1 cabinet"));
    }

    #[test]
    fn test_custom_limits() {
        let calculator = WallCalculator::new(PhysicalLimits::new(3000.0, 1000.0));
        let input = CalcInput::new(
            (ParamId::Height, ParamId::Width),
            Cabinet::from_catalog("1:1").unwrap(),
            Unit::M,
        )
        .with_value(ParamId::Height, "2")
        .with_value(ParamId::Width, "5");

        let result = calculator.calculate(&input);
        let lower = result.lower.unwrap();
        assert_eq!((lower.cols, lower.rows), (6, 2));
        assert!(result.upper.is_none());
        assert_eq!(result.notices.len(), 2);
    }

    #[test]
    fn test_cabinet_larger_than_envelope() {
        let calculator = WallCalculator::new(PhysicalLimits::new(400.0, 400.0));
        let input = CalcInput::new(
            (ParamId::Height, ParamId::Width),
            Cabinet::from_catalog("1:1").unwrap(),
            Unit::Mm,
        )
        .with_value(ParamId::Height, "300")
        .with_value(ParamId::Width, "300");

        let result = calculator.calculate(&input);
        assert_eq!(
            result.errors,
            vec!["The 1:1 cabinet is larger than the maximum supported wall size."]
        );
        assert!(result.lower.is_none() && result.upper.is_none());
    }
}
