//! # Target derivation
//!
//! Turns a two-parameter selection and its raw values into the physical size being solved for,
//! a [`TargetSpec`] in millimeters.
//!
//! Resolution happens in two steps:
//!
//! 1. [`TargetParams::resolve`] parses and unit-converts the raw values of the active pair. Any
//!    value that is not a finite positive number yields a [`WallFitError::InvalidValue`] naming
//!    the parameter; all offending parameters are reported and nothing else is checked.
//! 2. [`TargetParams::derive`] checks the geometry (a diagonal must exceed the side it is paired
//!    with) and applies the derivation formula of the pair:
//!
//! | Pair                | Target height        | Target width         |
//! |---------------------|----------------------|----------------------|
//! | aspect + height     | `H`                  | `H · ar`             |
//! | aspect + width      | `W / ar`             | `W`                  |
//! | aspect + diagonal   | `D / √(ar² + 1)`     | `height · ar`        |
//! | height + width      | `H`                  | `W`                  |
//! | height + diagonal   | `H`                  | `√(D² − H²)`         |
//! | width + diagonal    | `√(D² − W²)`         | `W`                  |
use nalgebra::Vector2;

use crate::{
    constants::{AspectRatio, Millimeter},
    params::{parse_positive, ParamId, ParamPair, RawValues},
    tolerance::is_strictly_above,
    units::{to_base_unit, Unit},
    wallfit_errors::WallFitError,
};

/// The physical size being solved for, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetSpec {
    pub width_mm: Millimeter,
    pub height_mm: Millimeter,
}

impl TargetSpec {
    pub fn new(width_mm: Millimeter, height_mm: Millimeter) -> Self {
        TargetSpec {
            width_mm,
            height_mm,
        }
    }

    /// Straight-line diagonal, computed the same way as [`GridConfig`](crate::grid::GridConfig)
    /// so exact grid matches compare equal.
    pub fn diagonal_mm(&self) -> Millimeter {
        Vector2::new(self.width_mm, self.height_mm).norm()
    }
}

/// Which search the solver runs for a given pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchStrategy {
    /// Aspect ratio fixed with height: rows follow the height, columns follow the ratio.
    AspectByHeight(AspectRatio),
    /// Aspect ratio fixed with width: columns follow the width, rows follow the ratio.
    AspectByWidth(AspectRatio),
    /// Both sides are pinned; bracket the target by diagonal distance.
    Diagonal,
}

/// An active pair together with its validated values (lengths in millimeters).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetParams {
    AspectHeight { ar: AspectRatio, height: Millimeter },
    AspectWidth { ar: AspectRatio, width: Millimeter },
    AspectDiagonal { ar: AspectRatio, diagonal: Millimeter },
    HeightWidth { height: Millimeter, width: Millimeter },
    HeightDiagonal { height: Millimeter, diagonal: Millimeter },
    WidthDiagonal { width: Millimeter, diagonal: Millimeter },
}

/// Reads the value of each active parameter, remembering every invalid one.
struct ValueReader<'a> {
    values: &'a RawValues,
    ar_value: Option<f64>,
    unit: Unit,
    errors: Vec<WallFitError>,
}

impl ValueReader<'_> {
    fn read(&mut self, id: ParamId) -> f64 {
        let value = match id {
            ParamId::AspectRatio => self.ar_value.filter(|v| v.is_finite() && *v > 0.0),
            _ => self
                .values
                .get(&id)
                .and_then(|raw| parse_positive(raw))
                .map(|v| to_base_unit(v, self.unit)),
        };

        value.unwrap_or_else(|| {
            self.errors.push(WallFitError::InvalidValue(id));
            f64::NAN
        })
    }
}

impl TargetParams {
    /// Parse and convert the values of the active pair.
    ///
    /// Arguments
    /// -----------------
    /// * `pair`: The active parameter pair.
    /// * `values`: Raw strings for height, width and diagonal.
    /// * `ar_value`: Precomputed aspect ratio, required iff the pair contains it.
    /// * `unit`: Unit of the raw length strings.
    ///
    /// Return
    /// ----------
    /// * The resolved parameters, or one [`WallFitError::InvalidValue`] per invalid parameter.
    pub fn resolve(
        pair: ParamPair,
        values: &RawValues,
        ar_value: Option<f64>,
        unit: Unit,
    ) -> Result<Self, Vec<WallFitError>> {
        let mut reader = ValueReader {
            values,
            ar_value,
            unit,
            errors: Vec::new(),
        };

        let (first, second) = pair.ids();
        let a = reader.read(first);
        let b = reader.read(second);

        if !reader.errors.is_empty() {
            return Err(reader.errors);
        }

        Ok(match pair {
            ParamPair::AspectHeight => TargetParams::AspectHeight { ar: a, height: b },
            ParamPair::AspectWidth => TargetParams::AspectWidth { ar: a, width: b },
            ParamPair::AspectDiagonal => TargetParams::AspectDiagonal { ar: a, diagonal: b },
            ParamPair::HeightWidth => TargetParams::HeightWidth {
                height: a,
                width: b,
            },
            ParamPair::HeightDiagonal => TargetParams::HeightDiagonal {
                height: a,
                diagonal: b,
            },
            ParamPair::WidthDiagonal => TargetParams::WidthDiagonal {
                width: a,
                diagonal: b,
            },
        })
    }

    pub fn pair(&self) -> ParamPair {
        match self {
            TargetParams::AspectHeight { .. } => ParamPair::AspectHeight,
            TargetParams::AspectWidth { .. } => ParamPair::AspectWidth,
            TargetParams::AspectDiagonal { .. } => ParamPair::AspectDiagonal,
            TargetParams::HeightWidth { .. } => ParamPair::HeightWidth,
            TargetParams::HeightDiagonal { .. } => ParamPair::HeightDiagonal,
            TargetParams::WidthDiagonal { .. } => ParamPair::WidthDiagonal,
        }
    }

    /// The requested aspect ratio, if the pair fixes one.
    pub fn aspect_ratio(&self) -> Option<AspectRatio> {
        match *self {
            TargetParams::AspectHeight { ar, .. }
            | TargetParams::AspectWidth { ar, .. }
            | TargetParams::AspectDiagonal { ar, .. } => Some(ar),
            _ => None,
        }
    }

    pub fn strategy(&self) -> SearchStrategy {
        match *self {
            TargetParams::AspectHeight { ar, .. } => SearchStrategy::AspectByHeight(ar),
            TargetParams::AspectWidth { ar, .. } => SearchStrategy::AspectByWidth(ar),
            _ => SearchStrategy::Diagonal,
        }
    }

    /// Check the geometry and compute the target width and height.
    ///
    /// Return
    /// ----------
    /// * The [`TargetSpec`], or [`WallFitError::DiagonalTooShort`] when a diagonal does not
    ///   strictly exceed the height or width it is paired with.
    pub fn derive(&self) -> Result<TargetSpec, WallFitError> {
        let target = match *self {
            TargetParams::AspectHeight { ar, height } => TargetSpec::new(height * ar, height),
            TargetParams::AspectWidth { ar, width } => TargetSpec::new(width, width / ar),
            TargetParams::AspectDiagonal { ar, diagonal } => {
                let height = diagonal / (ar * ar + 1.0).sqrt();
                TargetSpec::new(height * ar, height)
            }
            TargetParams::HeightWidth { height, width } => TargetSpec::new(width, height),
            TargetParams::HeightDiagonal { height, diagonal } => {
                if !is_strictly_above(diagonal, height) {
                    return Err(WallFitError::DiagonalTooShort(ParamId::Height));
                }
                TargetSpec::new((diagonal * diagonal - height * height).sqrt(), height)
            }
            TargetParams::WidthDiagonal { width, diagonal } => {
                if !is_strictly_above(diagonal, width) {
                    return Err(WallFitError::DiagonalTooShort(ParamId::Width));
                }
                TargetSpec::new(width, (diagonal * diagonal - width * width).sqrt())
            }
        };

        log::debug!(
            "derived target {:.3} x {:.3} mm from {:?}",
            target.width_mm,
            target.height_mm,
            self.pair()
        );
        Ok(target)
    }
}
