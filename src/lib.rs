//! # wallfit
//!
//! Size a video wall out of identical rectangular cabinets. Given two of
//! {aspect ratio, height, width, diagonal}, [`calculate`] returns the closest integer grid no
//! larger than the request and the closest one no smaller, inside a fixed physical envelope.
pub mod cabinet;
pub mod calculator;
pub mod constants;
pub mod grid;
pub mod limits;
pub mod params;
pub mod solver;
pub mod target;
pub mod tolerance;
pub mod units;
pub mod wallfit_errors;

pub use cabinet::{parse_aspect_ratio, Cabinet};
pub use calculator::{calculate, CalcInput, CalcResult, WallCalculator};
pub use grid::GridConfig;
pub use limits::PhysicalLimits;
pub use params::{ParamId, ParamPair, ParamSelection, RawValues};
pub use units::Unit;
pub use wallfit_errors::WallFitError;
