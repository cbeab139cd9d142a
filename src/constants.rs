//! # Constants and type definitions for wallfit
//!
//! This module centralizes the **physical limits**, **numerical tolerances**, and **common type
//! aliases** used throughout the `wallfit` library.
//!
//! ## Overview
//!
//! - Maximum physical wall envelope (width and height, millimeters)
//! - Floating-point tolerance shared by every comparison in the solver
//! - Threshold above which an aspect ratio is reported as not exactly achievable
//! - Unit conversion factors (unit → millimeters)
//!
//! The limits here are only the *defaults*: the solver receives them through
//! [`PhysicalLimits`](crate::limits::PhysicalLimits), so alternate envelopes can be used
//! without touching process-wide state.

// -------------------------------------------------------------------------------------------------
// Physical limits
// -------------------------------------------------------------------------------------------------

/// Maximum supported wall width in millimeters (6 m)
pub const MAX_WIDTH_MM: f64 = 6000.0;

/// Maximum supported wall height in millimeters (2.5 m)
pub const MAX_HEIGHT_MM: f64 = 2500.0;

// -------------------------------------------------------------------------------------------------
// Numerical tolerances
// -------------------------------------------------------------------------------------------------

/// Numerical epsilon used for floating-point comparisons
pub const EPS: f64 = 1e-6;

/// Maximum difference between the cabinet's native aspect ratio and the requested one
/// before an "aspect ratio may not be achievable" notice is emitted
pub const AR_NOTICE_TOLERANCE: f64 = 0.02;

/// Number of extra columns/rows examined on each side of the natural floor/ceil counts
/// by the diagonal search
pub const DIAGONAL_WINDOW_MARGIN: u32 = 1;

// -------------------------------------------------------------------------------------------------
// Unit conversion factors
// -------------------------------------------------------------------------------------------------

/// Millimeters in one meter
pub const MM_PER_M: f64 = 1000.0;

/// Millimeters in one foot
pub const MM_PER_FT: f64 = 304.8;

/// Millimeters in one inch
pub const MM_PER_IN: f64 = 25.4;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Length in millimeters (the base unit of every computation)
pub type Millimeter = f64;

/// Width divided by height
pub type AspectRatio = f64;
