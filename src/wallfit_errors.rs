use thiserror::Error;

use crate::params::ParamId;

/// Errors raised while validating a sizing request.
///
/// The `Display` text of the input-related variants is the exact message surfaced to the user
/// through [`CalcResult::errors`](crate::calculator::CalcResult::errors).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WallFitError {
    #[error("Please enter a valid positive value for {}.", .0.label())]
    InvalidValue(ParamId),

    #[error("Diagonal must be greater than {0}.")]
    DiagonalTooShort(ParamId),

    #[error("Parameter {0} cannot be selected twice.")]
    DuplicateParameter(ParamId),

    #[error("Invalid unit: {0}")]
    InvalidUnit(String),

    #[error("Invalid parameter identifier: {0}")]
    InvalidParameter(String),

    #[error("Invalid cabinet dimensions: {0}")]
    InvalidCabinet(String),

    #[error("Unknown cabinet: {0}")]
    UnknownCabinet(String),

    #[error("Invalid aspect ratio: {0}")]
    InvalidAspectRatio(String),

    #[error("The {0} cabinet is larger than the maximum supported wall size.")]
    CabinetExceedsLimits(String),
}
