//! # Parameter selection
//!
//! A display is described by exactly **two** of four parameters: aspect ratio, height, width and
//! diagonal. This module models that choice as data:
//!
//! - [`ParamId`] names one parameter.
//! - [`ParamPair`] is the closed set of the six valid unordered pairs, so the derivation table in
//!   [`target`](crate::target) is matched exhaustively and a seventh combination cannot be
//!   expressed.
//! - [`ParamSelection`] is the interactive 2-of-4 toggle state that produces a [`ParamPair`].
//! - [`parse_positive`] reads a raw user string the way a leading-number parser does.
use std::{
    collections::BTreeMap,
    fmt,
    str::FromStr,
    sync::LazyLock,
};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
    units::{convert_unit, Unit},
    wallfit_errors::WallFitError,
};

/// Identifier of one sizing parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamId {
    #[serde(rename = "ar")]
    AspectRatio,
    Height,
    Width,
    Diagonal,
}

impl ParamId {
    pub const ALL: [ParamId; 4] = [
        ParamId::AspectRatio,
        ParamId::Height,
        ParamId::Width,
        ParamId::Diagonal,
    ];

    /// Wire identifier (`"ar"`, `"height"`, `"width"`, `"diagonal"`).
    pub fn as_str(self) -> &'static str {
        match self {
            ParamId::AspectRatio => "ar",
            ParamId::Height => "height",
            ParamId::Width => "width",
            ParamId::Diagonal => "diagonal",
        }
    }

    /// Label used in user-facing messages.
    pub fn label(self) -> &'static str {
        match self {
            ParamId::AspectRatio => "aspect ratio",
            other => other.as_str(),
        }
    }

    fn index(self) -> usize {
        match self {
            ParamId::AspectRatio => 0,
            ParamId::Height => 1,
            ParamId::Width => 2,
            ParamId::Diagonal => 3,
        }
    }
}

impl fmt::Display for ParamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParamId {
    type Err = WallFitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ar" => Ok(ParamId::AspectRatio),
            "height" => Ok(ParamId::Height),
            "width" => Ok(ParamId::Width),
            "diagonal" => Ok(ParamId::Diagonal),
            _ => Err(WallFitError::InvalidParameter(s.to_string())),
        }
    }
}

/// The six valid unordered pairs of parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamPair {
    AspectHeight,
    AspectWidth,
    AspectDiagonal,
    HeightWidth,
    HeightDiagonal,
    WidthDiagonal,
}

impl ParamPair {
    /// Build the pair from two identifiers given in any order.
    ///
    /// Return
    /// ----------
    /// * The pair, or [`WallFitError::DuplicateParameter`] if both identifiers are equal.
    pub fn from_ids(a: ParamId, b: ParamId) -> Result<Self, WallFitError> {
        use ParamId::*;

        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        match (first, second) {
            (AspectRatio, Height) => Ok(ParamPair::AspectHeight),
            (AspectRatio, Width) => Ok(ParamPair::AspectWidth),
            (AspectRatio, Diagonal) => Ok(ParamPair::AspectDiagonal),
            (Height, Width) => Ok(ParamPair::HeightWidth),
            (Height, Diagonal) => Ok(ParamPair::HeightDiagonal),
            (Width, Diagonal) => Ok(ParamPair::WidthDiagonal),
            (same, _) => Err(WallFitError::DuplicateParameter(same)),
        }
    }

    /// The two identifiers, in canonical order.
    pub fn ids(self) -> (ParamId, ParamId) {
        use ParamId::*;

        match self {
            ParamPair::AspectHeight => (AspectRatio, Height),
            ParamPair::AspectWidth => (AspectRatio, Width),
            ParamPair::AspectDiagonal => (AspectRatio, Diagonal),
            ParamPair::HeightWidth => (Height, Width),
            ParamPair::HeightDiagonal => (Height, Diagonal),
            ParamPair::WidthDiagonal => (Width, Diagonal),
        }
    }

    pub fn contains(self, id: ParamId) -> bool {
        let (a, b) = self.ids();
        a == id || b == id
    }
}

/// Raw user strings for height, width and diagonal, keyed by parameter.
pub type RawValues = BTreeMap<ParamId, String>;

static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?")
        .expect("leading number pattern is valid")
});

/// Parse the leading number of `raw`, ignoring trailing characters (`"12abc"` → 12).
pub fn parse_leading_number(raw: &str) -> Option<f64> {
    LEADING_NUMBER
        .find(raw)
        .and_then(|m| m.as_str().trim().parse::<f64>().ok())
}

/// Parse `raw` as a finite, strictly positive number.
pub fn parse_positive(raw: &str) -> Option<f64> {
    parse_leading_number(raw).filter(|v| v.is_finite() && *v > 0.0)
}

/// Re-express every parsable raw value in a new unit.
///
/// Empty or unparsable strings are kept as they are.
pub fn convert_raw_values(values: &RawValues, from: Unit, to: Unit) -> RawValues {
    values
        .iter()
        .map(|(id, raw)| {
            let converted = match parse_leading_number(raw) {
                Some(v) if *id != ParamId::AspectRatio => convert_unit(v, from, to).to_string(),
                _ => raw.clone(),
            };
            (*id, converted)
        })
        .collect()
}

/// Interactive 2-of-4 parameter selection.
///
/// Deselecting is always allowed; selecting is only accepted while fewer than two
/// parameters are active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParamSelection {
    selected: [bool; 4],
}

impl ParamSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle `id` and return whether it is selected afterwards.
    pub fn toggle(&mut self, id: ParamId) -> bool {
        let slot = id.index();
        if self.selected[slot] {
            self.selected[slot] = false;
        } else if self.count() < 2 {
            self.selected[slot] = true;
        }
        self.selected[slot]
    }

    pub fn is_selected(&self, id: ParamId) -> bool {
        self.selected[id.index()]
    }

    pub fn count(&self) -> usize {
        self.selected.iter().filter(|s| **s).count()
    }

    /// How many more parameters must be picked before a calculation can run.
    pub fn remaining(&self) -> usize {
        2usize.saturating_sub(self.count())
    }

    /// Selected identifiers in canonical order.
    pub fn active(&self) -> Vec<ParamId> {
        ParamId::ALL
            .into_iter()
            .filter(|id| self.is_selected(*id))
            .collect()
    }

    /// The selected pair, once exactly two parameters are active.
    pub fn pair(&self) -> Option<ParamPair> {
        match self.active().as_slice() {
            [a, b] => ParamPair::from_ids(*a, *b).ok(),
            _ => None,
        }
    }
}
