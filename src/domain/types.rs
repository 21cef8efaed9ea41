//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - passed in from an indentation-fit pipeline as plain tags
//! - stored alongside fitted moduli in the caller's own outputs
//! - reloaded later to reproduce a correction

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BecError;

/// Shape of the AFM tip.
///
/// `Cone` and `Conical` are distinct tags: the Gavara and Managuli models
/// accept `cone`, the Garcia–Garcia table is keyed by `conical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndenterShape {
    Paraboloid,
    Cone,
    FlatPunch,
    Conical,
}

impl IndenterShape {
    pub const ALL: [IndenterShape; 4] = [
        IndenterShape::Paraboloid,
        IndenterShape::Cone,
        IndenterShape::FlatPunch,
        IndenterShape::Conical,
    ];

    /// Tag used on the wire and in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            IndenterShape::Paraboloid => "paraboloid",
            IndenterShape::Cone => "cone",
            IndenterShape::FlatPunch => "flat_punch",
            IndenterShape::Conical => "conical",
        }
    }
}

impl fmt::Display for IndenterShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndenterShape {
    type Err = BecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IndenterShape::ALL
            .into_iter()
            .find(|shape| shape.as_str() == s.trim())
            .ok_or_else(|| BecError::UnknownShape(s.to_string()))
    }
}

/// Which correction model to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BecModel {
    /// Dimitriadis et al. 2002, eq. (12): sample bonded to the substrate.
    DimitriadisBonded,
    /// Dimitriadis et al. 2002, eq. (11): sample free to slip on the substrate.
    DimitriadisNotBonded,
    /// Gavara & Chadwick 2012, conical tip.
    Gavara,
    /// Managuli & Roy 2018, eq. (1), conical tip.
    Managuli,
    /// Garcia & Garcia 2018, generalized series for three geometries.
    GarciaGarcia,
    /// Kontomaris & Malamou 2021, eq. (17): spherical tip against the
    /// paraboloid approximation.
    Kontomaris,
}

impl BecModel {
    pub const ALL: [BecModel; 6] = [
        BecModel::DimitriadisBonded,
        BecModel::DimitriadisNotBonded,
        BecModel::Gavara,
        BecModel::Managuli,
        BecModel::GarciaGarcia,
        BecModel::Kontomaris,
    ];

    /// Tag used in configuration files and environment variables.
    pub fn as_str(self) -> &'static str {
        match self {
            BecModel::DimitriadisBonded => "dimitriadis_bonded",
            BecModel::DimitriadisNotBonded => "dimitriadis_not_bonded",
            BecModel::Gavara => "gavara",
            BecModel::Managuli => "managuli",
            BecModel::GarciaGarcia => "garcia_garcia",
            BecModel::Kontomaris => "kontomaris",
        }
    }

    /// Human-readable label for diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            BecModel::DimitriadisBonded => "Dimitriadis paraboloid bonded",
            BecModel::DimitriadisNotBonded => "Dimitriadis paraboloid not bonded",
            BecModel::Gavara => "Gavara cone",
            BecModel::Managuli => "Managuli cone",
            BecModel::GarciaGarcia => "Garcia, Garcia",
            BecModel::Kontomaris => "Kontomaris sphere approximation",
        }
    }

    /// Literature reference the series is taken from.
    pub fn source(self) -> &'static str {
        match self {
            BecModel::DimitriadisBonded | BecModel::DimitriadisNotBonded => {
                "https://www.ncbi.nlm.nih.gov/pmc/articles/PMC1302067/"
            }
            BecModel::Gavara => "https://www.nature.com/articles/nnano.2012.163",
            BecModel::Managuli => "https://link.springer.com/article/10.1007/s40799-018-0268-8",
            BecModel::GarciaGarcia => "https://www.cell.com/biophysj/pdf/S0006-3495(18)30590-3.pdf",
            BecModel::Kontomaris => "https://doi.org/10.1088/1361-6404/abccfb",
        }
    }

    /// Geometries the model defines a correction for.
    pub fn supported_shapes(self) -> &'static [IndenterShape] {
        match self {
            BecModel::DimitriadisBonded
            | BecModel::DimitriadisNotBonded
            | BecModel::Kontomaris => &[IndenterShape::Paraboloid],
            BecModel::Gavara | BecModel::Managuli => &[IndenterShape::Cone],
            BecModel::GarciaGarcia => &[
                IndenterShape::Paraboloid,
                IndenterShape::Conical,
                IndenterShape::FlatPunch,
            ],
        }
    }

    pub fn supports(self, shape: IndenterShape) -> bool {
        self.supported_shapes().contains(&shape)
    }

    /// Number of series terms available to sum.
    pub fn term_count(self) -> usize {
        match self {
            BecModel::DimitriadisBonded | BecModel::DimitriadisNotBonded => 4,
            BecModel::Gavara | BecModel::Managuli => 2,
            BecModel::GarciaGarcia => 4,
            BecModel::Kontomaris => 6,
        }
    }

    /// Default truncation order. Only the Garcia–Garcia and Kontomaris
    /// series can be truncated below it.
    pub fn default_order(self) -> usize {
        self.term_count()
    }

    pub fn has_selectable_order(self) -> bool {
        matches!(self, BecModel::GarciaGarcia | BecModel::Kontomaris)
    }
}

impl fmt::Display for BecModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BecModel {
    type Err = BecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BecModel::ALL
            .into_iter()
            .find(|model| model.as_str() == s.trim())
            .ok_or_else(|| BecError::UnknownModel(s.to_string()))
    }
}

/// Why a single sample fell back to the neutral coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum SampleFault {
    /// The series evaluated to NaN or an infinity (e.g. the square root of a
    /// negative depth-radius product).
    NonFinite { value: f64 },
    /// The requested order reaches past the end of the term table.
    OrderOutOfRange { order: usize, available: usize },
}

impl fmt::Display for SampleFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleFault::NonFinite { value } => write!(f, "non-finite coefficient ({value})"),
            SampleFault::OrderOutOfRange { order, available } => {
                write!(f, "order {order} exceeds the {available} available terms")
            }
        }
    }
}

/// Diagnostic record for one degraded sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleFailure {
    /// Position in the input indentation sequence.
    pub index: usize,
    pub depth: f64,
    pub fault: SampleFault,
}

/// Coefficients for one indentation sequence.
///
/// `coefficients` always has one entry per input depth, in input order.
/// Samples listed in `failures` carry the neutral value 1.0.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Correction {
    pub coefficients: Vec<f64>,
    pub failures: Vec<SampleFailure>,
}

impl Correction {
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// True when every sample was computed from the series.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn into_coefficients(self) -> Vec<f64> {
        self.coefficients
    }
}
