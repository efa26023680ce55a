//! Flavor space and vector math.
//!
//! All flavor profiles live in a fixed 20-dimensional space, each dimension
//! scored on a 0-5 continuous intensity scale. Operations never mutate their
//! inputs; every transform returns a fresh vector.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Number of dimensions in the flavor space.
pub const DIMENSIONS: usize = 20;

/// Absolute tolerance for comparisons against near-zero quantities.
pub const EPSILON_ABS: f64 = 1e-6;
/// Relative tolerance, scaled by the expected magnitude.
pub const EPSILON_REL: f64 = 1e-4;

/// Named dimensions of the flavor space, in storage order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FlavorDimension {
    Umami,
    Salt,
    Sweet,
    Sour,
    Bitter,
    HeatPepper,
    WarmSpice,
    Smoke,
    Roasted,
    FatRich,
    Creamy,
    Herbal,
    Citrus,
    Allium,
    Ferment,
    Earthy,
    Nutty,
    Floral,
    TextureCrisp,
    TextureTender,
}

impl FlavorDimension {
    /// All dimensions in storage order.
    pub const ALL: [FlavorDimension; DIMENSIONS] = [
        FlavorDimension::Umami,
        FlavorDimension::Salt,
        FlavorDimension::Sweet,
        FlavorDimension::Sour,
        FlavorDimension::Bitter,
        FlavorDimension::HeatPepper,
        FlavorDimension::WarmSpice,
        FlavorDimension::Smoke,
        FlavorDimension::Roasted,
        FlavorDimension::FatRich,
        FlavorDimension::Creamy,
        FlavorDimension::Herbal,
        FlavorDimension::Citrus,
        FlavorDimension::Allium,
        FlavorDimension::Ferment,
        FlavorDimension::Earthy,
        FlavorDimension::Nutty,
        FlavorDimension::Floral,
        FlavorDimension::TextureCrisp,
        FlavorDimension::TextureTender,
    ];

    /// Position of this dimension within a vector.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Uppercase label used in human-readable output.
    pub const fn label(self) -> &'static str {
        match self {
            FlavorDimension::Umami => "UMAMI",
            FlavorDimension::Salt => "SALT",
            FlavorDimension::Sweet => "SWEET",
            FlavorDimension::Sour => "SOUR",
            FlavorDimension::Bitter => "BITTER",
            FlavorDimension::HeatPepper => "HEAT_PEPPER",
            FlavorDimension::WarmSpice => "WARM_SPICE",
            FlavorDimension::Smoke => "SMOKE",
            FlavorDimension::Roasted => "ROASTED",
            FlavorDimension::FatRich => "FAT_RICH",
            FlavorDimension::Creamy => "CREAMY",
            FlavorDimension::Herbal => "HERBAL",
            FlavorDimension::Citrus => "CITRUS",
            FlavorDimension::Allium => "ALLIUM",
            FlavorDimension::Ferment => "FERMENT",
            FlavorDimension::Earthy => "EARTHY",
            FlavorDimension::Nutty => "NUTTY",
            FlavorDimension::Floral => "FLORAL",
            FlavorDimension::TextureCrisp => "TEXTURE_CRISP",
            FlavorDimension::TextureTender => "TEXTURE_TENDER",
        }
    }
}

/// A point in the 20-dimensional flavor space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlavorVector([f64; DIMENSIONS]);

impl FlavorVector {
    /// The zero vector.
    pub const fn zero() -> Self {
        Self([0.0; DIMENSIONS])
    }

    pub const fn from_array(values: [f64; DIMENSIONS]) -> Self {
        Self(values)
    }

    /// Build a vector from a slice, failing on any other length. Inputs are
    /// never padded or truncated.
    pub fn from_values(values: &[f64]) -> Result<Self, DomainError> {
        if values.len() != DIMENSIONS {
            return Err(DomainError::DimensionMismatch { actual: values.len() });
        }
        let mut out = [0.0; DIMENSIONS];
        out.copy_from_slice(values);
        Ok(Self(out))
    }

    pub fn get(&self, dim: FlavorDimension) -> f64 {
        self.0[dim.index()]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn dot(&self, other: &FlavorVector) -> f64 {
        self.0.iter().zip(other.0.iter()).map(|(a, b)| a * b).sum()
    }

    /// L2 (Euclidean) norm.
    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// L-infinity norm (largest absolute component).
    pub fn norm_inf(&self) -> f64 {
        self.0.iter().fold(0.0, |max, v| v.abs().max(max))
    }

    pub fn add(&self, other: &FlavorVector) -> FlavorVector {
        let mut out = [0.0; DIMENSIONS];
        for (k, slot) in out.iter_mut().enumerate() {
            *slot = self.0[k] + other.0[k];
        }
        Self(out)
    }

    pub fn sub(&self, other: &FlavorVector) -> FlavorVector {
        let mut out = [0.0; DIMENSIONS];
        for (k, slot) in out.iter_mut().enumerate() {
            *slot = self.0[k] - other.0[k];
        }
        Self(out)
    }

    pub fn scale(&self, scalar: f64) -> FlavorVector {
        let mut out = self.0;
        for slot in out.iter_mut() {
            *slot *= scalar;
        }
        Self(out)
    }

    pub fn abs(&self) -> FlavorVector {
        let mut out = self.0;
        for slot in out.iter_mut() {
            *slot = slot.abs();
        }
        Self(out)
    }

    /// Normalize a dish vector to profile shape:
    /// `V_norm = V / max(5, ||V||inf)`.
    ///
    /// Small dishes divide by the floor of 5 and stay un-inflated; intense
    /// dishes compress to their own peak dimension. The divisor can never be
    /// near zero.
    pub fn normalize_to_profile(&self) -> FlavorVector {
        self.scale(1.0 / 5.0f64.max(self.norm_inf()))
    }
}

impl Index<FlavorDimension> for FlavorVector {
    type Output = f64;

    fn index(&self, dim: FlavorDimension) -> &f64 {
        &self.0[dim.index()]
    }
}

impl Index<usize> for FlavorVector {
    type Output = f64;

    fn index(&self, k: usize) -> &f64 {
        &self.0[k]
    }
}

/// Cosine similarity in [-1, 1]. Defined as 0 (not an error) when either
/// norm is below `EPSILON_ABS`.
pub fn cosine_similarity(a: &FlavorVector, b: &FlavorVector) -> f64 {
    let norm_a = a.norm();
    let norm_b = b.norm();
    if norm_a < EPSILON_ABS || norm_b < EPSILON_ABS {
        return 0.0;
    }
    a.dot(b) / (norm_a * norm_b)
}

/// Round-half-to-even at the given number of decimals. Display output only,
/// never intermediate math.
pub fn bankers_round(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let shifted = value * factor;
    let floored = shifted.floor();
    let diff = shifted - floored;

    if (diff - 0.5).abs() < EPSILON_ABS {
        let floored = floored as i64;
        let even = if floored % 2 == 0 { floored } else { floored + 1 };
        return even as f64 / factor;
    }

    shifted.round() / factor
}

/// Compare within `max(EPSILON_ABS, EPSILON_REL * |expected|)`.
pub fn within_tolerance(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() <= EPSILON_ABS.max(EPSILON_REL * expected.abs())
}
