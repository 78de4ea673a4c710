//! Material records and branch resolution.

use lux_math::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Threshold above which a branch gate counts as set.
pub const GATE_EPSILON: f32 = 1e-4;

/// The scattering branch a material resolves to.
///
/// Resolved once per material, so callers can batch same-branch work
/// instead of re-testing the gate coefficients per ray.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialKind {
    /// Fresnel-weighted stochastic mix of reflection and refraction
    Glass,
    /// Ideal mirror reflection
    Reflective,
    /// Ideal specular transmission
    Refractive,
    /// Cosine-weighted Lambertian diffuse
    Diffuse,
}

/// Surface material description.
///
/// A plain value record, shared read-only across any number of
/// concurrent scatter calls. `has_reflective` and `has_refractive` are
/// boolean gates with a small epsilon threshold, not physical mixing
/// weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Diffuse/albedo color (RGB, 0-1)
    pub color: Color,

    /// Tint applied by the specular branches
    pub specular_color: Color,

    /// Gate for the specular reflection branch
    pub has_reflective: f32,

    /// Gate for the specular transmission branch
    pub has_refractive: f32,

    /// Index of refraction used by the transmission branches
    pub index_of_refraction: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::new(0.5, 0.5, 0.5), // Grey default
            specular_color: Color::ONE,
            has_reflective: 0.0,
            has_refractive: 0.0,
            index_of_refraction: 1.5,
        }
    }
}

impl Material {
    /// Create a diffuse material with the given albedo color.
    pub fn diffuse(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// Create a perfect mirror with the given specular tint.
    pub fn mirror(specular_color: Color) -> Self {
        Self {
            specular_color,
            has_reflective: 1.0,
            ..Default::default()
        }
    }

    /// Create a purely transmissive material.
    pub fn refractive(specular_color: Color, index_of_refraction: f32) -> Self {
        Self {
            specular_color,
            has_refractive: 1.0,
            index_of_refraction,
            ..Default::default()
        }
    }

    /// Create a glass material (reflects and refracts).
    pub fn glass(specular_color: Color, index_of_refraction: f32) -> Self {
        Self {
            specular_color,
            has_reflective: 1.0,
            has_refractive: 1.0,
            index_of_refraction,
            ..Default::default()
        }
    }

    /// Resolve which scattering branch this material takes.
    ///
    /// Both gates set wins over either alone; neither set falls back to
    /// diffuse.
    pub fn kind(&self) -> MaterialKind {
        let reflective = self.has_reflective > GATE_EPSILON;
        let refractive = self.has_refractive > GATE_EPSILON;
        match (reflective, refractive) {
            (true, true) => MaterialKind::Glass,
            (true, false) => MaterialKind::Reflective,
            (false, true) => MaterialKind::Refractive,
            (false, false) => MaterialKind::Diffuse,
        }
    }

    /// Check the record at the configuration boundary.
    ///
    /// Scatter calls assume valid inputs and never re-check.
    pub fn validate(&self) -> Result<(), MaterialError> {
        if self.color.min_element() < 0.0 {
            return Err(MaterialError::NegativeColor("color"));
        }
        if self.specular_color.min_element() < 0.0 {
            return Err(MaterialError::NegativeColor("specular_color"));
        }
        if self.has_reflective < 0.0 || self.has_refractive < 0.0 {
            return Err(MaterialError::NegativeGate);
        }
        let transmits = matches!(self.kind(), MaterialKind::Glass | MaterialKind::Refractive);
        if transmits && self.index_of_refraction < 1.0 {
            return Err(MaterialError::InvalidIor(self.index_of_refraction));
        }
        Ok(())
    }
}

/// Errors from material validation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MaterialError {
    #[error("negative channel in {0}")]
    NegativeColor(&'static str),

    #[error("negative branch gate coefficient")]
    NegativeGate,

    #[error("index of refraction {0} is below 1.0")]
    InvalidIor(f32),
}

/// Errors from loading a material palette.
#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("malformed palette JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("material {index}: {source}")]
    Invalid {
        index: usize,
        source: MaterialError,
    },
}

/// Parse a JSON array of materials and validate every entry.
///
/// Missing fields fall back to the `Material` defaults, so a palette
/// entry only has to name what it overrides.
pub fn load_palette(json: &str) -> Result<Vec<Material>, PaletteError> {
    let materials: Vec<Material> = serde_json::from_str(json)?;
    for (index, material) in materials.iter().enumerate() {
        material
            .validate()
            .map_err(|source| PaletteError::Invalid { index, source })?;
    }
    log::debug!("loaded material palette: {} entries", materials.len());
    Ok(materials)
}
