//! Hemisphere sampling for diffuse scattering.

use crate::rng::gen_f32;
use lux_math::Vec3;
use rand::RngCore;
use std::f32::consts::TAU;

/// Axis-selection threshold: at least one of |x|, |y|, |z| of a unit
/// vector is always below sqrt(1/3).
const SQRT_ONE_THIRD: f32 = 0.577_350_26;

/// Cosine-weighted random direction in the hemisphere around `normal`.
///
/// `normal` must be unit length; that is the caller's responsibility.
/// Consumes exactly two uniform draws from `rng` and touches no other
/// state.
pub fn cosine_sample_hemisphere(normal: Vec3, rng: &mut dyn RngCore) -> Vec3 {
    let up = gen_f32(rng).sqrt(); // cos(theta)
    let over = (1.0 - up * up).sqrt(); // sin(theta)
    let around = gen_f32(rng) * TAU;

    // Pick a reference axis that cannot be nearly parallel to the
    // normal, then build the tangent frame with two cross products.
    let not_normal = if normal.x.abs() < SQRT_ONE_THIRD {
        Vec3::X
    } else if normal.y.abs() < SQRT_ONE_THIRD {
        Vec3::Y
    } else {
        Vec3::Z
    };

    let perpendicular1 = normal.cross(not_normal).normalize();
    let perpendicular2 = normal.cross(perpendicular1).normalize();

    up * normal + around.cos() * over * perpendicular1 + around.sin() * over * perpendicular2
}
