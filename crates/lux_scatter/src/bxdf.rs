//! Scattering primitives.
//!
//! Each primitive mutates a path in place: the ray is replaced and the
//! throughput is multiplied by the material's color or tint. The glass
//! mix divides Fresnel reflectance by |cos theta| before using it as
//! the branch probability, and the chosen branch is not re-weighted by
//! its selection probability; both conventions are deliberate and
//! match the rest of the sampling pipeline.

use crate::fresnel::fr_dielectric;
use crate::material::Material;
use crate::path::PathSegment;
use crate::rng::gen_f32;
use crate::sampling::cosine_sample_hemisphere;
use lux_math::Vec3;
use rand::RngCore;

/// Offset applied to every scattered ray origin, stepping past the
/// surface it just left to avoid immediate self-intersection.
pub const RAY_ORIGIN_OFFSET: f32 = 1e-3;

/// Transmitted vectors shorter than this signal total internal
/// reflection from `refract`.
const TIR_LENGTH_CUTOFF: f32 = 1e-2;

/// Mirror `v` about the unit normal `n`.
#[inline]
pub(crate) fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract `v` through a surface with unit normal `n` and relative
/// index `eta`. Returns the zero vector on total internal reflection.
#[inline]
pub(crate) fn refract(v: Vec3, n: Vec3, eta: f32) -> Vec3 {
    let n_dot_v = n.dot(v);
    let k = 1.0 - eta * eta * (1.0 - n_dot_v * n_dot_v);
    if k < 0.0 {
        Vec3::ZERO
    } else {
        eta * v - (eta * n_dot_v + k.sqrt()) * n
    }
}

/// Ideal mirror reflection. Consumes no randomness.
pub fn specular_reflection(
    path: &mut PathSegment,
    point: Vec3,
    normal: Vec3,
    material: &Material,
) {
    path.color *= material.specular_color;
    let direction = reflect(path.ray.direction, normal);
    path.ray.direction = direction;
    path.ray.origin = point + RAY_ORIGIN_OFFSET * direction;
}

/// Ideal specular transmission via Snell's law.
///
/// The side of the surface is taken from the sign of dot(direction,
/// normal); leaving flips the normal and inverts the index ratio so
/// the refraction formula always sees a consistently oriented normal.
/// Past the critical angle the transmitted path carries nothing: the
/// throughput is zeroed and the direction falls back to the mirror
/// reflection about the unflipped normal.
pub fn specular_refraction(
    path: &mut PathSegment,
    point: Vec3,
    normal: Vec3,
    material: &Material,
) {
    let wo = path.ray.direction;
    let leaving = wo.dot(normal) > 0.0;
    let n = if leaving { -normal } else { normal };
    let eta = if leaving {
        material.index_of_refraction
    } else {
        1.0 / material.index_of_refraction
    };

    let mut wi = refract(wo, n, eta);

    // Total internal reflection
    if wi.length() < TIR_LENGTH_CUTOFF {
        path.color *= 0.0;
        wi = reflect(wo, normal);
    }

    path.color *= material.specular_color;
    path.ray.direction = wi;
    path.ray.origin = point + RAY_ORIGIN_OFFSET * wi;
}

/// Dielectric that both reflects and refracts.
///
/// Evaluates Fresnel reflectance for the side the ray is on, then
/// draws one uniform value to pick between the two specular branches.
pub fn glass(
    path: &mut PathSegment,
    point: Vec3,
    normal: Vec3,
    material: &Material,
    rng: &mut dyn RngCore,
) {
    let v_dot_n = (-path.ray.direction).dot(normal);
    let leaving = v_dot_n < 0.0;
    let (eta_i, eta_t) = if leaving {
        (material.index_of_refraction, 1.0)
    } else {
        (1.0, material.index_of_refraction)
    };

    let reflect_probability = fr_dielectric(v_dot_n, eta_i, eta_t) / v_dot_n.abs();

    if gen_f32(rng) < reflect_probability {
        specular_reflection(path, point, normal, material);
    } else {
        specular_refraction(path, point, normal, material);
    }
}

/// Cosine-weighted Lambertian diffuse bounce.
pub fn lambertian(
    path: &mut PathSegment,
    point: Vec3,
    normal: Vec3,
    material: &Material,
    rng: &mut dyn RngCore,
) {
    let direction = cosine_sample_hemisphere(normal.normalize(), rng);
    path.color *= material.color;
    path.ray.direction = direction;
    path.ray.origin = point + RAY_ORIGIN_OFFSET * direction;
}
