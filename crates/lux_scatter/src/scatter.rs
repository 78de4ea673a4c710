//! Per-bounce scatter dispatch.

use crate::bxdf;
use crate::material::{Material, MaterialKind};
use crate::path::PathSegment;
use lux_math::Vec3;
use rand::RngCore;

/// Scatter one path off one surface hit.
///
/// Resolves the material's branch and runs exactly one scattering
/// primitive: the path's ray is replaced and its throughput multiplied
/// by a non-negative per-channel factor. The call cannot fail for
/// well-formed inputs (`normal` unit length, material validated
/// upstream). There is no blending of diffuse with specular within one
/// call; a surface wanting both is modeled as glass-like stochastic
/// mixing or sampled multiple times by the integrator.
pub fn scatter(
    path: &mut PathSegment,
    point: Vec3,
    normal: Vec3,
    material: &Material,
    rng: &mut dyn RngCore,
) {
    match material.kind() {
        MaterialKind::Glass => bxdf::glass(path, point, normal, material, rng),
        MaterialKind::Reflective => bxdf::specular_reflection(path, point, normal, material),
        MaterialKind::Refractive => bxdf::specular_refraction(path, point, normal, material),
        MaterialKind::Diffuse => bxdf::lambertian(path, point, normal, material, rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Color;
    use lux_math::Ray;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fresh_path() -> PathSegment {
        let direction = Vec3::new(0.4, -0.8, 0.2).normalize();
        PathSegment::new(Ray::new(Vec3::new(0.0, 1.0, 0.0), direction), 0, 8)
    }

    #[test]
    fn test_pure_mirror_always_reflects() {
        let normal = Vec3::Y;
        let material = Material::mirror(Color::ONE);
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..100 {
            let mut path = fresh_path();
            let wo = path.ray.direction;
            scatter(&mut path, Vec3::ZERO, normal, &material, &mut rng);

            let mirrored = wo - 2.0 * wo.dot(normal) * normal;
            assert!((path.ray.direction - mirrored).length() < 1e-6);
        }
    }

    #[test]
    fn test_glass_never_goes_diffuse() {
        // With both gates set, every outcome is one of the two
        // specular directions, across many random draws.
        let normal = Vec3::Y;
        let material = Material::glass(Color::ONE, 1.5);
        let mut rng = StdRng::seed_from_u64(21);

        for _ in 0..500 {
            let mut path = fresh_path();
            let wo = path.ray.direction;
            scatter(&mut path, Vec3::ZERO, normal, &material, &mut rng);

            let mirrored = wo - 2.0 * wo.dot(normal) * normal;
            let transmitted = crate::bxdf::refract(wo, normal, 1.0 / 1.5);
            let is_specular = (path.ray.direction - mirrored).length() < 1e-5
                || (path.ray.direction - transmitted).length() < 1e-5;
            assert!(is_specular);
        }
    }

    #[test]
    fn test_diffuse_fallback_when_no_gate_set() {
        let normal = Vec3::Y;
        let material = Material::diffuse(Color::new(0.6, 0.6, 0.6));
        let mut rng = StdRng::seed_from_u64(8);

        let mut path = fresh_path();
        scatter(&mut path, Vec3::ZERO, normal, &material, &mut rng);

        assert!(path.ray.direction.dot(normal) >= 0.0);
        assert_eq!(path.color, Color::new(0.6, 0.6, 0.6));
    }

    #[test]
    fn test_direction_stays_unit_length_across_branches() {
        let normal = Vec3::new(0.2, 0.9, -0.1).normalize();
        let materials = [
            Material::diffuse(Color::ONE),
            Material::mirror(Color::ONE),
            Material::refractive(Color::ONE, 1.5),
            Material::glass(Color::ONE, 1.5),
        ];
        let mut rng = StdRng::seed_from_u64(17);

        for material in &materials {
            for _ in 0..100 {
                let mut path = fresh_path();
                scatter(&mut path, Vec3::ZERO, normal, material, &mut rng);
                let len = path.ray.direction.length();
                // Zero direction only on a killed (TIR) transmission path
                assert!(
                    (len - 1.0).abs() < 1e-4 || path.color == Color::ZERO,
                    "kind {:?} produced length {}",
                    material.kind(),
                    len
                );
            }
        }
    }

    #[test]
    fn test_throughput_never_increases() {
        let normal = Vec3::Y;
        let materials = [
            Material::diffuse(Color::new(0.8, 0.5, 0.3)),
            Material::mirror(Color::new(0.9, 0.9, 0.9)),
            Material::refractive(Color::new(1.0, 0.95, 0.9), 1.5),
            Material::glass(Color::ONE, 1.5),
        ];
        let mut rng = StdRng::seed_from_u64(29);

        for material in &materials {
            let mut path = fresh_path();
            for _ in 0..8 {
                let before = path.color;
                scatter(&mut path, Vec3::ZERO, normal, material, &mut rng);
                let after = path.color;
                assert!(after.min_element() >= 0.0);
                assert!(after.x <= before.x && after.y <= before.y && after.z <= before.z);
            }
        }
    }
}
