//! Wavefront scattering across many paths in parallel.
//!
//! One dispatcher call per in-flight path, no shared mutable state
//! between paths, so a wavefront maps directly onto rayon's parallel
//! iterators. Callers on divergence-sensitive hardware can partition
//! a wavefront by resolved branch first and run the groups back to
//! back.

use crate::material::{Material, MaterialKind};
use crate::path::PathSegment;
use crate::rng::path_rng;
use crate::scatter::scatter;
use lux_math::Vec3;
use rayon::prelude::*;

/// One surface interaction produced by an intersection provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interaction {
    /// Point of intersection
    pub point: Vec3,
    /// Surface normal at the intersection, unit length
    pub normal: Vec3,
    /// Index into the shared material slice
    pub material: usize,
    /// False for rays that missed the scene this bounce
    pub hit: bool,
}

impl Interaction {
    /// Record a hit against material `material`.
    pub fn hit(point: Vec3, normal: Vec3, material: usize) -> Self {
        Self {
            point,
            normal,
            material,
            hit: true,
        }
    }

    /// Record a miss.
    pub fn miss() -> Self {
        Self {
            point: Vec3::ZERO,
            normal: Vec3::ZERO,
            material: 0,
            hit: false,
        }
    }
}

/// Scatter a whole wavefront of paths in parallel.
///
/// `paths` and `interactions` run in lockstep; each path draws from
/// its own stream derived from `frame_seed`, its pixel index and its
/// bounce counter, so replaying a single path reproduces its batch
/// result exactly. Paths that missed the scene or have exhausted their
/// bounce budget are left untouched; retiring them stays the
/// integrator's decision.
pub fn scatter_batch(
    paths: &mut [PathSegment],
    interactions: &[Interaction],
    materials: &[Material],
    frame_seed: u64,
) {
    assert_eq!(paths.len(), interactions.len());

    paths
        .par_iter_mut()
        .zip(interactions.par_iter())
        .filter(|(path, interaction)| interaction.hit && path.alive())
        .for_each(|(path, interaction)| {
            let material = &materials[interaction.material];
            let mut rng = path_rng(frame_seed, path.pixel_index, path.remaining_bounces);
            scatter(
                path,
                interaction.point,
                interaction.normal,
                material,
                &mut rng,
            );
        });
}

/// Group wavefront indices by the scattering branch their material
/// resolves to.
///
/// Misses are excluded. The groups come back in a fixed order (glass,
/// reflective, refractive, diffuse) with empty groups dropped.
pub fn partition_by_kind(
    interactions: &[Interaction],
    materials: &[Material],
) -> Vec<(MaterialKind, Vec<usize>)> {
    const ORDER: [MaterialKind; 4] = [
        MaterialKind::Glass,
        MaterialKind::Reflective,
        MaterialKind::Refractive,
        MaterialKind::Diffuse,
    ];

    let mut groups: Vec<(MaterialKind, Vec<usize>)> =
        ORDER.iter().map(|kind| (*kind, Vec::new())).collect();

    for (index, interaction) in interactions.iter().enumerate() {
        if !interaction.hit {
            continue;
        }
        let kind = materials[interaction.material].kind();
        let slot = ORDER.iter().position(|k| *k == kind).unwrap();
        groups[slot].1.push(index);
    }

    log::debug!(
        "wavefront partition: glass={} reflective={} refractive={} diffuse={}",
        groups[0].1.len(),
        groups[1].1.len(),
        groups[2].1.len(),
        groups[3].1.len()
    );

    groups.retain(|(_, indices)| !indices.is_empty());
    groups
}
