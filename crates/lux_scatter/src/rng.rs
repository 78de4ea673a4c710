//! Deterministic per-path random streams.
//!
//! Every scattering decision comes from a stream the calling path owns
//! exclusively. Streams are seeded from (frame seed, pixel index,
//! bounce counter), so re-running a single path in isolation replays
//! the exact scattering decisions it made inside a wavefront.

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

/// Draw a uniform f32 in [0, 1).
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen()
}

// splitmix64 finalizer
#[inline]
fn mix(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Build the random stream for one path at one bounce.
///
/// Neighboring pixels and consecutive bounces must not share a stream,
/// so all three inputs go through a mixing round before seeding.
pub fn path_rng(frame_seed: u64, pixel_index: usize, depth: i32) -> SmallRng {
    let seed = mix(frame_seed ^ mix(pixel_index as u64 ^ mix(depth as u64)));
    SmallRng::seed_from_u64(seed)
}
