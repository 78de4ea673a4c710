//! Lux scattering core - CPU path tracing BxDFs
//!
//! The material-scattering stage of the Lux path tracer: given a
//! surface hit and a material record, pick the next ray direction and
//! fold the material's contribution into the path throughput.
//!
//! The material model covers Lambertian diffuse, ideal specular
//! reflection, ideal specular transmission, and a Fresnel-weighted
//! glass mix of the two specular branches. Intersection, ray
//! generation, and the integrator loop live upstream; this crate only
//! rewrites a `PathSegment` per bounce.

mod batch;
mod bxdf;
mod fresnel;
mod material;
mod path;
mod rng;
mod sampling;
mod scatter;

pub use batch::{partition_by_kind, scatter_batch, Interaction};
pub use bxdf::{glass, lambertian, specular_reflection, specular_refraction, RAY_ORIGIN_OFFSET};
pub use fresnel::fr_dielectric;
pub use material::{
    load_palette, Color, Material, MaterialError, MaterialKind, PaletteError, GATE_EPSILON,
};
pub use path::PathSegment;
pub use rng::{gen_f32, path_rng};
pub use sampling::cosine_sample_hemisphere;
pub use scatter::scatter;

/// Re-export the math types from lux_math
pub use lux_math::{Ray, Vec3};
