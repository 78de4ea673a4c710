//! Scattering demo.
//!
//! Bounces a small wavefront of paths off a plane that cycles through
//! the material palette and prints what each path looks like after a
//! few bounces.

use lux_scatter::{
    load_palette, partition_by_kind, scatter_batch, Interaction, PathSegment, Ray, Vec3,
};

const PALETTE_JSON: &str = r#"[
    { "color": [0.8, 0.2, 0.2] },
    { "has_reflective": 1.0, "specular_color": [0.9, 0.9, 0.9] },
    { "has_refractive": 1.0, "index_of_refraction": 1.5 },
    { "has_reflective": 1.0, "has_refractive": 1.0, "index_of_refraction": 1.52 }
]"#;

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .init();

    println!("Lux Scattering Demo");
    println!("===================");

    let materials = load_palette(PALETTE_JSON).expect("palette should parse");
    println!("Palette: {} materials", materials.len());

    // A wavefront of 16 paths aimed down at a plane through the origin
    let mut paths: Vec<PathSegment> = (0..16)
        .map(|pixel| {
            let direction = Vec3::new(0.3, -1.0, 0.1).normalize();
            PathSegment::new(Ray::new(Vec3::new(0.0, 2.0, 0.0), direction), pixel, 4)
        })
        .collect();

    let frame_seed = 2026;
    for bounce in 0..4 {
        // A real renderer gets these from its intersection stage;
        // here every live path hits the plane again.
        let interactions: Vec<Interaction> = paths
            .iter()
            .map(|path| Interaction::hit(path.ray.origin, Vec3::Y, path.pixel_index % materials.len()))
            .collect();

        let groups = partition_by_kind(&interactions, &materials);
        println!(
            "bounce {}: {} branch group(s) in wavefront",
            bounce,
            groups.len()
        );

        scatter_batch(&mut paths, &interactions, &materials, frame_seed);
        for path in paths.iter_mut() {
            path.remaining_bounces -= 1;
        }
    }

    println!();
    for path in &paths {
        println!(
            "pixel {:2}  throughput ({:.3}, {:.3}, {:.3})  direction ({:+.3}, {:+.3}, {:+.3})",
            path.pixel_index,
            path.color.x,
            path.color.y,
            path.color.z,
            path.ray.direction.x,
            path.ray.direction.y,
            path.ray.direction.z
        );
    }
}
