//! Fresnel reflectance for dielectric interfaces.

/// Unpolarized Fresnel reflectance at a dielectric boundary.
///
/// `cos_theta_i` is signed: positive means the ray is on the `eta_i`
/// side of the interface. A negative cosine swaps the two indices and
/// proceeds with its absolute value, so callers never have to reorient
/// for rays exiting a medium. Returns a value in [0, 1]; total internal
/// reflection returns exactly 1.0.
pub fn fr_dielectric(cos_theta_i: f32, eta_i: f32, eta_t: f32) -> f32 {
    let mut cos_theta_i = cos_theta_i.clamp(-1.0, 1.0);
    let mut eta_i = eta_i;
    let mut eta_t = eta_t;

    let entering = cos_theta_i > 0.0;
    if !entering {
        std::mem::swap(&mut eta_i, &mut eta_t);
        cos_theta_i = cos_theta_i.abs();
    }

    // Snell's law
    let sin_theta_i = (1.0 - cos_theta_i * cos_theta_i).max(0.0).sqrt();
    let sin_theta_t = eta_i / eta_t * sin_theta_i;

    // Total internal reflection
    if sin_theta_t >= 1.0 {
        return 1.0;
    }

    let cos_theta_t = (1.0 - sin_theta_t * sin_theta_t).max(0.0).sqrt();
    let r_parallel = ((eta_t * cos_theta_i) - (eta_i * cos_theta_t))
        / ((eta_t * cos_theta_i) + (eta_i * cos_theta_t));
    let r_perpendicular = ((eta_i * cos_theta_i) - (eta_t * cos_theta_t))
        / ((eta_i * cos_theta_i) + (eta_t * cos_theta_t));
    (r_parallel * r_parallel + r_perpendicular * r_perpendicular) / 2.0
}
