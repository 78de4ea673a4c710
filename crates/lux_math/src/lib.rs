// Re-export glam for convenience
pub use glam::*;

// Lux math types
mod ray;
pub use ray::Ray;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec3_component_multiply() {
        let a = Vec3::new(0.5, 1.0, 0.25);
        let b = Vec3::new(0.8, 0.2, 1.0);
        assert_eq!(a * b, Vec3::new(0.4, 0.2, 0.25));
    }
}
