use super::internal::*;
use std::f32::consts::PI;

/// Map a uniformly distributed point in the unit square
/// to a cosine-weighted direction in the hemisphere around `normal`.
pub fn cosine_hemisphere(rnd: Vec2, normal: Vec3) -> Vec3 {
	let phi = 2.0 * PI * rnd.x;
	let r = rnd.y.sqrt();
	let z = (1.0 - rnd.y).max(0.0).sqrt();
	let (u, v) = normal.any_orthonormal_pair();
	(r * phi.cos() * u + r * phi.sin() * v + z * normal).normalize()
}
