use super::internal::*;

/// A `Ray` is a half-line defined by a starting point
/// and direction (unit vector).
/// Positions along the `Ray` are measured by their distance
/// `t` from the start:
///
///   start
///     +------|-------|-------|------->
///    t=0    t=1     t=2     t=3
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
	pub start: Vec3,
	pub dir: Vec3,
}

impl Ray {
	/// Constructs a ray with given starting point and direction.
	/// Both must be finite, and dir must be a unit vector.
	#[inline]
	pub fn new(start: Vec3, dir: Vec3) -> Self {
		debug_assert!(start.is_finite(), "Ray::new: start not finite: {start}");
		debug_assert!(dir.is_normalized(), "Ray::new: dir not normalized: {dir}, len = {}", dir.length());
		Self { start, dir }
	}

	/// The ray with its starting point offset by `delta_t` along the ray direction.
	#[must_use]
	#[inline]
	pub fn offset(&self, delta_t: f32) -> Self {
		Self::new(self.at(delta_t), self.dir)
	}

	/// Point at distance `t` (positive) from the start.
	#[inline]
	pub fn at(&self, t: f32) -> Vec3 {
		self.start + self.dir * t
	}
}
