use super::internal::*;

/// Axis-aligned box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
	pub min: Vec3,
	pub max: Vec3,
}

pub trait Bounded {
	fn bounds(&self) -> BoundingBox;
}

impl BoundingBox {
	pub fn new(min: Vec3, max: Vec3) -> Self {
		debug_assert!(min.cmple(max).all());
		Self { min, max }
	}

	/// Smallest box containing all points.
	pub fn from_points(points: &[Vec3]) -> Self {
		let mut bb = Self::EMPTY;
		for &p in points {
			bb.min = bb.min.min(p);
			bb.max = bb.max.max(p);
		}
		bb
	}

	/// Contains nothing, not even the origin. Neutral element of `join`.
	pub const EMPTY: Self = Self {
		min: Vec3::splat(f32::INFINITY),
		max: Vec3::splat(f32::NEG_INFINITY),
	};

	#[must_use]
	pub fn join(&self, rhs: &Self) -> Self {
		Self {
			min: self.min.min(rhs.min),
			max: self.max.max(rhs.max),
		}
	}

	/// Smallest box containing all boxes.
	pub fn union(boxes: impl IntoIterator<Item = BoundingBox>) -> Self {
		boxes.into_iter().fold(Self::EMPTY, |acc, bb| acc.join(&bb))
	}

	pub fn size(&self) -> Vec3 {
		self.max - self.min
	}

	pub fn center(&self) -> Vec3 {
		(self.min + self.max) / 2.0
	}

	/// Index of the longest axis.
	pub fn longest_axis(&self) -> usize {
		let s = self.size();
		if s.x >= s.y && s.x >= s.z {
			0
		} else if s.y >= s.z {
			1
		} else {
			2
		}
	}

	/// Slab test: does the ray pass through the box (in front of its start)?
	pub fn intersects(&self, r: &Ray) -> bool {
		let inv = r.dir.recip();
		let t0 = (self.min - r.start) * inv;
		let t1 = (self.max - r.start) * inv;
		let tmin = t0.min(t1).max_element();
		let tmax = t0.max(t1).min_element();
		// NaN (ray in the plane of a flat box) must not reject the box,
		// hence `!(a > b)` rather than `a <= b`.
		!(tmin > tmax) && !(tmax < 0.0)
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn ray_box() {
		let bb = BoundingBox::new(vec3(0.0, 0.0, 0.0), vec3(1.0, 1.0, 1.0));
		assert!(bb.intersects(&Ray::new(vec3(0.5, 0.5, -1.0), Vec3::Z)));
		assert!(bb.intersects(&Ray::new(vec3(0.5, 0.5, 0.5), Vec3::X)));
		assert!(!bb.intersects(&Ray::new(vec3(0.5, 0.5, -1.0), -Vec3::Z)));
		assert!(!bb.intersects(&Ray::new(vec3(2.0, 0.5, -1.0), Vec3::Z)));
	}

	#[test]
	fn flat_box() {
		let bb = BoundingBox::from_points(&[vec3(0.0, 0.0, 0.0), vec3(1.0, 1.0, 0.0)]);
		assert!(bb.intersects(&Ray::new(vec3(0.5, 0.5, 1.0), -Vec3::Z)));
		assert_eq!(bb.longest_axis(), 0);
	}
}
