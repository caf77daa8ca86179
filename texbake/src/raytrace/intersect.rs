use super::internal::*;

/// Trait for anything that knows how to intersect with a `Ray`.
/// Implemented by triangles and BVH trees.
///
/// The associated type `Attrib` returns some attribute (metadata) about the intersection point.
/// E.g.: barycentric coordinates of the intersection point, ID of the triangle intersected with,...
pub trait Intersect {
	type Attrib: Clone;
	fn intersect(&self, r: &Ray, h: &mut HitRecord<Self::Attrib>) -> bool;

	fn intersection(&self, r: &Ray) -> HitRecord<Self::Attrib> {
		let mut hr = HitRecord::new();
		self.intersect(r, &mut hr);
		hr
	}

	/// Is there any intersection closer than `max_t`?
	fn intersects_within(&self, r: &Ray, max_t: f32) -> bool {
		let mut hr = HitRecord::within(max_t);
		self.intersect(r, &mut hr)
	}
}
