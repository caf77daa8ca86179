use super::internal::*;

/// Triangle with an ID, to find out what was hit.
/// The `Default` triangle is degenerate and never intersects.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Triangle {
	pub verts: [Vec3; 3],
	pub id: usize,
}

/// Where a ray hit a `Triangle`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriangleHit {
	pub id: usize,
	/// Barycentric coordinates: weights of the three vertices.
	pub bary: Vec3,
}

impl Triangle {
	pub fn new(verts: [Vec3; 3], id: usize) -> Self {
		Self { verts, id }
	}
}

impl Intersect for Triangle {
	type Attrib = TriangleHit;

	/// Two-sided intersection.
	#[inline]
	fn intersect(&self, r: &Ray, hr: &mut HitRecord<TriangleHit>) -> bool {
		let [o, v1, v2] = self.verts;
		let a = v1 - o;
		let b = v2 - o;
		let n = a.cross(b);

		let s = r.start - o;
		let t = -n.dot(s) / n.dot(r.dir);

		// handles NaN gracefully
		if !(t > 0.0 && t < hr.t) {
			return false;
		}

		// Barycentric coordinates from sub-triangle areas, after
		// Peter Shirley, Fundamentals of Computer Graphics, 2nd Edition.
		let p = r.at(t) - o;
		let n2 = n.dot(n);
		let l1 = n.dot(p.cross(b)) / n2;
		let l2 = n.dot(a.cross(p)) / n2;
		let l0 = 1.0 - l1 - l2;

		let inside = l0.min(l1).min(l2) >= 0.0;
		if inside {
			hr.record(t, &TriangleHit { id: self.id, bary: vec3(l0, l1, l2) })
		}
		inside
	}
}

impl Bounded for Triangle {
	fn bounds(&self) -> BoundingBox {
		BoundingBox::from_points(&self.verts)
	}
}
