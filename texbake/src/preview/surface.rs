use super::internal::*;

/// A point on an object's surface, with the attributes shading needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfacePoint {
	pub object: ObjectId,
	pub face: usize,
	pub pos: Vec3,
	/// Smooth (interpolated vertex) normal.
	pub normal: Vec3,
	/// Interpolated bake vertex color, if the mesh has them.
	pub color: Option<Rgba>,
	/// Height within the object's bounds: 0 at the bottom, 1 at the top.
	pub height: f32,
}

/// Triangulated, smooth shaded view of an object.
pub struct MeshSurface<'a> {
	pub object: ObjectId,
	pub mesh: &'a Mesh,
	pub tris: Vec<Tri>,
	normals: Vec<Vec3>,
	bounds: (Vec3, Vec3),
}

impl<'a> MeshSurface<'a> {
	pub fn new(ctx: &'a RenderContext, object: ObjectId) -> Self {
		let mesh = &ctx.object(object).mesh;
		Self {
			object,
			mesh,
			tris: mesh.triangles().collect(),
			normals: mesh.vertex_normals(),
			bounds: mesh.bounds(),
		}
	}

	pub fn positions(&self, tri: usize) -> [Vec3; 3] {
		self.mesh.tri_positions(&self.tris[tri])
	}

	pub fn point(&self, tri: usize, bary: Vec3) -> SurfacePoint {
		let t = &self.tris[tri];
		let pos = interpolate(self.mesh.tri_positions(t), bary);
		let normal = interpolate(self.mesh.tri_verts(t).map(|v| self.normals[v as usize]), bary)
			.try_normalize()
			.unwrap_or_else(|| self.mesh.face_normal(&self.mesh.faces[t.face]).normalize_or_zero());
		let color = self.mesh.color_layer(VertexColors::LAYER).map(|layer| {
			let [c0, c1, c2] = self.mesh.tri_colors(layer, t);
			[0, 1, 2, 3].map(|i| c0[i] * bary.x + c1[i] * bary.y + c2[i] * bary.z)
		});
		let (min, max) = self.bounds;
		let height = match max.z > min.z {
			true => saturate((pos.z - min.z) / (max.z - min.z)),
			false => 0.0,
		};
		SurfacePoint {
			object: self.object,
			face: t.face,
			pos,
			normal,
			color,
			height,
		}
	}
}

/// Source objects of a bake, ready for ray tracing.
pub struct Sources<'a> {
	surfaces: Vec<MeshSurface<'a>>,
	/// Triangle ID => (surface, triangle) index.
	lookup: Vec<(usize, usize)>,
	tree: Node<Triangle>,
}

impl<'a> Sources<'a> {
	pub fn new(ctx: &'a RenderContext, objects: &[ObjectId]) -> Self {
		let surfaces = objects.iter().map(|&id| MeshSurface::new(ctx, id)).collect::<Vec<_>>();
		let mut lookup = vec![];
		let mut tris = vec![];
		for (s, surface) in surfaces.iter().enumerate() {
			for t in 0..surface.tris.len() {
				tris.push(Triangle::new(surface.positions(t), lookup.len()));
				lookup.push((s, t));
			}
		}
		debug!("tracing against {} objects, {} triangles", surfaces.len(), tris.len());
		Self {
			surfaces,
			lookup,
			tree: Node::build_tree(tris),
		}
	}

	/// Nearest surface point along the ray.
	pub fn hit(&self, ray: &Ray) -> Option<SurfacePoint> {
		let hit = self.tree.intersection(ray).attrib?;
		let (s, t) = self.lookup[hit.id];
		Some(self.surfaces[s].point(t, hit.bary))
	}

	/// Is anything closer than `max_t` along the ray?
	pub fn occluded(&self, ray: &Ray, max_t: f32) -> bool {
		self.tree.intersects_within(ray, max_t)
	}
}

fn interpolate(v: [Vec3; 3], bary: Vec3) -> Vec3 {
	v[0] * bary.x + v[1] * bary.y + v[2] * bary.z
}
