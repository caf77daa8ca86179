use super::internal::*;

/// A polygon: vertex indices in winding order, and a material slot index.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Face {
	pub verts: SmallVec<[u32; 4]>,
	pub material: u32,
}

impl Face {
	pub fn new(verts: &[u32]) -> Self {
		Self {
			verts: verts.into(),
			material: 0,
		}
	}

	pub fn with_material(mut self, material: u32) -> Self {
		self.material = material;
		self
	}

	pub fn len(&self) -> usize {
		self.verts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.verts.is_empty()
	}
}

/// Texture coordinates, one per face corner.
#[derive(Clone, Debug, PartialEq)]
pub struct UvLayer {
	pub name: String,
	pub uvs: Vec<SmallVec<[Vec2; 4]>>,
}

/// Colors, one per face corner.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorLayer {
	pub name: String,
	pub colors: Vec<SmallVec<[Rgba; 4]>>,
}

/// One triangle of a (fan-triangulated) face.
/// `corners` index into the face's corners, not into the vertex array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tri {
	pub face: usize,
	pub corners: [usize; 3],
}

/// Polygon mesh, positions in world space.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
	pub positions: Vec<Vec3>,
	pub faces: Vec<Face>,
	pub uv_layers: Vec<UvLayer>,
	pub color_layers: Vec<ColorLayer>,
}

impl Mesh {
	pub fn new(positions: Vec<Vec3>, faces: Vec<Face>) -> Self {
		Self {
			positions,
			faces,
			uv_layers: vec![],
			color_layers: vec![],
		}
	}

	/// Add a UV layer with one UV per face corner.
	pub fn with_uv_layer(mut self, name: &str, uvs: Vec<SmallVec<[Vec2; 4]>>) -> Self {
		debug_assert_eq!(uvs.len(), self.faces.len());
		self.uv_layers.push(UvLayer { name: name.into(), uvs });
		self
	}

	/// The UV layer used for baking (the first one).
	pub fn active_uv_layer(&self) -> Option<&UvLayer> {
		self.uv_layers.first()
	}

	pub fn has_uv_layer(&self) -> bool {
		!self.uv_layers.is_empty()
	}

	pub fn color_layer(&self, name: &str) -> Option<&ColorLayer> {
		self.color_layers.iter().find(|layer| layer.name == name)
	}

	/// Set per-corner colors on the named layer, replacing it if it exists.
	pub fn set_color_layer(&mut self, name: &str, colors: Vec<SmallVec<[Rgba; 4]>>) {
		debug_assert_eq!(colors.len(), self.faces.len());
		match self.color_layers.iter_mut().find(|layer| layer.name == name) {
			Some(layer) => layer.colors = colors,
			None => self.color_layers.push(ColorLayer { name: name.into(), colors }),
		}
	}

	/// Expand per-vertex colors to per-corner colors.
	pub fn corner_colors(&self, per_vertex: &[Rgba]) -> Vec<SmallVec<[Rgba; 4]>> {
		self.faces.iter().map(|face| face.verts.iter().map(|&v| per_vertex[v as usize]).collect()).collect()
	}

	/// Area-weighted face normal (Newell's method), not normalized.
	/// Length is twice the polygon area.
	pub fn face_normal(&self, face: &Face) -> Vec3 {
		let mut n = Vec3::ZERO;
		for (i, &a) in face.verts.iter().enumerate() {
			let a = self.positions[a as usize];
			let b = self.positions[face.verts[(i + 1) % face.len()] as usize];
			n += vec3((a.y - b.y) * (a.z + b.z), (a.z - b.z) * (a.x + b.x), (a.x - b.x) * (a.y + b.y));
		}
		n
	}

	/// Area-weighted average of adjacent face normals, normalized.
	/// Isolated vertices get +Z.
	pub fn vertex_normals(&self) -> Vec<Vec3> {
		let mut normals = vec![Vec3::ZERO; self.positions.len()];
		for face in &self.faces {
			let n = self.face_normal(face);
			for &v in &face.verts {
				normals[v as usize] += n;
			}
		}
		normals.into_iter().map(|n| n.try_normalize().unwrap_or(Vec3::Z)).collect()
	}

	/// Fan triangulation of all faces.
	pub fn triangles(&self) -> impl Iterator<Item = Tri> + '_ {
		self.faces
			.iter()
			.enumerate()
			.flat_map(|(face, f)| (1..f.len().saturating_sub(1)).map(move |i| Tri { face, corners: [0, i, i + 1] }))
	}

	pub fn tri_verts(&self, tri: &Tri) -> [u32; 3] {
		let verts = &self.faces[tri.face].verts;
		tri.corners.map(|c| verts[c])
	}

	pub fn tri_positions(&self, tri: &Tri) -> [Vec3; 3] {
		self.tri_verts(tri).map(|v| self.positions[v as usize])
	}

	pub fn tri_uvs(&self, layer: &UvLayer, tri: &Tri) -> [Vec2; 3] {
		let uvs = &layer.uvs[tri.face];
		tri.corners.map(|c| uvs[c])
	}

	pub fn tri_colors(&self, layer: &ColorLayer, tri: &Tri) -> [Rgba; 3] {
		let colors = &layer.colors[tri.face];
		tri.corners.map(|c| colors[c])
	}

	/// Vertices connected to each vertex by an edge.
	pub fn neighbors(&self) -> Vec<SmallVec<[u32; 8]>> {
		let mut neighbors = vec![SmallVec::<[u32; 8]>::new(); self.positions.len()];
		let mut link = |a: u32, b: u32| {
			if !neighbors[a as usize].contains(&b) {
				neighbors[a as usize].push(b)
			}
		};
		for face in &self.faces {
			for (i, &a) in face.verts.iter().enumerate() {
				let b = face.verts[(i + 1) % face.len()];
				if a != b {
					link(a, b);
					link(b, a);
				}
			}
		}
		neighbors
	}

	/// Connected element index for every vertex.
	/// Elements are numbered in order of their lowest vertex.
	pub fn elements(&self) -> Vec<usize> {
		let mut parent = (0..self.positions.len()).collect::<Vec<_>>();

		fn root(parent: &mut [usize], mut v: usize) -> usize {
			while parent[v] != v {
				parent[v] = parent[parent[v]];
				v = parent[v];
			}
			v
		}

		for face in &self.faces {
			let Some((&first, rest)) = face.verts.split_first() else { continue };
			let first = first as usize;
			for &v in rest {
				let (a, b) = (root(&mut parent, first), root(&mut parent, v as usize));
				if a != b {
					parent[a.max(b)] = a.min(b);
				}
			}
		}

		let mut number = HashMap::default();
		(0..self.positions.len())
			.map(|v| {
				let r = root(&mut parent, v);
				let next = number.len();
				*number.entry(r).or_insert(next)
			})
			.collect()
	}

	/// Axis-aligned bounds (min, max). Zero for an empty mesh.
	pub fn bounds(&self) -> (Vec3, Vec3) {
		if self.positions.is_empty() {
			return (Vec3::ZERO, Vec3::ZERO);
		}
		self.positions.iter().fold((Vec3::splat(f32::INFINITY), Vec3::splat(f32::NEG_INFINITY)), |(min, max), &p| (min.min(p), max.max(p)))
	}
}

/// Unit quad in the XY plane facing +Z, UV mapped to the full texture.
/// Handy as a minimal bakeable low-poly object.
pub fn unit_quad(z: f32) -> Mesh {
	Mesh::new(
		vec![vec3(0.0, 0.0, z), vec3(1.0, 0.0, z), vec3(1.0, 1.0, z), vec3(0.0, 1.0, z)],
		vec![Face::new(&[0, 1, 2, 3])],
	)
	.with_uv_layer("UVMap", vec![smallvec![vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(1.0, 1.0), vec2(0.0, 1.0)]])
}
