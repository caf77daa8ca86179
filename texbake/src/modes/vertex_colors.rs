use super::internal::*;
use std::f32::consts::PI;

/// Procedural vertex colors some bake modes paint onto the source geometry
/// before baking. Materials read them back from the `bake_colors` layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VertexColors {
	/// Grayscale concavity: dark in creases, bright on ridges.
	Dirt,
	/// One random color per connected element.
	IdElement,
	/// One random color per material slot.
	IdMaterial,
}

impl VertexColors {
	pub const LAYER: &'static str = "bake_colors";

	pub fn apply(self, mesh: &mut Mesh) {
		let colors = match self {
			VertexColors::Dirt => mesh.corner_colors(&dirt(mesh)),
			VertexColors::IdElement => {
				let elements = mesh.elements();
				let per_vertex = elements.iter().map(|&e| id_color(e as u64)).collect::<Vec<_>>();
				mesh.corner_colors(&per_vertex)
			}
			VertexColors::IdMaterial => mesh
				.faces
				.iter()
				.map(|face| smallvec![id_color(face.material as u64); face.len()])
				.collect(),
		};
		mesh.set_color_layer(Self::LAYER, colors)
	}
}

/// Distinct, reproducible color for an id.
/// Hues are spread by the golden ratio, saturation and value are jittered by a seeded generator.
pub fn id_color(id: u64) -> Rgba {
	const GOLDEN: f32 = 0.618_034;
	let mut rng = Xoshiro256PlusPlus::seed_from_u64(id);
	let hue = (0.1 + id as f32 * GOLDEN).fract();
	let sat = rng.gen_range(0.55..0.9);
	let val = rng.gen_range(0.75..1.0);
	hsv_to_rgba(hue, sat, val)
}

fn hsv_to_rgba(h: f32, s: f32, v: f32) -> Rgba {
	let h = h * 6.0;
	let i = h.floor() as i32 % 6;
	let f = h - h.floor();
	let (p, q, t) = (v * (1.0 - s), v * (1.0 - s * f), v * (1.0 - s * (1.0 - f)));
	let (r, g, b) = match i {
		0 => (v, t, p),
		1 => (q, v, p),
		2 => (p, v, t),
		3 => (p, q, v),
		4 => (t, p, v),
		_ => (v, p, q),
	};
	[r, g, b, 1.0]
}

/// Per-vertex dirt: the angle between the vertex normal and the average direction
/// towards its neighbors, mapped to 0 (neighbors straight above: crease) .. 1 (ridge).
/// Smoothed once over neighbors, then stretched to the full range.
fn dirt(mesh: &Mesh) -> Vec<Rgba> {
	let normals = mesh.vertex_normals();
	let neighbors = mesh.neighbors();

	let raw = (0..mesh.positions.len())
		.map(|v| {
			let p = mesh.positions[v];
			let dir = neighbors[v].iter().map(|&n| (mesh.positions[n as usize] - p).normalize_or_zero()).sum::<Vec3>();
			match dir.try_normalize() {
				None => 0.5,
				Some(dir) => normals[v].dot(dir).clamp(-1.0, 1.0).acos() / PI,
			}
		})
		.collect::<Vec<_>>();

	let smooth = (0..raw.len())
		.map(|v| {
			let n = &neighbors[v];
			(raw[v] + n.iter().map(|&n| raw[n as usize]).sum::<f32>()) / (1 + n.len()) as f32
		})
		.collect::<Vec<_>>();

	let min = smooth.iter().copied().fold(f32::INFINITY, f32::min);
	let max = smooth.iter().copied().fold(f32::NEG_INFINITY, f32::max);
	let range = max - min;
	smooth
		.into_iter()
		.map(|d| match range > 1e-6 {
			true => (d - min) / range,
			false => d,
		})
		.map(|d| [d, d, d, 1.0])
		.collect()
}

#[cfg(test)]
mod test {
	use super::*;

	// A "V" shaped strip: two quads meeting in a crease along x = 1.
	fn crease() -> Mesh {
		let positions = vec![
			vec3(0.0, 0.0, 1.0),
			vec3(1.0, 0.0, 0.0),
			vec3(2.0, 0.0, 1.0),
			vec3(0.0, 1.0, 1.0),
			vec3(1.0, 1.0, 0.0),
			vec3(2.0, 1.0, 1.0),
		];
		Mesh::new(positions, vec![Face::new(&[0, 1, 4, 3]), Face::new(&[1, 2, 5, 4])])
	}

	#[test]
	fn dirt_darkens_creases() {
		let mut mesh = crease();
		VertexColors::Dirt.apply(&mut mesh);
		let layer = mesh.color_layer(VertexColors::LAYER).unwrap();
		let crease = layer.colors[0][1][0]; // vertex 1
		let rim = layer.colors[0][0][0]; // vertex 0
		assert!(crease < rim, "crease {crease} rim {rim}");
	}

	#[test]
	fn id_element_colors_per_element() {
		let mut mesh = unit_quad(0.0);
		let other = unit_quad(2.0);
		mesh.positions.extend(other.positions);
		mesh.faces.push(Face::new(&[4, 5, 6, 7]));
		VertexColors::IdElement.apply(&mut mesh);

		let layer = mesh.color_layer(VertexColors::LAYER).unwrap();
		assert!(layer.colors[0].iter().all(|&c| c == id_color(0)));
		assert!(layer.colors[1].iter().all(|&c| c == id_color(1)));
		assert_ne!(id_color(0), id_color(1));
	}

	#[test]
	fn id_material_colors_per_face_material() {
		let mut mesh = crease();
		mesh.faces[1].material = 3;
		VertexColors::IdMaterial.apply(&mut mesh);
		let layer = mesh.color_layer(VertexColors::LAYER).unwrap();
		assert_eq!(layer.colors[0][0], id_color(0));
		assert_eq!(layer.colors[1][0], id_color(3));
	}

	#[test]
	fn id_colors_are_reproducible() {
		assert_eq!(id_color(7), id_color(7));
		assert!(id_color(7).iter().all(|c| (0.0..=1.0).contains(c)));
	}
}
