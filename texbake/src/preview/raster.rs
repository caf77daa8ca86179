use super::internal::*;

/// A texel covered by a UV triangle: which triangle, and where in it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Texel {
	pub tri: usize,
	pub bary: Vec3,
}

/// Find the triangle under each texel center. Row-major, `v = 0` is the bottom row.
/// Where triangles overlap in UV space, the later one wins.
pub fn rasterize(size: (u32, u32), tris: &[[Vec2; 3]]) -> Vec<Option<Texel>> {
	let (w, h) = size;
	let mut texels = vec![None; w as usize * h as usize];
	if w == 0 || h == 0 {
		return texels;
	}

	for (i, uvs) in tris.iter().enumerate() {
		let [p0, p1, p2] = uvs.map(|uv| vec2(uv.x * w as f32, (1.0 - uv.y) * h as f32));
		let area = edge(p0, p1, p2);
		if area == 0.0 || !area.is_finite() {
			continue;
		}

		let min = p0.min(p1).min(p2);
		let max = p0.max(p1).max(p2);
		let (Some((x0, x1)), Some((y0, y1))) = (texel_range(min.x, max.x, w), texel_range(min.y, max.y, h)) else {
			continue;
		};

		for y in y0..=y1 {
			for x in x0..=x1 {
				let c = vec2(x as f32 + 0.5, y as f32 + 0.5);
				let bary = vec3(edge(p1, p2, c), edge(p2, p0, c), edge(p0, p1, c)) / area;
				if bary.min_element() >= 0.0 {
					texels[(y * w + x) as usize] = Some(Texel { tri: i, bary });
				}
			}
		}
	}
	texels
}

/// Indices of the texels whose centers lie in [min, max], clamped to the image.
fn texel_range(min: f32, max: f32, len: u32) -> Option<(u32, u32)> {
	let first = (min - 0.5).ceil().max(0.0);
	let last = (max - 0.5).floor().min(len as f32 - 1.0);
	match first <= last {
		true => Some((first as u32, last as u32)),
		false => None,
	}
}

/// Twice the signed area of triangle abc.
#[inline]
fn edge(a: Vec2, b: Vec2, c: Vec2) -> f32 {
	(b - a).perp_dot(c - a)
}
