use super::internal::*;

/// Base color of surfaces without a material.
const DEFAULT_COLOR: Rgba = [0.8, 0.8, 0.8, 1.0];

/// Direction towards the light of the preview diffuse pass.
const SUN: Vec3 = vec3(0.267_261_24, 0.534_522_5, 0.801_783_7);

/// Constant indirect light of the preview diffuse pass.
const AMBIENT: f32 = 0.25;

/// Maximum distance at which geometry occludes ambient light.
pub const AO_DISTANCE: f32 = 1.0;

/// Offset of secondary rays from the surface, against self-intersection.
pub const RAY_EPSILON: f32 = 1e-4;

/// Computes the baked value of a pass for one surface point.
pub struct Shader<'a> {
	pub ctx: &'a RenderContext,
	pub pass: PassType,
	pub normal_space: NormalSpace,
	pub samples: u32,
	pub pass_filter: PassFilter,
	pub occluders: &'a Sources<'a>,
}

impl<'a> Shader<'a> {
	/// Value of the pass at `src` (the point that was hit),
	/// baked into the texel at `dst` (a point on the active object, with tangent frame `frame`).
	pub fn shade(&self, dst: &SurfacePoint, frame: &TangentFrame, src: &SurfacePoint, rng: &mut Xoshiro256PlusPlus) -> Rgba {
		match self.pass {
			PassType::Normal => self.normal(dst, frame, src),
			PassType::Emit => self.emit(src),
			PassType::Diffuse => self.diffuse(src),
			PassType::Ao => self.ao(src, rng),
		}
	}

	fn normal(&self, dst: &SurfacePoint, frame: &TangentFrame, src: &SurfacePoint) -> Rgba {
		let n = match self.normal_space {
			NormalSpace::Object => src.normal,
			NormalSpace::Tangent => vec3(src.normal.dot(frame.tangent), src.normal.dot(frame.bitangent), src.normal.dot(dst.normal)),
		};
		rgba(n * 0.5 + Vec3::splat(0.5))
	}

	fn emit(&self, src: &SurfacePoint) -> Rgba {
		const BLACK: Rgba = [0.0, 0.0, 0.0, 1.0];
		let Some(material) = self.material(src) else { return BLACK };
		match material.emission {
			Emission::None => BLACK,
			Emission::BaseColor => material.base_color,
			Emission::VertexColor => src.color.unwrap_or(BLACK),
			Emission::HeightGradient => rgba(Vec3::splat(src.height)),
		}
	}

	fn diffuse(&self, src: &SurfacePoint) -> Rgba {
		let filter = self.pass_filter;
		let color = match filter.color {
			true => self.material(src).map(|m| m.base_color).unwrap_or(DEFAULT_COLOR),
			false => [1.0; 4],
		};
		let light = match (filter.direct, filter.indirect) {
			(false, false) => 1.0,
			(direct, indirect) => (direct as u8 as f32) * src.normal.dot(SUN).max(0.0) + (indirect as u8 as f32) * AMBIENT,
		};
		[color[0] * light, color[1] * light, color[2] * light, color[3]]
	}

	/// Fraction of cosine-weighted rays that escape.
	fn ao(&self, src: &SurfacePoint, rng: &mut Xoshiro256PlusPlus) -> Rgba {
		let start = src.pos + src.normal * RAY_EPSILON;
		let samples = self.samples.max(1);
		let open = (0..samples)
			.filter(|_| {
				let dir = cosine_hemisphere(vec2(rng.gen(), rng.gen()), src.normal);
				!self.occluders.occluded(&Ray::new(start, dir), AO_DISTANCE)
			})
			.count();
		rgba(Vec3::splat(open as f32 / samples as f32))
	}

	fn material(&self, src: &SurfacePoint) -> Option<&'a Material> {
		let ctx = self.ctx;
		ctx.object(src.object).face_material(src.face).map(|id| ctx.material(id))
	}
}

/// Tangent and bitangent of a UV-mapped triangle: the directions of increasing U and V,
/// made orthogonal to the surface normal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TangentFrame {
	pub tangent: Vec3,
	pub bitangent: Vec3,
}

impl TangentFrame {
	pub fn new(pos: [Vec3; 3], uv: [Vec2; 3], normal: Vec3) -> Self {
		let (e1, e2) = (pos[1] - pos[0], pos[2] - pos[0]);
		let (d1, d2) = (uv[1] - uv[0], uv[2] - uv[0]);
		let r = d1.perp_dot(d2);

		let (tangent, bitangent) = match r.abs() > 1e-12 {
			true => ((e1 * d2.y - e2 * d1.y) / r, (e2 * d1.x - e1 * d2.x) / r),
			false => normal.any_orthonormal_pair(),
		};

		// Gram-Schmidt, keeping the handedness of the UV map.
		let t = (tangent - normal * normal.dot(tangent)).try_normalize().unwrap_or_else(|| normal.any_orthonormal_pair().0);
		let b = normal.cross(t);
		let b = if b.dot(bitangent) < 0.0 { -b } else { b };
		Self { tangent: t, bitangent: b }
	}
}
