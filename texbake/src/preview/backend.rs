use super::internal::*;

/// CPU bake backend.
///
/// Bakes into the texels covered by the active object's UV map.
/// Other texels keep their contents, except for the margin grown around UV islands.
/// Only the ambient occlusion pass takes more than one sample per texel.
#[derive(Clone, Debug, Default)]
pub struct PreviewBackend {
	/// Seeds the random numbers of sampled passes, for reproducible bakes.
	pub seed: u64,
}

impl PreviewBackend {
	pub fn new(seed: u64) -> Self {
		Self { seed }
	}

	fn render(&self, ctx: &RenderContext, active: ObjectId, size: (u32, u32), params: &BakeParams) -> Result<Vec<Option<Rgba>>, BackendError> {
		let obj = ctx.object(active);
		let uv_layer = obj.mesh.active_uv_layer().ok_or_else(|| BackendError::new(format!("`{}` has no UV map", obj.name)))?;

		let low = MeshSurface::new(ctx, active);
		let uvs = low.tris.iter().map(|t| obj.mesh.tri_uvs(uv_layer, t)).collect::<Vec<_>>();
		let coverage = rasterize(size, &uvs);

		let source_ids = match params.selected_to_active {
			true => ctx.selected().into_iter().filter(|&id| id != active).collect(),
			false => vec![active],
		};
		let sources = Sources::new(ctx, &source_ids);
		let cage = self.cage(ctx, active, params)?;

		let shader = Shader {
			ctx,
			pass: params.pass_type,
			normal_space: params.normal_space,
			samples: ctx.render.samples,
			pass_filter: ctx.render.pass_filter,
			occluders: &sources,
		};

		let mut texels = coverage
			.par_iter()
			.enumerate()
			.map(|(i, texel)| {
				let texel = (*texel)?;
				let dst = low.point(texel.tri, texel.bary);
				let frame = TangentFrame::new(low.positions(texel.tri), uvs[texel.tri], dst.normal);
				let src = match params.selected_to_active {
					true => sources.hit(&project(&low, texel, &dst, cage, params.cage_extrusion))?,
					false => dst,
				};
				let mut rng = Xoshiro256PlusPlus::seed_from_u64(self.seed ^ (i as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
				Some(shader.shade(&dst, &frame, &src, &mut rng))
			})
			.collect::<Vec<_>>();

		dilate(&mut texels, size, params.margin);
		Ok(texels)
	}

	/// The cage mesh, if the bake uses one.
	/// It must have the same vertices as the active object, in the same order.
	fn cage<'a>(&self, ctx: &'a RenderContext, active: ObjectId, params: &BakeParams) -> Result<Option<&'a Mesh>, BackendError> {
		if !params.use_cage {
			return Ok(None);
		}
		let name = params.cage_object.as_deref().ok_or_else(|| BackendError::new("cage enabled but no cage object given"))?;
		let cage = ctx.object_by_name(name).ok_or_else(|| BackendError::new(format!("cage object `{name}` not found")))?;
		let (cage, low) = (&ctx.object(cage).mesh, &ctx.object(active).mesh);
		if cage.positions.len() != low.positions.len() {
			return Err(BackendError::new(format!(
				"cage `{name}` has {} vertices, `{}` has {}",
				cage.positions.len(),
				ctx.object(active).name,
				low.positions.len()
			)));
		}
		Ok(Some(cage))
	}
}

/// Ray from the cage (or the surface pushed out by `extrusion`) through the destination point.
fn project(low: &MeshSurface, texel: Texel, dst: &SurfacePoint, cage: Option<&Mesh>, extrusion: f32) -> Ray {
	let inward = Ray::new(dst.pos + dst.normal * extrusion, -dst.normal);
	let Some(cage) = cage else { return inward };

	let verts = low.mesh.tri_verts(&low.tris[texel.tri]);
	let [a, b, c] = verts.map(|v| cage.positions[v as usize]);
	let start = a * texel.bary.x + b * texel.bary.y + c * texel.bary.z;
	match (dst.pos - start).try_normalize() {
		Some(dir) => Ray::new(start, dir),
		None => inward,
	}
}

impl BakeBackend for PreviewBackend {
	fn bake(&mut self, ctx: &mut RenderContext, params: &BakeParams) -> Result<(), BackendError> {
		let active = ctx.active().ok_or_else(|| BackendError::new("no active object"))?;
		let image = bake_target(ctx, active).ok_or_else(|| BackendError::new(format!("`{}` has no bake target image", ctx.object(active).name)))?;
		let size = ctx.image(image).size();

		info!("preview bake {} into `{}` {}x{}", params.pass_type, ctx.image(image).name, size.0, size.1);
		let texels = self.render(ctx, active, size, params)?;

		let img = ctx.image_mut(image);
		let w = size.0 as usize;
		for (i, color) in texels.into_iter().enumerate() {
			if let Some(color) = color {
				img.set((i % w) as u32, (i / w) as u32, color);
			}
		}
		Ok(())
	}
}
