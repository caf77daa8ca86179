use super::internal::*;

/// One backend bake: `sources` (high-poly or floater objects, possibly none) onto `low`.
#[derive(Clone, Debug)]
pub struct PairBake<'a> {
	pub mode: BakeMode,
	pub low: ObjectId,
	pub sources: &'a [ObjectId],
	pub cage: Option<ObjectId>,
	pub padding: u32,
	pub sampling_scale: u32,
	pub samples: u32,
	pub ray_distance: f32,
}

impl<'a> PairBake<'a> {
	pub fn new(mode: BakeMode, request: &BakeRequest, low: ObjectId, sources: &'a [ObjectId], cage: Option<ObjectId>) -> Self {
		Self {
			mode,
			low,
			sources,
			cage,
			padding: request.padding,
			sampling_scale: request.sampling_scale,
			samples: request.samples,
			ray_distance: request.ray_distance,
		}
	}

	/// Samples per pixel: cheap passes converge with one.
	pub fn samples(&self) -> u32 {
		match self.mode.pass_type().is_cheap() {
			true => 1,
			false => self.samples,
		}
	}

	/// Margin in working-size pixels.
	pub fn margin(&self) -> u32 {
		self.padding * self.sampling_scale
	}

	pub fn pass_filter(&self) -> PassFilter {
		match self.mode.pass_type() {
			PassType::Diffuse => PassFilter::COLOR_ONLY,
			_ => PassFilter::ALL,
		}
	}

	fn params(&self, ctx: &RenderContext) -> BakeParams {
		BakeParams {
			pass_type: self.mode.pass_type(),
			normal_space: self.mode.normal_space(),
			margin: self.margin(),
			cage_extrusion: match self.cage {
				Some(_) => 0.0,
				None => self.ray_distance,
			},
			selected_to_active: !self.sources.is_empty(),
			use_cage: self.cage.is_some(),
			cage_object: self.cage.map(|cage| ctx.object(cage).name.clone()),
		}
	}
}

/// Set up render settings and selection for one pair bake, then run the backend.
///
/// Changes selection and render settings without restoring them:
/// callers run this inside a `RenderContext::scope`.
pub fn run_pass(ctx: &mut RenderContext, backend: &mut dyn BakeBackend, set: &str, pass: &PairBake) -> Result<(), BakeError> {
	ctx.render.samples = pass.samples();
	ctx.render.margin = pass.margin();
	ctx.render.pass_filter = pass.pass_filter();

	let mut selection = pass.sources.to_vec();
	selection.push(pass.low);
	ctx.select_only(&selection);
	ctx.set_active(Some(pass.low));

	let params = pass.params(ctx);
	let object = ctx.object(pass.low).name.clone();
	info!("baking {} onto `{object}` ({} sources)", params.pass_type, pass.sources.len());

	backend.bake(ctx, &params).map_err(|cause| BakeError::BakeExecution {
		set: set.to_owned(),
		object,
		cause,
	})
}
