use super::internal::*;

/// Result of a successful bake.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BakeOutcome {
	/// Finalized images, in the order they were finished.
	pub images: Vec<ImageId>,
	/// Number of backend calls.
	pub passes: usize,
}

/// Bakes bake sets: validates each set, attaches materials and vertex colors,
/// prepares the target image and runs one backend pass per low-poly object
/// (two if the set has floaters).
pub struct Orchestrator<'p> {
	resolver: MaterialResolver<'p>,
	pub images: ImageManager,
	pub reports: Reports,
}

impl<'p> Orchestrator<'p> {
	pub fn new(pack: &'p MaterialPack, images: ImageManager) -> Self {
		Self {
			resolver: MaterialResolver::new(pack),
			images,
			reports: Reports::new(),
		}
	}

	/// Bake all `sets` in order. The first error aborts the remaining sets
	/// and is also added to the reports.
	///
	/// Selection, active object, interaction mode and render settings
	/// are the same afterwards as before, whether the bake succeeded or not.
	/// Materials, vertex colors and images created along the way stay.
	pub fn bake(&self, ctx: &mut RenderContext, backend: &mut dyn BakeBackend, request: &BakeRequest, sets: &[BakeSet]) -> Result<BakeOutcome, BakeError> {
		let result = self.bake_sets(ctx, backend, request, sets);
		match &result {
			Ok(outcome) => self.reports.info(format!("baked {} sets, {} passes", sets.len(), outcome.passes)),
			Err(e) => self.reports.error(e),
		}
		result
	}

	fn bake_sets(&self, ctx: &mut RenderContext, backend: &mut dyn BakeBackend, request: &BakeRequest, sets: &[BakeSet]) -> Result<BakeOutcome, BakeError> {
		let mode = BakeMode::lookup(&request.mode)?;
		request.check()?;
		check_unique_names(sets)?;

		let mut ctx = ctx.scope();
		ctx.ensure_object_mode();
		ctx.deselect_all();

		info!("bake {} sets @{mode}", sets.len());

		let mut outcome = BakeOutcome::default();
		for (s, set) in sets.iter().enumerate() {
			// In single-image mode, later sets add to the first set's image.
			let (key, clear) = match request.bake_single_image {
				true => (ImageKey::new(&sets[0].name, mode), s == 0),
				false => (ImageKey::new(&set.name, mode), true),
			};
			let (image, passes) = self.bake_set(&mut ctx, backend, request, mode, set, &key, clear)?;
			outcome.passes += passes;

			if !request.bake_single_image || s + 1 == sets.len() {
				self.images.finalize(&mut ctx, image, request.output_size);
				outcome.images.push(image);
			}
			debug!("set `{}` done", set.name);
		}
		Ok(outcome)
	}

	/// Bake one set into the image for `key`. Returns the image and the number of passes.
	#[allow(clippy::too_many_arguments)]
	fn bake_set(&self, ctx: &mut RenderContext, backend: &mut dyn BakeBackend, request: &BakeRequest, mode: BakeMode, set: &BakeSet, key: &ImageKey, clear: bool) -> Result<(ImageId, usize), BakeError> {
		set.validate(ctx)?;
		info!("bake set `{}`: {} low, {} high, {} cage, {} float", set.name, set.objects_low.len(), set.objects_high.len(), set.objects_cage.len(), set.objects_float.len());

		let loaded = self.resolver.resolve(ctx, mode.required_material().unwrap_or_default())?;
		let placeholder = self.resolver.resolve_placeholder(ctx);
		assign_for_set(ctx, set, loaded, placeholder, mode);

		let image = self.images.prepare(ctx, key, request.working_size(), mode.fill_color(), clear);

		let mut passes = 0;
		for (i, &low) in set.objects_low.iter().enumerate() {
			self.images.bind_as_bake_target(ctx, low, image)?;
			let cage = set.cage_for(i);

			run_pass(ctx, backend, &set.name, &PairBake::new(mode, request, low, &set.objects_high, cage))?;
			passes += 1;

			if !set.objects_float.is_empty() {
				run_pass(ctx, backend, &set.name, &PairBake::new(mode, request, low, &set.objects_float, cage))?;
				passes += 1;
			}
		}
		Ok((image, passes))
	}
}

/// Sets name their images, so two sets with one name would bake into the same image.
fn check_unique_names(sets: &[BakeSet]) -> Result<(), BakeError> {
	let mut seen = Set::default();
	match sets.iter().find(|set| !seen.insert(set.name.as_str())) {
		Some(set) => Err(BakeError::validation(ValidationKind::DuplicateSetName, &set.name)),
		None => Ok(()),
	}
}
