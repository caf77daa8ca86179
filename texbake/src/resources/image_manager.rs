use super::internal::*;

/// Identifies the target image of a bake: one per (set, mode).
/// In single-image mode every set uses the key of the first set.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageKey {
	set: String,
	mode: BakeMode,
}

impl ImageKey {
	pub fn new(set: &str, mode: BakeMode) -> Self {
		Self { set: set.to_owned(), mode }
	}

	/// Image name, also the output file's base name, e.g. `crate_ao`.
	pub fn name(&self) -> String {
		format!("{}_{}", self.set, self.mode.key())
	}
}

/// Creates, reuses and finalizes the images bakes write into.
#[derive(Clone, Debug, Default)]
pub struct ImageManager {
	pub format: OutputFormat,
}

impl ImageManager {
	pub fn new(format: OutputFormat) -> Self {
		Self { format }
	}

	/// Get the image for `key`, creating it or resizing it to `size` as needed.
	/// With `clear`, fill it with `fill` so the bake starts fresh,
	/// otherwise keep the content so a bake can add to earlier results.
	pub fn prepare(&self, ctx: &mut RenderContext, key: &ImageKey, size: (u32, u32), fill: Rgba, clear: bool) -> ImageId {
		let name = key.name();
		let id = match ctx.image_by_name(&name) {
			Some(id) => {
				let img = ctx.image_mut(id);
				if img.size() != size {
					debug!("resizing image `{name}` {:?} => {:?}", img.size(), size);
					img.resize(size);
				}
				id
			}
			None => {
				debug!("creating image `{name}` {}x{}", size.0, size.1);
				ctx.add_image(TargetImage::new(&name, size))
			}
		};

		let img = ctx.image_mut(id);
		if clear {
			img.fill(fill);
		}
		img.format = self.format;
		id
	}

	/// Downsample a supersampled image to its output size.
	/// Call once, after the last bake into the image.
	pub fn finalize(&self, ctx: &mut RenderContext, image: ImageId, size: (u32, u32)) {
		let img = ctx.image_mut(image);
		if img.size() != size {
			debug!("downsampling image `{}` {:?} => {:?}", img.name, img.size(), size);
			img.downsample(size);
		}
	}

	/// Make `image` the target of the next bake of `object`:
	/// every material of the object gets an active `bake` image node pointing at it.
	/// Fails if no slot of the object holds a material.
	pub fn bind_as_bake_target(&self, ctx: &mut RenderContext, object: ObjectId, image: ImageId) -> Result<(), BakeError> {
		let obj = ctx.object(object);
		let materials = obj.materials().collect::<Vec<_>>();
		if materials.is_empty() {
			return Err(BakeError::NoMaterialSlot { object: obj.name.clone() });
		}
		for mat in materials {
			ctx.material_mut(mat).bind_bake_image(image);
		}
		Ok(())
	}

	/// Write the image to `dir/<name>.<ext>`.
	pub fn save(&self, ctx: &RenderContext, image: ImageId, dir: &Path) -> Result<PathBuf> {
		mkdir_all(dir)?;
		ctx.image(image).save(dir)
	}
}
