use super::internal::*;

/// What to bake and how. Fixed for the duration of a bake.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BakeRequest {
	/// Bake mode key, e.g. `ao`.
	pub mode: String,
	/// Size of the final images, in pixels.
	pub output_size: (u32, u32),
	/// Bake all sets into the image of the first set.
	pub bake_single_image: bool,
	/// Supersampling: bake at this multiple of the output size, then downsample.
	pub sampling_scale: u32,
	pub samples: u32,
	pub ray_distance: f32,
	/// Margin around UV islands, in output pixels.
	pub padding: u32,
}

impl Default for BakeRequest {
	fn default() -> Self {
		Self {
			mode: BakeMode::NormalTangent.key().into(),
			output_size: (1024, 1024),
			bake_single_image: false,
			sampling_scale: 1,
			samples: 32,
			ray_distance: 0.01,
			padding: 4,
		}
	}
}

impl BakeRequest {
	pub fn new(mode: &str, output_size: (u32, u32)) -> Self {
		Self {
			mode: mode.into(),
			output_size,
			..default()
		}
	}

	/// Size images are baked at, before downsampling.
	pub fn working_size(&self) -> (u32, u32) {
		let (w, h) = self.output_size;
		(w * self.sampling_scale, h * self.sampling_scale)
	}

	/// Check value ranges.
	pub fn check(&self) -> Result<(), BakeError> {
		let invalid = |msg: String| Err(BakeError::InvalidRequest(msg));
		let (w, h) = self.output_size;
		if w == 0 || h == 0 {
			return invalid(format!("output size must be at least 1x1, got {w}x{h}"));
		}
		if self.sampling_scale == 0 {
			return invalid("sampling scale must be at least 1".into());
		}
		if w.checked_mul(self.sampling_scale).is_none() || h.checked_mul(self.sampling_scale).is_none() {
			return invalid(format!("{w}x{h} at sampling scale {} is too large", self.sampling_scale));
		}
		if self.padding.checked_mul(self.sampling_scale).is_none() {
			return invalid(format!("padding {} at sampling scale {} is too large", self.padding, self.sampling_scale));
		}
		if self.samples == 0 {
			return invalid("samples must be at least 1".into());
		}
		if !(self.ray_distance >= 0.0 && self.ray_distance.is_finite()) {
			return invalid(format!("ray distance must be a finite number >= 0, got {}", self.ray_distance));
		}
		Ok(())
	}
}
