use super::internal::*;
use image::imageops::FilterType;
use image::Rgba32FImage;

/// Handle to an image in a `RenderContext`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(pub(crate) usize);

/// File format images are stored in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
	#[default]
	Tga,
	Png,
}

impl OutputFormat {
	pub fn extension(self) -> &'static str {
		match self {
			OutputFormat::Tga => "tga",
			OutputFormat::Png => "png",
		}
	}

	pub fn image_format(self) -> image::ImageFormat {
		match self {
			OutputFormat::Tga => image::ImageFormat::Tga,
			OutputFormat::Png => image::ImageFormat::Png,
		}
	}
}

/// A named RGBA pixel buffer that bakes write into.
#[derive(Clone, Debug)]
pub struct TargetImage {
	pub name: String,
	pub pixels: Rgba32FImage,
	pub format: OutputFormat,
}

impl TargetImage {
	pub fn new(name: impl Into<String>, size: (u32, u32)) -> Self {
		Self {
			name: name.into(),
			pixels: Rgba32FImage::new(size.0, size.1),
			format: default(),
		}
	}

	pub fn size(&self) -> (u32, u32) {
		self.pixels.dimensions()
	}

	pub fn fill(&mut self, color: Rgba) {
		for p in self.pixels.pixels_mut() {
			*p = image::Rgba(color);
		}
	}

	/// Change the size. Content is not preserved.
	pub fn resize(&mut self, size: (u32, u32)) {
		self.pixels = Rgba32FImage::new(size.0, size.1);
	}

	/// Resample to `size` with a triangle (bilinear) filter.
	pub fn downsample(&mut self, size: (u32, u32)) {
		self.pixels = image::imageops::resize(&self.pixels, size.0, size.1, FilterType::Triangle);
	}

	pub fn at(&self, x: u32, y: u32) -> Rgba {
		self.pixels.get_pixel(x, y).0
	}

	pub fn set(&mut self, x: u32, y: u32, color: Rgba) {
		self.pixels.put_pixel(x, y, image::Rgba(color))
	}

	/// 8-bit sRGB-agnostic copy for saving (values clamped to 0..1).
	pub fn to_rgba8(&self) -> image::RgbaImage {
		image::RgbaImage::from_fn(self.pixels.width(), self.pixels.height(), |x, y| image::Rgba(self.at(x, y).map(|v| (saturate(v) * 255.0).round() as u8)))
	}

	/// Write to `dir/<name>.<ext>`.
	pub fn save(&self, dir: &Path) -> Result<PathBuf> {
		let path = dir.join(format!("{}.{}", self.name, self.format.extension()));
		log::info!("writing {}", path.to_string_lossy());
		self.to_rgba8()
			.save_with_format(&path, self.format.image_format())
			.map_err(|e| anyhow!("save {path:?}: {e}"))?;
		Ok(path)
	}
}
