use super::internal::*;

pub fn exit_on_error(result: Result<()>) {
	match result {
		Err(e) => {
			eprintln!("ERROR: {e:#}");
			std::process::exit(1)
		}
		Ok(_) => (),
	}
}

/// Value clamped to the unit interval.
#[inline]
pub fn saturate(v: f32) -> f32 {
	v.clamp(0.0, 1.0)
}

/// Color from a vector, e.g. to encode a normal into an image.
#[inline]
pub fn rgba(v: Vec3) -> Rgba {
	[v.x, v.y, v.z, 1.0]
}
