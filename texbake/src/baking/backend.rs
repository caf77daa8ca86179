use super::internal::*;
use thiserror::Error;

/// Parameters of one backend bake call.
/// The backend bakes the selected objects onto the active one, using the
/// render settings (samples, pass filter) of the `RenderContext`.
#[derive(Clone, Debug, PartialEq)]
pub struct BakeParams {
	pub pass_type: PassType,
	pub normal_space: NormalSpace,
	/// Pixels to extend the baked result beyond UV island borders.
	pub margin: u32,
	/// Distance to push the low-poly surface out along its normals to cast rays from.
	pub cage_extrusion: f32,
	/// Bake from the other selected objects onto the active object,
	/// instead of the active object onto itself.
	pub selected_to_active: bool,
	pub use_cage: bool,
	pub cage_object: Option<String>,
}

/// Failure reported by a bake backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct BackendError(String);

impl BackendError {
	pub fn new(message: impl Into<String>) -> Self {
		Self(message.into())
	}
}

/// The renderer that performs bakes.
///
/// A call writes into the image of the active `bake` node of the active object's materials.
/// It blocks until the bake is done.
pub trait BakeBackend {
	fn bake(&mut self, ctx: &mut RenderContext, params: &BakeParams) -> Result<(), BackendError>;
}

/// What a backend was asked to do in one call, with the render state at that time.
#[derive(Clone, Debug, PartialEq)]
pub struct BakeCall {
	pub params: BakeParams,
	pub samples: u32,
	pub pass_filter: PassFilter,
	pub active: Option<String>,
	pub selected: Vec<String>,
	pub target: Option<String>,
}

impl BakeCall {
	pub fn capture(ctx: &RenderContext, params: &BakeParams) -> Self {
		let active = ctx.active();
		Self {
			params: params.clone(),
			samples: ctx.render.samples,
			pass_filter: ctx.render.pass_filter,
			active: active.map(|id| ctx.object(id).name.clone()),
			selected: ctx.selected().into_iter().map(|id| ctx.object(id).name.clone()).collect(),
			target: active.and_then(|id| bake_target(ctx, id)).map(|img| ctx.image(img).name.clone()),
		}
	}
}

impl fmt::Display for BakeCall {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let p = &self.params;
		write!(
			f,
			"bake {} -> {} [{}] into {}: samples={} margin={} selected_to_active={} ",
			self.selected.iter().filter(|&s| Some(s) != self.active.as_ref()).cloned().collect::<Vec<_>>().join(", "),
			self.active.as_deref().unwrap_or("-"),
			p.pass_type,
			self.target.as_deref().unwrap_or("-"),
			self.samples,
			p.margin,
			p.selected_to_active,
		)?;
		match &p.cage_object {
			Some(cage) => write!(f, "cage={cage}"),
			None => write!(f, "extrusion={}", p.cage_extrusion),
		}
	}
}

/// The image the next bake of `object` writes to:
/// the active node's image of its first material that has one.
pub fn bake_target(ctx: &RenderContext, object: ObjectId) -> Option<ImageId> {
	ctx.object(object).materials().find_map(|mat| ctx.material(mat).bake_target())
}

/// Backend that records its calls instead of rendering.
/// Used for dry runs and tests.
#[derive(Default)]
pub struct RecordingBackend {
	pub calls: Vec<BakeCall>,
	fail_on: Option<String>,
}

impl RecordingBackend {
	pub fn new() -> Self {
		Self::default()
	}

	/// A backend that fails when baking onto the named object.
	pub fn failing_on(object: &str) -> Self {
		Self {
			calls: vec![],
			fail_on: Some(object.to_owned()),
		}
	}
}

impl BakeBackend for RecordingBackend {
	fn bake(&mut self, ctx: &mut RenderContext, params: &BakeParams) -> Result<(), BackendError> {
		let call = BakeCall::capture(ctx, params);
		if call.active.is_some() && call.active == self.fail_on {
			return Err(BackendError::new("backend failure"));
		}
		self.calls.push(call);
		Ok(())
	}
}
