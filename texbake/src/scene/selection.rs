use super::internal::*;
use std::ops::{Deref, DerefMut};

/// Snapshot of the state a bake temporarily changes:
/// selection, active object, interaction mode and render settings.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionState {
	selected: Vec<ObjectId>,
	active: Option<ObjectId>,
	mode: InteractionMode,
	render: RenderSettings,
}

impl RenderContext {
	pub fn selection_state(&self) -> SelectionState {
		SelectionState {
			selected: self.selected(),
			active: self.active,
			mode: self.mode,
			render: self.render.clone(),
		}
	}

	pub fn restore(&mut self, state: &SelectionState) {
		self.select_only(&state.selected);
		self.active = state.active;
		self.mode = state.mode;
		self.render = state.render.clone();
	}

	/// Borrow the context for changes to selection and render settings
	/// that are undone when the returned scope is dropped, on every exit path.
	pub fn scope(&mut self) -> RenderScope<'_> {
		let saved = self.selection_state();
		RenderScope { ctx: self, saved }
	}
}

/// Restores a `RenderContext`'s selection and render settings on drop.
/// Dereferences to the context.
pub struct RenderScope<'a> {
	ctx: &'a mut RenderContext,
	saved: SelectionState,
}

impl Deref for RenderScope<'_> {
	type Target = RenderContext;

	fn deref(&self) -> &RenderContext {
		self.ctx
	}
}

impl DerefMut for RenderScope<'_> {
	fn deref_mut(&mut self) -> &mut RenderContext {
		self.ctx
	}
}

impl Drop for RenderScope<'_> {
	fn drop(&mut self) {
		debug!("restoring selection ({} objects)", self.saved.selected.len());
		self.ctx.restore(&self.saved)
	}
}
