use super::internal::*;

/// Attach materials (and vertex colors, for modes that need them) to the objects of a set.
///
/// Low-poly self-bake (no high-poly or floater objects): the low-poly objects are both source
/// and destination. They get the vertex colors and `[loaded, placeholder]`.
///
/// High-to-low bake: low-poly objects are only destinations and get just the placeholder,
/// which hosts the bake target node. High-poly and floater objects are the sources:
/// they get the vertex colors and the loaded material.
pub fn assign_for_set(ctx: &mut RenderContext, set: &BakeSet, loaded: Option<MaterialId>, placeholder: MaterialId, mode: BakeMode) {
	if !set.has_sources() {
		for &low in &set.objects_low {
			apply_vertex_colors(ctx, low, mode);
			assign_preferred(ctx, low, &[loaded, Some(placeholder)]);
		}
	} else {
		for &low in &set.objects_low {
			assign_preferred(ctx, low, &[Some(placeholder)]);
		}
		for &source in set.objects_high.iter().chain(&set.objects_float) {
			apply_vertex_colors(ctx, source, mode);
			assign_preferred(ctx, source, &[loaded]);
		}
	}
}

/// Give an object without materials the first available preferred material:
/// in a new slot, or in its first slot if all its slots are empty.
/// Objects that already have materials are left alone.
pub fn assign_preferred(ctx: &mut RenderContext, object: ObjectId, preferred: &[Option<MaterialId>]) {
	let Some(mat) = preferred.iter().flatten().next().copied() else {
		return;
	};
	let obj = ctx.object_mut(object);
	if obj.materials().next().is_some() {
		return;
	}
	debug!("assigning material to `{}`", obj.name);
	match obj.material_slots.first_mut() {
		Some(slot) => *slot = Some(mat),
		None => obj.material_slots.push(Some(mat)),
	}
}

fn apply_vertex_colors(ctx: &mut RenderContext, object: ObjectId, mode: BakeMode) {
	if let Some(colors) = mode.vertex_colors() {
		let obj = ctx.object_mut(object);
		debug!("{colors:?} vertex colors on `{}`", obj.name);
		colors.apply(&mut obj.mesh);
	}
}
