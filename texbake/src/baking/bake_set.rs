use super::internal::*;

/// A group of objects baked together into one image:
/// low-poly destinations, high-poly sources, optional cages and floaters.
///
/// Cages pair with low-poly objects by position: `objects_cage[i]` is the cage of `objects_low[i]`.
/// Keeping both lists in the same order is the caller's responsibility.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BakeSet {
	pub name: String,
	pub objects_low: Vec<ObjectId>,
	pub objects_high: Vec<ObjectId>,
	pub objects_cage: Vec<ObjectId>,
	pub objects_float: Vec<ObjectId>,
}

/// Role of an object in a bake set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
	Low,
	High,
	Cage,
	Float,
}

impl Role {
	const SUFFIXES: [(&'static str, Role); 4] = [("_low", Role::Low), ("_high", Role::High), ("_cage", Role::Cage), ("_float", Role::Float)];

	/// Split an object name into set name and role by its suffix:
	/// `crate_high` => (`crate`, High). Names without a role suffix are low-poly.
	pub fn from_name(name: &str) -> (&str, Role) {
		let lower = name.to_ascii_lowercase();
		for (suffix, role) in Self::SUFFIXES {
			if lower.ends_with(suffix) && name.len() > suffix.len() {
				return (&name[..name.len() - suffix.len()], role);
			}
		}
		(name, Role::Low)
	}
}

impl BakeSet {
	pub fn new(name: impl Into<String>) -> Self {
		Self { name: name.into(), ..default() }
	}

	pub fn with(mut self, role: Role, objects: &[ObjectId]) -> Self {
		self.objects_mut(role).extend_from_slice(objects);
		self
	}

	pub fn objects_mut(&mut self, role: Role) -> &mut Vec<ObjectId> {
		match role {
			Role::Low => &mut self.objects_low,
			Role::High => &mut self.objects_high,
			Role::Cage => &mut self.objects_cage,
			Role::Float => &mut self.objects_float,
		}
	}

	/// Does the set bake from other geometry (high-poly or floaters)
	/// rather than low-poly objects onto themselves?
	pub fn has_sources(&self) -> bool {
		!self.objects_high.is_empty() || !self.objects_float.is_empty()
	}

	/// Cage of the i-th low-poly object, if the set has cages.
	pub fn cage_for(&self, i: usize) -> Option<ObjectId> {
		self.objects_cage.get(i).copied()
	}

	/// Check, in order: there is a low-poly object, every low-poly object has UVs,
	/// cages (if any) match the low-poly objects one to one.
	pub fn validate(&self, ctx: &RenderContext) -> Result<(), BakeError> {
		if self.objects_low.is_empty() {
			return Err(BakeError::validation(ValidationKind::NoLowPoly, &self.name));
		}

		if let Some(&low) = self.objects_low.iter().find(|&&low| !ctx.object(low).mesh.has_uv_layer()) {
			return Err(BakeError::Validation {
				kind: ValidationKind::NoUvMap,
				set: self.name.clone(),
				object: Some(ctx.object(low).name.clone()),
			});
		}

		if !self.objects_cage.is_empty() && self.objects_cage.len() != self.objects_low.len() {
			return Err(BakeError::validation(ValidationKind::CageMismatch, &self.name));
		}

		Ok(())
	}

	/// Group objects into sets by name: `crate_low`, `crate_high` and `crate_cage` form set `crate`.
	/// Sets are ordered by first appearance, objects keep their order within a role.
	pub fn group_by_name(ctx: &RenderContext, objects: &[ObjectId]) -> Vec<BakeSet> {
		let mut sets: Vec<BakeSet> = vec![];
		for &id in objects {
			let (base, role) = Role::from_name(&ctx.object(id).name);
			let i = match sets.iter().position(|set| set.name == base) {
				Some(i) => i,
				None => {
					sets.push(BakeSet::new(base));
					sets.len() - 1
				}
			};
			sets[i].objects_mut(role).push(id);
		}
		sets
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn scene(names: &[&str]) -> (RenderContext, Vec<ObjectId>) {
		let mut ctx = RenderContext::new();
		let ids = names.iter().map(|n| ctx.add_object(MeshObject::new(*n, unit_quad(0.0)))).collect();
		(ctx, ids)
	}

	#[test]
	fn roles_from_names() {
		assert_eq!(Role::from_name("crate_high"), ("crate", Role::High));
		assert_eq!(Role::from_name("crate_Cage"), ("crate", Role::Cage));
		assert_eq!(Role::from_name("crate"), ("crate", Role::Low));
		assert_eq!(Role::from_name("_low"), ("_low", Role::Low));
	}

	#[test]
	fn group_by_name() {
		let (ctx, ids) = scene(&["crate_low", "barrel_low", "crate_high", "crate_float", "barrel_high", "crate_cage"]);
		let sets = BakeSet::group_by_name(&ctx, &ids);
		assert_eq!(sets.len(), 2);
		assert_eq!(sets[0].name, "crate");
		assert_eq!(sets[0].objects_low, vec![ids[0]]);
		assert_eq!(sets[0].objects_high, vec![ids[2]]);
		assert_eq!(sets[0].objects_float, vec![ids[3]]);
		assert_eq!(sets[0].objects_cage, vec![ids[5]]);
		assert_eq!(sets[1].name, "barrel");
		assert!(sets[1].has_sources());
	}

	#[test]
	fn validation_order() {
		let (mut ctx, ids) = scene(&["a_low", "b_low", "cage"]);
		ctx.object_mut(ids[1]).mesh.uv_layers.clear();

		let set = BakeSet::new("s").with(Role::Cage, &[ids[2]]);
		assert_eq!(set.validate(&ctx).unwrap_err().validation_kind(), Some(ValidationKind::NoLowPoly));

		// missing UVs are reported before the cage mismatch
		let set = BakeSet::new("s").with(Role::Low, &[ids[0], ids[1]]).with(Role::Cage, &[ids[2]]);
		let err = set.validate(&ctx).unwrap_err();
		assert_eq!(err.validation_kind(), Some(ValidationKind::NoUvMap));
		assert!(err.to_string().contains("b_low"));

		let set = BakeSet::new("s").with(Role::Low, &[ids[0]]).with(Role::Cage, &[ids[2], ids[2]]);
		assert_eq!(set.validate(&ctx).unwrap_err().validation_kind(), Some(ValidationKind::CageMismatch));

		let set = BakeSet::new("s").with(Role::Low, &[ids[0]]).with(Role::Cage, &[ids[2]]);
		set.validate(&ctx).unwrap();
		assert_eq!(set.cage_for(0), Some(ids[2]));
	}
}
