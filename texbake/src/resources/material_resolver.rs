use super::internal::*;

/// Finds materials by name in a scene, importing them from a `MaterialPack` when missing.
pub struct MaterialResolver<'p> {
	pack: &'p MaterialPack,
}

impl<'p> MaterialResolver<'p> {
	/// Name of the empty material that hosts the bake target node.
	pub const PLACEHOLDER: &'static str = "bake_target";

	pub fn new(pack: &'p MaterialPack) -> Self {
		Self { pack }
	}

	/// The material called `name`, imported if not yet present.
	/// An empty name means no material is required: `None`.
	///
	/// Resolving the same name again never imports a second copy.
	pub fn resolve(&self, ctx: &mut RenderContext, name: &str) -> Result<Option<MaterialId>, BakeError> {
		if name.is_empty() {
			return Ok(None);
		}

		if let Some(id) = Self::find(ctx, name) {
			debug!("material `{name}` already loaded");
			return Ok(Some(id));
		}

		self.pack.import(ctx, name)?;
		Ok(Self::find(ctx, name))
	}

	/// The singleton placeholder material, created on first use.
	pub fn resolve_placeholder(&self, ctx: &mut RenderContext) -> MaterialId {
		match ctx.material_by_name(Self::PLACEHOLDER) {
			Some(id) => id,
			None => ctx.add_material(Material::new(Self::PLACEHOLDER)),
		}
	}

	/// Canonical material for `name`: the exact name if present,
	/// else the lexicographically last renamed copy (`name.001`, `name.002`, ...).
	pub fn find(ctx: &RenderContext, name: &str) -> Option<MaterialId> {
		if let Some(id) = ctx.material_by_name(name) {
			return Some(id);
		}
		ctx.materials()
			.filter(|(_, mat)| is_copy_of(&mat.name, name))
			.max_by(|(_, a), (_, b)| a.name.cmp(&b.name))
			.map(|(id, _)| id)
	}
}

// "name.001" is a copy of "name".
fn is_copy_of(candidate: &str, name: &str) -> bool {
	match candidate.strip_prefix(name).and_then(|s| s.strip_prefix('.')) {
		Some(suffix) => !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()),
		None => false,
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn resolve_is_idempotent() {
		let pack = MaterialPack::bundled().unwrap();
		let resolver = MaterialResolver::new(&pack);
		let mut ctx = RenderContext::new();

		let a = resolver.resolve(&mut ctx, "bake_cavity").unwrap();
		let b = resolver.resolve(&mut ctx, "bake_cavity").unwrap();
		assert!(a.is_some());
		assert_eq!(a, b);
		assert_eq!(ctx.materials().count(), 1);
	}

	#[test]
	fn empty_name_needs_no_material() {
		let pack = MaterialPack::bundled().unwrap();
		let mut ctx = RenderContext::new();
		assert_eq!(MaterialResolver::new(&pack).resolve(&mut ctx, "").unwrap(), None);
		assert_eq!(ctx.materials().count(), 0);
	}

	#[test]
	fn picks_last_copy_when_only_copies_exist() {
		let mut ctx = RenderContext::new();
		ctx.add_material(Material::new("bake_wear.002"));
		let last = ctx.add_material(Material::new("bake_wear.010"));
		ctx.add_material(Material::new("bake_wear.001"));
		ctx.add_material(Material::new("bake_wear_old"));
		assert_eq!(MaterialResolver::find(&ctx, "bake_wear"), Some(last));
	}

	#[test]
	fn exact_name_wins() {
		let mut ctx = RenderContext::new();
		let exact = ctx.add_material(Material::new("bake_wear"));
		ctx.add_material(Material::new("bake_wear"));
		assert_eq!(MaterialResolver::find(&ctx, "bake_wear"), Some(exact));
	}

	#[test]
	fn placeholder_singleton() {
		let pack = MaterialPack::bundled().unwrap();
		let resolver = MaterialResolver::new(&pack);
		let mut ctx = RenderContext::new();
		let a = resolver.resolve_placeholder(&mut ctx);
		let b = resolver.resolve_placeholder(&mut ctx);
		assert_eq!(a, b);
		assert_eq!(ctx.material(a).name, MaterialResolver::PLACEHOLDER);
	}

	#[test]
	fn copies() {
		assert!(is_copy_of("bake_dust.001", "bake_dust"));
		assert!(!is_copy_of("bake_dust", "bake_dust"));
		assert!(!is_copy_of("bake_dust.", "bake_dust"));
		assert!(!is_copy_of("bake_dusty.001", "bake_dust"));
	}
}
