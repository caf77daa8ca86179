use super::internal::*;
use std::collections::BTreeMap;

/// A material definition in a material pack.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct MaterialDef {
	#[serde(default = "MaterialDef::default_base_color")]
	pub base_color: Rgba,
	#[serde(default)]
	pub emission: Emission,
}

impl MaterialDef {
	fn default_base_color() -> Rgba {
		[0.8, 0.8, 0.8, 1.0]
	}

	fn to_material(&self, name: &str) -> Material {
		Material::new(name).with_base_color(self.base_color).with_emission(self.emission)
	}
}

#[derive(Deserialize)]
struct PackFile {
	materials: BTreeMap<String, MaterialDef>,
}

/// A library of materials that can be imported into a scene.
/// (The asset pack bundled with the crate, or a user-supplied TOML file.)
pub struct MaterialPack {
	source: String,
	defs: BTreeMap<String, MaterialDef>,
}

impl MaterialPack {
	const BUNDLED: &'static str = include_str!("../../assets/materials.toml");

	/// The materials that ship with texbake.
	pub fn bundled() -> Result<Self> {
		Self::parse("<bundled>", Self::BUNDLED)
	}

	/// Load a material pack from a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		Self::parse(&path.to_string_lossy(), &read_to_string(path)?)
	}

	fn parse(source: &str, text: &str) -> Result<Self> {
		let file: PackFile = toml::from_str(text).map_err(|e| anyhow!("load material pack {source}: {e}"))?;
		if file.materials.is_empty() {
			return Err(anyhow!("no materials found in `{source}`"));
		}
		Ok(Self {
			source: source.to_owned(),
			defs: file.materials,
		})
	}

	pub fn source(&self) -> &str {
		&self.source
	}

	/// Material names, sorted.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.defs.keys().map(String::as_str)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.defs.contains_key(name)
	}

	/// Append material `name` to the scene.
	/// Like the host, this does not check for an existing material:
	/// appending a name that is taken yields a renamed copy (`name.001`).
	pub fn import(&self, ctx: &mut RenderContext, name: &str) -> Result<MaterialId, BakeError> {
		let def = self.defs.get(name).ok_or_else(|| BakeError::AssetImport {
			name: name.to_owned(),
			pack: self.source.clone(),
		})?;
		info!("importing material `{name}` from {}", self.source);
		Ok(ctx.add_material(def.to_material(name)))
	}
}
