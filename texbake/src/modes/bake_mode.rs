use super::internal::*;

/// Kind of render pass the backend performs for a bake.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PassType {
	Normal,
	Emit,
	Diffuse,
	Ao,
}

impl PassType {
	pub const ALL: [PassType; 4] = [PassType::Normal, PassType::Emit, PassType::Diffuse, PassType::Ao];

	/// Non-stochastic passes: one sample gives the converged result.
	pub fn is_cheap(self) -> bool {
		matches!(self, PassType::Emit | PassType::Diffuse)
	}

	pub fn as_str(self) -> &'static str {
		match self {
			PassType::Normal => "NORMAL",
			PassType::Emit => "EMIT",
			PassType::Diffuse => "DIFFUSE",
			PassType::Ao => "AO",
		}
	}
}

impl fmt::Display for PassType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NormalSpace {
	Tangent,
	Object,
}

/// A bake mode, e.g. `ao` or `normal_tangent`.
///
/// The set of modes is closed: every property is a pure function of the variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BakeMode {
	NormalTangent,
	NormalObject,
	Cavity,
	Dust,
	Wear,
	Gradient,
	IdElement,
	IdMaterial,
	Diffuse,
	Ao,
}

impl BakeMode {
	pub const ALL: [BakeMode; 10] = [
		BakeMode::NormalTangent,
		BakeMode::NormalObject,
		BakeMode::Cavity,
		BakeMode::Dust,
		BakeMode::Wear,
		BakeMode::Gradient,
		BakeMode::IdElement,
		BakeMode::IdMaterial,
		BakeMode::Diffuse,
		BakeMode::Ao,
	];

	const DEFAULT_FILL: Rgba = [0.23, 0.23, 0.23, 1.0];
	const BLACK: Rgba = [0.0, 0.0, 0.0, 1.0];

	/// The mode registered under `key`.
	/// Fails with `UnknownMode` listing all valid keys.
	pub fn lookup(key: &str) -> Result<Self, BakeError> {
		Self::ALL.into_iter().find(|mode| mode.key() == key).ok_or_else(|| BakeError::UnknownMode {
			key: key.to_owned(),
			valid: Self::keys(),
		})
	}

	pub fn keys() -> Vec<&'static str> {
		Self::ALL.iter().map(|mode| mode.key()).collect()
	}

	pub fn key(self) -> &'static str {
		use BakeMode::*;
		match self {
			NormalTangent => "normal_tangent",
			NormalObject => "normal_object",
			Cavity => "cavity",
			Dust => "dust",
			Wear => "wear",
			Gradient => "gradient",
			IdElement => "id_element",
			IdMaterial => "id_material",
			Diffuse => "diffuse",
			Ao => "ao",
		}
	}

	pub fn pass_type(self) -> PassType {
		use BakeMode::*;
		match self {
			NormalTangent | NormalObject => PassType::Normal,
			Cavity | Dust | Wear | Gradient | IdElement | IdMaterial => PassType::Emit,
			Diffuse => PassType::Diffuse,
			Ao => PassType::Ao,
		}
	}

	/// Name of the bundled material the source geometry needs, if any.
	pub fn required_material(self) -> Option<&'static str> {
		use BakeMode::*;
		match self {
			Cavity => Some("bake_cavity"),
			Dust => Some("bake_dust"),
			Wear => Some("bake_wear"),
			Gradient => Some("bake_gradient"),
			IdElement | IdMaterial => Some("bake_vertex_color"),
			NormalTangent | NormalObject | Diffuse | Ao => None,
		}
	}

	pub fn normal_space(self) -> NormalSpace {
		match self {
			BakeMode::NormalObject => NormalSpace::Object,
			_ => NormalSpace::Tangent,
		}
	}

	/// Color a fresh target image is cleared to.
	pub fn fill_color(self) -> Rgba {
		use BakeMode::*;
		match self {
			NormalTangent | NormalObject => [0.5, 0.5, 1.0, 1.0],
			Cavity => [0.5, 0.5, 0.5, 1.0],
			Dust | Wear | Gradient | IdElement | IdMaterial => Self::BLACK,
			Diffuse => Self::DEFAULT_FILL,
			Ao => [1.0, 1.0, 1.0, 1.0],
		}
	}

	/// Procedural vertex colors the source geometry needs before baking, if any.
	pub fn vertex_colors(self) -> Option<VertexColors> {
		use BakeMode::*;
		match self {
			Cavity | Dust | Wear => Some(VertexColors::Dirt),
			IdElement => Some(VertexColors::IdElement),
			IdMaterial => Some(VertexColors::IdMaterial),
			NormalTangent | NormalObject | Gradient | Diffuse | Ao => None,
		}
	}
}

impl fmt::Display for BakeMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.key())
	}
}

impl FromStr for BakeMode {
	type Err = BakeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::lookup(s)
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn keys_round_trip() {
		for mode in BakeMode::ALL {
			assert_eq!(BakeMode::lookup(mode.key()).unwrap(), mode);
			assert_eq!(mode.to_string().parse::<BakeMode>().unwrap(), mode);
		}
	}

	#[test]
	fn keys_are_unique() {
		let keys = BakeMode::keys();
		let unique = keys.iter().collect::<Set<_>>();
		assert_eq!(unique.len(), keys.len());
	}

	#[test]
	fn cheap_passes() {
		assert!(PassType::Emit.is_cheap());
		assert!(PassType::Diffuse.is_cheap());
		assert!(!PassType::Ao.is_cheap());
		assert!(!PassType::Normal.is_cheap());
	}

	#[test]
	fn material_and_vertex_colors_go_together() {
		// modes that paint vertex colors read them through a material
		for mode in BakeMode::ALL {
			if mode.vertex_colors().is_some() {
				assert!(mode.required_material().is_some(), "{mode}");
				assert_eq!(mode.pass_type(), PassType::Emit, "{mode}");
			}
		}
	}

	#[test]
	fn unknown_mode_lists_valid_keys() {
		let err = BakeMode::lookup("bake_single").unwrap_err();
		let msg = err.to_string();
		for key in BakeMode::keys() {
			assert!(msg.contains(key), "{msg}");
		}
		match err {
			BakeError::UnknownMode { key, valid } => {
				assert_eq!(key, "bake_single");
				assert_eq!(valid, BakeMode::keys());
			}
			other => panic!("unexpected error: {other}"),
		}
	}

	proptest! {
		#[test]
		fn lookup_valid_keys(i in 0..BakeMode::ALL.len()) {
			let mode = BakeMode::lookup(BakeMode::ALL[i].key()).unwrap();
			prop_assert!(PassType::ALL.contains(&mode.pass_type()));
		}

		#[test]
		fn lookup_invalid_keys(key in "[a-z_]{0,16}") {
			prop_assume!(!BakeMode::keys().contains(&key.as_str()));
			match BakeMode::lookup(&key) {
				Err(BakeError::UnknownMode { valid, .. }) => prop_assert_eq!(valid, BakeMode::keys()),
				other => prop_assert!(false, "expected UnknownMode, got {:?}", other),
			}
		}
	}
}
