use super::internal::*;

/// Bake settings, read from "bake.toml".
///
/// Relative paths are relative to the directory of the settings file.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BakeSettings {
	pub request: BakeRequest,
	/// Where baked images are written.
	pub output_dir: PathBuf,
	pub format: OutputFormat,
	/// Material pack with the bake materials. Defaults to the bundled pack.
	pub materials: Option<PathBuf>,
	/// Directory of OBJ files to group into bake sets by name
	/// (`crate_low.obj`, `crate_high.obj`, ... form set `crate`).
	pub scene_dir: Option<PathBuf>,
	/// Bake sets listed file by file.
	pub sets: Vec<SetFiles>,
}

/// OBJ files of a bake set, per role.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SetFiles {
	pub name: String,
	pub low: Vec<PathBuf>,
	pub high: Vec<PathBuf>,
	pub cage: Vec<PathBuf>,
	pub float: Vec<PathBuf>,
}

impl Default for BakeSettings {
	fn default() -> Self {
		Self {
			request: default(),
			output_dir: PathBuf::from("baked"),
			format: default(),
			materials: None,
			scene_dir: None,
			sets: vec![],
		}
	}
}

impl BakeSettings {
	/// Load settings from a TOML file, resolving relative paths against its directory.
	pub fn load(path: &Path) -> Result<Self> {
		let settings: Self = load_toml(path)?;
		Ok(settings.relative_to(path.parent().unwrap_or(Path::new("."))))
	}

	fn relative_to(mut self, dir: &Path) -> Self {
		let join = |p: &mut PathBuf| {
			if p.is_relative() {
				*p = dir.join(&*p)
			}
		};
		join(&mut self.output_dir);
		self.materials.iter_mut().for_each(join);
		self.scene_dir.iter_mut().for_each(join);
		for set in &mut self.sets {
			set.low.iter_mut().chain(&mut set.high).chain(&mut set.cage).chain(&mut set.float).for_each(join);
		}
		self
	}

	pub fn material_pack(&self) -> Result<MaterialPack> {
		match &self.materials {
			Some(path) => MaterialPack::load(path),
			None => MaterialPack::bundled(),
		}
	}

	/// Load all objects into a new context, with the bake sets they form.
	/// Listed sets come first, then the sets found in `scene_dir`.
	pub fn load_scene(&self) -> Result<(RenderContext, Vec<BakeSet>)> {
		let mut ctx = RenderContext::new();
		let mut sets = vec![];

		for files in &self.sets {
			if files.name.is_empty() {
				return Err(anyhow!("bake set without name"));
			}
			let mut set = BakeSet::new(&files.name);
			for (role, paths) in [(Role::Low, &files.low), (Role::High, &files.high), (Role::Cage, &files.cage), (Role::Float, &files.float)] {
				for path in paths {
					let ids = add_objects(&mut ctx, path)?;
					set.objects_mut(role).extend(ids);
				}
			}
			sets.push(set);
		}

		if let Some(dir) = &self.scene_dir {
			let mut ids = vec![];
			for name in read_dir_names(dir)? {
				if name.extension().map(|ext| ext.eq_ignore_ascii_case("obj")) == Some(true) {
					ids.extend(add_objects(&mut ctx, &dir.join(name))?);
				}
			}
			let found = BakeSet::group_by_name(&ctx, &ids);
			info!("{}: {} objects in {} bake sets", dir.to_string_lossy(), ids.len(), found.len());
			sets.extend(found);
		}

		if sets.is_empty() {
			return Err(anyhow!("no bake sets: list [[sets]] or set scene_dir"));
		}
		Ok((ctx, sets))
	}
}

fn add_objects(ctx: &mut RenderContext, path: &Path) -> Result<Vec<ObjectId>> {
	Ok(load_obj(path)?.into_iter().map(|obj| ctx.add_object(obj)).collect())
}

pub fn load_toml<T: DeserializeOwned>(path: &Path) -> Result<T> {
	info!("load settings: {path:?}");
	let buf = read_to_string(path)?;
	toml::from_str(&buf).map_err(|e| anyhow!("load settings {path:?}: {e:#}"))
}
