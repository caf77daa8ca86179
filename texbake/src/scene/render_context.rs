use super::internal::*;

/// Which light contributions a bake records.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PassFilter {
	pub direct: bool,
	pub indirect: bool,
	pub color: bool,
}

impl PassFilter {
	pub const ALL: Self = Self {
		direct: true,
		indirect: true,
		color: true,
	};

	/// Albedo only.
	pub const COLOR_ONLY: Self = Self {
		direct: false,
		indirect: false,
		color: true,
	};
}

/// Global render settings the backend reads during a bake.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderSettings {
	pub samples: u32,
	pub margin: u32,
	pub pass_filter: PassFilter,
}

impl Default for RenderSettings {
	fn default() -> Self {
		Self {
			samples: 128,
			margin: 16,
			pass_filter: PassFilter::ALL,
		}
	}
}

/// Editor interaction mode. Bakes run in object mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionMode {
	#[default]
	Object,
	Edit,
}

/// The host's shared state: objects, materials and images (each a namespace keyed by name),
/// plus the selection, active object and render settings that bake backends operate on.
///
/// Everything that reads or changes "the current selection" takes a `RenderContext` explicitly.
/// Use `scope` to have selection and render settings restored afterwards.
#[derive(Default)]
pub struct RenderContext {
	objects: Vec<MeshObject>,
	materials: Vec<Material>,
	images: Vec<TargetImage>,
	pub(super) selected: Set<ObjectId>,
	pub(super) active: Option<ObjectId>,
	pub(super) mode: InteractionMode,
	pub render: RenderSettings,
}

impl RenderContext {
	pub fn new() -> Self {
		Self::default()
	}

	// ================================================================================ objects

	/// Add an object, renaming it `name.001`, `name.002`,... if the name is taken.
	/// Backends find cages by name, so names must stay unique.
	pub fn add_object(&mut self, object: MeshObject) -> ObjectId {
		let mut object = object;
		if self.object_by_name(&object.name).is_some() {
			object.name = unique_name(&object.name, |name| self.object_by_name(name).is_some());
			debug!("object renamed to `{}`", object.name);
		}
		self.objects.push(object);
		ObjectId(self.objects.len() - 1)
	}

	pub fn object(&self, id: ObjectId) -> &MeshObject {
		&self.objects[id.0]
	}

	pub fn object_mut(&mut self, id: ObjectId) -> &mut MeshObject {
		&mut self.objects[id.0]
	}

	pub fn object_by_name(&self, name: &str) -> Option<ObjectId> {
		self.objects.iter().position(|obj| obj.name == name).map(ObjectId)
	}

	pub fn object_ids(&self) -> impl Iterator<Item = ObjectId> {
		(0..self.objects.len()).map(ObjectId)
	}

	// ================================================================================ materials

	/// Add a material, renaming it `name.001`, `name.002`,... if the name is taken
	/// (the host's append behavior).
	pub fn add_material(&mut self, material: Material) -> MaterialId {
		let mut material = material;
		if self.material_by_name(&material.name).is_some() {
			material.name = unique_name(&material.name, |name| self.material_by_name(name).is_some());
		}
		self.materials.push(material);
		MaterialId(self.materials.len() - 1)
	}

	pub fn material(&self, id: MaterialId) -> &Material {
		&self.materials[id.0]
	}

	pub fn material_mut(&mut self, id: MaterialId) -> &mut Material {
		&mut self.materials[id.0]
	}

	pub fn material_by_name(&self, name: &str) -> Option<MaterialId> {
		self.materials.iter().position(|mat| mat.name == name).map(MaterialId)
	}

	pub fn materials(&self) -> impl Iterator<Item = (MaterialId, &Material)> {
		self.materials.iter().enumerate().map(|(i, mat)| (MaterialId(i), mat))
	}

	// ================================================================================ images

	pub fn add_image(&mut self, image: TargetImage) -> ImageId {
		self.images.push(image);
		ImageId(self.images.len() - 1)
	}

	pub fn image(&self, id: ImageId) -> &TargetImage {
		&self.images[id.0]
	}

	pub fn image_mut(&mut self, id: ImageId) -> &mut TargetImage {
		&mut self.images[id.0]
	}

	pub fn image_by_name(&self, name: &str) -> Option<ImageId> {
		self.images.iter().position(|img| img.name == name).map(ImageId)
	}

	pub fn image_count(&self) -> usize {
		self.images.len()
	}

	// ================================================================================ selection

	pub fn select(&mut self, id: ObjectId) {
		self.selected.insert(id);
	}

	pub fn deselect_all(&mut self) {
		self.selected.clear();
	}

	/// Select exactly `ids`.
	pub fn select_only(&mut self, ids: &[ObjectId]) {
		self.selected.clear();
		self.selected.extend(ids.iter().copied());
	}

	/// Selected objects, in creation order.
	pub fn selected(&self) -> Vec<ObjectId> {
		let mut ids = self.selected.iter().copied().collect::<Vec<_>>();
		ids.sort();
		ids
	}

	pub fn set_active(&mut self, id: Option<ObjectId>) {
		self.active = id;
	}

	pub fn active(&self) -> Option<ObjectId> {
		self.active
	}

	pub fn mode(&self) -> InteractionMode {
		self.mode
	}

	pub fn set_mode(&mut self, mode: InteractionMode) {
		self.mode = mode
	}

	/// Leave edit mode: bakes read mesh data that is only up to date in object mode.
	pub fn ensure_object_mode(&mut self) {
		if self.mode != InteractionMode::Object {
			debug!("switching to object mode");
			self.mode = InteractionMode::Object;
		}
	}
}

/// First free `base.NNN` name, counting from 1.
fn unique_name(base: &str, taken: impl Fn(&str) -> bool) -> String {
	let mut i = 1;
	loop {
		let name = format!("{base}.{i:03}");
		if !taken(&name) {
			return name;
		}
		i += 1;
	}
}
