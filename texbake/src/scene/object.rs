use super::internal::*;

/// Handle to an object in a `RenderContext`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub(crate) usize);

/// A mesh object with material slots.
/// Empty slots (`None`) are allowed, as in the host.
#[derive(Clone, Debug)]
pub struct MeshObject {
	pub name: String,
	pub mesh: Mesh,
	pub material_slots: Vec<Option<MaterialId>>,
}

impl MeshObject {
	pub fn new(name: impl Into<String>, mesh: Mesh) -> Self {
		Self {
			name: name.into(),
			mesh,
			material_slots: vec![],
		}
	}

	/// Materials in occupied slots, in slot order.
	pub fn materials(&self) -> impl Iterator<Item = MaterialId> + '_ {
		self.material_slots.iter().flatten().copied()
	}

	/// Material used by a face (by its slot index), if that slot is occupied.
	pub fn face_material(&self, face: usize) -> Option<MaterialId> {
		let slot = self.mesh.faces[face].material as usize;
		self.material_slots.get(slot).copied().flatten().or_else(|| self.materials().next())
	}
}
