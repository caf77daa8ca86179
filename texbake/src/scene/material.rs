use super::internal::*;

/// Handle to a material in a `RenderContext`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialId(pub(crate) usize);

/// What a material emits, as seen by an EMIT bake.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Emission {
	#[default]
	None,
	BaseColor,
	VertexColor,
	HeightGradient,
}

/// Image texture node inside a material's node tree.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageNode {
	pub name: String,
	pub image: Option<ImageId>,
	pub selected: bool,
}

/// A shading material.
/// Only the properties bakes need: base color, emission and the image nodes bakes write to.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
	pub name: String,
	pub base_color: Rgba,
	pub emission: Emission,
	nodes: Vec<ImageNode>,
	active_node: Option<usize>,
}

impl Material {
	/// Name of the image node bakes write to.
	pub const BAKE_NODE: &'static str = "bake";

	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			base_color: [0.8, 0.8, 0.8, 1.0],
			emission: Emission::None,
			nodes: vec![],
			active_node: None,
		}
	}

	pub fn with_base_color(mut self, color: Rgba) -> Self {
		self.base_color = color;
		self
	}

	pub fn with_emission(mut self, emission: Emission) -> Self {
		self.emission = emission;
		self
	}

	pub fn nodes(&self) -> &[ImageNode] {
		&self.nodes
	}

	pub fn add_node(&mut self, node: ImageNode) -> usize {
		self.nodes.push(node);
		self.nodes.len() - 1
	}

	pub fn active_node(&self) -> Option<&ImageNode> {
		self.active_node.and_then(|i| self.nodes.get(i))
	}

	/// Point the `bake` node at `image` (adding the node if needed)
	/// and make it the only selected node and the active node.
	pub fn bind_bake_image(&mut self, image: ImageId) {
		let i = match self.nodes.iter().position(|node| node.name == Self::BAKE_NODE) {
			Some(i) => i,
			None => self.add_node(ImageNode {
				name: Self::BAKE_NODE.into(),
				image: None,
				selected: false,
			}),
		};
		for node in &mut self.nodes {
			node.selected = false;
		}
		let node = &mut self.nodes[i];
		node.image = Some(image);
		node.selected = true;
		self.active_node = Some(i);
	}

	/// The image a bake writes to: the active node's image.
	pub fn bake_target(&self) -> Option<ImageId> {
		self.active_node().and_then(|node| node.image)
	}
}
