//! The host scene: meshes, materials, images and the shared selection/render state.
mod internal;

mod load;
mod material;
mod mesh;
mod object;
mod render_context;
mod selection;
mod target_image;

pub use load::*;
pub use material::*;
pub use mesh::*;
pub use object::*;
pub use render_context::*;
pub use selection::*;
pub use target_image::*;
