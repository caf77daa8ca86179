//! Named materials and images the bakes need, found or created in a `RenderContext`.
mod internal;

mod image_manager;
mod material_pack;
mod material_resolver;

pub use image_manager::*;
pub use material_pack::*;
pub use material_resolver::*;
