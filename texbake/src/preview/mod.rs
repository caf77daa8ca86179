//! CPU bake backend: rasterizes the active object's UV map and ray traces the sources.
//! Good enough to preview bakes and to run them without a renderer.
mod internal;

mod backend;
mod dilate;
mod raster;
mod shading;
mod surface;

pub use backend::*;
pub use dilate::*;
pub use raster::*;
pub use shading::*;
pub use surface::*;
