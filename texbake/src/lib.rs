//! Multi-object texture baking.
//!
//! A bake request drives one bake backend call per low-poly object of every bake set,
//! while this crate takes care of the materials, target images and render state around those calls.
pub mod baking;
pub mod internal;
pub mod modes;
pub mod preview;
pub mod raytrace;
pub mod resources;
pub mod scene;
pub mod settings;
pub mod util;
