//! Bake modes: what each kind of bake renders and how.
mod internal;

mod bake_mode;
mod vertex_colors;

pub use bake_mode::*;
pub use vertex_colors::*;
