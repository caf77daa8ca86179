mod internal;

mod bounding_box;
mod bvh_tree;
mod hit_record;
mod intersect;
mod ray;
mod sampling;
mod triangle;

pub use bounding_box::*;
pub use bvh_tree::*;
pub use hit_record::*;
pub use intersect::*;
pub use ray::*;
pub use sampling::*;
pub use triangle::*;
