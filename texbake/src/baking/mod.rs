//! Bake orchestration: from bake sets and a request to baked images.
mod internal;

mod assignment;
mod backend;
mod bake_request;
mod bake_set;
mod errors;
mod executor;
mod orchestrator;

pub use assignment::*;
pub use backend::*;
pub use bake_request::*;
pub use bake_set::*;
pub use errors::*;
pub use executor::*;
pub use orchestrator::*;
