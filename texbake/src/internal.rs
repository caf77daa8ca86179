//! Common imports.
pub use anyhow::anyhow;
pub use anyhow::Context;
pub use anyhow::Result;
pub use glam::vec2;
pub use glam::vec3;
pub use glam::Vec2;
pub use glam::Vec3;
pub use log::debug;
pub use log::info;
pub use log::warn;
pub use rand::Rng;
pub use rand_xoshiro::rand_core::SeedableRng;
pub use rand_xoshiro::Xoshiro256PlusPlus;
pub use rayon::prelude::*;
pub use serde::de::DeserializeOwned;
pub use serde::{Deserialize, Serialize};
pub use smallvec::smallvec;
pub use smallvec::SmallVec;

pub use crate::baking::*;
pub use crate::modes::*;
pub use crate::preview::*;
pub use crate::raytrace::*;
pub use crate::resources::*;
pub use crate::scene::*;
pub use crate::settings::*;
pub use crate::util::*;

pub use std::fmt;
pub use std::fs::File;
pub use std::io::BufReader;
pub use std::io::BufWriter;
pub use std::io::Read;
pub use std::io::Write;
pub use std::path::Path;
pub use std::path::PathBuf;
pub use std::str::FromStr;
pub use std::sync::Mutex;

pub type HashMap<K, V> = fnv::FnvHashMap<K, V>;
pub type Set<T> = fnv::FnvHashSet<T>;

/// Linear RGBA color.
pub type Rgba = [f32; 4];

/// Shorthand for Default::default()
pub fn default<T: Default>() -> T {
	T::default()
}
