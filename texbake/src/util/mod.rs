mod internal;

mod fileutil;
mod misc;
mod reports;

pub use fileutil::*;
pub use misc::*;
pub use reports::*;
