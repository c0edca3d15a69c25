#![allow(clippy::module_inception)]

mod geometry;
mod types;

pub use geometry::*;
pub use types::*;
