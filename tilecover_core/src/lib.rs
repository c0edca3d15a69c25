//! Tile pyramid primitives for `tilecover`: tile coordinates, identity keys,
//! zoom limits, Web Mercator projection and the error type shared by the workspace.

mod error;
pub use error::*;

pub mod math;

pub mod types;
pub use types::*;
