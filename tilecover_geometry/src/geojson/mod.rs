//! GeoJSON input and output.
//!
//! [`parse_geojson`] turns a GeoJSON document into the crate's [`crate::Geometry`] values,
//! the `tiles_to_*` functions encode cover results for output.

mod parse;
mod write;

pub use parse::*;
pub use write::*;
