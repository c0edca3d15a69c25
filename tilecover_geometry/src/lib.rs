//! Geometry types, GeoJSON input/output and the tile cover engine of `tilecover`.
//!
//! # Examples
//!
//! ```
//! use tilecover_core::{TileCoord, ZoomLimits};
//! use tilecover_geometry::{Geometry, cover};
//!
//! let point = Geometry::new_point([13.404954, 52.520008]);
//! let tiles = cover(&point, &ZoomLimits::single(10).unwrap()).unwrap();
//! assert_eq!(tiles, vec![TileCoord::new(10, 550, 335).unwrap()]);
//! ```

pub mod cover;
mod geo;
pub mod geojson;
mod outline;

pub use cover::{TileSet, cover, cover_leaves, merge_tiles};
pub use self::geo::*;
pub use outline::*;
