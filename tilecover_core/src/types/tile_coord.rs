//! Three-dimensional tile coordinates in a Web Mercator pyramid
//!
//! This module provides the [`TileCoord`] type for representing tile coordinates in a
//! Web Mercator tile pyramid. It includes methods for:
//! - Creating and validating tile coordinates
//! - Converting between tile and geographic coordinates
//! - Moving between parent and child levels
//!
//! # Examples
//!
//! ```
//! use tilecover_core::TileCoord;
//!
//! let coord = TileCoord::new(5, 6, 7).unwrap();
//! assert_eq!(coord.level, 5);
//! assert_eq!(coord.x, 6);
//! assert_eq!(coord.y, 7);
//!
//! let parent = coord.parent().unwrap();
//! assert_eq!(parent, TileCoord::new(4, 3, 3).unwrap());
//! ```

use crate::math::{MAX_LEVEL, project, unproject};
use anyhow::{Result, ensure};
use std::{
	cmp::Ordering,
	fmt::{self, Debug},
};

/// A 3D tile coordinate in a Web Mercator tile pyramid, with zoom level, x, and y indices.
#[derive(Eq, PartialEq, Clone, Hash, Copy)]
pub struct TileCoord {
	/// The zoom level of the tile.
	pub level: u8,
	/// The x index of the tile.
	pub x: u32,
	/// The y index of the tile.
	pub y: u32,
}

impl TileCoord {
	/// Create a new `TileCoord` at the given zoom `level` and tile indices `x`, `y`.
	///
	/// # Errors
	/// Returns an error if `level` > 31 or `x`/`y` are outside the grid of that level.
	pub fn new(level: u8, x: u32, y: u32) -> Result<TileCoord> {
		ensure!(level <= MAX_LEVEL, "level ({level}) must be <= {MAX_LEVEL}");
		let max = 1u64 << level;
		ensure!(u64::from(x) < max, "x ({x}) out of bounds for level {level}");
		ensure!(u64::from(y) < max, "y ({y}) out of bounds for level {level}");
		Ok(TileCoord { level, x, y })
	}

	/// Create a `TileCoord` from signed grid indices, clamping them into `[0, 2^level - 1]`.
	///
	/// Grid walks step over the edge of the world when a geometry touches the
	/// antimeridian or the Mercator limits; those tiles fold back onto the border.
	#[must_use]
	pub fn new_clamped(level: u8, x: i64, y: i64) -> TileCoord {
		debug_assert!(level <= MAX_LEVEL, "level ({level}) must be <= {MAX_LEVEL}");
		let max = (1i64 << level) - 1;
		TileCoord {
			level,
			x: x.clamp(0, max) as u32,
			y: y.clamp(0, max) as u32,
		}
	}

	/// Create the `TileCoord` containing longitude `lon` and latitude `lat` at zoom `level`.
	///
	/// # Examples
	///
	/// ```
	/// use tilecover_core::TileCoord;
	///
	/// // Berlin coordinates at zoom 10
	/// let coord = TileCoord::from_geo(13.404954, 52.520008, 10);
	/// assert_eq!(coord, TileCoord::new(10, 550, 335).unwrap());
	/// ```
	#[must_use]
	pub fn from_geo(lon: f64, lat: f64, level: u8) -> TileCoord {
		let [x, y] = project(lon, lat, level);
		TileCoord::new_clamped(level, x.floor() as i64, y.floor() as i64)
	}

	/// Return the geographic bounding box of this tile as `[west, south, east, north]`.
	#[must_use]
	pub fn to_geo_bbox(&self) -> [f64; 4] {
		let [west, north] = unproject(f64::from(self.x), f64::from(self.y), self.level);
		let [east, south] = unproject(f64::from(self.x) + 1.0, f64::from(self.y) + 1.0, self.level);
		[west, south, east, north]
	}

	/// Tile triple in the common `[x, y, z]` order.
	#[must_use]
	pub fn as_xyz(&self) -> [u32; 3] {
		[self.x, self.y, u32::from(self.level)]
	}

	/// Return the tile one level up that contains this tile, or `None` at level 0.
	///
	/// # Examples
	///
	/// ```
	/// use tilecover_core::TileCoord;
	///
	/// let coord = TileCoord::new(5, 16, 21).unwrap();
	/// assert_eq!(coord.parent(), Some(TileCoord::new(4, 8, 10).unwrap()));
	/// assert_eq!(TileCoord::new(0, 0, 0).unwrap().parent(), None);
	/// ```
	#[must_use]
	pub fn parent(&self) -> Option<TileCoord> {
		(self.level > 0).then(|| TileCoord {
			level: self.level - 1,
			x: self.x >> 1,
			y: self.y >> 1,
		})
	}

	/// Return the four tiles one level down, in the order NW, NE, SW, SE.
	///
	/// # Panics
	/// Panics if the tile is already at the highest level.
	#[must_use]
	pub fn children(&self) -> [TileCoord; 4] {
		assert!(self.level < MAX_LEVEL, "level ({}) has no children", self.level);
		let level = self.level + 1;
		let (x, y) = (self.x << 1, self.y << 1);
		[
			TileCoord { level, x, y },
			TileCoord { level, x: x + 1, y },
			TileCoord { level, x, y: y + 1 },
			TileCoord { level, x: x + 1, y: y + 1 },
		]
	}

	/// Change this coordinate to a coarser zoom `level`, dividing x/y accordingly.
	///
	/// # Panics
	/// Panics if `level` is finer than the current level.
	#[must_use]
	pub fn ancestor_at(&self, level: u8) -> TileCoord {
		assert!(level <= self.level, "level ({level}) must be <= {}", self.level);
		let shift = self.level - level;
		TileCoord {
			level,
			x: self.x >> shift,
			y: self.y >> shift,
		}
	}
}

/// Custom `Debug` format as `TileCoord(z, [x, y])` for readability.
impl Debug for TileCoord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_fmt(format_args!("TileCoord({}, [{}, {}])", &self.level, &self.x, &self.y))
	}
}

/// Lexicographic ordering: first by zoom `level`, then `y`, then `x`.
impl Ord for TileCoord {
	fn cmp(&self, other: &Self) -> Ordering {
		self
			.level
			.cmp(&other.level)
			.then(self.y.cmp(&other.y))
			.then(self.x.cmp(&other.x))
	}
}

impl PartialOrd for TileCoord {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}
