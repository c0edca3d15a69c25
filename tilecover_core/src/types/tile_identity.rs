//! Reversible integer keys for tile coordinates.
//!
//! A [`TileIdentity`] packs the zoom level into the lowest 5 bits and the position
//! above them, using a row stride of twice the grid width of that level:
//!
//! ```text
//! id = ((2 * 2^level * y + x) * 32) + level
//! ```
//!
//! The stride leaves headroom beyond the grid; decoding only relies on `x` and `y`
//! being inside `[0, 2^level)`. At level 31 the key needs 68 bits, so it is stored as `u128`.

use super::TileCoord;
use std::fmt::{self, Debug};

const LEVEL_BITS: u32 = 5;
const LEVEL_MASK: u128 = (1 << LEVEL_BITS) - 1;

/// Integer identity of a [`TileCoord`], used as hash key in tile sets.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileIdentity(u128);

impl TileIdentity {
	/// Row stride at `level`: twice the number of tiles along one axis.
	fn stride(level: u8) -> u128 {
		2u128 << level
	}

	#[must_use]
	pub fn new(coord: &TileCoord) -> TileIdentity {
		let row = Self::stride(coord.level) * u128::from(coord.y) + u128::from(coord.x);
		TileIdentity((row << LEVEL_BITS) | u128::from(coord.level))
	}

	/// The raw key.
	#[must_use]
	pub fn value(&self) -> u128 {
		self.0
	}

	/// Decode the key back into its tile coordinate.
	#[must_use]
	pub fn to_coord(&self) -> TileCoord {
		let level = (self.0 & LEVEL_MASK) as u8;
		let stride = Self::stride(level);
		let row = self.0 >> LEVEL_BITS;
		TileCoord {
			level,
			x: (row % stride) as u32,
			y: ((row / stride) % stride) as u32,
		}
	}
}

impl From<TileCoord> for TileIdentity {
	fn from(coord: TileCoord) -> Self {
		TileIdentity::new(&coord)
	}
}

impl From<&TileCoord> for TileIdentity {
	fn from(coord: &TileCoord) -> Self {
		TileIdentity::new(coord)
	}
}

impl From<TileIdentity> for TileCoord {
	fn from(id: TileIdentity) -> Self {
		id.to_coord()
	}
}

impl Debug for TileIdentity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TileIdentity({} => {:?})", self.0, self.to_coord())
	}
}
