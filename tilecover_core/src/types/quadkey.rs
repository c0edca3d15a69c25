//! Quadkey encoding of tile coordinates.
//!
//! A quadkey has one digit per level, from the coarsest to the finest; each digit
//! is `x_bit + 2 * y_bit` of the tile at that level. Level 0 is the empty string.

use super::TileCoord;
use crate::math::MAX_LEVEL;
use anyhow::{Result, bail, ensure};

impl TileCoord {
	/// Encode this tile as quadkey.
	///
	/// # Examples
	///
	/// ```
	/// use tilecover_core::TileCoord;
	///
	/// assert_eq!(TileCoord::new(3, 3, 5).unwrap().to_quadkey(), "213");
	/// assert_eq!(TileCoord::new(0, 0, 0).unwrap().to_quadkey(), "");
	/// ```
	#[must_use]
	pub fn to_quadkey(&self) -> String {
		(1..=self.level)
			.rev()
			.map(|level| {
				let mask = 1u32 << (level - 1);
				let mut digit = b'0';
				if self.x & mask != 0 {
					digit += 1;
				}
				if self.y & mask != 0 {
					digit += 2;
				}
				char::from(digit)
			})
			.collect()
	}

	/// Decode a quadkey into a tile.
	///
	/// # Errors
	/// Returns an error for characters other than `0`-`3` or keys longer than 31 digits.
	pub fn from_quadkey(quadkey: &str) -> Result<TileCoord> {
		ensure!(
			quadkey.len() <= usize::from(MAX_LEVEL),
			"quadkey '{quadkey}' is longer than {MAX_LEVEL} digits"
		);
		let mut x = 0u32;
		let mut y = 0u32;
		for c in quadkey.chars() {
			x <<= 1;
			y <<= 1;
			match c {
				'0' => {}
				'1' => x |= 1,
				'2' => y |= 1,
				'3' => {
					x |= 1;
					y |= 1;
				}
				_ => bail!("invalid character '{c}' in quadkey '{quadkey}'"),
			}
		}
		TileCoord::new(quadkey.len() as u8, x, y)
	}
}
