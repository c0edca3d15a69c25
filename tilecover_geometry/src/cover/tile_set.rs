use std::collections::HashSet;
use tilecover_core::{TileCoord, TileIdentity};

/// Set of tiles produced by one cover computation, keyed by [`TileIdentity`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TileSet {
	ids: HashSet<TileIdentity>,
}

impl TileSet {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a tile, returning `true` if it was not present yet.
	pub fn insert(&mut self, coord: &TileCoord) -> bool {
		self.ids.insert(TileIdentity::new(coord))
	}

	#[must_use]
	pub fn contains(&self, coord: &TileCoord) -> bool {
		self.ids.contains(&TileIdentity::new(coord))
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.ids.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.ids.is_empty()
	}

	/// Iterates the tiles in arbitrary order.
	pub fn iter(&self) -> impl Iterator<Item = TileCoord> + '_ {
		self.ids.iter().map(TileIdentity::to_coord)
	}

	/// Moves all tiles of `other` into this set.
	pub fn union(&mut self, other: TileSet) {
		if self.ids.len() < other.ids.len() {
			let smaller = std::mem::replace(&mut self.ids, other.ids);
			self.ids.extend(smaller);
		} else {
			self.ids.extend(other.ids);
		}
	}

	/// All tiles, sorted by level, then y, then x.
	#[must_use]
	pub fn into_sorted_vec(self) -> Vec<TileCoord> {
		let mut coords: Vec<TileCoord> = self.ids.into_iter().map(TileCoord::from).collect();
		coords.sort_unstable();
		coords
	}
}

impl FromIterator<TileCoord> for TileSet {
	fn from_iter<I: IntoIterator<Item = TileCoord>>(iter: I) -> Self {
		TileSet {
			ids: iter.into_iter().map(TileIdentity::from).collect(),
		}
	}
}

impl Extend<TileCoord> for TileSet {
	fn extend<I: IntoIterator<Item = TileCoord>>(&mut self, iter: I) {
		self.ids.extend(iter.into_iter().map(TileIdentity::from));
	}
}
