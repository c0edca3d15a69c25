use super::TileSet;
use itertools::Itertools;
use log::debug;
use tilecover_core::{TileCoord, ZoomLimits};

/// Replaces every complete group of four sibling tiles by their parent, level
/// by level from `max_zoom` down to `min_zoom`.
///
/// `leaves` are expected at `limits.max_zoom()`. The returned tiles cover the
/// same area and are sorted by level, then y, then x.
///
/// # Examples
///
/// ```
/// use tilecover_core::{TileCoord, ZoomLimits};
/// use tilecover_geometry::{TileSet, merge_tiles};
///
/// let leaves = TileSet::from_iter(TileCoord::new(1, 0, 0).unwrap().children());
/// let tiles = merge_tiles(leaves, &ZoomLimits::new(0, 2).unwrap());
/// assert_eq!(tiles, vec![TileCoord::new(1, 0, 0).unwrap()]);
/// ```
#[must_use]
pub fn merge_tiles(leaves: TileSet, limits: &ZoomLimits) -> Vec<TileCoord> {
	let mut working = leaves.into_sorted_vec();
	let mut result = TileSet::new();

	for level in (limits.min_zoom() + 1..=limits.max_zoom()).rev() {
		if working.is_empty() {
			break;
		}
		let counts = working.iter().filter_map(TileCoord::parent).counts();
		let (parents, kept): (Vec<TileCoord>, Vec<TileCoord>) = working
			.into_iter()
			.partition(|coord| coord.parent().is_some_and(|parent| counts[&parent] == 4));
		debug!(
			"merge level {level}: {} tiles kept, {} parents from {} tiles",
			kept.len(),
			parents.len() / 4,
			parents.len()
		);
		result.extend(kept);
		working = parents.iter().filter_map(TileCoord::parent).unique().collect();
	}

	result.extend(working);
	result.into_sorted_vec()
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	fn tc(level: u8, x: u32, y: u32) -> TileCoord {
		TileCoord::new(level, x, y).unwrap()
	}

	fn limits(min: u8, max: u8) -> ZoomLimits {
		ZoomLimits::new(min, max).unwrap()
	}

	#[test]
	fn complete_group_becomes_parent() {
		let leaves = TileSet::from_iter(tc(4, 6, 8).children());
		assert_eq!(merge_tiles(leaves, &limits(3, 5)), vec![tc(4, 6, 8)]);
	}

	#[test]
	fn incomplete_group_stays() {
		let [a, b, c, _] = tc(4, 6, 8).children();
		let leaves = TileSet::from_iter([a, b, c]);
		assert_eq!(merge_tiles(leaves, &limits(0, 5)), vec![a, b, c]);
	}

	#[test]
	fn merges_repeatedly_down_to_min_zoom() {
		let mut leaves = TileSet::new();
		for y in 0..8 {
			for x in 0..8 {
				leaves.insert(&tc(3, x, y));
			}
		}
		assert_eq!(merge_tiles(leaves.clone(), &limits(0, 3)), vec![tc(0, 0, 0)]);
		assert_eq!(
			merge_tiles(leaves, &limits(1, 3)),
			vec![tc(1, 0, 0), tc(1, 1, 0), tc(1, 0, 1), tc(1, 1, 1)]
		);
	}

	#[test]
	fn never_coarser_than_min_zoom() {
		let leaves = TileSet::from_iter(tc(9, 100, 100).children());
		let tiles = merge_tiles(leaves, &limits(10, 10));
		assert_eq!(tiles.len(), 4);
		assert!(tiles.iter().all(|t| t.level == 10));
	}

	#[test]
	fn mixed_levels_preserve_area() {
		let mut leaves = TileSet::from_iter(tc(2, 0, 0).children().into_iter().flat_map(|c| c.children()));
		leaves.insert(&tc(4, 15, 15));
		leaves.extend(tc(3, 7, 0).children());
		let tiles = merge_tiles(leaves, &limits(1, 4));
		assert_eq!(tiles, vec![tc(2, 0, 0), tc(3, 7, 0), tc(4, 15, 15)]);
		let area: u64 = tiles.iter().map(|t| 4u64.pow(u32::from(4 - t.level))).sum();
		assert_eq!(area, 16 + 4 + 1);
	}

	#[test]
	fn empty_input() {
		assert!(merge_tiles(TileSet::new(), &limits(2, 8)).is_empty());
	}
}
