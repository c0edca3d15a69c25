//! Scanline fill of polygons in tile space.
//!
//! The boundary of every ring is rasterized with [`LineRasterizer`], which also
//! records where the boundary changes row. Records that are not turning points
//! of the boundary are crossings of a horizontal scanline through that row.
//! Sorted by column, every pair of crossings in a row encloses interior tiles.

use super::{
	TileSet,
	line::LineRasterizer,
	validate::{RingCrossing, find_crossing},
};
use crate::{CompositeGeometryTrait, PolygonGeometry, RingGeometry};
use itertools::Itertools;
use log::trace;
use tilecover_core::{CoverError, TileCoord, math::unproject};

/// Tiles inside or on the boundary of `polygon` at `level`.
///
/// All rings take part in an even-odd fill, so holes stay empty. Degenerate
/// rings are skipped. Each ring is only checked for crossings with itself; a
/// hole crossing the outer ring is filled even-odd without an error.
pub(crate) fn cover_polygon(polygon: &PolygonGeometry, level: u8) -> Result<TileSet, CoverError> {
	let mut rings = Vec::with_capacity(polygon.as_vec().len());
	for ring in polygon.normalized_rings() {
		let points = ring.as_vec().iter().map(|c| c.to_tile_space(level)).collect::<Vec<_>>();
		if let Some(crossing) = find_crossing(&points) {
			return Err(invalid_ring(&ring, crossing, level));
		}
		rings.push(points);
	}
	Ok(rasterize_rings(&rings, level))
}

fn invalid_ring(ring: &RingGeometry, crossing: RingCrossing, level: u8) -> CoverError {
	let edge = |i: usize| [ring.0[i].as_array(), ring.0[i + 1].as_array()];
	CoverError::InvalidRing {
		a: edge(crossing.first),
		b: edge(crossing.second),
		at: unproject(crossing.at[0], crossing.at[1], level),
	}
}

/// Fills closed rings given in fractional tile space.
pub(crate) fn rasterize_rings(rings: &[Vec<[f64; 2]>], level: u8) -> TileSet {
	let mut boundary = LineRasterizer::new(level);
	let mut crossings = Vec::new();
	for points in rings {
		let records = boundary.add_ring(points);
		let before = crossings.len();
		crossings.extend(ring_crossings(&records));
		trace!(
			"ring with {} vertices: {} row records, {} crossings",
			points.len(),
			records.len(),
			crossings.len() - before
		);
	}
	let mut tiles = boundary.into_tiles();

	let size = 1i64 << level;
	crossings.sort_by_key(|&[x, y]| (y, x));
	for (row, group) in &crossings.iter().chunk_by(|c| c[1]) {
		if !(0..size).contains(&row) {
			continue;
		}
		let columns = group.map(|c| c[0]).collect::<Vec<_>>();
		for pair in columns.chunks_exact(2) {
			for x in (pair[0] + 1).max(0)..=(pair[1] - 1).min(size - 1) {
				tiles.insert(&TileCoord::new_clamped(level, x, row));
			}
		}
	}
	tiles
}

/// The row records of one ring that cross a scanline.
///
/// Turning points (local minima and maxima of the row) touch the scanline
/// without crossing it. Of a horizontal run only the last record counts.
fn ring_crossings(records: &[[i64; 2]]) -> Vec<[i64; 2]> {
	let rows = records.iter().map(|r| r[1]).collect::<Vec<_>>();
	let n = rows.len();
	records
		.iter()
		.enumerate()
		.filter(|&(i, _)| !is_local_min(&rows, i) && !is_local_max(&rows, i) && rows[(i + 1) % n] != rows[i])
		.map(|(_, record)| *record)
		.collect()
}

/// Previous row, and the next row that differs from row `i`, of a cyclic sequence.
fn neighbours(rows: &[i64], i: usize) -> (i64, Option<i64>) {
	let n = rows.len();
	let previous = rows[(i + n - 1) % n];
	let next = (1..n).map(|k| rows[(i + k) % n]).find(|&row| row != rows[i]);
	(previous, next)
}

fn is_local_min(rows: &[i64], i: usize) -> bool {
	let (previous, next) = neighbours(rows, i);
	rows[i] < previous && next.is_some_and(|next| rows[i] < next)
}

fn is_local_max(rows: &[i64], i: usize) -> bool {
	let (previous, next) = neighbours(rows, i);
	rows[i] > previous && next.is_some_and(|next| rows[i] > next)
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	fn xy(tiles: TileSet) -> Vec<[u32; 2]> {
		tiles.into_sorted_vec().into_iter().map(|c| [c.x, c.y]).collect()
	}

	fn staircase() -> Vec<[u32; 2]> {
		let mut tiles = Vec::new();
		for y in 0..4u32 {
			for x in 0..4u32 {
				if x + y <= 4 {
					tiles.push([x, y]);
				}
			}
		}
		tiles
	}

	#[rstest]
	// \/
	#[case(&[1, 0, 1], 1, true, false)]
	// \_/
	#[case(&[1, 0, 0, 1], 1, true, false)]
	// /\
	#[case(&[0, 1, 0], 1, false, true)]
	// /-\
	#[case(&[0, 1, 1, 0], 1, false, true)]
	// -\
	#[case(&[1, 1, 0], 1, false, false)]
	// -/
	#[case(&[0, 0, 1], 1, false, false)]
	// /
	#[case(&[0, 1, 2], 1, false, false)]
	fn local_extrema(#[case] rows: &[i64], #[case] i: usize, #[case] min: bool, #[case] max: bool) {
		assert_eq!(is_local_min(rows, i), min);
		assert_eq!(is_local_max(rows, i), max);
	}

	#[test]
	fn local_extrema_wrap_around() {
		let rows = [0, 1, 2, 1];
		assert!(is_local_min(&rows, 0));
		assert!(is_local_max(&rows, 2));
		assert!(!is_local_min(&rows, 1) && !is_local_max(&rows, 3));
	}

	#[test]
	fn crossings_of_a_rectangle() {
		let records = [[0, 0], [3, 1], [3, 2], [0, 1]];
		assert_eq!(ring_crossings(&records), vec![[3, 1], [0, 1]]);
	}

	#[test]
	fn rectangle() {
		let ring = vec![[0.5, 0.5], [3.5, 0.5], [3.5, 2.5], [0.5, 2.5], [0.5, 0.5]];
		let tiles = rasterize_rings(&[ring], 3);
		assert_eq!(tiles.len(), 12);
		assert!(tiles.contains(&TileCoord::new(3, 1, 1).unwrap()));
		assert!(tiles.contains(&TileCoord::new(3, 2, 1).unwrap()));
	}

	#[rstest]
	#[case(vec![[0.0, 0.0], [4.0, 0.0], [0.0, 4.0], [0.0, 0.0]])]
	#[case(vec![[0.0, 0.0], [0.0, 4.0], [4.0, 0.0], [0.0, 0.0]])]
	#[case(vec![[4.0, 0.0], [0.0, 4.0], [0.0, 0.0], [4.0, 0.0]])]
	fn triangle_on_grid_vertices(#[case] ring: Vec<[f64; 2]>) {
		assert_eq!(xy(rasterize_rings(&[ring], 2)), staircase());
	}

	#[test]
	fn hole_stays_empty() {
		let outer = vec![[0.5, 0.5], [6.5, 0.5], [6.5, 6.5], [0.5, 6.5], [0.5, 0.5]];
		let hole = vec![[2.5, 2.5], [2.5, 4.5], [4.5, 4.5], [4.5, 2.5], [2.5, 2.5]];
		let tiles = rasterize_rings(&[outer, hole], 3);
		// 7x7 minus the single tile strictly inside the hole boundary
		assert_eq!(tiles.len(), 48);
		assert!(!tiles.contains(&TileCoord::new(3, 3, 3).unwrap()));
		assert!(tiles.contains(&TileCoord::new(3, 1, 3).unwrap()));
		assert!(tiles.contains(&TileCoord::new(3, 5, 3).unwrap()));
	}

	#[test]
	fn concave_u_shape() {
		// a U open to the north: two columns joined at the bottom
		let ring = vec![
			[0.5, 0.5],
			[1.5, 0.5],
			[1.5, 3.5],
			[4.5, 3.5],
			[4.5, 0.5],
			[5.5, 0.5],
			[5.5, 5.5],
			[0.5, 5.5],
			[0.5, 0.5],
		];
		let tiles = rasterize_rings(&[ring], 3);
		assert!(!tiles.contains(&TileCoord::new(3, 3, 1).unwrap()));
		assert!(!tiles.contains(&TileCoord::new(3, 2, 2).unwrap()));
		assert!(tiles.contains(&TileCoord::new(3, 3, 4).unwrap()));
		assert!(tiles.contains(&TileCoord::new(3, 2, 5).unwrap()));
	}

	#[test]
	fn bottom_edge_is_clamped() {
		let ring = vec![[0.5, 0.5], [1.5, 0.5], [1.5, 2.0], [0.5, 2.0], [0.5, 0.5]];
		assert_eq!(xy(rasterize_rings(&[ring], 1)), vec![[0, 0], [1, 0], [0, 1], [1, 1]]);
	}

	#[test]
	fn invalid_ring_reports_lon_lat() {
		let polygon = PolygonGeometry::from(&[[
			[-12.034835815429688, 8.901183448260598],
			[-12.060413360595701, 8.899826693726117],
			[-12.036380767822266, 8.873199368734273],
			[-12.059383392333983, 8.871418491385919],
			[-12.034835815429688, 8.901183448260598],
		]]);
		let (a, b, at) = match cover_polygon(&polygon, 12) {
			Err(CoverError::InvalidRing { a, b, at }) => (a, b, at),
			other => panic!("unexpected result {other:?}"),
		};
		assert_eq!(a, [[-12.060413360595701, 8.899826693726117], [-12.036380767822266, 8.873199368734273]]);
		assert_eq!(b, [[-12.059383392333983, 8.871418491385919], [-12.034835815429688, 8.901183448260598]]);
		approx::assert_abs_diff_eq!(at[0], -12.047632938440815, epsilon = 1e-4);
		approx::assert_abs_diff_eq!(at[1], 8.885666404927512, epsilon = 1e-4);
	}

	#[test]
	fn hole_crossing_outer_ring_is_filled() {
		let polygon = PolygonGeometry::from(&[
			[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0], [0.0, 0.0]],
			[[5.0, 4.0], [15.0, 4.0], [15.0, 6.0], [5.0, 6.0], [5.0, 4.0]],
		]);
		let tiles = cover_polygon(&polygon, 6).unwrap();
		assert!(tiles.contains(&TileCoord::from_geo(1.0, 1.0, 6)));
		assert!(tiles.contains(&TileCoord::from_geo(12.0, 5.0, 6)));
	}

	#[test]
	fn degenerate_rings_are_skipped() {
		let polygon = PolygonGeometry(vec![RingGeometry::from(&[[1.0, 1.0], [2.0, 2.0], [1.0, 1.0]])]);
		assert!(cover_polygon(&polygon, 5).unwrap().is_empty());
	}
}
