use super::{
	TileSet,
	traversal::{Step, walk_segment},
};
use tilecover_core::TileCoord;

/// Collects the tiles crossed by polylines at one zoom level.
///
/// Points are given in fractional tile space of that level. While a ring is
/// being added, every change of row is recorded as well; the polygon fill
/// uses these records as scanline crossings.
pub(crate) struct LineRasterizer {
	level: u8,
	tiles: TileSet,
	current: Option<[i64; 2]>,
	rows: Option<Vec<[i64; 2]>>,
}

impl LineRasterizer {
	pub fn new(level: u8) -> Self {
		Self {
			level,
			tiles: TileSet::new(),
			current: None,
			rows: None,
		}
	}

	/// Adds every tile the polyline passes through. Fewer than two points add nothing.
	pub fn add_line(&mut self, points: &[[f64; 2]]) {
		self.current = None;
		for segment in points.windows(2) {
			self.add_segment(segment[0], segment[1]);
		}
	}

	/// Adds the boundary tiles of a closed ring and returns its row records:
	/// the tile entered each time the boundary moves to another row.
	///
	/// Consecutive records always differ in row, including the last and the first one.
	pub fn add_ring(&mut self, points: &[[f64; 2]]) -> Vec<[i64; 2]> {
		self.rows = Some(Vec::new());
		self.add_line(points);
		let mut rows = self.rows.take().unwrap_or_default();
		if rows.len() > 1 && rows.first().map(|r| r[1]) == rows.last().map(|r| r[1]) {
			rows.pop();
		}
		rows
	}

	pub fn into_tiles(self) -> TileSet {
		self.tiles
	}

	fn add_segment(&mut self, a: [f64; 2], b: [f64; 2]) {
		if a == b {
			return;
		}
		self.enter([a[0].floor() as i64, a[1].floor() as i64]);
		walk_segment(a, b, |step| match step {
			Step::Enter(tile) => self.enter(tile),
			Step::Touch(tile) => self.touch(tile),
		});
	}

	fn enter(&mut self, tile: [i64; 2]) {
		if self.current == Some(tile) {
			return;
		}
		self.touch(tile);
		if let Some(rows) = &mut self.rows
			&& self.current.is_none_or(|current| current[1] != tile[1])
		{
			rows.push(tile);
		}
		self.current = Some(tile);
	}

	fn touch(&mut self, tile: [i64; 2]) {
		self.tiles.insert(&TileCoord::new_clamped(self.level, tile[0], tile[1]));
	}
}
