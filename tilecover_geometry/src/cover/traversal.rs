//! Grid traversal of a straight segment in fractional tile space.
//!
//! The walk keeps the current integer tile and, per axis, the parametric
//! distance `t` (0 at the start, 1 at the end of the segment) to the next grid
//! line as well as the parametric length of one tile. Each step moves along the
//! axis whose next grid line comes first.

/// A tile reached by [`walk_segment`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
	/// The path moves into this tile.
	Enter([i64; 2]),
	/// The path only passes through a corner of this tile.
	Touch([i64; 2]),
}

/// Reports every tile the segment from `a` to `b` passes after leaving the tile
/// containing `a`, ending with the tile containing `b`.
///
/// When the segment passes exactly through a grid vertex the step is diagonal,
/// and the two tiles sharing that vertex are reported as [`Step::Touch`]. That
/// way the reported tiles do not depend on the direction of the segment.
pub(crate) fn walk_segment(a: [f64; 2], b: [f64; 2], mut visit: impl FnMut(Step)) {
	let [x0, y0] = a;
	let [x1, y1] = b;
	let dx = x1 - x0;
	let dy = y1 - y0;
	if dx == 0.0 && dy == 0.0 {
		return;
	}

	let mut x = x0.floor() as i64;
	let mut y = y0.floor() as i64;
	let end_x = x1.floor() as i64;
	let end_y = y1.floor() as i64;

	let sx: i64 = if dx > 0.0 { 1 } else { -1 };
	let sy: i64 = if dy > 0.0 { 1 } else { -1 };

	let (mut t_max_x, t_delta_x) = axis_start(x0, dx, x);
	let (mut t_max_y, t_delta_y) = axis_start(y0, dy, y);

	// never step beyond the end tile, even if rounding keeps `t` below 1
	let mut remaining_x = (end_x - x).abs();
	let mut remaining_y = (end_y - y).abs();

	loop {
		let can_x = remaining_x > 0 && t_max_x < 1.0;
		let can_y = remaining_y > 0 && t_max_y < 1.0;
		match (can_x, can_y) {
			(false, false) => break,
			(true, true) if t_max_x == t_max_y => {
				visit(Step::Touch([x + sx, y]));
				visit(Step::Touch([x, y + sy]));
				x += sx;
				y += sy;
				t_max_x += t_delta_x;
				t_max_y += t_delta_y;
				remaining_x -= 1;
				remaining_y -= 1;
			}
			(true, false) => {
				x += sx;
				t_max_x += t_delta_x;
				remaining_x -= 1;
			}
			(true, true) if t_max_x < t_max_y => {
				x += sx;
				t_max_x += t_delta_x;
				remaining_x -= 1;
			}
			_ => {
				y += sy;
				t_max_y += t_delta_y;
				remaining_y -= 1;
			}
		}
		visit(Step::Enter([x, y]));
	}

	// An end point on a grid line lies in the next tile (floor convention),
	// which the walk above does not enter because `t` reaches exactly 1.
	while x != end_x || y != end_y {
		if x != end_x && y != end_y {
			visit(Step::Touch([x + sx, y]));
			visit(Step::Touch([x, y + sy]));
			x += sx;
			y += sy;
		} else if x != end_x {
			x += sx;
		} else {
			y += sy;
		}
		visit(Step::Enter([x, y]));
	}
}

/// Parametric distance to the first grid line and parametric tile length along one axis.
fn axis_start(start: f64, delta: f64, tile: i64) -> (f64, f64) {
	if delta == 0.0 {
		return (f64::INFINITY, f64::INFINITY);
	}
	let boundary = if delta > 0.0 { tile as f64 + 1.0 } else { tile as f64 };
	(((boundary - start) / delta).abs(), (1.0 / delta).abs())
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	fn walk(a: [f64; 2], b: [f64; 2]) -> Vec<Step> {
		let mut steps = Vec::new();
		walk_segment(a, b, |step| steps.push(step));
		steps
	}

	fn entered(a: [f64; 2], b: [f64; 2]) -> Vec<[i64; 2]> {
		walk(a, b)
			.into_iter()
			.filter_map(|step| match step {
				Step::Enter(t) => Some(t),
				Step::Touch(_) => None,
			})
			.collect()
	}

	#[test]
	fn zero_length() {
		assert!(walk([1.5, 1.5], [1.5, 1.5]).is_empty());
	}

	#[test]
	fn inside_one_tile() {
		assert!(walk([1.1, 1.2], [1.8, 1.9]).is_empty());
	}

	#[rstest]
	#[case([0.5, 0.5], [3.5, 0.5], vec![[1, 0], [2, 0], [3, 0]])]
	#[case([3.5, 0.5], [0.5, 0.5], vec![[2, 0], [1, 0], [0, 0]])]
	#[case([0.5, 0.5], [0.5, 2.5], vec![[0, 1], [0, 2]])]
	#[case([0.5, 2.5], [0.5, 0.5], vec![[0, 1], [0, 0]])]
	fn axis_aligned(#[case] a: [f64; 2], #[case] b: [f64; 2], #[case] expected: Vec<[i64; 2]>) {
		assert_eq!(entered(a, b), expected);
	}

	#[test]
	fn shallow_slope() {
		assert_eq!(entered([0.5, 0.2], [3.5, 1.4]), vec![[1, 0], [2, 0], [2, 1], [3, 1]]);
	}

	#[test]
	fn diagonal_through_vertices() {
		assert_eq!(
			walk([0.5, 0.5], [2.5, 2.5]),
			vec![
				Step::Touch([1, 0]),
				Step::Touch([0, 1]),
				Step::Enter([1, 1]),
				Step::Touch([2, 1]),
				Step::Touch([1, 2]),
				Step::Enter([2, 2]),
			]
		);
	}

	#[test]
	fn end_on_grid_line_enters_next_tile() {
		assert_eq!(entered([0.5, 0.5], [2.0, 0.5]), vec![[1, 0], [2, 0]]);
		assert_eq!(entered([2.0, 0.5], [0.5, 0.5]), vec![[1, 0], [0, 0]]);
	}

	#[test]
	fn end_on_grid_vertex() {
		assert_eq!(
			walk([0.5, 0.5], [1.0, 1.0]),
			vec![Step::Touch([1, 0]), Step::Touch([0, 1]), Step::Enter([1, 1])]
		);
	}

	#[test]
	fn reversed_segment_reaches_same_tiles() {
		let collect = |a, b| {
			let mut tiles = walk(a, b)
				.into_iter()
				.map(|step| match step {
					Step::Enter(t) | Step::Touch(t) => t,
				})
				.collect::<Vec<_>>();
			tiles.push([a[0].floor() as i64, a[1].floor() as i64]);
			tiles.sort_unstable();
			tiles.dedup();
			tiles
		};
		for (a, b) in [
			([0.0, 0.0], [4.0, 4.0]),
			([4.0, 0.0], [0.0, 4.0]),
			([0.3, 0.7], [5.9, 2.2]),
			([1.0, 0.5], [1.0, 3.5]),
		] {
			assert_eq!(collect(a, b), collect(b, a), "{a:?} -> {b:?}");
		}
	}
}
