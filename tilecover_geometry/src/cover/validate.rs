use geo::{
	Coord, Line,
	algorithm::line_intersection::{LineIntersection, line_intersection},
};

/// A proper crossing between two edges of a ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct RingCrossing {
	/// Index of the first edge; edge `i` runs from vertex `i` to vertex `i + 1`.
	pub first: usize,
	/// Index of the second edge, always greater than `first`.
	pub second: usize,
	pub at: [f64; 2],
}

/// Searches a closed ring for two non-adjacent edges that cross each other.
///
/// Edges are swept in order of their western end, so only edges with
/// overlapping x ranges are compared. Touching vertices and collinear overlaps
/// are not crossings.
pub(crate) fn find_crossing(points: &[[f64; 2]]) -> Option<RingCrossing> {
	let edges = points
		.windows(2)
		.map(|w| Line::new(Coord::from(w[0]), Coord::from(w[1])))
		.collect::<Vec<_>>();
	let n = edges.len();
	if n < 4 {
		return None;
	}

	let mut order = (0..n).collect::<Vec<_>>();
	order.sort_by(|&i, &j| west(&edges[i]).total_cmp(&west(&edges[j])));

	for (k, &i) in order.iter().enumerate() {
		let edge = &edges[i];
		let east = edge.start.x.max(edge.end.x);
		for &j in &order[k + 1..] {
			let other = &edges[j];
			if west(other) > east {
				break;
			}
			if adjacent(i, j, n) || !overlap_y(edge, other) {
				continue;
			}
			if let Some(LineIntersection::SinglePoint {
				intersection,
				is_proper: true,
			}) = line_intersection(*edge, *other)
			{
				return Some(RingCrossing {
					first: i.min(j),
					second: i.max(j),
					at: [intersection.x, intersection.y],
				});
			}
		}
	}
	None
}

fn west(line: &Line<f64>) -> f64 {
	line.start.x.min(line.end.x)
}

fn overlap_y(a: &Line<f64>, b: &Line<f64>) -> bool {
	a.start.y.min(a.end.y) <= b.start.y.max(b.end.y) && b.start.y.min(b.end.y) <= a.start.y.max(a.end.y)
}

/// Edges sharing a vertex, including the closing pair.
fn adjacent(i: usize, j: usize, n: usize) -> bool {
	i.abs_diff(j) == 1 || i.abs_diff(j) == n - 1
}
