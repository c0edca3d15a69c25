use super::{CompositeGeometryTrait, Coordinates, GeometryTrait};
use serde_json::Value;
use std::fmt::Debug;
use tilecover_core::CoverError;

/// A closed loop of positions, the boundary of a polygon or of one of its holes.
///
/// Rings coming from input data are not trusted to be closed or free of repeated
/// vertices; [`RingGeometry::normalized`] produces the form the cover engine uses.
#[derive(Clone, PartialEq)]
pub struct RingGeometry(pub Vec<Coordinates>);

impl RingGeometry {
	/// Drop consecutive duplicate vertices and close the ring if needed.
	///
	/// Returns `None` for a degenerate ring with fewer than 4 vertices afterwards,
	/// i.e. less than three distinct corners.
	#[must_use]
	pub fn normalized(&self) -> Option<RingGeometry> {
		let mut coords: Vec<Coordinates> = Vec::with_capacity(self.0.len() + 1);
		for c in &self.0 {
			if coords.last() != Some(c) {
				coords.push(*c);
			}
		}
		if let Some(&first) = coords.first()
			&& coords.last() != Some(&first)
		{
			coords.push(first);
		}
		(coords.len() >= 4).then_some(RingGeometry(coords))
	}
}

impl GeometryTrait for RingGeometry {
	fn verify(&self) -> Result<(), CoverError> {
		self.0.iter().try_for_each(Coordinates::verify)
	}

	fn to_coord_json(&self) -> Value {
		Value::from(self.0.iter().map(Coordinates::to_json).collect::<Vec<_>>())
	}
}

impl CompositeGeometryTrait<Coordinates> for RingGeometry {
	fn as_vec(&self) -> &Vec<Coordinates> {
		&self.0
	}
}

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(RingGeometry, Coordinates);

impl From<geo::LineString<f64>> for RingGeometry {
	fn from(geometry: geo::LineString<f64>) -> Self {
		RingGeometry(geometry.into_iter().map(Coordinates::from).collect())
	}
}
