use super::*;
use serde_json::Value;
use std::fmt::Debug;
use tilecover_core::CoverError;

/// A polygon: the first ring is the outer boundary, any further rings are holes.
#[derive(Clone, PartialEq)]
pub struct PolygonGeometry(pub Vec<RingGeometry>);

impl PolygonGeometry {
	/// The normalized rings of this polygon, skipping degenerate ones.
	pub fn normalized_rings(&self) -> impl Iterator<Item = RingGeometry> + '_ {
		self.0.iter().filter_map(RingGeometry::normalized)
	}
}

impl GeometryTrait for PolygonGeometry {
	fn verify(&self) -> Result<(), CoverError> {
		self.0.iter().try_for_each(RingGeometry::verify)
	}

	fn to_coord_json(&self) -> Value {
		Value::from(self.0.iter().map(RingGeometry::to_coord_json).collect::<Vec<_>>())
	}
}

impl CompositeGeometryTrait<RingGeometry> for PolygonGeometry {
	fn as_vec(&self) -> &Vec<RingGeometry> {
		&self.0
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(PolygonGeometry, RingGeometry);

impl From<geo::Polygon<f64>> for PolygonGeometry {
	fn from(geometry: geo::Polygon<f64>) -> Self {
		let (exterior, interiors) = geometry.into_inner();
		let mut rings = Vec::with_capacity(interiors.len() + 1);
		rings.push(RingGeometry::from(exterior));
		rings.extend(interiors.into_iter().map(RingGeometry::from));
		PolygonGeometry(rings)
	}
}
