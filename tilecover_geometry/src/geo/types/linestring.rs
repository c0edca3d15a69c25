use super::{CompositeGeometryTrait, Coordinates, GeometryTrait};
use serde_json::Value;
use std::fmt::Debug;
use tilecover_core::CoverError;

/// An ordered sequence of positions forming a polyline.
#[derive(Clone, PartialEq)]
pub struct LineStringGeometry(pub Vec<Coordinates>);

impl GeometryTrait for LineStringGeometry {
	fn verify(&self) -> Result<(), CoverError> {
		self.0.iter().try_for_each(Coordinates::verify)
	}

	fn to_coord_json(&self) -> Value {
		Value::from(self.0.iter().map(Coordinates::to_json).collect::<Vec<_>>())
	}
}

impl CompositeGeometryTrait<Coordinates> for LineStringGeometry {
	fn as_vec(&self) -> &Vec<Coordinates> {
		&self.0
	}
}

impl Debug for LineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(LineStringGeometry, Coordinates);

impl From<geo::LineString<f64>> for LineStringGeometry {
	fn from(geometry: geo::LineString<f64>) -> Self {
		LineStringGeometry(geometry.into_iter().map(Coordinates::from).collect())
	}
}
