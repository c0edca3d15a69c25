use super::{CompositeGeometryTrait, GeometryTrait, PolygonGeometry};
use serde_json::Value;
use std::fmt::Debug;
use tilecover_core::CoverError;

#[derive(Clone, PartialEq)]
pub struct MultiPolygonGeometry(pub Vec<PolygonGeometry>);

impl GeometryTrait for MultiPolygonGeometry {
	fn verify(&self) -> Result<(), CoverError> {
		self.0.iter().try_for_each(PolygonGeometry::verify)
	}

	fn to_coord_json(&self) -> Value {
		Value::from(self.0.iter().map(PolygonGeometry::to_coord_json).collect::<Vec<_>>())
	}
}

impl CompositeGeometryTrait<PolygonGeometry> for MultiPolygonGeometry {
	fn as_vec(&self) -> &Vec<PolygonGeometry> {
		&self.0
	}
}

impl Debug for MultiPolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiPolygonGeometry, PolygonGeometry);

impl From<geo::MultiPolygon<f64>> for MultiPolygonGeometry {
	fn from(geometry: geo::MultiPolygon<f64>) -> Self {
		MultiPolygonGeometry(geometry.into_iter().map(PolygonGeometry::from).collect())
	}
}
