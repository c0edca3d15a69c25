use super::{CompositeGeometryTrait, GeometryTrait, PointGeometry};
use serde_json::Value;
use std::fmt::Debug;
use tilecover_core::CoverError;

#[derive(Clone, PartialEq)]
pub struct MultiPointGeometry(pub Vec<PointGeometry>);

impl GeometryTrait for MultiPointGeometry {
	fn verify(&self) -> Result<(), CoverError> {
		self.0.iter().try_for_each(PointGeometry::verify)
	}

	fn to_coord_json(&self) -> Value {
		Value::from(self.0.iter().map(PointGeometry::to_coord_json).collect::<Vec<_>>())
	}
}

impl CompositeGeometryTrait<PointGeometry> for MultiPointGeometry {
	fn as_vec(&self) -> &Vec<PointGeometry> {
		&self.0
	}
}

impl Debug for MultiPointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiPointGeometry, PointGeometry);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn from_array() {
		let points = MultiPointGeometry::from(&[[1, 5], [-2, 3], [4, 0]]);
		assert_eq!(points.as_vec().len(), 3);
		assert_eq!(points.0[1], PointGeometry::from([-2.0, 3.0]));
	}

	#[test]
	fn debug_format() {
		let points = MultiPointGeometry::from(&[[1, 2], [3, 4]]);
		assert_eq!(format!("{points:?}"), "[[1.0, 2.0], [3.0, 4.0]]");
	}
}
