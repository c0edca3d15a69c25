use super::{CompositeGeometryTrait, GeometryTrait, LineStringGeometry};
use serde_json::Value;
use std::fmt::Debug;
use tilecover_core::CoverError;

#[derive(Clone, PartialEq)]
pub struct MultiLineStringGeometry(pub Vec<LineStringGeometry>);

impl GeometryTrait for MultiLineStringGeometry {
	fn verify(&self) -> Result<(), CoverError> {
		self.0.iter().try_for_each(LineStringGeometry::verify)
	}

	fn to_coord_json(&self) -> Value {
		Value::from(self.0.iter().map(LineStringGeometry::to_coord_json).collect::<Vec<_>>())
	}
}

impl CompositeGeometryTrait<LineStringGeometry> for MultiLineStringGeometry {
	fn as_vec(&self) -> &Vec<LineStringGeometry> {
		&self.0
	}
}

impl Debug for MultiLineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiLineStringGeometry, LineStringGeometry);

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn to_coord_json() {
		let lines = MultiLineStringGeometry(vec![
			LineStringGeometry::from(&[[0, 0], [1, 1]]),
			LineStringGeometry::from(&[[5, -3], [2, 2], [0, 1]]),
		]);
		assert_eq!(lines.as_vec().len(), 2);
		assert_eq!(
			lines.to_coord_json(),
			json!([[[0.0, 0.0], [1.0, 1.0]], [[5.0, -3.0], [2.0, 2.0], [0.0, 1.0]]])
		);
	}
}
