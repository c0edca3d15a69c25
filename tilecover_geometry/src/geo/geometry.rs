use super::*;
use serde_json::{Value, json};
use std::fmt::Debug;
use tilecover_core::CoverError;

/// Any geometry the cover engine accepts.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPoint(MultiPointGeometry),
	MultiLineString(MultiLineStringGeometry),
	MultiPolygon(MultiPolygonGeometry),
}

impl Geometry {
	pub fn new_point(value: [f64; 2]) -> Self {
		Self::Point(PointGeometry::from(value))
	}
	pub fn new_line_string(value: Vec<[f64; 2]>) -> Self {
		Self::LineString(LineStringGeometry::from(value))
	}
	pub fn new_polygon(value: Vec<Vec<[f64; 2]>>) -> Self {
		Self::Polygon(PolygonGeometry::from(value))
	}
	pub fn new_multi_point(value: Vec<[f64; 2]>) -> Self {
		Self::MultiPoint(MultiPointGeometry::from(value))
	}
	pub fn new_multi_line_string(value: Vec<Vec<[f64; 2]>>) -> Self {
		Self::MultiLineString(MultiLineStringGeometry::from(value))
	}
	pub fn new_multi_polygon(value: Vec<Vec<Vec<[f64; 2]>>>) -> Self {
		Self::MultiPolygon(MultiPolygonGeometry::from(value))
	}

	/// The GeoJSON `type` tag of this geometry.
	#[must_use]
	pub fn type_name(&self) -> &'static str {
		match self {
			Geometry::Point(_) => "Point",
			Geometry::LineString(_) => "LineString",
			Geometry::Polygon(_) => "Polygon",
			Geometry::MultiPoint(_) => "MultiPoint",
			Geometry::MultiLineString(_) => "MultiLineString",
			Geometry::MultiPolygon(_) => "MultiPolygon",
		}
	}

	/// Checks that all coordinates are finite.
	pub fn verify(&self) -> Result<(), CoverError> {
		match self {
			Geometry::Point(g) => g.verify(),
			Geometry::LineString(g) => g.verify(),
			Geometry::Polygon(g) => g.verify(),
			Geometry::MultiPoint(g) => g.verify(),
			Geometry::MultiLineString(g) => g.verify(),
			Geometry::MultiPolygon(g) => g.verify(),
		}
	}

	/// The geometry as GeoJSON geometry object.
	#[must_use]
	pub fn to_json(&self) -> Value {
		let coordinates = match self {
			Geometry::Point(g) => g.to_coord_json(),
			Geometry::LineString(g) => g.to_coord_json(),
			Geometry::Polygon(g) => g.to_coord_json(),
			Geometry::MultiPoint(g) => g.to_coord_json(),
			Geometry::MultiLineString(g) => g.to_coord_json(),
			Geometry::MultiPolygon(g) => g.to_coord_json(),
		};
		json!({ "type": self.type_name(), "coordinates": coordinates })
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Point(g) => g,
			Geometry::LineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::MultiPolygon(g) => g,
		};
		f.debug_tuple(self.type_name()).field(inner).finish()
	}
}

impl From<geo::Polygon<f64>> for Geometry {
	fn from(geometry: geo::Polygon<f64>) -> Self {
		Geometry::Polygon(PolygonGeometry::from(geometry))
	}
}

impl From<geo::MultiPolygon<f64>> for Geometry {
	fn from(geometry: geo::MultiPolygon<f64>) -> Self {
		Geometry::MultiPolygon(MultiPolygonGeometry::from(geometry))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Geometry::new_point([1.0, 2.0]), "Point")]
	#[case(Geometry::new_multi_point(vec![[1.0, 2.0]]), "MultiPoint")]
	#[case(Geometry::new_line_string(vec![[1.0, 2.0], [2.0, 3.0]]), "LineString")]
	#[case(Geometry::new_multi_line_string(vec![vec![[1.0, 2.0], [2.0, 3.0]]]), "MultiLineString")]
	#[case(Geometry::new_polygon(vec![vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [0.0, 0.0]]]), "Polygon")]
	#[case(Geometry::new_multi_polygon(vec![vec![vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [0.0, 0.0]]]]), "MultiPolygon")]
	fn type_names(#[case] geometry: Geometry, #[case] expected: &str) {
		assert_eq!(geometry.type_name(), expected);
		assert_eq!(geometry.to_json()["type"], expected);
		assert!(geometry.verify().is_ok());
	}

	#[test]
	fn to_json() {
		let geometry = Geometry::new_line_string(vec![[1.0, 2.0], [3.0, 4.5]]);
		assert_eq!(
			geometry.to_json(),
			json!({ "type": "LineString", "coordinates": [[1.0, 2.0], [3.0, 4.5]] })
		);
	}

	#[test]
	fn verify_finds_nested_bad_coordinate() {
		let geometry = Geometry::new_multi_polygon(vec![vec![vec![
			[0.0, 0.0],
			[1.0, 0.0],
			[1.0, f64::NEG_INFINITY],
			[0.0, 0.0],
		]]]);
		assert_eq!(
			geometry.verify(),
			Err(CoverError::InvalidCoordinate([1.0, f64::NEG_INFINITY]))
		);
	}

	#[test]
	fn debug_format() {
		assert_eq!(format!("{:?}", Geometry::new_point([1.0, 2.0])), "Point([1.0, 2.0])");
	}
}
