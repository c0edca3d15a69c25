use crate::{Geometry, MultiPolygonGeometry};
use geo::{LineString, MultiPolygon, Polygon, unary_union};
use serde_json::{Value, json};
use tilecover_core::TileCoord;

/// Union of tile squares, e.g. the outline of a cover result.
#[derive(Debug, Clone, Default)]
pub struct TileOutline {
	polygons: Vec<Polygon<f64>>,
}

impl TileOutline {
	#[must_use]
	pub fn new() -> Self {
		Self { polygons: Vec::new() }
	}

	/// Adds a geographic bounding box `[west, south, east, north]`.
	pub fn add_geo_bbox(&mut self, bbox: &[f64; 4]) {
		let [west, south, east, north] = *bbox;
		self.polygons.push(Polygon::new(
			LineString::from(vec![
				(west, north),
				(west, south),
				(east, south),
				(east, north),
				(west, north),
			]),
			vec![],
		));
	}

	pub fn add_coord(&mut self, coord: &TileCoord) {
		self.add_geo_bbox(&coord.to_geo_bbox());
	}

	#[must_use]
	pub fn to_multi_polygon(&self) -> MultiPolygon<f64> {
		unary_union(&self.polygons)
	}

	/// The outline as GeoJSON geometry, a `Polygon` if the tiles form one
	/// connected area without holes, a `MultiPolygon` otherwise.
	#[must_use]
	pub fn to_geometry(&self) -> Geometry {
		let mut multi_polygon = MultiPolygonGeometry::from(self.to_multi_polygon());
		if multi_polygon.0.len() == 1 {
			Geometry::Polygon(multi_polygon.0.remove(0))
		} else {
			Geometry::MultiPolygon(multi_polygon)
		}
	}

	#[must_use]
	pub fn to_feature_json(&self) -> Value {
		json!({ "type": "Feature", "properties": {}, "geometry": self.to_geometry().to_json() })
	}
}

impl<'a> FromIterator<&'a TileCoord> for TileOutline {
	fn from_iter<I: IntoIterator<Item = &'a TileCoord>>(iter: I) -> Self {
		let mut outline = TileOutline::new();
		for coord in iter {
			outline.add_coord(coord);
		}
		outline
	}
}
