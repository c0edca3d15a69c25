use serde_json::{Value, json};
use tilecover_core::TileCoord;

/// Tiles as `[[x, y, z], ...]`.
#[must_use]
pub fn tiles_to_json(tiles: &[TileCoord]) -> Value {
	Value::from(tiles.iter().map(|t| json!(t.as_xyz())).collect::<Vec<_>>())
}

/// Tiles as quadkey strings.
#[must_use]
pub fn tiles_to_quadkeys(tiles: &[TileCoord]) -> Vec<String> {
	tiles.iter().map(TileCoord::to_quadkey).collect()
}

/// The square of a tile as GeoJSON polygon geometry, ring order NW, SW, SE, NE, NW.
#[must_use]
pub fn tile_to_geometry(tile: &TileCoord) -> Value {
	let [west, south, east, north] = tile.to_geo_bbox();
	json!({
		"type": "Polygon",
		"coordinates": [[[west, north], [west, south], [east, south], [east, north], [west, north]]]
	})
}

/// One polygon feature per tile, collected in a `FeatureCollection`.
#[must_use]
pub fn tiles_to_feature_collection(tiles: &[TileCoord]) -> Value {
	let features = tiles
		.iter()
		.map(|tile| json!({ "type": "Feature", "properties": {}, "geometry": tile_to_geometry(tile) }))
		.collect::<Vec<_>>();
	json!({ "type": "FeatureCollection", "features": features })
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;

	fn tiles() -> Vec<TileCoord> {
		vec![TileCoord::new(1, 0, 0).unwrap(), TileCoord::new(14, 4543, 6612).unwrap()]
	}

	#[test]
	fn json_triples() {
		assert_eq!(tiles_to_json(&tiles()), json!([[0, 0, 1], [4543, 6612, 14]]));
		assert_eq!(tiles_to_json(&[]), json!([]));
	}

	#[test]
	fn quadkeys() {
		assert_eq!(tiles_to_quadkeys(&tiles()), vec!["0", "03200332131311"]);
	}

	#[test]
	fn feature_collection() {
		let collection = tiles_to_feature_collection(&tiles());
		assert_eq!(collection["type"], "FeatureCollection");
		let features = collection["features"].as_array().unwrap();
		assert_eq!(features.len(), 2);
		assert_eq!(features[0]["properties"], json!({}));
		assert_eq!(features[0]["geometry"]["type"], "Polygon");

		let ring = features[0]["geometry"]["coordinates"][0].as_array().unwrap();
		assert_eq!(ring.len(), 5);
		assert_eq!(ring[0], ring[4]);
		let corner = |i: usize, j: usize| ring[i][j].as_f64().unwrap();
		// north-west quarter of the world
		assert_eq!(corner(0, 0), -180.0);
		assert_relative_eq!(corner(0, 1), 85.0511287798066, epsilon = 1e-9);
		assert_eq!(corner(1, 0), -180.0);
		assert_relative_eq!(corner(1, 1), 0.0, epsilon = 1e-9);
		assert_eq!(corner(2, 0), 0.0);
		assert_eq!(corner(3, 0), 0.0);
		assert_relative_eq!(corner(3, 1), 85.0511287798066, epsilon = 1e-9);
	}
}
