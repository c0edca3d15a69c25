use crate::Geometry;
use anyhow::{Context, Result, anyhow, bail, ensure};
use log::debug;
use serde_json::{Map, Value};
use tilecover_core::CoverError;

/// Parses a GeoJSON document and returns all geometries it contains.
///
/// Accepts a bare geometry, a `Feature` or a `FeatureCollection`. Features
/// without geometry are skipped.
///
/// # Errors
///
/// Fails on invalid JSON or GeoJSON structure. Geometry types the cover engine
/// does not handle fail with a [`CoverError::UnsupportedGeometry`], which can be
/// recovered with `downcast_ref`.
pub fn parse_geojson(json: &str) -> Result<Vec<Geometry>> {
	let value: Value = serde_json::from_str(json).context("parsing JSON")?;
	let object = as_object(&value)?;
	match get_type(object)? {
		"FeatureCollection" => parse_geojson_collection(object),
		"Feature" => Ok(parse_geojson_feature(object)?.into_iter().collect()),
		_ => Ok(vec![parse_geojson_geometry(object)?]),
	}
}

fn parse_geojson_collection(object: &Map<String, Value>) -> Result<Vec<Geometry>> {
	let features = object
		.get("features")
		.and_then(Value::as_array)
		.ok_or_else(|| anyhow!("FeatureCollection must have a 'features' array"))?;

	let mut geometries = Vec::with_capacity(features.len());
	for (index, feature) in features.iter().enumerate() {
		let feature = as_object(feature).with_context(|| format!("feature {index}"))?;
		ensure!(get_type(feature)? == "Feature", "feature {index}: type must be 'Feature'");
		if let Some(geometry) = parse_geojson_feature(feature).with_context(|| format!("feature {index}"))? {
			geometries.push(geometry);
		}
	}
	Ok(geometries)
}

fn parse_geojson_feature(object: &Map<String, Value>) -> Result<Option<Geometry>> {
	match object.get("geometry") {
		None => bail!("feature is missing 'geometry'"),
		Some(Value::Null) => {
			debug!("skipping feature without geometry");
			Ok(None)
		}
		Some(geometry) => parse_geojson_geometry(as_object(geometry)?).map(Some),
	}
}

fn parse_geojson_geometry(object: &Map<String, Value>) -> Result<Geometry> {
	let geometry_type = get_type(object)?;
	let coordinates = || {
		object
			.get("coordinates")
			.ok_or_else(|| anyhow!("geometry must have coordinates"))
	};

	let geometry = match geometry_type {
		"Point" => Geometry::new_point(parse_position(coordinates()?)?),
		"LineString" => Geometry::new_line_string(parse_positions(coordinates()?)?),
		"Polygon" => Geometry::new_polygon(parse_nested(coordinates()?, parse_positions)?),
		"MultiPoint" => Geometry::new_multi_point(parse_positions(coordinates()?)?),
		"MultiLineString" => Geometry::new_multi_line_string(parse_nested(coordinates()?, parse_positions)?),
		"MultiPolygon" => Geometry::new_multi_polygon(parse_nested(coordinates()?, |v| {
			parse_nested(v, parse_positions)
		})?),
		other => return Err(CoverError::UnsupportedGeometry(other.to_string()).into()),
	};
	Ok(geometry)
}

fn as_object(value: &Value) -> Result<&Map<String, Value>> {
	value.as_object().ok_or_else(|| anyhow!("expected a JSON object"))
}

fn get_type(object: &Map<String, Value>) -> Result<&str> {
	object
		.get("type")
		.ok_or_else(|| anyhow!("object must have a type"))?
		.as_str()
		.ok_or_else(|| anyhow!("type must be a string"))
}

/// A position `[x, y]`, optionally followed by an altitude that is ignored.
fn parse_position(value: &Value) -> Result<[f64; 2]> {
	let numbers = value
		.as_array()
		.ok_or_else(|| anyhow!("position must be an array, but got {value}"))?;
	ensure!(
		(2..=3).contains(&numbers.len()),
		"position must have 2 or 3 values, but got {value}"
	);
	let number = |v: &Value| v.as_f64().ok_or_else(|| anyhow!("position value must be a number, but got {v}"));
	Ok([number(&numbers[0])?, number(&numbers[1])?])
}

fn parse_positions(value: &Value) -> Result<Vec<[f64; 2]>> {
	parse_nested(value, parse_position)
}

fn parse_nested<T>(value: &Value, parse: impl Fn(&Value) -> Result<T>) -> Result<Vec<T>> {
	value
		.as_array()
		.ok_or_else(|| anyhow!("coordinates must be an array, but got {value}"))?
		.iter()
		.map(parse)
		.collect()
}
