use serde_json::Value;
use std::fmt::Debug;
use tilecover_core::CoverError;

/// Defines the basic interface for geometric primitives, providing common functionality
/// for all geometry types.
pub trait GeometryTrait: Debug + Clone + Sized {
	/// Verifies that every coordinate is a finite number.
	///
	/// Returns [`CoverError::InvalidCoordinate`] with the first offending coordinate.
	fn verify(&self) -> Result<(), CoverError>;

	/// Converts the geometry into a JSON representation of its coordinates,
	/// as used in the `coordinates` member of a GeoJSON geometry.
	fn to_coord_json(&self) -> Value;
}

/// Represents composite geometries that are collections of simpler elements.
/// For example, a polygon is made of rings, and a multilinestring is made of lines.
pub trait CompositeGeometryTrait<Item>: Debug + Clone {
	/// Returns an immutable reference to the inner collection of elements.
	fn as_vec(&self) -> &Vec<Item>;
}
