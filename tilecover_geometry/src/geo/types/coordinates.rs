use serde_json::{Value, json};
use std::fmt::Debug;
use tilecover_core::{CoverError, math::project};

/// A longitude/latitude pair, or any other `[x, y]` position.
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinates([f64; 2]);

impl Coordinates {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self([x, y])
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.0[0]
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.0[1]
	}

	#[must_use]
	pub fn as_array(&self) -> [f64; 2] {
		self.0
	}

	#[must_use]
	pub fn to_json(&self) -> Value {
		json!(self.0)
	}

	/// # Errors
	/// Returns [`CoverError::InvalidCoordinate`] if either component is NaN or infinite.
	pub fn verify(&self) -> Result<(), CoverError> {
		if self.0.iter().all(|v| v.is_finite()) {
			Ok(())
		} else {
			Err(CoverError::InvalidCoordinate(self.0))
		}
	}

	/// Fractional tile coordinates of this vertex at `level`.
	///
	/// Unlike a single point, a vertex is clamped to the western or eastern edge
	/// of the world instead of wrapping, so a segment running past the
	/// antimeridian never jumps across the whole grid.
	#[must_use]
	pub fn to_tile_space(&self, level: u8) -> [f64; 2] {
		project(self.0[0].clamp(-180.0, 180.0), self.0[1], level)
	}
}

impl<'a, T> From<&'a [T; 2]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Coordinates([value[0].into(), value[1].into()])
	}
}

impl From<[f64; 2]> for Coordinates {
	fn from(value: [f64; 2]) -> Self {
		Coordinates(value)
	}
}

impl From<(f64, f64)> for Coordinates {
	fn from(value: (f64, f64)) -> Self {
		Coordinates([value.0, value.1])
	}
}

impl From<Coordinates> for [f64; 2] {
	fn from(value: Coordinates) -> Self {
		value.0
	}
}

impl From<geo::Coord> for Coordinates {
	fn from(value: geo::Coord) -> Self {
		Coordinates([value.x, value.y])
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}
