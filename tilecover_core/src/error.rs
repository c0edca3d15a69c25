use thiserror::Error;

/// Errors that terminate a cover computation.
///
/// None of them is recovered from inside the library: a geometry that fails
/// produces no tiles at all, never a partial cover.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoverError {
	#[error("unsupported geometry type '{0}'")]
	UnsupportedGeometry(String),

	/// Two non-adjacent edges of a ring cross each other.
	/// Segments and crossing point are given as `[lon, lat]`.
	#[error("invalid ring: segment {a:?} crosses segment {b:?} at {at:?}")]
	InvalidRing {
		a: [[f64; 2]; 2],
		b: [[f64; 2]; 2],
		at: [f64; 2],
	},

	#[error("invalid zoom limits: {0}")]
	InvalidLimits(String),

	#[error("invalid coordinate {0:?}: longitude and latitude must be finite")]
	InvalidCoordinate([f64; 2]),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_messages() {
		assert_eq!(
			CoverError::UnsupportedGeometry("GeometryCollection".to_string()).to_string(),
			"unsupported geometry type 'GeometryCollection'"
		);
		assert_eq!(
			CoverError::InvalidLimits("min_zoom (5) must be <= max_zoom (3)".to_string()).to_string(),
			"invalid zoom limits: min_zoom (5) must be <= max_zoom (3)"
		);
		assert_eq!(
			CoverError::InvalidCoordinate([f64::NAN, 1.0]).to_string(),
			"invalid coordinate [NaN, 1.0]: longitude and latitude must be finite"
		);
	}

	#[test]
	fn invalid_ring_lists_segments() {
		let error = CoverError::InvalidRing {
			a: [[0.0, 0.0], [2.0, 2.0]],
			b: [[0.0, 2.0], [2.0, 0.0]],
			at: [1.0, 1.0],
		};
		assert_eq!(
			error.to_string(),
			"invalid ring: segment [[0.0, 0.0], [2.0, 2.0]] crosses segment [[0.0, 2.0], [2.0, 0.0]] at [1.0, 1.0]"
		);
	}

	#[test]
	fn converts_into_anyhow_and_back() {
		let error: anyhow::Error = CoverError::UnsupportedGeometry("Circle".to_string()).into();
		assert_eq!(
			error.downcast_ref::<CoverError>(),
			Some(&CoverError::UnsupportedGeometry("Circle".to_string()))
		);
	}
}
