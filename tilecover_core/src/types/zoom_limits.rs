use crate::{CoverError, math::MAX_LEVEL};

/// Zoom range of a cover.
///
/// `max_zoom` is the level geometries are rasterized at; the span down to
/// `min_zoom` is how far sibling tiles may be merged into parents.
/// A `ZoomLimits` value always satisfies `min_zoom <= max_zoom <= 31`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZoomLimits {
	min_zoom: u8,
	max_zoom: u8,
}

impl ZoomLimits {
	/// # Errors
	/// Returns [`CoverError::InvalidLimits`] if `min_zoom > max_zoom` or `max_zoom > 31`.
	pub fn new(min_zoom: u8, max_zoom: u8) -> Result<ZoomLimits, CoverError> {
		if max_zoom > MAX_LEVEL {
			return Err(CoverError::InvalidLimits(format!(
				"max_zoom ({max_zoom}) must be <= {MAX_LEVEL}"
			)));
		}
		if min_zoom > max_zoom {
			return Err(CoverError::InvalidLimits(format!(
				"min_zoom ({min_zoom}) must be <= max_zoom ({max_zoom})"
			)));
		}
		Ok(ZoomLimits { min_zoom, max_zoom })
	}

	/// Limits for a cover at a single zoom level, without merging.
	///
	/// # Errors
	/// Returns [`CoverError::InvalidLimits`] if `zoom > 31`.
	pub fn single(zoom: u8) -> Result<ZoomLimits, CoverError> {
		ZoomLimits::new(zoom, zoom)
	}

	#[must_use]
	pub fn min_zoom(&self) -> u8 {
		self.min_zoom
	}

	#[must_use]
	pub fn max_zoom(&self) -> u8 {
		self.max_zoom
	}

	/// Whether the range spans more than one level, i.e. whether merging applies.
	#[must_use]
	pub fn is_range(&self) -> bool {
		self.min_zoom < self.max_zoom
	}
}
