//! The tile cover engine: which tiles of the Web Mercator pyramid does a geometry touch?
//!
//! Geometries are rasterized at `max_zoom` into a [`TileSet`] of leaf tiles.
//! Points and multipoints map to the tiles containing them, lines are walked
//! through the grid and polygons are filled row by row. If the zoom range spans
//! several levels the leaves are then merged into parents where possible.

mod line;
mod merge;
mod polygon;
mod tile_set;
mod traversal;
mod validate;

pub use merge::merge_tiles;
pub use tile_set::TileSet;

use crate::{CompositeGeometryTrait, Geometry, LineStringGeometry, PolygonGeometry};
use line::LineRasterizer;
use log::debug;
use tilecover_core::{CoverError, TileCoord, ZoomLimits};

/// Computes the tiles covering `geometry`, sorted by level, then y, then x.
///
/// # Errors
///
/// Fails with [`CoverError::InvalidCoordinate`] for non-finite coordinates and
/// with [`CoverError::InvalidRing`] for self-intersecting polygon rings.
///
/// # Examples
///
/// ```
/// use tilecover_core::{TileCoord, ZoomLimits};
/// use tilecover_geometry::{Geometry, cover};
///
/// let line = Geometry::new_line_string(vec![[0.5, 0.5], [1.5, 0.5]]);
/// let tiles = cover(&line, &ZoomLimits::single(8).unwrap()).unwrap();
/// assert_eq!(tiles, vec![TileCoord::new(8, 128, 127).unwrap(), TileCoord::new(8, 129, 127).unwrap()]);
/// ```
pub fn cover(geometry: &Geometry, limits: &ZoomLimits) -> Result<Vec<TileCoord>, CoverError> {
	let leaves = cover_leaves(geometry, limits.max_zoom())?;
	debug!(
		"{} at level {}: {} leaf tiles",
		geometry.type_name(),
		limits.max_zoom(),
		leaves.len()
	);
	if limits.is_range() {
		let tiles = merge_tiles(leaves, limits);
		debug!("merged down to level {}: {} tiles", limits.min_zoom(), tiles.len());
		Ok(tiles)
	} else {
		Ok(leaves.into_sorted_vec())
	}
}

/// Computes the leaf tiles covering `geometry` at `level`, without merging.
///
/// Useful to union the covers of many geometries before calling [`merge_tiles`] once.
///
/// # Errors
///
/// See [`cover`].
pub fn cover_leaves(geometry: &Geometry, level: u8) -> Result<TileSet, CoverError> {
	geometry.verify()?;
	Ok(match geometry {
		Geometry::Point(point) => TileSet::from_iter([TileCoord::from_geo(point.x(), point.y(), level)]),
		Geometry::MultiPoint(points) => points
			.as_vec()
			.iter()
			.map(|point| TileCoord::from_geo(point.x(), point.y(), level))
			.collect(),
		Geometry::LineString(line) => cover_lines([line], level),
		Geometry::MultiLineString(lines) => cover_lines(lines.as_vec(), level),
		Geometry::Polygon(polygon) => cover_polygons([polygon], level)?,
		Geometry::MultiPolygon(polygons) => cover_polygons(polygons.as_vec(), level)?,
	})
}

fn cover_lines<'a>(lines: impl IntoIterator<Item = &'a LineStringGeometry>, level: u8) -> TileSet {
	let mut raster = LineRasterizer::new(level);
	for line in lines {
		let points = line.as_vec().iter().map(|c| c.to_tile_space(level)).collect::<Vec<_>>();
		raster.add_line(&points);
	}
	raster.into_tiles()
}

fn cover_polygons<'a>(
	polygons: impl IntoIterator<Item = &'a PolygonGeometry>,
	level: u8,
) -> Result<TileSet, CoverError> {
	let mut tiles = TileSet::new();
	for polygon in polygons {
		tiles.union(polygon::cover_polygon(polygon, level)?);
	}
	Ok(tiles)
}
