use anyhow::{Context, Result};
use log::{debug, info};
use rayon::prelude::*;
use serde_json::Value;
use std::{
	fs,
	io::{Read, Write},
	path::{Path, PathBuf},
};
use tilecover_core::{TileCoord, ZoomLimits};
use tilecover_geometry::{
	Geometry, TileOutline, TileSet, cover_leaves,
	geojson::{parse_geojson, tiles_to_feature_collection, tiles_to_json, tiles_to_quadkeys},
	merge_tiles,
};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON file containing a geometry, a feature or a feature collection.
	/// Use "-" to read from stdin.
	#[arg(verbatim_doc_comment)]
	input_file: String,

	/// minimum zoom level, complete groups of tiles are merged down to this level [default: max-zoom]
	#[arg(long, value_name = "int", display_order = 1)]
	min_zoom: Option<u8>,

	/// maximum zoom level, geometries are rasterized at this level
	#[arg(long, value_name = "int", display_order = 1)]
	max_zoom: u8,

	/// output format
	#[arg(long, short, value_enum, default_value_t = Format::Tiles, display_order = 2)]
	format: Format,

	/// write the result to a file instead of stdout
	#[arg(long, short, value_name = "FILE", display_order = 2)]
	output: Option<PathBuf>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
	/// JSON array of [x, y, z]
	Tiles,
	/// JSON array of quadkeys
	Quadkeys,
	/// FeatureCollection with one polygon per tile
	Geojson,
	/// Feature with the union of all tiles
	Outline,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let limits = ZoomLimits::new(arguments.min_zoom.unwrap_or(arguments.max_zoom), arguments.max_zoom)?;

	let json = read_input(&arguments.input_file)?;
	let geometries =
		parse_geojson(&json).with_context(|| format!("Failed to parse GeoJSON from {:?}", arguments.input_file))?;
	info!(
		"cover {} geometries from {:?} at zoom {}..={}",
		geometries.len(),
		arguments.input_file,
		limits.min_zoom(),
		limits.max_zoom()
	);

	let tiles = cover_geometries(&geometries, &limits)?;
	info!("found {} tiles", tiles.len());

	let mut text = format_tiles(&tiles, arguments.format).to_string();
	text.push('\n');
	write_output(arguments.output.as_deref(), &text)
}

/// Covers every geometry at `max_zoom` in parallel and merges the union once.
pub fn cover_geometries(geometries: &[Geometry], limits: &ZoomLimits) -> Result<Vec<TileCoord>> {
	let leaves = geometries
		.par_iter()
		.enumerate()
		.map(|(index, geometry)| -> Result<TileSet> {
			let tiles = cover_leaves(geometry, limits.max_zoom())
				.with_context(|| format!("Failed to cover geometry {index} ({})", geometry.type_name()))?;
			debug!("geometry {index}: {} leaf tiles", tiles.len());
			Ok(tiles)
		})
		.try_reduce(TileSet::new, |mut a, b| {
			a.union(b);
			Ok(a)
		})?;
	Ok(merge_tiles(leaves, limits))
}

fn format_tiles(tiles: &[TileCoord], format: Format) -> Value {
	match format {
		Format::Tiles => tiles_to_json(tiles),
		Format::Quadkeys => Value::from(tiles_to_quadkeys(tiles)),
		Format::Geojson => tiles_to_feature_collection(tiles),
		Format::Outline => TileOutline::from_iter(tiles).to_feature_json(),
	}
}

fn read_input(input: &str) -> Result<String> {
	if input == "-" {
		let mut json = String::new();
		std::io::stdin()
			.read_to_string(&mut json)
			.context("Failed to read GeoJSON from stdin")?;
		Ok(json)
	} else {
		fs::read_to_string(input).with_context(|| format!("Failed to read GeoJSON from {input:?}"))
	}
}

fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
	if let Some(path) = path {
		fs::write(path, text).with_context(|| format!("Failed to write result to {path:?}"))
	} else {
		std::io::stdout()
			.lock()
			.write_all(text.as_bytes())
			.context("Failed to write result to stdout")
	}
}
