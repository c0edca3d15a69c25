//! Web Mercator projection between longitude/latitude and fractional tile space.
//!
//! At zoom level `z` the world spans `[0, 2^z]` on both axes, `x` growing eastwards
//! and `y` growing southwards. The integer part of a fractional coordinate is the
//! tile index, the fractional part the offset inside that tile.

use std::f64::consts::PI;

/// Northern and southern limit of the Web Mercator projection in degrees.
pub const MAX_MERCATOR_LAT: f64 = 85.051_128_779_806_59;

/// Highest zoom level that can be addressed. Limited by the 5 bits reserved
/// for the level in [`crate::TileIdentity`].
pub const MAX_LEVEL: u8 = 31;

/// Number of tiles along one axis at `level`, as float.
#[must_use]
pub fn world_size(level: u8) -> f64 {
	2.0f64.powi(i32::from(level))
}

/// Project longitude/latitude in degrees to fractional tile coordinates at `level`.
///
/// Latitudes are clamped to the Mercator limits. Longitudes outside `[-180, 180]`
/// wrap around the antimeridian, while exactly `180` stays on the eastern edge.
///
/// # Examples
///
/// ```
/// use tilecover_core::math::project;
///
/// assert_eq!(project(0.0, 0.0, 1), [1.0, 1.0]);
/// assert_eq!(project(180.0, 0.0, 2)[0], 4.0);
/// ```
#[must_use]
pub fn project(lon: f64, lat: f64, level: u8) -> [f64; 2] {
	let size = world_size(level);

	let mut x = size * (lon / 360.0 + 0.5);
	if !(0.0..=size).contains(&x) {
		x = x.rem_euclid(size);
	}

	let sin = lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT).to_radians().sin();
	let y = size * (0.5 - 0.25 * ((1.0 + sin) / (1.0 - sin)).ln() / PI);

	[x, y.clamp(0.0, size)]
}

/// Inverse of [`project`]: fractional tile coordinates at `level` to `[lon, lat]` in degrees.
///
/// # Examples
///
/// ```
/// use tilecover_core::math::unproject;
///
/// let [lon, lat] = unproject(1.0, 1.0, 1);
/// assert_eq!(lon, 0.0);
/// assert!(lat.abs() < 1e-12);
/// ```
#[must_use]
pub fn unproject(x: f64, y: f64, level: u8) -> [f64; 2] {
	let size = world_size(level);
	[
		(x / size - 0.5) * 360.0,
		(PI * (1.0 - 2.0 * y / size)).sinh().atan().to_degrees(),
	]
}
