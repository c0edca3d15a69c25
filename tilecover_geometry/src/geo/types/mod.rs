// This module defines the geometric types the cover engine works on: `PointGeometry`,
// `LineStringGeometry`, `RingGeometry`, `PolygonGeometry` and their multi-geometry
// counterparts. They share `GeometryTrait` (validation, JSON coordinates)
// and `CompositeGeometryTrait` (access to the inner collection).

mod coordinates;
mod linestring;
mod macros;
mod multi_linestring;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod ring;
mod traits;

pub use coordinates::*;
pub use linestring::*;
pub use multi_linestring::*;
pub use multi_point::*;
pub use multi_polygon::*;
pub use point::*;
pub use polygon::*;
pub use ring::*;
pub use traits::*;
