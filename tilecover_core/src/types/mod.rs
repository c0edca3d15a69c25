//! Contains tile coordinates, identity keys, quadkeys and zoom limits.

mod quadkey;

mod tile_coord;
pub use tile_coord::*;

mod tile_identity;
pub use tile_identity::*;

mod zoom_limits;
pub use zoom_limits::*;
