//! Web Mercator projection in the 256 px slippy-map tile scheme.

use crate::prelude::{LatLng, ScreenPoint, ScreenSize};
use std::f64::consts::PI;

pub const TILE_SIZE: f64 = 256.0;

/// Latitude limit of the square Web Mercator world.
pub const MAX_LATITUDE: f64 = 85.051_128_78;

fn world_size(zoom: f64) -> f64 {
    TILE_SIZE * 2.0f64.powf(zoom)
}

pub fn lng_to_x(lng: f64, zoom: f64) -> f64 {
    ((lng + 180.0) / 360.0) * world_size(zoom)
}

pub fn lat_to_y(lat: f64, zoom: f64) -> f64 {
    let lat_rad = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0 * world_size(zoom)
}

pub fn x_to_lng(x: f64, zoom: f64) -> f64 {
    (x / world_size(zoom)) * 360.0 - 180.0
}

pub fn y_to_lat(y: f64, zoom: f64) -> f64 {
    let n = PI - 2.0 * PI * y / world_size(zoom);
    n.sinh().atan().to_degrees()
}

/// World-pixel position of a coordinate at `zoom`.
pub fn project(position: LatLng, zoom: f64) -> (f64, f64) {
    (lng_to_x(position.lng, zoom), lat_to_y(position.lat, zoom))
}

/// Inverse of [`project`]. Latitude is clamped to the projectable range and
/// longitude wrapped into [-180, 180).
pub fn unproject(x: f64, y: f64, zoom: f64) -> LatLng {
    let size = world_size(zoom);
    let y = y.clamp(0.0, size);
    let lng = (x_to_lng(x, zoom) + 180.0).rem_euclid(360.0) - 180.0;
    LatLng::new(y_to_lat(y, zoom), lng)
}

/// Slippy-map tile address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoords {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl TileCoords {
    /// Tile containing `position` at integer zoom `z`.
    pub fn containing(position: LatLng, z: u32) -> Self {
        let (x, y) = project(position, f64::from(z));
        let last = (1u32 << z) - 1;
        Self {
            x: ((x / TILE_SIZE).floor().max(0.0) as u32).min(last),
            y: ((y / TILE_SIZE).floor().max(0.0) as u32).min(last),
            z,
        }
    }
}

/// A tile and the canvas position of its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePlacement {
    pub coords: TileCoords,
    pub origin: ScreenPoint,
}

/// Tiles covering a canvas of `size` centred on `center`. Columns wrap
/// around the antimeridian; rows outside the world are skipped.
pub fn visible_tiles(center: LatLng, z: u32, size: ScreenSize) -> Vec<TilePlacement> {
    let (cx, cy) = project(center, f64::from(z));
    let left = cx - f64::from(size.width) / 2.0;
    let top = cy - f64::from(size.height) / 2.0;
    let count = 1i64 << z;

    let first_col = (left / TILE_SIZE).floor() as i64;
    let end_col = ((left + f64::from(size.width)) / TILE_SIZE).ceil() as i64;
    let first_row = ((top / TILE_SIZE).floor() as i64).max(0);
    let end_row = (((top + f64::from(size.height)) / TILE_SIZE).ceil() as i64).min(count);

    let mut tiles = Vec::new();
    for row in first_row..end_row {
        for col in first_col..end_col {
            tiles.push(TilePlacement {
                coords: TileCoords {
                    x: col.rem_euclid(count) as u32,
                    y: row as u32,
                    z,
                },
                origin: ScreenPoint::new(
                    (col as f64 * TILE_SIZE - left) as f32,
                    (row as f64 * TILE_SIZE - top) as f32,
                ),
            });
        }
    }
    tiles
}
