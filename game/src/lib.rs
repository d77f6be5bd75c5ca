pub mod direction;
pub mod error;
pub mod levels;
pub mod map;
pub mod position;
pub mod tile;

pub use direction::Dir8;
pub use error::MapError;
pub use map::{Map, MapSnapshot, MoveEffect, PlayState};
pub use position::{Coordinates, CoordinatesDelta};
pub use tile::{ContentSet, Tile, TileContent};
