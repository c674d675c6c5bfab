pub mod common;
pub mod tile;

pub use common::{Anchor, EntityId, Position, TileId};
pub use tile::{Tile, TileState};
