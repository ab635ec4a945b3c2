//! Asset graph handed to the emitter by the analysis stage.
//!
//! - `Group` - a tile pool, its loadstream and the images drawn from it
//! - `Image` - pinned or grid-based frames of pool tiles
//! - `Sound` - an audio clip to transcode
//!
//! Emission only reads these types.

mod group;
mod image;
mod sound;
mod tile;

pub use group::Group;
pub use image::{Image, ImageKind};
pub use sound::{Sound, DEFAULT_CODEC, DEFAULT_QUALITY};
pub use tile::{Tile, TileGrid, TilePool};
