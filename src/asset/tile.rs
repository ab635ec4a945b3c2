//! Tiles, tile pools and per-frame tile grids.

use std::fmt;

use indexmap::IndexSet;

use crate::error::{EmitError, Result};

/// Content key of one distinct tile.
///
/// The pooling stage identifies tiles by their pixel content; the emitter only
/// needs equality and hashing, so a tile is carried as its key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tile(String);

impl Tile {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn key(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Tile {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

/// Deduplicated, insertion-ordered set of tiles.
///
/// A tile's index is its position of first insertion and never changes.
#[derive(Debug, Clone, Default)]
pub struct TilePool {
    tiles: IndexSet<Tile>,
}

impl TilePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pool from tiles in order, ignoring repeats.
    pub fn from_tiles<I, T>(tiles: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Tile>,
    {
        Self {
            tiles: tiles.into_iter().map(Into::into).collect(),
        }
    }

    /// Add a tile, returning its stable index.
    pub fn insert(&mut self, tile: Tile) -> usize {
        self.tiles.insert_full(tile).0
    }

    /// Pool slot of a tile, if pooled.
    pub fn index(&self, tile: &Tile) -> Option<usize> {
        self.tiles.get_index_of(tile)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

/// One frame's arrangement of tiles, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Create a grid; `tiles` must hold exactly `width * height` entries.
    pub fn new(width: usize, height: usize, tiles: Vec<Tile>) -> Result<Self> {
        if tiles.len() != width * height {
            return Err(EmitError::Parse {
                message: format!(
                    "Tile grid is {}x{} but has {} tiles",
                    width,
                    height,
                    tiles.len()
                ),
                help: Some("List exactly width * height tiles, row by row".to_string()),
            });
        }

        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Tile at a grid cell, or `None` outside the grid.
    pub fn tile(&self, x: usize, y: usize) -> Option<&Tile> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.tiles.get(y * self.width + x)
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}
