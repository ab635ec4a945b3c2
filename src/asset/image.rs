//! Image assets.

use std::fmt;

use super::TileGrid;

/// How an image is laid out in the generated source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    /// A single pool index stands in for the whole tile array.
    Pinned,
    /// A full 16-bit tile index array, one block per frame.
    Grid,
}

impl ImageKind {
    pub fn from_pinned(pinned: bool) -> Self {
        if pinned {
            ImageKind::Pinned
        } else {
            ImageKind::Grid
        }
    }

    /// Runtime record type in the `Sifteo` namespace.
    pub fn class_name(self) -> &'static str {
        match self {
            ImageKind::Pinned => "PinnedAssetImage",
            ImageKind::Grid => "AssetImage",
        }
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageKind::Pinned => write!(f, "pinned"),
            ImageKind::Grid => write!(f, "grid"),
        }
    }
}

/// A sprite or graphic made of one or more frames.
#[derive(Debug, Clone)]
pub struct Image {
    pub name: String,
    pub kind: ImageKind,
    pub frames: Vec<TileGrid>,
}

impl Image {
    pub fn new(name: impl Into<String>, kind: ImageKind, frames: Vec<TileGrid>) -> Self {
        Self {
            name: name.into(),
            kind,
            frames,
        }
    }

    /// Width in tiles, taken from frame 0.
    pub fn width(&self) -> usize {
        self.frames.first().map_or(0, TileGrid::width)
    }

    /// Height in tiles, taken from frame 0.
    pub fn height(&self) -> usize {
        self.frames.first().map_or(0, TileGrid::height)
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}
