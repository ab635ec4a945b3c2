//! Asset groups.

use super::{Image, TilePool};

/// Tiles combined into one loadable unit, plus the images drawn from them.
#[derive(Debug, Clone)]
pub struct Group {
    pub name: String,
    /// Content hash of the group payload.
    pub signature: u64,
    pub pool: TilePool,
    /// Serialized tile payload loaded at runtime.
    pub loadstream: Vec<u8>,
    /// Images referencing this group's pool, in the order the analysis stage supplied.
    pub images: Vec<Image>,
}

impl Group {
    pub fn new(name: impl Into<String>, signature: u64, pool: TilePool, loadstream: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            signature,
            pool,
            loadstream,
            images: Vec::new(),
        }
    }

    pub fn with_image(mut self, image: Image) -> Self {
        self.images.push(image);
        self
    }

    /// Name of the private header/payload record.
    pub fn data_symbol(&self) -> String {
        format!("{}_data", self.name)
    }
}
