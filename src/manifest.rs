//! Asset manifest parsing.
//!
//! The manifest is how the analysis stage hands its results to the emitter:
//! output paths, groups with their pooled tiles, loadstream and images, and
//! the sounds to transcode. YAML and JSON are both accepted.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::asset::{Group, Image, ImageKind, Sound, Tile, TileGrid, TilePool};
use crate::asset::{DEFAULT_CODEC, DEFAULT_QUALITY};
use crate::error::{EmitError, Result};

/// Conventional manifest filename.
pub const MANIFEST_FILENAME: &str = "assets.yaml";

/// Emission manifest loaded from assets.yaml (or .json).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Declaration file to write.
    #[serde(default = "default_header")]
    pub header: PathBuf,

    /// Definition file to write.
    #[serde(default = "default_source")]
    pub source: PathBuf,

    pub groups: Vec<GroupEntry>,

    pub sounds: Vec<SoundEntry>,

    /// Directory relative paths resolve against.
    #[serde(skip)]
    pub root: PathBuf,
}

fn default_header() -> PathBuf {
    PathBuf::from("assets.gen.h")
}

fn default_source() -> PathBuf {
    PathBuf::from("assets.gen.cpp")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            header: default_header(),
            source: default_source(),
            groups: Vec::new(),
            sounds: Vec::new(),
            root: PathBuf::new(),
        }
    }
}

/// A group as listed in the manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupEntry {
    pub name: String,

    pub signature: Signature,

    /// Pool tile keys in index order.
    #[serde(default)]
    pub tiles: Vec<String>,

    /// Loadstream bytes as a hex string.
    #[serde(default)]
    pub loadstream: String,

    #[serde(default)]
    pub images: Vec<ImageEntry>,
}

/// Group signature, written either as an integer or a hex string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Signature {
    Value(u64),
    Text(String),
}

impl Signature {
    pub fn resolve(&self) -> Result<u64> {
        match self {
            Signature::Value(v) => Ok(*v),
            Signature::Text(s) => {
                let digits = s.trim().trim_start_matches("0x").trim_start_matches("0X");
                u64::from_str_radix(digits, 16).map_err(|e| EmitError::Parse {
                    message: format!("Invalid signature '{}': {}", s, e),
                    help: Some("Use an integer or a hex string such as 0x1f2e3d4c".to_string()),
                })
            }
        }
    }
}

/// An image as listed in the manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageEntry {
    pub name: String,

    #[serde(default)]
    pub pinned: bool,

    #[serde(default)]
    pub frames: Vec<FrameEntry>,
}

/// One frame: row-major tile keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameEntry {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<String>,
}

/// A sound as listed in the manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundEntry {
    pub name: String,

    pub file: PathBuf,

    #[serde(default = "default_codec")]
    pub encode: String,

    #[serde(default = "default_quality")]
    pub quality: u32,
}

fn default_codec() -> String {
    DEFAULT_CODEC.to_string()
}

fn default_quality() -> u32 {
    DEFAULT_QUALITY
}

impl Manifest {
    /// Load a manifest, choosing JSON or YAML by extension.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| EmitError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        let mut manifest = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::parse_json(&content)?,
            _ => Self::parse(&content)?,
        };
        manifest.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(manifest)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| EmitError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check assets.yaml syntax".to_string()),
        })
    }

    /// Parse manifest from JSON string.
    pub fn parse_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| EmitError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check the JSON manifest syntax".to_string()),
        })
    }

    /// Resolve a manifest-relative path.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Build the asset graph described by this manifest.
    pub fn into_assets(&self) -> Result<(Vec<Group>, Vec<Sound>)> {
        let groups = self
            .groups
            .iter()
            .map(GroupEntry::to_group)
            .collect::<Result<Vec<_>>>()?;

        let sounds = self
            .sounds
            .iter()
            .map(|s| {
                Sound::new(&s.name, self.resolve(&s.file)).with_codec(&s.encode, s.quality)
            })
            .collect();

        Ok((groups, sounds))
    }
}

impl GroupEntry {
    fn to_group(&self) -> Result<Group> {
        let loadstream = parse_hex(&self.loadstream).map_err(|message| EmitError::Parse {
            message: format!("Group '{}' loadstream: {}", self.name, message),
            help: Some("Write the loadstream as pairs of hex digits".to_string()),
        })?;

        let pool = TilePool::from_tiles(self.tiles.iter().map(|t| Tile::new(t.as_str())));
        let mut group = Group::new(&self.name, self.signature.resolve()?, pool, loadstream);

        for entry in &self.images {
            let frames = entry
                .frames
                .iter()
                .map(|f| {
                    let tiles = f.tiles.iter().map(|t| Tile::new(t.as_str())).collect();
                    TileGrid::new(f.width, f.height, tiles).map_err(|e| EmitError::Parse {
                        message: format!("Image '{}': {}", entry.name, e),
                        help: None,
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            group.images.push(Image::new(
                &entry.name,
                ImageKind::from_pinned(entry.pinned),
                frames,
            ));
        }

        Ok(group)
    }
}

/// Decode a hex string, ignoring whitespace.
pub fn parse_hex(text: &str) -> std::result::Result<Vec<u8>, String> {
    let digits: Vec<u8> = text
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();

    if digits.len() % 2 != 0 {
        return Err(format!("odd number of hex digits ({})", digits.len()));
    }

    digits
        .chunks(2)
        .map(|pair| {
            let s = std::str::from_utf8(pair).map_err(|e| e.to_string())?;
            u8::from_str_radix(s, 16).map_err(|_| format!("invalid hex byte '{}'", s))
        })
        .collect()
}
