//! assetc - Asset source emitter
//!
//! The last stage of an asset build: turns tile groups, images and audio
//! clips into a C/C++ declaration file and definition file that a firmware
//! build compiles and links.

pub mod asset;
pub mod audio;
pub mod cli;
pub mod emit;
pub mod error;
pub mod manifest;
pub mod output;
pub mod report;
pub mod validation;

pub use asset::{Group, Image, ImageKind, Sound, Tile, TileGrid, TilePool};
pub use audio::{AudioEncoder, BuiltinEncoders, EncodedAudio, EncoderFactory};
pub use emit::{
    array_literal_lines, guard_name, string_literal_lines, DeclarationEmitter, DefinitionEmitter,
    EmissionSession, Emitter, Format,
};
pub use error::{EmitError, Result};
pub use manifest::Manifest;
pub use report::{Diagnostic, EmitReport, Severity};
pub use validation::validate_assets;
