//! Translation unit emission.
//!
//! Every asset becomes a private data blob plus a public record wrapping it:
//!
//! - groups: header/payload struct and an `AssetGroup`
//! - pinned images: a `PinnedAssetImage` holding one pool index
//! - grid images: a `uint16_t` tile array and an `AssetImage`
//! - sounds: a string literal blob and an `AssetAudio`
//!
//! Field order and the `/* name */` annotations match the runtime's record
//! layouts and must not change.

use std::fmt::Write;

use crate::asset::{Group, Image, ImageKind, Sound, Tile, TileGrid};
use crate::audio::{BuiltinEncoders, EncoderFactory};
use crate::error::{EmitError, Result};

use super::encode::{array_literal_lines, string_literal_lines};
use super::{Emitter, Format};

/// Emits definitions, transcoding sounds through an [`EncoderFactory`].
pub struct DefinitionEmitter<F = BuiltinEncoders> {
    encoders: F,
    format: Format,
}

impl DefinitionEmitter<BuiltinEncoders> {
    pub fn new() -> Self {
        Self::with_encoders(BuiltinEncoders)
    }
}

impl Default for DefinitionEmitter<BuiltinEncoders> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: EncoderFactory> DefinitionEmitter<F> {
    pub fn with_encoders(encoders: F) -> Self {
        Self {
            encoders,
            format: Format::DEFAULT,
        }
    }

    fn pinned_image(&self, group: &Group, image: &Image) -> Result<String> {
        let first = image
            .frames
            .first()
            .ok_or_else(|| EmitError::PinnedWithoutFrames {
                image: image.name.clone(),
            })?;
        let tile = first.tile(0, 0).ok_or_else(|| EmitError::MissingTile {
            image: image.name.clone(),
            frame: 0,
            x: 0,
            y: 0,
        })?;
        let index = tile_index(group, image, tile)?;
        let ind = self.format.indent;

        let mut out = String::new();
        writeln!(out)?;
        writeln!(out, "extern const Sifteo::PinnedAssetImage {} = {{", image.name)?;
        writeln!(out, "{ind}/* width   */ {},", first.width())?;
        writeln!(out, "{ind}/* height  */ {},", first.height())?;
        writeln!(out, "{ind}/* frames  */ {},", image.frame_count())?;
        writeln!(out, "{ind}/* index   */ {},", index)?;
        writeln!(out, "}};")?;
        writeln!(out)?;
        Ok(out)
    }

    fn grid_image(&self, group: &Group, image: &Image) -> Result<String> {
        let width = image.width();
        let height = image.height();
        let ind = self.format.indent;

        let mut out = String::new();
        writeln!(out)?;
        writeln!(out, "static const uint16_t {}_tiles[] = {{", image.name)?;

        for (f, grid) in image.frames.iter().enumerate() {
            check_frame_size(image, f, grid, width, height)?;
            writeln!(out, "{ind}// Frame {}", f)?;

            for y in 0..height {
                out.push_str(ind);
                for x in 0..width {
                    let tile = grid.tile(x, y).ok_or_else(|| EmitError::MissingTile {
                        image: image.name.clone(),
                        frame: f,
                        x,
                        y,
                    })?;
                    write!(out, "0x{:04x},", tile_index(group, image, tile)?)?;
                }
                writeln!(out)?;
            }
        }

        writeln!(out, "}};")?;
        writeln!(out)?;
        writeln!(out, "extern const Sifteo::AssetImage {} = {{", image.name)?;
        writeln!(out, "{ind}/* width   */ {},", width)?;
        writeln!(out, "{ind}/* height  */ {},", height)?;
        writeln!(out, "{ind}/* frames  */ {},", image.frame_count())?;
        writeln!(out, "{ind}/* tiles   */ {}_tiles,", image.name)?;
        writeln!(out, "}};")?;
        writeln!(out)?;
        Ok(out)
    }
}

fn check_frame_size(
    image: &Image,
    frame: usize,
    grid: &TileGrid,
    width: usize,
    height: usize,
) -> Result<()> {
    if grid.width() != width || grid.height() != height {
        return Err(EmitError::FrameSize {
            image: image.name.clone(),
            frame,
            width,
            height,
            actual_width: grid.width(),
            actual_height: grid.height(),
        });
    }
    Ok(())
}

/// Resolve a tile to its 16-bit slot in the group's pool.
fn tile_index(group: &Group, image: &Image, tile: &Tile) -> Result<u16> {
    let index = group
        .pool
        .index(tile)
        .ok_or_else(|| EmitError::TileNotPooled {
            group: group.name.clone(),
            image: image.name.clone(),
            tile: tile.to_string(),
        })?;

    u16::try_from(index).map_err(|_| EmitError::IndexOverflow {
        image: image.name.clone(),
        index,
    })
}

impl<F: EncoderFactory> Emitter for DefinitionEmitter<F> {
    fn group(&mut self, group: &Group) -> Result<String> {
        let name = &group.name;
        let size = group.loadstream.len();
        let ind = self.format.indent;

        let mut out = String::new();
        writeln!(out)?;
        writeln!(out, "static const struct {{")?;
        writeln!(out, "{ind}struct _SYSAssetGroupHeader hdr;")?;
        writeln!(out, "{ind}uint8_t data[{size}];")?;
        writeln!(out, "}} {} = {{{{", group.data_symbol())?;
        writeln!(out, "{ind}/* hdrSize   */ sizeof(struct _SYSAssetGroupHeader),")?;
        writeln!(out, "{ind}/* reserved  */ 0,")?;
        writeln!(out, "{ind}/* numTiles  */ {},", group.pool.len())?;
        writeln!(out, "{ind}/* dataSize  */ {size},")?;
        writeln!(out, "{ind}/* signature */ 0x{:016x},", group.signature)?;
        writeln!(out, "}}, {{")?;
        for line in array_literal_lines(&group.loadstream, &self.format) {
            writeln!(out, "{line}")?;
        }
        writeln!(out, "}}}};")?;
        writeln!(out)?;
        writeln!(
            out,
            "Sifteo::AssetGroup {name} = {{{{ &{}.hdr, {name}.cubes }}}};",
            group.data_symbol()
        )?;
        Ok(out)
    }

    fn image(&mut self, group: &Group, image: &Image) -> Result<String> {
        match image.kind {
            ImageKind::Pinned => self.pinned_image(group, image),
            ImageKind::Grid => self.grid_image(group, image),
        }
    }

    fn sound(&mut self, sound: &Sound) -> Result<String> {
        let mut encoder = self
            .encoders
            .create(&sound.codec, sound.quality)
            .ok_or_else(|| EmitError::UnknownCodec {
                sound: sound.name.clone(),
                codec: sound.codec.clone(),
            })?;

        let encoded = encoder
            .encode_file(&sound.file)
            .map_err(|e| EmitError::Encode {
                sound: sound.name.clone(),
                file: sound.file.clone(),
                message: e.to_string(),
            })?;

        tracing::info!(
            "{:>20}: {:7.2} kiB, {:6.2} kbps {} ({})",
            sound.name,
            encoded.data.len() as f32 / 1024.0,
            encoded.kbps,
            encoder.display_name(),
            sound.file.display()
        );

        if encoded.data.is_empty() {
            return Err(EmitError::EmptyAudio {
                sound: sound.name.clone(),
                file: sound.file.clone(),
            });
        }

        let ind = self.format.indent;
        let data_symbol = sound.data_symbol();

        let mut out = String::new();
        writeln!(out, "static const char {data_symbol}[] =")?;
        for line in string_literal_lines(&encoded.data, &self.format) {
            writeln!(out, "{line}")?;
        }
        writeln!(out, ";")?;
        writeln!(out)?;
        writeln!(out, "extern const Sifteo::AssetAudio {} = {{{{", sound.name)?;
        writeln!(out, "{ind}/* type      */ {},", encoder.type_symbol())?;
        writeln!(out, "{ind}/* reserved0 */ 0,")?;
        writeln!(out, "{ind}/* reserved1 */ 0,")?;
        writeln!(out, "{ind}/* dataSize  */ {},", encoded.data.len())?;
        writeln!(out, "{ind}/* data      */ (const uint8_t *) {data_symbol}")?;
        writeln!(out, "}}}};")?;
        writeln!(out)?;
        Ok(out)
    }
}
