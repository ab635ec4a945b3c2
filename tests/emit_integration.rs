//! End-to-end emission of a full asset batch into both output files.

use std::fs;
use std::path::Path;

use assetc::cli::build::emit_files;
use assetc::{
    AudioEncoder, DeclarationEmitter, DefinitionEmitter, EmissionSession, EncodedAudio,
    EncoderFactory, Group, Image, ImageKind, Manifest, Sound, Tile, TileGrid, TilePool,
};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

/// Encodes every file to the bytes of its file stem; "silent" yields nothing.
struct StemFactory;

struct StemEncoder;

impl AudioEncoder for StemEncoder {
    fn encode_file(&mut self, path: &Path) -> assetc::Result<EncodedAudio> {
        let stem = path.file_stem().unwrap().to_string_lossy().into_owned();
        let data = if stem == "silent" {
            Vec::new()
        } else {
            stem.into_bytes()
        };
        Ok(EncodedAudio { data, kbps: 12.5 })
    }

    fn type_symbol(&self) -> &str {
        "_SYS_STEM"
    }

    fn display_name(&self) -> &str {
        "Stem"
    }
}

impl EncoderFactory for StemFactory {
    fn create(&self, _codec: &str, _quality: u32) -> Option<Box<dyn AudioEncoder>> {
        Some(Box::new(StemEncoder))
    }
}

fn batch() -> (Vec<Group>, Vec<Sound>) {
    let pool = TilePool::from_tiles(["sky", "grass", "coin"]);
    let background = TileGrid::new(
        2,
        1,
        vec![Tile::new("sky"), Tile::new("grass")],
    )
    .unwrap();
    let coin = TileGrid::new(1, 1, vec![Tile::new("coin")]).unwrap();

    let group = Group::new("Level1", 0xabcdef, pool, vec![0x10, 0x20])
        .with_image(Image::new("Background", ImageKind::Grid, vec![background]))
        .with_image(Image::new("Coin", ImageKind::Pinned, vec![coin]));

    let sounds = vec![
        Sound::new("Jump", "sfx/jump.wav"),
        Sound::new("Nothing", "sfx/silent.wav"),
        Sound::new("Coin_sfx", "sfx/ding.wav"),
    ];

    (vec![group], sounds)
}

#[test]
fn test_full_definition_file() {
    let (groups, sounds) = batch();
    let mut buf = Vec::new();

    let mut session =
        EmissionSession::new(&mut buf, DefinitionEmitter::with_encoders(StemFactory)).unwrap();
    session.emit_all(&groups, &sounds).unwrap();
    let report = session.finish().unwrap();

    let expected = r#"/*
 * Generated by assetc. Do not edit by hand.
 */

#include <sifteo/asset.h>

static const struct {
    struct _SYSAssetGroupHeader hdr;
    uint8_t data[2];
} Level1_data = {{
    /* hdrSize   */ sizeof(struct _SYSAssetGroupHeader),
    /* reserved  */ 0,
    /* numTiles  */ 3,
    /* dataSize  */ 2,
    /* signature */ 0x0000000000abcdef,
}, {
    0x10,0x20,
}};

Sifteo::AssetGroup Level1 = {{ &Level1_data.hdr, Level1.cubes }};

static const uint16_t Background_tiles[] = {
    // Frame 0
    0x0000,0x0001,
};

extern const Sifteo::AssetImage Background = {
    /* width   */ 2,
    /* height  */ 1,
    /* frames  */ 1,
    /* tiles   */ Background_tiles,
};


extern const Sifteo::PinnedAssetImage Coin = {
    /* width   */ 1,
    /* height  */ 1,
    /* frames  */ 1,
    /* index   */ 2,
};

static const char Jump_data[] =
"jump"
;

extern const Sifteo::AssetAudio Jump = {{
    /* type      */ _SYS_STEM,
    /* reserved0 */ 0,
    /* reserved1 */ 0,
    /* dataSize  */ 4,
    /* data      */ (const uint8_t *) Jump_data
}};

static const char Coin_sfx_data[] =
"ding"
;

extern const Sifteo::AssetAudio Coin_sfx = {{
    /* type      */ _SYS_STEM,
    /* reserved0 */ 0,
    /* reserved1 */ 0,
    /* dataSize  */ 4,
    /* data      */ (const uint8_t *) Coin_sfx_data
}};

"#;
    assert_eq!(String::from_utf8(buf).unwrap(), expected);

    assert_eq!(report.error_count(), 1);
    assert!(report.mentions("Nothing"));
}

#[test]
fn test_full_declaration_file() {
    let (groups, sounds) = batch();
    let mut buf = Vec::new();

    let mut session =
        EmissionSession::new(&mut buf, DeclarationEmitter::new("build/assets.gen.h")).unwrap();
    session.emit_all(&groups, &sounds).unwrap();
    let report = session.finish().unwrap();

    let expected = r#"/*
 * Generated by assetc. Do not edit by hand.
 */

#include <sifteo/asset.h>

#ifndef _BUILD_ASSETS_GEN_H
#define _BUILD_ASSETS_GEN_H

extern Sifteo::AssetGroup Level1;
extern const Sifteo::AssetImage Background;
extern const Sifteo::PinnedAssetImage Coin;
extern const Sifteo::AssetAudio Jump;
extern const Sifteo::AssetAudio Nothing;
extern const Sifteo::AssetAudio Coin_sfx;

#endif  // _BUILD_ASSETS_GEN_H
"#;
    assert_eq!(String::from_utf8(buf).unwrap(), expected);
    assert!(report.is_ok());
}

#[test]
fn test_emit_files_from_manifest() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("sfx")).unwrap();
    fs::write(dir.path().join("sfx/click.bin"), [0u8, 0x7f, b'?']).unwrap();

    let manifest_path = dir.path().join("assets.yaml");
    fs::write(
        &manifest_path,
        r#"
header: out/assets.gen.h
source: out/assets.gen.cpp
groups:
  - name: Ui
    signature: "0x1"
    tiles: [blank]
    loadstream: "ff"
    images:
      - name: Cursor
        pinned: true
        frames:
          - { width: 1, height: 1, tiles: [blank] }
sounds:
  - name: Click
    file: sfx/click.bin
    encode: raw
"#,
    )
    .unwrap();

    let manifest = Manifest::load(&manifest_path).unwrap();
    let (groups, sounds) = manifest.into_assets().unwrap();
    let header = manifest.resolve(&manifest.header);
    let source = manifest.resolve(&manifest.source);

    let report = emit_files(&header, &manifest.header, &source, &groups, &sounds).unwrap();
    assert!(report.is_ok(), "{:?}", report);

    let header_text = fs::read_to_string(&header).unwrap();
    assert!(header_text.contains("#ifndef _OUT_ASSETS_GEN_H\n"));
    assert!(header_text.ends_with("#endif  // _OUT_ASSETS_GEN_H\n"));

    let source_text = fs::read_to_string(&source).unwrap();
    assert!(source_text.contains("\"\\000\\177\\077\"\n"));
    assert!(source_text.contains("/* type      */ _SYS_PCM,"));
    assert!(source_text.contains("/* dataSize  */ 3,"));
}

#[test]
fn test_unwritable_destination_is_an_error() {
    let dir = tempdir().unwrap();
    // A directory cannot be opened as an output file
    let err = EmissionSession::create(dir.path(), DefinitionEmitter::new());
    assert!(matches!(err, Err(assetc::EmitError::Open { .. })));
}
