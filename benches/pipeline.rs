//! Benchmarks for the emission pipeline.

use std::path::Path;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use assetc::{
    array_literal_lines, string_literal_lines, AudioEncoder, DefinitionEmitter, EmissionSession,
    EncodedAudio, EncoderFactory, Format, Group, Image, ImageKind, Sound, Tile, TileGrid,
    TilePool,
};

fn payload(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 % 251) as u8).collect()
}

// -- Encoder benchmarks --

fn bench_encoders(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    let data = payload(64 * 1024);

    group.bench_function("string_literal_64k", |b| {
        b.iter(|| string_literal_lines(black_box(&data), &Format::DEFAULT))
    });

    group.bench_function("array_literal_64k", |b| {
        b.iter(|| array_literal_lines(black_box(&data), &Format::DEFAULT))
    });

    group.finish();
}

// -- Emission benchmarks --

struct SynthEncoder;

impl AudioEncoder for SynthEncoder {
    fn encode_file(&mut self, _path: &Path) -> assetc::Result<EncodedAudio> {
        Ok(EncodedAudio {
            data: payload(32 * 1024),
            kbps: 64.0,
        })
    }

    fn type_symbol(&self) -> &str {
        "_SYS_PCM"
    }

    fn display_name(&self) -> &str {
        "Synth"
    }
}

struct SynthFactory;

impl EncoderFactory for SynthFactory {
    fn create(&self, _codec: &str, _quality: u32) -> Option<Box<dyn AudioEncoder>> {
        Some(Box::new(SynthEncoder))
    }
}

fn sample_group() -> Group {
    let pool = TilePool::from_tiles((0..512).map(|i| Tile::new(format!("t{}", i))));
    let frames: Vec<TileGrid> = (0..8)
        .map(|f| {
            let tiles = (0..16 * 16)
                .map(|i| Tile::new(format!("t{}", (i + f) % 512)))
                .collect();
            TileGrid::new(16, 16, tiles).unwrap()
        })
        .collect();

    Group::new("Bench", 0xfeed, pool, payload(16 * 1024))
        .with_image(Image::new("Background", ImageKind::Grid, frames.clone()))
        .with_image(Image::new("Icon", ImageKind::Pinned, frames))
}

fn bench_emission(c: &mut Criterion) {
    let mut group = c.benchmark_group("emit");
    let groups = vec![sample_group()];
    let sounds = vec![Sound::new("Music", "music.wav")];

    group.bench_function("definitions", |b| {
        b.iter(|| {
            let mut buf = Vec::new();
            let mut session =
                EmissionSession::new(&mut buf, DefinitionEmitter::with_encoders(SynthFactory))
                    .unwrap();
            session.emit_all(black_box(&groups), &sounds).unwrap();
            session.finish().unwrap();
            buf
        })
    });

    group.finish();
}

criterion_group!(benches, bench_encoders, bench_emission);
criterion_main!(benches);
