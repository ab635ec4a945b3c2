//! Validation checks for the asset graph.
//!
//! Each check takes the groups and/or sounds and returns an `EmitReport`.

use std::collections::HashMap;

use crate::asset::{Group, ImageKind, Sound};
use crate::report::{Diagnostic, EmitReport};

/// Largest pool a 16-bit tile index can address.
pub const MAX_POOL_TILES: usize = u16::MAX as usize + 1;

/// Check image frames against the emitter's requirements.
pub fn check_images(groups: &[Group]) -> EmitReport {
    let mut result = EmitReport::new();

    for group in groups {
        for image in &group.images {
            if image.frames.is_empty() {
                match image.kind {
                    ImageKind::Pinned => result.push(
                        Diagnostic::error(
                            "assetc::validate::no-frames",
                            format!("{} image '{}' has no frames", image.kind, image.name),
                        )
                        .for_asset(&image.name)
                        .with_help("Give the image at least one frame or drop the pinned flag"),
                    ),
                    ImageKind::Grid => result.push(
                        Diagnostic::warning(
                            "assetc::validate::no-frames",
                            format!("{} image '{}' has no frames", image.kind, image.name),
                        )
                        .for_asset(&image.name),
                    ),
                }
                continue;
            }

            let (width, height) = (image.width(), image.height());
            for (f, frame) in image.frames.iter().enumerate() {
                if frame.width() != width || frame.height() != height {
                    result.push(
                        Diagnostic::error(
                            "assetc::validate::frame-size",
                            format!(
                                "Image '{}': frame {} is {}x{}, frame 0 is {}x{}",
                                image.name,
                                f,
                                frame.width(),
                                frame.height(),
                                width,
                                height
                            ),
                        )
                        .for_asset(&image.name),
                    );
                }
            }

            // Pinned images only ever read tile (0, 0) of frame 0.
            let frames = match image.kind {
                ImageKind::Pinned => &image.frames[..1],
                ImageKind::Grid => &image.frames[..],
            };

            let mut missing: Vec<&str> = Vec::new();
            for frame in frames {
                let tiles = match image.kind {
                    ImageKind::Pinned => frame.tile(0, 0).into_iter().collect::<Vec<_>>(),
                    ImageKind::Grid => frame.tiles().iter().collect(),
                };
                for tile in tiles {
                    if group.pool.index(tile).is_none() && !missing.contains(&tile.key()) {
                        missing.push(tile.key());
                    }
                }
            }

            for key in missing {
                result.push(
                    Diagnostic::error(
                        "assetc::validate::not-pooled",
                        format!(
                            "Image '{}' uses tile '{}' which is not in the pool of group '{}'",
                            image.name, key, group.name
                        ),
                    )
                    .for_asset(&image.name),
                );
            }
        }
    }

    result
}

/// Check that every pool fits 16-bit tile indices.
pub fn check_pool_sizes(groups: &[Group]) -> EmitReport {
    let mut result = EmitReport::new();

    for group in groups {
        if group.pool.len() > MAX_POOL_TILES {
            result.push(
                Diagnostic::error(
                    "assetc::validate::pool-size",
                    format!(
                        "Group '{}' has {} tiles, more than the {} a 16-bit index can address",
                        group.name,
                        group.pool.len(),
                        MAX_POOL_TILES
                    ),
                )
                .for_asset(&group.name)
                .with_help("Split the group into smaller groups"),
            );
        }

        if group.pool.is_empty() && !group.images.is_empty() {
            result.push(
                Diagnostic::warning(
                    "assetc::validate::empty-pool",
                    format!("Group '{}' has images but no pooled tiles", group.name),
                )
                .for_asset(&group.name),
            );
        }

        if group.loadstream.is_empty() {
            result.push(
                Diagnostic::warning(
                    "assetc::validate::empty-loadstream",
                    format!("Group '{}' has an empty loadstream", group.name),
                )
                .for_asset(&group.name),
            );
        }
    }

    result
}

/// Whether a name can be used as a C identifier.
pub fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Check that every emitted symbol is a valid, unique C identifier.
///
/// Helper symbols (`<group>_data`, `<image>_tiles`, `<sound>_data`) count too.
pub fn check_symbols(groups: &[Group], sounds: &[Sound]) -> EmitReport {
    let mut result = EmitReport::new();
    let mut owners: HashMap<String, String> = HashMap::new();
    let mut symbols: Vec<(String, String)> = Vec::new();

    for group in groups {
        symbols.push((group.name.clone(), group.name.clone()));
        symbols.push((group.data_symbol(), group.name.clone()));
        for image in &group.images {
            symbols.push((image.name.clone(), image.name.clone()));
            if image.kind == ImageKind::Grid {
                symbols.push((format!("{}_tiles", image.name), image.name.clone()));
            }
        }
    }
    for sound in sounds {
        symbols.push((sound.name.clone(), sound.name.clone()));
        symbols.push((sound.data_symbol(), sound.name.clone()));
    }

    for (symbol, owner) in symbols {
        if symbol == owner && !is_c_identifier(&symbol) {
            result.push(
                Diagnostic::error(
                    "assetc::validate::bad-name",
                    format!("'{}' is not a valid C identifier", symbol),
                )
                .for_asset(&owner)
                .with_help("Use letters, digits and underscores, not starting with a digit"),
            );
            continue;
        }

        if let Some(previous) = owners.get(&symbol) {
            result.push(
                Diagnostic::error(
                    "assetc::validate::duplicate-name",
                    format!(
                        "Symbol '{}' of '{}' clashes with '{}'",
                        symbol, owner, previous
                    ),
                )
                .for_asset(&owner)
                .with_help("Use distinct asset names"),
            );
        } else {
            owners.insert(symbol, owner);
        }
    }

    result
}

/// Check that each sound requests a codec the factory knows.
pub fn check_codecs(sounds: &[Sound], supports: impl Fn(&str) -> bool) -> EmitReport {
    let mut result = EmitReport::new();

    for sound in sounds {
        if !supports(&sound.codec) {
            result.push(
                Diagnostic::warning(
                    "assetc::validate::unknown-codec",
                    format!("Sound '{}' requests unknown codec '{}'", sound.name, sound.codec),
                )
                .for_asset(&sound.name),
            );
        }
    }

    result
}
