//! Pre-flight validation of the asset graph.
//!
//! Emission stops at the first problem in each asset; validation reports
//! every problem in one pass. Used by both `assetc validate` and
//! `assetc build` (unless `--no-validate`).

mod checks;

pub use checks::{
    check_codecs, check_images, check_pool_sizes, check_symbols, is_c_identifier, MAX_POOL_TILES,
};

use crate::asset::{Group, Sound};
use crate::audio::BuiltinEncoders;
use crate::output::Printer;
use crate::report::{EmitReport, Severity};

/// Run all validation checks, assuming the builtin audio encoders.
pub fn validate_assets(groups: &[Group], sounds: &[Sound]) -> EmitReport {
    let mut result = EmitReport::new();

    result.merge(check_images(groups));
    result.merge(check_pool_sizes(groups));
    result.merge(check_symbols(groups, sounds));
    result.merge(check_codecs(sounds, BuiltinEncoders::supports));

    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(printer: &Printer, report: &EmitReport) {
    for d in report.iter() {
        let is_error = d.severity == Severity::Error;
        eprintln!(
            "{}[{}]: {}",
            printer.severity(&d.severity.to_string(), is_error),
            d.code,
            d.message
        );
        if let Some(help) = &d.help {
            eprintln!("  {} {}", printer.dim("help:"), help);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{Image, ImageKind, Tile, TileGrid, TilePool};

    #[test]
    fn test_validate_empty() {
        assert!(validate_assets(&[], &[]).is_ok());
    }

    #[test]
    fn test_validate_valid_group() {
        let frame = TileGrid::new(1, 1, vec![Tile::new("a")]).unwrap();
        let group = Group::new("Tiles", 9, TilePool::from_tiles(["a"]), vec![0])
            .with_image(Image::new("Icon", ImageKind::Pinned, vec![frame]));
        let sounds = vec![Sound::new("Boom", "boom.wav")];

        let result = validate_assets(&[group], &sounds);
        assert!(result.is_ok(), "{:?}", result);
    }

    #[test]
    fn test_validate_collects_every_problem() {
        let group = Group::new("Tiles", 9, TilePool::new(), vec![])
            .with_image(Image::new("Icon", ImageKind::Pinned, vec![]));
        let sounds = vec![Sound::new("Tiles", "boom.wav").with_codec("mp3", 1)];

        let result = validate_assets(&[group], &sounds);
        // pinned without frames, duplicate name
        assert_eq!(result.error_count(), 2);
        // empty pool, empty loadstream, unknown codec
        assert_eq!(result.warning_count(), 3);
    }
}
