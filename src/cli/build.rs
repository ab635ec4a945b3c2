//! Build command implementation.
//!
//! Loads an asset manifest and emits the declaration file, then the
//! definition file.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::asset::{Group, Sound};
use crate::emit::{DeclarationEmitter, DefinitionEmitter, EmissionSession};
use crate::error::{EmitError, Result};
use crate::manifest::{Manifest, MANIFEST_FILENAME};
use crate::output::{display_path, plural, Printer};
use crate::report::EmitReport;
use crate::validation::{print_diagnostics, validate_assets};

/// Emit declaration and definition files from an asset manifest
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Asset manifest (YAML or JSON)
    #[arg(default_value = MANIFEST_FILENAME)]
    pub manifest: PathBuf,

    /// Declaration file to write (overrides manifest)
    #[arg(long)]
    pub header: Option<PathBuf>,

    /// Definition file to write (overrides manifest)
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Skip pre-flight validation
    #[arg(long)]
    pub no_validate: bool,
}

pub fn run(args: BuildArgs) -> Result<()> {
    let printer = Printer::new();

    let manifest = Manifest::load(&args.manifest)?;
    let (groups, sounds) = manifest.into_assets()?;

    if !args.no_validate {
        let report = validate_assets(&groups, &sounds);
        print_diagnostics(&printer, &report);
        if report.has_errors() {
            return Err(EmitError::Build {
                message: format!(
                    "{} failed validation",
                    display_path(&args.manifest)
                ),
                help: Some("Fix the errors above, or pass --no-validate to emit anyway".to_string()),
            });
        }
    }

    // The guard comes from the header path as written, before resolving.
    let header_name = args.header.unwrap_or_else(|| manifest.header.clone());
    let header = manifest.resolve(&header_name);
    let source = args
        .source
        .unwrap_or_else(|| manifest.resolve(&manifest.source));

    let images: usize = groups.iter().map(|g| g.images.len()).sum();
    printer.status(
        "Emitting",
        &format!(
            "{}, {}, {}",
            plural(groups.len(), "group", "groups"),
            plural(images, "image", "images"),
            plural(sounds.len(), "sound", "sounds")
        ),
    );

    let report = emit_files(&header, &header_name, &source, &groups, &sounds)?;
    print_diagnostics(&printer, &report);

    if report.has_errors() {
        printer.error("Failed", &plural(report.error_count(), "asset", "assets"));
        return Err(EmitError::Build {
            message: format!(
                "{} could not be emitted",
                plural(report.error_count(), "asset", "assets")
            ),
            help: None,
        });
    }

    printer.success("Wrote", &printer.cyan(&display_path(&header)));
    printer.success("Wrote", &printer.cyan(&display_path(&source)));
    Ok(())
}

/// Run a declaration pass into `header` and a definition pass into `source`.
///
/// The include guard is derived from `header_name`, the header path as the
/// user wrote it. Returns the diagnostics of both passes. An output that
/// cannot be opened or written ends the build with an error.
pub fn emit_files(
    header: &Path,
    header_name: &Path,
    source: &Path,
    groups: &[Group],
    sounds: &[Sound],
) -> Result<EmitReport> {
    for path in [header, source] {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| EmitError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })?;
        }
    }

    let mut declarations =
        EmissionSession::create(header, DeclarationEmitter::for_header(header_name))?;
    declarations.emit_all(groups, sounds)?;
    let mut report = declarations.finish()?;

    let mut definitions = EmissionSession::create(source, DefinitionEmitter::new())?;
    definitions.emit_all(groups, sounds)?;
    report.merge(definitions.finish()?);

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const MANIFEST: &str = r#"
header: gen/assets.gen.h
source: gen/assets.gen.cpp
groups:
  - name: GameAssets
    signature: 0x10
    tiles: [a, b]
    loadstream: "0102"
    images:
      - name: Icon
        pinned: true
        frames:
          - { width: 1, height: 1, tiles: [b] }
sounds:
  - name: Blip
    file: blip.raw
    encode: raw
"#;

    #[test]
    fn test_build_writes_both_files() {
        let dir = tempdir().unwrap();
        let manifest = dir.path().join("assets.yaml");
        fs::write(&manifest, MANIFEST).unwrap();
        fs::write(dir.path().join("blip.raw"), b"\x00\x01abc").unwrap();

        run(BuildArgs {
            manifest,
            header: None,
            source: None,
            no_validate: false,
        })
        .unwrap();

        let header = fs::read_to_string(dir.path().join("gen/assets.gen.h")).unwrap();
        assert!(header.contains("#ifndef _GEN_ASSETS_GEN_H\n"));
        assert!(header.contains("extern const Sifteo::PinnedAssetImage Icon;"));
        assert!(header.contains("extern const Sifteo::AssetAudio Blip;"));

        let source = fs::read_to_string(dir.path().join("gen/assets.gen.cpp")).unwrap();
        assert!(source.contains("/* index   */ 1,"));
        assert!(source.contains("\"\\000\\001abc\""));
    }

    #[test]
    fn test_build_cli_paths_override_manifest() {
        let dir = tempdir().unwrap();
        let manifest = dir.path().join("assets.yaml");
        fs::write(&manifest, MANIFEST).unwrap();
        fs::write(dir.path().join("blip.raw"), b"x").unwrap();

        let header = dir.path().join("other.h");
        let source = dir.path().join("other.cpp");
        run(BuildArgs {
            manifest,
            header: Some(header.clone()),
            source: Some(source.clone()),
            no_validate: false,
        })
        .unwrap();

        assert!(fs::read_to_string(&header).unwrap().contains("_OTHER_H"));
        assert!(source.exists());
    }

    #[test]
    fn test_build_guards_differ_across_directories() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("blip.raw"), b"x").unwrap();

        let mut texts = Vec::new();
        for level in ["forest", "desert"] {
            let manifest = dir.path().join(format!("{}.yaml", level));
            let yaml = MANIFEST.replace("gen/", &format!("levels/{}/", level));
            fs::write(&manifest, yaml).unwrap();
            run(BuildArgs {
                manifest,
                header: None,
                source: None,
                no_validate: false,
            })
            .unwrap();
            let path = dir.path().join(format!("levels/{}/assets.gen.h", level));
            texts.push(fs::read_to_string(path).unwrap());
        }

        assert!(texts[0].contains("#ifndef _LEVELS_FOREST_ASSETS_GEN_H\n"));
        assert!(texts[1].contains("#ifndef _LEVELS_DESERT_ASSETS_GEN_H\n"));
    }

    #[test]
    fn test_build_fails_on_missing_audio() {
        let dir = tempdir().unwrap();
        let manifest = dir.path().join("assets.yaml");
        fs::write(&manifest, MANIFEST).unwrap();

        let err = run(BuildArgs {
            manifest,
            header: None,
            source: None,
            no_validate: false,
        })
        .unwrap_err();
        assert!(matches!(err, EmitError::Build { .. }));

        // The rest of the batch is still emitted
        let source = fs::read_to_string(dir.path().join("gen/assets.gen.cpp")).unwrap();
        assert!(source.contains("Sifteo::AssetGroup GameAssets"));
        assert!(!source.contains("AssetAudio Blip"));
    }

    #[test]
    fn test_build_stops_on_validation_errors() {
        let dir = tempdir().unwrap();
        let manifest = dir.path().join("assets.yaml");
        fs::write(
            &manifest,
            "groups:\n  - name: G\n    signature: 1\n    images:\n      - { name: P, pinned: true }\n",
        )
        .unwrap();

        let err = run(BuildArgs {
            manifest,
            header: None,
            source: None,
            no_validate: false,
        })
        .unwrap_err();
        assert!(matches!(err, EmitError::Build { .. }));
        assert!(!dir.path().join("assets.gen.cpp").exists());
    }
}
