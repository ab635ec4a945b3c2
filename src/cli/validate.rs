use std::path::PathBuf;

use clap::Args;

use crate::error::{EmitError, Result};
use crate::manifest::{Manifest, MANIFEST_FILENAME};
use crate::output::{display_path, plural, Printer};
use crate::validation::{print_diagnostics, validate_assets};

/// Validate an asset manifest without emitting
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Asset manifest (YAML or JSON)
    #[arg(default_value = MANIFEST_FILENAME)]
    pub manifest: PathBuf,
}

pub fn run(args: ValidateArgs) -> Result<()> {
    let printer = Printer::new();
    printer.status("Validating", &display_path(&args.manifest));

    let manifest = Manifest::load(&args.manifest)?;
    let (groups, sounds) = manifest.into_assets()?;
    let report = validate_assets(&groups, &sounds);
    print_diagnostics(&printer, &report);

    let errors = report.error_count();
    let warnings = report.warning_count();

    if errors > 0 {
        return Err(EmitError::Build {
            message: format!(
                "validation failed: {}, {}",
                plural(errors, "error", "errors"),
                plural(warnings, "warning", "warnings")
            ),
            help: None,
        });
    }

    if warnings > 0 {
        printer.warning("Finished", &plural(warnings, "warning", "warnings"));
    } else {
        printer.success("Finished", "no problems found");
    }
    Ok(())
}
