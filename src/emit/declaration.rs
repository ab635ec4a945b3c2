//! Header file emission.

use std::fmt::Write;
use std::path::Path;

use crate::asset::{Group, Image, Sound};
use crate::error::Result;

use super::{guard_name, Emitter, PREAMBLE};

/// Emits `extern` declarations inside an include guard.
#[derive(Debug, Clone)]
pub struct DeclarationEmitter {
    guard: String,
}

impl DeclarationEmitter {
    /// Create an emitter whose include guard is derived from `filename`.
    pub fn new(filename: &str) -> Self {
        Self {
            guard: guard_name(filename),
        }
    }

    /// Create an emitter for a header path, guarding on the path as written.
    ///
    /// Pass the path the user gave rather than a resolved one, so the guard
    /// does not depend on where the build runs.
    pub fn for_header(path: &Path) -> Self {
        Self::new(&path.to_string_lossy())
    }

    pub fn guard(&self) -> &str {
        &self.guard
    }
}

impl Emitter for DeclarationEmitter {
    fn preamble(&self) -> Result<String> {
        let mut out = String::from(PREAMBLE);
        writeln!(out)?;
        writeln!(out, "#ifndef {}", self.guard)?;
        writeln!(out, "#define {}", self.guard)?;
        writeln!(out)?;
        Ok(out)
    }

    fn postamble(&self) -> Result<String> {
        Ok(format!("\n#endif  // {}\n", self.guard))
    }

    fn group(&mut self, group: &Group) -> Result<String> {
        Ok(format!("extern Sifteo::AssetGroup {};\n", group.name))
    }

    fn image(&mut self, _group: &Group, image: &Image) -> Result<String> {
        Ok(format!(
            "extern const Sifteo::{} {};\n",
            image.kind.class_name(),
            image.name
        ))
    }

    fn sound(&mut self, sound: &Sound) -> Result<String> {
        Ok(format!("extern const Sifteo::AssetAudio {};\n", sound.name))
    }
}
