//! Source emission.
//!
//! An [`EmissionSession`] owns one output file and drives an [`Emitter`]
//! over every asset. Two emitters exist: [`DeclarationEmitter`] for the
//! header and [`DefinitionEmitter`] for the translation unit.

mod declaration;
mod definition;
pub mod encode;
pub mod guard;
mod session;

pub use declaration::DeclarationEmitter;
pub use definition::DefinitionEmitter;
pub use encode::{array_literal_lines, string_literal_lines};
pub use guard::guard_name;
pub use session::EmissionSession;

use crate::asset::{Group, Image, Sound};
use crate::error::Result;

/// Notice and library include at the top of every generated file.
pub const PREAMBLE: &str = "/*\n * Generated by assetc. Do not edit by hand.\n */\n\n#include <sifteo/asset.h>\n";

/// Fixed layout constants for generated source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Format {
    /// One indentation unit.
    pub indent: &'static str,
    /// Maximum rendered length of a string literal line, quotes included.
    pub line_width: usize,
    /// Entries per line of a byte array.
    pub array_columns: usize,
}

impl Format {
    pub const DEFAULT: Format = Format {
        indent: "    ",
        line_width: 120,
        array_columns: 16,
    };
}

impl Default for Format {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Renders the text for one kind of output file.
///
/// Each call returns the complete text for one asset; the session writes it
/// only when rendering succeeded, so a failed asset leaves nothing behind.
pub trait Emitter {
    /// Text written once when the destination is opened.
    fn preamble(&self) -> Result<String> {
        Ok(PREAMBLE.to_string())
    }

    /// Text written once when the destination is closed.
    fn postamble(&self) -> Result<String> {
        Ok(String::new())
    }

    fn group(&mut self, group: &Group) -> Result<String>;

    /// Called for each image of `group`, right after the group itself.
    fn image(&mut self, group: &Group, image: &Image) -> Result<String>;

    fn sound(&mut self, sound: &Sound) -> Result<String>;
}
