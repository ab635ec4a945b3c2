//! Output file lifecycle.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::asset::{Group, Sound};
use crate::error::{EmitError, Result};
use crate::report::{Diagnostic, EmitReport};

use super::Emitter;

/// One emission pass over one destination.
///
/// The preamble is written when the session is created, assets are appended
/// in call order, and [`close`](Self::close) writes the postamble. A failed
/// asset is logged, recorded in the [`EmitReport`] and skipped; the batch
/// continues. Failures of the destination itself are returned as errors.
pub struct EmissionSession<E, W: Write> {
    emitter: E,
    out: Option<W>,
    path: PathBuf,
    report: EmitReport,
}

impl<E: Emitter> EmissionSession<E, BufWriter<File>> {
    /// Open `path` for writing and emit the preamble.
    pub fn create(path: &Path, emitter: E) -> Result<Self> {
        let file = File::create(path).map_err(|e| EmitError::Open {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        tracing::debug!("opened {}", path.display());
        Self::open(BufWriter::new(file), emitter, path.to_path_buf())
    }
}

impl<E: Emitter, W: Write> EmissionSession<E, W> {
    /// Emit into an already open writer.
    pub fn new(out: W, emitter: E) -> Result<Self> {
        Self::open(out, emitter, PathBuf::from("<stream>"))
    }

    fn open(out: W, emitter: E, path: PathBuf) -> Result<Self> {
        let mut session = Self {
            emitter,
            out: Some(out),
            path,
            report: EmitReport::new(),
        };

        let preamble = session.emitter.preamble()?;
        session.write(&preamble)?;
        Ok(session)
    }

    /// Emit a group followed by each of its images.
    pub fn group(&mut self, group: &Group) -> Result<()> {
        let rendered = self.emitter.group(group);
        self.commit(&group.name, rendered)?;

        for image in &group.images {
            let rendered = self.emitter.image(group, image);
            self.commit(&image.name, rendered)?;
        }

        Ok(())
    }

    pub fn sound(&mut self, sound: &Sound) -> Result<()> {
        let rendered = self.emitter.sound(sound);
        self.commit(&sound.name, rendered)
    }

    /// Emit every group, then every sound, in the order given.
    pub fn emit_all(&mut self, groups: &[Group], sounds: &[Sound]) -> Result<()> {
        for group in groups {
            self.group(group)?;
        }
        for sound in sounds {
            self.sound(sound)?;
        }
        Ok(())
    }

    /// Write the postamble and flush. Calling it again does nothing.
    pub fn close(&mut self) -> Result<()> {
        if self.out.is_none() {
            return Ok(());
        }

        let postamble = self.emitter.postamble()?;
        self.write(&postamble)?;

        if let Some(mut out) = self.out.take() {
            out.flush().map_err(|e| self.io_error(e))?;
        }

        tracing::debug!("closed {}", self.path.display());
        Ok(())
    }

    /// Close the destination and hand back the collected diagnostics.
    pub fn finish(mut self) -> Result<EmitReport> {
        self.close()?;
        Ok(self.report)
    }

    pub fn is_open(&self) -> bool {
        self.out.is_some()
    }

    pub fn report(&self) -> &EmitReport {
        &self.report
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn commit(&mut self, asset: &str, rendered: Result<String>) -> Result<()> {
        match rendered {
            Ok(text) => self.write(&text),
            Err(e) => {
                tracing::error!(asset, "{}", e);
                self.report.push(Diagnostic::from_error(asset, &e));
                Ok(())
            }
        }
    }

    fn write(&mut self, text: &str) -> Result<()> {
        let Some(out) = self.out.as_mut() else {
            return Err(EmitError::Build {
                message: format!("Output '{}' is already closed", self.path.display()),
                help: None,
            });
        };

        out.write_all(text.as_bytes()).map_err(|e| EmitError::Io {
            path: self.path.clone(),
            message: format!("Failed to write output: {}", e),
        })
    }

    fn io_error(&self, e: std::io::Error) -> EmitError {
        EmitError::Io {
            path: self.path.clone(),
            message: format!("Failed to write output: {}", e),
        }
    }
}
