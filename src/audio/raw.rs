//! Raw passthrough encoder.

use std::fs;
use std::path::Path;

use crate::error::{EmitError, Result};

use super::{AudioEncoder, EncodedAudio};

/// Embeds the source file bytes unchanged.
///
/// Useful when audio was already encoded by an earlier pipeline step.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawEncoder;

impl AudioEncoder for RawEncoder {
    fn encode_file(&mut self, path: &Path) -> Result<EncodedAudio> {
        let data = fs::read(path).map_err(|e| EmitError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read audio file: {}", e),
        })?;

        Ok(EncodedAudio { data, kbps: 0.0 })
    }

    fn type_symbol(&self) -> &str {
        "_SYS_PCM"
    }

    fn display_name(&self) -> &str {
        "Raw"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_raw_passthrough() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("clip.bin");
        fs::write(&path, [1u8, 2, 3, 0xff]).unwrap();

        let encoded = RawEncoder.encode_file(&path).unwrap();
        assert_eq!(encoded.data, vec![1, 2, 3, 0xff]);
    }

    #[test]
    fn test_raw_missing_file() {
        let dir = tempdir().unwrap();
        let err = RawEncoder
            .encode_file(&dir.path().join("missing.bin"))
            .unwrap_err();
        assert!(matches!(err, EmitError::Io { .. }));
    }
}
