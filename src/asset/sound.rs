//! Audio assets.

use std::path::PathBuf;

/// Default codec when none is requested.
pub const DEFAULT_CODEC: &str = "pcm";

/// Default quality parameter handed to the encoder.
pub const DEFAULT_QUALITY: u32 = 10;

/// One audio clip to transcode and embed.
#[derive(Debug, Clone, PartialEq)]
pub struct Sound {
    pub name: String,
    /// Source audio file.
    pub file: PathBuf,
    /// Requested encoding algorithm.
    pub codec: String,
    pub quality: u32,
}

impl Sound {
    pub fn new(name: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
            codec: DEFAULT_CODEC.to_string(),
            quality: DEFAULT_QUALITY,
        }
    }

    pub fn with_codec(mut self, codec: impl Into<String>, quality: u32) -> Self {
        self.codec = codec.into();
        self.quality = quality;
        self
    }

    /// Name of the private byte array holding the encoded clip.
    pub fn data_symbol(&self) -> String {
        format!("{}_data", self.name)
    }
}
