//! Audio encoders.
//!
//! The definition emitter asks an [`EncoderFactory`] for an encoder matching a
//! sound's requested codec, then embeds whatever bytes the encoder produces.
//! Compressing codecs live outside this crate; the builtin factory covers
//! uncompressed PCM and raw passthrough.

mod pcm;
mod raw;

use std::path::Path;

use crate::error::Result;

pub use pcm::PcmEncoder;
pub use raw::RawEncoder;

/// Output of one transcoding call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EncodedAudio {
    pub data: Vec<u8>,
    /// Achieved bitrate in kilobits per second.
    pub kbps: f32,
}

/// Transcodes one source file into the runtime audio format.
pub trait AudioEncoder {
    fn encode_file(&mut self, path: &Path) -> Result<EncodedAudio>;

    /// Symbol written into the `type` field of the audio record.
    fn type_symbol(&self) -> &str;

    /// Human-readable codec name for progress output.
    fn display_name(&self) -> &str;
}

/// Creates encoders by codec identifier.
pub trait EncoderFactory {
    /// Returns `None` when the codec is not supported.
    fn create(&self, codec: &str, quality: u32) -> Option<Box<dyn AudioEncoder>>;
}

/// Factory for the encoders shipped with assetc.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinEncoders;

impl BuiltinEncoders {
    /// Codec identifiers this factory understands.
    pub const CODECS: &'static [&'static str] = &["pcm", "raw"];

    pub fn supports(codec: &str) -> bool {
        Self::CODECS.contains(&codec.to_lowercase().as_str())
    }
}

impl EncoderFactory for BuiltinEncoders {
    fn create(&self, codec: &str, _quality: u32) -> Option<Box<dyn AudioEncoder>> {
        match codec.to_lowercase().as_str() {
            "pcm" => Some(Box::new(PcmEncoder::new())),
            "raw" => Some(Box::new(RawEncoder)),
            _ => None,
        }
    }
}
