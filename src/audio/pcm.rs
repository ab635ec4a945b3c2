//! Uncompressed 16-bit PCM from WAV files.

use std::path::Path;

use crate::error::{EmitError, Result};

use super::{AudioEncoder, EncodedAudio};

/// Decodes a WAV file to mono 16-bit little-endian samples.
#[derive(Debug, Clone, Copy, Default)]
pub struct PcmEncoder;

impl PcmEncoder {
    pub fn new() -> Self {
        Self
    }
}

fn wav_error(path: &Path, e: hound::Error) -> EmitError {
    EmitError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to decode WAV: {}", e),
    }
}

/// Read every sample of a WAV file as i16, whatever its stored format.
fn read_samples(path: &Path) -> Result<(hound::WavSpec, Vec<i16>)> {
    let mut reader = hound::WavReader::open(path).map_err(|e| wav_error(path, e))?;
    let spec = reader.spec();

    let samples: std::result::Result<Vec<i16>, hound::Error> = match spec.sample_format {
        hound::SampleFormat::Int => match spec.bits_per_sample {
            16 => reader.samples::<i16>().collect(),
            8 => reader
                .samples::<i8>()
                .map(|s| s.map(|s| (s as i16) << 8))
                .collect(),
            24 | 32 => reader
                .samples::<i32>()
                .map(|s| s.map(|s| (s >> (spec.bits_per_sample - 16)) as i16))
                .collect(),
            bits => {
                return Err(EmitError::Io {
                    path: path.to_path_buf(),
                    message: format!("Unsupported bit depth: {}", bits),
                })
            }
        },
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(|s| (s.clamp(-1.0, 1.0) * 32767.0) as i16))
            .collect(),
    };

    Ok((spec, samples.map_err(|e| wav_error(path, e))?))
}

/// Average interleaved channels into one.
fn downmix(samples: &[i16], channels: u16) -> Vec<i16> {
    if channels <= 1 {
        return samples.to_vec();
    }

    samples
        .chunks(channels as usize)
        .map(|frame| {
            let sum: i32 = frame.iter().map(|&s| s as i32).sum();
            (sum / frame.len() as i32) as i16
        })
        .collect()
}

impl AudioEncoder for PcmEncoder {
    fn encode_file(&mut self, path: &Path) -> Result<EncodedAudio> {
        let (spec, samples) = read_samples(path)?;
        let mono = downmix(&samples, spec.channels);

        let data = mono.iter().flat_map(|s| s.to_le_bytes()).collect();
        let kbps = spec.sample_rate as f32 * 16.0 / 1000.0;

        Ok(EncodedAudio { data, kbps })
    }

    fn type_symbol(&self) -> &str {
        "_SYS_PCM"
    }

    fn display_name(&self) -> &str {
        "PCM"
    }
}
