use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for assetc operations
#[derive(Error, Diagnostic, Debug)]
pub enum EmitError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(assetc::io))]
    Io { path: PathBuf, message: String },

    #[error("Error opening output file '{path}': {message}")]
    #[diagnostic(
        code(assetc::open),
        help("Check that the output directory exists and is writable")
    )]
    Open { path: PathBuf, message: String },

    #[error("Parse error: {message}")]
    #[diagnostic(code(assetc::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Formatting error while rendering source text")]
    #[diagnostic(code(assetc::format))]
    Format(#[from] std::fmt::Error),

    #[error("Sound '{sound}' requests unknown codec '{codec}'")]
    #[diagnostic(code(assetc::audio::codec), help("Supported codecs: pcm, raw"))]
    UnknownCodec { sound: String, codec: String },

    #[error("Error encoding audio file '{}': {message}", .file.display())]
    #[diagnostic(code(assetc::audio::encode))]
    Encode {
        sound: String,
        file: PathBuf,
        message: String,
    },

    #[error("Error encoding audio file '{}': encoder produced no data", .file.display())]
    #[diagnostic(code(assetc::audio::empty))]
    EmptyAudio { sound: String, file: PathBuf },

    #[error("Pinned image '{image}' has no frames")]
    #[diagnostic(
        code(assetc::image::no_frames),
        help("A pinned image needs at least one frame to take its tile index from")
    )]
    PinnedWithoutFrames { image: String },

    #[error("Image '{image}' frame {frame} is {actual_width}x{actual_height}, expected {width}x{height}")]
    #[diagnostic(
        code(assetc::image::frame_size),
        help("All frames of an image must share the size of frame 0")
    )]
    FrameSize {
        image: String,
        frame: usize,
        width: usize,
        height: usize,
        actual_width: usize,
        actual_height: usize,
    },

    #[error("Image '{image}' frame {frame} has no tile at ({x}, {y})")]
    #[diagnostic(code(assetc::image::missing_tile))]
    MissingTile {
        image: String,
        frame: usize,
        x: usize,
        y: usize,
    },

    #[error("Image '{image}' references tile '{tile}' which is not in the pool of group '{group}'")]
    #[diagnostic(code(assetc::image::not_pooled))]
    TileNotPooled {
        group: String,
        image: String,
        tile: String,
    },

    #[error("Image '{image}' uses pool index {index}, which does not fit in 16 bits")]
    #[diagnostic(code(assetc::image::index_overflow))]
    IndexOverflow { image: String, index: usize },

    #[error("Build error: {message}")]
    #[diagnostic(code(assetc::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl EmitError {
    /// Stable machine-readable code, mirrored into report diagnostics.
    pub fn code_str(&self) -> &'static str {
        match self {
            EmitError::Io { .. } => "assetc::io",
            EmitError::Open { .. } => "assetc::open",
            EmitError::Parse { .. } => "assetc::parse",
            EmitError::Format(_) => "assetc::format",
            EmitError::UnknownCodec { .. } => "assetc::audio::codec",
            EmitError::Encode { .. } => "assetc::audio::encode",
            EmitError::EmptyAudio { .. } => "assetc::audio::empty",
            EmitError::PinnedWithoutFrames { .. } => "assetc::image::no_frames",
            EmitError::FrameSize { .. } => "assetc::image::frame_size",
            EmitError::MissingTile { .. } => "assetc::image::missing_tile",
            EmitError::TileNotPooled { .. } => "assetc::image::not_pooled",
            EmitError::IndexOverflow { .. } => "assetc::image::index_overflow",
            EmitError::Build { .. } => "assetc::build",
        }
    }
}

pub type Result<T> = std::result::Result<T, EmitError>;
