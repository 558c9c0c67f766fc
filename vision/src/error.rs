use thiserror::Error;

/// Errors raised while setting up a background model
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VisionError {
    #[error("scale must be at least 1")]
    ZeroScale,

    #[error("history limit must be at least 1")]
    ZeroHistory,

    #[error("a {width}x{height} frame has no pixels left at scale {scale}")]
    FrameTooSmall { width: u32, height: u32, scale: u32 },
}
