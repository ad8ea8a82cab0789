use crate::cell::Cell;

/// Errors raised by the topology operations. A missing path is not an error; searches report it
/// as an absent path so that batch queries keep going.
#[derive(Debug, thiserror::Error)]
pub enum TopologyError {
    /// The image file could not be opened or decoded.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// A raw pixel buffer does not hold `width * height` RGBA pixels.
    #[error("buffer of {len} bytes does not match a {width}x{height} RGBA image")]
    InvalidBuffer {
        width: usize,
        height: usize,
        len: usize,
    },

    #[error("search requires at least one start cell")]
    EmptyStartSet,

    #[error("goal mode search requires at least one goal cell")]
    EmptyGoalSet,

    /// A start cell lies outside the image.
    #[error("start cell {0} is outside the image")]
    OutOfBounds(Cell),
}
