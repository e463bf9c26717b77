//! Error types

use thiserror::Error;

/// An error from an operation on a texture buffer resource.
///
/// All variants are recoverable: the failed operation reports synchronously
/// and leaves the resource untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TextureBufferError {
    /// A construction parameter was outside the allowed range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A mip level index at or past the buffer's level count.
    #[error("Mip level {requested} out of range, buffer has {count} levels")]
    InvalidMipLevel { requested: u32, count: u32 },

    /// A sub-region that does not fit inside the addressed mip level.
    #[error(
        "Region {width}x{height} at ({offset_x}, {offset_y}) exceeds the {level_width}x{level_height} mip level"
    )]
    RegionOutOfBounds {
        offset_x: u32,
        offset_y: u32,
        width: u32,
        height: u32,
        level_width: u32,
        level_height: u32,
    },
}
