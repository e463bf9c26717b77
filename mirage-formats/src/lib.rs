//! Texel format enumeration and byte accounting, shared by all mirage crates.
//!
//! Scene resources never interpret texel data; the only thing they need from
//! a format is how many bytes it occupies. That mapping lives here so every
//! crate agrees on it.

/// How a single texel (or block of texels) is encoded in memory.
///
/// The format of a resource is fixed at creation and determines the byte
/// size of all of its storage. Block-compressed formats encode a fixed
/// rectangle of texels per block and therefore have no per-texel byte size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TexelFormat {
    R8,
    Rg8,
    Rgb8,
    Rgba8,
    R16F,
    Rg16F,
    Rgb16F,
    Rgba16F,
    R32F,
    Rg32F,
    Rgb32F,
    Rgba32F,
    Etc2Rgb,
    Etc2Rgba,
    Astc4x4,
}

impl TexelFormat {
    /// Size of one texel in bytes, or `None` for block-compressed formats,
    /// which are only addressable in whole blocks.
    pub fn bytes_per_texel(&self) -> Option<u32> {
        match self {
            TexelFormat::R8 => Some(1),
            TexelFormat::Rg8 => Some(2),
            TexelFormat::Rgb8 => Some(3),
            TexelFormat::Rgba8 => Some(4),
            TexelFormat::R16F => Some(2),
            TexelFormat::Rg16F => Some(4),
            TexelFormat::Rgb16F => Some(6),
            TexelFormat::Rgba16F => Some(8),
            TexelFormat::R32F => Some(4),
            TexelFormat::Rg32F => Some(8),
            TexelFormat::Rgb32F => Some(12),
            TexelFormat::Rgba32F => Some(16),
            TexelFormat::Etc2Rgb | TexelFormat::Etc2Rgba | TexelFormat::Astc4x4 => None,
        }
    }

    /// Size in bytes of one encoded block.
    ///
    /// Uncompressed formats are treated as 1x1 blocks, so for them this
    /// equals [`bytes_per_texel`](Self::bytes_per_texel).
    pub fn block_byte_size(&self) -> u32 {
        match self {
            TexelFormat::R8 => 1,
            TexelFormat::Rg8 => 2,
            TexelFormat::Rgb8 => 3,
            TexelFormat::Rgba8 => 4,
            TexelFormat::R16F => 2,
            TexelFormat::Rg16F => 4,
            TexelFormat::Rgb16F => 6,
            TexelFormat::Rgba16F => 8,
            TexelFormat::R32F => 4,
            TexelFormat::Rg32F => 8,
            TexelFormat::Rgb32F => 12,
            TexelFormat::Rgba32F => 16,
            TexelFormat::Etc2Rgb => 8,
            TexelFormat::Etc2Rgba => 16,
            TexelFormat::Astc4x4 => 16,
        }
    }

    /// Texel footprint of one encoded block.
    pub fn block_dimensions(&self) -> (u32, u32) {
        match self {
            TexelFormat::Etc2Rgb | TexelFormat::Etc2Rgba | TexelFormat::Astc4x4 => (4, 4),

            TexelFormat::R8
            | TexelFormat::Rg8
            | TexelFormat::Rgb8
            | TexelFormat::Rgba8
            | TexelFormat::R16F
            | TexelFormat::Rg16F
            | TexelFormat::Rgb16F
            | TexelFormat::Rgba16F
            | TexelFormat::R32F
            | TexelFormat::Rg32F
            | TexelFormat::Rgb32F
            | TexelFormat::Rgba32F => (1, 1),
        }
    }

    pub fn is_compressed(&self) -> bool {
        matches!(
            self,
            TexelFormat::Etc2Rgb | TexelFormat::Etc2Rgba | TexelFormat::Astc4x4
        )
    }
}
