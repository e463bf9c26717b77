use log::{debug, trace};
use mirage_formats::TexelFormat;

use crate::error::TextureBufferError;

/// Storage for a single mip level.
struct MipLevel {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

/// A mutable scene resource holding 2D texture data, with support for
/// partial updates.
///
/// The number of mip levels is user given and the geometry of the chain is
/// derived from the base size: level 0 is the base size, every further level
/// is the floor-halved predecessor clamped to 1 texel per dimension.
///
/// A freshly created buffer holds unspecified data. The content of a region
/// is only well-defined once [`set_data`](Self::set_data) has written it; do
/// not rely on unwritten bytes having any particular value.
///
/// The buffer is not internally synchronised. Share it across threads only
/// behind external locking.
pub struct Texture2DBuffer {
    format: TexelFormat,
    texel_size: u32,
    levels: Vec<MipLevel>,
}

impl Texture2DBuffer {
    /// Create a buffer with the given format, base size and mip level count.
    ///
    /// Storage for the whole chain is allocated up front, each level sized
    /// `width * height * bytes-per-texel`. Fails with
    /// [`TextureBufferError::InvalidArgument`] if either base dimension or
    /// the level count is zero, or if the format is block-compressed.
    pub fn new(
        format: TexelFormat,
        base_width: u32,
        base_height: u32,
        mip_level_count: u32,
    ) -> Result<Self, TextureBufferError> {
        if base_width == 0 || base_height == 0 {
            return Err(TextureBufferError::InvalidArgument(
                "base size must be at least 1x1 texel",
            ));
        }
        if mip_level_count == 0 {
            return Err(TextureBufferError::InvalidArgument(
                "a texture buffer needs at least one mip level",
            ));
        }
        let texel_size = format.bytes_per_texel().ok_or(
            TextureBufferError::InvalidArgument(
                "block-compressed formats are not supported by texture buffers",
            ),
        )?;

        let levels = (0..mip_level_count)
            .map(|level| {
                // checked_shr: chains deeper than the bit width stay at 1x1
                let width = base_width.checked_shr(level).unwrap_or(0).max(1);
                let height = base_height.checked_shr(level).unwrap_or(0).max(1);
                let byte_size = width as usize * height as usize * texel_size as usize;
                MipLevel {
                    width,
                    height,
                    data: vec![0; byte_size],
                }
            })
            .collect();

        debug!(
            "Created {:?} texture buffer: base size {}x{}, {} mip levels",
            format, base_width, base_height, mip_level_count
        );

        Ok(Texture2DBuffer {
            format,
            texel_size,
            levels,
        })
    }

    /// Number of mip levels, fixed at creation.
    pub fn mip_level_count(&self) -> u32 {
        self.levels.len() as u32
    }

    /// Texel format, fixed at creation.
    pub fn texel_format(&self) -> TexelFormat {
        self.format
    }

    /// Size in texels of the given mip level.
    ///
    /// Fails with [`TextureBufferError::InvalidMipLevel`] if `mip_level` is
    /// out of range.
    pub fn mip_level_size(&self, mip_level: u32) -> Result<(u32, u32), TextureBufferError> {
        let level = self.level(mip_level)?;
        Ok((level.width, level.height))
    }

    /// Size in bytes of the given mip level's storage, or `0` if `mip_level`
    /// is out of range.
    ///
    /// Unlike [`mip_level_size`](Self::mip_level_size) this never fails;
    /// callers branch on the zero sentinel instead.
    pub fn mip_level_data_size_in_bytes(&self, mip_level: u32) -> u32 {
        self.levels
            .get(mip_level as usize)
            .map_or(0, |level| level.data.len() as u32)
    }

    /// Update a sub-region of one mip level.
    ///
    /// `data` is copied row by row into the level's storage, honouring the
    /// level's full row stride. The buffer takes no ownership of `data` and
    /// keeps no reference to it past the call. The caller is responsible for
    /// supplying at least `width * height * bytes-per-texel` bytes, row-major
    /// and tightly packed.
    ///
    /// Fails with [`TextureBufferError::InvalidMipLevel`] if `mip_level` is
    /// out of range, or [`TextureBufferError::RegionOutOfBounds`] if the
    /// rectangle does not fit inside the level. Nothing is written on
    /// failure.
    ///
    /// # Panics
    /// Panics if `data` holds fewer bytes than the region requires.
    pub fn set_data(
        &mut self,
        data: &[u8],
        mip_level: u32,
        offset_x: u32,
        offset_y: u32,
        width: u32,
        height: u32,
    ) -> Result<(), TextureBufferError> {
        let count = self.levels.len() as u32;
        let texel_size = self.texel_size as usize;
        let level = self
            .levels
            .get_mut(mip_level as usize)
            .ok_or(TextureBufferError::InvalidMipLevel {
                requested: mip_level,
                count,
            })?;

        // Widened to avoid wrapping on offset + extent
        if offset_x as u64 + width as u64 > level.width as u64
            || offset_y as u64 + height as u64 > level.height as u64
        {
            return Err(TextureBufferError::RegionOutOfBounds {
                offset_x,
                offset_y,
                width,
                height,
                level_width: level.width,
                level_height: level.height,
            });
        }

        let src_row_len = width as usize * texel_size;
        assert!(
            data.len() >= height as usize * src_row_len,
            "source data holds fewer bytes than the addressed region"
        );

        let dst_stride = level.width as usize * texel_size;
        for row in 0..height as usize {
            let src_start = row * src_row_len;
            let dst_start =
                (offset_y as usize + row) * dst_stride + offset_x as usize * texel_size;
            level.data[dst_start..dst_start + src_row_len]
                .copy_from_slice(&data[src_start..src_start + src_row_len]);
        }

        trace!(
            "Wrote {}x{} texels at ({}, {}) into mip level {}",
            width,
            height,
            offset_x,
            offset_y,
            mip_level
        );
        Ok(())
    }

    /// Copy a single mip level's content into `dest`.
    ///
    /// This is a whole-level readback: `min(dest.len(), level byte size)`
    /// bytes are copied, silently truncating when `dest` is smaller than the
    /// level. Returns the number of bytes copied.
    ///
    /// Fails with [`TextureBufferError::InvalidMipLevel`] if `mip_level` is
    /// out of range.
    pub fn mip_level_data(
        &self,
        mip_level: u32,
        dest: &mut [u8],
    ) -> Result<u32, TextureBufferError> {
        let level = self.level(mip_level)?;
        let byte_count = dest.len().min(level.data.len());
        dest[..byte_count].copy_from_slice(&level.data[..byte_count]);
        Ok(byte_count as u32)
    }

    fn level(&self, mip_level: u32) -> Result<&MipLevel, TextureBufferError> {
        self.levels
            .get(mip_level as usize)
            .ok_or(TextureBufferError::InvalidMipLevel {
                requested: mip_level,
                count: self.levels.len() as u32,
            })
    }
}
