//! CPU-side scene resources.
//!
//! Resources in this crate hold their data in ordinary owned memory and know
//! nothing about any GPU API. A scene layer owns them, mutates them through
//! their update methods and hands their bytes to whatever realises them on a
//! device.

pub mod error;
pub mod texture;

pub use error::TextureBufferError;
pub use texture::Texture2DBuffer;
