//! Mutable texture resources owned by a scene.

mod buffer;

pub use self::buffer::Texture2DBuffer;
