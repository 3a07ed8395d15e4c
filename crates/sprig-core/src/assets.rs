//! Handles to externally owned assets.
//!
//! Textures and fonts are loaded and owned by the rendering backend. Widgets
//! only keep copies of these small handles.
//!
//! **Lifetime hazard:** nothing in this crate checks that the asset behind a
//! handle still exists. The backend must keep every texture and font alive for
//! as long as any widget references it; drawing a widget whose handle was
//! released is the backend's problem to detect.

use kurbo::Size;

/// Handle to a texture owned by the rendering backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle {
    /// Backend-defined identifier.
    pub id: u64,
    /// Texture width in pixels.
    pub width: u32,
    /// Texture height in pixels.
    pub height: u32,
}

impl TextureHandle {
    pub fn new(id: u64, width: u32, height: u32) -> Self {
        Self { id, width, height }
    }

    /// Texture size in pixels.
    pub fn size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    /// Rectangle covering the whole texture.
    pub fn full_rect(&self) -> IntRect {
        IntRect::new(0, 0, saturating_i32(self.width), saturating_i32(self.height))
    }
}

/// Handle to a font owned by the rendering backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontHandle {
    pub id: u64,
}

impl FontHandle {
    pub fn new(id: u64) -> Self {
        Self { id }
    }
}

/// Integer rectangle selecting a sub-region of a texture, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IntRect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl IntRect {
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Rectangle `(0, 0, w, h)` from a floating-point size, truncating toward zero.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.width as i32, size.height as i32)
    }

    /// Whether the rectangle covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Size of the selected region (absolute, flipped regions count positive).
    pub fn size(&self) -> Size {
        Size::new(
            f64::from(self.width.unsigned_abs()),
            f64::from(self.height.unsigned_abs()),
        )
    }
}

fn saturating_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
