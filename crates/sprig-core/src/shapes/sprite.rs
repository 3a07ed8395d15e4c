//! Textured quad.

use super::{ShapeTrait, Transform, white};
use crate::assets::{IntRect, TextureHandle};
use kurbo::{BezPath, Point, Rect, Shape as KurboShape};
use peniko::Color;

/// A quad displaying a region of a texture, modulated by a tint color.
#[derive(Debug, Clone)]
pub struct Sprite {
    pub transform: Transform,
    pub texture: Option<TextureHandle>,
    /// Displayed texture region; also defines the sprite's size.
    pub texture_rect: IntRect,
    pub tint: Color,
}

impl Default for Sprite {
    fn default() -> Self {
        Self {
            transform: Transform::default(),
            texture: None,
            texture_rect: IntRect::default(),
            tint: white(),
        }
    }
}

impl Sprite {
    /// Create a sprite showing the whole texture.
    pub fn new(texture: TextureHandle) -> Self {
        Self {
            texture: Some(texture),
            texture_rect: texture.full_rect(),
            ..Self::default()
        }
    }

    /// Bind a texture. A sprite without a texture region adopts the full
    /// texture; an existing region is kept.
    pub fn set_texture(&mut self, texture: Option<TextureHandle>) {
        if self.texture_rect.is_empty() {
            if let Some(texture) = texture {
                self.texture_rect = texture.full_rect();
            }
        }
        self.texture = texture;
    }
}

impl ShapeTrait for Sprite {
    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    fn local_bounds(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.texture_rect.size())
    }

    fn local_path(&self) -> BezPath {
        self.local_bounds().to_path(0.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprite_size_from_texture() {
        let sprite = Sprite::new(TextureHandle::new(1, 64, 32));
        assert_eq!(sprite.local_bounds(), Rect::new(0.0, 0.0, 64.0, 32.0));
    }

    #[test]
    fn test_set_texture_keeps_existing_rect() {
        let mut sprite = Sprite::new(TextureHandle::new(1, 64, 32));
        sprite.texture_rect = IntRect::new(0, 0, 16, 16);
        sprite.set_texture(Some(TextureHandle::new(2, 128, 128)));
        assert_eq!(sprite.texture_rect, IntRect::new(0, 0, 16, 16));
    }

    #[test]
    fn test_set_texture_on_empty_sprite() {
        let mut sprite = Sprite::default();
        sprite.set_texture(Some(TextureHandle::new(2, 10, 12)));
        assert_eq!(sprite.texture_rect, IntRect::new(0, 0, 10, 12));
    }
}
