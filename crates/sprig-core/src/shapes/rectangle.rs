//! Rectangle shape.

use super::{ShapeTrait, Transform, white};
use crate::assets::{IntRect, TextureHandle};
use kurbo::{BezPath, Point, Rect, Shape as KurboShape, Size};
use peniko::Color;

/// An axis-aligned rectangle in local space, with its top-left corner at the
/// local origin.
#[derive(Debug, Clone)]
pub struct Rectangle {
    pub transform: Transform,
    pub size: Size,
    pub fill: Color,
    pub texture: Option<TextureHandle>,
    /// Displayed texture region (`None` = whole texture).
    pub texture_rect: Option<IntRect>,
}

impl Rectangle {
    /// Create a new rectangle.
    pub fn new(size: Size) -> Self {
        Self {
            transform: Transform::default(),
            size,
            fill: white(),
            texture: None,
            texture_rect: None,
        }
    }

    /// Create a rectangle placed at `position`.
    pub fn at(position: Point, size: Size) -> Self {
        let mut rect = Self::new(size);
        rect.transform.position = position;
        rect
    }
}

impl ShapeTrait for Rectangle {
    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    fn local_bounds(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.size)
    }

    fn local_path(&self) -> BezPath {
        self.local_bounds().to_path(0.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_bounds() {
        let rect = Rectangle::at(Point::new(10.0, 20.0), Size::new(100.0, 50.0));
        let bounds = rect.global_bounds();
        assert!((bounds.x0 - 10.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 20.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 110.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_origin_shifts_bounds() {
        let mut rect = Rectangle::at(Point::new(10.0, 10.0), Size::new(20.0, 20.0));
        rect.transform.origin = Point::new(10.0, 10.0);
        let bounds = rect.global_bounds();
        assert!((bounds.x0 - 0.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 20.0).abs() < f64::EPSILON);
    }
}
