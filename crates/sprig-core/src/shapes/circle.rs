//! Circle shape.

use super::{ShapeTrait, Transform, white};
use crate::assets::{IntRect, TextureHandle};
use kurbo::{BezPath, Circle as KurboCircle, Point, Rect, Shape as KurboShape};
use peniko::Color;

/// A circle whose local bounding box starts at the local origin, so its
/// center sits at `(radius, radius)`.
#[derive(Debug, Clone)]
pub struct Circle {
    pub transform: Transform,
    pub radius: f64,
    pub fill: Color,
    pub texture: Option<TextureHandle>,
    /// Displayed texture region (`None` = whole texture).
    pub texture_rect: Option<IntRect>,
}

impl Circle {
    /// Create a new circle.
    pub fn new(radius: f64) -> Self {
        Self {
            transform: Transform::default(),
            radius,
            fill: white(),
            texture: None,
            texture_rect: None,
        }
    }

    /// Center in local coordinates.
    pub fn local_center(&self) -> Point {
        Point::new(self.radius, self.radius)
    }
}

impl ShapeTrait for Circle {
    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    fn local_bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.radius * 2.0, self.radius * 2.0)
    }

    fn local_path(&self) -> BezPath {
        KurboCircle::new(self.local_center(), self.radius).to_path(0.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_bounds() {
        let mut circle = Circle::new(10.0);
        circle.transform.position = Point::new(500.0, 500.0);
        let bounds = circle.global_bounds();
        assert!((bounds.x0 - 500.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 520.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 520.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_local_center() {
        let circle = Circle::new(4.0);
        assert_eq!(circle.local_center(), Point::new(4.0, 4.0));
    }
}
