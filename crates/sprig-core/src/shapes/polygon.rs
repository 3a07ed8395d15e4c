//! Convex polygon shape.

use super::{ShapeTrait, Transform, white};
use crate::assets::{IntRect, TextureHandle};
use kurbo::{BezPath, Point, Rect};
use peniko::Color;

/// A convex polygon given by its points in local coordinates.
#[derive(Debug, Clone)]
pub struct Polygon {
    pub transform: Transform,
    pub points: Vec<Point>,
    pub fill: Color,
    pub texture: Option<TextureHandle>,
    /// Displayed texture region (`None` = whole texture).
    pub texture_rect: Option<IntRect>,
}

impl Polygon {
    /// Create a polygon from its points.
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            transform: Transform::default(),
            points,
            fill: white(),
            texture: None,
            texture_rect: None,
        }
    }

    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the polygon has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl ShapeTrait for Polygon {
    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    fn local_bounds(&self) -> Rect {
        let Some(first) = self.points.first() else {
            return Rect::ZERO;
        };
        self.points
            .iter()
            .fold(Rect::from_points(*first, *first), |bounds, point| {
                bounds.union_pt(*point)
            })
    }

    fn local_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut points = self.points.iter();
        if let Some(first) = points.next() {
            path.move_to(*first);
            for point in points {
                path.line_to(*point);
            }
            path.close_path();
        }
        path
    }
}
