//! Drawable shapes carried by widgets.

mod circle;
mod polygon;
mod rectangle;
mod sprite;

pub use circle::Circle;
pub use polygon::Polygon;
pub use rectangle::Rectangle;
pub use sprite::Sprite;

use crate::assets::{IntRect, TextureHandle};
use kurbo::{Affine, BezPath, Point, Rect, Size};
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Opaque white, the default fill of every shape.
pub fn white() -> Color {
    SerializableColor::white().into()
}

/// Position, rotation and origin of a drawable.
///
/// The origin is a point in local coordinates that is placed at `position`
/// and around which the drawable rotates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Point,
    /// Rotation angle in radians (around the origin).
    pub rotation: f64,
    pub origin: Point,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Point::ZERO,
            rotation: 0.0,
            origin: Point::ZERO,
        }
    }
}

impl Transform {
    /// Local-to-world transform.
    pub fn affine(&self) -> Affine {
        Affine::translate(self.position.to_vec2())
            * Affine::rotate(self.rotation)
            * Affine::translate(-self.origin.to_vec2())
    }
}

/// Common geometry of all shape kinds.
pub trait ShapeTrait {
    fn transform(&self) -> &Transform;

    fn transform_mut(&mut self) -> &mut Transform;

    /// Bounding box in local coordinates (before the transform).
    fn local_bounds(&self) -> Rect;

    /// Outline in local coordinates.
    fn local_path(&self) -> BezPath;

    /// Axis-aligned bounding box in world coordinates.
    fn global_bounds(&self) -> Rect {
        self.transform().affine().transform_rect_bbox(self.local_bounds())
    }

    /// Outline in world coordinates.
    fn to_path(&self) -> BezPath {
        self.transform().affine() * self.local_path()
    }
}

/// Discriminant of a [`ShapeVariant`], for backends and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Polygon,
    Sprite,
}

/// The shape a widget draws: exactly one of four kinds.
///
/// Every operation matches all four kinds explicitly, so adding a kind is a
/// compile error until each operation handles it.
#[derive(Debug, Clone)]
pub enum ShapeVariant {
    Rectangle(Rectangle),
    Circle(Circle),
    Polygon(Polygon),
    Sprite(Sprite),
}

impl Default for ShapeVariant {
    fn default() -> Self {
        ShapeVariant::Rectangle(Rectangle::new(Size::ZERO))
    }
}

impl From<Rectangle> for ShapeVariant {
    fn from(shape: Rectangle) -> Self {
        ShapeVariant::Rectangle(shape)
    }
}

impl From<Circle> for ShapeVariant {
    fn from(shape: Circle) -> Self {
        ShapeVariant::Circle(shape)
    }
}

impl From<Polygon> for ShapeVariant {
    fn from(shape: Polygon) -> Self {
        ShapeVariant::Polygon(shape)
    }
}

impl From<Sprite> for ShapeVariant {
    fn from(shape: Sprite) -> Self {
        ShapeVariant::Sprite(shape)
    }
}

impl ShapeVariant {
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeVariant::Rectangle(_) => ShapeKind::Rectangle,
            ShapeVariant::Circle(_) => ShapeKind::Circle,
            ShapeVariant::Polygon(_) => ShapeKind::Polygon,
            ShapeVariant::Sprite(_) => ShapeKind::Sprite,
        }
    }

    pub fn transform(&self) -> &Transform {
        match self {
            ShapeVariant::Rectangle(s) => s.transform(),
            ShapeVariant::Circle(s) => s.transform(),
            ShapeVariant::Polygon(s) => s.transform(),
            ShapeVariant::Sprite(s) => s.transform(),
        }
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        match self {
            ShapeVariant::Rectangle(s) => s.transform_mut(),
            ShapeVariant::Circle(s) => s.transform_mut(),
            ShapeVariant::Polygon(s) => s.transform_mut(),
            ShapeVariant::Sprite(s) => s.transform_mut(),
        }
    }

    pub fn position(&self) -> Point {
        self.transform().position
    }

    pub fn set_position(&mut self, position: Point) {
        self.transform_mut().position = position;
    }

    /// Rotation in radians.
    pub fn rotation(&self) -> f64 {
        self.transform().rotation
    }

    pub fn set_rotation(&mut self, rotation: f64) {
        self.transform_mut().rotation = rotation;
    }

    pub fn origin(&self) -> Point {
        self.transform().origin
    }

    pub fn set_origin(&mut self, origin: Point) {
        self.transform_mut().origin = origin;
    }

    /// Move the origin to the geometric center of the local bounds, so
    /// position and rotation refer to the visual center instead of a corner.
    pub fn center_origin(&mut self) {
        let bounds = self.local_bounds();
        self.set_origin(Point::new(
            bounds.x0 + bounds.width() / 2.0,
            bounds.y0 + bounds.height() / 2.0,
        ));
    }

    pub fn local_bounds(&self) -> Rect {
        match self {
            ShapeVariant::Rectangle(s) => s.local_bounds(),
            ShapeVariant::Circle(s) => s.local_bounds(),
            ShapeVariant::Polygon(s) => s.local_bounds(),
            ShapeVariant::Sprite(s) => s.local_bounds(),
        }
    }

    pub fn global_bounds(&self) -> Rect {
        match self {
            ShapeVariant::Rectangle(s) => s.global_bounds(),
            ShapeVariant::Circle(s) => s.global_bounds(),
            ShapeVariant::Polygon(s) => s.global_bounds(),
            ShapeVariant::Sprite(s) => s.global_bounds(),
        }
    }

    /// Check if a point (in world coordinates) lies inside the global bounds.
    pub fn contains(&self, point: Point) -> bool {
        self.global_bounds().contains(point)
    }

    pub fn to_path(&self) -> BezPath {
        match self {
            ShapeVariant::Rectangle(s) => s.to_path(),
            ShapeVariant::Circle(s) => s.to_path(),
            ShapeVariant::Polygon(s) => s.to_path(),
            ShapeVariant::Sprite(s) => s.to_path(),
        }
    }

    /// Fill color, or tint for sprites.
    pub fn fill(&self) -> Color {
        match self {
            ShapeVariant::Rectangle(s) => s.fill,
            ShapeVariant::Circle(s) => s.fill,
            ShapeVariant::Polygon(s) => s.fill,
            ShapeVariant::Sprite(s) => s.tint,
        }
    }

    /// Set the fill color (tint for sprites).
    pub fn set_fill(&mut self, color: Color) {
        match self {
            ShapeVariant::Rectangle(s) => s.fill = color,
            ShapeVariant::Circle(s) => s.fill = color,
            ShapeVariant::Polygon(s) => s.fill = color,
            ShapeVariant::Sprite(s) => s.tint = color,
        }
    }

    pub fn texture(&self) -> Option<TextureHandle> {
        match self {
            ShapeVariant::Rectangle(s) => s.texture,
            ShapeVariant::Circle(s) => s.texture,
            ShapeVariant::Polygon(s) => s.texture,
            ShapeVariant::Sprite(s) => s.texture,
        }
    }

    /// Bind (or unbind) the texture.
    pub fn set_texture(&mut self, texture: Option<TextureHandle>) {
        match self {
            ShapeVariant::Rectangle(s) => s.texture = texture,
            ShapeVariant::Circle(s) => s.texture = texture,
            ShapeVariant::Polygon(s) => s.texture = texture,
            ShapeVariant::Sprite(s) => s.set_texture(texture),
        }
    }

    /// Region of the bound texture that is displayed (`None` = whole texture).
    pub fn texture_rect(&self) -> Option<IntRect> {
        match self {
            ShapeVariant::Rectangle(s) => s.texture_rect,
            ShapeVariant::Circle(s) => s.texture_rect,
            ShapeVariant::Polygon(s) => s.texture_rect,
            ShapeVariant::Sprite(s) => Some(s.texture_rect),
        }
    }

    /// Apply a size with the per-kind policy: rectangles take the size,
    /// circles take `width` as radius, polygons and sprites rebind their
    /// texture rect to `(0, 0, width, height)`.
    pub fn resize(&mut self, size: Size) {
        match self {
            ShapeVariant::Rectangle(s) => s.size = size,
            ShapeVariant::Circle(s) => s.radius = size.width,
            ShapeVariant::Polygon(s) => s.texture_rect = Some(IntRect::from_size(size)),
            ShapeVariant::Sprite(s) => s.texture_rect = IntRect::from_size(size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_center_origin_all_kinds() {
        let texture = TextureHandle::new(1, 40, 20);
        let mut shapes: Vec<ShapeVariant> = vec![
            Rectangle::new(Size::new(40.0, 20.0)).into(),
            Circle::new(10.0).into(),
            Polygon::new(vec![
                Point::new(0.0, 0.0),
                Point::new(40.0, 0.0),
                Point::new(20.0, 20.0),
            ])
            .into(),
            Sprite::new(texture).into(),
        ];

        for shape in &mut shapes {
            shape.set_position(Point::new(100.0, 100.0));
            shape.center_origin();
            let bounds = shape.global_bounds();
            let center = bounds.center();
            assert!(close(center.x, 100.0), "{:?}", shape.kind());
            assert!(close(center.y, 100.0), "{:?}", shape.kind());
        }
    }

    #[test]
    fn test_rotation_pivots_on_origin() {
        let mut shape: ShapeVariant = Rectangle::new(Size::new(40.0, 20.0)).into();
        shape.set_position(Point::new(50.0, 50.0));
        shape.center_origin();
        shape.set_rotation(std::f64::consts::FRAC_PI_2);

        let bounds = shape.global_bounds();
        assert!(close(bounds.width(), 20.0));
        assert!(close(bounds.height(), 40.0));
        assert!(close(bounds.center().x, 50.0));
        assert!(close(bounds.center().y, 50.0));
    }

    #[test]
    fn test_fill_and_tint() {
        let red = Color::from_rgba8(255, 0, 0, 255);
        let mut rect: ShapeVariant = Rectangle::new(Size::new(1.0, 1.0)).into();
        let mut sprite: ShapeVariant = Sprite::default().into();

        rect.set_fill(red);
        sprite.set_fill(red);

        assert_eq!(SerializableColor::from(rect.fill()), SerializableColor::new(255, 0, 0, 255));
        assert_eq!(SerializableColor::from(sprite.fill()), SerializableColor::new(255, 0, 0, 255));
    }

    #[test]
    fn test_resize_policies() {
        let size = Size::new(32.7, 16.2);

        let mut rect: ShapeVariant = Rectangle::new(Size::new(1.0, 1.0)).into();
        rect.resize(size);
        assert!(close(rect.local_bounds().width(), 32.7));

        let mut circle: ShapeVariant = Circle::new(1.0).into();
        circle.resize(size);
        assert!(close(circle.local_bounds().width(), 65.4));

        let mut polygon: ShapeVariant = Polygon::new(vec![Point::ZERO, Point::new(5.0, 5.0)]).into();
        polygon.resize(size);
        assert_eq!(polygon.texture_rect(), Some(IntRect::new(0, 0, 32, 16)));

        let mut sprite: ShapeVariant = Sprite::new(TextureHandle::new(1, 64, 64)).into();
        sprite.resize(size);
        assert_eq!(sprite.texture_rect(), Some(IntRect::new(0, 0, 32, 16)));
        assert!(close(sprite.local_bounds().width(), 32.0));
    }

    #[test]
    fn test_texture_binding() {
        let texture = TextureHandle::new(3, 8, 8);
        let mut circle: ShapeVariant = Circle::new(4.0).into();
        assert_eq!(circle.texture(), None);
        circle.set_texture(Some(texture));
        assert_eq!(circle.texture(), Some(texture));
        circle.set_texture(None);
        assert_eq!(circle.texture(), None);
    }

    #[test]
    fn test_serializable_color_roundtrip() {
        let color = SerializableColor::new(12, 34, 56, 78);
        let peniko: Color = color.into();
        assert_eq!(SerializableColor::from(peniko), color);
    }
}
