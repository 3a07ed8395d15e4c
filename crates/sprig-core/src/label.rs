//! Text label drawn on top of a widget's shape.

use crate::assets::FontHandle;
use crate::shapes::{SerializableColor, Transform};
use kurbo::{Point, Rect, Size};
use peniko::Color;
use std::cell::Cell;

/// A string with its font, character size and color.
#[derive(Debug, Clone)]
pub struct Label {
    /// The text content.
    pub content: String,
    pub font: Option<FontHandle>,
    /// Character size in pixels.
    pub character_size: f64,
    pub color: Color,
    pub transform: Transform,
    /// Layout size measured by the renderer. If None, approximate bounds are
    /// used.
    measured_size: Cell<Option<Size>>,
}

impl Default for Label {
    fn default() -> Self {
        Self {
            content: String::new(),
            font: None,
            character_size: Self::DEFAULT_CHARACTER_SIZE,
            color: SerializableColor::white().into(),
            transform: Transform::default(),
            measured_size: Cell::new(None),
        }
    }
}

impl Label {
    pub const DEFAULT_CHARACTER_SIZE: f64 = 30.0;

    /// Average glyph advance as a fraction of the character size.
    const CHAR_WIDTH_FACTOR: f64 = 0.55;
    const LINE_HEIGHT_FACTOR: f64 = 1.2;

    /// Create a label with the default character size and no font.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Create a label with an explicit font and character size.
    pub fn with_font(content: impl Into<String>, font: FontHandle, character_size: f64) -> Self {
        Self {
            content: content.into(),
            font: Some(font),
            character_size,
            ..Self::default()
        }
    }

    /// Replace the text content.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.measured_size.set(None);
    }

    /// Record the layout size computed by the renderer.
    pub fn set_measured_size(&self, size: Size) {
        self.measured_size.set(Some(size));
    }

    /// Bounding box in local coordinates.
    pub fn local_bounds(&self) -> Rect {
        let size = self
            .measured_size
            .get()
            .unwrap_or_else(|| self.approximate_size());
        Rect::from_origin_size(Point::ZERO, size)
    }

    /// Axis-aligned bounding box in world coordinates.
    pub fn global_bounds(&self) -> Rect {
        self.transform.affine().transform_rect_bbox(self.local_bounds())
    }

    /// Put the label's center at `point`.
    pub fn center_on(&mut self, point: Point) {
        let bounds = self.local_bounds();
        self.transform.origin = bounds.center();
        self.transform.position = point;
    }

    fn approximate_size(&self) -> Size {
        if self.content.is_empty() {
            return Size::ZERO;
        }
        let max_line_len = self
            .content
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let line_count = self.content.lines().count().max(1);
        Size::new(
            max_line_len as f64 * self.character_size * Self::CHAR_WIDTH_FACTOR,
            line_count as f64 * self.character_size * Self::LINE_HEIGHT_FACTOR,
        )
    }
}
