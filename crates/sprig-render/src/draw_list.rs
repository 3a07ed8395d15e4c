//! Recorded draw commands.

use kurbo::{BezPath, Rect};
use peniko::Color;
use sprig_core::{FontHandle, Label, RenderTarget, ShapeKind, ShapeVariant, TextureHandle};

/// A snapshot of one draw call, in world coordinates.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    Shape {
        kind: ShapeKind,
        /// Outline with the shape transform applied.
        path: BezPath,
        /// Fill color, or tint for sprites.
        fill: Color,
        texture: Option<TextureHandle>,
    },
    Label {
        content: String,
        bounds: Rect,
        color: Color,
        character_size: f64,
        font: Option<FontHandle>,
    },
}

impl DrawCommand {
    /// World-space bounding box.
    pub fn bounds(&self) -> Rect {
        match self {
            DrawCommand::Shape { path, .. } => kurbo::Shape::bounding_box(path),
            DrawCommand::Label { bounds, .. } => *bounds,
        }
    }
}

/// A [`RenderTarget`] that records what it is asked to draw.
///
/// Backends replay the list in order; [`SvgRenderer`](crate::SvgRenderer)
/// turns it into a document.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop all recorded commands, keeping the allocation.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Union of the bounds of every command, or `None` when empty.
    pub fn bounds(&self) -> Option<Rect> {
        self.commands
            .iter()
            .map(DrawCommand::bounds)
            .reduce(|acc, rect| acc.union(rect))
    }
}

impl RenderTarget for DrawList {
    fn draw_shape(&mut self, shape: &ShapeVariant) {
        self.commands.push(DrawCommand::Shape {
            kind: shape.kind(),
            path: shape.to_path(),
            fill: shape.fill(),
            texture: shape.texture(),
        });
    }

    fn draw_label(&mut self, label: &Label) {
        if label.content.is_empty() {
            log::trace!("skipping empty label");
            return;
        }
        self.commands.push(DrawCommand::Label {
            content: label.content.clone(),
            bounds: label.global_bounds(),
            color: label.color,
            character_size: label.character_size,
            font: label.font,
        });
    }
}
