//! Render sink consumed by widgets.

use crate::label::Label;
use crate::shapes::ShapeVariant;

/// Surface a widget draws onto, provided by the rendering backend.
///
/// A widget issues exactly two calls per draw: its shape, then its label.
pub trait RenderTarget {
    fn draw_shape(&mut self, shape: &ShapeVariant);

    fn draw_label(&mut self, label: &Label);
}
