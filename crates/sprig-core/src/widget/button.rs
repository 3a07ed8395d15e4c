//! The widget node: a shape, a label and the state-driven visuals.

use super::state::{ButtonState, Trigger, VisualMode, WidgetStateMachine};
use crate::assets::TextureHandle;
use crate::input::{MouseButton, PRIMARY_DEVICE_BUTTON, PointerSource, WidgetEvent};
use crate::label::Label;
use crate::render::RenderTarget;
use crate::shapes::{ShapeVariant, white};
use crate::style::ButtonStyle;
use kurbo::{Point, Rect, Size};
use peniko::Color;
use std::fmt;

/// Activation callback.
pub type ActivateFn = Box<dyn FnMut()>;

/// An interactive widget.
///
/// Holds both a color triple and a texture triple, indexed by
/// [`ButtonState::index`]. The [`VisualMode`] decides which one is applied
/// when the state changes; the other stays allocated.
pub struct Widget {
    shape: ShapeVariant,
    label: Label,
    on_activate: Option<ActivateFn>,
    colors: [Color; 3],
    textures: [Option<TextureHandle>; 3],
    mode: VisualMode,
    /// Size applied by [`Widget::resize`] in textured mode.
    size_override: Size,
    machine: WidgetStateMachine,
}

impl Default for Widget {
    fn default() -> Self {
        Self::new(ShapeVariant::default())
    }
}

impl fmt::Debug for Widget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Widget")
            .field("shape", &self.shape)
            .field("label", &self.label.content)
            .field("state", &self.machine.state())
            .field("mode", &self.mode)
            .field("has_callback", &self.on_activate.is_some())
            .finish_non_exhaustive()
    }
}

impl Widget {
    /// Create a widget with the given shape and an empty label.
    pub fn new(shape: impl Into<ShapeVariant>) -> Self {
        Self::with_label(shape, Label::default())
    }

    pub fn with_label(shape: impl Into<ShapeVariant>, label: Label) -> Self {
        Self {
            shape: shape.into(),
            label,
            on_activate: None,
            colors: [white(); 3],
            textures: [None; 3],
            mode: VisualMode::Color,
            size_override: Size::ZERO,
            machine: WidgetStateMachine::new(),
        }
    }

    /// A text-only widget over a zero-sized rectangle.
    pub fn from_label(label: Label) -> Self {
        Self::with_label(ShapeVariant::default(), label)
    }

    /// Apply a style: color triple, color mode, and label color and size.
    pub fn with_style(mut self, style: &ButtonStyle) -> Self {
        self.colors = style.colors();
        self.mode = VisualMode::Color;
        self.label.color = style.label_color.into();
        self.label.character_size = style.character_size;
        self.shape.set_fill(self.colors[self.state().index()]);
        self
    }

    // --- Accessors ---

    pub fn shape(&self) -> &ShapeVariant {
        &self.shape
    }

    pub fn shape_mut(&mut self) -> &mut ShapeVariant {
        &mut self.shape
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn label_mut(&mut self) -> &mut Label {
        &mut self.label
    }

    pub fn state(&self) -> ButtonState {
        self.machine.state()
    }

    pub fn mode(&self) -> VisualMode {
        self.mode
    }

    pub fn colors(&self) -> &[Color; 3] {
        &self.colors
    }

    pub fn textures(&self) -> &[Option<TextureHandle>; 3] {
        &self.textures
    }

    pub fn size_override(&self) -> Size {
        self.size_override
    }

    pub fn position(&self) -> Point {
        self.shape.position()
    }

    pub fn global_bounds(&self) -> Rect {
        self.shape.global_bounds()
    }

    /// Check if a point (in world coordinates) is over the shape.
    pub fn contains(&self, point: Point) -> bool {
        self.shape.contains(point)
    }

    /// Check the current position of `pointer` against the shape.
    pub fn contains_pointer<P: PointerSource + ?Sized>(&self, pointer: &P) -> bool {
        self.contains(pointer.pointer_position())
    }

    // --- Configuration ---

    /// Set the activation callback, replacing any previous one.
    pub fn on_activate<F>(&mut self, callback: F) -> &mut Self
    where
        F: FnMut() + 'static,
    {
        self.on_activate = Some(Box::new(callback));
        self
    }

    /// Set the idle, hovered and pressed colors and switch to color mode.
    pub fn set_color_state(&mut self, idle: Color, hovered: Color, pressed: Color) -> &mut Self {
        self.colors = [idle, hovered, pressed];
        self.mode = VisualMode::Color;
        self
    }

    /// Set the idle, hovered and pressed textures and switch to textured mode.
    pub fn set_texture_state(
        &mut self,
        idle: TextureHandle,
        hovered: TextureHandle,
        pressed: TextureHandle,
    ) -> &mut Self {
        self.textures = [Some(idle), Some(hovered), Some(pressed)];
        self.mode = VisualMode::Textured;
        self
    }

    pub fn set_size_override(&mut self, size: Size) -> &mut Self {
        self.size_override = size;
        self
    }

    pub fn set_position(&mut self, position: Point) -> &mut Self {
        self.shape.set_position(position);
        self
    }

    pub fn set_origin(&mut self, origin: Point) -> &mut Self {
        self.shape.set_origin(origin);
        self
    }

    /// Pivot the shape around its visual center.
    pub fn center_origin(&mut self) -> &mut Self {
        self.shape.center_origin();
        self
    }

    /// Rotation in radians.
    pub fn set_rotation(&mut self, rotation: f64) -> &mut Self {
        self.shape.set_rotation(rotation);
        self
    }

    pub fn set_string(&mut self, content: impl Into<String>) -> &mut Self {
        self.label.set_content(content);
        self
    }

    /// Place the label's center on the shape's position.
    pub fn center_label(&mut self) -> &mut Self {
        let position = self.shape.position();
        self.label.center_on(position);
        self
    }

    /// Apply the size override to the shape. Does nothing in color mode.
    ///
    /// Rectangles take the size, circles take its width as radius, polygons
    /// and sprites display the `(0, 0, width, height)` texture region.
    pub fn resize(&mut self) -> &mut Self {
        match self.mode {
            VisualMode::Color => {}
            VisualMode::Textured => self.shape.resize(self.size_override),
        }
        self
    }

    /// Fill the shape with `color` and switch to color mode.
    pub fn apply_color(&mut self, color: Color) {
        self.mode = VisualMode::Color;
        self.shape.set_fill(color);
    }

    /// Bind `texture` to the shape and switch to textured mode.
    pub fn apply_texture(&mut self, texture: TextureHandle) {
        self.mode = VisualMode::Textured;
        self.shape.set_texture(Some(texture));
    }

    // --- Interaction ---

    /// Show the hovered visual regardless of the pointer.
    pub fn force_hover(&mut self) {
        self.fire(Trigger::ForceHover);
    }

    /// Show the idle visual regardless of the pointer.
    pub fn force_idle(&mut self) {
        self.fire(Trigger::ForceIdle);
    }

    /// Invoke the callback as if clicked, then show the hovered visual.
    pub fn force_activate(&mut self) {
        self.fire(Trigger::ForceActivate);
    }

    /// Update the state from an input event.
    ///
    /// Pointer events are hit-tested at their own coordinates. Device button
    /// events carry none, so `pointer` is queried for the current position.
    /// Only the primary mouse button and device button
    /// [`PRIMARY_DEVICE_BUTTON`] are handled.
    pub fn process_event<P: PointerSource + ?Sized>(&mut self, event: &WidgetEvent, pointer: &P) {
        let trigger = match *event {
            WidgetEvent::PointerMove { position } => Trigger::Move {
                inside: self.contains(position),
            },
            WidgetEvent::PointerDown {
                position,
                button: MouseButton::Left,
            } => Trigger::Press {
                inside: self.contains(position),
            },
            WidgetEvent::PointerUp {
                position,
                button: MouseButton::Left,
            } => Trigger::Release {
                inside: self.contains(position),
            },
            WidgetEvent::PointerDown { .. } | WidgetEvent::PointerUp { .. } => return,
            WidgetEvent::DeviceButtonDown { index } if index == PRIMARY_DEVICE_BUTTON => {
                Trigger::Press {
                    inside: self.contains_pointer(pointer),
                }
            }
            WidgetEvent::DeviceButtonUp { index } if index == PRIMARY_DEVICE_BUTTON => {
                Trigger::Release {
                    inside: self.contains_pointer(pointer),
                }
            }
            WidgetEvent::DeviceButtonDown { .. } | WidgetEvent::DeviceButtonUp { .. } => return,
        };
        self.fire(trigger);
    }

    /// Draw the shape, then the label.
    pub fn draw<R: RenderTarget + ?Sized>(&self, target: &mut R) {
        target.draw_shape(&self.shape);
        target.draw_label(&self.label);
    }

    fn fire(&mut self, trigger: Trigger) {
        let Some(transition) = self.machine.handle(trigger) else {
            return;
        };
        if let Some(callback) = self.on_activate.as_mut().filter(|_| transition.activate) {
            log::trace!("activating widget {:?}", self.label.content);
            callback();
        }
        self.apply_state(transition.state);
    }

    fn apply_state(&mut self, state: ButtonState) {
        let index = state.index();
        match self.mode {
            VisualMode::Color => self.shape.set_fill(self.colors[index]),
            VisualMode::Textured => self.shape.set_texture(self.textures[index]),
        }
    }
}
