//! Sprig Core Library
//!
//! Backend-agnostic widget composition: a tree of named, owned widgets, the
//! shapes they are drawn with, and the idle/hovered/pressed state machine that
//! drives their visuals.

pub mod assets;
pub mod input;
pub mod label;
pub mod render;
pub mod shapes;
pub mod style;
pub mod tree;
pub mod widget;

pub use assets::{FontHandle, IntRect, TextureHandle};
pub use input::{InputState, MouseButton, PointerSource, WidgetEvent};
pub use label::Label;
pub use render::RenderTarget;
pub use shapes::{SerializableColor, ShapeKind, ShapeTrait, ShapeVariant, Transform};
pub use style::{ButtonStyle, StyleError};
pub use tree::{CompositeTree, NodeId, NodeStore, TreeError, TreeResult};
pub use widget::{ButtonState, VisualMode, Widget, WidgetStateMachine, WidgetTree};
