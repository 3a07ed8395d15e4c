//! Interactive widgets.
//!
//! A [`Widget`] pairs a shape with a label and switches between idle, hovered
//! and pressed visuals as input arrives. Widgets live in a [`WidgetTree`];
//! events and draws sent to a node reach that node and its direct children.

mod button;
mod state;
mod tree;

pub use button::{ActivateFn, Widget};
pub use state::{ButtonState, Transition, Trigger, VisualMode, WidgetStateMachine};
pub use tree::WidgetTree;
