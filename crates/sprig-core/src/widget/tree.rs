//! Widget-level dispatch over a [`CompositeTree`].

use super::button::Widget;
use crate::input::{PointerSource, WidgetEvent};
use crate::render::RenderTarget;
use crate::tree::{CompositeTree, NodeId};

/// A tree of widgets.
pub type WidgetTree = CompositeTree<Widget>;

impl CompositeTree<Widget> {
    /// Feed `event` to `id` and its direct children.
    pub fn process_event<P: PointerSource + ?Sized>(
        &mut self,
        id: NodeId,
        event: &WidgetEvent,
        pointer: &P,
    ) {
        self.apply_for_each(id, |widget| widget.process_event(event, pointer));
    }

    /// Draw `id`, then its direct children in insertion order.
    pub fn draw<R: RenderTarget + ?Sized>(&self, id: NodeId, target: &mut R) {
        self.visit_each(id, |widget| widget.draw(&mut *target));
    }

    pub fn force_hover(&mut self, id: NodeId) {
        self.apply_for_each(id, Widget::force_hover);
    }

    pub fn force_idle(&mut self, id: NodeId) {
        self.apply_for_each(id, Widget::force_idle);
    }

    pub fn force_activate(&mut self, id: NodeId) {
        self.apply_for_each(id, Widget::force_activate);
    }
}
