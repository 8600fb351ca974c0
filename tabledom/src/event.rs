use crate::element::{Document, NodeId};
use crate::observe::ObserverId;

/// Notifications delivered to whoever registered interest in a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The scroll offset of a listened node changed.
    Scroll { target: NodeId },
    /// The border-box size of an observed node changed.
    Resize {
        target: NodeId,
        observer: ObserverId,
    },
}

impl Event {
    pub fn target(&self) -> NodeId {
        match self {
            Event::Scroll { target } | Event::Resize { target, .. } => *target,
        }
    }
}

impl Document {
    /// Drain queued scroll events, then collect resize notifications.
    pub fn poll_events(&mut self) -> Vec<Event> {
        let mut events: Vec<Event> = self
            .pending_scroll
            .drain(..)
            .map(|target| Event::Scroll { target })
            .collect();
        events.extend(self.collect_resize_notifications());
        events
    }

    /// Whether anything is waiting to be polled without reflowing.
    pub fn has_pending_scroll(&self) -> bool {
        !self.pending_scroll.is_empty()
    }
}
