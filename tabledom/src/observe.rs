use std::collections::BTreeMap;

use crate::element::{Document, NodeId};
use crate::event::Event;
use crate::layout::BoxSize;

/// Handle returned by [`Document::observe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

#[derive(Debug)]
struct Observation {
    target: NodeId,
    /// Size delivered with the last notification. `None` until the first one.
    last: Option<BoxSize>,
}

/// Resize observations, delivered in registration order.
#[derive(Debug, Default)]
pub(crate) struct ResizeObservers {
    next: u64,
    entries: BTreeMap<ObserverId, Observation>,
}

impl ResizeObservers {
    pub(crate) fn forget(&mut self, removed: &[NodeId]) {
        self.entries
            .retain(|_, observation| !removed.contains(&observation.target));
    }
}

impl Document {
    /// Start observing the border-box size of `node`. The first notification
    /// fires on the next collection once the node has been laid out.
    pub fn observe(&mut self, node: NodeId) -> ObserverId {
        let observers = &mut self.observers;
        let id = ObserverId(observers.next);
        observers.next += 1;
        observers.entries.insert(
            id,
            Observation {
                target: node,
                last: None,
            },
        );
        id
    }

    /// Returns false if the observation was already gone.
    pub fn unobserve(&mut self, id: ObserverId) -> bool {
        self.observers.entries.remove(&id).is_some()
    }

    /// Observed node for a handle, if the observation is still live.
    pub fn observed(&self, id: ObserverId) -> Option<NodeId> {
        self.observers.entries.get(&id).map(|o| o.target)
    }

    /// Reflow and produce one notification per observed node whose size
    /// changed since its last notification.
    pub fn collect_resize_notifications(&mut self) -> Vec<Event> {
        let layout = self.layout().clone();
        let mut events = Vec::new();

        for (&observer, observation) in self.observers.entries.iter_mut() {
            let Some(layout_box) = layout.get(&observation.target) else {
                continue;
            };
            let size = layout_box.rect.size();
            if observation.last == Some(size) {
                continue;
            }
            log::trace!(
                "resize of {:?}: {:?} -> {:?}",
                observation.target,
                observation.last,
                size
            );
            observation.last = Some(size);
            events.push(Event::Resize {
                target: observation.target,
                observer,
            });
        }

        events
    }
}
