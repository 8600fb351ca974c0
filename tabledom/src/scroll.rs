use std::collections::BTreeMap;

use crate::element::{Document, Element, NodeId};
use crate::layout::LayoutBox;
use crate::types::Overflow;

/// Scroll offset of a scroll container, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOffset {
    pub x: f32,
    pub y: f32,
}

impl ScrollOffset {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Handle returned by [`Document::add_scroll_listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Registered scroll listeners, keyed by handle.
#[derive(Debug, Default)]
pub(crate) struct ScrollListeners {
    next: u64,
    targets: BTreeMap<ListenerId, NodeId>,
}

impl ScrollListeners {
    fn add(&mut self, node: NodeId) -> ListenerId {
        let id = ListenerId(self.next);
        self.next += 1;
        self.targets.insert(id, node);
        id
    }

    fn remove(&mut self, id: ListenerId) -> bool {
        self.targets.remove(&id).is_some()
    }

    pub(crate) fn is_listening(&self, node: NodeId) -> bool {
        self.targets.values().any(|&target| target == node)
    }

    pub(crate) fn forget(&mut self, removed: &[NodeId]) {
        self.targets.retain(|_, target| !removed.contains(target));
    }
}

impl Document {
    pub fn scroll_offset(&self, node: NodeId) -> ScrollOffset {
        self.node(node).map(|data| data.scroll).unwrap_or_default()
    }

    pub fn scroll_left(&self, node: NodeId) -> f32 {
        self.scroll_offset(node).x
    }

    pub fn scroll_top(&self, node: NodeId) -> f32 {
        self.scroll_offset(node).y
    }

    /// Largest valid offset on each axis (`scrollWidth - clientWidth`).
    pub fn max_scroll(&mut self, node: NodeId) -> ScrollOffset {
        let Some(layout_box) = self.layout_box(node) else {
            return ScrollOffset::default();
        };
        self.element(node)
            .map(|element| scroll_range(element, &layout_box))
            .unwrap_or_default()
    }

    /// Assign an absolute horizontal offset, clamped to the valid range.
    /// Returns the offset actually applied.
    pub fn set_scroll_left(&mut self, node: NodeId, x: f32) -> f32 {
        let current = self.scroll_offset(node);
        self.scroll_to(node, ScrollOffset::new(x, current.y)).x
    }

    /// Assign an absolute vertical offset, clamped to the valid range.
    /// Returns the offset actually applied.
    pub fn set_scroll_top(&mut self, node: NodeId, y: f32) -> f32 {
        let current = self.scroll_offset(node);
        self.scroll_to(node, ScrollOffset::new(current.x, y)).y
    }

    /// Scroll by a relative amount, the way a user gesture does.
    /// Returns true if the offset changed.
    pub fn scroll_by(&mut self, node: NodeId, dx: f32, dy: f32) -> bool {
        let current = self.scroll_offset(node);
        let applied = self.scroll_to(node, ScrollOffset::new(current.x + dx, current.y + dy));
        applied != current
    }

    fn scroll_to(&mut self, node: NodeId, target: ScrollOffset) -> ScrollOffset {
        let max = self.max_scroll(node);
        let clamped = ScrollOffset::new(target.x.clamp(0.0, max.x), target.y.clamp(0.0, max.y));
        self.apply_scroll(node, clamped);
        self.scroll_offset(node)
    }

    /// Store an offset and queue a scroll event if it changed.
    fn apply_scroll(&mut self, node: NodeId, offset: ScrollOffset) {
        let Some(data) = self.node_mut(node) else {
            return;
        };
        if data.scroll == offset {
            return;
        }
        data.scroll = offset;
        // Positions of descendants moved
        self.invalidate();
        if self.listeners.is_listening(node) && !self.pending_scroll.contains(&node) {
            self.pending_scroll.push(node);
        }
    }

    /// Re-clamp every offset after a reflow, since content may have shrunk.
    pub(crate) fn clamp_scroll_offsets(&mut self) {
        let Some(layout) = self.cached_layout() else {
            return;
        };
        let mut adjusted = Vec::new();
        for (&node, layout_box) in layout {
            let offset = self.scroll_offset(node);
            if offset == ScrollOffset::default() {
                continue;
            }
            let max = self
                .element(node)
                .map(|element| scroll_range(element, layout_box))
                .unwrap_or_default();
            let clamped = ScrollOffset::new(offset.x.min(max.x), offset.y.min(max.y));
            if clamped != offset {
                adjusted.push((node, clamped));
            }
        }

        for (node, offset) in adjusted {
            log::debug!("clamping scroll offset of {node:?} to {offset:?}");
            self.apply_scroll(node, offset);
        }
    }

    pub fn add_scroll_listener(&mut self, node: NodeId) -> ListenerId {
        self.listeners.add(node)
    }

    /// Returns false if the listener was already removed.
    pub fn remove_scroll_listener(&mut self, id: ListenerId) -> bool {
        let Some(&node) = self.listeners.targets.get(&id) else {
            return false;
        };
        self.listeners.remove(id);
        if !self.listeners.is_listening(node) {
            self.pending_scroll.retain(|&pending| pending != node);
        }
        true
    }
}

/// Valid offset range of a laid-out node. An axis with visible overflow
/// never scrolls, however far its content reaches.
fn scroll_range(element: &Element, layout_box: &LayoutBox) -> ScrollOffset {
    let range = |overflow: Overflow, scroll: f32, client: f32| {
        if overflow.clips() {
            (scroll - client).max(0.0)
        } else {
            0.0
        }
    };
    ScrollOffset::new(
        range(element.overflow_x, layout_box.scroll_width, layout_box.rect.width),
        range(element.overflow_y, layout_box.scroll_height, layout_box.rect.height),
    )
}
