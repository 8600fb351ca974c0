use super::{Content, Element};
use crate::layout::{self, BoxSize, LayoutBox, LayoutResult};
use crate::observe::ResizeObservers;
use crate::scroll::{ScrollListeners, ScrollOffset};
use crate::text::TextMetrics;
use crate::types::{Edges, Style};

/// Opaque handle to a node in a [`Document`].
///
/// Slots of removed nodes are reused; the generation keeps a stale handle
/// from resolving to whatever lives in its slot now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

impl NodeId {
    /// Arena slot of this node.
    pub fn index(self) -> usize {
        self.index
    }
}

#[derive(Debug)]
pub(crate) struct NodeData {
    pub(crate) element: Element,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) scroll: ScrollOffset,
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    data: Option<NodeData>,
}

/// A live layout tree.
///
/// Nodes are created detached and become part of the rendered tree once
/// they are reachable from [`Document::root`]. Layout is computed lazily:
/// writes invalidate it, and the next measurement read reflows.
#[derive(Debug)]
pub struct Document {
    nodes: Vec<Slot>,
    /// Empty slots, reused by `create`.
    free: Vec<usize>,
    root: NodeId,
    metrics: TextMetrics,
    layout: Option<LayoutResult>,
    pub(crate) listeners: ScrollListeners,
    pub(crate) observers: ResizeObservers,
    /// Nodes with a scroll event waiting to be polled, in firing order.
    pub(crate) pending_scroll: Vec<NodeId>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self::with_metrics(TextMetrics::default())
    }

    pub fn with_metrics(metrics: TextMetrics) -> Self {
        let root = NodeData {
            element: Element::block().id("document"),
            parent: None,
            children: Vec::new(),
            scroll: ScrollOffset::default(),
        };
        Self {
            nodes: vec![Slot {
                generation: 0,
                data: Some(root),
            }],
            free: Vec::new(),
            root: NodeId {
                index: 0,
                generation: 0,
            },
            metrics,
            layout: None,
            listeners: ScrollListeners::default(),
            observers: ResizeObservers::default(),
            pending_scroll: Vec::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn metrics(&self) -> TextMetrics {
        self.metrics
    }

    // =========================================================================
    // Structure
    // =========================================================================

    /// Create a detached node.
    pub fn create(&mut self, element: Element) -> NodeId {
        let data = NodeData {
            element,
            parent: None,
            children: Vec::new(),
            scroll: ScrollOffset::default(),
        };

        if let Some(index) = self.free.pop() {
            if let Some(slot) = self.nodes.get_mut(index) {
                slot.data = Some(data);
                return NodeId {
                    index,
                    generation: slot.generation,
                };
            }
        }

        self.nodes.push(Slot {
            generation: 0,
            data: Some(data),
        });
        NodeId {
            index: self.nodes.len() - 1,
            generation: 0,
        }
    }

    /// Number of live nodes, attached or not, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.iter().filter(|slot| slot.data.is_some()).count()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.node(node).is_some()
    }

    /// Append `child` to `parent`, moving it out of any previous parent.
    /// Returns false if either node does not exist or the move would
    /// create a cycle.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if !self.contains(parent) || !self.contains(child) || self.is_ancestor(child, parent) {
            return false;
        }
        self.detach(child);
        if let Some(data) = self.node_mut(child) {
            data.parent = Some(parent);
        }
        if let Some(data) = self.node_mut(parent) {
            data.children.push(child);
        }
        self.invalidate();
        true
    }

    /// Put `new` where `old` sits under `parent` and drop the `old` subtree.
    pub fn replace_child(&mut self, parent: NodeId, old: NodeId, new: NodeId) -> bool {
        if new == old
            || !self.contains(new)
            || !self.children(parent).contains(&old)
            || self.is_ancestor(new, parent)
        {
            return false;
        }
        self.detach(new);
        let Some(position) = self.children(parent).iter().position(|&c| c == old) else {
            return false;
        };
        if let Some(data) = self.node_mut(parent) {
            data.children[position] = new;
        }
        if let Some(data) = self.node_mut(new) {
            data.parent = Some(parent);
        }
        if let Some(data) = self.node_mut(old) {
            data.parent = None;
        }
        self.remove(old);
        true
    }

    /// Detach `node` from its parent and drop its whole subtree, together with
    /// any scroll listeners, resize observations and queued events on it.
    pub fn remove(&mut self, node: NodeId) {
        if node == self.root || !self.contains(node) {
            return;
        }
        self.detach(node);

        let mut stack = vec![node];
        let mut removed = Vec::new();
        while let Some(id) = stack.pop() {
            if let Some(data) = self.take(id) {
                stack.extend(data.children);
                removed.push(id);
            }
        }

        self.listeners.forget(&removed);
        self.observers.forget(&removed);
        self.pending_scroll.retain(|id| !removed.contains(id));
        log::trace!("removed {} nodes", removed.len());
        self.invalidate();
    }

    /// Empty a slot and retire its handle.
    fn take(&mut self, node: NodeId) -> Option<NodeData> {
        let slot = self
            .nodes
            .get_mut(node.index)
            .filter(|slot| slot.generation == node.generation)?;
        let data = slot.data.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(node.index);
        Some(data)
    }

    fn detach(&mut self, node: NodeId) {
        let Some(parent) = self.parent(node) else {
            return;
        };
        if let Some(data) = self.node_mut(parent) {
            data.children.retain(|&c| c != node);
        }
        if let Some(data) = self.node_mut(node) {
            data.parent = None;
        }
        self.invalidate();
    }

    fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node)?.parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.node(node).map_or(&[], |data| data.children.as_slice())
    }

    pub fn first_child(&self, node: NodeId) -> Option<NodeId> {
        self.children(node).first().copied()
    }

    pub fn child(&self, node: NodeId, index: usize) -> Option<NodeId> {
        self.children(node).get(index).copied()
    }

    /// Whether the node is part of the rendered tree.
    pub fn is_connected(&self, node: NodeId) -> bool {
        self.contains(node) && self.is_ancestor(self.root, node)
    }

    /// Find a node by its DOM id within `scope` (inclusive).
    pub fn find_by_dom_id(&self, scope: NodeId, id: &str) -> Option<NodeId> {
        let data = self.node(scope)?;
        if data.element.dom_id.as_deref() == Some(id) {
            return Some(scope);
        }
        data.children
            .iter()
            .find_map(|&child| self.find_by_dom_id(child, id))
    }

    // =========================================================================
    // Element data
    // =========================================================================

    pub fn element(&self, node: NodeId) -> Option<&Element> {
        self.node(node).map(|data| &data.element)
    }

    pub fn style(&self, node: NodeId) -> Option<&Style> {
        self.element(node).map(|e| &e.style)
    }

    /// Update the inline style of a node. Layout is only invalidated when the
    /// declarations actually change. Returns false if the node is gone.
    pub fn set_style(&mut self, node: NodeId, update: impl FnOnce(&mut Style)) -> bool {
        let Some(data) = self.node_mut(node) else {
            return false;
        };
        let before = data.element.style.clone();
        update(&mut data.element.style);
        // Transforms are visual only
        let layout_changed = {
            let after = &data.element.style;
            before.width != after.width
                || before.min_width != after.min_width
                || before.height != after.height
                || before.min_height != after.min_height
        };
        if layout_changed {
            self.invalidate();
        }
        true
    }

    pub fn padding(&self, node: NodeId) -> Option<Edges> {
        self.element(node).map(|e| e.padding)
    }

    pub fn content(&self, node: NodeId) -> Option<&Content> {
        self.element(node).map(|e| &e.content)
    }

    pub fn set_content(&mut self, node: NodeId, content: Content) -> bool {
        let Some(data) = self.node_mut(node) else {
            return false;
        };
        if data.element.content != content {
            data.element.content = content;
            self.invalidate();
        }
        true
    }

    // =========================================================================
    // Measurement
    // =========================================================================

    /// Current layout, reflowing first if anything changed since the last read.
    pub fn layout(&mut self) -> &LayoutResult {
        self.reflow();
        self.layout.get_or_insert_with(LayoutResult::new)
    }

    pub fn layout_box(&mut self, node: NodeId) -> Option<LayoutBox> {
        self.layout().get(&node).copied()
    }

    /// Inner size including padding (`clientWidth` / `clientHeight`).
    pub fn client_size(&mut self, node: NodeId) -> Option<BoxSize> {
        self.layout_box(node).map(|b| b.rect.size())
    }

    pub fn client_width(&mut self, node: NodeId) -> Option<f32> {
        self.client_size(node).map(|s| s.width)
    }

    pub fn client_height(&mut self, node: NodeId) -> Option<f32> {
        self.client_size(node).map(|s| s.height)
    }

    /// Full extent of the node's content (`scrollWidth` / `scrollHeight`).
    pub fn scroll_size(&mut self, node: NodeId) -> Option<BoxSize> {
        self.layout_box(node)
            .map(|b| BoxSize::new(b.scroll_width, b.scroll_height))
    }

    pub fn invalidate(&mut self) {
        self.layout = None;
    }

    fn reflow(&mut self) {
        // Clamping an offset invalidates again; the second pass is stable.
        while self.layout.is_none() {
            let result = layout::layout(self);
            log::trace!("reflow: {} boxes", result.len());
            self.layout = Some(result);
            self.clamp_scroll_offsets();
        }
    }

    // =========================================================================
    // Internal access
    // =========================================================================

    pub(crate) fn node(&self, node: NodeId) -> Option<&NodeData> {
        self.nodes
            .get(node.index)
            .filter(|slot| slot.generation == node.generation)
            .and_then(|slot| slot.data.as_ref())
    }

    pub(crate) fn node_mut(&mut self, node: NodeId) -> Option<&mut NodeData> {
        self.nodes
            .get_mut(node.index)
            .filter(|slot| slot.generation == node.generation)
            .and_then(|slot| slot.data.as_mut())
    }

    /// The computed layout without reflowing. Only valid right after a reflow.
    pub(crate) fn cached_layout(&self) -> Option<&LayoutResult> {
        self.layout.as_ref()
    }
}
