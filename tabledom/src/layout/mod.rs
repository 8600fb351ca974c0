mod flow;
mod rect;

use std::collections::HashMap;

pub use flow::layout;
pub use rect::{BoxSize, Rect};

use crate::element::NodeId;

/// Computed box for one node.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutBox {
    /// Border box in document coordinates (scroll offsets of ancestors applied).
    pub rect: Rect,
    /// Extent of the content including padding, never smaller than the box.
    pub scroll_width: f32,
    pub scroll_height: f32,
}

pub type LayoutResult = HashMap<NodeId, LayoutBox>;
