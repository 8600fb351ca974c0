//! Scroll synchronizer: keeps the body viewports, the custom scrollbars and
//! the sticky header translation in step.
//!
//! Every coupling writes an absolute offset onto the *other* surface. The
//! document only fires a scroll event when an offset actually changes, so
//! echoes die out after one round trip.

use std::time::Instant;

use tabledom::{Document, NodeId, Transform};

use crate::context::SyncContext;
use crate::debounce::Debouncer;
use crate::render::Regions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

/// The four scroll-capable surfaces of a sticky table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    BodyX,
    BodyY,
    ScrollbarX,
    ScrollbarY,
}

impl Surface {
    /// Classify a scroll event target. `None` if the node belongs to
    /// something else.
    pub fn of(regions: &Regions, node: NodeId) -> Option<Self> {
        match node {
            n if n == regions.x_wrapper => Some(Surface::BodyX),
            n if n == regions.y_wrapper => Some(Surface::BodyY),
            n if n == regions.x_scrollbar => Some(Surface::ScrollbarX),
            n if n == regions.y_scrollbar => Some(Surface::ScrollbarY),
            _ => None,
        }
    }

    pub fn node(self, regions: &Regions) -> NodeId {
        match self {
            Surface::BodyX => regions.x_wrapper,
            Surface::BodyY => regions.y_wrapper,
            Surface::ScrollbarX => regions.x_scrollbar,
            Surface::ScrollbarY => regions.y_scrollbar,
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Surface::BodyX | Surface::ScrollbarX => Axis::X,
            Surface::BodyY | Surface::ScrollbarY => Axis::Y,
        }
    }
}

/// React to a scroll on one surface.
///
/// Scrollbar surfaces drive the body immediately. Body surfaces schedule the
/// propagation to their scrollbar through the debouncer; the horizontal body
/// also moves the sticky header right away.
pub fn on_scroll(
    doc: &mut Document,
    ctx: &SyncContext<'_>,
    debouncer: &mut Debouncer<Axis>,
    surface: Surface,
    now: Instant,
) {
    let regions = ctx.regions;
    match surface {
        Surface::BodyX => {
            let x = doc.scroll_left(regions.x_wrapper);
            translate_header(doc, regions, x);
            debouncer.request(Axis::X, now);
        }
        Surface::BodyY => debouncer.request(Axis::Y, now),
        Surface::ScrollbarX => {
            let x = doc.scroll_left(regions.x_scrollbar);
            doc.set_scroll_left(regions.x_wrapper, x);
        }
        Surface::ScrollbarY => {
            let y = doc.scroll_top(regions.y_scrollbar);
            doc.set_scroll_top(regions.y_wrapper, y);
        }
    }
}

/// Run the debounced propagations whose quiet window has passed.
/// Returns how many ran.
pub fn flush(
    doc: &mut Document,
    ctx: &SyncContext<'_>,
    debouncer: &mut Debouncer<Axis>,
    now: Instant,
) -> usize {
    let due = debouncer.take_due(now);
    for &axis in &due {
        propagate_to_scrollbar(doc, ctx.regions, axis);
    }
    due.len()
}

/// Copy the body's current offset onto the matching scrollbar. The offset
/// is read now, not when the request was made.
fn propagate_to_scrollbar(doc: &mut Document, regions: &Regions, axis: Axis) {
    match axis {
        Axis::X => {
            let x = doc.scroll_left(regions.x_wrapper);
            doc.set_scroll_left(regions.x_scrollbar, x);
        }
        Axis::Y => {
            let y = doc.scroll_top(regions.y_wrapper);
            doc.set_scroll_top(regions.y_scrollbar, y);
        }
    }
}

fn translate_header(doc: &mut Document, regions: &Regions, x: f32) {
    doc.set_style(regions.sticky_header, |style| {
        style.transform = Some(Transform::translate_x(-x));
    });
}
