//! Listener and observer bookkeeping for one mounted table.

use tabledom::{Document, ListenerId, NodeId, ObserverId};

use crate::render::Regions;

/// Which observed region reported a resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeSource {
    /// The sticky column container (the user may have resized a column there).
    StickyColumn,
    /// The body table.
    Body,
}

/// Everything a mounted table attached to the document.
#[derive(Debug)]
pub struct Subscriptions {
    scroll: Vec<ListenerId>,
    column: ObserverId,
    body: ObserverId,
}

impl Subscriptions {
    /// Listen for scrolls on the four surfaces and observe the sticky column
    /// and the body table, in that order.
    pub fn attach(doc: &mut Document, regions: &Regions) -> Self {
        let scroll = [
            regions.x_wrapper,
            regions.x_scrollbar,
            regions.y_wrapper,
            regions.y_scrollbar,
        ]
        .into_iter()
        .map(|node| doc.add_scroll_listener(node))
        .collect();

        let column = doc.observe(regions.sticky_column);
        let body = doc.observe(regions.tables.body);

        Self {
            scroll,
            column,
            body,
        }
    }

    pub fn resize_source(&self, observer: ObserverId) -> Option<ResizeSource> {
        if observer == self.column {
            Some(ResizeSource::StickyColumn)
        } else if observer == self.body {
            Some(ResizeSource::Body)
        } else {
            None
        }
    }

    /// Move the body observation to a freshly rendered body table.
    pub fn rebind_body(&mut self, doc: &mut Document, body: NodeId) {
        // The old table is usually gone already, which drops its observation
        doc.unobserve(self.body);
        self.body = doc.observe(body);
    }

    /// Remove every listener and observation.
    pub fn detach(self, doc: &mut Document) {
        for listener in self.scroll {
            doc.remove_scroll_listener(listener);
        }
        doc.unobserve(self.column);
        doc.unobserve(self.body);
    }
}
