use super::Content;
use crate::types::{Direction, Edges, Kind, Overflow, Style};

/// Description of a node before it is inserted into a [`Document`](super::Document).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    // Identity (interop only, nodes are addressed by handle)
    pub dom_id: Option<String>,
    pub class_name: Option<String>,

    pub kind: Kind,
    pub content: Content,

    // Box model
    pub direction: Direction,
    pub padding: Edges,
    pub overflow_x: Overflow,
    pub overflow_y: Overflow,

    // Inline style
    pub style: Style,
}

impl Element {
    pub fn block() -> Self {
        Self::default()
    }

    /// Block that stacks its children horizontally.
    pub fn row() -> Self {
        Self {
            direction: Direction::Row,
            ..Default::default()
        }
    }

    pub fn table() -> Self {
        Self {
            kind: Kind::Table,
            ..Default::default()
        }
    }

    pub fn table_row() -> Self {
        Self {
            kind: Kind::TableRow,
            direction: Direction::Row,
            ..Default::default()
        }
    }

    pub fn table_cell() -> Self {
        Self {
            kind: Kind::TableCell,
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.dom_id = Some(id.into());
        self
    }

    pub fn class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    // Content
    pub fn content(mut self, content: Content) -> Self {
        self.content = content;
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.content(Content::Text(text.into()))
    }

    // Layout
    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    /// Set both horizontal and vertical overflow behavior.
    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow_x = overflow;
        self.overflow_y = overflow;
        self
    }

    pub fn overflow_x(mut self, overflow: Overflow) -> Self {
        self.overflow_x = overflow;
        self
    }

    pub fn overflow_y(mut self, overflow: Overflow) -> Self {
        self.overflow_y = overflow;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}
