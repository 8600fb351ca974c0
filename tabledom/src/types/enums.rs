/// How an element participates in layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    #[default]
    Block,
    Table,
    TableRow,
    TableCell,
}

/// Stacking direction for block children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Row,
    #[default]
    Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Scroll,
    Auto,
}

impl Overflow {
    /// Whether this overflow mode clips content to the element's box.
    pub fn clips(self) -> bool {
        self != Overflow::Visible
    }
}
