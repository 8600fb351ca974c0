//! Table content supplied by the host on every render pass.
//!
//! Cells hold their content behind an `Rc`, so cloning a cell (as the mirror
//! builder does) shares the content instead of copying it.

use std::rc::Rc;

use tabledom::{Content, Edges};

// =============================================================================
// Cell
// =============================================================================

/// Presentation properties of a cell.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CellProps {
    /// DOM id written on the rendered cell.
    pub id: Option<String>,
    /// Positional key assigned by the mirror builder.
    pub key: Option<usize>,
    pub class_name: Option<String>,
    pub padding: Edges,
}

/// A single table cell.
#[derive(Clone, Debug)]
pub struct Cell {
    pub content: Rc<Content>,
    pub props: CellProps,
}

impl Cell {
    pub fn new(content: Content) -> Self {
        Self {
            content: Rc::new(content),
            props: CellProps::default(),
        }
    }

    /// A text cell.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(Content::Text(text.into()))
    }

    /// A cell whose content has a fixed intrinsic size.
    pub fn fixed(width: f32, height: f32) -> Self {
        Self::new(Content::fixed(width, height))
    }

    pub fn empty() -> Self {
        Self::new(Content::None)
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.props.id = Some(id.into());
        self
    }

    pub fn class(mut self, class_name: impl Into<String>) -> Self {
        self.props.class_name = Some(class_name.into());
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.props.padding = padding;
        self
    }

    /// Whether both cells point at the same content.
    pub fn shares_content(&self, other: &Cell) -> bool {
        Rc::ptr_eq(&self.content, &other.content)
    }
}

// =============================================================================
// Row
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RowProps {
    pub id: Option<String>,
    pub key: Option<usize>,
    pub class_name: Option<String>,
}

/// An ordered sequence of cells. Cell 0 is the row's sticky cell.
#[derive(Clone, Debug, Default)]
pub struct Row {
    pub props: RowProps,
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: impl IntoIterator<Item = Cell>) -> Self {
        Self {
            props: RowProps::default(),
            cells: cells.into_iter().collect(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.props.id = Some(id.into());
        self
    }

    pub fn class(mut self, class_name: impl Into<String>) -> Self {
        self.props.class_name = Some(class_name.into());
        self
    }

    pub fn cell(mut self, cell: Cell) -> Self {
        self.cells.push(cell);
        self
    }
}

// =============================================================================
// Table
// =============================================================================

/// Rows in visual order.
#[derive(Clone, Debug, Default)]
pub struct Table {
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(rows: impl IntoIterator<Item = Row>) -> Self {
        Self {
            rows: rows.into_iter().collect(),
        }
    }

    pub fn row(mut self, row: Row) -> Self {
        self.rows.push(row);
        self
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of cells in the first row.
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, |row| row.cells.len())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
