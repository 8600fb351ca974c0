//! Composition boundary: renders the sticky table structure into a document
//! and hands back handles to every region the synchronizers touch.
//!
//! Structure, in document order:
//!
//! ```text
//! root (sticky-table-<instance>)
//! ├── x-scrollbar > track
//! ├── y-scrollbar > track
//! ├── sticky-header > table > sticky-header-row > sticky-header-cell-<c>...
//! └── sticky-table-y-wrapper
//!     ├── sticky-column > table > row (cell 0 of each body row)...
//!     └── sticky-table-x-wrapper > table (body rows)
//! ```

use tabledom::{Document, Element, NodeId, Overflow, Px, Style};

use crate::config::StickyConfig;
use crate::content::{Cell, Row, Table};
use crate::context::InstanceId;
use crate::mirror::Mirrors;

pub const X_SCROLLBAR_ID: &str = "x-scrollbar";
pub const Y_SCROLLBAR_ID: &str = "y-scrollbar";
pub const STICKY_HEADER_ID: &str = "sticky-header";
pub const Y_WRAPPER_ID: &str = "sticky-table-y-wrapper";
pub const STICKY_COLUMN_ID: &str = "sticky-column";
pub const X_WRAPPER_ID: &str = "sticky-table-x-wrapper";

/// The three tables rebuilt on every content change.
#[derive(Debug, Clone, PartialEq)]
pub struct Tables {
    /// Sticky header table (empty when the header is disabled).
    pub header: NodeId,
    /// Mirrored header cells by column.
    pub header_cells: Vec<NodeId>,
    /// Sticky column table (empty when the column is disabled).
    pub column: NodeId,
    /// Mirrored column cell by row. `None` for a body row without cells.
    pub column_cells: Vec<Option<NodeId>>,
    /// The real table.
    pub body: NodeId,
}

/// Handles to every region of one rendered sticky table.
#[derive(Debug, Clone, PartialEq)]
pub struct Regions {
    pub root: NodeId,
    pub x_scrollbar: NodeId,
    pub x_track: NodeId,
    pub y_scrollbar: NodeId,
    pub y_track: NodeId,
    pub sticky_header: NodeId,
    pub y_wrapper: NodeId,
    pub sticky_column: NodeId,
    pub x_wrapper: NodeId,
    pub tables: Tables,
}

/// Render the full structure as a detached subtree.
/// The host attaches `Regions::root` wherever the table belongs.
pub fn render(
    doc: &mut Document,
    instance: InstanceId,
    config: &StickyConfig,
    table: &Table,
    mirrors: &Mirrors,
) -> Regions {
    let width = config.viewport.map(|v| Px(v.width));
    let height = config.viewport.map(|v| Px(v.height));

    let class = match &config.class_name {
        Some(extra) => format!("sticky-table {extra}"),
        None => "sticky-table".to_string(),
    };
    let root = doc.create(Element::block().id(instance.dom_id()).class(class));

    let x_scrollbar = doc.create(
        Element::block()
            .id(X_SCROLLBAR_ID)
            .overflow_x(Overflow::Scroll)
            .style(Style {
                width,
                ..Style::default()
            }),
    );
    let x_track = doc.create(Element::block());
    doc.append_child(x_scrollbar, x_track);

    let y_scrollbar = doc.create(
        Element::block()
            .id(Y_SCROLLBAR_ID)
            .overflow_y(Overflow::Scroll)
            .style(Style {
                height,
                ..Style::default()
            }),
    );
    let y_track = doc.create(Element::block());
    doc.append_child(y_scrollbar, y_track);

    let sticky_header = doc.create(
        Element::block()
            .id(STICKY_HEADER_ID)
            .class(STICKY_HEADER_ID),
    );

    let y_wrapper = doc.create(
        Element::row()
            .id(Y_WRAPPER_ID)
            .class(Y_WRAPPER_ID)
            .overflow_y(Overflow::Auto)
            .style(Style {
                height,
                ..Style::default()
            }),
    );
    let sticky_column = doc.create(
        Element::block()
            .id(STICKY_COLUMN_ID)
            .class(STICKY_COLUMN_ID),
    );
    let x_wrapper = doc.create(
        Element::block()
            .id(X_WRAPPER_ID)
            .class(X_WRAPPER_ID)
            .overflow_x(Overflow::Auto)
            .style(Style {
                width,
                ..Style::default()
            }),
    );
    doc.append_child(y_wrapper, sticky_column);
    doc.append_child(y_wrapper, x_wrapper);

    for region in [x_scrollbar, y_scrollbar, sticky_header, y_wrapper] {
        doc.append_child(root, region);
    }

    let tables = render_tables(doc, table, mirrors);
    doc.append_child(sticky_header, tables.header);
    doc.append_child(sticky_column, tables.column);
    doc.append_child(x_wrapper, tables.body);

    log::debug!(
        "rendered sticky table {instance}: {} rows, {} columns",
        table.row_count(),
        table.column_count()
    );

    Regions {
        root,
        x_scrollbar,
        x_track,
        y_scrollbar,
        y_track,
        sticky_header,
        y_wrapper,
        sticky_column,
        x_wrapper,
        tables,
    }
}

/// Swap in freshly rendered tables, keeping the containers (and with them
/// scroll offsets and listeners) in place.
pub fn replace_tables(doc: &mut Document, regions: &mut Regions, table: &Table, mirrors: &Mirrors) {
    let tables = render_tables(doc, table, mirrors);
    let old = &regions.tables;

    doc.replace_child(regions.sticky_header, old.header, tables.header);
    doc.replace_child(regions.sticky_column, old.column, tables.column);
    doc.replace_child(regions.x_wrapper, old.body, tables.body);

    regions.tables = tables;
}

/// Render the header, column and body tables as detached nodes.
pub fn render_tables(doc: &mut Document, table: &Table, mirrors: &Mirrors) -> Tables {
    let header = doc.create(Element::table());
    let mut header_cells = Vec::new();
    if let Some(row) = &mirrors.header {
        let (row_node, cells) = render_row(doc, row);
        doc.append_child(header, row_node);
        header_cells = cells;
    }

    let column = doc.create(Element::table());
    let mut column_cells = Vec::new();
    for row in mirrors.column.iter().flatten() {
        let (row_node, cells) = render_row(doc, row);
        doc.append_child(column, row_node);
        column_cells.push(cells.first().copied());
    }

    let body = doc.create(Element::table());
    for row in &table.rows {
        let (row_node, _) = render_row(doc, row);
        doc.append_child(body, row_node);
    }

    Tables {
        header,
        header_cells,
        column,
        column_cells,
        body,
    }
}

fn render_row(doc: &mut Document, row: &Row) -> (NodeId, Vec<NodeId>) {
    let mut element = Element::table_row();
    element.dom_id = row.props.id.clone();
    element.class_name = row.props.class_name.clone();
    let node = doc.create(element);

    let cells: Vec<NodeId> = row.cells.iter().map(|cell| render_cell(doc, cell)).collect();
    for &cell in &cells {
        doc.append_child(node, cell);
    }
    (node, cells)
}

fn render_cell(doc: &mut Document, cell: &Cell) -> NodeId {
    let mut element = Element::table_cell()
        .content(cell.content.as_ref().clone())
        .padding(cell.props.padding);
    element.dom_id = cell.props.id.clone();
    element.class_name = cell.props.class_name.clone();
    doc.create(element)
}
