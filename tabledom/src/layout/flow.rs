use super::{BoxSize, LayoutBox, LayoutResult, Rect};
use crate::element::{Content, Document, Element, NodeId};
use crate::types::{Direction, Kind, Px};

/// Lay out every node reachable from the document root.
pub fn layout(doc: &Document) -> LayoutResult {
    let mut result = LayoutResult::new();
    let root = doc.root();
    let size = natural_size(doc, root);
    place(doc, root, 0.0, 0.0, size, &mut result);
    result
}

/// Border-box size a node wants, before a table forces its cells.
fn natural_size(doc: &Document, id: NodeId) -> BoxSize {
    let Some(element) = doc.element(id) else {
        return BoxSize::default();
    };

    let content = if element.kind == Kind::Table {
        TableGrid::measure(doc, id).size()
    } else {
        content_size(doc, id, element)
    };

    resolve_size(element, content)
}

/// Apply explicit sizes, minimums and padding to a content size.
fn resolve_size(element: &Element, content: BoxSize) -> BoxSize {
    let style = &element.style;

    // Table boxes treat explicit sizes as minimums, blocks take them as-is
    let (width, height) = match element.kind {
        Kind::Table | Kind::TableCell => (
            content.width.max(style.width.map_or(0.0, Px::get)),
            content.height.max(style.height.map_or(0.0, Px::get)),
        ),
        Kind::Block | Kind::TableRow => (
            style.width.map_or(content.width, Px::get),
            style.height.map_or(content.height, Px::get),
        ),
    };

    let width = style.min_width.map_or(width, |m| width.max(m.get()));
    let height = style.min_height.map_or(height, |m| height.max(m.get()));

    BoxSize::new(
        width + element.padding.horizontal_total(),
        height + element.padding.vertical_total(),
    )
}

fn content_size(doc: &Document, id: NodeId, element: &Element) -> BoxSize {
    let children = doc.children(id);
    if !children.is_empty() {
        return stack(doc, children, flow_direction(element));
    }

    match &element.content {
        Content::None => BoxSize::default(),
        Content::Text(text) => {
            let (width, height) = doc.metrics().measure(text);
            BoxSize::new(width, height)
        }
        Content::Fixed { width, height } => BoxSize::new(*width, *height),
    }
}

fn flow_direction(element: &Element) -> Direction {
    if element.kind == Kind::TableRow {
        Direction::Row
    } else {
        element.direction
    }
}

/// Extent of children stacked along `direction`.
fn stack(doc: &Document, children: &[NodeId], direction: Direction) -> BoxSize {
    children
        .iter()
        .map(|&child| natural_size(doc, child))
        .fold(BoxSize::default(), |acc, size| match direction {
            Direction::Row => BoxSize::new(acc.width + size.width, acc.height.max(size.height)),
            Direction::Column => BoxSize::new(acc.width.max(size.width), acc.height + size.height),
        })
}

/// Auto table layout: every column is as wide as its widest cell and every
/// row as tall as its tallest cell.
struct TableGrid {
    rows: Vec<NodeId>,
    column_widths: Vec<f32>,
    row_heights: Vec<f32>,
}

impl TableGrid {
    fn measure(doc: &Document, table: NodeId) -> Self {
        let rows = doc.children(table).to_vec();
        let mut column_widths: Vec<f32> = Vec::new();
        let mut row_heights = Vec::with_capacity(rows.len());

        for &row in &rows {
            let mut height = 0.0f32;
            for (c, &cell) in doc.children(row).iter().enumerate() {
                let size = natural_size(doc, cell);
                if column_widths.len() <= c {
                    column_widths.resize(c + 1, 0.0);
                }
                column_widths[c] = column_widths[c].max(size.width);
                height = height.max(size.height);
            }
            row_heights.push(height);
        }

        Self {
            rows,
            column_widths,
            row_heights,
        }
    }

    fn size(&self) -> BoxSize {
        BoxSize::new(
            self.column_widths.iter().sum(),
            self.row_heights.iter().sum(),
        )
    }
}

fn place(doc: &Document, id: NodeId, x: f32, y: f32, size: BoxSize, result: &mut LayoutResult) {
    let Some(data) = doc.node(id) else {
        return;
    };
    let element = &data.element;
    let padding = element.padding;

    // Children move opposite to the scroll offset
    let origin_x = x + padding.left - data.scroll.x;
    let origin_y = y + padding.top - data.scroll.y;

    let extent = if element.kind == Kind::Table {
        let grid = TableGrid::measure(doc, id);
        let width = grid.size().width;
        let mut row_y = origin_y;

        for (r, &row) in grid.rows.iter().enumerate() {
            let height = grid.row_heights[r];
            let rect = Rect::new(origin_x, row_y, width, height);
            result.insert(
                row,
                LayoutBox {
                    rect,
                    scroll_width: width,
                    scroll_height: height,
                },
            );

            let mut cell_x = origin_x;
            for (c, &cell) in doc.children(row).iter().enumerate() {
                let cell_width = grid.column_widths[c];
                place(doc, cell, cell_x, row_y, BoxSize::new(cell_width, height), result);
                cell_x += cell_width;
            }
            row_y += height;
        }

        grid.size()
    } else {
        let direction = flow_direction(element);
        let mut cursor_x = origin_x;
        let mut cursor_y = origin_y;

        for &child in &data.children {
            let child_size = natural_size(doc, child);
            place(doc, child, cursor_x, cursor_y, child_size, result);
            match direction {
                Direction::Row => cursor_x += child_size.width,
                Direction::Column => cursor_y += child_size.height,
            }
        }

        if data.children.is_empty() {
            content_size(doc, id, element)
        } else {
            stack(doc, &data.children, direction)
        }
    };

    result.insert(
        id,
        LayoutBox {
            rect: Rect::new(x, y, size.width, size.height),
            scroll_width: (extent.width + padding.horizontal_total()).max(size.width),
            scroll_height: (extent.height + padding.vertical_total()).max(size.height),
        },
    );
}
