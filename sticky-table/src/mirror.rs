//! Mirror builder: derives the sticky header row and the sticky column from
//! the body content.

use crate::config::StickyConfig;
use crate::content::{Row, RowProps, Table};

/// DOM id of the mirrored header row.
pub const HEADER_ROW_ID: &str = "sticky-header-row";

/// Stable DOM id of the mirrored header cell for `column`.
pub fn header_cell_id(column: usize) -> String {
    format!("sticky-header-cell-{column}")
}

/// Sticky regions derived from one render pass.
#[derive(Clone, Debug, Default)]
pub struct Mirrors {
    /// Copy of row 0, absent when the header is disabled or the table empty.
    pub header: Option<Row>,
    /// One single-cell row per body row, absent when the column is disabled
    /// or the table empty.
    pub column: Option<Vec<Row>>,
}

impl Mirrors {
    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.column.is_none()
    }
}

/// Build both mirrors for the current content.
pub fn build_mirrors(table: &Table, config: &StickyConfig) -> Mirrors {
    let Some(first) = table.rows.first() else {
        return Mirrors::default();
    };

    Mirrors {
        header: config.header_enabled().then(|| sticky_header(first)),
        column: config.column_enabled().then(|| sticky_column(&table.rows)),
    }
}

/// Copy a row for the sticky header, tagging every cell with its column.
pub fn sticky_header(row: &Row) -> Row {
    let cells = row
        .cells
        .iter()
        .enumerate()
        .map(|(c, cell)| {
            let mut mirrored = cell.clone();
            mirrored.props.id = Some(header_cell_id(c));
            mirrored.props.key = Some(c);
            mirrored
        })
        .collect();

    Row {
        props: RowProps {
            id: Some(HEADER_ROW_ID.to_string()),
            ..row.props.clone()
        },
        cells,
    }
}

/// Take the first cell of every row for the sticky column.
///
/// A row without cells still gets an (empty) mirror row so indices line up
/// with the body.
pub fn sticky_column(rows: &[Row]) -> Vec<Row> {
    rows.iter()
        .enumerate()
        .map(|(r, row)| Row {
            props: RowProps {
                id: None,
                key: Some(r),
                ..row.props.clone()
            },
            cells: row.cells.first().cloned().into_iter().collect(),
        })
        .collect()
}
