use sticky_table::mirror::{sticky_column, sticky_header, HEADER_ROW_ID};
use sticky_table::{build_mirrors, header_cell_id, Cell, Row, StickyConfig, Table};

fn table() -> Table {
    Table::new([
        Row::new([Cell::text("Name"), Cell::text("Qty"), Cell::text("Price")])
            .id("head")
            .class("head"),
        Row::new([Cell::text("apple").id("a0"), Cell::text("3"), Cell::text("1.20")]).class("odd"),
        Row::new([Cell::text("pear").class("fruit"), Cell::text("7"), Cell::text("0.80")]),
    ])
}

// ============================================================================
// Header Mirror Tests
// ============================================================================

#[test]
fn test_header_cells_get_positional_ids() {
    let table = table();
    let header = sticky_header(&table.rows[0]);

    assert_eq!(header.props.id.as_deref(), Some(HEADER_ROW_ID));
    assert_eq!(header.cells.len(), 3);
    for (c, cell) in header.cells.iter().enumerate() {
        assert_eq!(cell.props.id, Some(header_cell_id(c)));
        assert_eq!(cell.props.key, Some(c));
    }
    assert_eq!(header_cell_id(2), "sticky-header-cell-2");
}

#[test]
fn test_header_shares_content_with_first_row() {
    let table = table();
    let header = sticky_header(&table.rows[0]);

    for (mirrored, original) in header.cells.iter().zip(&table.rows[0].cells) {
        assert!(mirrored.shares_content(original));
    }
    assert!(!header.cells[0].shares_content(&table.rows[1].cells[0]));
}

#[test]
fn test_header_keeps_row_presentation() {
    let table = table();
    let header = sticky_header(&table.rows[0]);

    assert_eq!(header.props.class_name.as_deref(), Some("head"));
    // The source row is untouched
    assert_eq!(table.rows[0].props.id.as_deref(), Some("head"));
    assert_eq!(table.rows[0].cells[0].props.id, None);
}

// ============================================================================
// Column Mirror Tests
// ============================================================================

#[test]
fn test_column_takes_first_cell_of_each_row() {
    let table = table();
    let column = sticky_column(&table.rows);

    assert_eq!(column.len(), 3);
    for (r, row) in column.iter().enumerate() {
        assert_eq!(row.cells.len(), 1);
        assert!(row.cells[0].shares_content(&table.rows[r].cells[0]));
        assert_eq!(row.props.key, Some(r));
        assert_eq!(row.props.id, None);
    }
}

#[test]
fn test_column_keeps_cell_props() {
    let table = table();
    let column = sticky_column(&table.rows);

    assert_eq!(column[1].props.class_name.as_deref(), Some("odd"));
    assert_eq!(column[1].cells[0].props.id.as_deref(), Some("a0"));
    assert_eq!(column[2].cells[0].props.class_name.as_deref(), Some("fruit"));
}

#[test]
fn test_column_keeps_empty_rows_aligned() {
    let table = table().row(Row::default()).row(Row::new([Cell::text("plum")]));
    let column = sticky_column(&table.rows);

    assert_eq!(column.len(), 5);
    assert!(column[3].cells.is_empty());
    assert_eq!(column[3].props.key, Some(3));
    assert!(column[4].cells[0].shares_content(&table.rows[4].cells[0]));
}

// ============================================================================
// Builder Tests
// ============================================================================

#[test]
fn test_build_mirrors_defaults() {
    let table = table();
    let mirrors = build_mirrors(&table, &StickyConfig::default());

    assert_eq!(mirrors.header.as_ref().map(|row| row.cells.len()), Some(3));
    assert_eq!(mirrors.column.as_ref().map(Vec::len), Some(3));
}

#[test]
fn test_build_mirrors_empty_table() {
    let mirrors = build_mirrors(&Table::default(), &StickyConfig::default());
    assert!(mirrors.is_empty());
}

#[test]
fn test_build_mirrors_disabled_regions() {
    let table = table();

    let mirrors = build_mirrors(&table, &StickyConfig::new().sticky_header(0));
    assert!(mirrors.header.is_none());
    assert!(mirrors.column.is_some());

    let mirrors = build_mirrors(&table, &StickyConfig::new().sticky_column(0));
    assert!(mirrors.header.is_some());
    assert!(mirrors.column.is_none());

    let mirrors = build_mirrors(&table, &StickyConfig::new().sticky_header(0).sticky_column(0));
    assert!(mirrors.is_empty());
}

#[test]
fn test_deeper_sticky_counts_mirror_one_level() {
    let table = table();
    let config = StickyConfig::new().sticky_header(3).sticky_column(2);
    let mirrors = build_mirrors(&table, &config);

    let header = mirrors.header.unwrap();
    assert!(header.cells[0].shares_content(&table.rows[0].cells[0]));
    for row in mirrors.column.unwrap() {
        assert_eq!(row.cells.len(), 1);
    }
}

#[test]
fn test_ragged_first_row_bounds_header() {
    let table = Table::new([
        Row::new([Cell::text("only")]),
        Row::new([Cell::text("a"), Cell::text("b")]),
    ]);
    let mirrors = build_mirrors(&table, &StickyConfig::default());

    assert_eq!(mirrors.header.unwrap().cells.len(), 1);
}
