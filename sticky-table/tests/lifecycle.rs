use std::time::{Duration, Instant};

use sticky_table::{pump, Cell, Row, State, StickyConfig, StickyTableController, Table};
use tabledom::{Document, Px};

fn table(widths: &[f32]) -> Table {
    Table::new((0..6).map(|_| Row::new(widths.iter().map(|&w| Cell::fixed(w, 20.0)))))
}

fn header_width(doc: &Document, sticky: &StickyTableController, column: usize) -> Option<Px> {
    let cell = sticky.regions()?.tables.header_cells.get(column).copied()?;
    doc.style(cell)?.width
}

// ============================================================================
// Render Tests
// ============================================================================

#[test]
fn test_render_structure() {
    let mut doc = Document::new();
    let mut sticky = StickyTableController::new(StickyConfig::new().class_name("wide"));
    let root = sticky.render(&mut doc, &table(&[40.0, 60.0])).unwrap();
    let regions = sticky.regions().unwrap().clone();

    assert_eq!(sticky.state(), State::Rendered);
    assert_eq!(regions.root, root);
    assert_eq!(
        doc.children(root),
        &[
            regions.x_scrollbar,
            regions.y_scrollbar,
            regions.sticky_header,
            regions.y_wrapper
        ]
    );
    assert_eq!(
        doc.children(regions.y_wrapper),
        &[regions.sticky_column, regions.x_wrapper]
    );
    assert_eq!(doc.children(regions.x_wrapper), &[regions.tables.body]);

    let element = doc.element(root).unwrap();
    assert_eq!(element.dom_id, Some(sticky.instance().dom_id()));
    assert_eq!(element.class_name.as_deref(), Some("sticky-table wide"));
    assert_eq!(
        doc.find_by_dom_id(root, "sticky-table-x-wrapper"),
        Some(regions.x_wrapper)
    );
    assert_eq!(doc.find_by_dom_id(root, "x-scrollbar"), Some(regions.x_scrollbar));
}

#[test]
fn test_instances_get_distinct_ids() {
    let first = StickyTableController::new(StickyConfig::default());
    let second = StickyTableController::new(StickyConfig::default());

    assert_ne!(first.instance(), second.instance());
    assert_ne!(first.instance().dom_id(), second.instance().dom_id());
    assert!(first.instance().dom_id().starts_with("sticky-table-"));
}

#[test]
fn test_render_again_replaces_content() {
    let mut doc = Document::new();
    let mut sticky = StickyTableController::new(StickyConfig::default());
    let root = sticky.render(&mut doc, &table(&[40.0])).unwrap();
    let old_body = sticky.regions().unwrap().tables.body;

    let again = sticky.render(&mut doc, &table(&[40.0, 50.0, 60.0])).unwrap();

    assert_eq!(again, root);
    assert!(!doc.contains(old_body));
    assert_eq!(sticky.regions().unwrap().tables.header_cells.len(), 3);
}

// ============================================================================
// Mount Tests
// ============================================================================

#[test]
fn test_mount_detached_root_stays_inert() {
    let mut doc = Document::new();
    let mut sticky = StickyTableController::new(StickyConfig::new().viewport(50.0, 50.0));
    let root = sticky.render(&mut doc, &table(&[40.0, 60.0])).unwrap();

    sticky.mount(&mut doc);
    assert_eq!(sticky.state(), State::Inert);

    // Attaching later does not revive it
    let document_root = doc.root();
    doc.append_child(document_root, root);
    sticky.mount(&mut doc);
    assert_eq!(sticky.state(), State::Inert);
    assert!(sticky.synchronize(&mut doc).is_none());

    let regions = sticky.regions().unwrap().clone();
    doc.set_scroll_left(regions.x_wrapper, 20.0);
    assert_eq!(pump(&mut doc, &mut [&mut sticky], Instant::now()), 0);
    assert_eq!(doc.style(regions.sticky_header).unwrap().transform, None);
    assert_eq!(header_width(&doc, &sticky, 0), None);
}

#[test]
fn test_mount_before_render_stays_inert() {
    let mut doc = Document::new();
    let mut sticky = StickyTableController::new(StickyConfig::default());

    sticky.mount(&mut doc);

    assert_eq!(sticky.state(), State::Inert);
    assert!(sticky.regions().is_none());
}

#[test]
fn test_mount_synchronizes() {
    let mut doc = Document::new();
    let mut sticky = StickyTableController::new(StickyConfig::default());
    let root = sticky.render(&mut doc, &table(&[40.0, 60.0])).unwrap();
    let document_root = doc.root();
    doc.append_child(document_root, root);

    sticky.mount(&mut doc);

    assert!(sticky.is_mounted());
    assert_eq!(header_width(&doc, &sticky, 1), Some(Px(60.0)));
}

// ============================================================================
// Content Change Tests
// ============================================================================

#[test]
fn test_set_content_rebuilds_and_resyncs() {
    let mut doc = Document::new();
    let mut sticky = StickyTableController::new(StickyConfig::new().viewport(100.0, 60.0));
    let root = sticky.render(&mut doc, &table(&[40.0, 60.0, 80.0])).unwrap();
    let document_root = doc.root();
    doc.append_child(document_root, root);
    sticky.mount(&mut doc);
    let start = Instant::now();
    pump(&mut doc, &mut [&mut sticky], start);

    let regions = sticky.regions().unwrap().clone();
    doc.set_scroll_left(regions.x_wrapper, 30.0);
    pump(&mut doc, &mut [&mut sticky], start);

    let old_body = regions.tables.body;
    sticky.set_content(&mut doc, &table(&[90.0, 70.0]));
    pump(&mut doc, &mut [&mut sticky], start);

    assert!(!doc.contains(old_body));
    assert_eq!(sticky.mirrors().header.as_ref().map(|r| r.cells.len()), Some(2));
    assert_eq!(header_width(&doc, &sticky, 0), Some(Px(90.0)));
    assert_eq!(header_width(&doc, &sticky, 1), Some(Px(70.0)));

    // The containers survive, and with them the scroll position
    let current = sticky.regions().unwrap();
    assert_eq!(current.x_wrapper, regions.x_wrapper);
    assert_eq!(doc.scroll_left(regions.x_wrapper), 30.0);
    assert_eq!(
        doc.style(current.x_track).unwrap().width,
        Some(Px(160.0))
    );
}

#[test]
fn test_body_growth_triggers_resync() {
    let mut doc = Document::new();
    let mut sticky = StickyTableController::new(StickyConfig::default());
    let root = sticky.render(&mut doc, &table(&[40.0, 60.0])).unwrap();
    let document_root = doc.root();
    doc.append_child(document_root, root);
    sticky.mount(&mut doc);
    pump(&mut doc, &mut [&mut sticky], Instant::now());

    // A lower row's content grows without a new render
    let body = sticky.regions().unwrap().tables.body;
    let row = doc.child(body, 3).unwrap();
    let cell = doc.child(row, 1).unwrap();
    doc.set_content(cell, tabledom::Content::fixed(150.0, 20.0));
    pump(&mut doc, &mut [&mut sticky], Instant::now());

    assert_eq!(header_width(&doc, &sticky, 1), Some(Px(150.0)));
}

#[test]
fn test_repeated_content_updates_reuse_nodes() {
    let mut doc = Document::new();
    let mut sticky = StickyTableController::new(StickyConfig::default());
    let content = table(&[40.0, 60.0, 80.0, 20.0]);
    let root = sticky.render(&mut doc, &content).unwrap();
    let document_root = doc.root();
    doc.append_child(document_root, root);
    sticky.mount(&mut doc);
    pump(&mut doc, &mut [&mut sticky], Instant::now());

    let live = doc.node_count();
    let mut highest = 0;
    for _ in 0..1000 {
        sticky.set_content(&mut doc, &content);
        let body = sticky.regions().unwrap().tables.body;
        highest = highest.max(body.index());
    }
    pump(&mut doc, &mut [&mut sticky], Instant::now());

    assert_eq!(doc.node_count(), live);
    assert!(highest < 2 * live, "slot {highest} for {live} live nodes");
    assert_eq!(header_width(&doc, &sticky, 2), Some(Px(80.0)));
}

// ============================================================================
// Teardown Tests
// ============================================================================

#[test]
fn test_teardown_stops_everything() {
    let mut doc = Document::new();
    let mut sticky = StickyTableController::new(StickyConfig::new().viewport(50.0, 50.0));
    let root = sticky.render(&mut doc, &table(&[40.0, 60.0])).unwrap();
    let document_root = doc.root();
    doc.append_child(document_root, root);
    sticky.mount(&mut doc);
    let start = Instant::now();
    pump(&mut doc, &mut [&mut sticky], start);
    let regions = sticky.regions().unwrap().clone();

    doc.set_scroll_left(regions.x_wrapper, 20.0);
    pump(&mut doc, &mut [&mut sticky], start);
    assert!(sticky.next_deadline().is_some());

    sticky.teardown(&mut doc);
    assert_eq!(sticky.state(), State::TornDown);
    assert_eq!(sticky.next_deadline(), None);

    // The pending propagation was dropped
    pump(&mut doc, &mut [&mut sticky], start + Duration::from_millis(200));
    assert_eq!(doc.scroll_left(regions.x_scrollbar), 0.0);

    // Later scrolls and resizes go unnoticed
    doc.set_scroll_left(regions.x_wrapper, 45.0);
    let body = regions.tables.body;
    let first_cell = doc.first_child(body).and_then(|row| doc.first_child(row)).unwrap();
    doc.set_content(first_cell, tabledom::Content::fixed(120.0, 20.0));
    assert_eq!(
        pump(&mut doc, &mut [&mut sticky], start + Duration::from_millis(300)),
        0
    );
    assert_eq!(
        doc.style(regions.sticky_header).unwrap().get("transform").as_deref(),
        Some("translate(-20px, 0)")
    );
    assert_eq!(header_width(&doc, &sticky, 0), Some(Px(40.0)));

    assert!(sticky.render(&mut doc, &table(&[10.0])).is_none());
    sticky.mount(&mut doc);
    assert_eq!(sticky.state(), State::TornDown);
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn test_config_defaults() {
    let config = StickyConfig::default();

    assert_eq!(config.sticky_header_count, 1);
    assert_eq!(config.sticky_column_count, 1);
    assert!(config.header_enabled());
    assert!(config.column_enabled());
    assert_eq!(config.debounce_window(), Duration::from_millis(100));
    assert_eq!(config.viewport, None);
}

#[test]
fn test_config_from_json() {
    let config: StickyConfig = serde_json::from_str(
        r#"{
            "sticky_header_count": 0,
            "class_name": "wide",
            "viewport": { "width": 320, "height": 200 }
        }"#,
    )
    .unwrap();

    assert!(!config.header_enabled());
    assert!(config.column_enabled());
    assert_eq!(config.class_name.as_deref(), Some("wide"));
    assert_eq!(config.viewport.map(|v| v.width), Some(320.0));
    assert_eq!(config.scroll_debounce_ms, 100);
}

#[test]
fn test_config_debounce_window_saturates() {
    let config = StickyConfig::new().scroll_debounce(Duration::MAX);
    assert_eq!(config.scroll_debounce_ms, u64::MAX);

    let config = StickyConfig::new().scroll_debounce(Duration::from_millis(250));
    assert_eq!(config.debounce_window(), Duration::from_millis(250));
}
