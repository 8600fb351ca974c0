use std::fs::File;
use std::time::{Duration, Instant};

use simplelog::{Config, LevelFilter, WriteLogger};
use sticky_table::{pump, Cell, Row, StickyConfig, StickyTableController, Table};
use tabledom::{Document, Edges, Px};

const FRUITS: [(&str, u32, f32); 8] = [
    ("apple", 12, 0.40),
    ("blackcurrant", 3, 2.10),
    ("cherry", 40, 0.05),
    ("dragonfruit", 1, 3.50),
    ("elderberry", 25, 0.12),
    ("fig", 6, 0.90),
    ("grapefruit", 2, 1.25),
    ("honeydew melon", 1, 4.00),
];

fn fruit_table() -> Table {
    let header = Row::new(
        ["Fruit", "Qty", "Unit price", "Total", "Origin"]
            .into_iter()
            .map(|title| Cell::text(title).padding(Edges::symmetric(2.0, 6.0))),
    )
    .class("head");

    let rows = FRUITS.iter().map(|&(name, qty, price)| {
        Row::new([
            Cell::text(name),
            Cell::text(qty.to_string()),
            Cell::text(format!("{price:.2}")),
            Cell::text(format!("{:.2}", qty as f32 * price)),
            Cell::text("somewhere far away"),
        ].map(|cell| cell.padding(Edges::symmetric(2.0, 6.0))))
    });

    Table::new(std::iter::once(header).chain(rows))
}

fn report(doc: &mut Document, sticky: &StickyTableController, label: &str) {
    let Some(regions) = sticky.regions().cloned() else {
        return;
    };
    let widths: Vec<String> = regions
        .tables
        .header_cells
        .iter()
        .map(|&cell| {
            doc.style(cell)
                .and_then(|s| s.width)
                .unwrap_or(Px::ZERO)
                .to_string()
        })
        .collect();
    let transform = doc
        .style(regions.sticky_header)
        .and_then(|s| s.get("transform"))
        .unwrap_or_else(|| "none".to_string());

    println!("{label}");
    println!("  header widths:  {}", widths.join(" "));
    println!("  header:         {transform}");
    println!(
        "  body x/y:       {} / {}",
        doc.scroll_left(regions.x_wrapper),
        doc.scroll_top(regions.y_wrapper)
    );
    println!(
        "  scrollbar x/y:  {} / {}",
        doc.scroll_left(regions.x_scrollbar),
        doc.scroll_top(regions.y_scrollbar)
    );
    println!(
        "  max scroll:     {:?}",
        doc.max_scroll(regions.x_wrapper)
    );
}

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("sticky-table.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut doc = Document::new();
    let mut sticky =
        StickyTableController::new(StickyConfig::new().class_name("fruit").viewport(240.0, 80.0));

    let Some(root) = sticky.render(&mut doc, &fruit_table()) else {
        return Ok(());
    };
    let document_root = doc.root();
    doc.append_child(document_root, root);
    sticky.mount(&mut doc);

    let start = Instant::now();
    let at = |millis: u64| start + Duration::from_millis(millis);
    pump(&mut doc, &mut [&mut sticky], at(0));
    report(&mut doc, &sticky, "mounted");

    let Some(regions) = sticky.regions().cloned() else {
        return Ok(());
    };

    // A quick horizontal swipe on the body
    for (i, x) in [20.0, 45.0, 80.0, 120.0].into_iter().enumerate() {
        doc.set_scroll_left(regions.x_wrapper, x);
        pump(&mut doc, &mut [&mut sticky], at(i as u64 * 16));
    }
    report(&mut doc, &sticky, "during swipe");

    if let Some(deadline) = sticky.next_deadline() {
        pump(&mut doc, &mut [&mut sticky], deadline);
    }
    report(&mut doc, &sticky, "after the quiet window");

    // Dragging the vertical scrollbar moves the body right away
    doc.set_scroll_top(regions.y_scrollbar, 30.0);
    pump(&mut doc, &mut [&mut sticky], at(400));
    report(&mut doc, &sticky, "after dragging the y scrollbar");

    // Widen the sticky column; the body's first column follows
    if let Some(cell) = regions.tables.column_cells.first().copied().flatten() {
        doc.set_style(cell, |style| style.width = Some(Px(160.0)));
        pump(&mut doc, &mut [&mut sticky], at(500));
        report(&mut doc, &sticky, "after widening the sticky column");
    }

    sticky.teardown(&mut doc);
    Ok(())
}
