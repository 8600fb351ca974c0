//! Dimension synchronizer: copies measured body cell sizes onto the mirrors
//! and the custom scrollbar tracks.

use tabledom::{BoxSize, Document, NodeId, Px};

use crate::context::SyncContext;
use crate::error::{MirrorKind, SyncError};

/// Outcome of one synchronization pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyncReport {
    /// Column mirror cells whose height was written.
    pub rows_synced: usize,
    /// Header mirror cells whose width was written.
    pub columns_synced: usize,
    /// Whether both scrollbar tracks were sized.
    pub tracks_synced: bool,
    /// Positions skipped because a cell was missing.
    pub skipped: Vec<SyncError>,
}

impl SyncReport {
    fn skip(&mut self, error: SyncError) {
        log::trace!("skipping: {error}");
        self.skipped.push(error);
    }
}

/// Size of a node without its padding.
pub fn content_box(doc: &mut Document, node: NodeId) -> Option<BoxSize> {
    let client = doc.client_size(node)?;
    let padding = doc.padding(node)?;
    Some(BoxSize::new(
        client.width - padding.horizontal_total(),
        client.height - padding.vertical_total(),
    ))
}

/// Mirror every body row height onto the sticky column and every body column
/// width onto the sticky header, then size the scrollbar tracks.
///
/// Row and column counts are read from the live body table, so the pass
/// always matches the content currently rendered.
pub fn synchronize(doc: &mut Document, ctx: &SyncContext<'_>) -> SyncReport {
    let mut report = SyncReport::default();

    if ctx.config.column_enabled() {
        sync_row_heights(doc, ctx, &mut report);
    }
    if ctx.config.header_enabled() {
        sync_column_widths(doc, ctx, &mut report);
    }
    match sync_scrollbar_tracks(doc, ctx) {
        Ok(()) => report.tracks_synced = true,
        Err(e) => report.skip(e),
    }

    log::debug!(
        "sync {}: {} rows, {} columns, {} skipped",
        ctx.instance,
        report.rows_synced,
        report.columns_synced,
        report.skipped.len()
    );
    report
}

/// A resize that started in the sticky column: force the body's first cell
/// to the sticky cell's width, then run a full pass so the mirrors are
/// measured from the updated body.
pub fn synchronize_column_resize(doc: &mut Document, ctx: &SyncContext<'_>) -> SyncReport {
    let forced = force_body_column_width(doc, ctx);
    let mut report = synchronize(doc, ctx);
    if let Err(e) = forced {
        report.skip(e);
    }
    report
}

fn force_body_column_width(doc: &mut Document, ctx: &SyncContext<'_>) -> Result<(), SyncError> {
    let tables = &ctx.regions.tables;
    let sticky_cell = tables
        .column_cells
        .first()
        .copied()
        .flatten()
        .ok_or(SyncError::MissingMirror {
            kind: MirrorKind::Column,
            index: 0,
        })?;
    let body_cell = doc
        .first_child(tables.body)
        .and_then(|row| doc.first_child(row))
        .ok_or(SyncError::MissingCell { row: 0, column: 0 })?;

    let width = content_box(doc, sticky_cell)
        .ok_or(SyncError::MissingMirror {
            kind: MirrorKind::Column,
            index: 0,
        })?
        .width;

    doc.set_style(body_cell, |style| {
        style.width = Some(Px(width));
        style.min_width = Some(Px(width));
    });
    Ok(())
}

fn sync_row_heights(doc: &mut Document, ctx: &SyncContext<'_>, report: &mut SyncReport) {
    let rows = doc.children(ctx.regions.tables.body).to_vec();
    for (r, &row) in rows.iter().enumerate() {
        match sync_row_height(doc, ctx, r, row) {
            Ok(()) => report.rows_synced += 1,
            Err(e) => report.skip(e),
        }
    }
}

fn sync_row_height(
    doc: &mut Document,
    ctx: &SyncContext<'_>,
    r: usize,
    row: NodeId,
) -> Result<(), SyncError> {
    let cell = doc
        .first_child(row)
        .ok_or(SyncError::MissingCell { row: r, column: 0 })?;
    let mirror = ctx
        .regions
        .tables
        .column_cells
        .get(r)
        .copied()
        .flatten()
        .ok_or(SyncError::MissingMirror {
            kind: MirrorKind::Column,
            index: r,
        })?;
    let height = content_box(doc, cell)
        .ok_or(SyncError::MissingCell { row: r, column: 0 })?
        .height;

    doc.set_style(mirror, |style| style.height = Some(Px(height)));
    Ok(())
}

fn sync_column_widths(doc: &mut Document, ctx: &SyncContext<'_>, report: &mut SyncReport) {
    // Empty table: nothing to mirror
    let Some(first_row) = doc.first_child(ctx.regions.tables.body) else {
        return;
    };
    let cells = doc.children(first_row).to_vec();
    for (c, &cell) in cells.iter().enumerate() {
        match sync_column_width(doc, ctx, c, cell) {
            Ok(()) => report.columns_synced += 1,
            Err(e) => report.skip(e),
        }
    }
}

fn sync_column_width(
    doc: &mut Document,
    ctx: &SyncContext<'_>,
    c: usize,
    cell: NodeId,
) -> Result<(), SyncError> {
    let mirror = ctx
        .regions
        .tables
        .header_cells
        .get(c)
        .copied()
        .ok_or(SyncError::MissingMirror {
            kind: MirrorKind::Header,
            index: c,
        })?;
    let width = content_box(doc, cell)
        .ok_or(SyncError::MissingCell { row: 0, column: c })?
        .width;

    doc.set_style(mirror, |style| {
        style.width = Some(Px(width));
        style.min_width = Some(Px(width));
    });
    Ok(())
}

/// Size the scrollbar tracks so their scroll extents match the body's.
fn sync_scrollbar_tracks(doc: &mut Document, ctx: &SyncContext<'_>) -> Result<(), SyncError> {
    let regions = ctx.regions;
    let body = regions.tables.body;

    let body_height = content_box(doc, body)
        .ok_or_else(|| SyncError::MissingMount(ctx.instance.dom_id()))?
        .height;
    doc.set_style(regions.y_track, |style| style.height = Some(Px(body_height)));

    let first_row = doc
        .first_child(body)
        .ok_or(SyncError::MissingCell { row: 0, column: 0 })?;
    let row_width = content_box(doc, first_row)
        .ok_or(SyncError::MissingCell { row: 0, column: 0 })?
        .width;
    doc.set_style(regions.x_track, |style| style.width = Some(Px(row_width)));
    Ok(())
}
