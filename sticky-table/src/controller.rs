//! StickyTableController: owns one sticky table instance and routes document
//! events into the synchronizers.

use std::time::Instant;

use tabledom::{Document, Event, NodeId};

use crate::config::StickyConfig;
use crate::content::Table;
use crate::context::{InstanceId, SyncContext};
use crate::debounce::Debouncer;
use crate::dimensions::{self, SyncReport};
use crate::error::SyncError;
use crate::mirror::{build_mirrors, Mirrors};
use crate::observe::{ResizeSource, Subscriptions};
use crate::render::{self, Regions};
use crate::scroll::{self, Axis, Surface};

/// Upper bound on event rounds in [`pump`], so a host bug cannot spin forever.
const MAX_PUMP_ROUNDS: usize = 32;

#[derive(Debug)]
enum Phase {
    /// Nothing rendered yet.
    Idle,
    Rendered,
    Mounted(Subscriptions),
    /// Mount found no root in the document. Stays this way until recreated.
    Inert,
    TornDown,
}

/// Lifecycle state as seen from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    Rendered,
    Mounted,
    Inert,
    TornDown,
}

#[derive(Debug)]
pub struct StickyTableController {
    instance: InstanceId,
    config: StickyConfig,
    mirrors: Mirrors,
    regions: Option<Regions>,
    debouncer: Debouncer<Axis>,
    phase: Phase,
}

impl StickyTableController {
    pub fn new(config: StickyConfig) -> Self {
        let instance = InstanceId::next();
        if config.sticky_header_count > 1 || config.sticky_column_count > 1 {
            log::debug!("sticky table {instance}: sticky depth above 1 behaves as 1");
        }
        Self {
            instance,
            debouncer: Debouncer::new(config.debounce_window()),
            config,
            mirrors: Mirrors::default(),
            regions: None,
            phase: Phase::Idle,
        }
    }

    pub fn instance(&self) -> InstanceId {
        self.instance
    }

    pub fn config(&self) -> &StickyConfig {
        &self.config
    }

    /// Mirrors built by the last render.
    pub fn mirrors(&self) -> &Mirrors {
        &self.mirrors
    }

    pub fn regions(&self) -> Option<&Regions> {
        self.regions.as_ref()
    }

    pub fn state(&self) -> State {
        match self.phase {
            Phase::Idle => State::Idle,
            Phase::Rendered => State::Rendered,
            Phase::Mounted(_) => State::Mounted,
            Phase::Inert => State::Inert,
            Phase::TornDown => State::TornDown,
        }
    }

    pub fn is_mounted(&self) -> bool {
        matches!(self.phase, Phase::Mounted(_))
    }

    // =========================================================================
    // Content
    // =========================================================================

    /// Render `table`. The first call builds the whole structure as a detached
    /// subtree; later calls behave like [`set_content`](Self::set_content).
    /// Returns the root container, or `None` after teardown.
    pub fn render(&mut self, doc: &mut Document, table: &Table) -> Option<NodeId> {
        if matches!(self.phase, Phase::TornDown) {
            return None;
        }
        if self.regions.is_some() {
            self.set_content(doc, table);
        } else {
            self.mirrors = build_mirrors(table, &self.config);
            let regions = render::render(doc, self.instance, &self.config, table, &self.mirrors);
            self.regions = Some(regions);
            self.phase = Phase::Rendered;
        }
        self.regions.as_ref().map(|r| r.root)
    }

    /// Replace the content. Mirrors and tables are rebuilt right away so the
    /// next measurement pass (triggered by the new body table's first resize
    /// notification) sees them.
    pub fn set_content(&mut self, doc: &mut Document, table: &Table) {
        if matches!(self.phase, Phase::TornDown) {
            return;
        }
        let Some(regions) = &mut self.regions else {
            log::debug!("sticky table {}: content set before render", self.instance);
            return;
        };

        self.mirrors = build_mirrors(table, &self.config);
        render::replace_tables(doc, regions, table, &self.mirrors);
        if let Phase::Mounted(subscriptions) = &mut self.phase {
            subscriptions.rebind_body(doc, regions.tables.body);
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Attach listeners and observers and run the first synchronization.
    ///
    /// If the root is not part of the document the table stays inert: no
    /// listeners are attached and every later call is a no-op.
    pub fn mount(&mut self, doc: &mut Document) {
        match self.phase {
            Phase::Mounted(_) | Phase::TornDown | Phase::Inert => return,
            Phase::Idle | Phase::Rendered => {}
        }

        match self.attach(doc) {
            Ok(subscriptions) => {
                log::debug!("sticky table {} mounted", self.instance);
                self.phase = Phase::Mounted(subscriptions);
                self.synchronize(doc);
            }
            Err(e) => {
                log::debug!("sticky table {}: {e}, staying inert", self.instance);
                self.phase = Phase::Inert;
            }
        }
    }

    fn attach(&self, doc: &mut Document) -> Result<Subscriptions, SyncError> {
        let regions = self.regions.as_ref().ok_or(SyncError::NotRendered)?;
        if !doc.is_connected(regions.root) {
            return Err(SyncError::MissingMount(self.instance.dom_id()));
        }
        Ok(Subscriptions::attach(doc, regions))
    }

    /// Detach everything and drop pending propagations. Nothing runs after
    /// this. The rendered nodes stay in the document for the host to remove.
    pub fn teardown(&mut self, doc: &mut Document) {
        let phase = std::mem::replace(&mut self.phase, Phase::TornDown);
        if let Phase::Mounted(subscriptions) = phase {
            subscriptions.detach(doc);
        }
        self.debouncer.cancel_all();
        log::debug!("sticky table {} torn down", self.instance);
    }

    // =========================================================================
    // Synchronization
    // =========================================================================

    /// Run a full dimension pass. `None` unless mounted.
    pub fn synchronize(&mut self, doc: &mut Document) -> Option<SyncReport> {
        let (Phase::Mounted(_), Some(regions)) = (&self.phase, &self.regions) else {
            return None;
        };
        let ctx = SyncContext::new(self.instance, &self.config, regions);
        Some(dimensions::synchronize(doc, &ctx))
    }

    /// Handle one document event. Returns false if the event belongs to
    /// something else (another table, say) or the table is not mounted.
    pub fn handle_event(&mut self, doc: &mut Document, event: &Event, now: Instant) -> bool {
        let (Phase::Mounted(subscriptions), Some(regions)) = (&self.phase, &self.regions) else {
            return false;
        };
        let ctx = SyncContext::new(self.instance, &self.config, regions);

        match *event {
            Event::Scroll { target } => {
                let Some(surface) = Surface::of(regions, target) else {
                    return false;
                };
                log::trace!("sticky table {}: scroll on {surface:?}", self.instance);
                scroll::on_scroll(doc, &ctx, &mut self.debouncer, surface, now);
                true
            }
            Event::Resize { observer, .. } => match subscriptions.resize_source(observer) {
                Some(ResizeSource::StickyColumn) => {
                    dimensions::synchronize_column_resize(doc, &ctx);
                    true
                }
                Some(ResizeSource::Body) => {
                    dimensions::synchronize(doc, &ctx);
                    true
                }
                None => false,
            },
        }
    }

    /// Run debounced scrollbar propagations that are due. Returns how many ran.
    pub fn tick(&mut self, doc: &mut Document, now: Instant) -> usize {
        let (Phase::Mounted(_), Some(regions)) = (&self.phase, &self.regions) else {
            return 0;
        };
        let ctx = SyncContext::new(self.instance, &self.config, regions);
        scroll::flush(doc, &ctx, &mut self.debouncer, now)
    }

    /// When the next debounced propagation falls due, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.next_deadline()
    }
}

/// Deliver pending document events to the tables sharing `doc` and run due
/// propagations, repeating until the document has nothing left to report.
/// Returns the number of events handled.
pub fn pump(doc: &mut Document, tables: &mut [&mut StickyTableController], now: Instant) -> usize {
    let mut handled = 0;

    for _ in 0..MAX_PUMP_ROUNDS {
        let mut flushed = 0;
        for table in tables.iter_mut() {
            flushed += table.tick(doc, now);
        }

        let events = doc.poll_events();
        if events.is_empty() && flushed == 0 {
            return handled;
        }

        for event in &events {
            if tables
                .iter_mut()
                .any(|table| table.handle_event(doc, event, now))
            {
                handled += 1;
            }
        }
    }

    log::warn!("event pump did not settle after {MAX_PUMP_ROUNDS} rounds");
    handled
}
