//! Sticky header and sticky column synchronization for scrollable tables.
//!
//! A [`StickyTableController`] renders a table into a [`tabledom::Document`]
//! alongside two mirrors (the first row, and the first cell of every row),
//! then keeps the mirrors sized like the body cells and the custom
//! scrollbars, body viewports and header translation scrolled together.

pub mod config;
pub mod content;
pub mod context;
pub mod controller;
pub mod debounce;
pub mod dimensions;
pub mod error;
pub mod mirror;
pub mod observe;
pub mod render;
pub mod scroll;

pub use config::{StickyConfig, Viewport};
pub use content::{Cell, CellProps, Row, RowProps, Table};
pub use context::{InstanceId, SyncContext};
pub use controller::{pump, State, StickyTableController};
pub use debounce::Debouncer;
pub use dimensions::{content_box, SyncReport};
pub use error::{MirrorKind, SyncError};
pub use mirror::{build_mirrors, header_cell_id, Mirrors};
pub use render::Regions;
pub use scroll::{Axis, Surface};
