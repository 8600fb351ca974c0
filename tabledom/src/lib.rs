pub mod element;
pub mod event;
pub mod layout;
pub mod observe;
pub mod scroll;
pub mod text;
pub mod types;

pub use element::{Content, Document, Element, NodeId};
pub use event::Event;
pub use layout::{BoxSize, LayoutBox, LayoutResult, Rect};
pub use observe::ObserverId;
pub use scroll::{ListenerId, ScrollOffset};
pub use text::TextMetrics;
pub use types::*;
