mod content;
mod document;
mod node;

pub use content::Content;
pub use document::{Document, NodeId};
pub use node::Element;
