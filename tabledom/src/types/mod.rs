mod edges;
mod enums;
mod px;
mod style;

pub use edges::Edges;
pub use enums::{Direction, Kind, Overflow};
pub use px::Px;
pub use style::{Style, Transform};
