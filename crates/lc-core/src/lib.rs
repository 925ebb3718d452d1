pub mod id;
pub mod layout;
pub mod model;
pub mod style;

pub use id::{IdAllocator, LabelId};
pub use layout::CanvasBounds;
pub use model::*;
pub use style::*;

// Geometry types for the crates above; only lc-core depends on kurbo
pub use kurbo::{Point, Rect, Size};
