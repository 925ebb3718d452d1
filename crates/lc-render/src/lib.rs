pub mod css;
pub mod hit;
pub mod metrics;

pub use css::label_css;
pub use hit::hit_test;
pub use metrics::{LabelMeasure, estimate_size};
