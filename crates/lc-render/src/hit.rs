//! Hit testing: point → label lookup.
//!
//! Labels paint in list order, so the last label containing a point is
//! the one the user sees and clicks.

use crate::metrics::LabelMeasure;
use lc_core::id::LabelId;
use lc_core::model::Label;
use lc_core::{Point, Rect};

/// Find the topmost label at `point`.
/// Returns `None` if the point hits bare canvas.
pub fn hit_test(labels: &[Label], point: Point, measure: &impl LabelMeasure) -> Option<LabelId> {
    let hit = labels
        .iter()
        .rev()
        .find(|label| contains(label.rect(measure.measure(label)), point))
        .map(|label| label.id);
    log::trace!("hit_test {point:?} -> {hit:?}");
    hit
}

/// Inclusive on all edges, unlike `Rect::contains`, so clicks on the far
/// border of a label still register.
fn contains(rect: Rect, p: Point) -> bool {
    p.x >= rect.x0 && p.x <= rect.x1 && p.y >= rect.y0 && p.y <= rect.y1
}

#[cfg(test)]
mod tests {
    use super::*;
    use lc_core::Size;
    use lc_core::model::LabelStore;
    use lc_core::style::TextStyle;

    fn fixed(_: &Label) -> Size {
        Size::new(100.0, 20.0)
    }

    fn store_with_overlap() -> (LabelStore, LabelId, LabelId) {
        let mut store = LabelStore::new();
        let a = store.add("bottom", TextStyle::default());
        let b = store.add("top", TextStyle::default());
        store.move_to(a, 10.0, 10.0);
        store.move_to(b, 60.0, 20.0);
        (store, a, b)
    }

    #[test]
    fn topmost_label_wins() {
        let (store, a, b) = store_with_overlap();
        // Overlap region: both contain (70, 25)
        assert_eq!(hit_test(store.labels(), Point::new(70.0, 25.0), &fixed), Some(b));
        // Only @a
        assert_eq!(hit_test(store.labels(), Point::new(20.0, 15.0), &fixed), Some(a));
    }

    #[test]
    fn miss_returns_none() {
        let (store, _, _) = store_with_overlap();
        assert_eq!(hit_test(store.labels(), Point::new(500.0, 500.0), &fixed), None);
    }

    #[test]
    fn far_edge_counts_as_hit() {
        let (store, a, _) = store_with_overlap();
        assert_eq!(hit_test(store.labels(), Point::new(10.0, 30.0), &fixed), Some(a));
    }
}
