//! Label data model.
//!
//! The document is a flat, ordered list of labels. Order only decides
//! painting (later labels sit on top); identity is the `LabelId`.
//! The `LabelStore` owns the live list; a `Snapshot` is a frozen copy of
//! it that the undo history keeps around.

use crate::id::{IdAllocator, LabelId};
use crate::style::TextStyle;
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Where freshly added labels are placed.
pub const DEFAULT_POSITION: Point = Point::new(50.0, 50.0);

// ─── Label ───────────────────────────────────────────────────────────────

/// One placed text annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    pub id: LabelId,
    pub content: String,
    pub x: f64,
    pub y: f64,
    #[serde(flatten)]
    pub style: TextStyle,
}

impl Label {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Bounding rectangle for a label of the given rendered size.
    pub fn rect(&self, size: Size) -> Rect {
        Rect::from_origin_size(self.position(), size)
    }
}

// ─── Mutations ───────────────────────────────────────────────────────────

/// A change to the label list. The editor records one history step per
/// mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum LabelMutation {
    Add {
        content: String,
        style: TextStyle,
    },
    Edit {
        id: LabelId,
        content: String,
        style: TextStyle,
    },
    /// Position must already be clamped to the canvas.
    Move { id: LabelId, x: f64, y: f64 },
}

impl LabelMutation {
    /// Short human-readable summary, used as the undo/redo description.
    pub fn describe(&self) -> String {
        match self {
            LabelMutation::Add { .. } => "Add label".to_string(),
            LabelMutation::Edit { id, .. } => format!("Edit label {id}"),
            LabelMutation::Move { id, .. } => format!("Move label {id}"),
        }
    }

    /// The label this mutation targets, `None` for adds.
    pub fn target(&self) -> Option<LabelId> {
        match self {
            LabelMutation::Add { .. } => None,
            LabelMutation::Edit { id, .. } | LabelMutation::Move { id, .. } => Some(*id),
        }
    }
}

// ─── Snapshot ────────────────────────────────────────────────────────────

/// Frozen copy of the whole label list.
///
/// Only read access is exposed; the live store can never reach into a
/// snapshot, so later edits cannot change recorded history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    labels: Vec<Label>,
}

impl Snapshot {
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn get(&self, id: LabelId) -> Option<&Label> {
        self.labels.iter().find(|l| l.id == id)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

// ─── Store ───────────────────────────────────────────────────────────────

/// The live, ordered set of labels on the canvas.
#[derive(Debug, Clone, Default)]
pub struct LabelStore {
    labels: Vec<Label>,
    ids: IdAllocator,
}

impl LabelStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new label at `DEFAULT_POSITION`. Always succeeds.
    pub fn add(&mut self, content: impl Into<String>, style: TextStyle) -> LabelId {
        let id = self.ids.allocate();
        self.labels.push(Label {
            id,
            content: content.into(),
            x: DEFAULT_POSITION.x,
            y: DEFAULT_POSITION.y,
            style,
        });
        log::trace!("added label {id}");
        id
    }

    /// Replace content and style of `id`, keeping its position.
    /// Returns `false` if there is no such label.
    pub fn edit(&mut self, id: LabelId, content: impl Into<String>, style: TextStyle) -> bool {
        match self.get_mut(id) {
            Some(label) => {
                label.content = content.into();
                label.style = style;
                true
            }
            None => false,
        }
    }

    /// Reposition `id`. Returns `false` if there is no such label.
    pub fn move_to(&mut self, id: LabelId, x: f64, y: f64) -> bool {
        match self.get_mut(id) {
            Some(label) => {
                label.x = x;
                label.y = y;
                true
            }
            None => false,
        }
    }

    /// Apply a mutation. Returns the affected label, or `None` when the
    /// mutation targeted a label that does not exist.
    pub fn apply(&mut self, mutation: LabelMutation) -> Option<LabelId> {
        match mutation {
            LabelMutation::Add { content, style } => Some(self.add(content, style)),
            LabelMutation::Edit { id, content, style } => {
                self.edit(id, content, style).then_some(id)
            }
            LabelMutation::Move { id, x, y } => self.move_to(id, x, y).then_some(id),
        }
    }

    /// Whether `mutation` would change anything if applied now.
    pub fn accepts(&self, mutation: &LabelMutation) -> bool {
        mutation.target().is_none_or(|id| self.contains(id))
    }

    pub fn get(&self, id: LabelId) -> Option<&Label> {
        self.labels.iter().find(|l| l.id == id)
    }

    fn get_mut(&mut self, id: LabelId) -> Option<&mut Label> {
        self.labels.iter_mut().find(|l| l.id == id)
    }

    pub fn contains(&self, id: LabelId) -> bool {
        self.get(id).is_some()
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Copy the current label list.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            labels: self.labels.clone(),
        }
    }

    /// Replace the label list with a snapshot. The id allocator is left
    /// alone so ids handed out later never collide with restored ones.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.labels = snapshot.labels;
    }
}
