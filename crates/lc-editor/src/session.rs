//! Editor session: the single owner of all canvas state.
//!
//! Holds the label store, its undo history, the style form ("current
//! style"), the input text box, and the selected label. UI events map
//! one-to-one onto methods here:
//!
//! | Event                  | Method                          |
//! |------------------------|---------------------------------|
//! | Add/Edit button        | [`EditorSession::commit`]       |
//! | Drag release           | [`EditorSession::move_label`]   |
//! | Click on a label       | [`EditorSession::select`]       |
//! | Undo / Redo buttons    | [`EditorSession::undo`] / [`EditorSession::redo`] |
//!
//! Every change to the store goes through [`EditorSession::apply`], which
//! records the pre-mutation snapshot first.

use crate::history::History;
use crate::shortcuts::ShortcutAction;
use lc_core::id::LabelId;
use lc_core::layout::CanvasBounds;
use lc_core::model::{Label, LabelMutation, LabelStore, Snapshot};
use lc_core::style::{FontFamily, FontSize, TextStyle};
use lc_core::{Point, Size};
use lc_render::hit::hit_test;
use lc_render::metrics::EstimatedMetrics;

#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    store: LabelStore,
    history: History<Snapshot>,
    /// Style form; applied by the next commit.
    style: TextStyle,
    /// Text box contents; applied by the next commit.
    input: String,
    /// When set, the next commit edits this label instead of adding one.
    selected: Option<LabelId>,
    canvas: CanvasBounds,
}

impl EditorSession {
    pub fn new(canvas: CanvasBounds) -> Self {
        Self {
            canvas,
            ..Self::default()
        }
    }

    /// Session whose undo history keeps at most `depth` steps.
    pub fn with_history_depth(canvas: CanvasBounds, depth: usize) -> Self {
        Self {
            history: History::new(depth),
            ..Self::new(canvas)
        }
    }

    // ─── Read access ─────────────────────────────────────────────────────

    pub fn labels(&self) -> &[Label] {
        self.store.labels()
    }

    pub fn label(&self, id: LabelId) -> Option<&Label> {
        self.store.get(id)
    }

    pub fn store(&self) -> &LabelStore {
        &self.store
    }

    pub fn history(&self) -> &History<Snapshot> {
        &self.history
    }

    pub fn canvas(&self) -> CanvasBounds {
        self.canvas
    }

    pub fn resize_canvas(&mut self, canvas: CanvasBounds) {
        self.canvas = canvas;
    }

    // ─── Style form ──────────────────────────────────────────────────────

    pub fn style(&self) -> TextStyle {
        self.style
    }

    pub fn set_style(&mut self, style: TextStyle) {
        self.style = style;
    }

    pub fn set_font_size(&mut self, size: FontSize) {
        self.style.font_size = size;
    }

    pub fn set_font_family(&mut self, family: FontFamily) {
        self.style.font_family = family;
    }

    pub fn toggle_bold(&mut self) {
        self.style.font_weight = self.style.font_weight.toggled();
    }

    pub fn toggle_italic(&mut self) {
        self.style.font_style = self.style.font_style.toggled();
    }

    pub fn toggle_underline(&mut self) {
        self.style.text_decoration = self.style.text_decoration.toggled();
    }

    // ─── Input & selection ───────────────────────────────────────────────

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn selected(&self) -> Option<LabelId> {
        self.selected
    }

    /// Select a label for editing: its content goes to the text box and
    /// its style to the style form. Returns `false` for an unknown id.
    pub fn select(&mut self, id: LabelId) -> bool {
        let Some(label) = self.store.get(id) else {
            return false;
        };
        self.input = label.content.clone();
        self.style = label.style;
        self.selected = Some(id);
        log::debug!("selected {id}");
        true
    }

    /// Drop the selection; the next commit adds a new label.
    /// The text box and style form keep their contents.
    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Topmost label under `point`, using estimated text metrics.
    pub fn label_at(&self, point: Point) -> Option<LabelId> {
        hit_test(self.store.labels(), point, &EstimatedMetrics)
    }

    /// Click on the canvas: select the label under the pointer, if any.
    pub fn click(&mut self, point: Point) -> Option<LabelId> {
        let id = self.label_at(point)?;
        self.select(id).then_some(id)
    }

    // ─── Mutations ───────────────────────────────────────────────────────

    /// Record the current state, then apply `mutation`.
    ///
    /// A mutation aimed at a label that does not exist changes nothing
    /// and leaves the history untouched.
    pub fn apply(&mut self, mutation: LabelMutation) -> Option<LabelId> {
        if !self.store.accepts(&mutation) {
            log::debug!("ignored {mutation:?}: no such label");
            return None;
        }
        let description = mutation.describe();
        self.history.record(self.store.snapshot(), &description);
        let affected = self.store.apply(mutation);
        log::debug!("{description} (undo depth {})", self.history.undo_len());
        affected
    }

    /// Add/Edit action. Edits the selected label if there is one,
    /// otherwise adds a new label; uses the text box and style form.
    /// Clears the text box and the selection afterwards.
    pub fn commit(&mut self) -> Option<LabelId> {
        let content = std::mem::take(&mut self.input);
        let style = self.style;
        let mutation = match self.selected.take() {
            Some(id) => LabelMutation::Edit { id, content, style },
            None => LabelMutation::Add { content, style },
        };
        self.apply(mutation)
    }

    /// Move action from a drag release. `pointer` is the drop point
    /// relative to the canvas, `size` the label's rendered size; the label
    /// is centred on the pointer and kept inside the canvas.
    pub fn move_label(&mut self, id: LabelId, pointer: Point, size: Size) -> bool {
        let target = self.canvas.drop_position(pointer, size);
        self.apply(LabelMutation::Move {
            id,
            x: target.x,
            y: target.y,
        })
        .is_some()
    }

    /// Like [`Self::move_label`], sizing the label from estimated metrics.
    pub fn drop_label(&mut self, id: LabelId, pointer: Point) -> bool {
        let Some(label) = self.store.get(id) else {
            return false;
        };
        let size = lc_render::estimate_size(label);
        self.move_label(id, pointer, size)
    }

    // ─── Undo / Redo ─────────────────────────────────────────────────────

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Revert the last mutation. Returns `false` when there is nothing to
    /// undo.
    pub fn undo(&mut self) -> bool {
        if !self.history.can_undo() {
            return false;
        }
        let mut current = self.store.snapshot();
        let step = self.history.undo(&mut current);
        self.store.restore(current);
        log::debug!("undo {step:?}");
        self.drop_stale_selection();
        step.is_some()
    }

    /// Re-apply the last undone mutation. Returns `false` when there is
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        if !self.history.can_redo() {
            return false;
        }
        let mut current = self.store.snapshot();
        let step = self.history.redo(&mut current);
        self.store.restore(current);
        log::debug!("redo {step:?}");
        self.drop_stale_selection();
        step.is_some()
    }

    fn drop_stale_selection(&mut self) {
        if let Some(id) = self.selected
            && !self.store.contains(id)
        {
            log::debug!("selection {id} no longer exists");
            self.selected = None;
        }
    }

    // ─── Keyboard ────────────────────────────────────────────────────────

    /// Run a shortcut action. Returns `true` if anything visible changed.
    pub fn dispatch(&mut self, action: ShortcutAction) -> bool {
        match action {
            ShortcutAction::Undo => self.undo(),
            ShortcutAction::Redo => self.redo(),
            ShortcutAction::Commit => self.commit().is_some(),
            ShortcutAction::Deselect => {
                let had = self.selected.is_some();
                self.deselect();
                had
            }
            ShortcutAction::ToggleBold => {
                self.toggle_bold();
                true
            }
            ShortcutAction::ToggleItalic => {
                self.toggle_italic();
                true
            }
            ShortcutAction::ToggleUnderline => {
                self.toggle_underline();
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lc_core::model::DEFAULT_POSITION;
    use lc_core::style::{FontWeight, TextDecoration};

    fn session() -> EditorSession {
        EditorSession::new(CanvasBounds::new(800.0, 600.0))
    }

    #[test]
    fn commit_without_selection_adds() {
        let mut s = session();
        s.set_input("Hello");
        let id = s.commit().unwrap();
        assert_eq!(s.labels().len(), 1);
        assert_eq!(s.label(id).unwrap().position(), DEFAULT_POSITION);
        assert_eq!(s.input(), "");
        assert!(s.can_undo());
    }

    #[test]
    fn select_loads_form_and_commit_edits() {
        let mut s = session();
        s.toggle_bold();
        s.set_input("first");
        let id = s.commit().unwrap();

        // Reset the form, then selecting should restore it from the label
        s.toggle_bold();
        assert_eq!(s.style().font_weight, FontWeight::Normal);
        assert!(s.select(id));
        assert_eq!(s.input(), "first");
        assert_eq!(s.style().font_weight, FontWeight::Bold);

        s.set_input("second");
        s.toggle_underline();
        assert_eq!(s.commit(), Some(id));

        let label = s.label(id).unwrap();
        assert_eq!(label.content, "second");
        assert_eq!(label.style.text_decoration, TextDecoration::Underline);
        assert_eq!(s.labels().len(), 1);
        assert_eq!(s.selected(), None);
    }

    #[test]
    fn select_unknown_label_fails() {
        let mut s = session();
        assert!(!s.select(LabelId::from_raw(5)));
        assert_eq!(s.selected(), None);
    }

    #[test]
    fn move_is_clamped_and_recorded() {
        let mut s = session();
        s.set_input("x");
        let id = s.commit().unwrap();

        assert!(s.move_label(id, Point::new(2_000.0, -40.0), Size::new(60.0, 20.0)));
        assert_eq!(s.label(id).unwrap().position(), Point::new(740.0, 0.0));
        assert_eq!(s.history().undo_len(), 2);
        assert_eq!(s.history().undo_description(), Some("Move label #1"));
    }

    #[test]
    fn move_of_unknown_label_records_nothing() {
        let mut s = session();
        assert!(!s.move_label(LabelId::from_raw(9), Point::ZERO, Size::ZERO));
        assert!(!s.drop_label(LabelId::from_raw(9), Point::ZERO));
        assert!(!s.can_undo());
    }

    #[test]
    fn undo_of_add_clears_selection_of_that_label() {
        let mut s = session();
        s.set_input("temp");
        let id = s.commit().unwrap();
        s.select(id);
        assert!(s.undo());
        assert_eq!(s.selected(), None);
        assert!(s.labels().is_empty());
    }

    #[test]
    fn click_selects_topmost_label() {
        let mut s = session();
        s.set_input("under");
        let a = s.commit().unwrap();
        s.set_input("over");
        let b = s.commit().unwrap();

        // Both sit at (50, 50); the later one is on top.
        assert_eq!(s.click(Point::new(55.0, 55.0)), Some(b));
        assert_eq!(s.input(), "over");
        assert_ne!(a, b);
        assert_eq!(s.click(Point::new(700.0, 500.0)), None);
    }

    #[test]
    fn dispatch_runs_shortcut_actions() {
        let mut s = session();
        assert!(!s.dispatch(ShortcutAction::Undo));
        assert!(s.dispatch(ShortcutAction::ToggleItalic));
        assert!(s.style().is_italic());

        s.set_input("k");
        assert!(s.dispatch(ShortcutAction::Commit));
        assert!(s.dispatch(ShortcutAction::Undo));
        assert!(s.dispatch(ShortcutAction::Redo));
        assert_eq!(s.labels()[0].content, "k");
        assert!(!s.dispatch(ShortcutAction::Deselect));
    }

    #[test]
    fn bounded_history_forgets_oldest_steps() {
        let mut s = EditorSession::with_history_depth(CanvasBounds::default(), 2);
        for text in ["a", "b", "c"] {
            s.set_input(text);
            s.commit();
        }
        assert!(s.undo());
        assert!(s.undo());
        assert!(!s.undo());
        assert_eq!(s.labels().len(), 1);
    }
}
