//! WASM bridge for Label Canvas: exposes the editor session to JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. The page owns the DOM:
//! it renders labels from `labels_json()` / `label_css()`, measures them,
//! and forwards clicks, drag releases, form changes and key presses here.
//!
//! Label ids cross the boundary as `u32`, a plain JS `number`, the same
//! value the `id` field carries in `labels_json()`; `0` means "no label".

use lc_core::id::LabelId;
use lc_core::layout::CanvasBounds;
use lc_core::style::{FontFamily, FontSize};
use lc_core::{Point, Size};
use lc_editor::session::EditorSession;
use lc_editor::shortcuts::ShortcutMap;
use lc_render::css::{label_css, style_css};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// The main WASM-facing canvas controller.
///
/// Holds the editor session. All interaction from the page goes through
/// this struct.
#[wasm_bindgen]
pub struct LabelCanvas {
    session: EditorSession,
}

/// Form state handed to the page so it can sync its controls.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FormState<'a> {
    input: &'a str,
    selected_id: u32,
    #[serde(flatten)]
    style: lc_core::style::TextStyle,
    can_undo: bool,
    can_redo: bool,
}

#[wasm_bindgen]
impl LabelCanvas {
    /// Create a new canvas controller with the given dimensions.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Self {
        console_error_panic_hook_setup();
        Self {
            session: EditorSession::new(CanvasBounds::new(width, height)),
        }
    }

    /// Resize the canvas. Existing labels are not moved.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.session.resize_canvas(CanvasBounds::new(width, height));
    }

    // ─── Edit form ───────────────────────────────────────────────────────

    pub fn set_input(&mut self, text: &str) {
        self.session.set_input(text);
    }

    /// Returns `false` if `px` is not one of the offered sizes.
    pub fn set_font_size(&mut self, px: u16) -> bool {
        match FontSize::try_from(px) {
            Ok(size) => {
                self.session.set_font_size(size);
                true
            }
            Err(e) => {
                log::warn!("{e}");
                false
            }
        }
    }

    /// Returns `false` for a family outside the offered set.
    pub fn set_font_family(&mut self, name: &str) -> bool {
        match name.parse::<FontFamily>() {
            Ok(family) => {
                self.session.set_font_family(family);
                true
            }
            Err(e) => {
                log::warn!("{e}");
                false
            }
        }
    }

    pub fn toggle_bold(&mut self) {
        self.session.toggle_bold();
    }

    pub fn toggle_italic(&mut self) {
        self.session.toggle_italic();
    }

    pub fn toggle_underline(&mut self) {
        self.session.toggle_underline();
    }

    /// Add/Edit button. Returns the added or edited label id, or 0 when
    /// nothing changed.
    pub fn commit(&mut self) -> u32 {
        self.session.commit().map_or(0, LabelId::raw)
    }

    /// Current form contents, selection and undo/redo availability as JSON.
    pub fn form_json(&self) -> String {
        let state = FormState {
            input: self.session.input(),
            selected_id: self.selected_id(),
            style: self.session.style(),
            can_undo: self.session.can_undo(),
            can_redo: self.session.can_redo(),
        };
        serde_json::to_string(&state).unwrap_or_else(|_| "{}".to_string())
    }

    /// Inline CSS previewing the current form style.
    pub fn style_css(&self) -> String {
        style_css(&self.session.style())
    }

    // ─── Selection ───────────────────────────────────────────────────────

    /// Select a label for editing. Returns `true` if the label exists.
    pub fn select_label(&mut self, id: u32) -> bool {
        self.session.select(LabelId::from_raw(id))
    }

    pub fn deselect(&mut self) {
        self.session.deselect();
    }

    /// Currently selected label id, or 0 if none.
    pub fn selected_id(&self) -> u32 {
        self.session.selected().map_or(0, LabelId::raw)
    }

    /// Topmost label at canvas-relative `(x, y)`, or 0.
    pub fn hit_test(&self, x: f64, y: f64) -> u32 {
        self.session
            .label_at(Point::new(x, y))
            .map_or(0, LabelId::raw)
    }

    // ─── Dragging ────────────────────────────────────────────────────────

    /// Drag release. `client_x/y` is the pointer in page coordinates,
    /// `canvas_left/top` the canvas origin, `label_w/h` the measured size
    /// of the dragged element. Returns `true` if the label moved.
    #[allow(clippy::too_many_arguments)]
    pub fn handle_drag_end(
        &mut self,
        id: u32,
        client_x: f64,
        client_y: f64,
        canvas_left: f64,
        canvas_top: f64,
        label_w: f64,
        label_h: f64,
    ) -> bool {
        let pointer = Point::new(client_x - canvas_left, client_y - canvas_top);
        self.session.move_label(
            LabelId::from_raw(id),
            pointer,
            Size::new(label_w, label_h),
        )
    }

    // ─── Undo / Redo ─────────────────────────────────────────────────────

    /// Undo the last action.
    pub fn undo(&mut self) -> bool {
        self.session.undo()
    }

    /// Redo the last undone action.
    pub fn redo(&mut self) -> bool {
        self.session.redo()
    }

    pub fn can_undo(&self) -> bool {
        self.session.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.session.can_redo()
    }

    // ─── Rendering data ──────────────────────────────────────────────────

    /// All labels in paint order as a JSON array.
    pub fn labels_json(&self) -> String {
        serde_json::to_string(self.session.labels()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Inline CSS for one label, or an empty string for an unknown id.
    pub fn label_css(&self, id: u32) -> String {
        self.session
            .label(LabelId::from_raw(id))
            .map(label_css)
            .unwrap_or_default()
    }

    // ─── Keyboard Shortcut API ───────────────────────────────────────────

    /// Handle a keyboard event. Returns a JSON string:
    /// `{"changed":bool, "action":"<action_name>"}`
    pub fn handle_key(
        &mut self,
        key: &str,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
    ) -> String {
        let action = match ShortcutMap::resolve(key, ctrl, shift, alt, meta) {
            Some(a) => a,
            None => return r#"{"changed":false,"action":"none"}"#.to_string(),
        };
        let changed = self.session.dispatch(action);
        let c = if changed { "true" } else { "false" };
        format!(r#"{{"changed":{c},"action":"{}"}}"#, action.name())
    }
}

// ─── Panic hook for WASM debugging ───────────────────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Label Canvas WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

// ─── Standalone picker data (no canvas needed) ───────────────────────────

/// Font sizes for the size picker, ascending.
#[wasm_bindgen]
pub fn font_sizes() -> Vec<u16> {
    FontSize::ALL.iter().map(|s| s.px()).collect()
}

/// Font family names for the family picker.
#[wasm_bindgen]
pub fn font_families() -> js_sys::Array {
    FontFamily::ALL
        .iter()
        .map(|f| JsValue::from_str(f.css_name()))
        .collect()
}
