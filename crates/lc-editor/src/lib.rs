pub mod history;
pub mod session;
pub mod shortcuts;

pub use history::{History, HistoryEntry};
pub use session::EditorSession;
pub use shortcuts::{ShortcutAction, ShortcutMap};
