// History - caretaker that decides when snapshots are taken and restored

use crate::memento::editor::{EditorMemento, TextEditor};

/// Keeps the editor's snapshots, newest at the back
///
/// The editor is passed in at call time, same as the receiver in the
/// command module; the history owns only the mementos.
#[derive(Default)]
pub struct History {
    snapshots: Vec<EditorMemento>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a snapshot of the editor's current content
    pub fn backup(&mut self, editor: &TextEditor) {
        self.snapshots.push(editor.snapshot());
    }

    /// Restore the editor to the most recent snapshot
    ///
    /// Returns false when no snapshot remains; the editor is untouched.
    pub fn undo(&mut self, editor: &mut TextEditor) -> bool {
        match self.snapshots.pop() {
            Some(memento) => {
                editor.restore(&memento);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
