// TextEditor - originator whose content can be snapshotted

/// Opaque snapshot of the editor's content
///
/// Only the editor can read the state back; holders of a memento can do
/// nothing with it except hand it to `TextEditor::restore`.
pub struct EditorMemento {
    state: String,
}

/// A minimal text editor: append-only content with snapshot support
#[derive(Default)]
pub struct TextEditor {
    content: String,
}

impl TextEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, text: &str) {
        self.content.push_str(text);
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Capture the current content
    pub fn snapshot(&self) -> EditorMemento {
        EditorMemento {
            state: self.content.clone(),
        }
    }

    /// Roll the content back to a previously captured snapshot
    pub fn restore(&mut self, memento: &EditorMemento) {
        self.content = memento.state.clone();
    }
}
