// Memento Pattern - text editor snapshots
//
// The editor hands out opaque mementos of its content; the history
// decides when to take them and when to roll the editor back.

pub mod editor;
pub mod history;

pub use editor::{EditorMemento, TextEditor};
pub use history::History;
