// Abstract Factory Pattern - themed UI widgets
//
// A WidgetFactory produces a matching family of widgets; picking a Theme
// variant picks the whole family at once.

pub mod themes;
pub mod widgets;

pub use themes::{DarkThemeFactory, LightThemeFactory, Theme, WidgetFactory};
pub use widgets::{Button, Toggle};
