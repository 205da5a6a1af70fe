// Light and dark widget families and their factories

use crate::factory::widgets::{Button, Toggle};

/// Available widget themes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Factory producing this theme's widget family
    pub fn factory(&self) -> Box<dyn WidgetFactory> {
        match self {
            Theme::Light => Box::new(LightThemeFactory),
            Theme::Dark => Box::new(DarkThemeFactory),
        }
    }
}

/// Produces a matching family of widgets
///
/// Widgets from one factory always share a theme; mixing light buttons
/// with dark toggles cannot happen through this interface.
pub trait WidgetFactory {
    fn create_button(&self) -> Box<dyn Button>;
    fn create_toggle(&self) -> Box<dyn Toggle>;
}

struct LightButton;

impl Button for LightButton {
    fn render(&self) -> String {
        "light-themed button".to_string()
    }
}

struct LightToggle;

impl Toggle for LightToggle {
    fn render(&self) -> String {
        "light-themed toggle".to_string()
    }
}

struct DarkButton;

impl Button for DarkButton {
    fn render(&self) -> String {
        "dark-themed button".to_string()
    }
}

struct DarkToggle;

impl Toggle for DarkToggle {
    fn render(&self) -> String {
        "dark-themed toggle".to_string()
    }
}

/// Factory for the light widget family
pub struct LightThemeFactory;

impl WidgetFactory for LightThemeFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(LightButton)
    }

    fn create_toggle(&self) -> Box<dyn Toggle> {
        Box::new(LightToggle)
    }
}

/// Factory for the dark widget family
pub struct DarkThemeFactory;

impl WidgetFactory for DarkThemeFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(DarkButton)
    }

    fn create_toggle(&self) -> Box<dyn Toggle> {
        Box::new(DarkToggle)
    }
}
