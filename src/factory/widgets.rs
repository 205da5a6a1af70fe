// Widget contracts shared by every theme

/// A clickable button
pub trait Button {
    /// Render the button as it would appear on screen
    fn render(&self) -> String;
}

/// A two-position switch
pub trait Toggle {
    /// Render the toggle as it would appear on screen
    fn render(&self) -> String;
}
