// Notification rendering and its decorators

/// Anything that can render itself as a notification line
pub trait Notification {
    fn render(&self) -> String;
}

/// Plain, undecorated notification
pub struct BasicNotification {
    message: String,
}

impl BasicNotification {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Notification for BasicNotification {
    fn render(&self) -> String {
        self.message.clone()
    }
}

/// Marks the wrapped notification as urgent
pub struct Urgent {
    inner: Box<dyn Notification>,
}

impl Urgent {
    pub fn new(inner: Box<dyn Notification>) -> Self {
        Self { inner }
    }
}

impl Notification for Urgent {
    fn render(&self) -> String {
        format!("Urgent: {}", self.inner.render())
    }
}

/// Appends an icon marker to the wrapped notification
pub struct WithIcon {
    inner: Box<dyn Notification>,
    icon: char,
}

impl WithIcon {
    pub fn new(inner: Box<dyn Notification>, icon: char) -> Self {
        Self { inner, icon }
    }
}

impl Notification for WithIcon {
    fn render(&self) -> String {
        format!("{} [{}]", self.inner.render(), self.icon)
    }
}
