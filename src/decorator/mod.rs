// Decorator Pattern - notification dressing
//
// Decorators wrap any Notification and add their marker to the rendered
// line; they nest in any order.

pub mod notification;

pub use notification::{BasicNotification, Notification, Urgent, WithIcon};
