// Patterns Lab - Library exports for the demos and tests

pub mod adapter;
pub mod builder;
pub mod command;
pub mod decorator;
pub mod factory;
pub mod memento;
pub mod proxy;
pub mod state;

// Re-export commonly used types for convenience
pub use adapter::{CatalogAdapter, CatalogClient, CatalogService, ProductListing};
pub use builder::{BuildPlan, Computer, ComputerBuilder};
pub use command::{
    Command, DeviceError, Light, LightOffCommand, LightOnCommand, RedoOutcome, RemoteControl,
    UndoOutcome,
};
pub use decorator::{BasicNotification, Notification, Urgent, WithIcon};
pub use factory::{Theme, WidgetFactory};
pub use memento::{History, TextEditor};
pub use proxy::{AccessError, ContentAccess, ContentProxy};
pub use state::{ConnectionState, NetworkConnection, RetryPolicy};
