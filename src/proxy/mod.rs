// Proxy Pattern - authenticated content access
//
// ContentProxy fronts SecuredContent: it refuses callers without a
// session and builds the real object lazily on first authorized access.

pub mod content;

pub use content::{AccessError, ContentAccess, ContentProxy, SecuredContent};
