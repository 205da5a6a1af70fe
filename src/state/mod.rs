// State Pattern - network connection lifecycle
//
// The connection's behavior depends on which ConnectionState it is in;
// transitions are returned as records so callers can observe the walk.
// Reconnection pacing lives in RetryPolicy.

pub mod connection;
pub mod retry;

pub use connection::{ConnectionState, NetworkConnection, Transition};
pub use retry::RetryPolicy;
