// Network connection state machine

use crate::state::retry::RetryPolicy;
use std::time::Duration;

/// Connection lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected)
    }

    /// Check if the connection is neither up nor being brought up
    pub fn is_idle(&self) -> bool {
        matches!(self, ConnectionState::Disconnected)
    }
}

/// A single state change, oldest first in a returned sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: ConnectionState,
    pub to: ConnectionState,
}

/// Context whose behavior depends on its current ConnectionState
///
/// Every operation returns the transitions it caused; a redundant request
/// (connecting while connected, disconnecting while disconnected) causes
/// none and returns an empty sequence.
pub struct NetworkConnection {
    state: ConnectionState,
    retry: RetryPolicy,
}

impl NetworkConnection {
    pub fn new() -> Self {
        Self::with_retry_policy(RetryPolicy::default())
    }

    pub fn with_retry_policy(retry: RetryPolicy) -> Self {
        Self {
            state: ConnectionState::default(),
            retry,
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Bring the connection up
    ///
    /// From Disconnected this walks through Connecting straight to
    /// Connected; from Connecting it completes the attempt. Reaching
    /// Connected resets the retry budget.
    pub fn connect(&mut self) -> Vec<Transition> {
        let mut transitions = Vec::new();

        if self.state == ConnectionState::Disconnected {
            transitions.push(self.transition(ConnectionState::Connecting));
        }

        if self.state == ConnectionState::Connecting {
            transitions.push(self.transition(ConnectionState::Connected));
            self.retry.reset();
        }

        transitions
    }

    /// Tear the connection down; cancels an in-progress attempt
    pub fn disconnect(&mut self) -> Vec<Transition> {
        match self.state {
            ConnectionState::Disconnected => Vec::new(),
            ConnectionState::Connecting | ConnectionState::Connected => {
                vec![self.transition(ConnectionState::Disconnected)]
            }
        }
    }

    /// The link dropped out from under us
    ///
    /// Falls back to Disconnected and reports how long to wait before the
    /// next attempt, or None when the retry budget is exhausted (or there
    /// was no connection to lose).
    pub fn connection_lost(&mut self) -> Option<Duration> {
        if self.state.is_idle() {
            return None;
        }

        self.transition(ConnectionState::Disconnected);
        self.retry.next_delay()
    }

    pub fn retry_attempts(&self) -> u32 {
        self.retry.attempts()
    }

    fn transition(&mut self, to: ConnectionState) -> Transition {
        let from = self.state;
        self.state = to;
        Transition { from, to }
    }
}

impl Default for NetworkConnection {
    fn default() -> Self {
        Self::new()
    }
}
