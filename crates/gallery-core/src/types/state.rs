//! Connection lifecycle state.

use serde::{Deserialize, Serialize};

/// Observable state of the link-stream connection.
///
/// Owned solely by the stream client. `Closed` is reached only through
/// an explicit `disconnect()`; transport failures go to `Reconnecting`
/// instead, since a fresh attempt is always scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionState {
    /// Socket created, handshake not yet complete.
    Connecting,
    /// Socket open and streaming records.
    Open,
    /// Transport dropped; a fresh attempt is scheduled.
    Reconnecting,
    /// Closed on purpose; no further attempts.
    Closed,
}

impl ConnectionState {
    /// Stable string form for JS-side consumption.
    pub fn as_str(self) -> &'static str {
        match self {
            ConnectionState::Connecting => "connecting",
            ConnectionState::Open => "open",
            ConnectionState::Reconnecting => "reconnecting",
            ConnectionState::Closed => "closed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_strings() {
        assert_eq!(ConnectionState::Connecting.as_str(), "connecting");
        assert_eq!(ConnectionState::Open.as_str(), "open");
        assert_eq!(ConnectionState::Reconnecting.as_str(), "reconnecting");
        assert_eq!(ConnectionState::Closed.as_str(), "closed");
    }
}
