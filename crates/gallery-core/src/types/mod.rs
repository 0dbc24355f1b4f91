//! Type definitions for stream records and connection state.

mod record;
mod state;

pub use record::{parse_message, LinkRecord, MediaKind};
pub use state::ConnectionState;
