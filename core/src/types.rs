//! Shared primitive types used across the entire dashboard.

/// A stable, unique identifier for any fixture record.
pub type EntityId = String;

/// A currency amount in whole or fractional units (USD in the bundled fixture).
pub type Money = f64;

/// A duration in minutes. Workflow and step timings use this.
pub type Minutes = u32;

/// A day offset from the start of the implementation programme.
pub type DayOffset = u32;

/// The canonical session identifier.
pub type SessionId = String;

/// Mint a fresh session identifier.
pub fn new_session_id() -> SessionId {
    format!("session-{}", uuid::Uuid::new_v4())
}
