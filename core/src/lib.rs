//! Operations audit dashboard: fixture data, derived metrics, and the
//! view state a renderer draws from.
//!
//! Layering (leaf first, no upward dependencies):
//!   model → fixture → metrics → view → nav/session

pub mod command;
pub mod error;
pub mod fixture;
pub mod metrics;
pub mod model;
pub mod nav;
pub mod session;
pub mod types;
pub mod view;
