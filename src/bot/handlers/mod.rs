//! Discord gateway event handlers
//!
//! This module reacts to gateway events that are not commands: the ready
//! notification and the filter applied to every incoming message.

/// Ready log and the scolding message filter
pub mod events;
