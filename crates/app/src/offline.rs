//! Connectivity state.
//!
//! The storefront has no backend. Every action that would need one (placing
//! an order, registering, signing in) goes through [`OfflineMode::require_online`]
//! and reports the same connectivity failure to the shopper.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message shown to the shopper when an action needs the network.
pub const CONNECTIVITY_FAILURE_MESSAGE: &str =
    "Отсутствует интернет соединение.\nПожалуйста, повторите попытку позже";

/// Connectivity state of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectivityState {
    /// Network unreachable; the only state this storefront is ever in.
    Offline,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OfflineError {
    #[error("{}", CONNECTIVITY_FAILURE_MESSAGE)]
    Offline,
}

/// Connectivity tracking for a session.
#[derive(Debug, Clone)]
pub struct OfflineMode {
    state: ConnectivityState,
}

impl OfflineMode {
    /// A session without a network connection.
    pub fn disconnected() -> Self {
        Self {
            state: ConnectivityState::Offline,
        }
    }

    pub fn state(&self) -> ConnectivityState {
        self.state
    }

    pub fn is_offline(&self) -> bool {
        self.state == ConnectivityState::Offline
    }

    /// Ensure the client is online; return error if offline.
    pub fn require_online(&self) -> Result<(), OfflineError> {
        if self.is_offline() {
            Err(OfflineError::Offline)
        } else {
            Ok(())
        }
    }
}

impl Default for OfflineMode {
    fn default() -> Self {
        Self::disconnected()
    }
}
