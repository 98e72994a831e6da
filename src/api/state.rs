//! Application state for the roster engine API.

use std::sync::Arc;

use crate::config::{ConfigLoader, OperatingHours};

/// Shared application state.
///
/// Holds the shop configuration loaded at startup; request bodies carry all
/// other data, so this is the only resource handlers share.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the shop's daily operating window.
    pub fn operating_hours(&self) -> &OperatingHours {
        self.config.operating_hours()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Required for axum state
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
