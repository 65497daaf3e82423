//! Application state for the Wage Ledger Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::DEFAULT_MINOR_UNIT_SCALE;

/// Engine presentation settings.
///
/// The calculation core is exact-decimal; these settings only govern the
/// rounded figures included in API responses.
#[derive(Debug, Clone)]
pub struct EngineSettings {
    /// Decimal places of the currency minor unit used for rounded totals.
    pub minor_unit_scale: u32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            minor_unit_scale: DEFAULT_MINOR_UNIT_SCALE,
        }
    }
}

/// Shared application state.
///
/// Contains resources that are shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    settings: Arc<EngineSettings>,
}

impl AppState {
    /// Creates a new application state with the given settings.
    pub fn new(settings: EngineSettings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }

    /// Returns a reference to the engine settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(EngineSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_default_scale_is_two_decimals() {
        let state = AppState::default();
        assert_eq!(state.settings().minor_unit_scale, 2);
    }
}
