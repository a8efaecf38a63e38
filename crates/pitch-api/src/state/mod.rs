//! Application state
//!
//! Holds the service context, the chat hub and the configuration shared by
//! every handler.

use std::sync::Arc;

use pitch_common::{AppConfig, JwtService};
use pitch_hub::HubState;
use pitch_service::ServiceContext;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    service_context: ServiceContext,
    hub: HubState,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        Self {
            hub: HubState::new(service_context.clone()),
            service_context,
            config: Arc::new(config),
        }
    }

    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Chat hub shared by every WebSocket connection
    pub fn hub(&self) -> &HubState {
        &self.hub
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn jwt_service(&self) -> &JwtService {
        self.service_context.jwt_service()
    }

    /// Name of the auth cookie
    pub fn cookie_name(&self) -> &str {
        &self.config.jwt.cookie_name
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("hub", &self.hub)
            .field("config", &"AppConfig")
            .finish()
    }
}
