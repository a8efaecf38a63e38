//! Hub state

use crate::connection::ConnectionManager;
use pitch_service::ServiceContext;
use std::sync::Arc;

/// Shared hub dependencies
#[derive(Clone)]
pub struct HubState {
    service_context: ServiceContext,
    connection_manager: Arc<ConnectionManager>,
}

impl HubState {
    pub fn new(service_context: ServiceContext) -> Self {
        Self {
            service_context,
            connection_manager: ConnectionManager::new_shared(),
        }
    }

    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    pub fn connection_manager(&self) -> &ConnectionManager {
        &self.connection_manager
    }
}

impl std::fmt::Debug for HubState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HubState")
            .field("connection_manager", &self.connection_manager)
            .finish()
    }
}
