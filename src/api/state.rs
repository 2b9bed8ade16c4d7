//! Application state for the records console API.

use sea_orm::DatabaseConnection;

use crate::config::Capabilities;

/// Shared application state.
///
/// Holds the connection pool and the capabilities this deployment was
/// configured with. Cloning is cheap; the pool is shared.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    capabilities: Capabilities,
}

impl AppState {
    /// Creates the state from an open connection pool.
    pub fn new(db: DatabaseConnection, capabilities: Capabilities) -> Self {
        Self { db, capabilities }
    }

    /// Returns the connection pool.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Returns the enabled capabilities.
    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone + Send + Sync + 'static>() {}
        assert_clone::<AppState>();
    }
}
