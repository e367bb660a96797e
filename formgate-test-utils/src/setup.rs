//! Test environment setup.
//!
//! Every test gets its own `Session` over its own in-memory store, so tests never
//! share session state and need no cleanup.

use std::sync::Arc;

use tower_sessions::{MemoryStore, Session};

/// Test environment with a session backed by an in-memory store.
pub struct TestSetup {
    /// Session for test authentication flows
    pub session: Session,
}

impl TestSetup {
    /// Create a fresh session over its own `MemoryStore`.
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        TestSetup { session }
    }
}

impl Default for TestSetup {
    fn default() -> Self {
        Self::new()
    }
}
