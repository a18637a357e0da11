use std::sync::Arc;

use service::{KvStore, PhoneDirectory};

/// Shared handler state. Cloned per request; the store behind it is built
/// once at startup.
#[derive(Clone)]
pub struct AppState {
    pub directory: PhoneDirectory,
}

impl AppState {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { directory: PhoneDirectory::new(store) }
    }
}
