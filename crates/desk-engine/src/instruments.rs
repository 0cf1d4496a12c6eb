//! Instrument directory read path.

use std::sync::Arc;

use desk_core::types::Instrument;
use desk_store::MemStore;

/// Read-only view over the instrument reference data.
pub struct InstrumentService {
    store: Arc<MemStore>,
}

impl InstrumentService {
    pub fn new(store: Arc<MemStore>) -> Self {
        Self { store }
    }

    /// All instruments, ordered by symbol.
    pub fn list(&self) -> Vec<Instrument> {
        self.store.read(|s| s.instruments())
    }

    /// Look up one instrument by symbol.
    pub fn get(&self, symbol: &str) -> Option<Instrument> {
        self.store.read(|s| s.instrument(symbol).cloned())
    }
}
