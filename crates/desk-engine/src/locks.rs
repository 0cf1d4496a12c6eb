//! Per-(owner, symbol) mutual exclusion.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Registry of locks serializing order flow per (owner, symbol) pair.
///
/// Two orders racing the same holding take the same lock, so the
/// holdings check and the debit cannot interleave. Orders on different
/// symbols take different locks and proceed in parallel.
pub struct SymbolLocks {
    locks: Mutex<HashMap<(String, String), Arc<Mutex<()>>>>,
}

impl SymbolLocks {
    pub fn new() -> Self {
        Self {
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Get the lock for one (owner, symbol) pair, creating it on first use.
    pub fn acquire(&self, owner: &str, symbol: &str) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().unwrap();
        locks
            .entry((owner.to_string(), symbol.to_string()))
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

impl Default for SymbolLocks {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_pair_shares_a_lock() {
        let locks = SymbolLocks::new();
        let a = locks.acquire("user-a", "RELIANCE");
        let b = locks.acquire("user-a", "RELIANCE");
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_different_pairs_do_not_share() {
        let locks = SymbolLocks::new();
        let a = locks.acquire("user-a", "RELIANCE");
        let b = locks.acquire("user-a", "TCS");
        let c = locks.acquire("user-b", "RELIANCE");
        assert!(!Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &c));
    }
}
