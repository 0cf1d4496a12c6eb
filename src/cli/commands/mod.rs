//! CLI command implementations.

pub mod instruments;
pub mod order;
pub mod orders;
pub mod place;
pub mod portfolio;
pub mod trades;
pub mod validate;

use std::sync::Arc;

use anyhow::{Context, Result};
use desk_config::AppConfig;
use desk_engine::TradingDesk;
use desk_store::{load_instruments_csv, load_state, save_state, seed_defaults, MemStore};

/// A desk wired over the configured state file.
pub(crate) struct DeskContext {
    pub store: Arc<MemStore>,
    pub desk: TradingDesk,
}

/// Open the desk: restore state if a snapshot exists, then make sure the
/// instrument directory is populated.
pub(crate) fn open(config: &AppConfig) -> Result<DeskContext> {
    let store = match &config.desk.state_file {
        Some(path) if path.exists() => {
            let state = load_state(path)
                .with_context(|| format!("failed to load desk state from {}", path.display()))?;
            Arc::new(MemStore::from_state(state))
        }
        _ => Arc::new(MemStore::new()),
    };

    if let Some(csv) = &config.desk.instruments_csv {
        load_instruments_csv(&store, csv)
            .with_context(|| format!("failed to import instruments from {}", csv.display()))?;
    }
    seed_defaults(&store);

    Ok(DeskContext {
        desk: TradingDesk::new(store.clone()),
        store,
    })
}

impl DeskContext {
    /// Write the state back if a state file is configured.
    pub(crate) fn persist(&self, config: &AppConfig) -> Result<()> {
        if let Some(path) = &config.desk.state_file {
            save_state(&self.store, path)
                .with_context(|| format!("failed to save desk state to {}", path.display()))?;
        }
        Ok(())
    }
}
